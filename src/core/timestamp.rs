//! Time source and timestamp formatting
//!
//! Every render reads the clock once, so all date and time directives in a
//! line describe the same instant. Tests inject a [`FixedClock`].

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use std::fmt;

/// Month directory names used by the dated file layout
pub const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Source of the local wall-clock time
pub trait Clock: Send + Sync + fmt::Debug {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the local time from the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant
///
/// # Examples
///
/// ```
/// use rust_template_logger::core::timestamp::{Clock, FixedClock};
///
/// let clock = FixedClock::from_ymd_hms(2023, 1, 5, 9, 3, 7).unwrap();
/// assert_eq!(clock.now().to_string(), "2023-01-05 09:03:07");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Returns `None` for an impossible date or time
    pub fn from_ymd_hms(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, min, sec))
            .map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// `YYYY-MM-DD HH:MM:SS`, the timestamp that starts every file line
#[must_use]
pub fn format_line_timestamp(datetime: &NaiveDateTime) -> String {
    datetime.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Lowercase English month name of `datetime`
#[must_use]
pub fn month_name(datetime: &NaiveDateTime) -> &'static str {
    MONTH_NAMES[datetime.month0() as usize]
}

/// `DDMMYYYY.log`, the daily log file name
#[must_use]
pub fn daily_file_name(datetime: &NaiveDateTime) -> String {
    datetime.format("%d%m%Y.log").to_string()
}
