//! Log entry structure

use super::call_site::CallSite;
use super::log_level::LogLevel;
use super::scanner::Rendered;
use chrono::NaiveDateTime;

/// What a log call produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// A rendered format string
    Template(Rendered),
    /// One stringized value
    Value(String),
    /// A drained error trace, breadcrumbs most recent first
    Trace {
        message: String,
        breadcrumbs: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub timestamp: NaiveDateTime,
    pub site: CallSite,
    pub payload: Payload,
}

impl LogEntry {
    pub fn new(level: LogLevel, timestamp: NaiveDateTime, site: CallSite, payload: Payload) -> Self {
        Self {
            level,
            timestamp,
            site,
            payload,
        }
    }

    /// The escape-free text of the entry's message
    pub fn plain_message(&self) -> &str {
        match &self.payload {
            Payload::Template(rendered) => &rendered.plain,
            Payload::Value(value) => value,
            Payload::Trace { message, .. } => message,
        }
    }
}
