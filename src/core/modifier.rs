//! Terminal modifier codes (SGR parameters)
//!
//! A modifier renders as `ESC[<code>m`; a set of modifiers renders as a single
//! `ESC[<c1>;<c2>;...m` sequence with the codes in the order given.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};
use std::str::FromStr;

/// Escape sequence that clears every active modifier.
pub const RESET_SEQUENCE: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum Modifier {
    Reset = 0,
    Bold = 1,
    Faint = 2,
    Italic = 3,
    Underline = 4,
    SlowBlink = 5,
    RapidBlink = 6,
    Inverse = 7,
    Conceal = 8,
    Crossed = 9,
    BoldOff = 21,
    UnderlineOff = 24,
    BlinkOff = 25,
    InverseOff = 27,
    Reveal = 28,
    CrossedOff = 29,
    FgBlack = 30,
    FgRed = 31,
    FgGreen = 32,
    FgYellow = 33,
    FgBlue = 34,
    FgMagenta = 35,
    FgCyan = 36,
    FgLightGray = 37,
    FgDefault = 39,
    BgBlack = 40,
    BgRed = 41,
    BgGreen = 42,
    BgYellow = 43,
    BgBlue = 44,
    BgMagenta = 45,
    BgCyan = 46,
    BgWhite = 47,
    BgDefault = 49,
    FgDarkGray = 90,
    FgLightRed = 91,
    FgLightGreen = 92,
    FgLightYellow = 93,
    FgLightBlue = 94,
    FgLightMagenta = 95,
    FgLightCyan = 96,
    FgWhite = 97,
}

impl Modifier {
    /// Every modifier, in code order
    pub const ALL: &'static [Modifier] = &[
        Modifier::Reset,
        Modifier::Bold,
        Modifier::Faint,
        Modifier::Italic,
        Modifier::Underline,
        Modifier::SlowBlink,
        Modifier::RapidBlink,
        Modifier::Inverse,
        Modifier::Conceal,
        Modifier::Crossed,
        Modifier::BoldOff,
        Modifier::UnderlineOff,
        Modifier::BlinkOff,
        Modifier::InverseOff,
        Modifier::Reveal,
        Modifier::CrossedOff,
        Modifier::FgBlack,
        Modifier::FgRed,
        Modifier::FgGreen,
        Modifier::FgYellow,
        Modifier::FgBlue,
        Modifier::FgMagenta,
        Modifier::FgCyan,
        Modifier::FgLightGray,
        Modifier::FgDefault,
        Modifier::BgBlack,
        Modifier::BgRed,
        Modifier::BgGreen,
        Modifier::BgYellow,
        Modifier::BgBlue,
        Modifier::BgMagenta,
        Modifier::BgCyan,
        Modifier::BgWhite,
        Modifier::BgDefault,
        Modifier::FgDarkGray,
        Modifier::FgLightRed,
        Modifier::FgLightGreen,
        Modifier::FgLightYellow,
        Modifier::FgLightBlue,
        Modifier::FgLightMagenta,
        Modifier::FgLightCyan,
        Modifier::FgWhite,
    ];

    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.code() == code)
    }

    pub fn to_str(self) -> &'static str {
        match self {
            Modifier::Reset => "RESET",
            Modifier::Bold => "BOLD",
            Modifier::Faint => "FAINT",
            Modifier::Italic => "ITALIC",
            Modifier::Underline => "UNDERLINE",
            Modifier::SlowBlink => "SLOW_BLINK",
            Modifier::RapidBlink => "RAPID_BLINK",
            Modifier::Inverse => "INVERSE",
            Modifier::Conceal => "CONCEAL",
            Modifier::Crossed => "CROSSED",
            Modifier::BoldOff => "BOLD_OFF",
            Modifier::UnderlineOff => "UNDERLINE_OFF",
            Modifier::BlinkOff => "BLINK_OFF",
            Modifier::InverseOff => "INVERSE_OFF",
            Modifier::Reveal => "REVEAL",
            Modifier::CrossedOff => "CROSSED_OFF",
            Modifier::FgBlack => "FG_BLACK",
            Modifier::FgRed => "FG_RED",
            Modifier::FgGreen => "FG_GREEN",
            Modifier::FgYellow => "FG_YELLOW",
            Modifier::FgBlue => "FG_BLUE",
            Modifier::FgMagenta => "FG_MAGENTA",
            Modifier::FgCyan => "FG_CYAN",
            Modifier::FgLightGray => "FG_LIGHT_GRAY",
            Modifier::FgDefault => "FG_DEFAULT",
            Modifier::BgBlack => "BG_BLACK",
            Modifier::BgRed => "BG_RED",
            Modifier::BgGreen => "BG_GREEN",
            Modifier::BgYellow => "BG_YELLOW",
            Modifier::BgBlue => "BG_BLUE",
            Modifier::BgMagenta => "BG_MAGENTA",
            Modifier::BgCyan => "BG_CYAN",
            Modifier::BgWhite => "BG_WHITE",
            Modifier::BgDefault => "BG_DEFAULT",
            Modifier::FgDarkGray => "FG_DARK_GRAY",
            Modifier::FgLightRed => "FG_LIGHT_RED",
            Modifier::FgLightGreen => "FG_LIGHT_GREEN",
            Modifier::FgLightYellow => "FG_LIGHT_YELLOW",
            Modifier::FgLightBlue => "FG_LIGHT_BLUE",
            Modifier::FgLightMagenta => "FG_LIGHT_MAGENTA",
            Modifier::FgLightCyan => "FG_LIGHT_CYAN",
            Modifier::FgWhite => "FG_WHITE",
        }
    }
}

/// Writes the single-modifier escape sequence, e.g. `ESC[31m`.
impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1b[{}m", self.code())
    }
}

impl FromStr for Modifier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.to_str() == wanted)
            .ok_or_else(|| format!("Invalid modifier: '{}'", s))
    }
}

/// Encode a modifier set as one escape sequence.
///
/// An empty set encodes to the empty string.
///
/// # Examples
///
/// ```
/// use rust_template_logger::core::modifier::{encode, Modifier};
///
/// assert_eq!(encode(&[Modifier::BgWhite, Modifier::FgRed]), "\x1b[47;31m");
/// assert_eq!(encode(&[]), "");
/// ```
#[must_use]
pub fn encode(modifiers: &[Modifier]) -> String {
    let Some((last, rest)) = modifiers.split_last() else {
        return String::new();
    };

    let mut out = String::from("\x1b[");
    for modifier in rest {
        // Writing to a String never fails
        let _ = write!(out, "{};", modifier.code());
    }
    let _ = write!(out, "{}m", last.code());
    out
}
