//! # Rust Template Logger
//!
//! A logger driven by template strings. A format string mixes literal text with
//! `%` directives for the date and time, the call site, substituted values and
//! nested named terminal styles:
//!
//! ```
//! use rust_template_logger::prelude::*;
//! use rust_template_logger::info;
//!
//! let logger = Logger::builder()
//!     .style("Foo", [Modifier::BgWhite, Modifier::FgRed, Modifier::Bold])
//!     .style("Blink", [Modifier::SlowBlink])
//!     .console()
//!     .build()?;
//!
//! info!(logger, "%FILE:%FUNC:%LINE %.Foo([%dd.%mm.%yy - %h:%m:%s]%) -> %.Blink(%v %v!%)", "Hello", 1)?;
//! # Ok::<(), LoggerError>(())
//! ```
//!
//! ## Features
//!
//! - **Directive scanner**: dates, call-site metadata, `%v` values and style regions
//! - **Explicit context**: styles, log directory and clock live in a [`LoggerContext`]
//! - **Dated log files**: `logs/<year>/<month>/<DDMMYYYY>.log`
//! - **Error traces**: errors that collect a breadcrumb at every propagation point

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::appenders::ConsoleAppender;
    #[cfg(feature = "file")]
    pub use crate::appenders::DatedFileAppender;
    pub use crate::core::{
        Appender, CallSite, Clock, ErrorTrace, FixedClock, LogEntry, LogLevel, Logger,
        LoggerBuilder, LoggerConfig, LoggerContext, LoggerError, LoggerMetrics, Modifier, Payload,
        Rendered, Result, StyleConfig, SystemClock,
    };
}

#[cfg(feature = "console")]
pub use crate::appenders::ConsoleAppender;
#[cfg(feature = "file")]
pub use crate::appenders::DatedFileAppender;
pub use crate::core::{
    Appender, CallSite, Clock, ErrorTrace, FixedClock, LogEntry, LogLevel, Logger, LoggerBuilder,
    LoggerConfig, LoggerContext, LoggerError, LoggerMetrics, Modifier, Payload, Rendered, Result,
    StyleConfig, SystemClock,
};
