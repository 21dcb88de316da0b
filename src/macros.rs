//! Logging macros that capture the call site.
//!
//! Each macro passes `file!()`, `line!()` and the enclosing function name to
//! the logger together with the format string and its `%v` values, and
//! returns the logger's `Result<()>`.
//!
//! # Examples
//!
//! ```
//! use rust_template_logger::prelude::*;
//! use rust_template_logger::{info, log_values};
//!
//! let logger = Logger::new();
//!
//! // Format string with directives
//! info!(logger, "%h:%m:%s server started")?;
//!
//! // With substituted values
//! let port = 8080;
//! info!(logger, "listening on port %v", port)?;
//!
//! // One entry per value
//! log_values!(logger, LogLevel::Warning; "disk at", 91)?;
//! # Ok::<(), LoggerError>(())
//! ```

/// Render a format string at the given level.
///
/// # Examples
///
/// ```
/// # use rust_template_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_template_logger::log;
/// log!(logger, LogLevel::Info, "Simple message")?;
/// log!(logger, LogLevel::Error, "Error code: %v", 500)?;
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $format:expr $(, $value:expr)* $(,)?) => {
        $logger.log(
            $level,
            &$crate::call_site!(),
            $format,
            &[$(&$value as &dyn ::std::fmt::Display),*],
        )
    };
}

/// Log each value as its own entry (one file line per value).
///
/// # Examples
///
/// ```
/// # use rust_template_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_template_logger::log_values;
/// log_values!(logger, LogLevel::Warning; 2, "some warning")?;
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! log_values {
    ($logger:expr, $level:expr; $($value:expr),* $(,)?) => {
        $logger.log_values(
            $level,
            &$crate::call_site!(),
            &[$(&$value as &dyn ::std::fmt::Display),*],
        )
    };
}

/// Drain an [`ErrorTrace`](crate::ErrorTrace) into the logger.
///
/// # Examples
///
/// ```
/// # use rust_template_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_template_logger::{log_trace, trace};
/// let mut err = trace!("error occur");
/// log_trace!(logger, err)?;
/// assert!(err.is_empty());
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $trace:expr) => {
        $logger.log_trace(&$crate::call_site!(), &mut $trace)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use rust_template_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_template_logger::debug;
/// debug!(logger, "Counter value: %v", 10)?;
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_template_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_template_logger::error;
/// error!(logger, "Error code: %v, message: %v", 500, "Internal error")?;
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Critical, $($arg)+)
    };
}
