//! Errors that remember where they travelled
//!
//! An [`ErrorTrace`] carries a message and a list of breadcrumbs, one
//! `path:function:line` entry per propagation point. Breadcrumbs are only ever
//! appended; rendering drains them, most recent first, exactly once.

use super::call_site::CallSite;
use super::error::LoggerError;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorTrace {
    message: String,
    breadcrumbs: Vec<String>,
}

impl ErrorTrace {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            breadcrumbs: Vec::new(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Record a propagation point as `path:function:line`
    pub fn push(&mut self, path: &str, function: &str, line: u32) {
        self.breadcrumbs.push(format!("{}:{}:{}", path, function, line));
    }

    /// Record `site` and hand the trace back, for use in `return Err(...)` and `map_err`
    #[must_use]
    pub fn traced(mut self, site: &CallSite) -> Self {
        self.push(site.path, site.function, site.line);
        self
    }

    /// Breadcrumbs in the order they were pushed
    pub fn breadcrumbs(&self) -> &[String] {
        &self.breadcrumbs
    }

    pub fn is_empty(&self) -> bool {
        self.breadcrumbs.is_empty()
    }

    /// Take every breadcrumb, most recently pushed first.
    ///
    /// The trace is left without breadcrumbs; the message is kept.
    pub fn drain(&mut self) -> Vec<String> {
        let mut crumbs = std::mem::take(&mut self.breadcrumbs);
        crumbs.reverse();
        crumbs
    }
}

impl fmt::Display for ErrorTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ErrorTrace {}

impl From<LoggerError> for ErrorTrace {
    fn from(err: LoggerError) -> Self {
        Self::new(err.to_string())
    }
}

impl From<&str> for ErrorTrace {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ErrorTrace {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

/// Convert an error into an [`ErrorTrace`] and record the current call site on it.
///
/// # Examples
///
/// ```
/// use rust_template_logger::{trace, ErrorTrace};
///
/// fn load() -> Result<(), ErrorTrace> {
///     Err(trace!("config missing"))
/// }
///
/// fn start() -> Result<(), ErrorTrace> {
///     load().map_err(|e| trace!(e))
/// }
///
/// let err = start().unwrap_err();
/// assert_eq!(err.breadcrumbs().len(), 2);
/// ```
#[macro_export]
macro_rules! trace {
    ($err:expr) => {
        $crate::core::ErrorTrace::from($err).traced(&$crate::call_site!())
    };
}
