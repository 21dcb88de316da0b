//! Sink trait for rendered log entries

use super::{error::Result, log_entry::LogEntry};

/// A destination for log entries (console, dated files, test buffers).
///
/// Each appender chooses how to lay out every [`Payload`](super::log_entry::Payload)
/// kind; the logger hands the same entry to all appenders.
pub trait Appender: Send + Sync {
    fn append(&mut self, entry: &LogEntry) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
