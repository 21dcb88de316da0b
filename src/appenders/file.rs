//! Dated file appender implementation
//!
//! Entries go to `<root>/logs/<YYYY>/<month>/<DD><MM><YYYY>.log`, where `<root>`
//! is the log directory bound on the [`LoggerContext`]. Each append opens the
//! file, writes under an exclusive lock and closes it again; no handle is kept
//! between calls.

use crate::core::timestamp::{daily_file_name, format_line_timestamp, month_name};
use crate::core::{Appender, LogEntry, LoggerContext, LoggerError, Payload, Result};
use chrono::{Datelike, NaiveDateTime};
use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

pub struct DatedFileAppender {
    context: Arc<LoggerContext>,
}

impl DatedFileAppender {
    pub fn new(context: Arc<LoggerContext>) -> Self {
        Self { context }
    }

    /// File that receives entries stamped `timestamp`
    pub fn path_for(&self, timestamp: &NaiveDateTime) -> Result<PathBuf> {
        let root = self
            .context
            .log_directory()
            .ok_or_else(|| LoggerError::config("DatedFileAppender", "no log directory bound"))?;

        Ok(root
            .join("logs")
            .join(timestamp.year().to_string())
            .join(month_name(timestamp))
            .join(daily_file_name(timestamp)))
    }

    /// The lines written for `entry`
    pub fn format(entry: &LogEntry) -> String {
        let prefix = format!(
            "{} [{}] {}:{} {} -> ",
            format_line_timestamp(&entry.timestamp),
            entry.level,
            entry.site.filename,
            entry.site.line,
            entry.site.function
        );

        match &entry.payload {
            Payload::Template(rendered) => format!("{}{}\n", prefix, rendered.plain),
            Payload::Value(value) => format!("{}{}\n", prefix, value),
            Payload::Trace {
                message,
                breadcrumbs,
            } => {
                let mut out = format!("{}\"{}\" error stack : \n", prefix, message);
                for crumb in breadcrumbs {
                    out.push('\t');
                    out.push_str(crumb);
                    out.push('\n');
                }
                out
            }
        }
    }
}

impl Appender for DatedFileAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let path = self.path_for(&entry.timestamp)?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| {
                LoggerError::io_operation(
                    "creating log directory",
                    format!("cannot create directory '{}'", dir.display()),
                    e,
                )
            })?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open file '{}'", path.display()),
                    e,
                )
            })?;

        file.lock_exclusive()?;
        let written = file.write_all(Self::format(entry).as_bytes());
        let unlocked = FileExt::unlock(&file);
        written?;
        unlocked?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        // Files are closed after every append
        Ok(())
    }

    fn name(&self) -> &str {
        "dated_file"
    }
}
