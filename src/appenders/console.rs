//! Console appender implementation

use crate::core::{Appender, LogEntry, LogLevel, Modifier, Payload, Result};
use colored::Colorize;
use std::io::Write;

pub struct ConsoleAppender {
    use_colors: bool,
    stderr_threshold: Option<LogLevel>,
}

impl ConsoleAppender {
    /// Colors follow `colored`'s detection (`NO_COLOR`, `CLICOLOR`, `CLICOLOR_FORCE`)
    pub fn new() -> Self {
        Self {
            use_colors: colored::control::SHOULD_COLORIZE.should_colorize(),
            stderr_threshold: None,
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            stderr_threshold: None,
        }
    }

    /// Route entries at `level` or above to stderr instead of stdout
    ///
    /// # Example
    ///
    /// ```
    /// use rust_template_logger::appenders::ConsoleAppender;
    /// use rust_template_logger::LogLevel;
    ///
    /// let appender = ConsoleAppender::new().with_stderr_threshold(LogLevel::Error);
    /// ```
    #[must_use]
    pub fn with_stderr_threshold(mut self, level: LogLevel) -> Self {
        self.stderr_threshold = Some(level);
        self
    }

    pub fn uses_colors(&self) -> bool {
        self.use_colors
    }

    /// The exact text written for `entry`, including the trailing newline
    pub fn format(&self, entry: &LogEntry) -> String {
        match &entry.payload {
            Payload::Template(rendered) => {
                if self.use_colors {
                    rendered.styled_line()
                } else {
                    rendered.plain_line()
                }
            }
            Payload::Value(value) => {
                let level = if self.use_colors {
                    entry.level.to_str().color(entry.level.color_code()).to_string()
                } else {
                    entry.level.to_str().to_string()
                };
                format!("[{}] {}\n", level, value)
            }
            Payload::Trace {
                message,
                breadcrumbs,
            } => self.format_trace(message, breadcrumbs),
        }
    }

    fn format_trace(&self, message: &str, breadcrumbs: &[String]) -> String {
        let mut out = if self.use_colors {
            format!(
                "{}{}[ERROR]{} error message : \"{}{}{}\" error stack :\n",
                Modifier::FgWhite,
                Modifier::BgRed,
                Modifier::Reset,
                Modifier::FgRed,
                message,
                Modifier::Reset
            )
        } else {
            format!("[ERROR] error message : \"{}\" error stack :\n", message)
        };

        for crumb in breadcrumbs {
            if self.use_colors {
                out.push_str(&format!(
                    "\t{}{}{}\n",
                    Modifier::Underline,
                    crumb,
                    Modifier::UnderlineOff
                ));
            } else {
                out.push_str(&format!("\t{}\n", crumb));
            }
        }
        out
    }

    fn to_stderr(&self, level: LogLevel) -> bool {
        self.stderr_threshold.is_some_and(|threshold| level >= threshold)
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let output = self.format(entry);

        if self.to_stderr(entry.level) {
            std::io::stderr().lock().write_all(output.as_bytes())?;
        } else {
            std::io::stdout().lock().write_all(output.as_bytes())?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        // Flush both stdout and stderr since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
