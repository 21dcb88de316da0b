//! Serializable logger configuration
//!
//! ```
//! use rust_template_logger::core::LoggerConfig;
//!
//! let config = LoggerConfig::from_json(r#"{
//!     "min_level": "WARNING",
//!     "console": false,
//!     "styles": [
//!         { "name": "Foo", "modifiers": ["BG_WHITE", "FG_RED", "BOLD"] }
//!     ]
//! }"#).unwrap();
//!
//! let logger = config.build().unwrap();
//! assert!(logger.context().has_style("Foo"));
//! ```

use super::context::LoggerContext;
use super::error::Result;
use super::log_level::LogLevel;
use super::logger::{Logger, LoggerBuilder};
use super::modifier::Modifier;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleConfig {
    pub name: String,
    pub modifiers: Vec<Modifier>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub min_level: LogLevel,
    /// Root for dated log files; no file output when unset
    pub log_directory: Option<PathBuf>,
    /// Whether to add a console appender
    pub console: bool,
    /// Force console colors on or off; detected from the environment when unset
    pub colors: Option<bool>,
    pub styles: Vec<StyleConfig>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Debug,
            log_directory: None,
            console: true,
            colors: None,
            styles: Vec::new(),
        }
    }
}

impl LoggerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build a logger with a fresh context
    pub fn build(&self) -> Result<Logger> {
        self.builder().build()
    }

    /// Build a logger on top of an existing context
    pub fn build_with_context(&self, context: Arc<LoggerContext>) -> Result<Logger> {
        self.builder().context(context).build()
    }

    fn builder(&self) -> LoggerBuilder {
        let mut builder = Logger::builder().min_level(self.min_level);

        for style in &self.styles {
            builder = builder.style(style.name.clone(), style.modifiers.clone());
        }

        #[cfg(feature = "console")]
        if self.console {
            let console = match self.colors {
                Some(colors) => crate::appenders::ConsoleAppender::with_colors(colors),
                None => crate::appenders::ConsoleAppender::new(),
            };
            builder = builder.console_appender(console);
        }

        if let Some(ref dir) = self.log_directory {
            #[cfg(feature = "file")]
            {
                builder = builder.dated_files(dir.clone());
            }
            #[cfg(not(feature = "file"))]
            {
                builder = builder.log_directory(dir.clone());
            }
        }

        builder
    }
}
