//! Core logger types and traits

pub mod appender;
pub mod call_site;
pub mod config;
pub mod context;
pub mod error;
pub mod error_trace;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod modifier;
pub mod padding;
pub mod scanner;
pub mod style;
pub mod style_stack;
pub mod timestamp;
pub mod value;

pub use appender::Appender;
pub use call_site::CallSite;
pub use config::{LoggerConfig, StyleConfig};
pub use context::LoggerContext;
pub use error::{LoggerError, Result};
pub use error_trace::ErrorTrace;
pub use log_entry::{LogEntry, Payload};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use modifier::Modifier;
pub use padding::pad_left;
pub use scanner::{DirectiveScanner, Rendered};
pub use style::{Style, StyleId, StyleRegistry};
pub use style_stack::StyleStack;
pub use timestamp::{Clock, FixedClock, SystemClock};
pub use value::{stringize, SubstitutionQueue};
