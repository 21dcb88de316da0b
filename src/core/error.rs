//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A `%` was the last character of the format string
    #[error("parse error: empty directive at end of format string")]
    EmptyDirective,

    /// The character(s) after `%` do not form a known directive
    #[error("no such directive: \"{token}\"")]
    UnknownDirective { token: String },

    /// A directive started with a known prefix but was malformed
    #[error("parse error: malformed directive \"{directive}\"")]
    DirectiveParse { directive: String },

    /// `%.<name>(` referenced a style that was never registered
    #[error("unknown style: \"{name}\"")]
    UnknownStyle { name: String },

    /// A style handle was resolved in a registry that did not issue it
    #[error("style handle #{index} does not belong to this registry")]
    InvalidStyleHandle { index: usize },

    /// `%)` issued while only the default style is active
    #[error("parse error: style stack is empty")]
    EmptyStyleStack,

    /// More `%v` directives than supplied values
    #[error("substitution queue exhausted: value #{requested} was requested")]
    QueueExhausted { requested: usize },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an unknown directive error for the given token (e.g. `"%q"`)
    pub fn unknown_directive(token: impl Into<String>) -> Self {
        LoggerError::UnknownDirective {
            token: token.into(),
        }
    }

    /// Create a malformed directive error
    pub fn directive_parse(directive: impl Into<String>) -> Self {
        LoggerError::DirectiveParse {
            directive: directive.into(),
        }
    }

    pub fn unknown_style(name: impl Into<String>) -> Self {
        LoggerError::UnknownStyle { name: name.into() }
    }

    pub fn invalid_style_handle(index: usize) -> Self {
        LoggerError::InvalidStyleHandle { index }
    }

    /// Create a queue exhausted error; `requested` is 1-based
    pub fn queue_exhausted(requested: usize) -> Self {
        LoggerError::QueueExhausted { requested }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
