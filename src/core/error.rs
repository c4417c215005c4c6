//! Error types for the logging library

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
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

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// File handler error with path
    #[error("File handler error for '{path}': {message}")]
    FileHandlerError { path: String, message: String },

    /// Template references a key absent from the merged context
    #[error("Template references unknown placeholder '{{{placeholder}}}'")]
    UnknownPlaceholder { placeholder: String },

    /// Template is not valid placeholder syntax
    #[error("Malformed template: {message}")]
    MalformedTemplate { message: String },

    /// Entry text cannot be represented in the configured encoding
    #[error("Cannot encode entry as {encoding}: {message}")]
    Unencodable {
        encoding: &'static str,
        message: String,
    },

    /// Datagram destination accepted fewer bytes than the entry holds
    #[error("Short write to {destination}: sent {sent} of {expected} bytes")]
    ShortWrite {
        destination: String,
        sent: usize,
        expected: usize,
    },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
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

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a file handler error
    pub fn file_handler(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FileHandlerError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an unknown placeholder error
    pub fn unknown_placeholder(placeholder: impl Into<String>) -> Self {
        LoggerError::UnknownPlaceholder {
            placeholder: placeholder.into(),
        }
    }

    /// Create a malformed template error
    pub fn malformed_template(message: impl Into<String>) -> Self {
        LoggerError::MalformedTemplate {
            message: message.into(),
        }
    }

    /// Create an encoding error
    pub fn unencodable(encoding: &'static str, message: impl Into<String>) -> Self {
        LoggerError::Unencodable {
            encoding,
            message: message.into(),
        }
    }

    /// Create a short write error
    pub fn short_write(destination: impl Into<String>, sent: usize, expected: usize) -> Self {
        LoggerError::ShortWrite {
            destination: destination.into(),
            sent,
            expected,
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
