//! Load error types.

use thiserror::Error;

/// Errors that can occur while loading a tree.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source text is not a valid tree dump.
    #[error("Invalid source: {message}")]
    InvalidSource {
        /// Error message.
        message: String,
        /// 1-based line and column where the error occurred.
        location: Option<(usize, usize)>,
    },

    /// No loader handles the given file extension.
    #[error("Unsupported file extension: {0}")]
    Unsupported(String),
}

impl LoadError {
    /// Creates a new invalid source error.
    pub fn invalid_source(message: impl Into<String>) -> Self {
        Self::InvalidSource {
            message: message.into(),
            location: None,
        }
    }

    /// Creates a new invalid source error at a line and column.
    pub fn invalid_source_at(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self::InvalidSource {
            message: message.into(),
            location: Some((line, column)),
        }
    }

    /// Creates a new unsupported extension error.
    pub fn unsupported(extension: impl Into<String>) -> Self {
        Self::Unsupported(extension.into())
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        if err.line() == 0 {
            Self::invalid_source(err.to_string())
        } else {
            Self::invalid_source_at(err.to_string(), err.line(), err.column())
        }
    }
}
