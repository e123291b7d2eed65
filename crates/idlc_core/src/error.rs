//! Checker error types.

use thiserror::Error;

/// Errors that can occur while checking files.
#[derive(Debug, Error)]
pub enum CheckError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A configuration file is already present where one was to be created.
    #[error("Config file already exists: {}", .0.display())]
    ConfigExists(std::path::PathBuf),

    /// File I/O error.
    #[error("File error: {0}")]
    File(String),

    /// The tree dump could not be loaded.
    #[error("Load error: {0}")]
    Load(#[from] idlc_loader::LoadError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CheckError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a file error.
    pub fn file(message: impl Into<String>) -> Self {
        Self::File(message.into())
    }
}
