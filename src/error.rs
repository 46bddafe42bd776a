//! Error types for the media catalog.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the media catalog.
#[derive(Error, Debug)]
pub enum Error {
    // Contract errors
    #[error("Precondition violated: {0}")]
    Precondition(String),

    // Construction errors
    #[error("The path should point to a file: {0}")]
    NotAFile(String),

    // Validation errors
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    // File system errors
    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Config errors
    #[error("Config error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Whether this error is a caller contract violation rather than bad input.
    pub fn is_precondition(&self) -> bool {
        matches!(self, Error::Precondition(_))
    }
}

/// Fail with [`Error::Precondition`] unless `cond` holds.
pub(crate) fn require(cond: bool, msg: impl FnOnce() -> String) -> Result<()> {
    if cond {
        Ok(())
    } else {
        Err(Error::Precondition(msg()))
    }
}
