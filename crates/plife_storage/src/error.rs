//! Error types for the storage crate.

use thiserror::Error;

/// Failures while saving or loading simulation state.
#[derive(Error, Debug)]
pub enum StorageError {
    /// File system errors
    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    /// Binary encoding/decoding errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    /// Decoded data that cannot drive a simulation
    #[error("Invalid snapshot: {0}")]
    Validation(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    Context {
        context: String,
        source: Box<StorageError>,
    },
}

/// Result type alias for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    /// Wraps an error with additional context.
    #[must_use]
    pub fn with_context<S: Into<String>>(self, context: S) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_context() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = StorageError::from(io_err).with_context("loading snapshot");
        assert!(err.to_string().starts_with("loading snapshot: File system error"));
    }
}
