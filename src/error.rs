//! Error types for Folio operations.
//!
//! This module defines [`FolioError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `FolioError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `FolioError::Other`) for unexpected errors
//! - A corrupt saved portfolio is never an error: the store degrades to
//!   empty defaults on load instead of failing

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Folio operations.
#[derive(Debug, Error)]
pub enum FolioError {
    /// Failed to serialize the portfolio snapshot before a write.
    #[error("Failed to encode portfolio snapshot: {message}")]
    SnapshotEncodeError { message: String },

    /// The storage slot could not be written.
    #[error("Failed to write portfolio data to {path}: {message}")]
    SlotWriteError { path: PathBuf, message: String },

    /// A form received a value it cannot use.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Folio operations.
pub type Result<T> = std::result::Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_encode_error_displays_message() {
        let err = FolioError::SnapshotEncodeError {
            message: "unexpected value".into(),
        };
        assert!(err.to_string().contains("unexpected value"));
    }

    #[test]
    fn slot_write_error_displays_path_and_message() {
        let err = FolioError::SlotWriteError {
            path: PathBuf::from("/data/portfolioData.json"),
            message: "disk full".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/data/portfolioData.json"));
        assert!(msg.contains("disk full"));
    }

    #[test]
    fn invalid_input_displays_message() {
        let err = FolioError::InvalidInput {
            message: "rating must be a number".into(),
        };
        assert!(err.to_string().contains("rating must be a number"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: FolioError = io_err.into();
        assert!(matches!(err, FolioError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(FolioError::InvalidInput {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
