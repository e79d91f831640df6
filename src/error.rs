//! Error types for sharebin.

use thiserror::Error;

/// Common error type for sharebin.
#[derive(Error, Debug)]
pub enum SharebinError {
    /// Database error.
    ///
    /// Wraps errors from the underlying store. Errors from sqlx are
    /// automatically converted.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Supplied password does not match the stored credential.
    #[error("invalid password")]
    InvalidPassword,

    /// Upload exceeds the configured size limit.
    #[error("file size exceeds the limit of {limit_mb}MB")]
    SizeExceeded {
        /// Configured limit in megabytes.
        limit_mb: u64,
    },

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Unexpected internal failure.
    #[error("internal error: {0}")]
    Internal(String),
}

// Conversion from sqlx errors
impl From<sqlx::Error> for SharebinError {
    fn from(e: sqlx::Error) -> Self {
        SharebinError::Database(e.to_string())
    }
}

/// Result type alias for sharebin operations.
pub type Result<T> = std::result::Result<T, SharebinError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = SharebinError::NotFound("file with id 7".to_string());
        assert_eq!(err.to_string(), "file with id 7 not found");
    }

    #[test]
    fn test_invalid_password_display() {
        assert_eq!(SharebinError::InvalidPassword.to_string(), "invalid password");
    }

    #[test]
    fn test_size_exceeded_display() {
        let err = SharebinError::SizeExceeded { limit_mb: 10 };
        assert_eq!(err.to_string(), "file size exceeds the limit of 10MB");
    }

    #[test]
    fn test_validation_display() {
        let err = SharebinError::Validation("file name is empty".to_string());
        assert_eq!(err.to_string(), "validation error: file name is empty");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SharebinError = io_err.into();
        assert!(matches!(err, SharebinError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_result_alias() {
        fn sample_ok() -> Result<i32> {
            Ok(42)
        }

        fn sample_err() -> Result<i32> {
            Err(SharebinError::InvalidPassword)
        }

        assert_eq!(sample_ok().unwrap(), 42);
        assert!(sample_err().is_err());
    }
}
