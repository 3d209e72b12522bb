//! Custom error types for depass
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for depass operations
#[derive(Error, Debug)]
pub enum DepassError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// The account identifier is not a usable store path
    #[error("Invalid account '{account}': {reason}")]
    InvalidAccount { account: String, reason: String },

    /// The file that should be moved does not exist
    #[error("Source account {0} does not exist")]
    SourceNotFound(String),

    /// Moving would overwrite an existing file
    #[error("Target account {0} is already occupied")]
    DestinationOccupied(String),

    /// The next archive version does not fit in a u64
    #[error("Version overflow: {account} already has version {latest}")]
    VersionOverflow { account: String, latest: u64 },
}

impl DepassError {
    /// Create an "invalid account" error
    pub fn invalid_account(account: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAccount {
            account: account.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a "source not found" error
    pub fn is_source_not_found(&self) -> bool {
        matches!(self, Self::SourceNotFound(_))
    }

    /// Check if this is a "destination occupied" error
    pub fn is_destination_occupied(&self) -> bool {
        matches!(self, Self::DestinationOccupied(_))
    }
}

impl From<std::io::Error> for DepassError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DepassError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for depass operations
pub type DepassResult<T> = Result<T, DepassError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DepassError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_move_error_messages() {
        let err = DepassError::SourceNotFound("email/work".into());
        assert_eq!(err.to_string(), "Source account email/work does not exist");
        assert!(err.is_source_not_found());

        let err = DepassError::DestinationOccupied("z_deprecated/email/work.old.0".into());
        assert_eq!(
            err.to_string(),
            "Target account z_deprecated/email/work.old.0 is already occupied"
        );
        assert!(err.is_destination_occupied());
        assert!(!err.is_source_not_found());
    }

    #[test]
    fn test_invalid_account_error() {
        let err = DepassError::invalid_account("../etc", "parent components are not allowed");
        assert_eq!(
            err.to_string(),
            "Invalid account '../etc': parent components are not allowed"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DepassError = io_err.into();
        assert!(matches!(err, DepassError::Io(_)));
    }
}
