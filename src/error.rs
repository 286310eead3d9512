//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// The ledger exists but its contents cannot be summarized
    #[error("Ledger error in {path}: {message}")]
    Ledger { path: String, message: String },

    /// Standard input reached end of file while a prompt was waiting
    #[error("Input closed while waiting for {0}")]
    InputClosed(&'static str),
}

impl TrackerError {
    /// Create a ledger error for the given file
    pub fn ledger(path: &std::path::Path, message: impl Into<String>) -> Self {
        Self::Ledger {
            path: path.display().to_string(),
            message: message.into(),
        }
    }

    /// Check if this error was caused by closed input
    pub fn is_input_closed(&self) -> bool {
        matches!(self, Self::InputClosed(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for TrackerError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_error_display() {
        let err = TrackerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_ledger_error() {
        let err = TrackerError::ledger(Path::new("expenses.csv"), "bad amount 'x'");
        assert_eq!(
            err.to_string(),
            "Ledger error in expenses.csv: bad amount 'x'"
        );
    }

    #[test]
    fn test_input_closed() {
        let err = TrackerError::InputClosed("an expense amount");
        assert!(err.is_input_closed());
        assert!(!err.is_validation());
        assert_eq!(
            err.to_string(),
            "Input closed while waiting for an expense amount"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TrackerError = io_err.into();
        assert!(matches!(err, TrackerError::Io(_)));
    }
}
