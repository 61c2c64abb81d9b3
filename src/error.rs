//! Custom error types for ledger-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ledger-cli operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// A stored row does not match the ledger format
    #[error("Parse error on line {line}: {message}")]
    Parse { line: u64, message: String },

    /// Validation errors for user-supplied values
    #[error("Validation error: {0}")]
    Validation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A sum of amounts does not fit the amount range
    #[error("Amount overflow: {0}")]
    Overflow(String),

    /// Terminal chart errors
    #[error("Chart error: {0}")]
    Chart(String),
}

impl LedgerError {
    /// Create a parse error for a stored row
    pub fn parse(line: u64, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Check if this is a parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        if err.is_io_error() {
            Self::Io(err.to_string())
        } else {
            Self::parse(line, err.to_string())
        }
    }
}

/// Result type alias for ledger-cli operations
pub type LedgerResult<T> = Result<T, LedgerError>;
