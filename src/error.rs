//! Custom error types for the expense tracker
//!
//! Every failure is reported through [`ExpenseError`] and recovered at the
//! command boundary, except storage-open failures at startup.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Malformed or missing command input
    #[error("Argument error: {0}")]
    Argument(String),

    /// Date text matching none of the accepted formats
    #[error("Parse error: {0}")]
    Parse(String),

    /// Faults raised by the SQLite engine
    #[error("SQLite error: {0}")]
    Storage(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl ExpenseError {
    /// Create a parse error for an unrecognized date
    pub fn invalid_date(input: impl AsRef<str>) -> Self {
        Self::Parse(format!(
            "'{}' is not a valid date (expected DD-MM-YYYY or YYYY-MM-DD)",
            input.as_ref()
        ))
    }

    /// Check if this is an argument error
    pub fn is_argument(&self) -> bool {
        matches!(self, Self::Argument(_))
    }

    /// Check if this is a date parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Check if this error came from the storage engine
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

impl From<rusqlite::Error> for ExpenseError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
