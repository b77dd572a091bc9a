//! Error types for goal-sheets-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in goal-sheets-core
///
/// Every variant is recoverable: the failing operation is aborted and any
/// previously loaded table or stored history is left untouched.
#[derive(Debug, Error)]
pub enum Error {
    /// The spreadsheet could not be read or had no data rows
    #[error("Could not read spreadsheet: {0}")]
    Parse(String),

    /// Manual entry was requested without choosing a column
    #[error("Select a column before entering a manual value")]
    MissingColumn,

    /// Manual entry label is empty
    #[error("Enter a name for the manual {column} entry")]
    MissingLabel { column: String },

    /// Manual entry amount is negative or not a number
    #[error("Manual amount must be a non-negative number (got {0})")]
    InvalidAmount(f64),

    /// Percentage is missing or not a finite number
    #[error("Invalid percentage: {0}")]
    InvalidPercent(String),

    /// An exact column/value filter matched nothing with a positive total
    #[error("No data found for filter {column} = {value}; try another value or a manual entry for {column}")]
    NoMatchingRows { column: String, value: String },

    /// History index outside `[0, len)`
    #[error("History index {index} out of range (entries: {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// An operation needed rows but no spreadsheet is loaded
    #[error("No spreadsheet loaded")]
    NoTable,

    /// Column is not one of the loaded spreadsheet's headers
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// Storage I/O failure
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data could not be encoded or decoded
    #[error("Invalid stored data: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a parse error with a message
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse(msg.into())
    }
}
