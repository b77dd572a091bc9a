//! Loading error types

use thiserror::Error;

/// Result type for loading operations
pub type LoadResult<T> = std::result::Result<T, LoadError>;

/// Errors that can occur while loading a spreadsheet
#[derive(Debug, Error)]
pub enum LoadError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV library error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Workbook library error
    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    /// The workbook has no sheets
    #[error("The workbook has no sheets")]
    NoSheets,

    /// The first sheet has no header or no data rows
    #[error("The spreadsheet is empty or badly formatted")]
    EmptySheet,

    /// File extension is not a supported format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] goal_sheets_core::Error),
}

impl From<LoadError> for goal_sheets_core::Error {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::Core(inner) => inner,
            other => goal_sheets_core::Error::parse(other.to_string()),
        }
    }
}
