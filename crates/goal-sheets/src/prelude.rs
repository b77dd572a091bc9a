//! Prelude module - common imports for goal-sheets users
//!
//! ```rust
//! use goal_sheets::prelude::*;
//! ```

pub use crate::{
    format_money,
    Calculation,
    CalculationRequest,
    // Cell types
    CellValue,
    // Error types
    Error,
    FilterRecord,
    JsonFileStore,
    KeyValueStore,
    LoadOptions,
    MemoryStore,
    Result,
    Row,
    Selection,
    // Main types
    Session,
    Settings,
    TableDataStore,
};
