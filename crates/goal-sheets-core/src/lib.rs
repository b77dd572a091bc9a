//! # goal-sheets-core
//!
//! Core data structures and calculations for goal-sheets.
//!
//! This crate provides:
//! - [`TableDataStore`] and [`Row`] - the rows of a loaded spreadsheet
//! - [`ColumnValueIndexer`] - distinct values of a column for a selector
//! - [`FilterEvaluator`] - totals for a column/value filter or manual entry
//! - [`GoalCalculator`] - the percentage increase applied to a total
//! - [`FilterHistoryStore`] and [`SettingsStore`] - persisted state on top of
//!   a [`KeyValueStore`]
//!
//! ## Example
//!
//! ```rust
//! use goal_sheets_core::{CellValue, FilterEvaluator, GoalCalculator, Row, Selection};
//!
//! let rows: Vec<Row> = vec![
//!     [("Consultor", CellValue::text("Ana")), ("Valor", CellValue::Number(100.0))]
//!         .into_iter()
//!         .collect(),
//!     [("Consultor", CellValue::text("Bia")), ("Valor", CellValue::Number(10.0))]
//!         .into_iter()
//!         .collect(),
//! ];
//!
//! let eval = FilterEvaluator::new()
//!     .evaluate(&rows, "Consultor", &Selection::SpecificValue("Ana".into()), None)
//!     .unwrap();
//! assert_eq!(eval.total, 100.0);
//!
//! let goal = GoalCalculator::compute_goal(eval.total, 20.0).unwrap();
//! assert_eq!(goal, 120.0);
//! ```

pub mod cell;
pub mod error;
pub mod filter;
pub mod format;
pub mod goal;
pub mod history;
pub mod index;
pub mod record;
pub mod settings;
pub mod store;
pub mod table;

// Re-exports for convenience
pub use cell::CellValue;
pub use error::{Error, Result};
pub use filter::{Evaluation, FilterEvaluator, ManualOverride, Selection, DEFAULT_AMOUNT_COLUMN};
pub use format::{format_amount, format_money};
pub use goal::GoalCalculator;
pub use history::FilterHistoryStore;
pub use index::ColumnValueIndexer;
pub use record::FilterRecord;
pub use settings::{Settings, SettingsStore};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
pub use table::{Row, TableDataStore};
