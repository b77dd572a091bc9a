//! # goal-sheets
//!
//! Revenue goals from spreadsheet data.
//!
//! A [`Session`] loads the first sheet of a workbook or CSV file, filters
//! its rows by one column, sums the amount column (`Valor` by default) and
//! applies a percentage increase. The inputs of every calculation are kept
//! as settings and as a deduplicated filter history in a [`KeyValueStore`].
//!
//! ## Features
//!
//! - Read xlsx, xlsm, xlsb, xls, ods, CSV and TSV files
//! - Distinct column values sorted numerically, then in natural text order
//! - Manual totals that bypass the spreadsheet
//! - Settings and history persisted as a JSON file
//!
//! ## Example
//!
//! ```rust
//! use goal_sheets::prelude::*;
//!
//! let row = |name: &str, amount: f64| -> Row {
//!     [("Consultor", CellValue::text(name)), ("Valor", CellValue::Number(amount))]
//!         .into_iter()
//!         .collect()
//! };
//! let table = TableDataStore::new(
//!     vec!["Consultor".into(), "Valor".into()],
//!     vec![row("Ana", 100.0), row("Ana", 50.0), row("Bia", 10.0)],
//! )
//! .unwrap();
//!
//! let mut session = Session::new(MemoryStore::new());
//! session.set_table(table);
//!
//! let calc = session
//!     .calculate(&CalculationRequest {
//!         column: Some("Consultor".into()),
//!         selection: Some(Selection::SpecificValue("Ana".into())),
//!         percent: Some(10.0),
//!         ..Default::default()
//!     })
//!     .unwrap();
//! assert_eq!(format_money(calc.goal), "R$ 165,00");
//! assert_eq!(session.history().len().unwrap(), 1);
//!
//! // Open a file instead:
//! // session.load_file("vendas.xlsx").unwrap();
//! ```

pub mod prelude;
pub mod session;

pub use session::{Calculation, CalculationRequest, Session};

// Re-export core types
pub use goal_sheets_core::{
    format_amount, format_money, CellValue, ColumnValueIndexer, Error, Evaluation,
    FilterEvaluator, FilterHistoryStore, FilterRecord, GoalCalculator, JsonFileStore,
    KeyValueStore, ManualOverride, MemoryStore, Result, Row, Selection, Settings, SettingsStore,
    TableDataStore, DEFAULT_AMOUNT_COLUMN,
};

// Re-export I/O types
pub use goal_sheets_io::{
    load_table, CsvReader, FileFormat, LoadError, LoadOptions, LoadResult, WorkbookReader,
};
