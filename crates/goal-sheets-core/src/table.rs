//! Parsed spreadsheet rows

use std::collections::HashMap;

use crate::cell::CellValue;
use crate::error::{Error, Result};
use crate::index::ColumnValueIndexer;

/// One record from the spreadsheet, keyed by header name
///
/// Columns whose cell was empty are absent from the row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: HashMap<String, CellValue>,
}

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cell for a column
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    /// Check whether the row has a value for a column
    pub fn contains(&self, column: &str) -> bool {
        self.cells.contains_key(column)
    }

    /// Number of non-empty cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over `(column, value)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// The row set of one loaded spreadsheet
///
/// Built wholesale from a file and never modified afterwards; loading another
/// file replaces the whole store.
#[derive(Debug, Clone)]
pub struct TableDataStore {
    headers: Vec<String>,
    rows: Vec<Row>,
}

impl TableDataStore {
    /// Create a store from header names (in sheet order) and data rows
    ///
    /// Fails with [`Error::Parse`] when there are no data rows.
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Result<Self> {
        if rows.is_empty() {
            return Err(Error::parse("the spreadsheet is empty or badly formatted"));
        }
        Ok(Self { headers, rows })
    }

    /// Header names in sheet order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Check whether a column is one of the headers
    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|h| h == column)
    }

    /// All data rows
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false for a constructed store; kept for API symmetry
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sorted distinct values of a column
    pub fn distinct_values(&self, column: &str) -> Vec<String> {
        ColumnValueIndexer::distinct_values(&self.rows, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_from_pairs() {
        let row: Row = [("Consultor", CellValue::text("Ana")), ("Valor", 100.0.into())]
            .into_iter()
            .collect();

        assert_eq!(row.len(), 2);
        assert_eq!(row.get("Consultor"), Some(&CellValue::text("Ana")));
        assert_eq!(row.get("Valor").and_then(CellValue::as_number), Some(100.0));
        assert!(row.get("Filial").is_none());
        assert!(!row.contains("Filial"));
    }

    #[test]
    fn test_empty_table_is_a_parse_error() {
        let err = TableDataStore::new(vec!["Valor".into()], Vec::new()).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_headers_keep_sheet_order() {
        let row: Row = [("Valor", CellValue::Number(1.0))].into_iter().collect();
        let table = TableDataStore::new(
            vec!["Filial".into(), "Consultor".into(), "Valor".into()],
            vec![row],
        )
        .unwrap();

        assert_eq!(table.headers(), ["Filial", "Consultor", "Valor"]);
        assert!(table.has_column("Consultor"));
        assert!(!table.has_column("Produto"));
        assert_eq!(table.len(), 1);
    }
}
