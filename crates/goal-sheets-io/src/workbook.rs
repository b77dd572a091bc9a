//! Workbook reader (first sheet only)

use std::fs;
use std::io::Cursor;
use std::path::Path;

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use goal_sheets_core::{CellValue, TableDataStore};

use crate::builder::TableBuilder;
use crate::error::{LoadError, LoadResult};

/// Reader for xlsx, xlsm, xlsb, xls and ods workbooks
pub struct WorkbookReader;

impl WorkbookReader {
    /// Read the first sheet of a workbook file
    pub fn read_file<P: AsRef<Path>>(path: P) -> LoadResult<TableDataStore> {
        let bytes = fs::read(path)?;
        Self::read(bytes)
    }

    /// Read the first sheet of a workbook held in memory
    ///
    /// The container format is sniffed from the bytes.
    pub fn read(bytes: Vec<u8>) -> LoadResult<TableDataStore> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
        if let Some(name) = workbook.sheet_names().first() {
            log::debug!("reading sheet '{}'", name);
        }

        let range = workbook.worksheet_range_at(0).ok_or(LoadError::NoSheets)??;
        let mut rows = range.rows();
        let header = rows.next().ok_or(LoadError::EmptySheet)?;

        let mut builder = TableBuilder::new(header.iter().map(Self::header_text));
        for row in rows {
            builder.push_row(row.iter().map(Self::cell));
        }

        builder.finish()
    }

    fn header_text(data: &Data) -> String {
        Self::cell(data).map(|c| c.to_string()).unwrap_or_default()
    }

    /// Booleans become `true`/`false` text and dates their serial number;
    /// error cells read as empty
    fn cell(data: &Data) -> Option<CellValue> {
        match data {
            Data::Empty | Data::Error(_) => None,
            Data::String(s) => Some(CellValue::text(s.as_str())),
            Data::Float(f) => Some(CellValue::Number(*f)),
            Data::Int(i) => Some(CellValue::Number(*i as f64)),
            Data::Bool(b) => Some(CellValue::text(if *b { "true" } else { "false" })),
            Data::DateTime(dt) => Some(CellValue::Number(dt.as_f64())),
            Data::DateTimeIso(s) | Data::DurationIso(s) => Some(CellValue::text(s.as_str())),
        }
    }
}
