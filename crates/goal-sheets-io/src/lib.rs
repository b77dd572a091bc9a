//! # goal-sheets-io
//!
//! Loads the first sheet of a spreadsheet file into a
//! [`TableDataStore`](goal_sheets_core::TableDataStore).
//!
//! Workbooks (xlsx, xlsm, xlsb, xls, ods) are read with `calamine`; CSV and
//! TSV with `csv`. In both cases the first row holds the headers.

mod builder;
mod csv_reader;
mod error;
mod options;
mod workbook;

pub use csv_reader::CsvReader;
pub use error::{LoadError, LoadResult};
pub use options::{FileFormat, LoadOptions};
pub use workbook::WorkbookReader;

use std::path::Path;

use goal_sheets_core::TableDataStore;

/// Load a spreadsheet, choosing the reader from the file extension
pub fn load_table<P: AsRef<Path>>(path: P, options: &LoadOptions) -> LoadResult<TableDataStore> {
    let path = path.as_ref();
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    match FileFormat::from_extension(extension) {
        Some(FileFormat::Workbook) => WorkbookReader::read_file(path),
        Some(FileFormat::Csv) => CsvReader::read_file(path, options),
        Some(FileFormat::Tsv) => {
            let options = LoadOptions {
                delimiter: options.delimiter.or(Some(b'\t')),
                ..options.clone()
            };
            CsvReader::read_file(path, &options)
        }
        None => Err(LoadError::UnsupportedFormat(path.display().to_string())),
    }
}
