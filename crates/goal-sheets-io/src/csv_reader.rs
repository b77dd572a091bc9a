//! CSV reader

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use goal_sheets_core::cell::parse_number;
use goal_sheets_core::{CellValue, TableDataStore};

use crate::builder::TableBuilder;
use crate::error::{LoadError, LoadResult};
use crate::options::LoadOptions;

/// Candidate delimiters, in order of preference on ties
const DELIMITERS: [u8; 3] = [b',', b';', b'\t'];

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file; the first record is the header row
    pub fn read_file<P: AsRef<Path>>(path: P, options: &LoadOptions) -> LoadResult<TableDataStore> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV from a reader; the first record is the header row
    pub fn read<R: Read>(reader: R, options: &LoadOptions) -> LoadResult<TableDataStore> {
        let mut reader = BufReader::new(reader);
        let delimiter = match options.delimiter {
            Some(d) => d,
            None => Self::guess_delimiter(reader.fill_buf()?),
        };

        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut records = csv_reader.records();
        let headers = match records.next() {
            Some(record) => record?,
            None => return Err(LoadError::EmptySheet),
        };

        let mut builder = TableBuilder::new(headers.iter().map(str::to_string));
        for record in records {
            let record = record?;
            builder.push_row(record.iter().map(|field| Self::cell(field, options)));
        }

        builder.finish()
    }

    fn cell(field: &str, options: &LoadOptions) -> Option<CellValue> {
        if field.trim().is_empty() {
            return None;
        }
        if options.auto_detect_numbers {
            if let Some(n) = parse_number(field) {
                return Some(CellValue::Number(n));
            }
        }
        Some(CellValue::text(field))
    }

    /// Pick the candidate delimiter appearing most often on the first line,
    /// ignoring quoted sections
    fn guess_delimiter(head: &[u8]) -> u8 {
        let line_end = head
            .iter()
            .position(|&b| b == b'\n')
            .unwrap_or(head.len());

        let mut counts = [0usize; DELIMITERS.len()];
        let mut quoted = false;
        for &b in &head[..line_end] {
            if b == b'"' {
                quoted = !quoted;
            } else if !quoted {
                if let Some(i) = DELIMITERS.iter().position(|&d| d == b) {
                    counts[i] += 1;
                }
            }
        }

        let mut best = 0;
        for i in 1..DELIMITERS.len() {
            if counts[i] > counts[best] {
                best = i;
            }
        }
        DELIMITERS[best]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn read(text: &str) -> LoadResult<TableDataStore> {
        CsvReader::read(text.as_bytes(), &LoadOptions::default())
    }

    #[test]
    fn test_read_with_headers_and_numbers() {
        let table = read("Consultor,Valor\nAna,100\nBia,10.5\n").unwrap();

        assert_eq!(table.headers(), ["Consultor", "Valor"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0].get("Consultor"), Some(&CellValue::text("Ana")));
        assert_eq!(table.rows()[1].get("Valor"), Some(&CellValue::Number(10.5)));
    }

    #[test]
    fn test_semicolon_delimiter_is_guessed() {
        let table = read("Consultor;Filial;Valor\n\"Silva, Ana\";2;100\n").unwrap();
        assert_eq!(table.headers(), ["Consultor", "Filial", "Valor"]);
        assert_eq!(
            table.rows()[0].get("Consultor"),
            Some(&CellValue::text("Silva, Ana"))
        );
    }

    #[test]
    fn test_explicit_delimiter() {
        let options = LoadOptions::default().with_delimiter(b'|');
        let table = CsvReader::read("A|B\n1|x\n".as_bytes(), &options).unwrap();
        assert_eq!(table.rows()[0].get("B"), Some(&CellValue::text("x")));
    }

    #[test]
    fn test_number_detection_can_be_disabled() {
        let options = LoadOptions {
            auto_detect_numbers: false,
            ..LoadOptions::default()
        };
        let table = CsvReader::read("Valor\n100\n".as_bytes(), &options).unwrap();
        assert_eq!(table.rows()[0].get("Valor"), Some(&CellValue::text("100")));
    }

    #[test]
    fn test_header_only_or_empty_input_is_empty_sheet() {
        assert!(matches!(read("Consultor,Valor\n"), Err(LoadError::EmptySheet)));
        assert!(matches!(read(""), Err(LoadError::EmptySheet)));
        assert!(matches!(read("Consultor,Valor\n,\n"), Err(LoadError::EmptySheet)));
    }

    #[test]
    fn test_guess_delimiter() {
        assert_eq!(CsvReader::guess_delimiter(b"a,b,c\n1;2;3;4"), b',');
        assert_eq!(CsvReader::guess_delimiter(b"a\tb\tc"), b'\t');
        assert_eq!(CsvReader::guess_delimiter(b"single"), b',');
    }
}
