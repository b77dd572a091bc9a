//! Turns a header row plus data rows into a [`TableDataStore`]

use ahash::{AHashMap, AHashSet};
use goal_sheets_core::{CellValue, Row, TableDataStore};

use crate::error::{LoadError, LoadResult};

/// Header used for a blank header cell
const EMPTY_HEADER: &str = "__EMPTY";

/// Accumulates rows keyed by the first row's headers
///
/// Blank header cells become `__EMPTY`, `__EMPTY_1`, ... and repeated
/// headers get `_1`, `_2`, ... suffixes. Empty cells are left out of the row
/// and rows without any cell are skipped.
pub(crate) struct TableBuilder {
    headers: Vec<String>,
    rows: Vec<Row>,
    blank_rows: usize,
    overflow_cells: usize,
}

impl TableBuilder {
    pub fn new<I: IntoIterator<Item = String>>(raw_headers: I) -> Self {
        Self {
            headers: unique_headers(raw_headers),
            rows: Vec::new(),
            blank_rows: 0,
            overflow_cells: 0,
        }
    }

    pub fn push_row<I: IntoIterator<Item = Option<CellValue>>>(&mut self, cells: I) {
        let mut overflow = 0;
        let row: Row = cells
            .into_iter()
            .enumerate()
            .filter_map(|(col, cell)| {
                let cell = cell.filter(|c| c.as_text() != Some(""))?;
                match self.headers.get(col) {
                    Some(header) => Some((header.clone(), cell)),
                    None => {
                        overflow += 1;
                        None
                    }
                }
            })
            .collect();

        self.overflow_cells += overflow;
        if row.is_empty() {
            self.blank_rows += 1;
        } else {
            self.rows.push(row);
        }
    }

    pub fn finish(self) -> LoadResult<TableDataStore> {
        if self.blank_rows > 0 {
            log::debug!("skipped {} blank row(s)", self.blank_rows);
        }
        if self.overflow_cells > 0 {
            log::warn!(
                "ignored {} cell(s) beyond the {} header column(s)",
                self.overflow_cells,
                self.headers.len()
            );
        }
        if self.rows.is_empty() {
            return Err(LoadError::EmptySheet);
        }
        log::info!(
            "loaded {} row(s) with columns {:?}",
            self.rows.len(),
            self.headers
        );
        Ok(TableDataStore::new(self.headers, self.rows)?)
    }
}

fn unique_headers<I: IntoIterator<Item = String>>(raw_headers: I) -> Vec<String> {
    let mut taken = AHashSet::new();
    let mut suffixes: AHashMap<String, usize> = AHashMap::new();

    raw_headers
        .into_iter()
        .map(|raw| {
            let base = if raw.is_empty() {
                EMPTY_HEADER.to_string()
            } else {
                raw
            };
            if taken.insert(base.clone()) {
                return base;
            }

            let counter = suffixes.entry(base.clone()).or_insert(0);
            loop {
                *counter += 1;
                let candidate = format!("{}_{}", base, counter);
                if taken.insert(candidate.clone()) {
                    if base != EMPTY_HEADER {
                        log::warn!("duplicate header '{}' renamed to '{}'", base, candidate);
                    }
                    return candidate;
                }
            }
        })
        .collect()
}
