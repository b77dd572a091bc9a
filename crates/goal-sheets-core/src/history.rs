//! Persisted filter history

use crate::error::{Error, Result};
use crate::record::FilterRecord;
use crate::store::KeyValueStore;

/// Storage key of the history list
pub const HISTORY_KEY: &str = "filter_history";

/// Ordered, deduplicated list of [`FilterRecord`]s
///
/// Every operation reads the whole list and writes it back whole.
pub struct FilterHistoryStore<'s, S: KeyValueStore + ?Sized> {
    store: &'s S,
}

impl<'s, S: KeyValueStore + ?Sized> FilterHistoryStore<'s, S> {
    /// Create a history view over `store`
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// All records in insertion order
    pub fn list(&self) -> Result<Vec<FilterRecord>> {
        match self.store.get(HISTORY_KEY)? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(Vec::new()),
        }
    }

    /// Number of stored records
    pub fn len(&self) -> Result<usize> {
        Ok(self.list()?.len())
    }

    /// Check if the history is empty
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.list()?.is_empty())
    }

    /// Append `record` unless an equivalent one is already stored
    ///
    /// Returns `true` if the record was appended.
    pub fn add(&self, record: FilterRecord) -> Result<bool> {
        let mut records = self.list()?;
        if records.iter().any(|r| r.is_equivalent(&record)) {
            log::debug!("history already has an entry for '{}'", record);
            return Ok(false);
        }
        records.push(record);
        self.save(&records)?;
        Ok(true)
    }

    /// Remove and return the record at `index`
    pub fn remove_at(&self, index: usize) -> Result<FilterRecord> {
        let mut records = self.list()?;
        if index >= records.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: records.len(),
            });
        }
        let removed = records.remove(index);
        self.save(&records)?;
        Ok(removed)
    }

    /// Remove every record
    pub fn clear(&self) -> Result<()> {
        self.store.remove(HISTORY_KEY)
    }

    fn save(&self, records: &[FilterRecord]) -> Result<()> {
        self.store.set(HISTORY_KEY, serde_json::to_value(records)?)
    }
}
