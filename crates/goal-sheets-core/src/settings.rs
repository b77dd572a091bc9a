//! Last-used inputs, restored on the next run

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::filter::Selection;
use crate::store::KeyValueStore;

pub const PERCENT_KEY: &str = "percent";
pub const COLUMN_KEY: &str = "column";
pub const SELECTION_KEY: &str = "selection";
pub const MANUAL_LABEL_KEY: &str = "manual_label";
pub const MANUAL_AMOUNT_KEY: &str = "manual_amount";

const ALL_KEYS: [&str; 5] = [
    PERCENT_KEY,
    COLUMN_KEY,
    SELECTION_KEY,
    MANUAL_LABEL_KEY,
    MANUAL_AMOUNT_KEY,
];

/// Stored user inputs; `None` when never set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub percent: Option<f64>,
    pub column: Option<String>,
    pub selection: Option<Selection>,
    pub manual_label: Option<String>,
    pub manual_amount: Option<f64>,
}

/// Reads and writes [`Settings`] one key at a time
pub struct SettingsStore<'s, S: KeyValueStore + ?Sized> {
    store: &'s S,
}

impl<'s, S: KeyValueStore + ?Sized> SettingsStore<'s, S> {
    /// Create a settings view over `store`
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Read every stored setting
    pub fn load(&self) -> Result<Settings> {
        Ok(Settings {
            percent: self.read(PERCENT_KEY)?,
            column: self.read(COLUMN_KEY)?,
            selection: self.read(SELECTION_KEY)?,
            manual_label: self.read(MANUAL_LABEL_KEY)?,
            manual_amount: self.read(MANUAL_AMOUNT_KEY)?,
        })
    }

    pub fn set_percent(&self, percent: f64) -> Result<()> {
        self.write(PERCENT_KEY, &percent)
    }

    /// Store the column; the stored selection and manual entry belong to the
    /// previous column and are cleared
    pub fn set_column(&self, column: &str) -> Result<()> {
        self.write(COLUMN_KEY, &column)?;
        self.store.remove(SELECTION_KEY)?;
        self.clear_manual()
    }

    /// Store the selection; choosing anything but a manual entry clears the
    /// stored manual label and amount
    pub fn set_selection(&self, selection: &Selection) -> Result<()> {
        self.write(SELECTION_KEY, selection)?;
        if !selection.is_manual() {
            self.clear_manual()?;
        }
        Ok(())
    }

    pub fn set_manual_label(&self, label: &str) -> Result<()> {
        self.write(MANUAL_LABEL_KEY, &label)
    }

    pub fn set_manual_amount(&self, amount: f64) -> Result<()> {
        self.write(MANUAL_AMOUNT_KEY, &amount)
    }

    /// Forget every setting; the filter history is kept
    pub fn reset(&self) -> Result<()> {
        for key in ALL_KEYS {
            self.store.remove(key)?;
        }
        Ok(())
    }

    fn clear_manual(&self) -> Result<()> {
        self.store.remove(MANUAL_LABEL_KEY)?;
        self.store.remove(MANUAL_AMOUNT_KEY)
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.store.get(key)? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        self.store.set(key, serde_json::to_value(value)?)
    }
}
