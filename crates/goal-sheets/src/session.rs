//! One user's working session: the loaded sheet plus persisted state

use std::path::Path;

use goal_sheets_core::{
    Error, FilterEvaluator, FilterHistoryStore, FilterRecord, GoalCalculator, KeyValueStore,
    ManualOverride, Result, Row, Selection, Settings, SettingsStore, TableDataStore,
};
use goal_sheets_io::LoadOptions;

/// Inputs of a calculation; `None` fields fall back to the stored settings
#[derive(Debug, Clone, Default)]
pub struct CalculationRequest {
    /// Filter column (empty string for no filter)
    pub column: Option<String>,
    /// Value selection for the column
    pub selection: Option<Selection>,
    /// Label of a manual entry
    pub manual_label: Option<String>,
    /// Amount of a manual entry
    pub manual_amount: Option<f64>,
    /// Percentage increase
    pub percent: Option<f64>,
}

/// Result of a successful calculation
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    /// Filtered or manually entered total
    pub total: f64,
    /// Total with the percentage applied (unrounded)
    pub goal: f64,
    /// Percentage applied
    pub percent: f64,
    /// Description of the filter
    pub description: String,
    /// Whether the total was entered manually
    pub manual: bool,
    /// Record describing this calculation
    pub record: FilterRecord,
    /// False when an equivalent record was already in the history
    pub added_to_history: bool,
}

/// Owns the loaded table and the key-value store behind settings and history
///
/// Operations run one at a time. A failed operation leaves the loaded table,
/// the settings and the history exactly as they were.
pub struct Session<S: KeyValueStore> {
    store: S,
    table: Option<TableDataStore>,
    evaluator: FilterEvaluator,
    load_options: LoadOptions,
}

impl<S: KeyValueStore> Session<S> {
    /// Create a session with no table loaded
    pub fn new(store: S) -> Self {
        Self {
            store,
            table: None,
            evaluator: FilterEvaluator::new(),
            load_options: LoadOptions::default(),
        }
    }

    /// Use a different evaluator (e.g. another amount column)
    pub fn with_evaluator(mut self, evaluator: FilterEvaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    /// Use different options when reading delimited text
    pub fn with_load_options(mut self, options: LoadOptions) -> Self {
        self.load_options = options;
        self
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the first sheet of a file, replacing the current table
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<&TableDataStore> {
        self.load_file_with(path, |_| {})
    }

    /// [`Session::load_file`] with a busy callback
    ///
    /// `on_busy(true)` is called before parsing starts and `on_busy(false)`
    /// after it ends, whether it succeeded or not. On failure the previous
    /// table stays loaded.
    pub fn load_file_with<P, F>(&mut self, path: P, mut on_busy: F) -> Result<&TableDataStore>
    where
        P: AsRef<Path>,
        F: FnMut(bool),
    {
        let path = path.as_ref();
        on_busy(true);
        let loaded = goal_sheets_io::load_table(path, &self.load_options);
        on_busy(false);

        let table = loaded.map_err(|e| {
            log::warn!("failed to load '{}': {}", path.display(), e);
            Error::from(e)
        })?;
        log::info!("loaded {} row(s) from '{}'", table.len(), path.display());
        Ok(self.table.insert(table))
    }

    /// Replace the current table with one built elsewhere
    pub fn set_table(&mut self, table: TableDataStore) {
        self.table = Some(table);
    }

    /// The loaded table, if any
    pub fn table(&self) -> Option<&TableDataStore> {
        self.table.as_ref()
    }

    /// Header names of the loaded table
    pub fn columns(&self) -> Result<&[String]> {
        Ok(self.require_table()?.headers())
    }

    /// Sorted distinct values of a column of the loaded table
    pub fn distinct_values(&self, column: &str) -> Result<Vec<String>> {
        let table = self.require_table()?;
        self.check_column(column)?;
        Ok(table.distinct_values(column))
    }

    /// Settings view over the store
    pub fn settings(&self) -> SettingsStore<'_, S> {
        SettingsStore::new(&self.store)
    }

    /// History view over the store
    pub fn history(&self) -> FilterHistoryStore<'_, S> {
        FilterHistoryStore::new(&self.store)
    }

    /// Choose the filter column and return its values for the selector
    ///
    /// The stored selection and manual entry are reset.
    pub fn select_column(&self, column: &str) -> Result<Vec<String>> {
        let values = self.distinct_values(column)?;
        self.settings().set_column(column)?;
        Ok(values)
    }

    /// Choose a value (or manual entry) for the current column
    pub fn select_value(&self, selection: &Selection) -> Result<()> {
        self.settings().set_selection(selection)
    }

    /// Remember a manual entry's label and amount
    pub fn enter_manual(&self, label: &str, amount: f64) -> Result<()> {
        let settings = self.settings();
        settings.set_manual_label(label)?;
        settings.set_manual_amount(amount)
    }

    /// Remember the percentage increase
    pub fn set_percent(&self, percent: f64) -> Result<()> {
        if !percent.is_finite() {
            return Err(Error::InvalidPercent(percent.to_string()));
        }
        self.settings().set_percent(percent)
    }

    /// Stored settings that still apply to the loaded table
    ///
    /// Column, selection and manual entry are only restored while a table
    /// with that column is loaded; the manual fields only when the stored
    /// selection is a manual entry.
    pub fn restored_settings(&self) -> Result<Settings> {
        let mut settings = self.settings().load()?;

        let column_applies = match (&self.table, settings.column.as_deref()) {
            (Some(table), Some(column)) => column.is_empty() || table.has_column(column),
            _ => false,
        };
        if !column_applies {
            settings.column = None;
            settings.selection = None;
        }
        if !settings.selection.as_ref().map_or(false, Selection::is_manual) {
            settings.manual_label = None;
            settings.manual_amount = None;
        }
        Ok(settings)
    }

    /// Evaluate the filter, apply the percentage and record the result
    ///
    /// Missing request fields come from the stored settings. Stored
    /// selection and manual entry are only reused when the column is
    /// unchanged. On success the inputs are stored as the new settings and
    /// the record is appended to the history unless an equivalent one exists.
    pub fn calculate(&self, request: &CalculationRequest) -> Result<Calculation> {
        let stored = self.settings().load()?;

        let percent = request
            .percent
            .or(stored.percent)
            .ok_or_else(|| Error::InvalidPercent("no percentage given".to_string()))?;
        if !percent.is_finite() {
            return Err(Error::InvalidPercent(percent.to_string()));
        }

        let same_column = request.column.is_none() || request.column == stored.column;
        let column = request
            .column
            .clone()
            .or_else(|| stored.column.clone())
            .unwrap_or_default();
        let selection = request
            .selection
            .clone()
            .or_else(|| if same_column { stored.selection.clone() } else { None })
            .unwrap_or_default();

        let manual = if selection.is_manual() {
            let reuse = same_column && stored.selection.as_ref().map_or(false, Selection::is_manual);
            let label = request
                .manual_label
                .clone()
                .or_else(|| if reuse { stored.manual_label.clone() } else { None });
            let amount = request
                .manual_amount
                .or(if reuse { stored.manual_amount } else { None });
            label.map(|label| ManualOverride::new(label, amount.unwrap_or(f64::NAN)))
        } else {
            None
        };

        let rows: &[Row] = match (&self.table, selection.is_manual()) {
            (Some(table), _) => table.rows(),
            (None, true) => &[],
            (None, false) => return Err(Error::NoTable),
        };
        if self.table.is_some() {
            self.check_column(&column)?;
        }

        let evaluation = self
            .evaluator
            .evaluate(rows, &column, &selection, manual.as_ref())?;
        let goal = GoalCalculator::compute_goal(evaluation.total, percent)?;

        let record = match &manual {
            Some(m) if evaluation.manual => {
                FilterRecord::manual(&column, &m.label, evaluation.total, percent)
            }
            _ => FilterRecord::spreadsheet(&column, &selection, percent),
        };

        // A history that cannot be read fails here, before any write
        let added_to_history = self.history().add(record.clone())?;

        let settings = self.settings();
        settings.set_percent(percent)?;
        settings.set_column(&column)?;
        settings.set_selection(&selection)?;
        if let Some(m) = &manual {
            settings.set_manual_label(m.label.trim())?;
            settings.set_manual_amount(m.amount)?;
        }

        log::info!(
            "{}: total {} -> goal {} ({}%)",
            evaluation.description,
            evaluation.total,
            goal,
            percent
        );

        Ok(Calculation {
            total: evaluation.total,
            goal,
            percent,
            description: evaluation.description,
            manual: evaluation.manual,
            record,
            added_to_history,
        })
    }

    /// Remove one history entry
    pub fn remove_history(&self, index: usize) -> Result<FilterRecord> {
        self.history().remove_at(index)
    }

    /// Remove every history entry
    pub fn clear_history(&self) -> Result<()> {
        self.history().clear()
    }

    fn require_table(&self) -> Result<&TableDataStore> {
        self.table.as_ref().ok_or(Error::NoTable)
    }

    /// An empty column means "no filter" and is always accepted
    fn check_column(&self, column: &str) -> Result<()> {
        match &self.table {
            Some(table) if !column.is_empty() && !table.has_column(column) => {
                Err(Error::UnknownColumn(column.to_string()))
            }
            _ => Ok(()),
        }
    }
}
