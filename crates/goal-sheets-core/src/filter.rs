//! Filter evaluation: which rows count and what their total is

use serde::{Deserialize, Serialize};

use crate::cell::{stops_at_decimal_comma, CellValue};
use crate::error::{Error, Result};
use crate::table::Row;

/// Column summed by default
pub const DEFAULT_AMOUNT_COLUMN: &str = "Valor";

/// What the user picked in the value selector
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Selection {
    /// Every row, no value filter
    #[default]
    AllValues,

    /// Only rows whose cell displays exactly this text
    SpecificValue(String),

    /// Skip the spreadsheet and use a manually entered total
    ManualEntry,
}

impl Selection {
    /// Check if this is a manual entry
    pub fn is_manual(&self) -> bool {
        matches!(self, Selection::ManualEntry)
    }

    /// The filter value, if one applies
    ///
    /// An empty specific value behaves like [`Selection::AllValues`].
    pub fn value(&self) -> Option<&str> {
        match self {
            Selection::SpecificValue(v) if !v.is_empty() => Some(v),
            _ => None,
        }
    }
}

/// A total typed in by the user instead of read from the sheet
#[derive(Debug, Clone, PartialEq)]
pub struct ManualOverride {
    /// Name of the entry for the chosen column (e.g. a consultant's name)
    pub label: String,
    /// Amount to use as the total
    pub amount: f64,
}

impl ManualOverride {
    /// Create a new manual override
    pub fn new<S: Into<String>>(label: S, amount: f64) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// Outcome of a successful evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Summed (or manually entered) total
    pub total: f64,
    /// Human-readable description of the filter
    pub description: String,
    /// Whether the total came from a manual override
    pub manual: bool,
}

/// Computes totals for a column/selection pair
#[derive(Debug, Clone)]
pub struct FilterEvaluator {
    amount_column: String,
}

impl Default for FilterEvaluator {
    fn default() -> Self {
        Self {
            amount_column: DEFAULT_AMOUNT_COLUMN.to_string(),
        }
    }
}

impl FilterEvaluator {
    /// Create an evaluator summing [`DEFAULT_AMOUNT_COLUMN`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an evaluator summing another column
    pub fn with_amount_column<S: Into<String>>(amount_column: S) -> Self {
        Self {
            amount_column: amount_column.into(),
        }
    }

    /// Name of the summed column
    pub fn amount_column(&self) -> &str {
        &self.amount_column
    }

    /// Evaluate a filter over `rows`
    ///
    /// A manual selection takes precedence over the sheet and requires a
    /// column, a non-blank label and a finite, non-negative amount. Otherwise
    /// rows are filtered by exact displayed value (when both column and value
    /// are given) and the amount column is summed, skipping cells that are
    /// absent or not numeric.
    pub fn evaluate(
        &self,
        rows: &[Row],
        column: &str,
        selection: &Selection,
        manual: Option<&ManualOverride>,
    ) -> Result<Evaluation> {
        if selection.is_manual() {
            return Self::evaluate_manual(column, manual);
        }

        let (total, description) = match (column.is_empty(), selection.value()) {
            (false, Some(value)) => {
                let total = self.sum(rows.iter().filter(|row| {
                    row.get(column)
                        .map_or(false, |cell| cell.to_string() == value)
                }));
                if total <= 0.0 {
                    return Err(Error::NoMatchingRows {
                        column: column.to_string(),
                        value: value.to_string(),
                    });
                }
                (total, format!("{} = {}", column, value))
            }
            (false, None) => (self.sum(rows.iter()), format!("{}: (all values)", column)),
            (true, _) => (self.sum(rows.iter()), "none (grand total)".to_string()),
        };

        Ok(Evaluation {
            total,
            description,
            manual: false,
        })
    }

    fn evaluate_manual(column: &str, manual: Option<&ManualOverride>) -> Result<Evaluation> {
        if column.is_empty() {
            return Err(Error::MissingColumn);
        }

        let label = manual.map(|m| m.label.trim()).unwrap_or_default();
        if label.is_empty() {
            return Err(Error::MissingLabel {
                column: column.to_string(),
            });
        }

        let amount = manual.map_or(f64::NAN, |m| m.amount);
        if !amount.is_finite() || amount < 0.0 {
            return Err(Error::InvalidAmount(amount));
        }

        Ok(Evaluation {
            total: amount,
            description: format!("manual total for {}: {}", column, label),
            manual: true,
        })
    }

    fn sum<'a, I: Iterator<Item = &'a Row>>(&self, rows: I) -> f64 {
        let mut skipped = 0usize;
        let mut comma_cut = 0usize;
        let total: f64 = rows
            .filter_map(|row| {
                let cell = row.get(&self.amount_column);
                if let Some(CellValue::Text(text)) = cell {
                    if stops_at_decimal_comma(text) {
                        comma_cut += 1;
                    }
                }
                let amount = cell.and_then(|c| c.as_number());
                if amount.is_none() {
                    skipped += 1;
                }
                amount
            })
            .sum();
        if skipped > 0 {
            log::debug!(
                "skipped {} row(s) without a numeric '{}'",
                skipped,
                self.amount_column
            );
        }
        if comma_cut > 0 {
            log::warn!(
                "{} '{}' cell(s) use a decimal comma; only the part before the comma was summed",
                comma_cut,
                self.amount_column
            );
        }
        total
    }
}
