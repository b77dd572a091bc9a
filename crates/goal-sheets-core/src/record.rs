//! Filter records kept in the history

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cell::format_number;
use crate::filter::Selection;
use crate::format::format_money;

/// Snapshot of the inputs of one successful calculation
///
/// Either the spreadsheet filter (`column` + `value`) or the manual entry
/// (`manual_total` + `manual_label`) is active. A manual record never carries
/// a `value`. Records are immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterRecord {
    column: Option<String>,
    value: Option<String>,
    percent: f64,
    manual_total: Option<f64>,
    manual_label: Option<String>,
}

impl FilterRecord {
    /// Record for a spreadsheet-driven calculation
    ///
    /// Empty column or value strings are stored as `None`.
    pub fn spreadsheet(column: &str, selection: &Selection, percent: f64) -> Self {
        Self {
            column: non_empty(column),
            value: selection.value().map(str::to_string),
            percent,
            manual_total: None,
            manual_label: None,
        }
    }

    /// Record for a manual entry
    pub fn manual(column: &str, label: &str, total: f64, percent: f64) -> Self {
        Self {
            column: non_empty(column),
            value: None,
            percent,
            manual_total: Some(total),
            manual_label: Some(label.trim().to_string()),
        }
    }

    /// Filtered column
    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    /// Filter value (`None` for all values or manual entries)
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Percentage increase applied
    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// Manually entered total
    pub fn manual_total(&self) -> Option<f64> {
        self.manual_total
    }

    /// Manually entered label
    pub fn manual_label(&self) -> Option<&str> {
        self.manual_label.as_deref()
    }

    /// Check if this record is a manual entry
    pub fn is_manual(&self) -> bool {
        self.manual_total.is_some()
    }

    /// Percentage as entered, without trailing zeros (`"10%"`, `"12.5%"`)
    pub fn percent_label(&self) -> String {
        format!("{}%", format_number(self.percent))
    }

    /// Two records are equivalent when column and percent match and either
    /// both are manual with the same label and total, or neither is manual
    /// and the values match. Comparison is literal.
    pub fn is_equivalent(&self, other: &FilterRecord) -> bool {
        if self.column != other.column || self.percent != other.percent {
            return false;
        }
        match (self.manual_total, other.manual_total) {
            (Some(a), Some(b)) => a == b && self.manual_label == other.manual_label,
            (None, None) => self.value == other.value,
            _ => false,
        }
    }
}

impl fmt::Display for FilterRecord {
    /// Filter part of a history entry, without the percentage
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(total) = self.manual_total {
            let mut parts = Vec::new();
            if let Some(column) = &self.column {
                parts.push(format!("column {}", column));
            }
            if let Some(label) = &self.manual_label {
                parts.push(format!("value {}", label));
            }
            parts.push(format!("manual total {}", format_money(total)));
            return write!(f, "{}", parts.join(", "));
        }

        match (&self.column, &self.value) {
            (Some(column), Some(value)) => write!(f, "{} = {}", column, value),
            (Some(column), None) => write!(f, "{}: (all values)", column),
            _ => write!(f, "none (grand total)"),
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_record_has_no_value() {
        let record = FilterRecord::manual("Consultor", " João ", 500.0, 10.0);
        assert!(record.is_manual());
        assert_eq!(record.value(), None);
        assert_eq!(record.manual_label(), Some("João"));
        assert_eq!(record.manual_total(), Some(500.0));
    }

    #[test]
    fn test_spreadsheet_record_fields() {
        let all = FilterRecord::spreadsheet("Filial", &Selection::AllValues, 5.0);
        assert_eq!(all.column(), Some("Filial"));
        assert_eq!(all.value(), None);
        assert!(!all.is_manual());

        let none = FilterRecord::spreadsheet("", &Selection::SpecificValue("x".into()), 5.0);
        assert_eq!(none.column(), None);
    }

    #[test]
    fn test_equivalence() {
        let a = FilterRecord::spreadsheet("Consultor", &Selection::SpecificValue("Ana".into()), 10.0);
        let b = FilterRecord::spreadsheet("Consultor", &Selection::SpecificValue("Ana".into()), 10.0);
        let other_percent =
            FilterRecord::spreadsheet("Consultor", &Selection::SpecificValue("Ana".into()), 12.0);
        let other_value =
            FilterRecord::spreadsheet("Consultor", &Selection::SpecificValue("Bia".into()), 10.0);
        let manual = FilterRecord::manual("Consultor", "Ana", 150.0, 10.0);

        assert!(a.is_equivalent(&b));
        assert!(!a.is_equivalent(&other_percent));
        assert!(!a.is_equivalent(&other_value));
        assert!(!a.is_equivalent(&manual));
        assert!(!manual.is_equivalent(&a));

        assert!(manual.is_equivalent(&FilterRecord::manual("Consultor", "Ana", 150.0, 10.0)));
        assert!(!manual.is_equivalent(&FilterRecord::manual("Consultor", "Ana", 151.0, 10.0)));
        assert!(!manual.is_equivalent(&FilterRecord::manual("Consultor", "Bia", 150.0, 10.0)));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            FilterRecord::spreadsheet("Consultor", &Selection::SpecificValue("Ana".into()), 10.0)
                .to_string(),
            "Consultor = Ana"
        );
        assert_eq!(
            FilterRecord::spreadsheet("Consultor", &Selection::AllValues, 10.0).to_string(),
            "Consultor: (all values)"
        );
        assert_eq!(
            FilterRecord::spreadsheet("", &Selection::AllValues, 10.0).to_string(),
            "none (grand total)"
        );
        assert_eq!(
            FilterRecord::manual("Consultor", "João", 500.0, 10.0).to_string(),
            "column Consultor, value João, manual total R$ 500,00"
        );
        assert_eq!(
            FilterRecord::manual("Consultor", "João", 500.0, 12.5).percent_label(),
            "12.5%"
        );
    }

    #[test]
    fn test_serde_field_names() {
        let record = FilterRecord::manual("Consultor", "João", 500.0, 10.0);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["column"], "Consultor");
        assert_eq!(json["value"], serde_json::Value::Null);
        assert_eq!(json["manual_total"], 500.0);
        assert_eq!(json["manual_label"], "João");

        let back: FilterRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
