//! Text output for the terminal

use std::fmt::Write;

use goal_sheets::{format_money, Calculation, FilterRecord, Selection, Settings};

const NOT_SET: &str = "(not set)";

/// Result block printed after `goal calc`
pub fn calculation(calc: &Calculation) -> String {
    let kind = if calc.manual { "Entered" } else { "Filtered" };
    format!(
        "Filter: {}\n{} total: {}\nGoal with {} increase: {}\n",
        calc.description,
        kind,
        format_money(calc.total),
        calc.record.percent_label(),
        format_money(calc.goal),
    )
}

/// Numbered history, one filter per line
pub fn history(records: &[FilterRecord]) -> String {
    if records.is_empty() {
        return "No filters used yet.\n".to_string();
    }

    let mut out = String::new();
    for (index, record) in records.iter().enumerate() {
        let _ = writeln!(
            out,
            "[{}] Filter: {} | Increase: {}",
            index,
            record,
            record.percent_label()
        );
    }
    out
}

pub fn selection(selection: &Selection) -> String {
    match selection {
        Selection::ManualEntry => "manual entry".to_string(),
        other => other.value().unwrap_or("(all values)").to_string(),
    }
}

/// Stored settings, one per line
pub fn settings(settings: &Settings) -> String {
    let percent = settings
        .percent
        .map(|p| format!("{}%", p))
        .unwrap_or_else(|| NOT_SET.to_string());
    let column = match settings.column.as_deref() {
        Some("") => "(no filter)".to_string(),
        Some(column) => column.to_string(),
        None => NOT_SET.to_string(),
    };
    let chosen = settings
        .selection
        .as_ref()
        .map(selection)
        .unwrap_or_else(|| NOT_SET.to_string());

    let mut out = format!(
        "Percent: {}\nColumn: {}\nSelection: {}\n",
        percent, column, chosen
    );
    if let Some(label) = &settings.manual_label {
        let _ = writeln!(out, "Manual label: {}", label);
    }
    if let Some(amount) = settings.manual_amount {
        let _ = writeln!(out, "Manual amount: {}", format_money(amount));
    }
    out
}

/// Values offered for a column, followed by the manual entry option
pub fn values(column: &str, values: &[String]) -> String {
    let mut out = String::new();
    for value in values {
        let _ = writeln!(out, "{}", value);
    }
    let _ = writeln!(
        out,
        "(manual entry for {}: use --manual --label <LABEL> --amount <AMOUNT>)",
        column
    );
    out
}
