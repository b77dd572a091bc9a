//! Cell value types and numeric parsing

use std::fmt;

/// Value of a non-empty cell
///
/// Empty cells are not represented: a row simply has no entry for that
/// column.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Text as it appears in the sheet
    Text(String),

    /// Numeric value (dates are stored as their serial number)
    Number(f64),
}

impl CellValue {
    /// Create a new text value
    pub fn text<S: Into<String>>(s: S) -> Self {
        CellValue::Text(s.into())
    }

    /// Try to read the value as an amount
    ///
    /// Text cells use [`leading_number`], so `"150 reais"` reads as `150`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) if n.is_finite() => Some(*n),
            CellValue::Number(_) => None,
            CellValue::Text(s) => leading_number(s),
        }
    }

    /// Get the text if this is a text cell
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            CellValue::Number(_) => None,
        }
    }

    /// Get the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Text(_) => "text",
            CellValue::Number(_) => "number",
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Number(n) => write!(f, "{}", format_number(*n)),
        }
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::text(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

/// Render a number the way the sheet would show it unformatted
///
/// Integral values have no decimal part (`100`, not `100.0`) and negative
/// zero renders as `0`. Magnitudes of `1e21` and above, or below `1e-6`,
/// switch to exponent form (`1e+21`, `1.5e-7`).
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    let magnitude = n.abs();
    if n.is_finite() && (magnitude >= 1e21 || magnitude < 1e-6) {
        let formatted = format!("{:e}", n);
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => formatted,
        };
    }
    format!("{}", n)
}

/// Parse text that must be a number in its entirety (surrounding whitespace
/// allowed). Non-finite results are rejected.
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parse the longest numeric prefix of `text`
///
/// Leading whitespace is skipped and anything after the number is ignored:
/// `"12.5kg"` gives `12.5`, `"abc"` gives `None`.
pub fn leading_number(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let end = numeric_prefix_len(s)?;
    s[..end].parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Whether [`leading_number`] stops at a decimal comma (`"1.234,56"`)
///
/// The digits after the comma are not part of the parsed amount.
pub fn stops_at_decimal_comma(text: &str) -> bool {
    let s = text.trim_start();
    match numeric_prefix_len(s) {
        Some(end) => {
            let mut rest = s[end..].chars();
            rest.next() == Some(',') && rest.next().map_or(false, |c| c.is_ascii_digit())
        }
        None => false,
    }
}

fn numeric_prefix_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while frac_end < len && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - (end + 1);
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < len && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < len && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    Some(end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_sheet_rendering() {
        assert_eq!(CellValue::Number(100.0).to_string(), "100");
        assert_eq!(CellValue::Number(1.5).to_string(), "1.5");
        assert_eq!(CellValue::Number(-0.0).to_string(), "0");
        assert_eq!(CellValue::text("Ana").to_string(), "Ana");
    }

    #[test]
    fn test_extreme_magnitudes_use_exponent_form() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e22), "-2.5e+22");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn test_stops_at_decimal_comma() {
        assert!(stops_at_decimal_comma("1.234,56"));
        assert!(stops_at_decimal_comma(" 150,00"));
        assert!(!stops_at_decimal_comma("150"));
        assert!(!stops_at_decimal_comma("150, 20"));
        assert!(!stops_at_decimal_comma("abc,12"));
    }

    #[test]
    fn test_parse_number_requires_whole_text() {
        assert_eq!(parse_number("42"), Some(42.0));
        assert_eq!(parse_number(" 3.25 "), Some(3.25));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("42abc"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn test_leading_number() {
        assert_eq!(leading_number("150"), Some(150.0));
        assert_eq!(leading_number("  150 reais"), Some(150.0));
        assert_eq!(leading_number("12.5kg"), Some(12.5));
        assert_eq!(leading_number("-.5"), Some(-0.5));
        assert_eq!(leading_number("5."), Some(5.0));
        assert_eq!(leading_number("2e3x"), Some(2000.0));
        assert_eq!(leading_number("2e"), Some(2.0));
        assert_eq!(leading_number("1.234,56"), Some(1.234));
        assert_eq!(leading_number("abc"), None);
        assert_eq!(leading_number("."), None);
        assert_eq!(leading_number("-"), None);
        assert_eq!(leading_number(""), None);
    }

    #[test]
    fn test_as_number() {
        assert_eq!(CellValue::Number(10.0).as_number(), Some(10.0));
        assert_eq!(CellValue::Number(f64::NAN).as_number(), None);
        assert_eq!(CellValue::text("50").as_number(), Some(50.0));
        assert_eq!(CellValue::text("n/a").as_number(), None);
    }
}
