//! Display formatting for amounts

/// Currency prefix shown before amounts
pub const CURRENCY_PREFIX: &str = "R$";

/// Two decimals with a comma as decimal separator (`1234.5` -> `"1234,50"`)
///
/// Presentation only; computed values are never rounded.
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value).replace('.', ",")
}

/// [`format_amount`] with the currency prefix (`"R$ 165,00"`)
pub fn format_money(value: f64) -> String {
    format!("{} {}", CURRENCY_PREFIX, format_amount(value))
}
