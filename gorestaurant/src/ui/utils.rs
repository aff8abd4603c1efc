use gorestaurant_api::endpoints::Cents;
use ratatui::style::Color;

use super::theme;
use crate::settings::CurrencyFormat;

/// Format an amount with the configured currency format,
/// e.g. `R$ 1.234,56` for the default format.
pub fn fmt_currency(amount: Cents, currency_format: &CurrencyFormat) -> String {
    let formatted_number = format_number_with_separators(
        amount.inner().unsigned_abs(),
        currency_format.decimal_digits,
        &currency_format.decimal_separator,
        &currency_format.group_separator,
    );
    let sign = if amount.is_negative() { "-" } else { "" };

    if currency_format.currency_symbol.is_empty() {
        format!("{}{}", sign, formatted_number)
    } else if currency_format.symbol_first {
        format!(
            "{}{} {}",
            sign, currency_format.currency_symbol, formatted_number
        )
    } else {
        format!(
            "{}{} {}",
            sign, formatted_number, currency_format.currency_symbol
        )
    }
}

/// Format an amount of cents with thousands separators and decimal separator
fn format_number_with_separators(
    cents: u64,
    decimal_digits: u32,
    decimal_separator: &str,
    group_separator: &str,
) -> String {
    // Rescale from hundredths to the requested number of digits
    let scaled = if decimal_digits >= 2 {
        cents.saturating_mul(10_u64.pow(decimal_digits - 2))
    } else {
        let divisor = 10_u64.pow(2 - decimal_digits);
        cents / divisor + u64::from(cents % divisor >= divisor - divisor / 2)
    };
    let scale = 10_u64.pow(decimal_digits);
    let integer_part = scaled / scale;
    let decimal_part = scaled % scale;

    // Format integer part with group separators
    let integer_str = integer_part.to_string();
    let mut formatted_integer = String::new();
    for (i, c) in integer_str.chars().enumerate() {
        if i > 0 && (integer_str.len() - i) % 3 == 0 {
            formatted_integer.push_str(group_separator);
        }
        formatted_integer.push(c);
    }

    if decimal_digits > 0 {
        let decimal_str = format!("{:0width$}", decimal_part, width = decimal_digits as usize);
        format!("{}{}{}", formatted_integer, decimal_separator, decimal_str)
    } else {
        formatted_integer
    }
}

/// Color for an extra's quantity: dimmed while nothing is picked.
pub fn quantity_color(quantity: u32) -> Color {
    if quantity > 0 {
        theme::COLOR_ACCENT
    } else {
        theme::COLOR_ZERO
    }
}
