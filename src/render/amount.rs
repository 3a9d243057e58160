//! Monetary amount formatting.

use rust_decimal::Decimal;

/// Formats an amount with comma-grouped thousands.
///
/// The integer part is grouped in threes from the right. A fractional part is
/// only written when the normalized value has one, using `.` as the decimal
/// mark.
///
/// # Examples
///
/// ```
/// use contract_proposal::render::format_amount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_amount(Decimal::from(80_000)), "80,000");
/// assert_eq!(format_amount(Decimal::from(999)), "999");
/// assert_eq!(format_amount(Decimal::from_str("1234.50").unwrap()), "1,234.5");
/// ```
pub fn format_amount(amount: Decimal) -> String {
    let normalized = amount.normalize();
    let magnitude = normalized.abs();

    let mut formatted = String::new();
    if normalized.is_sign_negative() && !normalized.is_zero() {
        formatted.push('-');
    }
    formatted.push_str(&group_thousands(&magnitude.trunc().to_string()));

    let fraction = magnitude.fract();
    if !fraction.is_zero() {
        // "0.5" -> ".5"
        let fraction = fraction.to_string();
        formatted.push_str(&fraction[1..]);
    }

    formatted
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
