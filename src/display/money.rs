//! Money formatting
//!
//! Converts a numeric magnitude into a display string. Total functions with
//! no failure modes; the currency symbol comes from settings.

use crate::models::Entry;

/// Format a value as a monetary string with two decimals
///
/// Negative inputs carry their own leading minus; the kind-based sign prefix
/// is applied separately by [`signed_amount`].
pub fn format_money(value: f64, symbol: &str) -> String {
    if value.is_sign_negative() {
        format!("-{}{:.2}", symbol, value.abs())
    } else {
        format!("{}{:.2}", symbol, value)
    }
}

/// Format an entry's amount with its kind sign, e.g. `-$4.50` or `+$2000.00`
pub fn signed_amount(entry: &Entry, symbol: &str) -> String {
    format!(
        "{}{}",
        entry.kind.sign(),
        format_money(entry.value, symbol)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryKind;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(4.5, "$"), "$4.50");
        assert_eq!(format_money(2000.0, "$"), "$2000.00");
        assert_eq!(format_money(0.0, "$"), "$0.00");
        assert_eq!(format_money(0.05, "$"), "$0.05");
        assert_eq!(format_money(1.005, "€"), "€1.00");
    }

    #[test]
    fn test_format_money_negative() {
        assert_eq!(format_money(-5.0, "$"), "-$5.00");
    }

    #[test]
    fn test_signed_amount() {
        let expense = Entry::new("Coffee", EntryKind::Expense, 4.5);
        let income = Entry::new("Salary", EntryKind::Income, 2000.0);

        assert_eq!(signed_amount(&expense, "$"), "-$4.50");
        assert_eq!(signed_amount(&income, "$"), "+$2000.00");
    }

    #[test]
    fn test_signed_amount_negative_value_keeps_both_signs() {
        // A negative stored value is accepted as-is by the edit contract;
        // the rendering stacks the kind sign on top of the value's own sign.
        let income = Entry::new("Refund", EntryKind::Income, -5.0);
        assert_eq!(signed_amount(&income, "$"), "+-$5.00");
    }
}
