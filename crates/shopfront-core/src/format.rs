//! Price formatting for product cards

/// Currency symbol used when the settings do not override it
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Maximum number of fraction digits shown for a price
const MAX_FRACTION_DIGITS: usize = 3;

/// Format a price as `{symbol}{grouped amount}`.
///
/// The integer part is grouped in thousands with `,`; up to three fraction
/// digits are kept and trailing zeros dropped.
///
/// ```
/// use shopfront_core::format_price;
/// assert_eq!(format_price(1999.0, "₹"), "₹1,999");
/// assert_eq!(format_price(1234567.5, "₹"), "₹1,234,567.5");
/// ```
pub fn format_price(value: f64, symbol: &str) -> String {
    if !value.is_finite() {
        return format!("{symbol}{value}");
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + symbol.len() + 4);
    out.push_str(symbol);
    // "-0" never shows: rounding may leave nothing but zeros
    if value < 0.0 && (int_part != "0" || !frac.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Insert `,` every three digits from the right of a digit string.
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567"), "1,234,567");
        assert_eq!(group_thousands("100000"), "100,000");
    }

    #[test]
    fn test_whole_prices() {
        assert_eq!(format_price(1999.0, "₹"), "₹1,999");
        assert_eq!(format_price(50.0, "₹"), "₹50");
        assert_eq!(format_price(10999.0, "₹"), "₹10,999");
        assert_eq!(format_price(0.0, "$"), "$0");
    }

    #[test]
    fn test_fractional_prices() {
        assert_eq!(format_price(19.99, "₹"), "₹19.99");
        assert_eq!(format_price(1234.5, "₹"), "₹1,234.5");
        assert_eq!(format_price(0.12345, "₹"), "₹0.123");
        assert_eq!(format_price(2.0004, "₹"), "₹2");
    }

    #[test]
    fn test_negative_prices() {
        assert_eq!(format_price(-1500.0, "₹"), "₹-1,500");
        assert_eq!(format_price(-0.0001, "₹"), "₹0");
    }
}
