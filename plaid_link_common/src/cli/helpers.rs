//! Helper functions for rendering account data on the console

/// **Formats an amount as a dollar currency string**
///
/// Two decimals and a comma thousands separator, e.g. `1234.5` becomes `$1,234.50`.
///
/// The sign goes after the dollar sign: `-12` becomes `$-12.00`.
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount);
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, "00"));

    format!("${}{}.{}", sign, group_thousands(whole), fraction)
}

/// Inserts a comma between every group of three digits, counting from the right.
fn group_thousands(whole: &str) -> String {
    let len = whole.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}

/// **Capitalizes a label**
///
/// The first character is upper-cased and the rest is lower-cased,
/// so `"money market"` becomes `"Money market"` and `"CD"` becomes `"Cd"`.
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{capitalize, format_currency};

    #[test]
    fn test_thousands_and_two_decimals() {
        assert_eq!(format_currency(1234.5), "$1,234.50");
    }

    #[test]
    fn test_small_amounts() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(100.0), "$100.00");
        assert_eq!(format_currency(999.999), "$1,000.00");
    }

    #[test]
    fn test_millions() {
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(100000.0), "$100,000.00");
    }

    #[test]
    fn test_negative_amount() {
        assert_eq!(format_currency(-12.0), "$-12.00");
        assert_eq!(format_currency(-4321.1), "$-4,321.10");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("checking"), "Checking");
        assert_eq!(capitalize("money market"), "Money market");
        assert_eq!(capitalize("CD"), "Cd");
        assert_eq!(capitalize(""), "");
    }
}
