//! Number formatting for amounts on the dashboard (en-US grouping)

/// Inserts a comma every 3 digits from the end of an unsigned digit string
fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Formats a number with thousands separators and at most `max_decimals`
/// fraction digits, trailing zeros dropped
///
/// # Examples
///
/// ```
/// use frontend::shared::components::table::number_format::format_grouped;
/// assert_eq!(format_grouped(188669.7, 3), "188,669.7");
/// ```
pub fn format_grouped(value: f64, max_decimals: usize) -> String {
    let formatted = format!("{:.*}", max_decimals, value.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, dec.trim_end_matches('0')),
        None => (formatted.as_str(), ""),
    };

    let sign = if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };

    if decimal_part.is_empty() {
        format!("{}{}", sign, group_thousands(integer_part))
    } else {
        format!("{}{}.{}", sign, group_thousands(integer_part), decimal_part)
    }
}

/// Dollar amount, e.g. `$27,335.09`
pub fn format_currency(value: f64) -> String {
    let grouped = format_grouped(value, 3);
    match grouped.strip_prefix('-') {
        Some(abs) => format!("-${}", abs),
        None => format!("${}", grouped),
    }
}

/// Splits a dollar amount into its signed whole part and two-digit cents,
/// for the large headline figure: `528976.82 -> ("$528,976", "82")`
pub fn split_money(value: f64) -> (String, String) {
    let cents_total = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents_total > 0 { "-" } else { "" };
    let whole = format!("{}${}", sign, group_thousands(&(cents_total / 100).to_string()));
    let cents = format!("{:02}", cents_total % 100);
    (whole, cents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(227459.0, 3), "227,459");
        assert_eq!(format_grouped(1850430.12, 3), "1,850,430.12");
        assert_eq!(format_grouped(480200.10, 3), "480,200.1");
        assert_eq!(format_grouped(999.0, 3), "999");
        assert_eq!(format_grouped(0.0, 3), "0");
        assert_eq!(format_grouped(-1234.5, 3), "-1,234.5");
    }

    #[test]
    fn test_format_grouped_rounds_to_max_decimals() {
        assert_eq!(format_grouped(167706.40000000002, 3), "167,706.4");
        assert_eq!(format_grouped(1234.5678, 2), "1,234.57");
        assert_eq!(format_grouped(1234.5678, 0), "1,235");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(27335.09), "$27,335.09");
        assert_eq!(format_currency(1420000.0), "$1,420,000");
        assert_eq!(format_currency(-5.5), "-$5.5");
    }

    #[test]
    fn test_split_money() {
        assert_eq!(split_money(528976.82), ("$528,976".to_string(), "82".to_string()));
        assert_eq!(split_money(1420000.0), ("$1,420,000".to_string(), "00".to_string()));
        assert_eq!(split_money(501641.73), ("$501,641".to_string(), "73".to_string()));
    }

    #[test]
    fn test_split_money_keeps_sign() {
        assert_eq!(split_money(-1234.5), ("-$1,234".to_string(), "50".to_string()));
        assert_eq!(split_money(-0.001), ("$0".to_string(), "00".to_string()));
    }
}
