//! Number formatting for table cells

/// Format with a space as thousands separator and a fixed number of decimals
///
/// ```rust,ignore
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        3 => format!("{:.3}", value),
        _ => format!("{:.2}", value),
    };

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };

    // group digits in threes from the right
    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && c != '-' {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}.{}", grouped, d),
        None => grouped,
    }
}

/// Whole numbers without decimals, everything else with up to two
///
/// ```rust,ignore
/// assert_eq!(format_decimal(52.0), "52");
/// assert_eq!(format_decimal(0.5), "0.5");
/// ```
pub fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        return format_number_with_decimals(value, 0);
    }
    let formatted = format_number_with_decimals(value, 2);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1 235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1 234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1 234.567");
        assert_eq!(format_number_with_decimals(-1234567.0, 0), "-1 234 567");
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(52.0), "52");
        assert_eq!(format_decimal(0.0), "0");
        assert_eq!(format_decimal(1.456), "1.46");
        assert_eq!(format_decimal(0.5), "0.5");
        assert_eq!(format_decimal(12.30), "12.3");
        assert_eq!(format_decimal(1.0001), "1");
        assert_eq!(format_decimal(-0.001), "0");
        assert_eq!(format_decimal(1500.25), "1 500.25");
    }
}
