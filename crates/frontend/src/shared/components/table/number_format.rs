//! Number formatting for table cells and chart axes

/// Formats a number with a space as thousands separator.
///
/// `decimals` above 3 falls back to 2.
///
/// ```
/// use frontend::shared::components::table::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let precision = if decimals > 3 { 2 } else { decimals as usize };
    let formatted = format!("{:.prec$}", value, prec = precision);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", integer_part),
    };

    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Axis label: whole numbers stay whole, small fractions keep two digits,
/// then the unit if any.
pub fn format_axis_value(value: f64, unit: Option<&str>) -> String {
    let decimals = if value.fract() == 0.0 || value.abs() >= 1000.0 {
        0
    } else {
        2
    };
    let number = format_number_with_decimals(value, decimals);
    match unit {
        Some(unit) if !unit.is_empty() => format!("{} {}", number, unit),
        _ => number,
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
        assert_eq!(format_number_with_decimals(1234.567, 9), "1 234.57");
    }

    #[test]
    fn test_format_negative_numbers() {
        assert_eq!(format_number_with_decimals(-1234.56, 2), "-1 234.56");
        assert_eq!(format_number_with_decimals(-123.0, 0), "-123");
        assert_eq!(format_number_with_decimals(-123456.0, 0), "-123 456");
    }

    #[test]
    fn test_format_axis_value() {
        assert_eq!(format_axis_value(1500.0, Some("₽")), "1 500 ₽");
        assert_eq!(format_axis_value(12.5, Some("%")), "12.50 %");
        assert_eq!(format_axis_value(12345.67, None), "12 346");
        assert_eq!(format_axis_value(3.0, Some("")), "3");
    }
}
