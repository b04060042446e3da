//! Форматирование чисел для таблиц и карточек

/// Разделитель тысяч (запятая) и заданное количество знаков после точки.
///
/// ```
/// # use frontend::shared::number_format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int.to_string(), Some(dec.to_string())),
        None => (formatted.clone(), None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let mut result: String = grouped.chars().rev().collect();

    // "-0.00" не показываем
    let is_zero = result.chars().all(|c| c == '0' || c == ',')
        && decimal_part.as_deref().map_or(true, |d| d.chars().all(|c| c == '0'));
    if value < 0.0 && !is_zero {
        result.insert(0, '-');
    }

    match decimal_part {
        Some(d) => format!("{}.{}", result, d),
        None => result,
    }
}

/// Денежная сумма: `$1,234.50` для USD, `1,234.50 EUR` для остальных валют
pub fn format_money(value: f64, currency: &str) -> String {
    let amount = format_number_with_decimals(value, 2);
    match currency {
        "USD" => match amount.strip_prefix('-') {
            Some(abs) => format!("-${}", abs),
            None => format!("${}", amount),
        },
        other => format!("{} {}", amount, other),
    }
}

pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234567.891, "USD"), "$1,234,567.89");
        assert_eq!(format_money(0.5, "USD"), "$0.50");
        assert_eq!(format_money(-42.0, "USD"), "-$42.00");
        assert_eq!(format_money(99.9, "EUR"), "99.90 EUR");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(1234567.0), "1,234,567");
        assert_eq!(format_number_int(999.0), "999");
        assert_eq!(format_number_int(-1000.0), "-1,000");
        assert_eq!(format_number_int(-0.2), "0");
    }
}
