/// Utilities for date and time formatting
use chrono::{DateTime, Utc};

/// `2024-03-15`
pub fn format_date(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d").to_string()
}

/// `2024-03-15 14:02`
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

/// Optional timestamps render as a dash
pub fn format_optional_datetime(value: Option<&DateTime<Utc>>) -> String {
    value.map(format_datetime).unwrap_or_else(|| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_date(&dt), "2024-03-15");
        assert_eq!(format_datetime(&dt), "2024-03-15 14:02");
        assert_eq!(format_optional_datetime(Some(&dt)), "2024-03-15 14:02");
        assert_eq!(format_optional_datetime(None), "—");
    }
}
