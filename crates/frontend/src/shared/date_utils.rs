/// Utilities for date formatting
///
/// Table cells show DD.MM.YYYY; date inputs need the bare YYYY-MM-DD part.

/// Date part of an ISO date or datetime string
/// Example: "2024-03-15T14:02:26.123Z" -> "2024-03-15"
pub fn iso_date_part(value: &str) -> &str {
    value.split('T').next().unwrap_or(value)
}

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = iso_date_part(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_date_part() {
        assert_eq!(iso_date_part("2024-03-15T14:02:26.123Z"), "2024-03-15");
        assert_eq!(iso_date_part("2024-03-15"), "2024-03-15");
        assert_eq!(iso_date_part(""), "");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
    }
}
