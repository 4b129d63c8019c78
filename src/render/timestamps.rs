use chrono::DateTime;

use crate::utils::truncate_chars;

/// Shown in listings for conversations without a timestamp
pub const UNKNOWN_DATE: &str = "Unknown date";

/// Format a message timestamp as `YYYY-MM-DD HH:MM:SS`
///
/// RFC 3339 timestamps keep their own offset (no conversion to local time).
/// Anything else is cut to 19 characters with the `T` separator replaced.
pub fn format_message_time(timestamp: &str) -> String {
    if timestamp.is_empty() {
        return String::new();
    }
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(parsed) => parsed.format("%Y-%m-%d %H:%M:%S").to_string(),
        Err(_) => truncate_chars(timestamp, 19).replace('T', " "),
    }
}

/// Format a conversation timestamp as `YYYY-MM-DD` for listings
pub fn format_list_date(timestamp: &str) -> String {
    if timestamp.is_empty() {
        return UNKNOWN_DATE.to_string();
    }
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(parsed) => parsed.format("%Y-%m-%d").to_string(),
        Err(_) => truncate_chars(timestamp, 10).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message_time_rfc3339() {
        assert_eq!(format_message_time("2025-01-15T10:30:00.123Z"), "2025-01-15 10:30:00");
    }

    #[test]
    fn test_format_message_time_keeps_offset() {
        assert_eq!(format_message_time("2025-01-15T10:30:00+02:00"), "2025-01-15 10:30:00");
    }

    #[test]
    fn test_format_message_time_fallback() {
        assert_eq!(format_message_time("2025-01-15T10:30:00 garbage"), "2025-01-15 10:30:00");
        assert_eq!(format_message_time("yesterday"), "yesterday");
    }

    #[test]
    fn test_format_message_time_empty() {
        assert_eq!(format_message_time(""), "");
    }

    #[test]
    fn test_format_list_date() {
        assert_eq!(format_list_date("2025-01-15T10:30:00Z"), "2025-01-15");
        assert_eq!(format_list_date("2025-01-15 not rfc"), "2025-01-15");
        assert_eq!(format_list_date(""), UNKNOWN_DATE);
    }
}
