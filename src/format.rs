//! Presentation Helpers
//!
//! Timestamp and excerpt formatting for comment rows.

use chrono::{DateTime, Local, Utc};

/// Render a backend timestamp as `DD.MM.YYYY HH:MM` in the viewer's local
/// timezone
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%d.%m.%Y %H:%M").to_string()
}

/// Truncate content for the reply-modal header, char-boundary safe
pub fn excerpt(content: &str, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        return content.to_string();
    }
    let mut out: String = content.chars().take(max_chars).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp_shape() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 9, 5, 59).unwrap();
        let rendered = format_timestamp(&ts);
        // DD.MM.YYYY HH:MM
        assert_eq!(rendered.len(), 16);
        assert_eq!(&rendered[2..3], ".");
        assert_eq!(&rendered[5..6], ".");
        assert_eq!(&rendered[10..11], " ");
        assert_eq!(&rendered[13..14], ":");
    }

    #[test]
    fn test_format_timestamp_uses_viewer_timezone() {
        // A Moscow viewer must see 13:30, not the 10:30 UTC wall time
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 10, 30, 0).unwrap();
        let expected = ts.with_timezone(&Local).format("%d.%m.%Y %H:%M").to_string();
        assert_eq!(format_timestamp(&ts), expected);
    }

    #[test]
    fn test_excerpt_short_content_untouched() {
        assert_eq!(excerpt("привет", 100), "привет");
    }

    #[test]
    fn test_excerpt_truncates_long_content() {
        let long = "x".repeat(150);
        let cut = excerpt(&long, 100);
        assert_eq!(cut.chars().count(), 103);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_excerpt_respects_multibyte_boundaries() {
        let long = "ё".repeat(120);
        let cut = excerpt(&long, 100);
        assert!(cut.starts_with("ёёё"));
        assert!(cut.ends_with("..."));
    }
}
