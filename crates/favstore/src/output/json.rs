//! JSON output formatting.

/// Format a value as JSON.
pub fn format_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use favstore_core::favorites::FavoriteEntry;

    #[test]
    fn test_format_entries_as_json_array() {
        let created_at = Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap();
        let entries = vec![FavoriteEntry::new(42, created_at)];

        let json = format_json(&entries);

        assert_eq!(
            json,
            r#"[{"taxon_id":42,"created_at":"2024-06-15T10:30:00Z"}]"#
        );
    }
}
