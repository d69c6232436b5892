//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.

use chrono::{DateTime, SecondsFormat, Utc};
use favstore_core::favorites::{FavoriteEntry, TaxonId};
use rusqlite::Row;

/// Convert a SQLite row to a FavoriteEntry.
///
/// Expected columns: taxon_id, created_at
pub fn row_to_favorite(row: &Row) -> rusqlite::Result<FavoriteEntry> {
    let taxon_id: TaxonId = row.get(0)?;
    let created_at: String = row.get(1)?;

    Ok(FavoriteEntry {
        taxon_id,
        created_at: parse_datetime(1, &created_at)?,
    })
}

/// Parse an ISO 8601 / RFC 3339 timestamp stored in column `idx`.
fn parse_datetime(idx: usize, s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
        })
}

/// Format a timestamp for storage.
///
/// Fixed-width, millisecond precision, `Z` suffix: the same shape as the
/// column default, so text order equals chronological order.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime_is_fixed_width_utc() {
        let dt = DateTime::parse_from_rfc3339("2024-06-15T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_datetime(&dt), "2024-06-15T10:30:00.000Z");
    }

    #[test]
    fn test_format_datetime_orders_lexicographically() {
        let earlier = DateTime::parse_from_rfc3339("2024-06-15T10:30:00.999Z")
            .unwrap()
            .with_timezone(&Utc);
        let later = DateTime::parse_from_rfc3339("2024-06-15T10:30:01.001Z")
            .unwrap()
            .with_timezone(&Utc);
        assert!(format_datetime(&earlier) < format_datetime(&later));
    }

    #[test]
    fn test_parse_datetime_accepts_column_default_shape() {
        // strftime('%Y-%m-%dT%H:%M:%fZ') output
        let parsed = parse_datetime(1, "2024-06-15T10:30:00.123Z").unwrap();
        assert_eq!(parsed.timestamp_subsec_millis(), 123);
    }

    #[test]
    fn test_parse_datetime_accepts_second_precision() {
        assert!(parse_datetime(1, "2024-06-15T10:30:00Z").is_ok());
    }

    #[test]
    fn test_parse_datetime_invalid() {
        let result = parse_datetime(1, "not-a-datetime");
        assert!(matches!(
            result,
            Err(rusqlite::Error::FromSqlConversionFailure(1, _, _))
        ));
    }

    #[test]
    fn test_format_then_parse_preserves_millis() {
        let now = Utc::now();
        let parsed = parse_datetime(1, &format_datetime(&now)).unwrap();
        assert_eq!(parsed.timestamp_millis(), now.timestamp_millis());
    }
}
