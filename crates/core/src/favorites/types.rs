use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque catalog key identifying a taxon. Carries no personal data.
pub type TaxonId = i64;

/// A favorited taxon, as returned by listings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub taxon_id: TaxonId,
    /// When the taxon was favorited. Used for display ordering only.
    pub created_at: DateTime<Utc>,
}

impl FavoriteEntry {
    pub fn new(taxon_id: TaxonId, created_at: DateTime<Utc>) -> Self {
        Self {
            taxon_id,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favorite_entry_serializes_iso8601_timestamp() {
        let created_at = DateTime::parse_from_rfc3339("2024-06-15T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let entry = FavoriteEntry::new(42, created_at);

        let json = serde_json::to_string(&entry).unwrap();

        assert!(json.contains(r#""taxon_id":42"#));
        assert!(json.contains("2024-06-15T10:30:00Z"));
    }

    #[test]
    fn test_favorite_entry_deserializes() {
        let json = r#"{"taxon_id":7,"created_at":"2024-01-01T00:00:00.250Z"}"#;
        let entry: FavoriteEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.taxon_id, 7);
        assert_eq!(entry.created_at.timestamp_subsec_millis(), 250);
    }
}
