//! SQLite schema definitions and SQL query constants.
//!
//! Pure data plus the migration planner; no I/O happens here.

use super::error::UnsupportedSchemaVersion;

/// Schema version written to `PRAGMA user_version` once all migrations ran.
pub const SCHEMA_VERSION: i64 = 1;

/// Ordered migrations. Entry `n` upgrades `user_version` `n` to `n + 1`.
pub const MIGRATIONS: &[&str] = &[MIGRATION_V1];

const MIGRATION_V1: &str = r#"
-- `INT` rather than `INTEGER` keeps taxon_id from aliasing the rowid, so the
-- rowid keeps tracking insertion order for the listing tie-break.
CREATE TABLE IF NOT EXISTS favorites (
    taxon_id INT PRIMARY KEY NOT NULL,
    created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);

CREATE INDEX IF NOT EXISTS idx_favorites_created_at ON favorites(created_at DESC);
"#;

pub const SELECT_USER_VERSION: &str = "PRAGMA user_version";

pub const INSERT_FAVORITE: &str = r#"
INSERT OR IGNORE INTO favorites (taxon_id, created_at)
VALUES (?1, ?2)
"#;

pub const DELETE_FAVORITE: &str = r#"
DELETE FROM favorites
WHERE taxon_id = ?1
"#;

pub const DELETE_ALL_FAVORITES: &str = "DELETE FROM favorites";

pub const SELECT_FAVORITES_NEWEST_FIRST: &str = r#"
SELECT taxon_id, created_at
FROM favorites
ORDER BY created_at DESC, rowid DESC
"#;

pub const SELECT_FAVORITE_KEYS: &str = "SELECT taxon_id FROM favorites";

/// Returns the migrations still to apply to a database at `current` version.
pub fn pending_migrations(
    current: i64,
) -> Result<&'static [&'static str], UnsupportedSchemaVersion> {
    if !(0..=SCHEMA_VERSION).contains(&current) {
        return Err(UnsupportedSchemaVersion {
            found: current,
            supported: SCHEMA_VERSION,
        });
    }
    Ok(&MIGRATIONS[current as usize..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_match_schema_version() {
        assert_eq!(MIGRATIONS.len() as i64, SCHEMA_VERSION);
    }

    #[test]
    fn test_initial_migration_is_idempotent_sql() {
        assert!(MIGRATION_V1.contains("CREATE TABLE IF NOT EXISTS favorites"));
        assert!(MIGRATION_V1.contains("CREATE INDEX IF NOT EXISTS idx_favorites_created_at"));
        assert!(MIGRATION_V1.contains("created_at DESC"));
    }

    #[test]
    fn test_queries_contain_expected_keywords() {
        assert!(INSERT_FAVORITE.contains("INSERT OR IGNORE"));
        assert!(DELETE_FAVORITE.contains("WHERE taxon_id = ?1"));
        assert!(DELETE_ALL_FAVORITES.starts_with("DELETE"));
        assert!(SELECT_FAVORITES_NEWEST_FIRST.contains("ORDER BY created_at DESC, rowid DESC"));
        assert!(SELECT_FAVORITE_KEYS.contains("taxon_id"));
    }

    #[test]
    fn test_pending_migrations_fresh_database() {
        let pending = pending_migrations(0).unwrap();
        assert_eq!(pending.len(), MIGRATIONS.len());
    }

    #[test]
    fn test_pending_migrations_up_to_date() {
        let pending = pending_migrations(SCHEMA_VERSION).unwrap();
        assert!(pending.is_empty());
    }

    #[test]
    fn test_pending_migrations_rejects_newer_schema() {
        let err = pending_migrations(SCHEMA_VERSION + 1).unwrap_err();
        assert_eq!(err.found, SCHEMA_VERSION + 1);
        assert_eq!(err.supported, SCHEMA_VERSION);
    }

    #[test]
    fn test_pending_migrations_rejects_negative_version() {
        assert!(pending_migrations(-1).is_err());
    }
}
