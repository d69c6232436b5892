//! SQLite repository implementation.
//!
//! Implements `FavoriteRepository` from `favstore_core::storage` on a single
//! `tokio_rusqlite::Connection`, whose background thread serializes every
//! statement.

use std::path::Path;

use async_trait::async_trait;
use chrono::Utc;
use tokio_rusqlite::Connection;

use favstore_core::favorites::{FavoriteEntry, TaxonId};
use favstore_core::storage::{FavoriteRepository, RepositoryError, Result};

use super::conversions::{format_datetime, row_to_favorite};
use super::error::map_tokio_rusqlite_error;
use super::schema;
use crate::config::DATABASE_FILE_NAME;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based favorites repository.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Opens `favorites.sqlite` inside `directory`, creating both if needed.
    ///
    /// Intermediate directories are created. Pending schema migrations run
    /// before the repository is returned.
    pub async fn open(directory: impl AsRef<Path>) -> Result<Self> {
        let directory = directory.as_ref();
        tokio::fs::create_dir_all(directory).await.map_err(|e| {
            RepositoryError::ConnectionFailed(format!(
                "Cannot create directory {}: {e}",
                directory.display()
            ))
        })?;

        let path = directory.join(DATABASE_FILE_NAME);
        let conn = Connection::open(&path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::migrate(&conn).await?;

        tracing::info!(path = %path.display(), "Favorites database opened");
        Ok(Self { conn })
    }

    /// Creates a repository over an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::migrate(&conn).await?;

        Ok(Self { conn })
    }

    /// Brings the schema up to `schema::SCHEMA_VERSION` in one transaction.
    async fn migrate(conn: &Connection) -> Result<()> {
        let applied = conn
            .call(|conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                let current: i64 = tx
                    .query_row(schema::SELECT_USER_VERSION, [], |row| row.get(0))
                    .map_err(wrap_err)?;
                let pending = schema::pending_migrations(current)
                    .map_err(|e| tokio_rusqlite::Error::Other(Box::new(e)))?;

                for migration in pending {
                    tx.execute_batch(migration).map_err(wrap_err)?;
                }
                if !pending.is_empty() {
                    tx.pragma_update(None, "user_version", schema::SCHEMA_VERSION)
                        .map_err(wrap_err)?;
                }
                tx.commit().map_err(wrap_err)?;
                Ok(pending.len())
            })
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        if applied > 0 {
            tracing::debug!(
                applied,
                version = schema::SCHEMA_VERSION,
                "Favorites schema migrated"
            );
        }
        Ok(())
    }
}

#[async_trait]
impl FavoriteRepository for SqliteRepository {
    async fn insert(&self, taxon_id: TaxonId) -> Result<bool> {
        let created_at = format_datetime(&Utc::now());

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::INSERT_FAVORITE,
                        rusqlite::params![taxon_id, created_at],
                    )
                    .map_err(wrap_err)?;
                Ok(rows > 0)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn delete(&self, taxon_id: TaxonId) -> Result<bool> {
        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_FAVORITE, [taxon_id])
                    .map_err(wrap_err)?;
                Ok(rows > 0)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn delete_all(&self) -> Result<u64> {
        self.conn
            .call(|conn| {
                let rows = conn
                    .execute(schema::DELETE_ALL_FAVORITES, [])
                    .map_err(wrap_err)?;
                Ok(rows as u64)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn list_by_created_desc(&self) -> Result<Vec<FavoriteEntry>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_FAVORITES_NEWEST_FIRST)
                    .map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_favorite).map_err(wrap_err)?;

                let mut favorites = Vec::new();
                for row_result in rows {
                    favorites.push(row_result.map_err(wrap_err)?);
                }
                Ok(favorites)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn all_keys(&self) -> Result<Vec<TaxonId>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_FAVORITE_KEYS)
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map([], |row| row.get::<_, TaxonId>(0))
                    .map_err(wrap_err)?;

                let mut keys = Vec::new();
                for row_result in rows {
                    keys.push(row_result.map_err(wrap_err)?);
                }
                Ok(keys)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn size_in_bytes(&self) -> Result<i64> {
        self.conn
            .call(|conn| {
                let page_count: i64 = conn
                    .pragma_query_value(None, "page_count", |row| row.get(0))
                    .map_err(wrap_err)?;
                let page_size: i64 = conn
                    .pragma_query_value(None, "page_size", |row| row.get(0))
                    .map_err(wrap_err)?;
                Ok(page_count * page_size)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}
