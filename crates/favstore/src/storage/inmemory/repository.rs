//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use favstore_core::favorites::{sort_newest_first, FavoriteEntry, TaxonId};
use favstore_core::storage::{FavoriteRepository, RepositoryError, Result};

/// Bytes accounted per record by `size_in_bytes`: the key plus a
/// millisecond ISO 8601 timestamp.
const RECORD_BYTES: i64 = 8 + 24;

#[derive(Debug, Default)]
struct Records {
    /// taxon_id -> (insertion sequence, created_at)
    rows: HashMap<TaxonId, (u64, DateTime<Utc>)>,
    next_seq: u64,
}

/// In-memory storage backend for testing.
///
/// Clones share the same records and failure switches.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    records: Arc<RwLock<Records>>,
    fail_reads: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent read fail with `QueryFailed` while `fail` is set.
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Makes every subsequent write fail with `QueryFailed` while `fail` is set.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_read(&self) -> Result<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(RepositoryError::QueryFailed(
                "injected read failure".to_string(),
            ));
        }
        Ok(())
    }

    fn check_write(&self) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(RepositoryError::QueryFailed(
                "injected write failure".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl FavoriteRepository for InMemoryRepository {
    async fn insert(&self, taxon_id: TaxonId) -> Result<bool> {
        self.check_write()?;
        let mut records = self.records.write().await;
        if records.rows.contains_key(&taxon_id) {
            return Ok(false);
        }
        let seq = records.next_seq;
        records.next_seq += 1;
        records.rows.insert(taxon_id, (seq, Utc::now()));
        Ok(true)
    }

    async fn delete(&self, taxon_id: TaxonId) -> Result<bool> {
        self.check_write()?;
        let mut records = self.records.write().await;
        Ok(records.rows.remove(&taxon_id).is_some())
    }

    async fn delete_all(&self) -> Result<u64> {
        self.check_write()?;
        let mut records = self.records.write().await;
        let removed = records.rows.len() as u64;
        records.rows.clear();
        Ok(removed)
    }

    async fn list_by_created_desc(&self) -> Result<Vec<FavoriteEntry>> {
        self.check_read()?;
        let records = self.records.read().await;
        let mut entries: Vec<_> = records
            .rows
            .iter()
            .map(|(&taxon_id, &(seq, created_at))| {
                (seq, FavoriteEntry::new(taxon_id, created_at))
            })
            .collect();
        sort_newest_first(&mut entries);
        Ok(entries.into_iter().map(|(_, entry)| entry).collect())
    }

    async fn all_keys(&self) -> Result<Vec<TaxonId>> {
        self.check_read()?;
        let records = self.records.read().await;
        Ok(records.rows.keys().copied().collect())
    }

    async fn size_in_bytes(&self) -> Result<i64> {
        self.check_read()?;
        let records = self.records.read().await;
        Ok(records.rows.len() as i64 * RECORD_BYTES)
    }
}
