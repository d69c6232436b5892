use async_trait::async_trait;

use crate::favorites::{FavoriteEntry, TaxonId};

use super::Result;

/// Durable storage of favorite records.
///
/// Every method is atomic: it either commits fully or leaves the store
/// untouched. Implementations are owned by a single writer and are not meant
/// to be shared across processes.
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Inserts a record stamped with the current UTC time.
    ///
    /// Insert-or-ignore: an existing record keeps its original timestamp.
    /// Returns `true` when a new row was written.
    async fn insert(&self, taxon_id: TaxonId) -> Result<bool>;

    /// Deletes the record for `taxon_id`. Returns `true` if a row was removed.
    async fn delete(&self, taxon_id: TaxonId) -> Result<bool>;

    /// Deletes every record and returns how many were removed.
    async fn delete_all(&self) -> Result<u64>;

    /// All records, most recently created first.
    ///
    /// Records sharing a timestamp come back in reverse insertion order.
    async fn list_by_created_desc(&self) -> Result<Vec<FavoriteEntry>>;

    /// Every stored taxon ID, in no particular order.
    async fn all_keys(&self) -> Result<Vec<TaxonId>>;

    /// Current on-disk footprint of the store in bytes.
    async fn size_in_bytes(&self) -> Result<i64>;
}
