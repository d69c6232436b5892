use async_trait::async_trait;

use super::{FavoriteEntry, Result, TaxonId};

/// Local-only favorites storage.
///
/// Membership and count are answered from memory and never wait on I/O.
/// Everything else is serialized: operations on one instance complete one at
/// a time, in call order.
#[async_trait]
pub trait FavoritesService: Send + Sync {
    /// Returns `true` if the taxon is currently favorited.
    fn is_favorite(&self, taxon_id: TaxonId) -> bool;

    /// Number of favorited taxa.
    fn count(&self) -> usize;

    /// All favorites, most recently added first.
    async fn all_favorites(&self) -> Result<Vec<FavoriteEntry>>;

    /// Favorites a taxon. No-op if it already is.
    async fn add(&self, taxon_id: TaxonId) -> Result<()>;

    /// Unfavorites a taxon. No-op if it is not favorited.
    async fn remove(&self, taxon_id: TaxonId) -> Result<()>;

    /// Flips the favorite state and returns the new one.
    async fn toggle(&self, taxon_id: TaxonId) -> Result<bool>;

    /// Permanently deletes every favorite.
    async fn clear_all(&self) -> Result<()>;

    /// Approximate on-disk size of the store in bytes.
    async fn storage_bytes(&self) -> Result<i64>;
}
