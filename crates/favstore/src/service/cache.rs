//! Write-through favorites cache.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use favstore_core::favorites::{FavoriteEntry, FavoritesError, FavoritesService, Result, TaxonId};
use favstore_core::storage::FavoriteRepository;

use super::mirror::Mirror;
use super::worker::{Command, FavoritesWorker};
#[cfg(feature = "sqlite")]
use crate::{config::Config, storage::SqliteRepository};

/// Favorites service backed by a repository and an in-memory mirror.
///
/// `is_favorite` and `count` read the mirror directly. Every other operation
/// is queued to a single worker task, which runs it against the repository
/// and then updates the mirror only if the repository call succeeded.
///
/// Cloning yields another handle onto the same worker and mirror.
#[derive(Debug, Clone)]
pub struct FavoritesCache {
    commands: mpsc::Sender<Command>,
    mirror: Mirror,
}

impl FavoritesCache {
    /// Seeds the mirror from `repository` and starts the worker.
    ///
    /// Fails with `StorageUnavailable` if the existing keys cannot be read.
    pub async fn new<R>(repository: Arc<R>, queue_depth: usize) -> Result<Self>
    where
        R: FavoriteRepository + 'static,
    {
        let keys = repository
            .all_keys()
            .await
            .map_err(|err| FavoritesError::StorageUnavailable(err.to_string()))?;
        let mirror = Mirror::seeded(keys);

        tracing::info!(count = mirror.len(), "Favorites mirror seeded");

        let commands = FavoritesWorker::spawn(repository, mirror.clone(), queue_depth);
        Ok(Self { commands, mirror })
    }

    /// Opens the SQLite store at `config.database_path()`.
    #[cfg(feature = "sqlite")]
    pub async fn open(config: &Config) -> Result<Self> {
        let repository = SqliteRepository::open(config.store_dir())
            .await
            .map_err(|err| FavoritesError::StorageUnavailable(err.to_string()))?;

        Self::new(Arc::new(repository), config.queue_depth).await
    }

    async fn request<T>(
        &self,
        command: impl FnOnce(oneshot::Sender<Result<T>>) -> Command,
    ) -> Result<T> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(command(reply))
            .await
            .map_err(|_| FavoritesError::WorkerStopped)?;
        response.await.map_err(|_| FavoritesError::WorkerStopped)?
    }
}

#[async_trait]
impl FavoritesService for FavoritesCache {
    fn is_favorite(&self, taxon_id: TaxonId) -> bool {
        self.mirror.contains(taxon_id)
    }

    fn count(&self) -> usize {
        self.mirror.len()
    }

    async fn all_favorites(&self) -> Result<Vec<FavoriteEntry>> {
        self.request(|reply| Command::AllFavorites { reply }).await
    }

    async fn add(&self, taxon_id: TaxonId) -> Result<()> {
        self.request(|reply| Command::Add { taxon_id, reply }).await
    }

    async fn remove(&self, taxon_id: TaxonId) -> Result<()> {
        self.request(|reply| Command::Remove { taxon_id, reply })
            .await
    }

    async fn toggle(&self, taxon_id: TaxonId) -> Result<bool> {
        self.request(|reply| Command::Toggle { taxon_id, reply })
            .await
    }

    async fn clear_all(&self) -> Result<()> {
        self.request(|reply| Command::ClearAll { reply }).await
    }

    async fn storage_bytes(&self) -> Result<i64> {
        self.request(|reply| Command::StorageBytes { reply }).await
    }
}
