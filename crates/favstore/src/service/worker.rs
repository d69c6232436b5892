//! Serialized favorites worker.
//!
//! A single Tokio task owns the repository and is the only writer of the
//! mirror. Commands are processed one at a time in the order they were
//! queued. Once dequeued, a command runs to completion even if the caller
//! stops waiting for the reply, so the store and the mirror always move
//! together.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};

use favstore_core::favorites::{FavoriteEntry, FavoritesError, Result, TaxonId};
use favstore_core::storage::FavoriteRepository;

use super::mirror::Mirror;

/// Request sent to the worker, with the channel to send the result back.
pub(crate) enum Command {
    Add {
        taxon_id: TaxonId,
        reply: oneshot::Sender<Result<()>>,
    },
    Remove {
        taxon_id: TaxonId,
        reply: oneshot::Sender<Result<()>>,
    },
    Toggle {
        taxon_id: TaxonId,
        reply: oneshot::Sender<Result<bool>>,
    },
    ClearAll {
        reply: oneshot::Sender<Result<()>>,
    },
    AllFavorites {
        reply: oneshot::Sender<Result<Vec<FavoriteEntry>>>,
    },
    StorageBytes {
        reply: oneshot::Sender<Result<i64>>,
    },
}

pub(crate) struct FavoritesWorker<R> {
    repository: Arc<R>,
    mirror: Mirror,
}

impl<R> FavoritesWorker<R>
where
    R: FavoriteRepository + 'static,
{
    /// Spawns the worker task and returns the queue feeding it.
    ///
    /// The task ends when every sender has been dropped.
    pub(crate) fn spawn(
        repository: Arc<R>,
        mirror: Mirror,
        queue_depth: usize,
    ) -> mpsc::Sender<Command> {
        let (command_tx, mut command_rx) = mpsc::channel::<Command>(queue_depth.max(1));
        let worker = Self { repository, mirror };

        tokio::spawn(async move {
            tracing::debug!("Favorites worker started");

            while let Some(command) = command_rx.recv().await {
                worker.handle(command).await;
            }

            tracing::debug!("Favorites worker shutting down");
        });

        command_tx
    }

    async fn handle(&self, command: Command) {
        // Send results back, ignoring receivers that were dropped.
        match command {
            Command::Add { taxon_id, reply } => {
                let _ = reply.send(self.add(taxon_id).await);
            }
            Command::Remove { taxon_id, reply } => {
                let _ = reply.send(self.remove(taxon_id).await);
            }
            Command::Toggle { taxon_id, reply } => {
                let _ = reply.send(self.toggle(taxon_id).await);
            }
            Command::ClearAll { reply } => {
                let _ = reply.send(self.clear_all().await);
            }
            Command::AllFavorites { reply } => {
                let _ = reply.send(self.all_favorites().await);
            }
            Command::StorageBytes { reply } => {
                let _ = reply.send(self.storage_bytes().await);
            }
        }
    }

    async fn add(&self, taxon_id: TaxonId) -> Result<()> {
        if self.mirror.contains(taxon_id) {
            tracing::trace!(taxon_id, "Already favorited");
            return Ok(());
        }

        let inserted = self.repository.insert(taxon_id).await.map_err(|err| {
            tracing::warn!(taxon_id, error = %err, "Failed to store favorite");
            FavoritesError::StorageWrite(err)
        })?;
        self.mirror.insert(taxon_id);

        tracing::debug!(taxon_id, inserted, "Favorite added");
        Ok(())
    }

    async fn remove(&self, taxon_id: TaxonId) -> Result<()> {
        if !self.mirror.contains(taxon_id) {
            tracing::trace!(taxon_id, "Not favorited");
            return Ok(());
        }

        let deleted = self.repository.delete(taxon_id).await.map_err(|err| {
            tracing::warn!(taxon_id, error = %err, "Failed to delete favorite");
            FavoritesError::StorageWrite(err)
        })?;
        self.mirror.remove(taxon_id);

        tracing::debug!(taxon_id, deleted, "Favorite removed");
        Ok(())
    }

    async fn toggle(&self, taxon_id: TaxonId) -> Result<bool> {
        if self.mirror.contains(taxon_id) {
            self.remove(taxon_id).await?;
            Ok(false)
        } else {
            self.add(taxon_id).await?;
            Ok(true)
        }
    }

    async fn clear_all(&self) -> Result<()> {
        let removed = self.repository.delete_all().await.map_err(|err| {
            tracing::warn!(error = %err, "Failed to clear favorites");
            FavoritesError::StorageWrite(err)
        })?;
        self.mirror.clear();

        tracing::debug!(removed, "Favorites cleared");
        Ok(())
    }

    async fn all_favorites(&self) -> Result<Vec<FavoriteEntry>> {
        self.repository
            .list_by_created_desc()
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, "Failed to list favorites");
                FavoritesError::StorageRead(err)
            })
    }

    async fn storage_bytes(&self) -> Result<i64> {
        self.repository.size_in_bytes().await.map_err(|err| {
            tracing::warn!(error = %err, "Failed to read favorites storage size");
            FavoritesError::StorageRead(err)
        })
    }
}
