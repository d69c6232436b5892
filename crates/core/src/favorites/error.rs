use thiserror::Error;

use crate::storage::RepositoryError;

/// Errors surfaced by the favorites service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FavoritesError {
    /// The store could not be created or opened. Fatal to construction.
    #[error("Favorites storage unavailable: {0}")]
    StorageUnavailable(String),
    /// A read against the store failed. The service stays usable.
    #[error("Favorites storage read failed: {0}")]
    StorageRead(RepositoryError),
    /// A mutation failed. The in-memory mirror was left unchanged.
    #[error("Favorites storage write failed: {0}")]
    StorageWrite(RepositoryError),
    /// The serialized worker that owns the store is gone.
    #[error("Favorites worker stopped")]
    WorkerStopped,
}

/// Result type for favorites service operations.
pub type Result<T> = std::result::Result<T, FavoritesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_unavailable_display() {
        let error = FavoritesError::StorageUnavailable("permission denied".to_string());
        assert_eq!(
            error.to_string(),
            "Favorites storage unavailable: permission denied"
        );
    }

    #[test]
    fn test_storage_read_display() {
        let error =
            FavoritesError::StorageRead(RepositoryError::QueryFailed("disk I/O".to_string()));
        assert_eq!(
            error.to_string(),
            "Favorites storage read failed: Query failed: disk I/O"
        );
    }

    #[test]
    fn test_storage_write_display() {
        let error =
            FavoritesError::StorageWrite(RepositoryError::QueryFailed("disk full".to_string()));
        assert_eq!(
            error.to_string(),
            "Favorites storage write failed: Query failed: disk full"
        );
    }

    #[test]
    fn test_worker_stopped_display() {
        assert_eq!(
            FavoritesError::WorkerStopped.to_string(),
            "Favorites worker stopped"
        );
    }
}
