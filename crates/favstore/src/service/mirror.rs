//! In-memory mirror of favorited taxon IDs.

use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use favstore_core::favorites::TaxonId;

/// Set of favorited IDs shared between the cache handle (reads) and the
/// worker (the only writer).
///
/// Guards are held only for in-memory set operations, never across I/O.
#[derive(Debug, Clone, Default)]
pub(crate) struct Mirror {
    ids: Arc<RwLock<HashSet<TaxonId>>>,
}

impl Mirror {
    pub(crate) fn seeded(keys: impl IntoIterator<Item = TaxonId>) -> Self {
        Self {
            ids: Arc::new(RwLock::new(keys.into_iter().collect())),
        }
    }

    pub(crate) fn contains(&self, taxon_id: TaxonId) -> bool {
        self.read().contains(&taxon_id)
    }

    pub(crate) fn len(&self) -> usize {
        self.read().len()
    }

    pub(crate) fn insert(&self, taxon_id: TaxonId) {
        self.write().insert(taxon_id);
    }

    pub(crate) fn remove(&self, taxon_id: TaxonId) {
        self.write().remove(&taxon_id);
    }

    pub(crate) fn clear(&self) {
        self.write().clear();
    }

    #[cfg(test)]
    pub(crate) fn snapshot(&self) -> HashSet<TaxonId> {
        self.read().clone()
    }

    // Poisoning is ignored: every critical section is a single set operation.
    fn read(&self) -> RwLockReadGuard<'_, HashSet<TaxonId>> {
        self.ids.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashSet<TaxonId>> {
        self.ids.write().unwrap_or_else(PoisonError::into_inner)
    }
}
