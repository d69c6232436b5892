//! Favorites service.
//!
//! `FavoritesCache` implements `favstore_core::favorites::FavoritesService`
//! over any `FavoriteRepository`, keeping an in-memory mirror of the stored
//! keys for synchronous membership checks.

mod cache;
mod mirror;
mod worker;

pub use cache::FavoritesCache;
