//! favstore - local, privacy-constrained favorites store.
//!
//! Stores the set of favorited taxon IDs in a single SQLite database and
//! keeps an in-memory mirror for fast membership checks.

pub mod cli;
pub mod config;
pub mod output;
pub mod service;
pub mod storage;

pub use config::Config;
pub use service::FavoritesCache;
