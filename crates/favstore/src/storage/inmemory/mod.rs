//! In-memory storage backend for testing.
//!
//! Stores records in a HashMap wrapped in `Arc<RwLock<_>>`. Reads and writes
//! can be switched to fail, which lets tests drive the service through
//! storage errors without touching the disk.
//!
//! # Example
//!
//! ```rust,ignore
//! use favstore::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! repo.fail_writes(true);
//! ```

mod repository;

pub use repository::InMemoryRepository;
