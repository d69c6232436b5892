//! SQLite storage backend implementation.
//!
//! Uses `rusqlite` for the synchronous work and `tokio-rusqlite` to run it on a
//! dedicated connection thread.

mod conversions;
mod error;
mod repository;
mod schema;

pub use error::UnsupportedSchemaVersion;
pub use repository::SqliteRepository;
