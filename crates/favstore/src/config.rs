use std::{env, path::PathBuf};

/// Name of the database file inside the store directory.
pub const DATABASE_FILE_NAME: &str = "favorites.sqlite";

/// Store configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Caller-supplied base directory (default: ".")
    pub base_dir: PathBuf,
    /// Subdirectory of `base_dir` holding the database (default: "Favorites")
    pub dir_name: String,
    /// Maximum operations queued for the serialized worker (default: 64)
    pub queue_depth: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `FAVSTORE_BASE_DIR` - Base directory (default: ".")
    /// - `FAVSTORE_DIR_NAME` - Store subdirectory name (default: "Favorites")
    /// - `FAVSTORE_QUEUE_DEPTH` - Worker queue depth, at least 1 (default: 64)
    pub fn from_env() -> Self {
        let defaults = Self::new(".");
        Self {
            base_dir: env::var("FAVSTORE_BASE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.base_dir),
            dir_name: env::var("FAVSTORE_DIR_NAME")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.dir_name),
            queue_depth: env::var("FAVSTORE_QUEUE_DEPTH")
                .ok()
                .and_then(|v| v.parse::<usize>().ok())
                .filter(|&depth| depth > 0)
                .unwrap_or(defaults.queue_depth),
        }
    }

    /// Default configuration rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            dir_name: "Favorites".to_string(),
            queue_depth: 64,
        }
    }

    /// Directory that holds the database file.
    pub fn store_dir(&self) -> PathBuf {
        self.base_dir.join(&self.dir_name)
    }

    /// Full path of the database file.
    pub fn database_path(&self) -> PathBuf {
        self.store_dir().join(DATABASE_FILE_NAME)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
