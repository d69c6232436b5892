//! Output formatting for command results.
//!
//! Every result is serializable for `--format json` and implements
//! [`Render`] for `--format pretty`.

pub mod json;
pub mod pretty;

use serde::Serialize;

use favstore_core::favorites::{FavoriteEntry, TaxonId};

use crate::cli::OutputFormat;

/// Favorite state of a taxon after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Membership {
    pub taxon_id: TaxonId,
    pub favorite: bool,
}

/// Number of favorites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Count {
    pub count: usize,
}

/// Result of clearing every favorite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cleared {
    pub removed: usize,
}

/// On-disk size of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StorageSize {
    pub bytes: i64,
}

/// Human-readable rendering of a command result.
pub trait Render: Serialize {
    fn pretty(&self) -> String;
}

impl Render for Membership {
    fn pretty(&self) -> String {
        pretty::format_membership(self)
    }
}

impl Render for Count {
    fn pretty(&self) -> String {
        self.count.to_string()
    }
}

impl Render for Cleared {
    fn pretty(&self) -> String {
        format!("Removed {} favorites", self.removed)
    }
}

impl Render for StorageSize {
    fn pretty(&self) -> String {
        pretty::format_size(self.bytes)
    }
}

impl Render for [FavoriteEntry] {
    fn pretty(&self) -> String {
        pretty::format_entries(self)
    }
}

/// Format a value for output.
pub fn format_output<T: Render + ?Sized>(value: &T, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_json(value),
        OutputFormat::Pretty => value.pretty(),
    }
}
