mod error;
mod sorting;
mod traits;
mod types;

pub use error::{FavoritesError, Result};
pub use sorting::sort_newest_first;
pub use traits::FavoritesService;
pub use types::{FavoriteEntry, TaxonId};
