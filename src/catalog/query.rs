//! The active listing query: a sort order plus an optional genre filter.

use cinescroll_common::{GenreId, SortKey};
use serde::{Deserialize, Serialize};

/// Sort and filter selection for a catalog listing.
///
/// Any change to either field invalidates the accumulated results; see
/// [`CatalogController::set_query`](super::CatalogController::set_query).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// Ordering requested from the remote listing.
    pub sort: SortKey,
    /// Restrict the listing to a single genre. Passed to the API verbatim.
    pub genre: Option<GenreId>,
}

impl CatalogQuery {
    /// A query with the given sort order and no genre filter.
    pub fn new(sort: SortKey) -> Self {
        Self { sort, genre: None }
    }

    /// Replace the genre filter.
    #[must_use]
    pub fn with_genre(mut self, genre: Option<GenreId>) -> Self {
        self.genre = genre;
        self
    }
}
