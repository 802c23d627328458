//! Order-preserving, id-unique accumulation of listing entries.

use std::collections::HashSet;

use cinescroll_common::MovieId;

use super::provider::MovieSummary;

/// Movies accumulated for the current query.
///
/// Entries keep first-seen order and no two entries share an id. Merging a
/// page that only contains ids already present is a no-op.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    items: Vec<MovieSummary>,
    seen: HashSet<MovieId>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the entries of `page` whose id is not yet present, keeping
    /// their relative order. Returns how many entries were added.
    pub fn extend(&mut self, page: impl IntoIterator<Item = MovieSummary>) -> usize {
        let before = self.items.len();
        for movie in page {
            if self.seen.insert(movie.id.clone()) {
                self.items.push(movie);
            }
        }
        self.items.len() - before
    }

    /// Discard everything and start over from `page`.
    pub fn replace(&mut self, page: impl IntoIterator<Item = MovieSummary>) -> usize {
        self.clear();
        self.extend(page)
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.seen.clear();
    }

    pub fn contains(&self, id: &MovieId) -> bool {
        self.seen.contains(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[MovieSummary] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MovieSummary> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a MovieSummary;
    type IntoIter = std::slice::Iter<'a, MovieSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
