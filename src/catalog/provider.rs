//! Trait definition and types for remote catalog backends.
//!
//! This module defines the [`CatalogApi`] trait that the controller and the
//! detail viewer talk to, along with the validated records an implementation
//! must return. Raw wire shapes never leave the implementation: by the time a
//! [`MovieSummary`] reaches the controller its optional fields have already
//! been normalized.

use async_trait::async_trait;
use chrono::NaiveDate;
use cinescroll_common::{GenreId, MovieId};
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use super::query::CatalogQuery;

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// One entry of a catalog listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieSummary {
    /// Catalog identifier, unique within a result set.
    pub id: MovieId,
    /// Display title. Empty when the remote record carried none.
    pub title: String,
    /// Path fragment of the poster image (e.g. `"/abc.jpg"`).
    pub image_path: Option<String>,
    /// Release or first-air date.
    pub date: Option<NaiveDate>,
    /// Genre identifiers in the order the API returned them.
    pub genre_ids: Vec<GenreId>,
    /// Average community rating (0.0 - 10.0).
    pub rating: f64,
}

impl MovieSummary {
    /// Full image URL for this entry under the given image base URL.
    pub fn image_url(&self, base: &str) -> Option<String> {
        self.image_path
            .as_deref()
            .map(|path| format!("{}{path}", base.trim_end_matches('/')))
    }
}

/// A single page returned by the listing endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingPage {
    /// Entries on this page, in API order.
    pub results: Vec<MovieSummary>,
    /// Total number of pages the API reports for the query.
    pub total_pages: u32,
}

/// An entry of the genre taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    /// Genre identifier usable as a listing filter.
    pub id: GenreId,
    /// Localised genre name.
    pub name: String,
}

// ---------------------------------------------------------------------------
// Detail
// ---------------------------------------------------------------------------

/// Full record for a single movie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieDetail {
    pub id: MovieId,
    pub title: Option<String>,
    pub poster_path: Option<String>,
    pub overview: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub runtime_minutes: Option<u32>,
    /// Names of the production countries.
    pub countries: Vec<String>,
    /// Genre names.
    pub genres: Vec<String>,
    /// Budget in US dollars. `None` when unknown or reported as zero.
    pub budget: Option<u64>,
}

/// A video attached to a movie (trailer, teaser, clip, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Site-specific video key.
    pub key: String,
    /// Hosting site, e.g. `"YouTube"`.
    pub site: String,
    /// Video type, e.g. `"Trailer"` or `"Teaser"`.
    #[serde(rename = "type")]
    pub kind: String,
}

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Async trait implemented by every remote catalog backend.
///
/// Implementations are plain request/response wrappers: no caching, no
/// retries, no rate limiting. They are shared behind an `Arc` so fetches can
/// run on spawned tasks.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Short, lowercase identifier for this backend (e.g. `"tmdb"`).
    fn name(&self) -> &'static str;

    /// Fetch page `page` (1-based) of the listing for `query`.
    async fn discover(&self, query: &CatalogQuery, page: u32) -> Result<ListingPage, ApiError>;

    /// Fetch the genre taxonomy.
    async fn genres(&self) -> Result<Vec<Genre>, ApiError>;

    /// Fetch the full record for a movie.
    async fn movie(&self, id: &MovieId) -> Result<MovieDetail, ApiError>;

    /// Fetch the videos attached to a movie.
    async fn videos(&self, id: &MovieId) -> Result<Vec<Video>, ApiError>;
}
