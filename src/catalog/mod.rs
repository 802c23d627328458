//! Movie catalog: remote listing, list assembly, and detail view.
//!
//! # Module layout
//!
//! - [`provider`] -- The [`CatalogApi`] trait and the records it returns.
//! - [`providers`] -- Concrete backends (TMDB).
//! - [`query`] -- Sort and genre selection for a listing.
//! - [`result_set`] -- Deduplicating, order-preserving result accumulation.
//! - [`controller`] -- Paging, exhaustion, and stale-response handling.
//! - [`detail`] -- Single-movie view with trailer selection.
//! - [`error`] -- Request and user-visible error types.

pub mod controller;
pub mod detail;
pub mod error;
pub mod provider;
pub mod providers;
pub mod query;
pub mod result_set;

#[cfg(test)]
pub(crate) mod testing;

pub use controller::{fetch_page, CatalogController, MergeOutcome, PageRequest};
pub use detail::{select_trailer, DetailViewer, MovieView, Trailer};
pub use error::{ApiError, FetchError};
pub use provider::{CatalogApi, Genre, ListingPage, MovieDetail, MovieSummary, Video};
pub use query::CatalogQuery;
pub use result_set::ResultSet;
