//! Concrete catalog backends.
//!
//! Each submodule wraps a single external API and implements the
//! [`CatalogApi`](super::CatalogApi) trait.

pub mod tmdb;

pub use tmdb::TmdbCatalog;
