//! Cinescroll-Common: Shared types, IDs, and errors.
//!
//! This crate provides functionality shared between the catalog library and
//! the command-line front-end:
//!
//! - **Typed IDs**: Newtype wrappers for movie and genre identifiers
//! - **Core Types**: The [`SortKey`] enum and its wire representation
//! - **Error Handling**: Common error types and result aliases
//!
//! # Examples
//!
//! ```
//! use cinescroll_common::{GenreId, MovieId, SortKey, Error, Result};
//!
//! let movie = MovieId::from(550u64);
//! assert_eq!(movie.as_str(), "550");
//!
//! let genre: GenreId = "28".parse().unwrap();
//! assert_eq!(genre.to_string(), "28");
//!
//! assert_eq!(SortKey::Rating.as_api_param(), "vote_average.desc");
//!
//! fn example() -> Result<()> {
//!     Err(Error::invalid_input("bad sort key"))
//! }
//! ```

pub mod error;
pub mod ids;
pub mod types;

pub use error::{Error, Result};
pub use ids::*;
pub use types::*;
