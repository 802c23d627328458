//! Core type definitions shared by the catalog and the CLI.
//!
//! [`SortKey`] is serialized with short kebab-case names (`"release-date"`)
//! for configuration files, while [`SortKey::as_api_param`] produces the
//! value the remote listing endpoint expects (`"release_date.desc"`).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Error;

/// Ordering applied to a catalog listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Most popular first.
    #[default]
    Popularity,
    /// Highest average rating first.
    Rating,
    /// Newest release first.
    ReleaseDate,
    /// Alphabetical by original title.
    Title,
}

impl SortKey {
    /// Every supported sort key, in menu order.
    pub const ALL: [SortKey; 4] = [
        SortKey::Popularity,
        SortKey::Rating,
        SortKey::ReleaseDate,
        SortKey::Title,
    ];

    /// Value of the `sort_by` query parameter for this key.
    pub fn as_api_param(self) -> &'static str {
        match self {
            Self::Popularity => "popularity.desc",
            Self::Rating => "vote_average.desc",
            Self::ReleaseDate => "release_date.desc",
            Self::Title => "original_title.asc",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Popularity => write!(f, "popularity"),
            Self::Rating => write!(f, "rating"),
            Self::ReleaseDate => write!(f, "release-date"),
            Self::Title => write!(f, "title"),
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = Error;

    /// Accepts both the short names and the raw API parameter values.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "popularity" | "popularity.desc" => Ok(Self::Popularity),
            "rating" | "vote_average.desc" => Ok(Self::Rating),
            "release-date" | "release_date.desc" => Ok(Self::ReleaseDate),
            "title" | "original_title.asc" => Ok(Self::Title),
            _ => Err(Error::unknown_sort_key(s)),
        }
    }
}
