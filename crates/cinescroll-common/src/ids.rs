//! Typed ID wrappers for type safety across cinescroll.
//!
//! The remote catalog hands out numeric ids, but the catalog contract treats
//! them as opaque strings: ids are compared for equality and passed back to
//! the API verbatim, never interpreted. Both wrappers therefore hold a
//! `String` and accept either a JSON number or a JSON string when
//! deserialized.
//!
//! A [`MovieId`] is used as a URL path segment, so it only ever holds ASCII
//! letters, digits, `-` and `_`. Both parsing and deserialization enforce
//! this.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::error::Error;

/// A JSON id that may arrive as either a number or a string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Number(n) => n.to_string(),
            RawId::Text(s) => s,
        }
    }
}

/// Unique identifier for a movie within the remote catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MovieId(String);

impl MovieId {
    /// Borrow the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_path_safe(id: &str) -> bool {
    !id.is_empty()
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

impl<'de> Deserialize<'de> for MovieId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id: String = RawId::deserialize(deserializer)?.into();
        if !is_path_safe(&id) {
            return Err(D::Error::custom(format!("invalid movie id {id:?}")));
        }
        Ok(Self(id))
    }
}

impl From<u64> for MovieId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl std::str::FromStr for MovieId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if !is_path_safe(trimmed) {
            return Err(Error::invalid_id(s));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a genre in the remote taxonomy.
///
/// Unknown genre ids are not rejected here; filtering correctness is left
/// to the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct GenreId(String);

impl GenreId {
    /// Borrow the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for GenreId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self(RawId::deserialize(deserializer)?.into()))
    }
}

impl From<u64> for GenreId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl std::str::FromStr for GenreId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::invalid_id(s));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for GenreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
