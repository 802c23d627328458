//! Cinescroll - Movie catalog browser
//!
//! This library crate exposes the catalog controller, the TMDB backend, and
//! configuration loading used by the `cinescroll` binary.

pub mod catalog;
pub mod config;
