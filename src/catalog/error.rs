//! Error types for catalog fetches.
//!
//! [`ApiError`] is what a [`CatalogApi`](super::CatalogApi) call returns and
//! keeps transport failures, HTTP status failures, and malformed payloads
//! apart. [`FetchError`] is the user-visible error state recorded by the
//! [`CatalogController`](super::CatalogController).

/// Failure of a single request against the remote catalog.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The configured base URL cannot have endpoint paths appended to it.
    #[error("invalid API base URL: {0}")]
    BaseUrl(String),

    /// The request never produced a response (DNS, connect, timeout, ...).
    #[error("request to {endpoint} failed: {source}")]
    Request {
        /// Path of the endpoint, without credentials.
        endpoint: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status code.
    #[error("{endpoint} returned HTTP {status}")]
    Status {
        /// Path of the endpoint, without credentials.
        endpoint: String,
        /// The HTTP status code.
        status: u16,
    },

    /// The response body did not match the expected shape.
    #[error("malformed response from {endpoint}: {source}")]
    Decode {
        /// Path of the endpoint, without credentials.
        endpoint: String,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Returns `true` for errors caused by a malformed payload rather than
    /// by the network or the server.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

/// Error state surfaced to the user after a failed fetch.
///
/// Holds the rendered message rather than the source error so it can be
/// cloned into UI state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The genre taxonomy could not be loaded.
    #[error("failed to load genres: {0}")]
    Taxonomy(String),

    /// A listing page could not be loaded.
    #[error("failed to load movies: {0}")]
    Listing(String),
}
