use cinescroll_common::{GenreId, SortKey};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub browse: BrowseConfig,
}

/// Connection settings for the remote catalog.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Root of the REST API, e.g. `https://api.themoviedb.org/3`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent with every request (overridden by `CINESCROLL_API_KEY`)
    #[serde(default)]
    pub api_key: String,

    /// Language tag for localized titles and genre names
    #[serde(default = "default_language")]
    pub language: String,

    /// Prefix joined with poster paths to build image URLs
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,

    /// Per-request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

fn default_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}
fn default_language() -> String {
    "en-US".to_string()
}
fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}
fn default_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            language: default_language(),
            image_base_url: default_image_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Defaults for the `list` command.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BrowseConfig {
    #[serde(default)]
    pub sort: SortKey,

    #[serde(default)]
    pub genre: Option<GenreId>,

    /// Number of pages to load (default: 1)
    #[serde(default = "default_pages")]
    pub pages: u32,
}

fn default_pages() -> u32 {
    1
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            sort: SortKey::default(),
            genre: None,
            pages: default_pages(),
        }
    }
}
