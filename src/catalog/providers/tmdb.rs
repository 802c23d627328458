//! TMDB (The Movie Database) catalog backend.
//!
//! Implements [`CatalogApi`] against the TMDB v3 REST API:
//!
//! - `GET /discover/movie` for listing pages
//! - `GET /genre/movie/list` for the genre taxonomy
//! - `GET /movie/{id}` and `GET /movie/{id}/videos` for the detail view
//!
//! Requests are plain pass-through calls with a timeout. There is no retry,
//! caching, or rate limiting. Payloads are decoded into private wire types and
//! normalized here, so the mixed movie/show field names TMDB uses never reach
//! the controller.

use async_trait::async_trait;
use chrono::NaiveDate;
use cinescroll_common::{GenreId, MovieId};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::catalog::error::ApiError;
use crate::catalog::provider::{CatalogApi, Genre, ListingPage, MovieDetail, MovieSummary, Video};
use crate::catalog::query::CatalogQuery;
use crate::config::ApiConfig;

// ---------------------------------------------------------------------------
// Wire types (private)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct TmdbPage {
    results: Vec<TmdbListItem>,
    #[serde(default)]
    total_pages: u32,
}

/// A listing entry. Movie and TV/person shapes use different field names.
#[derive(Debug, Deserialize)]
struct TmdbListItem {
    id: MovieId,
    title: Option<String>,
    name: Option<String>,
    poster_path: Option<String>,
    profile_path: Option<String>,
    release_date: Option<String>,
    first_air_date: Option<String>,
    #[serde(default)]
    genre_ids: Vec<GenreId>,
    #[serde(default)]
    vote_average: f64,
}

#[derive(Debug, Deserialize)]
struct TmdbGenreList {
    genres: Vec<Genre>,
}

#[derive(Debug, Deserialize)]
struct TmdbMovieDetail {
    id: MovieId,
    title: Option<String>,
    poster_path: Option<String>,
    overview: Option<String>,
    release_date: Option<String>,
    runtime: Option<u32>,
    production_countries: Option<Vec<TmdbNamed>>,
    genres: Option<Vec<TmdbNamed>>,
    budget: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct TmdbNamed {
    name: String,
}

#[derive(Debug, Deserialize)]
struct TmdbVideos {
    results: Vec<Video>,
}

/// Treat empty strings the same as missing values.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Parse a `YYYY-MM-DD` date, ignoring empty or malformed values.
fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    value.and_then(|d| NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d").ok())
}

impl From<TmdbListItem> for MovieSummary {
    fn from(item: TmdbListItem) -> Self {
        let date = non_empty(item.first_air_date).or(non_empty(item.release_date));
        MovieSummary {
            id: item.id,
            title: non_empty(item.title)
                .or(non_empty(item.name))
                .unwrap_or_default(),
            image_path: non_empty(item.poster_path).or(non_empty(item.profile_path)),
            date: parse_date(date.as_deref()),
            genre_ids: item.genre_ids,
            rating: item.vote_average,
        }
    }
}

impl From<TmdbMovieDetail> for MovieDetail {
    fn from(raw: TmdbMovieDetail) -> Self {
        let names = |list: Option<Vec<TmdbNamed>>| -> Vec<String> {
            list.unwrap_or_default().into_iter().map(|n| n.name).collect()
        };
        MovieDetail {
            id: raw.id,
            title: non_empty(raw.title),
            poster_path: non_empty(raw.poster_path),
            overview: non_empty(raw.overview),
            release_date: parse_date(raw.release_date.as_deref()),
            runtime_minutes: raw.runtime.filter(|&r| r > 0),
            countries: names(raw.production_countries),
            genres: names(raw.genres),
            budget: raw.budget.filter(|&b| b > 0),
        }
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// TMDB-backed catalog.
///
/// # Examples
///
/// ```no_run
/// use cinescroll::catalog::providers::TmdbCatalog;
/// use cinescroll::config::ApiConfig;
///
/// let config = ApiConfig {
///     api_key: "your-api-key".into(),
///     ..ApiConfig::default()
/// };
/// let catalog = TmdbCatalog::new(&config).unwrap();
/// ```
pub struct TmdbCatalog {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
    language: String,
}

impl TmdbCatalog {
    /// Build a client from the API section of the configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(ApiError::Client)?;
        let base_url = Url::parse(config.base_url.trim_end_matches('/'))
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| ApiError::BaseUrl(config.base_url.clone()))?;
        Ok(Self {
            http,
            base_url,
            api_key: config.api_key.clone(),
            language: config.language.clone(),
        })
    }

    /// Append `segments` to the base URL path, percent-encoding each one.
    fn endpoint_url(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::BaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET the endpoint at `segments` with the API key (and language, if
    /// `localized`) plus `extra_params`, and decode the JSON body.
    async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        localized: bool,
        extra_params: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.endpoint_url(segments)?;
        let path = format!("/{}", segments.join("/"));
        let mut params: Vec<(&str, &str)> = vec![("api_key", self.api_key.as_str())];
        if localized {
            params.push(("language", self.language.as_str()));
        }
        params.extend_from_slice(extra_params);

        debug!(endpoint = %path, params = ?extra_params, "TMDB request");

        let request_error = |source| ApiError::Request {
            endpoint: path.clone(),
            source,
        };

        let resp = self
            .http
            .get(url)
            .query(&params)
            .send()
            .await
            .map_err(request_error)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint: path.clone(),
                status: status.as_u16(),
            });
        }

        let body = resp.text().await.map_err(request_error)?;
        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            endpoint: path,
            source,
        })
    }
}

#[async_trait]
impl CatalogApi for TmdbCatalog {
    fn name(&self) -> &'static str {
        "tmdb"
    }

    async fn discover(&self, query: &CatalogQuery, page: u32) -> Result<ListingPage, ApiError> {
        let page_str = page.to_string();
        let mut params = vec![
            ("sort_by", query.sort.as_api_param()),
            ("page", page_str.as_str()),
        ];
        if let Some(genre) = &query.genre {
            params.push(("with_genres", genre.as_str()));
        }

        let body: TmdbPage = self.get(&["discover", "movie"], true, &params).await?;
        Ok(ListingPage {
            results: body.results.into_iter().map(MovieSummary::from).collect(),
            total_pages: body.total_pages,
        })
    }

    async fn genres(&self) -> Result<Vec<Genre>, ApiError> {
        let body: TmdbGenreList = self.get(&["genre", "movie", "list"], true, &[]).await?;
        Ok(body.genres)
    }

    async fn movie(&self, id: &MovieId) -> Result<MovieDetail, ApiError> {
        let raw: TmdbMovieDetail = self.get(&["movie", id.as_str()], true, &[]).await?;
        Ok(raw.into())
    }

    async fn videos(&self, id: &MovieId) -> Result<Vec<Video>, ApiError> {
        // Not localized: trailers are mostly published without a translation.
        let body: TmdbVideos = self
            .get(&["movie", id.as_str(), "videos"], false, &[])
            .await?;
        Ok(body.results)
    }
}
