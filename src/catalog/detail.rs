//! Detail view for a single movie: the full record plus its trailer link.

use std::sync::Arc;

use cinescroll_common::MovieId;
use serde::Serialize;
use tracing::{debug, warn};

use super::error::ApiError;
use super::provider::{CatalogApi, MovieDetail, Video};

const YOUTUBE_WATCH_URL: &str = "https://www.youtube.com/watch?v=";

/// A playable trailer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trailer {
    /// Site-specific video key.
    pub key: String,
    /// Watch URL for the video.
    pub url: String,
}

/// Everything the detail view shows for one movie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieView {
    pub detail: MovieDetail,
    pub trailer: Option<Trailer>,
}

/// Pick the trailer to show: the first YouTube video typed `"Trailer"`.
pub fn select_trailer(videos: &[Video]) -> Option<Trailer> {
    videos
        .iter()
        .find(|v| v.kind == "Trailer" && v.site == "YouTube")
        .map(|v| Trailer {
            key: v.key.clone(),
            url: format!("{YOUTUBE_WATCH_URL}{}", v.key),
        })
}

/// Fetches detail views from a [`CatalogApi`].
pub struct DetailViewer {
    api: Arc<dyn CatalogApi>,
}

impl DetailViewer {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self { api }
    }

    /// Fetch the record and the videos for `id` concurrently.
    ///
    /// A failed record fetch is an error. The trailer is best-effort: if the
    /// video lookup fails the view is returned without one.
    pub async fn show(&self, id: &MovieId) -> Result<MovieView, ApiError> {
        let (detail, videos) = tokio::join!(self.api.movie(id), self.api.videos(id));
        let detail = detail?;

        let trailer = match videos {
            Ok(videos) => {
                debug!(movie = %id, count = videos.len(), "fetched videos");
                select_trailer(&videos)
            }
            Err(e) => {
                warn!(movie = %id, error = %e, "trailer lookup failed");
                None
            }
        };

        Ok(MovieView { detail, trailer })
    }
}
