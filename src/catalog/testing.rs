//! In-memory [`CatalogApi`] used by the unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use cinescroll_common::MovieId;

use super::error::ApiError;
use super::provider::{CatalogApi, Genre, ListingPage, MovieDetail, MovieSummary, Video};
use super::query::CatalogQuery;

enum Scripted {
    Page(ListingPage),
    Fail(u16),
}

/// Serves pre-registered responses and records every listing call.
///
/// Unregistered listing pages come back empty.
#[derive(Default)]
pub(crate) struct ScriptedCatalog {
    pages: Mutex<HashMap<(CatalogQuery, u32), Scripted>>,
    calls: Mutex<Vec<(CatalogQuery, u32)>>,
    genres: Mutex<Option<Vec<Genre>>>,
    details: Mutex<HashMap<MovieId, MovieDetail>>,
    videos: Mutex<HashMap<MovieId, Vec<Video>>>,
}

impl ScriptedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self, query: &CatalogQuery, page: u32, ids: impl IntoIterator<Item = u64>) {
        let listing = ListingPage {
            results: ids.into_iter().map(movie).collect(),
            total_pages: 500,
        };
        self.pages
            .lock()
            .unwrap()
            .insert((query.clone(), page), Scripted::Page(listing));
    }

    pub fn fail(&self, query: &CatalogQuery, page: u32, status: u16) {
        self.pages
            .lock()
            .unwrap()
            .insert((query.clone(), page), Scripted::Fail(status));
    }

    pub fn set_genres(&self, genres: Vec<Genre>) {
        *self.genres.lock().unwrap() = Some(genres);
    }

    pub fn set_detail(&self, detail: MovieDetail) {
        self.details
            .lock()
            .unwrap()
            .insert(detail.id.clone(), detail);
    }

    pub fn set_videos(&self, id: MovieId, videos: Vec<Video>) {
        self.videos.lock().unwrap().insert(id, videos);
    }

    pub fn calls(&self) -> Vec<(CatalogQuery, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

pub(crate) fn movie(id: u64) -> MovieSummary {
    MovieSummary {
        id: MovieId::from(id),
        title: format!("Movie {id}"),
        image_path: Some(format!("/{id}.jpg")),
        date: None,
        genre_ids: Vec::new(),
        rating: 6.5,
    }
}

fn not_found(endpoint: String) -> ApiError {
    ApiError::Status {
        endpoint,
        status: 404,
    }
}

#[async_trait]
impl CatalogApi for ScriptedCatalog {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn discover(&self, query: &CatalogQuery, page: u32) -> Result<ListingPage, ApiError> {
        self.calls.lock().unwrap().push((query.clone(), page));
        match self.pages.lock().unwrap().get(&(query.clone(), page)) {
            Some(Scripted::Page(listing)) => Ok(listing.clone()),
            Some(Scripted::Fail(status)) => Err(ApiError::Status {
                endpoint: "/discover/movie".into(),
                status: *status,
            }),
            None => Ok(ListingPage::default()),
        }
    }

    async fn genres(&self) -> Result<Vec<Genre>, ApiError> {
        self.genres
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| not_found("/genre/movie/list".into()))
    }

    async fn movie(&self, id: &MovieId) -> Result<MovieDetail, ApiError> {
        self.details
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| not_found(format!("/movie/{id}")))
    }

    async fn videos(&self, id: &MovieId) -> Result<Vec<Video>, ApiError> {
        self.videos
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| not_found(format!("/movie/{id}/videos")))
    }
}
