//! Catalog controller: paging, deduplication, and query resets.
//!
//! The controller owns the list state of a browsing session (active query,
//! accumulated results, page cursor, exhaustion flag, error state) and merges
//! listing pages into it.
//!
//! Every fetch is described by a [`PageRequest`] ticket stamped with the query
//! generation it was issued under. Changing the query or reloading page 1
//! bumps the generation, so a response that arrives after a reset no longer
//! matches and is dropped at merge time instead of corrupting the fresh
//! result set.
//!
//! Front-ends running an event loop use the split API:
//!
//! ```rust,ignore
//! let request = controller.begin_load_more()?;      // on scroll
//! let api = controller.api();
//! let response = fetch_page(api.as_ref(), &request).await;  // on a task
//! controller.complete(request, response);           // back on the loop
//! ```
//!
//! Simple callers use the async wrappers [`CatalogController::set_query`],
//! [`CatalogController::load_page`] and [`CatalogController::load_more`],
//! which do all three steps in one call.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::error::{ApiError, FetchError};
use super::provider::{CatalogApi, Genre, ListingPage, MovieSummary};
use super::query::CatalogQuery;
use super::result_set::ResultSet;

/// A listing fetch issued by the controller.
///
/// Carries everything needed to perform the fetch and to decide at merge time
/// whether its response still belongs to the active query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    generation: u64,
    page: u32,
    query: CatalogQuery,
}

impl PageRequest {
    /// Query generation this request was issued under.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// 1-based page number to fetch.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Query to fetch the page for.
    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }
}

/// What merging a listing response did to the controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Page 1 replaced the result set, which now holds `len` entries.
    Replaced { len: usize },
    /// A later page appended `added` previously unseen entries.
    Appended { added: usize },
    /// The page was empty; no further pages will be requested.
    Exhausted,
    /// The fetch failed; the error state was set and results were kept.
    Failed,
    /// The response belonged to an older query generation and was dropped.
    Stale,
}

/// Perform the fetch described by `request`.
pub async fn fetch_page(
    api: &dyn CatalogApi,
    request: &PageRequest,
) -> Result<ListingPage, ApiError> {
    api.discover(&request.query, request.page).await
}

/// List state for one browsing session.
pub struct CatalogController {
    api: Arc<dyn CatalogApi>,
    query: CatalogQuery,
    page: u32,
    results: ResultSet,
    exhausted: bool,
    loading: bool,
    listing_error: Option<FetchError>,
    taxonomy_error: Option<FetchError>,
    genres: Vec<Genre>,
    total_pages: Option<u32>,
    generation: u64,
}

impl CatalogController {
    /// Create a controller with the default query and no results.
    ///
    /// Nothing is fetched until [`set_query`](Self::set_query) (or
    /// [`begin_query`](Self::begin_query)) is called.
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self {
            api,
            query: CatalogQuery::default(),
            page: 1,
            results: ResultSet::new(),
            exhausted: false,
            loading: false,
            listing_error: None,
            taxonomy_error: None,
            genres: Vec::new(),
            total_pages: None,
            generation: 0,
        }
    }

    /// Shared handle to the backend, for running fetches on another task.
    pub fn api(&self) -> Arc<dyn CatalogApi> {
        Arc::clone(&self.api)
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    /// Current page cursor (1-based).
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn results(&self) -> &[MovieSummary] {
        self.results.as_slice()
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Current error state. A listing error takes precedence over a
    /// taxonomy error when both are set.
    pub fn error(&self) -> Option<&FetchError> {
        self.listing_error.as_ref().or(self.taxonomy_error.as_ref())
    }

    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    /// Page count reported by the most recent successful listing response.
    pub fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    // -----------------------------------------------------------------------
    // Issuing requests
    // -----------------------------------------------------------------------

    /// Replace the active query and reset all list state.
    ///
    /// Returns the page-1 request for the new query. Any request issued
    /// before this call becomes stale.
    pub fn begin_query(&mut self, query: CatalogQuery) -> PageRequest {
        self.generation += 1;
        info!(
            generation = self.generation,
            sort = %query.sort,
            genre = ?query.genre,
            "catalog query changed"
        );

        self.query = query;
        self.taxonomy_error = None;
        self.restart()
    }

    /// Request page `page` for the active query.
    ///
    /// Page 1 reloads the listing from scratch: list state is reset and any
    /// request still in flight becomes stale, as with a query change. Later
    /// pages are refused while a fetch is in flight. Fails for page 0.
    pub fn begin_page(&mut self, page: u32) -> cinescroll_common::Result<PageRequest> {
        if page == 0 {
            return Err(cinescroll_common::Error::invalid_input(
                "page numbers start at 1",
            ));
        }
        if page == 1 {
            self.generation += 1;
            info!(generation = self.generation, "reloading catalog from page 1");
            return Ok(self.restart());
        }
        if self.loading {
            debug!(page, "fetch already in flight, not loading page");
            return Err(cinescroll_common::Error::invalid_input(
                "a listing fetch is already in flight",
            ));
        }
        self.loading = true;
        Ok(self.request(page))
    }

    /// Request the page after the cursor.
    ///
    /// Returns `None` without touching any state when the listing is
    /// exhausted or a fetch is already in flight.
    pub fn begin_load_more(&mut self) -> Option<PageRequest> {
        if self.exhausted {
            debug!(page = self.page, "listing exhausted, not loading more");
            return None;
        }
        if self.loading {
            debug!(page = self.page, "fetch already in flight, not loading more");
            return None;
        }
        self.loading = true;
        Some(self.request(self.page + 1))
    }

    /// Reset list state under the current generation and issue page 1.
    fn restart(&mut self) -> PageRequest {
        self.page = 1;
        self.results.clear();
        self.exhausted = false;
        self.listing_error = None;
        self.total_pages = None;
        self.loading = true;

        self.request(1)
    }

    fn request(&self, page: u32) -> PageRequest {
        PageRequest {
            generation: self.generation,
            page,
            query: self.query.clone(),
        }
    }

    // -----------------------------------------------------------------------
    // Merging responses
    // -----------------------------------------------------------------------

    /// Merge the response to `request` into the list state.
    ///
    /// Responses from an older generation are dropped untouched. On success
    /// the cursor moves to the request's page and the error state clears:
    /// an empty page marks the listing exhausted, page 1 replaces the results,
    /// and any other page appends its unseen entries. On failure the error
    /// state is set and results and cursor stay as they were.
    pub fn complete(
        &mut self,
        request: PageRequest,
        response: Result<ListingPage, ApiError>,
    ) -> MergeOutcome {
        if request.generation != self.generation {
            warn!(
                request_generation = request.generation,
                current_generation = self.generation,
                page = request.page,
                "dropping stale listing response"
            );
            return MergeOutcome::Stale;
        }

        self.loading = false;

        let listing = match response {
            Ok(listing) => listing,
            Err(e) => {
                warn!(page = request.page, error = %e, "listing fetch failed");
                self.listing_error = Some(FetchError::Listing(e.to_string()));
                return MergeOutcome::Failed;
            }
        };

        self.listing_error = None;
        self.page = request.page;
        self.total_pages = Some(listing.total_pages);

        if listing.results.is_empty() {
            info!(page = request.page, "listing exhausted");
            self.exhausted = true;
            return MergeOutcome::Exhausted;
        }

        if request.page == 1 {
            let len = self.results.replace(listing.results);
            debug!(len, "page 1 replaced results");
            MergeOutcome::Replaced { len }
        } else {
            let received = listing.results.len();
            let added = self.results.extend(listing.results);
            debug!(
                page = request.page,
                received,
                added,
                total = self.results.len(),
                "merged listing page"
            );
            MergeOutcome::Appended { added }
        }
    }

    // -----------------------------------------------------------------------
    // Async wrappers
    // -----------------------------------------------------------------------

    /// Replace the active query and load its first page.
    pub async fn set_query(&mut self, query: CatalogQuery) -> MergeOutcome {
        let request = self.begin_query(query);
        self.run(request).await
    }

    /// Load page `page` of the active query.
    pub async fn load_page(&mut self, page: u32) -> cinescroll_common::Result<MergeOutcome> {
        let request = self.begin_page(page)?;
        Ok(self.run(request).await)
    }

    /// Load the page after the cursor, unless exhausted or already loading.
    ///
    /// Returns `None` when nothing was fetched.
    pub async fn load_more(&mut self) -> Option<MergeOutcome> {
        let request = self.begin_load_more()?;
        Some(self.run(request).await)
    }

    async fn run(&mut self, request: PageRequest) -> MergeOutcome {
        let response = fetch_page(self.api.as_ref(), &request).await;
        self.complete(request, response)
    }

    /// Load the genre taxonomy.
    ///
    /// On failure the genre list is left as it was and a taxonomy error is
    /// recorded. Taxonomy errors are tracked apart from listing errors, so
    /// neither outcome touches a pending listing error.
    pub async fn load_genres(&mut self) -> Result<&[Genre], FetchError> {
        match self.api.genres().await {
            Ok(genres) => {
                debug!(count = genres.len(), "loaded genre taxonomy");
                self.genres = genres;
                self.taxonomy_error = None;
                Ok(&self.genres)
            }
            Err(e) => {
                warn!(error = %e, "genre fetch failed");
                let err = FetchError::Taxonomy(e.to_string());
                self.taxonomy_error = Some(err.clone());
                Err(err)
            }
        }
    }
}

impl std::fmt::Debug for CatalogController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogController")
            .field("api", &self.api.name())
            .field("query", &self.query)
            .field("page", &self.page)
            .field("results", &self.results.len())
            .field("exhausted", &self.exhausted)
            .field("loading", &self.loading)
            .field("listing_error", &self.listing_error)
            .field("taxonomy_error", &self.taxonomy_error)
            .field("generation", &self.generation)
            .finish()
    }
}
