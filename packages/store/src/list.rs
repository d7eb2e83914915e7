//! # Recipe list store
//!
//! [`RecipeListState`] holds what the listing page renders: the current
//! collection, loading/error flags, active filters and pagination.
//! [`RecipeListStore`] drives it against a [`RecipeService`].
//!
//! ## Request sequencing
//!
//! Every fetch takes a [`FetchTicket`] carrying a monotonically increasing
//! request number. A response is applied only when its ticket is still the
//! latest one; anything older is discarded as [`FetchOutcome::Stale`]. Two
//! rapid page changes therefore always end on the page requested last, no
//! matter which response arrives first.
//!
//! ## Failure semantics
//!
//! A failed fetch clears the collection, records a human-readable error and
//! stops loading. Pagination metadata is kept so the same page can be retried.
//!
//! ## Deletes
//!
//! [`RecipeListStore::delete_recipe`] only issues the request. It never
//! re-fetches; the caller decides when to refresh (see [`crate::delete`]).

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cell::StateCell;
use crate::config::ListingConfig;
use crate::error::ServiceError;
use crate::models::{Recipe, RecipeFilters, RecipePage, RecipeQuery};
use crate::pagination::PaginationControls;
use crate::service::RecipeService;

/// Pagination cursor. `1 <= current_page <= total_pages` whenever
/// `total_pages > 0`; otherwise `current_page == 1`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: Option<u64>,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
            total_items: None,
        }
    }
}

impl Pagination {
    fn from_page(page: &RecipePage) -> Self {
        let current_page = if page.total_pages == 0 {
            1
        } else {
            page.current_page.clamp(1, page.total_pages)
        };
        Self {
            current_page,
            total_pages: page.total_pages,
            total_items: page.total_items,
        }
    }
}

/// Handle for one in-flight listing request.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchTicket {
    pub request: u64,
    pub query: RecipeQuery,
}

/// What happened to a completed fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    Failed,
    /// A newer request was issued meanwhile; the response was dropped.
    Stale,
}

/// What the listing grid should show.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ListView<'a> {
    Loading { skeletons: usize },
    Error(&'a str),
    Empty,
    Recipes(&'a [Recipe]),
}

impl ListView<'_> {
    pub fn shows_pagination(&self) -> bool {
        matches!(self, ListView::Recipes(_))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecipeListState {
    pub recipes: Vec<Recipe>,
    /// True until the first response lands, and while any fetch is pending.
    pub is_loading: bool,
    pub error: Option<String>,
    pub filters: RecipeFilters,
    pub pagination: Pagination,
    page_size: u32,
    skeleton_count: usize,
    latest_request: u64,
}

impl Default for RecipeListState {
    fn default() -> Self {
        Self::from_config(&ListingConfig::default())
    }
}

impl RecipeListState {
    pub fn from_config(listing: &ListingConfig) -> Self {
        Self {
            recipes: Vec::new(),
            is_loading: true,
            error: None,
            filters: RecipeFilters::default(),
            pagination: Pagination::default(),
            page_size: listing.page_size.max(1),
            skeleton_count: listing.skeleton_count,
            latest_request: 0,
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Query for the current page and filters.
    pub fn query(&self) -> RecipeQuery {
        RecipeQuery::new(self.pagination.current_page, self.page_size, &self.filters)
    }

    /// Mark a new request as the latest one and start loading.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_request += 1;
        self.is_loading = true;
        self.error = None;
        FetchTicket {
            request: self.latest_request,
            query: self.query(),
        }
    }

    pub fn is_latest(&self, ticket: &FetchTicket) -> bool {
        ticket.request == self.latest_request
    }

    /// Apply a response if `ticket` is still the latest request.
    pub fn complete_fetch(
        &mut self,
        ticket: &FetchTicket,
        result: Result<RecipePage, ServiceError>,
    ) -> FetchOutcome {
        if !self.is_latest(ticket) {
            return FetchOutcome::Stale;
        }
        self.is_loading = false;
        match result {
            Ok(page) => {
                self.pagination = Pagination::from_page(&page);
                self.recipes = page.items;
                self.error = None;
                FetchOutcome::Applied
            }
            Err(err) => {
                self.recipes.clear();
                self.error = Some(err.user_message());
                FetchOutcome::Failed
            }
        }
    }

    /// True when `ticket` asked for a page beyond the pages that now exist.
    fn overshot(&self, ticket: &FetchTicket) -> bool {
        self.pagination.total_pages > 0
            && ticket.query.page > self.pagination.total_pages
            && self.recipes.is_empty()
    }

    /// Move to `page` if it exists. Returns false (and changes nothing) otherwise.
    pub fn select_page(&mut self, page: u32) -> bool {
        if !self.controls().accepts(page) {
            return false;
        }
        self.pagination.current_page = page;
        true
    }

    /// Replace the filters and go back to the first page.
    pub fn apply_filters(&mut self, filters: RecipeFilters) {
        self.filters = filters;
        self.pagination.current_page = 1;
    }

    pub fn controls(&self) -> PaginationControls {
        PaginationControls::new(self.pagination.current_page, self.pagination.total_pages)
    }

    pub fn view(&self) -> ListView<'_> {
        if self.is_loading {
            ListView::Loading {
                skeletons: self.skeleton_count,
            }
        } else if let Some(error) = &self.error {
            ListView::Error(error)
        } else if self.recipes.is_empty() {
            ListView::Empty
        } else {
            ListView::Recipes(&self.recipes)
        }
    }
}

/// Drives a [`RecipeListState`] held in any [`StateCell`].
#[derive(Clone, Debug)]
pub struct RecipeListStore<S, C> {
    service: S,
    state: C,
}

impl<S, C> RecipeListStore<S, C> {
    pub fn new(service: S, state: C) -> Self {
        Self { service, state }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn state(&self) -> &C {
        &self.state
    }
}

impl<S, C> RecipeListStore<S, C>
where
    S: RecipeService,
    C: StateCell<RecipeListState>,
{
    pub fn snapshot(&self) -> RecipeListState {
        self.state.with(Clone::clone)
    }

    /// Load the current page with the current filters.
    ///
    /// When the server reports fewer pages than the one requested (the last
    /// page emptied by a delete), the page is clamped and loaded once more.
    pub async fn fetch_recipes(&self) -> FetchOutcome {
        let (outcome, overshot) = self.fetch_current().await;
        if !overshot {
            return outcome;
        }
        debug!("requested page is past the end, reloading the last page");
        self.fetch_current().await.0
    }

    async fn fetch_current(&self) -> (FetchOutcome, bool) {
        let ticket = self.state.with_mut(RecipeListState::begin_fetch);
        debug!(request = ticket.request, page = ticket.query.page, "fetching recipes");

        let result = self.service.list_recipes(&ticket.query).await;
        if let Err(err) = &result {
            warn!(request = ticket.request, "recipe fetch failed: {err}");
        }

        let outcome = self.state.with_mut(|s| s.complete_fetch(&ticket, result));
        if outcome == FetchOutcome::Stale {
            debug!(request = ticket.request, "discarding stale recipe response");
        }
        let overshot = outcome == FetchOutcome::Applied
            && self.state.with(|s| s.overshot(&ticket));
        (outcome, overshot)
    }

    /// Go to `page` and fetch it. `None` when the page is out of range.
    pub async fn set_page(&self, page: u32) -> Option<FetchOutcome> {
        if !self.state.with_mut(|s| s.select_page(page)) {
            debug!(page, "ignoring out-of-range page");
            return None;
        }
        Some(self.fetch_recipes().await)
    }

    pub async fn set_filters(&self, filters: RecipeFilters) -> FetchOutcome {
        self.state.with_mut(|s| s.apply_filters(filters));
        self.fetch_recipes().await
    }

    pub async fn clear_filters(&self) -> FetchOutcome {
        self.set_filters(RecipeFilters::default()).await
    }

    /// Ask the server to remove a recipe. Does not refresh the listing.
    pub async fn delete_recipe(&self, id: &str) -> Result<(), ServiceError> {
        match self.service.delete_recipe(id).await {
            Ok(()) => {
                info!(recipe = id, "recipe deleted");
                Ok(())
            }
            Err(err) => {
                warn!(recipe = id, "recipe delete failed: {err}");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::future::Future;
    use std::pin::Pin;
    use std::rc::Rc;
    use std::task::Poll;

    use tokio::sync::oneshot;

    use super::*;
    use crate::memory::MemoryRecipeService;
    use crate::models::{Author, RecipeDraft};
    use crate::session::SessionUser;

    type Store<S> = RecipeListStore<S, Rc<RefCell<RecipeListState>>>;

    fn recipe(n: usize) -> Recipe {
        Recipe {
            id: format!("r{n}"),
            title: format!("Recipe {n}"),
            description: "Tasty".into(),
            images: vec![],
            author_id: Some("u1".into()),
            is_anonymous: false,
        }
    }

    fn store_with(count: usize, page_size: u32) -> Store<MemoryRecipeService> {
        let service = MemoryRecipeService::new().with_recipes((1..=count).map(recipe));
        let listing = ListingConfig {
            page_size,
            skeleton_count: 4,
        };
        RecipeListStore::new(
            service,
            Rc::new(RefCell::new(RecipeListState::from_config(&listing))),
        )
    }

    fn ids(state: &RecipeListState) -> Vec<String> {
        state.recipes.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_fresh_state_renders_skeletons() {
        let state = RecipeListState::from_config(&ListingConfig {
            page_size: 12,
            skeleton_count: 4,
        });
        assert_eq!(state.view(), ListView::Loading { skeletons: 4 });
        assert!(!state.view().shows_pagination());
    }

    #[tokio::test]
    async fn test_fetch_populates_collection_and_pagination() {
        let store = store_with(25, 10);
        assert_eq!(store.fetch_recipes().await, FetchOutcome::Applied);

        let state = store.snapshot();
        assert!(!state.is_loading);
        assert_eq!(state.recipes.len(), 10);
        assert_eq!(state.pagination.current_page, 1);
        assert_eq!(state.pagination.total_pages, 3);
        assert_eq!(state.pagination.total_items, Some(25));
        assert!(state.view().shows_pagination());
        assert_eq!(state.controls().previous, None);
    }

    #[tokio::test]
    async fn test_set_page_fetches_that_page() {
        let store = store_with(25, 10);
        store.fetch_recipes().await;

        assert_eq!(store.set_page(3).await, Some(FetchOutcome::Applied));
        let state = store.snapshot();
        assert_eq!(state.pagination.current_page, 3);
        assert_eq!(state.recipes.len(), 5);
        assert_eq!(store.service().list_calls(), 2);
    }

    #[tokio::test]
    async fn test_set_page_out_of_range_is_noop() {
        let store = store_with(25, 10);
        store.fetch_recipes().await;
        let before = store.snapshot();

        assert_eq!(store.set_page(0).await, None);
        assert_eq!(store.set_page(4).await, None);

        assert_eq!(store.snapshot(), before);
        assert_eq!(store.service().list_calls(), 1);
    }

    #[tokio::test]
    async fn test_set_page_before_first_load_is_noop() {
        let store = store_with(5, 10);
        assert_eq!(store.set_page(1).await, None);
        assert_eq!(store.service().list_calls(), 0);
    }

    #[tokio::test]
    async fn test_failure_clears_items_and_keeps_pagination() {
        let store = store_with(25, 10);
        store.fetch_recipes().await;
        store.set_page(2).await;

        store
            .service()
            .fail_list(Some(ServiceError::Network("connection reset".into())));
        assert_eq!(store.fetch_recipes().await, FetchOutcome::Failed);

        let state = store.snapshot();
        assert!(!state.is_loading);
        assert!(state.recipes.is_empty());
        assert_eq!(
            state.view(),
            ListView::Error("Could not reach the server. Check your connection and try again.")
        );
        assert_eq!(state.pagination.current_page, 2);
        assert_eq!(state.pagination.total_pages, 3);

        store.service().fail_list(None);
        assert_eq!(store.fetch_recipes().await, FetchOutcome::Applied);
        let state = store.snapshot();
        assert_eq!(state.error, None);
        assert_eq!(ids(&state)[0], "r15");
    }

    #[tokio::test]
    async fn test_empty_listing_view() {
        let store = store_with(0, 10);
        store.fetch_recipes().await;
        let state = store.snapshot();
        assert_eq!(state.view(), ListView::Empty);
        assert_eq!(state.pagination, Pagination {
            current_page: 1,
            total_pages: 0,
            total_items: Some(0),
        });
    }

    #[tokio::test]
    async fn test_filters_reset_to_first_page() {
        let store = store_with(25, 10);
        store.fetch_recipes().await;
        store.set_page(3).await;

        let outcome = store
            .set_filters(RecipeFilters::default().with_search("recipe 1"))
            .await;
        assert_eq!(outcome, FetchOutcome::Applied);

        let state = store.snapshot();
        assert_eq!(state.pagination.current_page, 1);
        // "Recipe 1" and "Recipe 10".."Recipe 19"
        assert_eq!(state.pagination.total_items, Some(11));
        assert_eq!(state.filters.search, "recipe 1");

        store.clear_filters().await;
        assert_eq!(store.snapshot().pagination.total_items, Some(25));
    }

    #[tokio::test]
    async fn test_delete_does_not_refetch() {
        let store = store_with(3, 10);
        store.service().set_session(Some(SessionUser {
            id: "u1".into(),
            name: None,
            email: None,
            image: None,
        }));
        store.fetch_recipes().await;

        store.delete_recipe("r2").await.unwrap();
        assert_eq!(store.service().list_calls(), 1);
        assert_eq!(ids(&store.snapshot()), ["r3", "r2", "r1"]);

        store.fetch_recipes().await;
        assert_eq!(ids(&store.snapshot()), ["r3", "r1"]);
    }

    #[test]
    fn test_stale_ticket_is_discarded() {
        let mut state = RecipeListState::default();
        let older = state.begin_fetch();
        let newer = state.begin_fetch();

        let page = |id: usize| RecipePage {
            items: vec![recipe(id)],
            current_page: 1,
            total_pages: 1,
            total_items: Some(1),
        };

        // Older response first: dropped, still loading for the newer one.
        assert_eq!(state.complete_fetch(&older, Ok(page(1))), FetchOutcome::Stale);
        assert!(state.is_loading);
        assert!(state.recipes.is_empty());

        assert_eq!(state.complete_fetch(&newer, Ok(page(2))), FetchOutcome::Applied);
        assert!(!state.is_loading);

        // A late failure for an old request cannot clobber the result either.
        assert_eq!(
            state.complete_fetch(&older, Err(ServiceError::Network("late".into()))),
            FetchOutcome::Stale
        );
        assert_eq!(ids(&state), ["r2"]);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_server_page_is_clamped() {
        let mut state = RecipeListState::default();
        let ticket = state.begin_fetch();
        state.complete_fetch(
            &ticket,
            Ok(RecipePage {
                items: vec![recipe(1)],
                current_page: 9,
                total_pages: 4,
                total_items: None,
            }),
        );
        assert_eq!(state.pagination.current_page, 4);
    }

    #[tokio::test]
    async fn test_emptied_last_page_reloads_previous_page() {
        let gate = GatedService::default();
        let store = RecipeListStore::new(
            gate.clone(),
            Rc::new(RefCell::new(RecipeListState::default())),
        );
        let page_of_three = |page: u32| RecipePage {
            items: vec![recipe(page as usize * 100)],
            current_page: page,
            total_pages: 3,
            total_items: Some(25),
        };
        gate.gate(1).send(page_of_three(1)).unwrap();
        store.fetch_recipes().await;
        gate.gate(3).send(page_of_three(3)).unwrap();
        store.set_page(3).await;

        // The only recipe on page 3 was deleted; the server now has two pages.
        gate.gate(3)
            .send(RecipePage {
                items: vec![],
                current_page: 3,
                total_pages: 2,
                total_items: Some(24),
            })
            .unwrap();
        gate.gate(2)
            .send(RecipePage {
                items: vec![recipe(200)],
                current_page: 2,
                total_pages: 2,
                total_items: Some(24),
            })
            .unwrap();
        assert_eq!(store.fetch_recipes().await, FetchOutcome::Applied);

        let state = store.snapshot();
        assert_eq!(state.pagination.current_page, 2);
        assert_eq!(state.pagination.total_pages, 2);
        assert_eq!(ids(&state), ["r200"]);
        assert!(state.view().shows_pagination());
    }

    /// Listing backend whose responses are released by the test, per page.
    #[derive(Clone, Default)]
    struct GatedService {
        pending: Rc<RefCell<HashMap<u32, oneshot::Receiver<RecipePage>>>>,
    }

    impl GatedService {
        fn gate(&self, page: u32) -> oneshot::Sender<RecipePage> {
            let (tx, rx) = oneshot::channel();
            self.pending.borrow_mut().insert(page, rx);
            tx
        }
    }

    fn unused<T>() -> Result<T, ServiceError> {
        Err(ServiceError::Network("not used in this test".into()))
    }

    impl RecipeService for GatedService {
        async fn list_recipes(&self, query: &RecipeQuery) -> Result<RecipePage, ServiceError> {
            let rx = self
                .pending
                .borrow_mut()
                .remove(&query.page)
                .ok_or_else(|| ServiceError::Network(format!("no gate for page {}", query.page)))?;
            rx.await
                .map_err(|_| ServiceError::Network("gate dropped".into()))
        }

        async fn get_recipe(&self, _id: &str) -> Result<Recipe, ServiceError> {
            unused()
        }

        async fn create_recipe(&self, _draft: &RecipeDraft) -> Result<Recipe, ServiceError> {
            unused()
        }

        async fn update_recipe(&self, _id: &str, _draft: &RecipeDraft) -> Result<Recipe, ServiceError> {
            unused()
        }

        async fn delete_recipe(&self, _id: &str) -> Result<(), ServiceError> {
            unused()
        }

        async fn get_user(&self, _id: &str) -> Result<Author, ServiceError> {
            unused()
        }
    }

    fn page_of(page: u32) -> RecipePage {
        RecipePage {
            items: vec![recipe(page as usize * 100)],
            current_page: page,
            total_pages: 5,
            total_items: Some(50),
        }
    }

    /// Poll a future once, returning its output if it finished.
    async fn poll_once<F: Future>(fut: Pin<&mut F>) -> Option<F::Output> {
        let mut fut = fut;
        std::future::poll_fn(|cx| {
            Poll::Ready(match fut.as_mut().poll(cx) {
                Poll::Ready(out) => Some(out),
                Poll::Pending => None,
            })
        })
        .await
    }

    #[tokio::test]
    async fn test_rapid_page_changes_keep_latest_page() {
        let gate = GatedService::default();
        let store = RecipeListStore::new(
            gate.clone(),
            Rc::new(RefCell::new(RecipeListState::default())),
        );

        gate.gate(1).send(page_of(1)).unwrap();
        assert_eq!(store.fetch_recipes().await, FetchOutcome::Applied);

        let to_page_two = gate.gate(2);
        let to_page_three = gate.gate(3);

        let mut first = Box::pin(store.set_page(2));
        let mut second = Box::pin(store.set_page(3));
        assert!(poll_once(first.as_mut()).await.is_none());
        assert!(poll_once(second.as_mut()).await.is_none());
        assert!(store.snapshot().is_loading);

        // Page 3 answers first, page 2 arrives late.
        to_page_three.send(page_of(3)).unwrap();
        assert_eq!(second.await, Some(FetchOutcome::Applied));
        to_page_two.send(page_of(2)).unwrap();
        assert_eq!(first.await, Some(FetchOutcome::Stale));

        let state = store.snapshot();
        assert_eq!(state.pagination.current_page, 3);
        assert_eq!(ids(&state), ["r300"]);
        assert!(!state.is_loading);
    }
}
