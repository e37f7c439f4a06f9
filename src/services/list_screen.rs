//! State and workflows of a paginated, filterable booking list.

use crate::domain::filter::{FilterSet, FilterState};
use crate::domain::service::ListScope;
use crate::domain::types::{EndpointPath, PageSize};
use crate::dto::list::ListPageData;
use crate::dto::navigation::NavigationState;
use crate::pagination::PageState;
use crate::repository::errors::RepositoryResult;
use crate::repository::{BookingListQuery, BookingListReader, Row};
use crate::services::query_cache::{CachedPage, QueryCache};

/// Monotonically increasing id attached to each dispatched list query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// A list query that has been dispatched but not answered yet.
#[derive(Clone, Debug)]
pub struct PendingFetch {
    pub token: RequestToken,
    pub query: BookingListQuery,
}

/// A booking list bound to one filter endpoint.
#[derive(Debug)]
pub struct ListScreen {
    endpoint: EndpointPath,
    scope: ListScope,
    draft: FilterState,
    applied: Option<FilterSet>,
    page: PageState,
    cache: QueryCache,
    last_token: u64,
}

impl ListScreen {
    pub fn new(endpoint: EndpointPath, scope: ListScope, page_size: PageSize) -> Self {
        Self {
            endpoint,
            scope,
            draft: FilterState::default(),
            applied: None,
            page: PageState::new(page_size),
            cache: QueryCache::new(),
            last_token: 0,
        }
    }

    pub fn endpoint(&self) -> &EndpointPath {
        &self.endpoint
    }

    pub fn page_state(&self) -> PageState {
        self.page
    }

    /// Filter inputs currently shown in the filter panel.
    pub fn draft_filters(&self) -> &FilterState {
        &self.draft
    }

    pub fn draft_filters_mut(&mut self) -> &mut FilterState {
        &mut self.draft
    }

    pub fn applied_filters(&self) -> Option<&FilterSet> {
        self.applied.as_ref()
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// The query describing what the screen currently shows.
    pub fn current_query(&self) -> BookingListQuery {
        let query = BookingListQuery::new(self.endpoint.clone(), self.scope)
            .paginate(self.page.page, self.page.page_size);
        match &self.applied {
            Some(filters) => query.filters(filters.clone()),
            None => query,
        }
    }

    /// Issues a token for the current query.
    pub fn begin_fetch(&mut self) -> PendingFetch {
        self.last_token += 1;
        PendingFetch {
            token: RequestToken(self.last_token),
            query: self.current_query(),
        }
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.last_token
    }

    /// Records the answer to `pending`.
    ///
    /// Only the answer to the most recently dispatched query, while that
    /// query is still the one on screen, updates the page and the total.
    /// A late answer is cached only when its query has no entry yet and is
    /// not the visible one, so it can never replace fresher rows. Returns
    /// whether the answer was accepted.
    pub fn finish_fetch(
        &mut self,
        pending: PendingFetch,
        result: RepositoryResult<(usize, Vec<Row>)>,
    ) -> bool {
        let visible = pending.query == self.current_query();
        let current = self.is_current(pending.token) && visible;

        match result {
            Ok((total, rows)) => {
                if current {
                    self.cache.insert(pending.query, CachedPage { total, rows });
                    self.page.total = total;
                } else if !visible && self.cache.get(&pending.query).is_none() {
                    self.cache.insert(pending.query, CachedPage { total, rows });
                }
            }
            Err(err) => {
                log::error!(
                    "Failed to fetch rows from {}: {err}",
                    pending.query.endpoint
                );
                if current {
                    self.page.total = 0;
                    self.cache.invalidate(&pending.query);
                }
            }
        }

        if !current {
            log::warn!(
                "Discarding stale response for request {:?} from {}",
                pending.token,
                self.endpoint
            );
        }
        current
    }

    /// Shows the current page, querying the endpoint unless it is cached.
    ///
    /// Transport failures are logged and render as an empty page with a
    /// total of zero instead of failing the screen.
    pub fn fetch<R>(&mut self, repo: &R) -> ListPageData
    where
        R: BookingListReader + ?Sized,
    {
        let query = self.current_query();
        if let Some(cached) = self.cache.get(&query) {
            self.page.total = cached.total;
            // Whatever is still in flight now answers a query that is not shown.
            self.last_token += 1;
            return self.page_data();
        }

        let pending = self.begin_fetch();
        let result = repo.list_rows(pending.query.clone());
        self.finish_fetch(pending, result);
        self.page_data()
    }

    /// Re-queries the current page even if it is cached.
    pub fn refresh<R>(&mut self, repo: &R) -> ListPageData
    where
        R: BookingListReader + ?Sized,
    {
        let query = self.current_query();
        self.cache.invalidate(&query);
        self.fetch(repo)
    }

    /// Commits `candidate` as the active filters and returns to the first page.
    ///
    /// A candidate with nothing set behaves exactly like [`Self::clear_filters`].
    pub fn apply_filters<R>(&mut self, repo: &R, candidate: FilterState) -> ListPageData
    where
        R: BookingListReader + ?Sized,
    {
        let Some(filters) = candidate.to_filter_set() else {
            return self.clear_filters(repo);
        };

        self.draft = candidate;
        self.applied = Some(filters);
        self.page.reset();
        self.fetch(repo)
    }

    pub fn clear_filters<R>(&mut self, repo: &R) -> ListPageData
    where
        R: BookingListReader + ?Sized,
    {
        self.draft = FilterState::default();
        self.applied = None;
        self.page.reset();
        self.fetch(repo)
    }

    /// Changes the page size; always returns to the first page.
    pub fn set_page_size<R>(&mut self, repo: &R, page_size: PageSize) -> ListPageData
    where
        R: BookingListReader + ?Sized,
    {
        self.page.set_page_size(page_size);
        self.fetch(repo)
    }

    /// Moves to the zero-based `page`, clamped to the last known page.
    pub fn set_page<R>(&mut self, repo: &R, page: usize) -> ListPageData
    where
        R: BookingListReader + ?Sized,
    {
        self.page.page = page.min(self.page.bar().total_pages() - 1);
        self.fetch(repo)
    }

    /// Reacts to the state a create/edit screen navigated back with.
    pub fn on_navigation<R>(&mut self, repo: &R, state: &NavigationState) -> ListPageData
    where
        R: BookingListReader + ?Sized,
    {
        if state.wants_refresh() {
            let removed = self.cache.invalidate_endpoint(&self.endpoint);
            log::info!("Refreshing {} after save, dropped {removed} cached pages", self.endpoint);
        }
        self.fetch(repo)
    }

    /// Rows of the filtered or unfiltered page, whichever is active.
    pub fn page_data(&self) -> ListPageData {
        let cached = self.cache.get(&self.current_query());
        ListPageData {
            rows: cached.map(|page| page.rows.clone()).unwrap_or_default(),
            total: self.page.total,
            pagination: self.page.bar(),
            filtered: self.applied.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::domain::service::{ServiceDirection, TransportMode};
    use crate::repository::errors::RepositoryError;
    use serde_json::json;

    /// Serves 60 rows and records every query it receives.
    #[derive(Default)]
    struct RecordingRepo {
        queries: RefCell<Vec<BookingListQuery>>,
        fail: bool,
    }

    impl BookingListReader for RecordingRepo {
        fn list_rows(&self, query: BookingListQuery) -> RepositoryResult<(usize, Vec<Row>)> {
            self.queries.borrow_mut().push(query.clone());
            if self.fail {
                return Err(RepositoryError::ConnectionError("refused".to_string()));
            }
            let total = if query.filters.is_some() { 3 } else { 60 };
            let pagination = query.pagination.expect("screens always paginate");
            let rows = (pagination.offset()..total)
                .take(pagination.per_page.get())
                .map(|i| json!({"id": i}))
                .collect();
            Ok((total, rows))
        }
    }

    fn screen() -> ListScreen {
        ListScreen::new(
            EndpointPath::new("/ocean/import/jobs/filter").expect("endpoint"),
            ListScope::new(TransportMode::Ocean, ServiceDirection::Import),
            PageSize::new(25).expect("page size"),
        )
    }

    #[test]
    fn fetch_failure_yields_empty_page() {
        let repo = RecordingRepo {
            fail: true,
            ..RecordingRepo::default()
        };
        let mut screen = screen();

        let data = screen.fetch(&repo);

        assert_eq!(data.total, 0);
        assert!(data.rows.is_empty());
        assert_eq!(data.pagination.range_text(), "0–0 of 0");
        assert!(screen.cache().is_empty());
    }

    #[test]
    fn cached_page_is_not_refetched() {
        let repo = RecordingRepo::default();
        let mut screen = screen();

        screen.fetch(&repo);
        let data = screen.fetch(&repo);

        assert_eq!(repo.queries.borrow().len(), 1);
        assert_eq!(data.rows.len(), 25);
        assert_eq!(data.pagination.range_text(), "1–25 of 60");
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut screen = screen();
        let older = screen.begin_fetch();
        let newer = screen.begin_fetch();

        assert!(screen.finish_fetch(newer, Ok((60, vec![json!({"id": 1})]))));
        assert!(!screen.finish_fetch(older, Ok((7, vec![]))));

        assert_eq!(screen.page_state().total, 60);
        assert_eq!(screen.page_data().rows, vec![json!({"id": 1})]);
    }

    #[test]
    fn late_answer_for_visible_query_keeps_newer_rows() {
        let mut screen = screen();
        let older = screen.begin_fetch();
        let newer = screen.begin_fetch();

        screen.finish_fetch(newer, Ok((61, vec![json!({"job_no": "NEW"})])));
        screen.finish_fetch(older, Ok((60, vec![json!({"job_no": "OLD"})])));

        let data = screen.page_data();
        assert_eq!(data.total, 61);
        assert_eq!(data.rows, vec![json!({"job_no": "NEW"})]);
    }

    #[test]
    fn late_answer_for_visible_query_is_not_shown_before_current_one() {
        let mut screen = screen();
        let older = screen.begin_fetch();
        let _newer = screen.begin_fetch();

        assert!(!screen.finish_fetch(older, Ok((60, vec![json!({"job_no": "OLD"})]))));

        assert!(screen.page_data().rows.is_empty());
        assert_eq!(screen.page_state().total, 0);
    }

    #[test]
    fn in_flight_answer_is_dropped_once_cached_page_is_shown() {
        let repo = RecordingRepo::default();
        let mut screen = screen();
        screen.fetch(&repo);
        screen.apply_filters(
            &repo,
            FilterState {
                customer: Some("C1".to_string()),
                ..FilterState::default()
            },
        );
        let pending = screen.begin_fetch();

        let cleared = screen.clear_filters(&repo);
        let accepted = screen.finish_fetch(pending, Ok((30, vec![])));

        assert!(!accepted);
        assert!(!cleared.filtered);
        let data = screen.page_data();
        assert_eq!(data.total, 60);
        assert_eq!(data.rows.len(), 25);
        assert_eq!(data.pagination.range_text(), "1–25 of 60");
    }

    #[test]
    fn late_answer_for_hidden_query_fills_empty_cache_slot() {
        let mut screen = screen();
        let pending = screen.begin_fetch();
        screen.page.page = 1;
        screen.begin_fetch();

        assert!(!screen.finish_fetch(pending.clone(), Ok((60, vec![json!({"id": 0})]))));

        assert!(screen.cache().get(&pending.query).is_some());
        assert_eq!(screen.page_state().total, 0);
    }

    #[test]
    fn set_page_is_clamped_to_last_page() {
        let repo = RecordingRepo::default();
        let mut screen = screen();
        screen.fetch(&repo);

        let data = screen.set_page(&repo, 99);

        assert_eq!(screen.page_state().page, 2);
        assert_eq!(data.pagination.range_text(), "51–60 of 60");
    }

    #[test]
    fn apply_filters_resets_page_and_selects_filtered_rows() {
        let repo = RecordingRepo::default();
        let mut screen = screen();
        screen.fetch(&repo);
        screen.set_page(&repo, 2);

        let data = screen.apply_filters(
            &repo,
            FilterState {
                customer: Some("C1".to_string()),
                ..FilterState::default()
            },
        );

        assert_eq!(screen.page_state().page, 0);
        assert!(data.filtered);
        assert_eq!(data.total, 3);
        let last = repo.queries.borrow().last().cloned().expect("query sent");
        assert!(last.filters.is_some());
    }

    #[test]
    fn on_navigation_refresh_invalidates_and_refetches() {
        let repo = RecordingRepo::default();
        let mut screen = screen();
        screen.fetch(&repo);

        screen.on_navigation(&repo, &NavigationState::refresh());

        assert_eq!(repo.queries.borrow().len(), 2);
    }
}
