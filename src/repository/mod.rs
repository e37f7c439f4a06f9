use serde_json::Value;

use crate::domain::booking::{BookingFormState, JobRecord};
use crate::domain::filter::FilterSet;
use crate::domain::service::ListScope;
use crate::domain::types::{EndpointPath, JobId, PageSize};
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(feature = "client")]
pub mod http;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// Raw list row as returned by a filter endpoint.
pub type Row = Value;

/// Zero-based page index with its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pagination {
    pub page: usize,
    pub per_page: PageSize,
}

impl Pagination {
    /// Row offset sent as the `index` query parameter.
    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.per_page.get())
    }
}

/// One page request against a filter endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookingListQuery {
    pub endpoint: EndpointPath,
    pub scope: ListScope,
    pub filters: Option<FilterSet>,
    pub pagination: Option<Pagination>,
}

impl BookingListQuery {
    pub fn new(endpoint: EndpointPath, scope: ListScope) -> Self {
        Self {
            endpoint,
            scope,
            filters: None,
            pagination: None,
        }
    }

    /// Applies field equalities; an empty set leaves the query unfiltered.
    pub fn filters(mut self, filters: FilterSet) -> Self {
        self.filters = if filters.is_empty() {
            None
        } else {
            Some(filters)
        };
        self
    }

    pub fn paginate(mut self, page: usize, per_page: PageSize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait BookingListReader {
    /// Returns the total number of matching rows and the requested page.
    fn list_rows(&self, query: BookingListQuery) -> RepositoryResult<(usize, Vec<Row>)>;
}

pub trait JobReader {
    fn get_job(&self, id: JobId) -> RepositoryResult<Option<JobRecord>>;
}

pub trait BookingWriter {
    fn create_booking(&self, booking: &BookingFormState) -> RepositoryResult<JobRecord>;
    fn update_booking(&self, id: JobId, booking: &BookingFormState) -> RepositoryResult<JobRecord>;
}
