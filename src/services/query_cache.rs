//! Explicit cache of list pages keyed by the full query.

use std::collections::HashMap;

use crate::domain::types::EndpointPath;
use crate::repository::{BookingListQuery, Row};

/// One cached page of a filter endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct CachedPage {
    pub total: usize,
    pub rows: Vec<Row>,
}

/// Pages keyed by `(endpoint, scope, filters, page, page size)`.
///
/// Unfiltered and filtered pages of the same endpoint live side by side;
/// entries only disappear through [`QueryCache::invalidate_endpoint`] or
/// [`QueryCache::clear`].
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: HashMap<BookingListQuery, CachedPage>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, query: &BookingListQuery) -> Option<&CachedPage> {
        self.entries.get(query)
    }

    pub fn insert(&mut self, query: BookingListQuery, page: CachedPage) {
        self.entries.insert(query, page);
    }

    pub fn invalidate(&mut self, query: &BookingListQuery) -> bool {
        self.entries.remove(query).is_some()
    }

    /// Drops every page fetched from `endpoint`, returning how many were removed.
    pub fn invalidate_endpoint(&mut self, endpoint: &EndpointPath) -> usize {
        let before = self.entries.len();
        self.entries.retain(|query, _| &query.endpoint != endpoint);
        before - self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filter::FilterSet;
    use crate::domain::service::{ListScope, ServiceDirection, TransportMode};
    use crate::domain::types::{FilterValue, PageSize};
    use serde_json::json;

    fn query(endpoint: &str, page: usize) -> BookingListQuery {
        BookingListQuery::new(
            EndpointPath::new(endpoint).expect("endpoint"),
            ListScope::new(TransportMode::Air, ServiceDirection::Export),
        )
        .paginate(page, PageSize::new(25).expect("page size"))
    }

    fn page(total: usize) -> CachedPage {
        CachedPage {
            total,
            rows: vec![json!({"job_no": "AE-1"})],
        }
    }

    #[test]
    fn filtered_and_unfiltered_pages_coexist() {
        let mut cache = QueryCache::new();
        let unfiltered = query("/air/export/filter", 0);
        let mut set = FilterSet::default();
        set.insert("customer_code", FilterValue::new("C1").expect("value"));
        let filtered = unfiltered.clone().filters(set);

        cache.insert(unfiltered.clone(), page(100));
        cache.insert(filtered.clone(), page(3));

        assert_eq!(cache.get(&unfiltered).map(|p| p.total), Some(100));
        assert_eq!(cache.get(&filtered).map(|p| p.total), Some(3));
    }

    #[test]
    fn invalidate_endpoint_only_touches_that_endpoint() {
        let mut cache = QueryCache::new();
        cache.insert(query("/air/export/filter", 0), page(10));
        cache.insert(query("/air/export/filter", 1), page(10));
        cache.insert(query("/ports/filter", 0), page(4));

        let endpoint = EndpointPath::new("/air/export/filter").expect("endpoint");
        let removed = cache.invalidate_endpoint(&endpoint);

        assert_eq!(removed, 2);
        assert_eq!(cache.len(), 1);
        assert!(cache.get(&query("/ports/filter", 0)).is_some());
    }
}
