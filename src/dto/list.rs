use crate::pagination::PaginationBar;
use crate::repository::Row;

/// Data required to render a booking list.
#[derive(Debug, Clone)]
pub struct ListPageData {
    /// Rows of the current page.
    pub rows: Vec<Row>,
    /// Total matching rows across all pages.
    pub total: usize,
    /// Pagination control state for the rendered page.
    pub pagination: PaginationBar,
    /// Whether the rows come from the filtered query.
    pub filtered: bool,
}
