use serde::Serialize;

use crate::domain::types::PageSize;

fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// Pagination owned by a list screen: zero-based page index, page size and
/// the total reported by the most recent accepted response.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageState {
    pub page: usize,
    pub page_size: PageSize,
    pub total: usize,
}

impl PageState {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page: 0,
            page_size,
            total: 0,
        }
    }

    /// Changes the page size and always returns to the first page.
    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.page = 0;
    }

    pub fn reset(&mut self) {
        self.page = 0;
    }

    pub fn bar(&self) -> PaginationBar {
        PaginationBar::new(self.page_size, self.page + 1, self.total)
    }
}

/// Display model of the pagination control below a list.
///
/// A pure projection of `(page_size, current_page, total_records)`; the page
/// number here is one-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PaginationBar {
    page_size: usize,
    current_page: usize,
    total_records: usize,
}

impl PaginationBar {
    pub fn new(page_size: PageSize, current_page: usize, total_records: usize) -> Self {
        Self {
            page_size: page_size.get(),
            current_page: current_page.max(1),
            total_records,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Never less than one, so an empty list still shows "page 1 of 1".
    pub fn total_pages(&self) -> usize {
        self.total_records.div_ceil(self.page_size).max(1)
    }

    /// Visible range label such as `26–50 of 60`.
    pub fn range_text(&self) -> String {
        if self.total_records == 0 {
            return "0–0 of 0".to_string();
        }
        let first = (self.current_page - 1) * self.page_size + 1;
        let last = (self.current_page * self.page_size).min(self.total_records);
        format!("{first}–{last} of {}", self.total_records)
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// One-based target of the "previous" button, clamped at the first page.
    pub fn prev_page(&self) -> usize {
        self.current_page.saturating_sub(1).max(1)
    }

    /// One-based target of the "next" button, clamped at the last page.
    pub fn next_page(&self) -> usize {
        (self.current_page + 1).min(self.total_pages())
    }

    /// Page numbers to render, `None` marking an elided gap.
    pub fn pages(&self) -> Vec<Option<usize>> {
        get_pages(self.total_pages(), self.current_page, 2, 2, 4, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> PageSize {
        PageSize::new(n).expect("non-zero page size")
    }

    #[test]
    fn total_pages_is_at_least_one() {
        let cases = [
            (25, 0, 1),
            (25, 1, 1),
            (25, 25, 1),
            (25, 26, 2),
            (10, 95, 10),
        ];
        for (page_size, total, expected) in cases {
            let bar = PaginationBar::new(size(page_size), 1, total);
            assert_eq!(bar.total_pages(), expected, "size {page_size} total {total}");
        }
    }

    #[test]
    fn range_text_for_empty_list() {
        assert_eq!(PaginationBar::new(size(25), 1, 0).range_text(), "0–0 of 0");
    }

    #[test]
    fn range_text_for_full_and_partial_pages() {
        assert_eq!(PaginationBar::new(size(25), 2, 60).range_text(), "26–50 of 60");
        assert_eq!(PaginationBar::new(size(25), 3, 60).range_text(), "51–60 of 60");
    }

    #[test]
    fn prev_and_next_are_clamped() {
        let first = PaginationBar::new(size(25), 1, 60);
        assert!(!first.has_prev());
        assert_eq!(first.prev_page(), 1);
        assert!(first.has_next());

        let last = PaginationBar::new(size(25), 3, 60);
        assert!(!last.has_next());
        assert_eq!(last.next_page(), 3);
        assert_eq!(last.prev_page(), 2);
    }

    #[test]
    fn page_window_elides_distant_pages() {
        let bar = PaginationBar::new(size(10), 10, 200);

        assert_eq!(
            bar.pages(),
            vec![
                Some(1),
                Some(2),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                Some(13),
                Some(14),
                None,
                Some(19),
                Some(20),
            ]
        );
    }

    #[test]
    fn changing_page_size_resets_page_index() {
        let mut state = PageState::new(size(25));
        state.page = 4;
        state.total = 300;

        state.set_page_size(size(50));

        assert_eq!(state.page, 0);
        assert_eq!(state.bar().current_page(), 1);
    }
}
