//! Pagination & Search State
//!
//! Pure query state shared through [`crate::context::AppContext`].

use crate::models::SortOrder;

/// Comments fetched per page
pub const PAGE_SIZE: u32 = 10;

/// Current listing parameters: page, sort order, and optional search query.
///
/// `has_more` is a heuristic: a full page of results is taken to mean more
/// pages exist, so the last page can come up empty.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState {
    pub page: u32,
    pub limit: u32,
    pub sort: SortOrder,
    pub query: Option<String>,
    pub has_more: bool,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            page: 1,
            limit: PAGE_SIZE,
            sort: SortOrder::default(),
            query: None,
            has_more: true,
        }
    }
}

impl QueryState {
    pub fn offset(&self) -> u32 {
        (self.page - 1) * self.limit
    }

    pub fn is_search(&self) -> bool {
        self.query.is_some()
    }

    pub fn can_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_next(&self) -> bool {
        self.has_more
    }

    /// Advance one page; returns false when already on the last known page
    pub fn next_page(&mut self) -> bool {
        if !self.has_more {
            return false;
        }
        self.page += 1;
        true
    }

    /// Go back one page; returns false when already on page 1
    pub fn prev_page(&mut self) -> bool {
        if self.page <= 1 {
            return false;
        }
        self.page -= 1;
        true
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
        self.page = 1;
    }

    pub fn enter_search(&mut self, query: String) {
        self.query = Some(query);
        self.page = 1;
    }

    pub fn clear_search(&mut self) {
        self.query = None;
        self.page = 1;
    }

    /// Update `has_more` from the size of the page just fetched
    pub fn record_results(&mut self, count: usize) {
        self.has_more = count as u32 == self.limit;
    }
}
