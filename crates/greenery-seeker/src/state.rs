//! The input tuple driving the pipeline.
//!
//! [`QueryState`] is a plain value. Each user action produces a new state from
//! the previous one; changing the search, the category or the sort order
//! always returns to the first page.

use serde::{Deserialize, Serialize};

use crate::ordering::SortOption;
use crate::paginate::DEFAULT_PAGE_SIZE;

/// Search, category, sort and page selection for one run of the pipeline.
///
/// # Example
///
/// ```
/// use greenery_seeker::{QueryState, SortOption};
///
/// let state = QueryState::new().with_page(4).with_search("solar");
/// assert_eq!(state.page, 1);
///
/// let state = state.with_page(2).with_sort("founded_year-desc".parse::<SortOption>().unwrap());
/// assert_eq!(state.page, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryState {
    /// Free-text search, matched after trimming.
    pub search: String,
    /// Selected category id; `None` means all categories.
    pub category: Option<String>,
    /// Sort key and direction.
    pub sort: SortOption,
    /// Requested page, 1-based.
    pub page: usize,
    /// Items per page.
    pub page_size: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        QueryState {
            search: String::new(),
            category: None,
            sort: SortOption::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryState {
    /// Creates the initial state: no search, all categories, name A-Z, page 1.
    pub fn new() -> Self {
        QueryState::default()
    }

    /// Sets the free-text search and returns to page 1.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self.page = 1;
        self
    }

    /// Selects a category and returns to page 1.
    ///
    /// An empty id selects all categories.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = if category.trim().is_empty() {
            None
        } else {
            Some(category)
        };
        self.page = 1;
        self
    }

    /// Clears the category selection and returns to page 1.
    pub fn all_categories(mut self) -> Self {
        self.category = None;
        self.page = 1;
        self
    }

    /// Sets the sort order and returns to page 1.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self.page = 1;
        self
    }

    /// Requests a page. Pages below 1 become 1.
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    /// Sets the page size. Sizes below 1 become 1.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Drops the search and category, keeping sort and page size.
    pub fn cleared(self) -> Self {
        self.with_search("").all_categories()
    }

    /// Returns the selected category id.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Returns `true` if a search or a category narrows the listing.
    pub fn has_filters(&self) -> bool {
        !self.search.trim().is_empty() || self.category.is_some()
    }

    /// Returns `true` if `other` selects a different result set or order,
    /// ignoring the page.
    pub fn changes_results(&self, other: &QueryState) -> bool {
        self.search.trim() != other.search.trim()
            || self.category != other.category
            || self.sort != other.sort
    }
}
