//! Pipeline composition and browsing sessions.
//!
//! [`query`] runs the full pipeline over a snapshot:
//!
//! ```text
//! records ─▶ filter(search, category) ─▶ sort(key, dir) ─▶ paginate(page) ─▶ QueryResult
//! ```
//!
//! It is a pure function of its inputs and is meant to be re-run in full on
//! every input change. [`Browser`] wraps it for callers that keep a session:
//! it remembers the previous result size so it can apply the page-reset rule
//! when the result set shrinks under the current page.

use serde::Serialize;

use crate::filter::filter;
use crate::highlight::{highlight, HighlightSpan};
use crate::ordering::{sort, SortOption};
use crate::paginate::{paginate, total_pages, PageMeta, ShrinkPolicy};
use crate::record::Listing;
use crate::state::QueryState;

/// The page of records produced by one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult<'a, T> {
    /// Records on the current page, in sorted order.
    pub items: Vec<&'a T>,
    /// Pagination metadata; `meta.total_items` is the number of matches.
    pub meta: PageMeta,
    /// Size of the snapshot before filtering.
    pub total_records: usize,
    /// The search the page was produced for.
    pub search: String,
}

impl<'a, T> QueryResult<'a, T> {
    /// Number of records that passed the filter.
    pub fn matched(&self) -> usize {
        self.meta.total_items
    }

    /// Highlights `text` against the search that produced this page.
    pub fn highlight(&self, text: &str) -> Vec<HighlightSpan> {
        highlight(text, &self.search)
    }
}

fn filter_and_sort<'a, T: Listing>(records: &'a [T], state: &QueryState) -> Vec<&'a T> {
    let filtered = filter(records, &state.search, state.category());
    sort(&filtered, state.sort)
}

fn page_of<'a, T>(
    sorted: &[&'a T],
    total_records: usize,
    state: &QueryState,
    page: usize,
) -> QueryResult<'a, T> {
    let page = paginate(sorted, state.page_size, page);
    QueryResult {
        items: page.items,
        meta: page.meta,
        total_records,
        search: state.search.clone(),
    }
}

/// Runs filter, sort and paginate over `records`.
///
/// The requested page is clamped into `[1, total_pages]`.
///
/// # Example
///
/// ```
/// use greenery_seeker::{query, Company, QueryState};
///
/// let records = vec![
///     Company::new("1", "Vestas").description("Wind turbines"),
///     Company::new("2", "First Solar").description("Photovoltaics"),
///     Company::new("3", "SunPower").description("Residential solar"),
/// ];
///
/// let result = query(&records, &QueryState::new().with_search("solar"));
/// let names: Vec<&str> = result.items.iter().map(|c| c.name.as_str()).collect();
/// assert_eq!(names, vec!["First Solar", "SunPower"]);
/// assert_eq!(result.meta.summary(), "Showing 1 to 2 of 2");
/// ```
pub fn query<'a, T: Listing>(records: &'a [T], state: &QueryState) -> QueryResult<'a, T> {
    let sorted = filter_and_sort(records, state);
    page_of(&sorted, records.len(), state, state.page)
}

/// A browsing session over one snapshot.
///
/// Every method applies one user action, re-runs the whole pipeline and
/// returns the new page. Page handling follows these rules:
///
/// - a new search, category or sort order starts again at page 1;
/// - when the number of matches changes (or the page size does) and the
///   current page no longer exists, the [`ShrinkPolicy`] decides, which by
///   default also goes back to page 1;
/// - a page request past the end, with nothing else changed, is clamped to
///   the last page.
#[derive(Debug, Clone)]
pub struct Browser<'a, T> {
    records: &'a [T],
    state: QueryState,
    policy: ShrinkPolicy,
    last_matched: Option<usize>,
    last_page_size: usize,
}

impl<'a, T: Listing> Browser<'a, T> {
    /// Starts a session over `records` with the given initial state.
    pub fn new(records: &'a [T], state: QueryState) -> Self {
        let last_page_size = state.page_size;
        Browser {
            records,
            state,
            policy: ShrinkPolicy::default(),
            last_matched: None,
            last_page_size,
        }
    }

    /// Sets the policy used when the result set shrinks under the page.
    pub fn with_policy(mut self, policy: ShrinkPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The current state, with the page as last resolved.
    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// Re-runs the pipeline for the current state.
    pub fn refresh(&mut self) -> QueryResult<'a, T> {
        let sorted = filter_and_sort(self.records, &self.state);
        let pages = total_pages(sorted.len(), self.state.page_size);

        let upstream_changed = self.last_matched.is_some_and(|n| n != sorted.len())
            || self.last_page_size != self.state.page_size;
        let page = if upstream_changed {
            self.policy.resolve(self.state.page, pages)
        } else {
            ShrinkPolicy::ClampToLast.resolve(self.state.page, pages)
        };

        self.state.page = page;
        self.last_matched = Some(sorted.len());
        self.last_page_size = self.state.page_size;
        page_of(&sorted, self.records.len(), &self.state, page)
    }

    /// Replaces the state and re-runs the pipeline.
    ///
    /// If `next` selects different results or order than the current state,
    /// its page is reset to 1.
    pub fn apply(&mut self, next: QueryState) -> QueryResult<'a, T> {
        let restart = self.state.changes_results(&next);
        self.state = next;
        if restart {
            self.state.page = 1;
        }
        self.refresh()
    }

    /// Swaps in a fresh snapshot, keeping the current state.
    pub fn replace_records(&mut self, records: &'a [T]) -> QueryResult<'a, T> {
        self.records = records;
        self.refresh()
    }

    /// Sets the free-text search.
    pub fn search(&mut self, search: &str) -> QueryResult<'a, T> {
        let next = self.state.clone().with_search(search);
        self.apply(next)
    }

    /// Selects a category.
    pub fn select_category(&mut self, category: &str) -> QueryResult<'a, T> {
        let next = self.state.clone().with_category(category);
        self.apply(next)
    }

    /// Shows all categories.
    pub fn all_categories(&mut self) -> QueryResult<'a, T> {
        let next = self.state.clone().all_categories();
        self.apply(next)
    }

    /// Changes the sort order.
    pub fn sort_by(&mut self, sort: SortOption) -> QueryResult<'a, T> {
        let next = self.state.clone().with_sort(sort);
        self.apply(next)
    }

    /// Clears search and category.
    pub fn clear(&mut self) -> QueryResult<'a, T> {
        let next = self.state.clone().cleared();
        self.apply(next)
    }

    /// Jumps to a page.
    pub fn goto(&mut self, page: usize) -> QueryResult<'a, T> {
        let next = self.state.clone().with_page(page);
        self.apply(next)
    }

    /// Moves one page forward, stopping at the last page.
    pub fn next_page(&mut self) -> QueryResult<'a, T> {
        self.goto(self.state.page + 1)
    }

    /// Moves one page back, stopping at the first page.
    pub fn previous_page(&mut self) -> QueryResult<'a, T> {
        self.goto(self.state.page.saturating_sub(1))
    }

    /// Changes the page size.
    pub fn set_page_size(&mut self, page_size: usize) -> QueryResult<'a, T> {
        let next = self.state.clone().with_page_size(page_size);
        self.apply(next)
    }
}
