//! Paginate stage: fixed-size page windows and their metadata.
//!
//! Pages are 1-based. The total page count is `ceil(total_items / page_size)`
//! but never less than 1, so an empty result still has one (empty) page.
//! Requested pages outside `[1, total_pages]` are clamped, never rejected.

use serde::Serialize;

/// Number of listings per page on the directory listing.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// How many leading page numbers the pagination bar shows.
pub const NUMBERED_PAGE_LINKS: usize = 5;

/// Returns the number of pages needed for `total_items`, at least 1.
///
/// A page size of 0 is treated as 1.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1)).max(1)
}

/// What to do with the current page when the result set shrinks under it.
///
/// Filter, category and sort changes always restart at page 1. This policy
/// covers the remaining case, where the upstream count changes without a new
/// query (a refreshed snapshot, a smaller page size).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShrinkPolicy {
    /// Start over from the first page.
    #[default]
    ResetToFirst,
    /// Stay as close as possible by moving to the new last page.
    ClampToLast,
}

impl ShrinkPolicy {
    /// Resolves a requested page against a total page count.
    pub fn resolve(self, page: usize, total_pages: usize) -> usize {
        let total_pages = total_pages.max(1);
        if page < 1 {
            1
        } else if page > total_pages {
            match self {
                ShrinkPolicy::ResetToFirst => 1,
                ShrinkPolicy::ClampToLast => total_pages,
            }
        } else {
            page
        }
    }
}

/// Pagination metadata for one page of results.
///
/// `start` and `end` are 1-based positions for "Showing X to Y of Z"; both are
/// 0 when there are no items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PageMeta {
    pub total_items: usize,
    pub total_pages: usize,
    pub page: usize,
    pub page_size: usize,
    pub start: usize,
    pub end: usize,
}

impl PageMeta {
    /// Computes metadata for `requested_page`, clamped into range.
    ///
    /// # Example
    ///
    /// ```
    /// use greenery_seeker::PageMeta;
    ///
    /// let meta = PageMeta::new(30, 12, 9);
    /// assert_eq!(meta.total_pages, 3);
    /// assert_eq!(meta.page, 3);
    /// assert_eq!((meta.start, meta.end), (25, 30));
    /// ```
    pub fn new(total_items: usize, page_size: usize, requested_page: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total_pages(total_items, page_size);
        let page = ShrinkPolicy::ClampToLast.resolve(requested_page, total_pages);

        let offset = (page - 1) * page_size;
        let (start, end) = if total_items == 0 {
            (0, 0)
        } else {
            (offset + 1, (offset + page_size).min(total_items))
        };

        PageMeta {
            total_items,
            total_pages,
            page,
            page_size,
            start,
            end,
        }
    }

    /// Zero-based index of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.page_size
    }

    /// Returns `true` when there is more than one page.
    pub fn is_paginated(&self) -> bool {
        self.total_pages > 1
    }

    /// Returns `true` when this page has no items.
    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }

    /// `"Showing X to Y of Z"`.
    pub fn summary(&self) -> String {
        format!(
            "Showing {} to {} of {}",
            self.start, self.end, self.total_items
        )
    }

    /// The pagination bar for this page.
    pub fn controls(&self) -> PageControls {
        let mut numbered: Vec<usize> = (1..=self.total_pages.min(NUMBERED_PAGE_LINKS)).collect();
        if self.total_pages > NUMBERED_PAGE_LINKS {
            numbered.push(self.total_pages);
        }

        PageControls {
            has_previous: self.page > 1,
            has_next: self.page < self.total_pages,
            previous: self.page.saturating_sub(1).max(1),
            next: (self.page + 1).min(self.total_pages),
            numbered,
        }
    }
}

/// Previous/next buttons and page-number links.
///
/// The numbered links are the first five pages, followed by the last page
/// when there are more than five.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageControls {
    pub has_previous: bool,
    pub has_next: bool,
    pub previous: usize,
    pub next: usize,
    pub numbered: Vec<usize>,
}

/// One page of items plus its metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<'a, T> {
    pub items: Vec<&'a T>,
    pub meta: PageMeta,
}

/// Slices `items` to the window of `page`.
///
/// The page is clamped to `[1, total_pages]`; the returned metadata carries the
/// page actually used.
pub fn paginate<'a, T>(items: &[&'a T], page_size: usize, page: usize) -> Page<'a, T> {
    let meta = PageMeta::new(items.len(), page_size, page);
    let window = items
        .iter()
        .skip(meta.offset())
        .take(meta.page_size)
        .copied()
        .collect();
    Page {
        items: window,
        meta,
    }
}
