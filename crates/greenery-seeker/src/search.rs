//! The free-text matcher shared by the filter and highlight stages.
//!
//! Both stages must agree on what matched, so both go through
//! [`SearchMatcher`]: the search is trimmed, escaped and compiled once as a
//! case-insensitive regex (simple Unicode case folding).

use regex::{Regex, RegexBuilder};

/// A compiled free-text search.
#[derive(Debug, Clone)]
pub(crate) enum SearchMatcher {
    /// Blank search: everything matches, nothing is highlighted.
    Blank,
    /// The search as a literal, case-insensitive pattern.
    Literal(Regex),
    /// The search exceeded the regex size limits. Nothing matches.
    Unusable,
}

impl SearchMatcher {
    pub(crate) fn new(search: &str) -> Self {
        let trimmed = search.trim();
        if trimmed.is_empty() {
            return SearchMatcher::Blank;
        }
        match RegexBuilder::new(&regex::escape(trimmed))
            .case_insensitive(true)
            .build()
        {
            Ok(pattern) => SearchMatcher::Literal(pattern),
            Err(_) => SearchMatcher::Unusable,
        }
    }

    pub(crate) fn is_blank(&self) -> bool {
        matches!(self, SearchMatcher::Blank)
    }

    /// Returns `true` if `text` contains the search. A blank search matches
    /// any text.
    pub(crate) fn is_match(&self, text: &str) -> bool {
        match self {
            SearchMatcher::Blank => true,
            SearchMatcher::Literal(pattern) => pattern.is_match(text),
            SearchMatcher::Unusable => false,
        }
    }

    /// The compiled pattern, if there is one to highlight with.
    pub(crate) fn pattern(&self) -> Option<&Regex> {
        match self {
            SearchMatcher::Literal(pattern) => Some(pattern),
            _ => None,
        }
    }
}
