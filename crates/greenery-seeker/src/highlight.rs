//! Highlight stage: mark the parts of a text that matched the search.
//!
//! The search is trimmed, escaped and matched case-insensitively, exactly as
//! the filter stage matches it. It always matches as literal text: `a.b` only
//! matches `a.b` and `(Co.)` never fails to compile. The returned spans cover
//! the whole input, in order, with no gaps or overlaps.

use serde::Serialize;

use crate::search::SearchMatcher;

/// A run of text and whether it matched the search.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct HighlightSpan {
    pub text: String,
    pub is_match: bool,
}

impl HighlightSpan {
    /// Creates a matching span.
    pub fn matched(text: impl Into<String>) -> Self {
        HighlightSpan {
            text: text.into(),
            is_match: true,
        }
    }

    /// Creates a non-matching span.
    pub fn plain(text: impl Into<String>) -> Self {
        HighlightSpan {
            text: text.into(),
            is_match: false,
        }
    }
}

/// Splits `text` into matching and non-matching spans for `search`.
///
/// A blank search yields exactly one non-matching span holding the whole text.
///
/// # Example
///
/// ```
/// use greenery_seeker::{highlight, HighlightSpan};
///
/// let spans = highlight("Solar (Co.)", "(co.)");
/// assert_eq!(
///     spans,
///     vec![HighlightSpan::plain("Solar "), HighlightSpan::matched("(Co.)")]
/// );
/// ```
pub fn highlight(text: &str, search: &str) -> Vec<HighlightSpan> {
    let matcher = SearchMatcher::new(search);
    let Some(pattern) = matcher.pattern() else {
        return vec![HighlightSpan::plain(text)];
    };

    let mut spans = Vec::new();
    let mut cursor = 0;
    for found in pattern.find_iter(text) {
        if found.start() > cursor {
            spans.push(HighlightSpan::plain(&text[cursor..found.start()]));
        }
        if found.end() > found.start() {
            spans.push(HighlightSpan::matched(found.as_str()));
        }
        cursor = found.end();
    }
    if cursor < text.len() {
        spans.push(HighlightSpan::plain(&text[cursor..]));
    }

    if spans.is_empty() {
        spans.push(HighlightSpan::plain(text));
    }
    spans
}
