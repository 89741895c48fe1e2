//! Regex word-boundary matcher.

use regex::Regex;

use super::TermMatcher;
use crate::document::Document;
use crate::error::{DocSearchError, Result};
use crate::index::InvertedIndex;

/// Counts occurrences with a compiled word-boundary pattern.
///
/// The canonical term is escaped and wrapped in `\b` assertions, then
/// matched non-overlapping against the unpadded normalized text. Because
/// the term is escaped, this mode is strictly equivalent to the literal
/// scan; there is no metacharacter passthrough. Normalization already
/// confines terms to `[a-z0-9 ]`, so the escape never changes the
/// pattern in practice.
#[derive(Clone, Debug)]
pub struct RegexBoundaryMatcher {
    pattern: Regex,
}

impl RegexBoundaryMatcher {
    /// Compile a matcher for the canonical (normalized, single-spaced)
    /// term.
    pub fn new(term: &str) -> Result<Self> {
        let pattern = format!(r"\b{}\b", regex::escape(term));
        let pattern = Regex::new(&pattern)
            .map_err(|e| DocSearchError::analysis(format!("Invalid term pattern: {e}")))?;
        Ok(RegexBoundaryMatcher { pattern })
    }

    /// The compiled pattern's source string.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl TermMatcher for RegexBoundaryMatcher {
    fn count(&self, doc: &Document, _index: &InvertedIndex) -> usize {
        self.pattern.find_iter(doc.normalized()).count()
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
