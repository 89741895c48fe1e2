//! Literal substring scan matcher.

use super::TermMatcher;
use crate::document::Document;
use crate::index::InvertedIndex;

/// Counts exact token-boundary occurrences by brute-force substring
/// scanning.
///
/// Both the document's normalized text and the term are padded with one
/// leading and one trailing space, so a window can only match on token
/// boundaries ("warp" never matches inside "warpcore"). Every starting
/// offset is examined, so windows that overlap each other all count.
/// O(n·m) against document length n and term length m.
#[derive(Clone, Debug)]
pub struct LiteralScanMatcher {
    padded_term: String,
}

impl LiteralScanMatcher {
    /// Create a matcher for the canonical (normalized, single-spaced)
    /// term.
    pub fn new(term: &str) -> Self {
        LiteralScanMatcher {
            padded_term: format!(" {term} "),
        }
    }
}

impl TermMatcher for LiteralScanMatcher {
    fn count(&self, doc: &Document, _index: &InvertedIndex) -> usize {
        // Normalized text is pure ASCII, so byte windows are exact.
        let padded_text = format!(" {} ", doc.normalized());
        let haystack = padded_text.as_bytes();
        let needle = self.padded_term.as_bytes();
        if needle.len() > haystack.len() {
            return 0;
        }
        haystack
            .windows(needle.len())
            .filter(|window| *window == needle)
            .count()
    }

    fn name(&self) -> &'static str {
        "literal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::TextNormalizer;
    use crate::document::DocumentStore;
    use crate::error::Result;

    fn fixture(text: &str) -> (DocumentStore, InvertedIndex) {
        let normalizer = TextNormalizer::new().unwrap();
        let source: Vec<Result<(String, String)>> =
            vec![Ok(("doc.txt".to_string(), text.to_string()))];
        let store = DocumentStore::load(&normalizer, source).unwrap();
        let index = InvertedIndex::build(&store);
        (store, index)
    }

    #[test]
    fn test_counts_whole_tokens_only() {
        let (store, index) = fixture("warp core warpcore warp");
        let doc = store.get("doc.txt").unwrap();
        let matcher = LiteralScanMatcher::new("warp");
        assert_eq!(matcher.count(doc, &index), 2);
    }

    #[test]
    fn test_boundary_tokens_match() {
        let (store, index) = fixture("warp drive needs warp");
        let doc = store.get("doc.txt").unwrap();
        let matcher = LiteralScanMatcher::new("warp");
        assert_eq!(matcher.count(doc, &index), 2);
    }

    #[test]
    fn test_multi_word_term() {
        let (store, index) = fixture("life in the fast lane, back in the day");
        let doc = store.get("doc.txt").unwrap();
        let matcher = LiteralScanMatcher::new("in the");
        assert_eq!(matcher.count(doc, &index), 2);
    }

    #[test]
    fn test_term_longer_than_document() {
        let (store, index) = fixture("hi");
        let doc = store.get("doc.txt").unwrap();
        let matcher = LiteralScanMatcher::new("a much longer phrase than the text");
        assert_eq!(matcher.count(doc, &index), 0);
    }

    #[test]
    fn test_overlapping_windows_each_count() {
        // Padded term " a a " occurs at two overlapping offsets in
        // " a a a ".
        let (store, index) = fixture("a a a");
        let doc = store.get("doc.txt").unwrap();
        let matcher = LiteralScanMatcher::new("a a");
        assert_eq!(matcher.count(doc, &index), 2);
    }

    #[test]
    fn test_matcher_name() {
        assert_eq!(LiteralScanMatcher::new("x").name(), "literal");
    }
}
