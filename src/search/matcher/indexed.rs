//! Inverted-index positional matcher.

use super::TermMatcher;
use crate::document::Document;
use crate::index::InvertedIndex;

/// Counts occurrences by walking the inverted index instead of scanning
/// text.
///
/// The rank set of the first term word gives the candidate start
/// positions; a candidate `p` is a match when every subsequent word `k`
/// has rank `p + k` recorded in the index. Runs in
/// O(occurrences-of-first-word × term-length) per document, and produces
/// the same counts as the padded literal scan.
#[derive(Clone, Debug)]
pub struct IndexedPositionalMatcher {
    words: Vec<String>,
}

impl IndexedPositionalMatcher {
    /// Create a matcher for the query's term words, in order.
    pub fn new(words: &[&str]) -> Self {
        IndexedPositionalMatcher {
            words: words.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// The term words this matcher confirms, in order.
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl TermMatcher for IndexedPositionalMatcher {
    fn count(&self, doc: &Document, index: &InvertedIndex) -> usize {
        let first = match self.words.first() {
            Some(word) => word,
            None => return 0,
        };
        index
            .positions(doc.name(), first)
            .iter()
            .filter(|&&start| {
                self.words.iter().enumerate().skip(1).all(|(offset, word)| {
                    index.positions(doc.name(), word).contains(&(start + offset))
                })
            })
            .count()
    }

    fn name(&self) -> &'static str {
        "indexed"
    }
}
