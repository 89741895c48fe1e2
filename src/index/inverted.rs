//! Inverted positional index over a document store.

use ahash::{AHashMap, AHashSet};

use crate::document::DocumentStore;

/// Maps each (document, token) pair to the set of zero-based ranks at
/// which the token occurs in that document's normalized token sequence.
///
/// The mapping is two-level (document name → token → rank set) rather
/// than a single map keyed by a joined string, so names or tokens
/// containing a delimiter character cannot collide.
///
/// Built once from a [`DocumentStore`] and immutable afterwards; safe to
/// share read-only across threads.
#[derive(Debug)]
pub struct InvertedIndex {
    postings: AHashMap<String, AHashMap<String, AHashSet<usize>>>,
    empty: AHashSet<usize>,
}

impl InvertedIndex {
    /// Build the index from every document in the store.
    ///
    /// Ranks are assigned by enumerating the whitespace-separated tokens
    /// of the normalized text, so empty tokens never enter the index and
    /// leading or trailing spaces in the normalized text do not shift
    /// rank numbering.
    pub fn build(store: &DocumentStore) -> InvertedIndex {
        let mut postings: AHashMap<String, AHashMap<String, AHashSet<usize>>> = AHashMap::new();
        for doc in store.documents() {
            let by_token = postings.entry(doc.name().to_string()).or_default();
            for (rank, token) in doc.normalized().split_whitespace().enumerate() {
                by_token
                    .entry(token.to_string())
                    .or_insert_with(AHashSet::new)
                    .insert(rank);
            }
        }
        InvertedIndex {
            postings,
            empty: AHashSet::new(),
        }
    }

    /// The rank set for a token within a document.
    ///
    /// An absent document or token reads as an empty set — never an
    /// error.
    pub fn positions(&self, document: &str, token: &str) -> &AHashSet<usize> {
        self.postings
            .get(document)
            .and_then(|tokens| tokens.get(token))
            .unwrap_or(&self.empty)
    }

    /// Number of distinct tokens indexed for a document.
    pub fn term_count(&self, document: &str) -> usize {
        self.postings.get(document).map_or(0, |tokens| tokens.len())
    }
}
