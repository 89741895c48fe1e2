//! Matching strategies for term-occurrence counting.
//!
//! Three interchangeable matchers share one contract: given a prepared
//! query term, count its occurrences in a single document. All three
//! must agree exactly on every well-formed query; they differ only in
//! how they get there.

use crate::document::Document;
use crate::index::InvertedIndex;

/// Trait for matchers that count occurrences of a prepared term within
/// one document.
///
/// A matcher is constructed once per query from the canonical normalized
/// term and then applied to every document in the corpus. Implementations
/// read either the document's normalized text or the inverted index, but
/// must produce identical counts.
pub trait TermMatcher: Send + Sync {
    /// Count the term's occurrences in the given document.
    fn count(&self, doc: &Document, index: &InvertedIndex) -> usize;

    /// Get the name of this matcher (for debugging and logging).
    fn name(&self) -> &'static str;
}

// Individual matcher modules
pub mod indexed;
pub mod literal;
pub mod regex;

// Re-export all matchers for convenient access
pub use indexed::IndexedPositionalMatcher;
pub use literal::LiteralScanMatcher;
pub use regex::RegexBoundaryMatcher;
