//! # docsearch
//!
//! A small multi-strategy document search engine.
//!
//! docsearch loads a corpus of text documents, normalizes them into a
//! canonical token stream, builds an inverted positional index, and
//! answers term-occurrence queries through three interchangeable
//! matching strategies:
//!
//! - Literal scan: padded substring scanning over normalized text
//! - Regex: word-boundary matching over normalized text
//! - Indexed: positional lookups against the inverted index
//!
//! The three strategies produce identical match counts for every
//! well-formed query; they exist to compare algorithmic trade-offs, not
//! results.

pub mod analysis;
pub mod cli;
pub mod document;
pub mod error;
pub mod index;
pub mod search;

pub mod prelude {
    //! Convenient re-exports of the most commonly used types.
    pub use crate::analysis::TextNormalizer;
    pub use crate::document::{Document, DocumentStore};
    pub use crate::error::{DocSearchError, Result};
    pub use crate::index::InvertedIndex;
    pub use crate::search::{SearchEngine, SearchMode, SearchResults};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
