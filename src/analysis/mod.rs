//! Text analysis module for docsearch.
//!
//! Analysis here is deliberately small: a single [`TextNormalizer`] that
//! canonicalizes raw text into a lowercase, single-spaced stream of
//! alphanumeric tokens. Documents and query terms pass through the same
//! normalizer, which is what lets three structurally different matchers
//! agree on match counts.

pub mod normalizer;

// Re-export commonly used types
pub use normalizer::*;
