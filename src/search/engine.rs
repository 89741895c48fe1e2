//! Search engine orchestration.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::TextNormalizer;
use crate::document::DocumentStore;
use crate::error::{DocSearchError, Result};
use crate::index::InvertedIndex;
use crate::search::matcher::{
    IndexedPositionalMatcher, LiteralScanMatcher, RegexBoundaryMatcher, TermMatcher,
};

/// The matching strategy used to answer a query.
///
/// The mode set is closed: three strategies, expected to agree exactly
/// on every well-formed query. Parsing a mode from user input is the
/// fallible edge; the core dispatch is an exhaustive `match`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Padded substring scan over the normalized text.
    Literal,
    /// Word-boundary regex over the normalized text.
    Regex,
    /// Positional lookup in the inverted index.
    Indexed,
}

impl SearchMode {
    /// All modes, in their traditional numeric order.
    pub const ALL: [SearchMode; 3] = [SearchMode::Literal, SearchMode::Regex, SearchMode::Indexed];
}

impl FromStr for SearchMode {
    type Err = DocSearchError;

    /// Accepts the traditional numeric selectors (`1`, `2`, `3`) as well
    /// as the mode names.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "literal" | "string" => Ok(SearchMode::Literal),
            "2" | "regex" => Ok(SearchMode::Regex),
            "3" | "indexed" => Ok(SearchMode::Indexed),
            other => Err(DocSearchError::config(format!(
                "unrecognized search mode: {other:?}"
            ))),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchMode::Literal => "literal",
            SearchMode::Regex => "regex",
            SearchMode::Indexed => "indexed",
        };
        write!(f, "{name}")
    }
}

/// Result of one search: a total mapping from every known document name
/// to its match count, plus the elapsed search time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    /// Match count per document. Every document in the store appears,
    /// even at count zero.
    pub counts: HashMap<String, usize>,
    /// Elapsed search time in milliseconds.
    pub duration_ms: u64,
}

impl SearchResults {
    /// Counts sorted by descending match count, ties broken by name so
    /// rendering is deterministic.
    pub fn sorted_counts(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

/// The multi-mode search engine.
///
/// Owns its document store and inverted index; both are built once at
/// construction and read-only afterwards, so an engine can be shared
/// read-only across threads. A failed load never yields an engine.
pub struct SearchEngine {
    normalizer: TextNormalizer,
    store: DocumentStore,
    index: InvertedIndex,
}

impl SearchEngine {
    /// Build an engine from an enumerable source of (name, raw content)
    /// pairs. Any failed item aborts construction.
    pub fn from_source<I>(source: I) -> Result<SearchEngine>
    where
        I: IntoIterator<Item = Result<(String, String)>>,
    {
        let normalizer = TextNormalizer::new()?;
        let store = DocumentStore::load(&normalizer, source)?;
        let index = InvertedIndex::build(&store);
        debug!("loaded {} documents", store.len());
        Ok(SearchEngine {
            normalizer,
            store,
            index,
        })
    }

    /// The underlying document store.
    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    /// The underlying inverted index.
    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    /// Count occurrences of `term` in every document with the selected
    /// matching strategy.
    ///
    /// The term goes through the same normalizer as the documents. A
    /// term that normalizes to nothing (empty, whitespace, punctuation
    /// only) short-circuits to all-zero counts without invoking any
    /// matcher. The result maps every document name, always.
    pub fn search(&self, term: &str, mode: SearchMode) -> Result<SearchResults> {
        let start = Instant::now();
        let normalized = self.normalizer.normalize(term);
        let words: Vec<&str> = normalized.split_whitespace().collect();

        let counts = if words.is_empty() {
            self.zero_counts()
        } else {
            let canonical = words.join(" ");
            let matcher = self.matcher_for(mode, &canonical, &words)?;
            debug!("searching {canonical:?} with {} matcher", matcher.name());
            self.store
                .documents()
                .map(|doc| (doc.name().to_string(), matcher.count(doc, &self.index)))
                .collect()
        };

        Ok(SearchResults {
            counts,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    fn matcher_for(
        &self,
        mode: SearchMode,
        canonical: &str,
        words: &[&str],
    ) -> Result<Box<dyn TermMatcher>> {
        Ok(match mode {
            SearchMode::Literal => Box::new(LiteralScanMatcher::new(canonical)),
            SearchMode::Regex => Box::new(RegexBoundaryMatcher::new(canonical)?),
            SearchMode::Indexed => Box::new(IndexedPositionalMatcher::new(words)),
        })
    }

    fn zero_counts(&self) -> HashMap<String, usize> {
        self.store
            .names()
            .map(|name| (name.to_string(), 0))
            .collect()
    }
}
