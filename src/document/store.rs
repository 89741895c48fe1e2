//! In-memory document store.

use ahash::AHashMap;

use crate::analysis::TextNormalizer;
use crate::error::{DocSearchError, Result};

/// A single corpus document.
///
/// Documents are created once at load time and never mutated. The raw
/// text is kept alongside the normalized form; the literal and regex
/// matchers read the normalized text, the inverted index is built from
/// it, and the raw text stays available for display.
#[derive(Clone, Debug)]
pub struct Document {
    name: String,
    raw: String,
    normalized: String,
}

impl Document {
    /// The document's unique identifier (e.g. its file name).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw text as loaded.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The normalized text: lowercase, single-spaced, alphanumeric.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}

/// Holds the normalized full text of every loaded document.
///
/// The store is read-only after [`DocumentStore::load`]; no mutation API
/// is exposed. Document names are assumed externally unique (file names
/// within one corpus directory); a duplicate name overwrites the earlier
/// entry, matching map semantics.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: AHashMap<String, Document>,
}

impl DocumentStore {
    /// Load a store from an enumerable source of (name, raw content)
    /// pairs.
    ///
    /// The first failed item aborts the whole load — no partial store is
    /// ever returned.
    pub fn load<I>(normalizer: &TextNormalizer, source: I) -> Result<DocumentStore>
    where
        I: IntoIterator<Item = Result<(String, String)>>,
    {
        let mut documents = AHashMap::new();
        for item in source {
            let (name, raw) =
                item.map_err(|e| DocSearchError::load(format!("failed to read document: {e}")))?;
            let normalized = normalizer.normalize(&raw);
            documents.insert(
                name.clone(),
                Document {
                    name,
                    raw,
                    normalized,
                },
            );
        }
        Ok(DocumentStore { documents })
    }

    /// Look up a document by name.
    pub fn get(&self, name: &str) -> Option<&Document> {
        self.documents.get(name)
    }

    /// Iterate over all document names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }

    /// Iterate over all documents.
    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.documents.values()
    }

    /// Number of documents in the store.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the store holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
