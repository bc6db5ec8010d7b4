//! Document sources.
//!
//! A [`DocumentSource`] hands the categorizer a finite, ordered batch of
//! documents for one query. Whatever it returns is taken as final for the
//! run. Sources apply the query filter and cap the batch at
//! `max_results` documents.

use crate::document::Document;
use crate::error::Result;

pub mod jsonl;

pub use jsonl::JsonlFileSource;

/// Default cap on the number of documents fetched per query.
pub const DEFAULT_MAX_RESULTS: usize = 100;

/// Supplier of documents for a categorization run.
pub trait DocumentSource {
    /// Fetch the documents matching `query`, in source order.
    ///
    /// An empty query matches every document.
    fn fetch(&self, query: &str) -> Result<Vec<Document>>;

    /// Get the name of this source for debugging and logging.
    fn name(&self) -> &str;
}

/// Whether `doc` is selected by `query`.
///
/// Matching is a case-insensitive containment check on the document text.
pub(crate) fn matches_query(doc: &Document, query: &str) -> bool {
    let query = query.trim();
    query.is_empty() || doc.text.to_lowercase().contains(&query.to_lowercase())
}

/// A source backed by an in-memory list of documents.
#[derive(Debug, Clone)]
pub struct MemorySource {
    documents: Vec<Document>,
    max_results: usize,
}

impl MemorySource {
    /// Create a new in-memory source.
    pub fn new(documents: Vec<Document>) -> Self {
        MemorySource {
            documents,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Set the maximum number of documents returned per fetch.
    pub fn max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

impl DocumentSource for MemorySource {
    fn fetch(&self, query: &str) -> Result<Vec<Document>> {
        Ok(self
            .documents
            .iter()
            .filter(|doc| matches_query(doc, query))
            .take(self.max_results)
            .cloned()
            .collect())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
