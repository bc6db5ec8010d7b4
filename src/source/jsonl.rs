//! File-backed document source.
//!
//! Reads documents from a file in one of two layouts:
//!
//! - a JSON array of document objects
//!   ```json
//!   [{"id": "1", "text": "Jalan rusak di kota"}, {"text": "Sekolah butuh renovasi"}]
//!   ```
//! - JSON Lines, one document per line. A line that is not a JSON object is
//!   taken verbatim as the document text, so plain text files work too.
//!   ```jsonl
//!   {"id": "1", "text": "Jalan rusak di kota"}
//!   Sekolah butuh renovasi
//!   ```
//!
//! Blank lines are skipped.

use std::fs;
use std::path::{Path, PathBuf};

use crate::document::Document;
use crate::error::{Result, TweetyError};

use super::{DEFAULT_MAX_RESULTS, DocumentSource, matches_query};

/// A document source reading a JSON or JSONL file.
#[derive(Debug, Clone)]
pub struct JsonlFileSource {
    path: PathBuf,
    max_results: usize,
}

impl JsonlFileSource {
    /// Create a new file source.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        JsonlFileSource {
            path: path.as_ref().to_path_buf(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Set the maximum number of documents returned per fetch.
    pub fn max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse the whole file content into documents.
    fn parse(&self, content: &str) -> Result<Vec<Document>> {
        if content.trim_start().starts_with('[') {
            return serde_json::from_str(content).map_err(|e| {
                TweetyError::source(format!(
                    "Failed to parse JSON array in {}: {e}",
                    self.path.display()
                ))
            });
        }

        let mut documents = Vec::new();
        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            documents.push(self.parse_line(line, line_num + 1)?);
        }
        Ok(documents)
    }

    /// Parse a single line into a document.
    fn parse_line(&self, line: &str, line_num: usize) -> Result<Document> {
        if line.starts_with('{') {
            serde_json::from_str(line).map_err(|e| {
                TweetyError::source(format!(
                    "Failed to parse document on line {line_num} of {}: {e}",
                    self.path.display()
                ))
            })
        } else {
            Ok(Document::new(line))
        }
    }
}

impl DocumentSource for JsonlFileSource {
    fn fetch(&self, query: &str) -> Result<Vec<Document>> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            TweetyError::source(format!("Failed to read {}: {e}", self.path.display()))
        })?;

        let documents: Vec<Document> = self
            .parse(&content)?
            .into_iter()
            .filter(|doc| matches_query(doc, query))
            .take(self.max_results)
            .collect();

        log::info!(
            "Fetched {} documents from {} for query '{}'",
            documents.len(),
            self.path.display(),
            query
        );

        Ok(documents)
    }

    fn name(&self) -> &str {
        "jsonl"
    }
}
