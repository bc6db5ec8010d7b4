//! Documents consumed by the categorizer.
//!
//! A [`Document`] is a short piece of text (typically a social-media post)
//! with an optional external identifier. Its position in the input slice is
//! what the categorizer uses to track it during a run.

use serde::{Deserialize, Serialize};

/// A single text-bearing document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// External identifier, e.g. the post id assigned by the source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The document text.
    pub text: String,
}

impl Document {
    /// Create a document without an identifier.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Document {
            id: None,
            text: text.into(),
        }
    }

    /// Create a document with an identifier.
    pub fn with_id<I: Into<String>, S: Into<String>>(id: I, text: S) -> Self {
        Document {
            id: Some(id.into()),
            text: text.into(),
        }
    }

    /// Get the document text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Document::new(text)
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Document::new(text)
    }
}
