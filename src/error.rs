//! Error types for the Tweety library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`TweetyError`] enum.
//!
//! # Examples
//!
//! ```
//! use tweety::error::{Result, TweetyError};
//!
//! fn lookup(id: &str) -> Result<()> {
//!     Err(TweetyError::category_not_found(id))
//! }
//!
//! match lookup("dinas_pariwisata") {
//!     Ok(_) => println!("found"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Tweety operations.
#[derive(Error, Debug)]
pub enum TweetyError {
    /// A category id outside the fixed category set was requested.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// A search strategy failed for one keyword/document pair.
    #[error("Search failure ({strategy}) for keyword '{keyword}' in document {document}: {message}")]
    SearchFailure {
        strategy: String,
        keyword: String,
        document: usize,
        message: String,
    },

    /// Keyword configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Highlight pattern errors
    #[error("Highlight error: {0}")]
    Highlight(String),

    /// Document source errors
    #[error("Document source error: {0}")]
    Source(String),

    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TweetyError.
pub type Result<T> = std::result::Result<T, TweetyError>;

impl TweetyError {
    /// Create a new category-not-found error.
    pub fn category_not_found<S: Into<String>>(id: S) -> Self {
        TweetyError::CategoryNotFound(id.into())
    }

    /// Create a new search failure for a keyword/document pair.
    pub fn search_failure<S: Into<String>>(
        strategy: &str,
        keyword: &str,
        document: usize,
        message: S,
    ) -> Self {
        TweetyError::SearchFailure {
            strategy: strategy.to_string(),
            keyword: keyword.to_string(),
            document,
            message: message.into(),
        }
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        TweetyError::Config(msg.into())
    }

    /// Create a new highlight error.
    pub fn highlight<S: Into<String>>(msg: S) -> Self {
        TweetyError::Highlight(msg.into())
    }

    /// Create a new document source error.
    pub fn source<S: Into<String>>(msg: S) -> Self {
        TweetyError::Source(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TweetyError::Other(msg.into())
    }

    /// Process exit code for this error when surfaced by the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            TweetyError::CategoryNotFound(_) => 2,
            TweetyError::Config(_) => 3,
            TweetyError::Source(_) | TweetyError::Io(_) => 4,
            TweetyError::SearchFailure { .. } => 5,
            _ => 1,
        }
    }
}
