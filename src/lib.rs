//! # Tweety
//!
//! Keyword-driven categorization of short social-media posts.
//!
//! ## Features
//!
//! - Fixed, ordered category registry with a fallback bucket
//! - Non-exclusive membership: a post can land in several categories
//! - Pluggable exact-substring search (KMP, Boyer-Moore)
//! - Case-insensitive keyword highlighting in the rendered text
//! - File-backed and in-memory document sources

pub mod categorizer;
pub mod category;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod highlight;
pub mod source;
pub mod state;
pub mod strategy;

pub mod prelude {
    pub use crate::categorizer::{CategorizationResponse, Categorizer};
    pub use crate::category::{Category, CategoryId, CategoryRegistry, MatchResult};
    pub use crate::config::KeywordConfiguration;
    pub use crate::document::Document;
    pub use crate::error::{Result, TweetyError};
    pub use crate::source::{DocumentSource, JsonlFileSource, MemorySource};
    pub use crate::strategy::{SearchStrategy, StrategyKind};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
