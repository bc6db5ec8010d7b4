//! Per-run keyword configuration.
//!
//! A [`KeywordConfiguration`] carries, for each keyword-driven category, a
//! comma-delimited keyword string, plus the search strategy to use and the
//! query handed to the document source.
//!
//! The JSON form keys keyword strings by category id:
//!
//! ```json
//! {
//!   "query": "#surabaya",
//!   "strategy": "kmp",
//!   "keywords": {
//!     "dinas_kesehatan": "rumah sakit,puskesmas",
//!     "dinas_binamarga": "jalan,rusak"
//!   }
//! }
//! ```
//!
//! `"is_kmp": true | false` is accepted in place of `strategy`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::category::CategoryId;
use crate::error::{Result, TweetyError};
use crate::strategy::StrategyKind;

/// Delimiter between keywords in a configured keyword string.
pub const KEYWORD_DELIMITER: char = ',';

/// Keyword strings and strategy selection for one categorization run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawConfiguration")]
pub struct KeywordConfiguration {
    /// Query passed to the document source.
    pub query: String,
    /// Search strategy used for every keyword of the run.
    pub strategy: StrategyKind,
    keywords: BTreeMap<CategoryId, String>,
}

/// Wire form of [`KeywordConfiguration`], before id validation.
#[derive(Debug, Deserialize)]
struct RawConfiguration {
    #[serde(default)]
    query: String,
    #[serde(default)]
    strategy: Option<String>,
    #[serde(default)]
    is_kmp: Option<bool>,
    #[serde(default)]
    keywords: BTreeMap<String, String>,
}

impl TryFrom<RawConfiguration> for KeywordConfiguration {
    type Error = TweetyError;

    fn try_from(raw: RawConfiguration) -> Result<Self> {
        let strategy = match (raw.strategy, raw.is_kmp) {
            (Some(name), _) => name.parse()?,
            (None, Some(is_kmp)) => StrategyKind::from_is_kmp(is_kmp),
            (None, None) => StrategyKind::default(),
        };

        let mut keywords = BTreeMap::new();
        for (id, value) in raw.keywords {
            keywords.insert(id.parse::<CategoryId>()?, value);
        }

        let config = KeywordConfiguration {
            query: raw.query,
            strategy,
            keywords,
        };
        config.validate()?;
        Ok(config)
    }
}

impl KeywordConfiguration {
    /// Create an empty configuration: no keywords, default strategy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawConfiguration = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Set the source query.
    pub fn with_query<S: Into<String>>(mut self, query: S) -> Self {
        self.query = query.into();
        self
    }

    /// Set the search strategy.
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the keyword string of a category.
    pub fn with_keywords<S: Into<String>>(mut self, id: CategoryId, keywords: S) -> Self {
        self.set_keywords(id, keywords);
        self
    }

    /// Set the keyword string of a category in place.
    pub fn set_keywords<S: Into<String>>(&mut self, id: CategoryId, keywords: S) {
        self.keywords.insert(id, keywords.into());
    }

    /// The raw keyword string configured for a category.
    pub fn keywords_for(&self, id: CategoryId) -> Option<&str> {
        self.keywords.get(&id).map(String::as_str)
    }

    /// The keyword list of a category. Empty when the category is not
    /// configured.
    pub fn keyword_list(&self, id: CategoryId) -> Vec<String> {
        self.keywords_for(id).map(split_keywords).unwrap_or_default()
    }

    /// Reject configurations that give keywords to the fallback category.
    pub fn validate(&self) -> Result<()> {
        match self.keywords_for(CategoryId::FALLBACK) {
            Some(keywords) if !keywords.trim().is_empty() => Err(TweetyError::config(format!(
                "the fallback category '{}' cannot have keywords",
                CategoryId::FALLBACK
            ))),
            _ => Ok(()),
        }
    }
}

/// Split a keyword string on [`KEYWORD_DELIMITER`].
///
/// Tokens are trimmed; empty tokens are dropped. Order and duplicates are
/// kept.
pub fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(KEYWORD_DELIMITER)
        .enumerate()
        .filter_map(|(i, token)| {
            let token = token.trim();
            if token.is_empty() {
                log::warn!("Skipping empty keyword token #{i} in '{raw}'");
                None
            } else {
                Some(token.to_string())
            }
        })
        .collect()
}
