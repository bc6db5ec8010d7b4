//! Categorization runs.
//!
//! A run goes through three phases:
//!
//! 1. **Init**: a fresh [`CategoryRegistry`] and a [`CategorizedState`] with
//!    one unset bit per document.
//! 2. **Scan**: every keyword-driven category, in registry order, is
//!    classified against the whole batch. Categories without keywords are
//!    skipped.
//! 3. **Reconcile**: every document still uncategorized is appended,
//!    unhighlighted, to the fallback category.
//!
//! A failure in any phase aborts the run; no partial response is returned.
//!
//! # Examples
//!
//! ```
//! use tweety::category::CategoryId;
//! use tweety::categorizer::Categorizer;
//! use tweety::config::KeywordConfiguration;
//! use tweety::document::Document;
//!
//! # fn main() -> tweety::error::Result<()> {
//! let documents = vec![
//!     Document::new("Jalan rusak di kota"),
//!     Document::new("Sekolah butuh renovasi"),
//! ];
//! let config =
//!     KeywordConfiguration::new().with_keywords(CategoryId::DinasBinamarga, "jalan,rusak");
//!
//! let response = Categorizer::new()?.run(&documents, &config)?;
//! assert_eq!(response.count, 2);
//!
//! let roads = response.data.get(CategoryId::DinasBinamarga)?;
//! assert_eq!(roads.results()[0].rendered_text, "<b>Jalan</b> <b>rusak</b> di kota");
//!
//! let rest = response.data.fallback()?;
//! assert_eq!(rest.results()[0].rendered_text, "Sekolah butuh renovasi");
//! # Ok(())
//! # }
//! ```

use serde::Serialize;

use crate::category::{CategoryId, CategoryRegistry, MatchResult};
use crate::classifier::Classifier;
use crate::config::KeywordConfiguration;
use crate::document::Document;
use crate::error::Result;
use crate::highlight::{HighlightConfig, Highlighter};
use crate::state::CategorizedState;
use crate::strategy::SearchStrategy;

/// Outcome of one categorization run.
#[derive(Debug, Clone, Serialize)]
pub struct CategorizationResponse<'a> {
    /// Number of documents processed.
    pub count: usize,
    /// All six categories with their results.
    pub data: CategoryRegistry<'a>,
}

impl<'a> CategorizationResponse<'a> {
    fn empty() -> Self {
        CategorizationResponse {
            count: 0,
            data: CategoryRegistry::initialize(),
        }
    }

    /// Number of documents that landed in the fallback category.
    pub fn uncategorized_count(&self) -> usize {
        self.data
            .categories()
            .iter()
            .find(|c| c.id.is_fallback())
            .map_or(0, |c| c.results().len())
    }

    /// Number of documents matched by at least one keyword.
    pub fn categorized_count(&self) -> usize {
        self.count - self.uncategorized_count()
    }
}

/// Drives categorization runs.
#[derive(Debug, Clone)]
pub struct Categorizer {
    highlighter: Highlighter,
}

impl Categorizer {
    /// Create a categorizer highlighting with `<b>` markers.
    pub fn new() -> Result<Self> {
        Self::with_highlight(HighlightConfig::default())
    }

    /// Create a categorizer with a custom highlight marker.
    pub fn with_highlight(config: HighlightConfig) -> Result<Self> {
        Ok(Categorizer {
            highlighter: Highlighter::new(config)?,
        })
    }

    /// Categorize `documents` using the strategy selected in `config`.
    pub fn run<'a>(
        &self,
        documents: &'a [Document],
        config: &KeywordConfiguration,
    ) -> Result<CategorizationResponse<'a>> {
        let strategy = config.strategy.build();
        self.run_with_strategy(documents, config, strategy.as_ref())
    }

    /// Categorize `documents` using a caller-supplied strategy.
    ///
    /// The strategy in `config` is ignored.
    pub fn run_with_strategy<'a>(
        &self,
        documents: &'a [Document],
        config: &KeywordConfiguration,
        strategy: &dyn SearchStrategy,
    ) -> Result<CategorizationResponse<'a>> {
        if documents.is_empty() {
            log::info!("No documents to categorize");
            return Ok(CategorizationResponse::empty());
        }

        config.validate()?;

        let mut registry = CategoryRegistry::initialize();
        let mut state = CategorizedState::new(documents.len());

        self.scan(&mut registry, documents, config, strategy, &mut state)?;
        Self::reconcile(&mut registry, documents, &state)?;

        log::info!(
            "Categorized {} documents with {}: {} matched, {} uncategorized",
            documents.len(),
            strategy.name(),
            state.categorized_count(),
            documents.len() - state.categorized_count()
        );

        Ok(CategorizationResponse {
            count: documents.len(),
            data: registry,
        })
    }

    fn scan<'a>(
        &self,
        registry: &mut CategoryRegistry<'a>,
        documents: &'a [Document],
        config: &KeywordConfiguration,
        strategy: &dyn SearchStrategy,
        state: &mut CategorizedState,
    ) -> Result<()> {
        let classifier = Classifier::new(strategy, &self.highlighter);

        for id in CategoryId::KEYWORD_DRIVEN {
            let keywords = config.keyword_list(id);
            if keywords.is_empty() {
                log::debug!("Category '{id}' has no keywords, skipping");
                continue;
            }
            classifier.classify(registry.get_mut(id)?, documents, &keywords, state)?;
        }

        Ok(())
    }

    fn reconcile<'a>(
        registry: &mut CategoryRegistry<'a>,
        documents: &'a [Document],
        state: &CategorizedState,
    ) -> Result<()> {
        let fallback = registry.get_mut(CategoryId::FALLBACK)?;
        for position in state.uncategorized() {
            fallback.push(MatchResult::unhighlighted(position, &documents[position]));
        }
        Ok(())
    }
}
