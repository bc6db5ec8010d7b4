//! Category registry and match results.
//!
//! The registry holds the fixed, ordered set of categories a run fills in:
//! five keyword-driven categories followed by the reserved fallback
//! category (`no_category`). The declared order is the scan order.
//!
//! Categories accumulate [`MatchResult`]s that borrow the documents of the
//! run, so a registry never outlives the batch it categorized.
//!
//! # Examples
//!
//! ```
//! use tweety::category::{CategoryId, CategoryRegistry};
//!
//! let registry = CategoryRegistry::initialize();
//! assert_eq!(registry.categories().len(), 6);
//!
//! let category = registry.find_by_id("dinas_binamarga").unwrap();
//! assert_eq!(category.id, CategoryId::DinasBinamarga);
//! assert!(registry.find_by_id("dinas_pariwisata").is_err());
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::error::{Result, TweetyError};

/// Stable identifier of a category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CategoryId {
    DinasKesehatan,
    DinasBinamarga,
    DinasPemuda,
    DinasPendidikan,
    DinasSosial,
    /// Reserved fallback for documents no keyword matched.
    NoCategory,
}

impl CategoryId {
    /// Every category, in scan order. The fallback category is last.
    pub const ALL: [CategoryId; 6] = [
        CategoryId::DinasKesehatan,
        CategoryId::DinasBinamarga,
        CategoryId::DinasPemuda,
        CategoryId::DinasPendidikan,
        CategoryId::DinasSosial,
        CategoryId::NoCategory,
    ];

    /// The keyword-driven categories, in scan order.
    pub const KEYWORD_DRIVEN: [CategoryId; 5] = [
        CategoryId::DinasKesehatan,
        CategoryId::DinasBinamarga,
        CategoryId::DinasPemuda,
        CategoryId::DinasPendidikan,
        CategoryId::DinasSosial,
    ];

    /// The fallback category.
    pub const FALLBACK: CategoryId = CategoryId::NoCategory;

    /// The wire identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryId::DinasKesehatan => "dinas_kesehatan",
            CategoryId::DinasBinamarga => "dinas_binamarga",
            CategoryId::DinasPemuda => "dinas_pemuda",
            CategoryId::DinasPendidikan => "dinas_pendidikan",
            CategoryId::DinasSosial => "dinas_sosial",
            CategoryId::NoCategory => "no_category",
        }
    }

    /// Human-readable category name.
    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryId::DinasKesehatan => "Dinas Kesehatan",
            CategoryId::DinasBinamarga => "Dinas Binamarga",
            CategoryId::DinasPemuda => "Dinas Pemuda",
            CategoryId::DinasPendidikan => "Dinas Pendidikan",
            CategoryId::DinasSosial => "Dinas Sosial",
            CategoryId::NoCategory => "No Category",
        }
    }

    pub fn is_fallback(&self) -> bool {
        *self == CategoryId::FALLBACK
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryId {
    type Err = TweetyError;

    fn from_str(s: &str) -> Result<Self> {
        CategoryId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| TweetyError::category_not_found(s))
    }
}

/// A document placed into a category, with its rendered text.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult<'a> {
    /// Position of the document in the run's input.
    #[serde(skip)]
    pub position: usize,
    /// The document as supplied by the source.
    #[serde(rename = "tweet_content")]
    pub original_document: &'a Document,
    /// The document text with matched keywords highlighted. Equal to the
    /// original text for fallback entries.
    #[serde(rename = "result")]
    pub rendered_text: String,
}

impl<'a> MatchResult<'a> {
    pub fn new(position: usize, original_document: &'a Document, rendered_text: String) -> Self {
        MatchResult {
            position,
            original_document,
            rendered_text,
        }
    }

    /// A result carrying the document text unmodified.
    pub fn unhighlighted(position: usize, original_document: &'a Document) -> Self {
        Self::new(position, original_document, original_document.text.clone())
    }
}

/// A named bucket of categorized documents.
#[derive(Debug, Clone, Serialize)]
pub struct Category<'a> {
    pub id: CategoryId,
    pub name: &'static str,
    #[serde(rename = "num")]
    match_count: usize,
    #[serde(rename = "tweet")]
    results: Vec<MatchResult<'a>>,
}

impl<'a> Category<'a> {
    /// Create an empty category.
    pub fn new(id: CategoryId) -> Self {
        Category {
            id,
            name: id.display_name(),
            match_count: 0,
            results: Vec::new(),
        }
    }

    /// Append a result and bump the match count.
    pub fn push(&mut self, result: MatchResult<'a>) {
        self.results.push(result);
        self.match_count += 1;
    }

    pub fn match_count(&self) -> usize {
        self.match_count
    }

    pub fn results(&self) -> &[MatchResult<'a>] {
        &self.results
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Input positions of the documents in this category, in result order.
    pub fn positions(&self) -> Vec<usize> {
        self.results.iter().map(|r| r.position).collect()
    }

    /// Drop all results and reset the count.
    pub fn clear(&mut self) {
        self.results.clear();
        self.match_count = 0;
    }
}

/// The fixed, ordered set of categories of one run.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryRegistry<'a> {
    #[serde(rename = "query")]
    categories: Vec<Category<'a>>,
}

impl Default for CategoryRegistry<'_> {
    fn default() -> Self {
        Self::initialize()
    }
}

impl<'a> CategoryRegistry<'a> {
    /// Build the six categories in their declared order, all empty.
    pub fn initialize() -> Self {
        CategoryRegistry {
            categories: CategoryId::ALL.into_iter().map(Category::new).collect(),
        }
    }

    /// All categories in scan order, the fallback last.
    pub fn categories(&self) -> &[Category<'a>] {
        &self.categories
    }

    /// Look up a category by its wire identifier.
    pub fn find_by_id(&self, id: &str) -> Result<&Category<'a>> {
        self.get(id.parse()?)
    }

    /// Get a category by id.
    pub fn get(&self, id: CategoryId) -> Result<&Category<'a>> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| TweetyError::category_not_found(id.as_str()))
    }

    /// Get a mutable category by id.
    pub fn get_mut(&mut self, id: CategoryId) -> Result<&mut Category<'a>> {
        self.categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| TweetyError::category_not_found(id.as_str()))
    }

    /// The fallback category.
    pub fn fallback(&self) -> Result<&Category<'a>> {
        self.get(CategoryId::FALLBACK)
    }

    /// Total results across all categories, fallback included.
    pub fn total_results(&self) -> usize {
        self.categories.iter().map(|c| c.results.len()).sum()
    }

    /// Document positions per category.
    pub fn membership(&self) -> BTreeMap<CategoryId, Vec<usize>> {
        self.categories
            .iter()
            .map(|c| (c.id, c.positions()))
            .collect()
    }

    /// Empty every category.
    pub fn clear(&mut self) {
        for category in &mut self.categories {
            category.clear();
        }
    }
}
