//! Keyword scanning for a single category.
//!
//! For every document, in input order, each keyword of the category is
//! looked up with the run's [`SearchStrategy`], in keyword order. A hit
//! marks the document as categorized and highlights the keyword in the
//! document's rendered text; highlighting builds on the text produced by
//! earlier keywords. Documents with at least one hit are appended to the
//! category.
//!
//! Presence is case-insensitive: the document text and the keyword are both
//! folded with [`fold_case`] before they reach the strategy.

use crate::category::{Category, MatchResult};
use crate::document::Document;
use crate::error::{Result, TweetyError};
use crate::highlight::{Highlighter, KeywordPattern};
use crate::state::CategorizedState;
use crate::strategy::SearchStrategy;

/// Lowercase `text` one char at a time.
///
/// Unlike `str::to_lowercase` there are no context rules (a final `Σ`
/// folds to `σ` like any other), so a folded keyword is a substring of a
/// folded text whenever it occurs in it ignoring case.
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// A keyword ready for scanning: case-folded for search, compiled for
/// highlighting.
struct PreparedKeyword {
    folded: String,
    pattern: KeywordPattern,
}

/// Scans documents for one category's keywords.
pub struct Classifier<'s> {
    strategy: &'s dyn SearchStrategy,
    highlighter: &'s Highlighter,
}

impl std::fmt::Debug for Classifier<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Classifier")
            .field("strategy", &self.strategy.name())
            .field("highlighter", &self.highlighter.config())
            .finish()
    }
}

impl<'s> Classifier<'s> {
    /// Create a classifier using `strategy` for presence checks.
    pub fn new(strategy: &'s dyn SearchStrategy, highlighter: &'s Highlighter) -> Self {
        Classifier {
            strategy,
            highlighter,
        }
    }

    /// Scan `documents` for `keywords` and record matches in `category`.
    ///
    /// Returns the number of documents added to the category. Empty keywords
    /// are skipped. The first search failure aborts the scan.
    pub fn classify<'a>(
        &self,
        category: &mut Category<'a>,
        documents: &'a [Document],
        keywords: &[String],
        state: &mut CategorizedState,
    ) -> Result<usize> {
        if state.len() != documents.len() {
            return Err(TweetyError::other(format!(
                "categorized state tracks {} documents but {} were supplied",
                state.len(),
                documents.len()
            )));
        }

        let prepared = self.prepare(keywords)?;
        if prepared.is_empty() {
            return Ok(0);
        }

        let mut added = 0;
        for (position, document) in documents.iter().enumerate() {
            if let Some(rendered) = self.scan_document(position, document, &prepared, state)? {
                category.push(MatchResult::new(position, document, rendered));
                added += 1;
            }
        }

        log::debug!(
            "Category '{}': {} of {} documents matched {} keywords ({})",
            category.id,
            added,
            documents.len(),
            prepared.len(),
            self.strategy.name()
        );

        Ok(added)
    }

    fn prepare(&self, keywords: &[String]) -> Result<Vec<PreparedKeyword>> {
        keywords
            .iter()
            .filter(|keyword| !keyword.is_empty())
            .map(|keyword| -> Result<PreparedKeyword> {
                Ok(PreparedKeyword {
                    folded: fold_case(keyword),
                    pattern: self.highlighter.compile(keyword)?,
                })
            })
            .collect()
    }

    /// Rendered text of `document` if any keyword occurs in it.
    fn scan_document(
        &self,
        position: usize,
        document: &Document,
        keywords: &[PreparedKeyword],
        state: &mut CategorizedState,
    ) -> Result<Option<String>> {
        let folded_text = fold_case(&document.text);
        let mut rendered = document.text.clone();
        let mut hits = 0;

        for keyword in keywords {
            let found = self
                .strategy
                .solve(&folded_text, &keyword.folded)
                .map_err(|e| {
                    TweetyError::search_failure(
                        self.strategy.name(),
                        keyword.pattern.keyword(),
                        position,
                        e.to_string(),
                    )
                })?;

            if found.is_some() {
                hits += 1;
                state.mark(position)?;
                rendered = self.highlighter.apply(&keyword.pattern, &rendered);
            }
        }

        Ok((hits > 0).then_some(rendered))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::category::CategoryId;
    use crate::highlight::HighlightConfig;
    use crate::strategy::KmpSearch;

    fn keywords(list: &[&str]) -> Vec<String> {
        list.iter().map(|k| k.to_string()).collect()
    }

    fn highlighter() -> Highlighter {
        Highlighter::new(HighlightConfig::default()).unwrap()
    }

    /// Records every pattern it is asked about.
    #[derive(Default)]
    struct RecordingSearch {
        patterns: Mutex<Vec<String>>,
    }

    impl SearchStrategy for RecordingSearch {
        fn solve(&self, haystack: &str, pattern: &str) -> Result<Option<usize>> {
            self.patterns.lock().unwrap().push(pattern.to_string());
            Ok(haystack.find(pattern))
        }

        fn name(&self) -> &'static str {
            "recording"
        }
    }

    /// Fails on one specific pattern.
    struct FailingSearch;

    impl SearchStrategy for FailingSearch {
        fn solve(&self, _haystack: &str, pattern: &str) -> Result<Option<usize>> {
            if pattern == "rusak" {
                Err(TweetyError::other("index corrupted"))
            } else {
                Ok(None)
            }
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    #[test]
    fn test_classify_matches_and_highlights() {
        let documents = vec![
            Document::new("Jalan rusak di kota"),
            Document::new("Sekolah butuh renovasi"),
        ];
        let strategy = KmpSearch::new();
        let highlighter = highlighter();
        let classifier = Classifier::new(&strategy, &highlighter);
        let mut category = Category::new(CategoryId::DinasBinamarga);
        let mut state = CategorizedState::new(documents.len());

        let added = classifier
            .classify(&mut category, &documents, &keywords(&["jalan", "rusak"]), &mut state)
            .unwrap();

        assert_eq!(added, 1);
        assert_eq!(category.match_count(), 1);
        assert_eq!(
            category.results()[0].rendered_text,
            "<b>Jalan</b> <b>rusak</b> di kota"
        );
        assert_eq!(category.results()[0].original_document.text, "Jalan rusak di kota");
        assert!(state.is_categorized(0));
        assert!(!state.is_categorized(1));
    }

    #[test]
    fn test_document_added_once_per_category() {
        let documents = vec![Document::new("banjir banjir banjir")];
        let strategy = KmpSearch::new();
        let highlighter = highlighter();
        let classifier = Classifier::new(&strategy, &highlighter);
        let mut category = Category::new(CategoryId::DinasSosial);
        let mut state = CategorizedState::new(1);

        classifier
            .classify(&mut category, &documents, &keywords(&["banjir", "BANJIR"]), &mut state)
            .unwrap();

        assert_eq!(category.results().len(), 1);
        assert_eq!(
            category.results()[0].rendered_text,
            "<b>banjir</b> <b>banjir</b> <b>banjir</b>"
        );
    }

    #[test]
    fn test_keywords_are_searched_lowercased_and_empty_ones_skipped() {
        let documents = vec![Document::new("Puskesmas Tutup")];
        let strategy = RecordingSearch::default();
        let highlighter = highlighter();
        let classifier = Classifier::new(&strategy, &highlighter);
        let mut category = Category::new(CategoryId::DinasKesehatan);
        let mut state = CategorizedState::new(1);

        classifier
            .classify(
                &mut category,
                &documents,
                &keywords(&["", "PUSKESMAS", "", "dokter"]),
                &mut state,
            )
            .unwrap();

        assert_eq!(
            *strategy.patterns.lock().unwrap(),
            vec!["puskesmas".to_string(), "dokter".to_string()]
        );
        assert_eq!(category.results()[0].rendered_text, "<b>Puskesmas</b> Tutup");
    }

    #[test]
    fn test_empty_documents_is_noop() {
        let documents: Vec<Document> = Vec::new();
        let strategy = KmpSearch::new();
        let highlighter = highlighter();
        let classifier = Classifier::new(&strategy, &highlighter);
        let mut category = Category::new(CategoryId::DinasPemuda);
        let mut state = CategorizedState::new(0);

        let added = classifier
            .classify(&mut category, &documents, &keywords(&["futsal"]), &mut state)
            .unwrap();
        assert_eq!(added, 0);
        assert!(category.is_empty());
    }

    #[test]
    fn test_fold_case_has_no_context_rules() {
        assert_eq!(fold_case("ΟΔΟΣ"), "οδοσ");
        assert_eq!(fold_case("ΟΔΟΣΟ"), "οδοσο");
        assert!(fold_case("ΟΔΟΣΟ ΚΑΛΗ").contains(&fold_case("ΟΔΟΣ")));
        assert_eq!(fold_case("Jalan RUSAK"), "jalan rusak");
    }

    #[test]
    fn test_non_ascii_keyword_inside_word() {
        let documents = vec![Document::new("ΟΔΟΣΟ ΚΑΛΗ"), Document::new("ΟΔΟΣ")];
        let strategy = KmpSearch::new();
        let highlighter = highlighter();
        let classifier = Classifier::new(&strategy, &highlighter);
        let mut category = Category::new(CategoryId::DinasBinamarga);
        let mut state = CategorizedState::new(documents.len());

        classifier
            .classify(&mut category, &documents, &keywords(&["ΟΔΟΣ"]), &mut state)
            .unwrap();

        assert_eq!(category.positions(), vec![0, 1]);
        assert_eq!(category.results()[0].rendered_text, "<b>ΟΔΟΣ</b>Ο ΚΑΛΗ");
        assert_eq!(category.results()[1].rendered_text, "<b>ΟΔΟΣ</b>");
        assert_eq!(state.categorized_count(), 2);
    }

    #[test]
    fn test_search_failure_aborts() {
        let documents = vec![Document::new("aman"), Document::new("Jalan rusak")];
        let strategy = FailingSearch;
        let highlighter = highlighter();
        let classifier = Classifier::new(&strategy, &highlighter);
        let mut category = Category::new(CategoryId::DinasBinamarga);
        let mut state = CategorizedState::new(2);

        let result =
            classifier.classify(&mut category, &documents, &keywords(&["rusak"]), &mut state);

        match result {
            Err(TweetyError::SearchFailure {
                strategy,
                keyword,
                document,
                ..
            }) => {
                assert_eq!(strategy, "failing");
                assert_eq!(keyword, "rusak");
                assert_eq!(document, 0);
            }
            other => panic!("Expected SearchFailure, got {other:?}"),
        }
    }

    #[test]
    fn test_state_length_mismatch() {
        let documents = vec![Document::new("a")];
        let strategy = KmpSearch::new();
        let highlighter = highlighter();
        let classifier = Classifier::new(&strategy, &highlighter);
        let mut category = Category::new(CategoryId::DinasPemuda);
        let mut state = CategorizedState::new(3);

        assert!(
            classifier
                .classify(&mut category, &documents, &keywords(&["a"]), &mut state)
                .is_err()
        );
    }
}
