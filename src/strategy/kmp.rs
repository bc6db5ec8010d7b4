//! Knuth-Morris-Pratt substring search.

use crate::error::Result;

use super::SearchStrategy;

/// Knuth-Morris-Pratt exact search.
///
/// Precomputes a failure table over the pattern so the text is scanned
/// once without backtracking.
#[derive(Debug, Clone, Default)]
pub struct KmpSearch;

impl KmpSearch {
    /// Create a new KMP search strategy.
    pub fn new() -> Self {
        KmpSearch
    }

    /// Length of the longest proper prefix of `pattern[..=i]` that is also
    /// a suffix of it, for every `i`.
    fn failure_table(pattern: &[char]) -> Vec<usize> {
        let mut table = vec![0; pattern.len()];
        let mut k = 0;

        for i in 1..pattern.len() {
            while k > 0 && pattern[i] != pattern[k] {
                k = table[k - 1];
            }
            if pattern[i] == pattern[k] {
                k += 1;
            }
            table[i] = k;
        }

        table
    }
}

impl SearchStrategy for KmpSearch {
    fn solve(&self, haystack: &str, pattern: &str) -> Result<Option<usize>> {
        let pattern: Vec<char> = pattern.chars().collect();
        if pattern.is_empty() {
            return Ok(Some(0));
        }

        let table = Self::failure_table(&pattern);
        let mut matched = 0;

        for (i, c) in haystack.chars().enumerate() {
            while matched > 0 && c != pattern[matched] {
                matched = table[matched - 1];
            }
            if c == pattern[matched] {
                matched += 1;
            }
            if matched == pattern.len() {
                return Ok(Some(i + 1 - pattern.len()));
            }
        }

        Ok(None)
    }

    fn name(&self) -> &'static str {
        "kmp"
    }
}
