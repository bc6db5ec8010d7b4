//! Boyer-Moore substring search (bad-character rule).

use ahash::AHashMap;

use crate::error::Result;

use super::SearchStrategy;

/// Boyer-Moore exact search using only the bad-character heuristic.
///
/// The pattern is compared right to left; on a mismatch the window jumps so
/// that the mismatched text character lines up with its last occurrence in
/// the pattern.
#[derive(Debug, Clone, Default)]
pub struct BoyerMooreSearch;

impl BoyerMooreSearch {
    /// Create a new Boyer-Moore search strategy.
    pub fn new() -> Self {
        BoyerMooreSearch
    }

    /// Last index of every character in the pattern.
    fn last_occurrence(pattern: &[char]) -> AHashMap<char, usize> {
        let mut table = AHashMap::with_capacity(pattern.len());
        for (i, &c) in pattern.iter().enumerate() {
            table.insert(c, i);
        }
        table
    }
}

impl SearchStrategy for BoyerMooreSearch {
    fn solve(&self, haystack: &str, pattern: &str) -> Result<Option<usize>> {
        let pattern: Vec<char> = pattern.chars().collect();
        if pattern.is_empty() {
            return Ok(Some(0));
        }

        let text: Vec<char> = haystack.chars().collect();
        let m = pattern.len();
        let n = text.len();
        if m > n {
            return Ok(None);
        }

        let last = Self::last_occurrence(&pattern);
        let mut shift = 0;

        while shift + m <= n {
            // j is one past the position being compared.
            let mut j = m;
            while j > 0 && pattern[j - 1] == text[shift + j - 1] {
                j -= 1;
            }
            if j == 0 {
                return Ok(Some(shift));
            }

            let bad = text[shift + j - 1];
            shift += match last.get(&bad) {
                Some(&pos) if pos < j - 1 => j - 1 - pos,
                Some(_) => 1,
                None => j,
            };
        }

        Ok(None)
    }

    fn name(&self) -> &'static str {
        "boyer_moore"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_occurrence() {
        let pattern: Vec<char> = "banana".chars().collect();
        let table = BoyerMooreSearch::last_occurrence(&pattern);
        assert_eq!(table.get(&'b'), Some(&0));
        assert_eq!(table.get(&'a'), Some(&5));
        assert_eq!(table.get(&'n'), Some(&4));
        assert_eq!(table.get(&'z'), None);
    }

    #[test]
    fn test_boyer_moore_solve() {
        let bm = BoyerMooreSearch::new();
        assert_eq!(bm.solve("here is a simple example", "example").unwrap(), Some(17));
        assert_eq!(bm.solve("here is a simple example", "sample").unwrap(), None);
        assert_eq!(bm.solve("abc", "abc").unwrap(), Some(0));
        assert_eq!(bm.solve("ab", "abc").unwrap(), None);
    }

    #[test]
    fn test_boyer_moore_reports_first_occurrence() {
        let bm = BoyerMooreSearch::new();
        assert_eq!(bm.solve("xx banjir banjir", "banjir").unwrap(), Some(3));
    }
}
