//! Exact substring search strategies.
//!
//! The categorizer only needs to know whether a keyword occurs in a
//! document. It reaches that answer through the [`SearchStrategy`] trait, so
//! any implementation honouring the contract can be plugged in. Two
//! implementations ship with the crate:
//!
//! - [`KmpSearch`]: Knuth-Morris-Pratt with a prefix failure table
//! - [`BoyerMooreSearch`]: Boyer-Moore with the bad-character heuristic
//!
//! Both operate on `char`s and report char positions, never byte offsets.
//!
//! # Examples
//!
//! ```
//! use tweety::strategy::{SearchStrategy, StrategyKind};
//!
//! let strategy = StrategyKind::Kmp.build();
//! assert_eq!(strategy.solve("jalan rusak", "rusak").unwrap(), Some(6));
//! assert_eq!(strategy.solve("jalan rusak", "banjir").unwrap(), None);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TweetyError};

pub mod boyer_moore;
pub mod kmp;

pub use boyer_moore::BoyerMooreSearch;
pub use kmp::KmpSearch;

/// Exact substring search.
pub trait SearchStrategy: Send + Sync {
    /// Return the char position of the first occurrence of `pattern` in
    /// `haystack`, or `None` when it does not occur.
    ///
    /// An empty pattern occurs at position 0.
    fn solve(&self, haystack: &str, pattern: &str) -> Result<Option<usize>>;

    /// Get the name of this strategy for debugging and logging.
    fn name(&self) -> &'static str;
}

/// Selector for the built-in strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Knuth-Morris-Pratt.
    #[default]
    Kmp,
    /// Boyer-Moore (bad-character rule).
    BoyerMoore,
}

impl StrategyKind {
    /// All built-in strategies.
    pub const ALL: [StrategyKind; 2] = [StrategyKind::Kmp, StrategyKind::BoyerMoore];

    /// Instantiate the strategy this selector names.
    pub fn build(self) -> Box<dyn SearchStrategy> {
        match self {
            StrategyKind::Kmp => Box::new(KmpSearch::new()),
            StrategyKind::BoyerMoore => Box::new(BoyerMooreSearch::new()),
        }
    }

    /// Map the original boolean switch onto a strategy.
    pub fn from_is_kmp(is_kmp: bool) -> Self {
        if is_kmp {
            StrategyKind::Kmp
        } else {
            StrategyKind::BoyerMoore
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Kmp => "kmp",
            StrategyKind::BoyerMoore => "boyer_moore",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = TweetyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kmp" => Ok(StrategyKind::Kmp),
            "boyer_moore" | "boyer-moore" | "bm" => Ok(StrategyKind::BoyerMoore),
            other => Err(TweetyError::config(format!(
                "unknown search strategy '{other}' (expected kmp or boyer_moore)"
            ))),
        }
    }
}
