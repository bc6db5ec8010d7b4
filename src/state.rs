//! Run-scoped tracking of which documents have been categorized.

use bit_vec::BitVec;

use crate::error::{Result, TweetyError};

/// A bitmap with one bit per document of the current batch.
///
/// A bit is set the first time any keyword of any category matches the
/// document and is never cleared during the run. Documents whose bit is
/// still unset after the scan phase go to the fallback category.
#[derive(Debug, Clone)]
pub struct CategorizedState {
    /// Bit set = categorized.
    categorized: BitVec,
    /// Number of set bits.
    categorized_count: usize,
}

impl CategorizedState {
    /// Create a state for `len` documents, none categorized.
    pub fn new(len: usize) -> Self {
        CategorizedState {
            categorized: BitVec::from_elem(len, false),
            categorized_count: 0,
        }
    }

    /// Mark a document as categorized.
    ///
    /// Returns `true` if this call changed the state.
    pub fn mark(&mut self, position: usize) -> Result<bool> {
        if position >= self.categorized.len() {
            return Err(TweetyError::other(format!(
                "Document position {position} out of range for a batch of {}",
                self.categorized.len()
            )));
        }

        let was_categorized = self.categorized.get(position).unwrap_or(false);
        if !was_categorized {
            self.categorized.set(position, true);
            self.categorized_count += 1;
        }

        Ok(!was_categorized)
    }

    /// Check if a document is categorized.
    pub fn is_categorized(&self, position: usize) -> bool {
        self.categorized.get(position).unwrap_or(false)
    }

    /// Positions of documents not yet categorized, ascending.
    pub fn uncategorized(&self) -> impl Iterator<Item = usize> + '_ {
        self.categorized
            .iter()
            .enumerate()
            .filter(|(_, categorized)| !*categorized)
            .map(|(position, _)| position)
    }

    pub fn categorized_count(&self) -> usize {
        self.categorized_count
    }

    /// Number of documents tracked.
    pub fn len(&self) -> usize {
        self.categorized.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categorized.is_empty()
    }
}
