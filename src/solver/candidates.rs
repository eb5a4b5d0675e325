//! Per-slot candidate state
//!
//! Wraps a slot together with its current candidate list. Candidates are word
//! ids into the shared dictionary, so cloning a store for a new search branch
//! copies indices, never word text. `None` means the list has not been
//! computed yet; `Some` with an empty list is a dead slot.

use crate::core::{Rubric, Slot};
use crate::dictionary::{Dictionary, WordId};
use super::matcher::filter_pool;

/// A slot plus its mutable candidate list
#[derive(Debug, Clone)]
pub struct SlotState {
    slot: Slot,
    /// Index of the slot in extraction order, used to present solutions in a
    /// stable order no matter how the search re-sorted its working list.
    order: usize,
    candidates: Option<Vec<WordId>>,
}

impl SlotState {
    /// Wrap a freshly extracted slot; no candidates computed yet
    #[must_use]
    pub fn new(slot: Slot, order: usize) -> Self {
        Self {
            slot,
            order,
            candidates: None,
        }
    }

    /// The underlying slot
    #[inline]
    #[must_use]
    pub fn slot(&self) -> &Slot {
        &self.slot
    }

    /// Position of this slot in extraction order
    #[inline]
    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Cached candidate count: `None` until the first narrowing computes it
    #[inline]
    #[must_use]
    pub fn count(&self) -> Option<usize> {
        self.candidates.as_ref().map(Vec::len)
    }

    /// True once the list is computed and empty: this branch cannot succeed
    #[inline]
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.count() == Some(0)
    }

    /// The current candidate list, if computed
    #[must_use]
    pub fn candidates(&self) -> Option<&[WordId]> {
        self.candidates.as_deref()
    }

    /// Recompute the candidate list under `rubric`, replacing the old list
    ///
    /// The previous list is the pool when one exists (narrowing is monotone:
    /// a candidate dropped once can never come back); the first call seeds
    /// from the dictionary's length bucket instead.
    pub fn narrow(&mut self, rubric: &Rubric, dictionary: &Dictionary) {
        let pool = match self.candidates.take() {
            Some(previous) => previous,
            None => dictionary.of_len(self.slot.len()).to_vec(),
        };
        self.candidates = Some(filter_pool(self.slot.codes(), rubric, dictionary, &pool));
    }

    /// Collapse the candidate list to a single chosen word
    pub fn fix(&mut self, word: WordId) {
        self.candidates = Some(vec![word]);
    }

    /// The single remaining candidate of a fully narrowed slot
    ///
    /// # Panics
    /// Panics if the slot is not fixed to exactly one candidate.
    #[must_use]
    pub fn chosen(&self) -> WordId {
        match self.candidates() {
            Some([word]) => *word,
            other => panic!(
                "slot {} is not fully narrowed ({} candidates)",
                self.slot,
                other.map_or(0, <[WordId]>::len)
            ),
        }
    }
}
