//! Puzzle analysis command
//!
//! Seeds every slot against the rubric and reports the candidate counts the
//! search would start from, flagging dead slots before any time is spent
//! searching.

use crate::core::{Grid, Rubric, Slot};
use crate::dictionary::Dictionary;
use crate::solver::{SlotState, extract_slots};

/// Candidate count for one slot
pub struct SlotAnalysis {
    pub slot: Slot,
    pub candidates: usize,
}

/// Result of analyzing a puzzle
pub struct AnalysisResult {
    /// Per-slot counts, most constrained first (the order the search would
    /// commit slots in)
    pub slots: Vec<SlotAnalysis>,
    pub dead_slots: usize,
    pub dictionary_size: usize,
}

impl AnalysisResult {
    /// True if the puzzle can enter search at all
    #[must_use]
    pub fn is_viable(&self) -> bool {
        self.dead_slots == 0 && !self.slots.is_empty()
    }
}

/// Compute initial candidate counts for every slot of a puzzle
#[must_use]
pub fn analyze_puzzle(grid: &Grid, seed: &Rubric, dictionary: &Dictionary) -> AnalysisResult {
    let mut states: Vec<SlotState> = extract_slots(grid)
        .into_iter()
        .enumerate()
        .map(|(order, slot)| SlotState::new(slot, order))
        .collect();

    for state in &mut states {
        state.narrow(seed, dictionary);
    }

    states.sort_by_key(SlotState::count);

    let dead_slots = states.iter().filter(|s| s.is_dead()).count();
    let slots = states
        .into_iter()
        .map(|state| SlotAnalysis {
            candidates: state.count().unwrap_or(0),
            slot: state.slot().clone(),
        })
        .collect();

    AnalysisResult {
        slots,
        dead_slots,
        dictionary_size: dictionary.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::words_from_slice;

    #[test]
    fn analyze_counts_candidates_per_slot() {
        let grid = Grid::from_numbers(&[
            vec![1, 2, 3, 4, 0],
            vec![0, 0, 0, 0, 0],
            vec![5, 6, 7, 8, 9],
        ])
        .unwrap();
        let dictionary = Dictionary::new(words_from_slice(&[
            "dump", "dumb", "cares", "cores", "carts",
        ]));

        let result = analyze_puzzle(&grid, &Rubric::new(), &dictionary);

        assert_eq!(result.slots.len(), 2);
        assert!(result.is_viable());
        assert_eq!(result.dead_slots, 0);

        // Sorted most-constrained first
        assert_eq!(result.slots[0].candidates, 2);
        assert_eq!(result.slots[0].slot.len(), 4);
        assert_eq!(result.slots[1].candidates, 3);
    }

    #[test]
    fn analyze_flags_dead_slots() {
        let grid = Grid::from_numbers(&[vec![1, 2, 3, 1]]).unwrap();
        let dictionary = Dictionary::new(words_from_slice(&["noon", "aide"]));

        let result = analyze_puzzle(&grid, &Rubric::new(), &dictionary);

        assert_eq!(result.dead_slots, 1);
        assert!(!result.is_viable());
        assert_eq!(result.slots[0].candidates, 0);
    }

    #[test]
    fn analyze_respects_seed() {
        let grid = Grid::from_numbers(&[vec![1, 2, 3, 4]]).unwrap();
        let dictionary = Dictionary::new(words_from_slice(&["star", "scar", "spar"]));
        let seed = Rubric::from_pairs([(2, 't')]).unwrap();

        let result = analyze_puzzle(&grid, &seed, &dictionary);

        assert_eq!(result.slots[0].candidates, 1);
    }

    #[test]
    fn analyze_empty_grid_is_not_viable() {
        let grid = Grid::from_numbers(&[vec![0, 0], vec![0, 0]]).unwrap();
        let dictionary = Dictionary::new(words_from_slice(&["star"]));

        let result = analyze_puzzle(&grid, &Rubric::new(), &dictionary);

        assert!(result.slots.is_empty());
        assert!(!result.is_viable());
    }
}
