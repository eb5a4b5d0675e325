//! Word slots
//!
//! A slot is one across or down run of coded cells that must be filled with a
//! single dictionary word. Slots are produced once by the extractor and never
//! change; the mutable candidate state lives in the solver.

use super::grid::Code;
use std::fmt;

/// Minimum run length for a run of coded cells to count as a word slot.
/// Shorter runs are too unconstrained to be solvable words.
pub const MIN_SLOT_LEN: usize = 4;

/// Reading direction of a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Across,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Across => write!(f, "across"),
            Self::Down => write!(f, "down"),
        }
    }
}

/// One word to solve: start cell, direction, and the ordered code sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    codes: Vec<Code>,
}

impl Slot {
    /// Create a slot
    ///
    /// # Panics
    /// Panics in debug mode if the code sequence is shorter than
    /// [`MIN_SLOT_LEN`]; the extractor never emits such runs.
    #[must_use]
    pub fn new(row: usize, col: usize, direction: Direction, codes: Vec<Code>) -> Self {
        debug_assert!(
            codes.len() >= MIN_SLOT_LEN,
            "slot of length {} is below the minimum of {MIN_SLOT_LEN}",
            codes.len()
        );
        Self {
            row,
            col,
            direction,
            codes,
        }
    }

    /// The ordered code sequence
    #[inline]
    #[must_use]
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    /// Word length this slot demands
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Always false: slots are at least [`MIN_SLOT_LEN`] cells long
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) {} [{}]",
            self.row,
            self.col,
            self.direction,
            self.codes
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        )
    }
}
