//! Core domain types for codeword puzzles
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod grid;
mod rubric;
mod slot;
mod word;

pub use grid::{ALPHABET_SIZE, Cell, Code, Grid, GridError};
pub use rubric::{Rubric, RubricError};
pub use slot::{Direction, MIN_SLOT_LEN, Slot};
pub use word::{Word, WordError};
