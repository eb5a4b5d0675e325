//! Constraint-satisfaction solver
//!
//! Slot extraction, pattern matching, candidate narrowing, and the
//! backtracking search engine.

pub mod candidates;
mod engine;
pub mod extract;
pub mod matcher;

pub use candidates::SlotState;
pub use engine::{Engine, SearchMode, Solution, SolveOutcome, SolveStatus, SolvedEntry};
pub use extract::extract_slots;
pub use matcher::{filter_pool, word_fits};
