//! Backtracking search engine
//!
//! Depth-first trial-assignment search over the slot list, most-constrained
//! slot first. Every descent works on its own copy of the slot states and
//! rubric, so sibling branches never observe each other's narrowing; there is
//! no shared mutable state to unwind on backtrack.
//!
//! The search itself is single-threaded and synchronous. Only the pre-search
//! seeding pass runs in parallel, one task per slot.

use super::candidates::SlotState;
use super::extract::extract_slots;
use crate::core::{Grid, Rubric, Slot, Word};
use crate::dictionary::Dictionary;
use rayon::prelude::*;

/// How many solutions the caller wants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Stop at the first complete assignment
    FirstSolution,
    /// Explore every branch and collect all assignments
    AllSolutions,
}

/// One solved slot within a [`Solution`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolvedEntry {
    pub slot: Slot,
    pub word: Word,
}

/// A complete, consistent assignment: the final rubric plus one word per slot
///
/// Entries are in extraction order, regardless of the order the search fixed
/// them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub rubric: Rubric,
    pub entries: Vec<SolvedEntry>,
}

/// How the search run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveStatus {
    /// First-solution mode stopped at its first hit
    FirstFound,
    /// Every branch was explored; with zero solutions this is the
    /// "no solution" outcome
    Exhausted,
    /// The node budget ran out before the search finished; any solutions
    /// already found are kept
    OutOfBudget,
    /// A slot had no candidates before the search even began
    DeadSlot { slot: Slot },
}

/// Result of a solver run
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    /// Solutions discovered (zero, one, or many depending on mode and status)
    pub solutions: Vec<Solution>,
    /// How the run ended
    pub status: SolveStatus,
    /// Trial assignments attempted
    pub nodes: u64,
}

/// Counts trial assignments against an optional cap
///
/// This is the external cancellation hook: the check sits in the
/// per-candidate loop, so a capped search stops within one trial of the
/// limit. A node count, unlike wall clock, keeps capped runs deterministic.
struct NodeBudget {
    limit: Option<u64>,
    visited: u64,
    exhausted: bool,
}

impl NodeBudget {
    fn new(limit: Option<u64>) -> Self {
        Self {
            limit,
            visited: 0,
            exhausted: false,
        }
    }

    /// Account for one trial; false once the cap is reached
    fn charge(&mut self) -> bool {
        if let Some(limit) = self.limit
            && self.visited >= limit
        {
            self.exhausted = true;
            return false;
        }
        self.visited += 1;
        true
    }
}

/// The codeword solver
///
/// Borrows a read-only dictionary; one engine can run any number of solves.
pub struct Engine<'a> {
    dictionary: &'a Dictionary,
    mode: SearchMode,
    max_nodes: Option<u64>,
}

impl<'a> Engine<'a> {
    /// Create an engine over a dictionary
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary, mode: SearchMode) -> Self {
        Self {
            dictionary,
            mode,
            max_nodes: None,
        }
    }

    /// Cap the number of trial assignments the search may attempt
    #[must_use]
    pub const fn with_node_budget(mut self, max_nodes: u64) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }

    /// Solve a puzzle from a grid and a (possibly empty) rubric seed
    ///
    /// Extracts the slots, seeds every slot's candidate list from the
    /// length-partitioned dictionary, and runs the backtracking search.
    /// A contradictory seed cannot reach this point: [`Rubric`] construction
    /// already rejects it.
    #[must_use]
    pub fn solve(&self, grid: &Grid, seed: &Rubric) -> SolveOutcome {
        let mut states: Vec<SlotState> = extract_slots(grid)
            .into_iter()
            .enumerate()
            .map(|(order, slot)| SlotState::new(slot, order))
            .collect();

        if states.is_empty() {
            // Nothing to solve; report it as no solution, not as an error
            return SolveOutcome {
                solutions: Vec::new(),
                status: SolveStatus::Exhausted,
                nodes: 0,
            };
        }

        // Seed every slot against the full seed rubric. Slots are independent
        // here, so the pass parallelizes; the search below does not.
        states
            .par_iter_mut()
            .for_each(|state| state.narrow(seed, self.dictionary));

        if let Some(dead) = states.iter().find(|state| state.is_dead()) {
            return SolveOutcome {
                solutions: Vec::new(),
                status: SolveStatus::DeadSlot {
                    slot: dead.slot().clone(),
                },
                nodes: 0,
            };
        }

        // Most-constrained slot first; the sort is stable, so equal counts
        // keep extraction order
        states.sort_by_key(SlotState::count);

        let mut search = Search {
            dictionary: self.dictionary,
            mode: self.mode,
            budget: NodeBudget::new(self.max_nodes),
            solutions: Vec::new(),
        };
        search.descend(&states, seed, 0);

        let status = if search.budget.exhausted {
            SolveStatus::OutOfBudget
        } else if self.mode == SearchMode::FirstSolution && !search.solutions.is_empty() {
            SolveStatus::FirstFound
        } else {
            SolveStatus::Exhausted
        };

        SolveOutcome {
            solutions: search.solutions,
            status,
            nodes: search.budget.visited,
        }
    }
}

/// Signal propagated up the recursion
#[derive(PartialEq, Eq)]
enum Flow {
    /// Keep trying candidates at shallower depths
    Continue,
    /// Unwind the whole stack now (first hit found, or budget gone)
    Unwind,
}

/// State for one search run
struct Search<'a> {
    dictionary: &'a Dictionary,
    mode: SearchMode,
    budget: NodeBudget,
    solutions: Vec<Solution>,
}

impl Search<'_> {
    /// Try every candidate of the slot at `depth`, recursing on survivors
    ///
    /// `states` is ordered: positions below `depth` are fixed, `depth` and
    /// deeper are sorted ascending by candidate count. Each trial clones the
    /// state vector, so `states` itself is never mutated.
    fn descend(&mut self, states: &[SlotState], rubric: &Rubric, depth: usize) -> Flow {
        let candidate_ids = states[depth]
            .candidates()
            .expect("slots are seeded before the search starts")
            .to_vec();

        for word_id in candidate_ids {
            if !self.budget.charge() {
                return Flow::Unwind;
            }

            let word = self.dictionary.word(word_id);
            let codes = states[depth].slot().codes();
            // Matcher-produced candidates always extend cleanly; skip
            // defensively if one ever does not
            let Some(trial) = rubric.with_word(codes, word.bytes()) else {
                continue;
            };

            let mut branch = states.to_vec();
            branch[depth].fix(word_id);

            // Propagate the trial into every deeper slot, pruning on the
            // first one that dies
            let mut dead_end = false;
            for state in &mut branch[depth + 1..] {
                state.narrow(&trial, self.dictionary);
                if state.is_dead() {
                    dead_end = true;
                    break;
                }
            }
            if dead_end {
                continue;
            }

            if depth + 1 == branch.len() {
                self.record(&branch, trial);
                if self.mode == SearchMode::FirstSolution {
                    return Flow::Unwind;
                }
                continue;
            }

            // Re-sort only the open tail; fixed positions stay put
            branch[depth + 1..].sort_by_key(SlotState::count);

            if self.descend(&branch, &trial, depth + 1) == Flow::Unwind {
                return Flow::Unwind;
            }
        }

        Flow::Continue
    }

    /// Materialize a fully fixed state vector into a [`Solution`]
    fn record(&mut self, states: &[SlotState], rubric: Rubric) {
        let mut entries: Vec<(usize, SolvedEntry)> = states
            .iter()
            .map(|state| {
                let entry = SolvedEntry {
                    slot: state.slot().clone(),
                    word: self.dictionary.word(state.chosen()).clone(),
                };
                (state.order(), entry)
            })
            .collect();
        entries.sort_by_key(|(order, _)| *order);

        self.solutions.push(Solution {
            rubric,
            entries: entries.into_iter().map(|(_, entry)| entry).collect(),
        });
    }
}
