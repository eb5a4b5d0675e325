//! Puzzle solving command
//!
//! Runs the search engine on one puzzle and reports the outcome together with
//! timing and search-size instrumentation.

use crate::core::{Grid, Rubric};
use crate::dictionary::Dictionary;
use crate::solver::{Engine, SearchMode, SolveOutcome, extract_slots};
use std::time::{Duration, Instant};

/// Configuration for a solve run
pub struct SolveConfig {
    pub mode: SearchMode,
    pub max_nodes: Option<u64>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(mode: SearchMode) -> Self {
        Self {
            mode,
            max_nodes: None,
        }
    }
}

/// Result of a solve run
pub struct SolveReport {
    pub outcome: SolveOutcome,
    pub slot_count: usize,
    pub dictionary_size: usize,
    pub duration: Duration,
}

/// Solve one puzzle
#[must_use]
pub fn solve_puzzle(
    grid: &Grid,
    seed: &Rubric,
    dictionary: &Dictionary,
    config: &SolveConfig,
) -> SolveReport {
    let slot_count = extract_slots(grid).len();

    let mut engine = Engine::new(dictionary, config.mode);
    if let Some(max_nodes) = config.max_nodes {
        engine = engine.with_node_budget(max_nodes);
    }

    let start = Instant::now();
    let outcome = engine.solve(grid, seed);
    let duration = start.elapsed();

    SolveReport {
        outcome,
        slot_count,
        dictionary_size: dictionary.len(),
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::words_from_slice;
    use crate::solver::SolveStatus;

    fn small_puzzle() -> (Grid, Dictionary) {
        let grid = Grid::from_numbers(&[
            vec![1, 2, 3, 4],
            vec![5, 0, 0, 0],
            vec![6, 0, 0, 0],
            vec![7, 0, 0, 0],
            vec![8, 0, 0, 0],
        ])
        .unwrap();
        let dictionary = Dictionary::new(words_from_slice(&["star", "sonic"]));
        (grid, dictionary)
    }

    #[test]
    fn solve_reports_outcome_and_counts() {
        let (grid, dictionary) = small_puzzle();
        let config = SolveConfig::new(SearchMode::FirstSolution);

        let report = solve_puzzle(&grid, &Rubric::new(), &dictionary, &config);

        assert_eq!(report.slot_count, 2);
        assert_eq!(report.dictionary_size, 2);
        assert_eq!(report.outcome.status, SolveStatus::FirstFound);
        assert_eq!(report.outcome.solutions.len(), 1);
        assert!(report.outcome.nodes > 0);
    }

    #[test]
    fn solve_respects_node_budget() {
        let (grid, dictionary) = small_puzzle();
        let mut config = SolveConfig::new(SearchMode::AllSolutions);
        config.max_nodes = Some(1);

        let report = solve_puzzle(&grid, &Rubric::new(), &dictionary, &config);

        assert_eq!(report.outcome.status, SolveStatus::OutOfBudget);
        assert!(report.outcome.nodes <= 1);
    }

    #[test]
    fn solve_sample_puzzle_with_embedded_dictionary() {
        use crate::dictionary::WORDS;
        use crate::puzzles;

        let puzzle = puzzles::sample();
        let dictionary = Dictionary::new(words_from_slice(WORDS));
        let config = SolveConfig::new(SearchMode::FirstSolution);

        let report = solve_puzzle(&puzzle.grid, &puzzle.seed, &dictionary, &config);

        assert_eq!(report.outcome.status, SolveStatus::FirstFound);
        let solution = &report.outcome.solutions[0];
        assert_eq!(solution.entries.len(), 5);

        // Every solved word must fit its slot under the final rubric
        for entry in &solution.entries {
            assert!(crate::solver::word_fits(
                entry.slot.codes(),
                &solution.rubric,
                &entry.word
            ));
        }
    }
}
