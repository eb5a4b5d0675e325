//! Benchmark command
//!
//! Times repeated solves of one puzzle. Candidate order follows dictionary
//! order, so shuffling the dictionary between iterations probes how sensitive
//! the search path is to it; without shuffling every iteration is identical
//! and the spread reflects machine noise only.

use crate::core::{Grid, Rubric, Word};
use crate::dictionary::Dictionary;
use crate::solver::{Engine, SearchMode, SolveStatus};
use indicatif::{ProgressBar, ProgressStyle};
use rand::seq::SliceRandom;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub iterations: usize,
    pub solved: usize,
    pub total_duration: Duration,
    pub min_duration: Duration,
    pub max_duration: Duration,
    pub average_nodes: f64,
    pub min_nodes: u64,
    pub max_nodes: u64,
    pub solves_per_second: f64,
}

/// Solve the same puzzle `iterations` times and collect timing statistics
///
/// With `shuffle` set, each iteration rebuilds the dictionary in a random
/// order first (shuffle time is excluded from the measured durations).
pub fn run_benchmark(
    grid: &Grid,
    seed: &Rubric,
    dictionary: &Dictionary,
    iterations: usize,
    shuffle: bool,
) -> BenchmarkResult {
    let pb = ProgressBar::new(iterations as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let base_words: Vec<Word> = (0..dictionary.len() as u32)
        .map(|id| dictionary.word(id).clone())
        .collect();

    let mut solved = 0;
    let mut total_duration = Duration::ZERO;
    let mut min_duration = Duration::MAX;
    let mut max_duration = Duration::ZERO;
    let mut total_nodes = 0u64;
    let mut min_nodes = u64::MAX;
    let mut max_nodes = 0u64;

    for iteration in 0..iterations {
        let shuffled;
        let current = if shuffle {
            let mut words = base_words.clone();
            words.shuffle(&mut rand::rng());
            shuffled = Dictionary::new(words);
            &shuffled
        } else {
            dictionary
        };

        let engine = Engine::new(current, SearchMode::FirstSolution);
        let start = Instant::now();
        let outcome = engine.solve(grid, seed);
        let duration = start.elapsed();

        if outcome.status == SolveStatus::FirstFound {
            solved += 1;
        }

        total_duration += duration;
        min_duration = min_duration.min(duration);
        max_duration = max_duration.max(duration);
        total_nodes += outcome.nodes;
        min_nodes = min_nodes.min(outcome.nodes);
        max_nodes = max_nodes.max(outcome.nodes);

        if iteration % 10 == 0 {
            pb.set_message(format!("{:.1}ms avg", avg_millis(total_duration, iteration + 1)));
        }
        pb.inc(1);
    }

    pb.finish_and_clear();

    BenchmarkResult {
        iterations,
        solved,
        total_duration,
        min_duration: if iterations == 0 {
            Duration::ZERO
        } else {
            min_duration
        },
        max_duration,
        average_nodes: if iterations == 0 {
            0.0
        } else {
            total_nodes as f64 / iterations as f64
        },
        min_nodes: if iterations == 0 { 0 } else { min_nodes },
        max_nodes,
        solves_per_second: if total_duration.is_zero() {
            0.0
        } else {
            iterations as f64 / total_duration.as_secs_f64()
        },
    }
}

fn avg_millis(total: Duration, count: usize) -> f64 {
    total.as_secs_f64() * 1000.0 / count as f64
}
