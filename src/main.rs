//! Codeword Solver - CLI
//!
//! Solves codeword puzzles from the bundled sample or from grid files, with
//! analysis and benchmark modes.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use codeword_solver::{
    commands::{SolveConfig, analyze_puzzle, run_benchmark, solve_puzzle},
    core::Rubric,
    dictionary::{Dictionary, WORDS, loader},
    output::{print_analysis, print_benchmark_result, print_puzzle, print_solve_report},
    puzzles::{Puzzle, parse_grid, sample},
    solver::SearchMode,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "codeword_solver",
    about = "Codeword puzzle solver using constraint propagation and backtracking search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Rubric hint such as 22=o (repeatable); replaces the puzzle's own seed
    #[arg(short = 'H', long = "hint", global = true, value_name = "CODE=LETTER")]
    hints: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a puzzle (default - the bundled sample if no file is given)
    Solve {
        /// Grid file: one row per line, 0/./# for blocked cells
        grid_file: Option<PathBuf>,

        /// Collect every solution instead of stopping at the first
        #[arg(short, long)]
        all: bool,

        /// Abort after this many trial assignments
        #[arg(long)]
        max_nodes: Option<u64>,

        /// Show the word chosen for each slot
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show per-slot candidate counts without searching
    Analyze {
        /// Grid file (defaults to the bundled sample)
        grid_file: Option<PathBuf>,
    },

    /// Benchmark repeated solves of one puzzle
    Benchmark {
        /// Grid file (defaults to the bundled sample)
        grid_file: Option<PathBuf>,

        /// Number of iterations
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Shuffle dictionary order before each iteration
        #[arg(long)]
        shuffle: bool,
    },
}

/// Load the dictionary selected by the -w flag
fn load_dictionary(wordlist_mode: &str) -> Result<Dictionary> {
    let words = match wordlist_mode {
        "embedded" => loader::words_from_slice(WORDS),
        path => loader::load_from_file(path)
            .with_context(|| format!("Failed to read wordlist '{path}'"))?,
    };

    if words.is_empty() {
        return Err(anyhow!("Wordlist '{wordlist_mode}' contains no usable words"));
    }

    Ok(Dictionary::new(words))
}

/// Parse repeated `CODE=LETTER` hint flags into a rubric seed
fn parse_hints(hints: &[String]) -> Result<Rubric> {
    let pairs = hints
        .iter()
        .map(|hint| {
            let (code, letter) = hint
                .split_once('=')
                .ok_or_else(|| anyhow!("Hint '{hint}' must look like 22=o"))?;
            let code: u8 = code
                .trim()
                .parse()
                .map_err(|_| anyhow!("Hint '{hint}' has a non-numeric code"))?;
            let mut letters = letter.trim().chars();
            match (letters.next(), letters.next()) {
                (Some(letter), None) => Ok((code, letter.to_ascii_lowercase())),
                _ => Err(anyhow!("Hint '{hint}' must give exactly one letter")),
            }
        })
        .collect::<Result<Vec<(u8, char)>>>()?;

    Rubric::from_pairs(pairs).map_err(|e| anyhow!("Invalid rubric seed: {e}"))
}

/// Load the puzzle for a command: a grid file if given, otherwise the sample.
/// Explicit hints replace the puzzle's own seed.
fn load_puzzle(grid_file: Option<&Path>, hints: &[String]) -> Result<Puzzle> {
    let mut puzzle = match grid_file {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read grid file '{}'", path.display()))?;
            let grid = parse_grid(&text)
                .map_err(|e| anyhow!("Invalid grid file '{}': {e}", path.display()))?;
            Puzzle {
                grid,
                seed: Rubric::new(),
            }
        }
        None => sample(),
    };

    if !hints.is_empty() {
        puzzle.seed = parse_hints(hints)?;
    }

    Ok(puzzle)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist)?;

    // Default to solving the sample puzzle if no command given
    let command = cli.command.unwrap_or(Commands::Solve {
        grid_file: None,
        all: false,
        max_nodes: None,
        verbose: false,
    });

    match command {
        Commands::Solve {
            grid_file,
            all,
            max_nodes,
            verbose,
        } => {
            let puzzle = load_puzzle(grid_file.as_deref(), &cli.hints)?;
            let mode = if all {
                SearchMode::AllSolutions
            } else {
                SearchMode::FirstSolution
            };
            let mut config = SolveConfig::new(mode);
            config.max_nodes = max_nodes;

            print_puzzle(&puzzle.grid, &puzzle.seed);
            let report = solve_puzzle(&puzzle.grid, &puzzle.seed, &dictionary, &config);
            print_solve_report(&report, &puzzle.grid, verbose);
        }
        Commands::Analyze { grid_file } => {
            let puzzle = load_puzzle(grid_file.as_deref(), &cli.hints)?;

            print_puzzle(&puzzle.grid, &puzzle.seed);
            let result = analyze_puzzle(&puzzle.grid, &puzzle.seed, &dictionary);
            print_analysis(&result);
        }
        Commands::Benchmark {
            grid_file,
            count,
            shuffle,
        } => {
            let puzzle = load_puzzle(grid_file.as_deref(), &cli.hints)?;

            println!("Running benchmark: {count} iterations{}", if shuffle { " (shuffled dictionary)" } else { "" });
            let result = run_benchmark(&puzzle.grid, &puzzle.seed, &dictionary, count, shuffle);
            print_benchmark_result(&result);
        }
    }

    Ok(())
}
