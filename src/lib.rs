//! Codeword Solver
//!
//! Solves "codeword" puzzles: a grid of cells coded 1-26 where each code hides
//! one letter of the alphabet (a strict bijection) and every run of four or
//! more coded cells, read across or down, must be a dictionary word.
//!
//! # Quick Start
//!
//! ```rust
//! use codeword_solver::core::{Grid, Rubric};
//! use codeword_solver::dictionary::{Dictionary, loader::words_from_slice};
//! use codeword_solver::solver::{Engine, SearchMode};
//!
//! let grid = Grid::from_numbers(&[vec![1, 2, 3, 1]]).unwrap();
//! let dictionary = Dictionary::new(words_from_slice(&["aida", "noon", "zeta"]));
//!
//! let engine = Engine::new(&dictionary, SearchMode::FirstSolution);
//! let outcome = engine.solve(&grid, &Rubric::new());
//! assert_eq!(outcome.solutions.len(), 1);
//! ```

// Core domain types
pub mod core;

// Constraint-satisfaction solver
pub mod solver;

// Word lists
pub mod dictionary;

// Puzzle definitions and loading
pub mod puzzles;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
