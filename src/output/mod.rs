//! Terminal output formatting

mod display;
pub mod formatters;

pub use display::{print_analysis, print_benchmark_result, print_puzzle, print_solve_report};
