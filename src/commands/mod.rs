//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod solve;

pub use analyze::{AnalysisResult, SlotAnalysis, analyze_puzzle};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use solve::{SolveConfig, SolveReport, solve_puzzle};
