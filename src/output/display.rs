//! Display functions for command results

use super::formatters::{grid_lines, rubric_lines};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveReport};
use crate::core::{Grid, Rubric};
use crate::solver::{Solution, SolveStatus};
use colored::Colorize;

/// Print the starting position: the coded grid with any seed letters filled in
pub fn print_puzzle(grid: &Grid, seed: &Rubric) {
    for line in grid_lines(grid, seed) {
        println!("{line}");
    }
    if !seed.is_empty() {
        println!();
        for line in rubric_lines(seed) {
            println!("{line}");
        }
    }
}

/// Print the result of a solve run
pub fn print_solve_report(report: &SolveReport, grid: &Grid, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Searched {} slots against {} words in {:.3}s ({} trial assignments)",
        report.slot_count,
        report.dictionary_size,
        report.duration.as_secs_f64(),
        report.outcome.nodes
    );
    println!("{}", "─".repeat(60).cyan());

    match &report.outcome.status {
        SolveStatus::FirstFound => {
            println!("{}", "✅ Solved!".green().bold());
        }
        SolveStatus::Exhausted if report.outcome.solutions.is_empty() => {
            println!(
                "{}",
                "❌ No solution: every branch was exhausted".red().bold()
            );
        }
        SolveStatus::Exhausted => {
            println!(
                "{}",
                format!(
                    "✅ Search complete: {} solution(s)",
                    report.outcome.solutions.len()
                )
                .green()
                .bold()
            );
        }
        SolveStatus::OutOfBudget => {
            println!(
                "{}",
                format!(
                    "⏱ Node budget exhausted after {} trials ({} solution(s) so far)",
                    report.outcome.nodes,
                    report.outcome.solutions.len()
                )
                .yellow()
                .bold()
            );
        }
        SolveStatus::DeadSlot { slot } => {
            println!(
                "{}",
                format!("❌ No solution: slot {slot} has no candidate words")
                    .red()
                    .bold()
            );
        }
    }

    for (i, solution) in report.outcome.solutions.iter().enumerate() {
        println!("\n{}", format!("Solution {}", i + 1).bright_yellow().bold());
        print_solution(solution, grid, verbose);
    }
}

/// Print one solution: the filled grid, the letter table, and the words
fn print_solution(solution: &Solution, grid: &Grid, verbose: bool) {
    for line in grid_lines(grid, &solution.rubric) {
        println!("{line}");
    }

    println!();
    for line in rubric_lines(&solution.rubric) {
        println!("{line}");
    }

    if verbose {
        println!();
        for entry in &solution.entries {
            println!(
                "  {} {}",
                entry.slot.to_string().bright_black(),
                entry.word.text().to_uppercase().bright_yellow()
            );
        }
    }
}

/// Print per-slot candidate counts
pub fn print_analysis(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "PUZZLE ANALYSIS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} slots against {} words:",
        result.slots.len(),
        result.dictionary_size
    );
    for analysis in &result.slots {
        let count = if analysis.candidates == 0 {
            "0 candidates (dead)".red().bold().to_string()
        } else {
            format!("{} candidates", analysis.candidates)
        };
        println!("   {} → {}", analysis.slot, count);
    }

    println!();
    if result.is_viable() {
        println!("{}", "Puzzle is viable: every slot has candidates".green());
    } else if result.slots.is_empty() {
        println!("{}", "Nothing to solve: the grid has no slots".yellow());
    } else {
        println!(
            "{}",
            format!(
                "Unsolvable as stated: {} slot(s) have no candidates",
                result.dead_slots
            )
            .red()
            .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Iterations:       {}", result.iterations);
    println!(
        "   Solved:           {}",
        if result.solved == result.iterations {
            result.solved.to_string().green()
        } else {
            result.solved.to_string().yellow()
        }
    );
    println!(
        "   Total time:       {:.2}s",
        result.total_duration.as_secs_f64()
    );
    println!(
        "   Fastest:          {:.2}ms",
        result.min_duration.as_secs_f64() * 1000.0
    );
    println!(
        "   Slowest:          {:.2}ms",
        result.max_duration.as_secs_f64() * 1000.0
    );
    println!("   Solves/second:    {:.1}", result.solves_per_second);

    println!("\n🔍 {}", "Search size:".bright_cyan().bold());
    println!(
        "   Trial assignments: {} min / {:.1} avg / {} max",
        result.min_nodes, result.average_nodes, result.max_nodes
    );
}
