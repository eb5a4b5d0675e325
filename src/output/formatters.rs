//! Formatting utilities for terminal output
//!
//! Plain-string renderers; color is applied by the display layer so these
//! stay directly testable.

use crate::core::{Cell, Code, Grid, Rubric};

/// Render a grid as box-drawn text lines
///
/// Each cell spans two text rows: its code on top and, below, the letter the
/// rubric currently assigns (blank while unknown). Blocked cells show `XX`.
#[must_use]
pub fn grid_lines(grid: &Grid, rubric: &Rubric) -> Vec<String> {
    let border = format!("{}+", "+--".repeat(grid.cols()));
    let mut lines = Vec::with_capacity(grid.rows() * 3 + 1);

    for row in 0..grid.rows() {
        lines.push(border.clone());

        let mut codes = String::from("|");
        let mut letters = String::from("|");
        for col in 0..grid.cols() {
            match grid.get(row, col) {
                Cell::Blocked => {
                    codes.push_str("XX|");
                    letters.push_str("XX|");
                }
                Cell::Code(code) => {
                    codes.push_str(&format!("{:2}|", code.value()));
                    match rubric.get(code) {
                        Some(letter) => {
                            letters.push(letter.to_ascii_uppercase() as char);
                            letters.push_str(" |");
                        }
                        None => letters.push_str("  |"),
                    }
                }
            }
        }
        lines.push(codes);
        lines.push(letters);
    }

    lines.push(border);
    lines
}

/// Render the code-to-letter table as two rows of thirteen codes
///
/// Unassigned codes show a dot.
#[must_use]
pub fn rubric_lines(rubric: &Rubric) -> Vec<String> {
    let entry = |value: u8| {
        let code = Code::new(value).expect("1-26 is a valid code");
        match rubric.get(code) {
            Some(letter) => format!("{value:2}={}", letter.to_ascii_uppercase() as char),
            None => format!("{value:2}=."),
        }
    };

    vec![
        (1..=13).map(entry).collect::<Vec<_>>().join(" "),
        (14..=26).map(entry).collect::<Vec<_>>().join(" "),
    ]
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_lines_render_codes_and_letters() {
        let grid = Grid::from_numbers(&[vec![1, 0], vec![26, 2]]).unwrap();
        let rubric = Rubric::from_pairs([(1, 's')]).unwrap();

        let lines = grid_lines(&grid, &rubric);

        assert_eq!(
            lines,
            vec![
                "+--+--+",
                "| 1|XX|",
                "|S |XX|",
                "+--+--+",
                "|26| 2|",
                "|  |  |",
                "+--+--+",
            ]
        );
    }

    #[test]
    fn rubric_lines_show_assignments_and_gaps() {
        let rubric = Rubric::from_pairs([(1, 'l'), (14, 'd'), (26, 'z')]).unwrap();

        let lines = rubric_lines(&rubric);

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(" 1=L  2=."));
        assert!(lines[1].starts_with("14=D 15=."));
        assert!(lines[1].ends_with("26=Z"));
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
