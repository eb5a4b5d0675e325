//! Puzzle definitions and loading
//!
//! A puzzle is a grid plus an optional rubric seed. Grids load from a plain
//! text format (one row per line, whitespace-separated tokens, `0`/`.`/`#`
//! for blocked cells) and one sample puzzle ships embedded for demos and
//! tests.

use crate::core::{Grid, GridError, Rubric};
use std::fmt;

/// A grid together with its pre-revealed letters
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub grid: Grid,
    pub seed: Rubric,
}

/// Error type for puzzle file parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleParseError {
    BadToken { line: usize, token: String },
    Grid(GridError),
}

impl fmt::Display for PuzzleParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadToken { line, token } => write!(
                f,
                "Line {line}: '{token}' is not a code (1-26) or a blocked cell (0, '.', '#')"
            ),
            Self::Grid(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for PuzzleParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::BadToken { .. } => None,
        }
    }
}

impl From<GridError> for PuzzleParseError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Parse a grid from its text form
///
/// One row per line; cells are whitespace-separated. `0`, `.` and `#` all
/// mean a blocked cell; `1`-`26` are letter codes. Blank lines are skipped.
///
/// # Errors
/// Returns `PuzzleParseError` on unrecognized tokens or an invalid grid
/// shape.
///
/// # Examples
/// ```
/// use codeword_solver::puzzles::parse_grid;
///
/// let grid = parse_grid("1 2 3 4\n. . . 2\n").unwrap();
/// assert_eq!(grid.rows(), 2);
/// ```
pub fn parse_grid(text: &str) -> Result<Grid, PuzzleParseError> {
    let mut rows: Vec<Vec<u8>> = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let row = line
            .split_whitespace()
            .map(|token| match token {
                "." | "#" => Ok(0),
                _ => token.parse::<u8>().map_err(|_| PuzzleParseError::BadToken {
                    line: line_no + 1,
                    token: token.to_string(),
                }),
            })
            .collect::<Result<Vec<u8>, PuzzleParseError>>()?;
        rows.push(row);
    }

    Ok(Grid::from_numbers(&rows)?)
}

/// The bundled sample puzzle
///
/// A 7x7 grid with five slots (three across, two down) and two revealed
/// codes. It is solvable against the embedded word list.
///
/// # Panics
/// Never panics; the embedded definition is valid by construction.
#[must_use]
pub fn sample() -> Puzzle {
    let grid = Grid::from_numbers(&[
        vec![1, 2, 3, 3, 4, 5, 6],
        vec![6, 0, 0, 0, 0, 0, 2],
        vec![13, 0, 0, 0, 0, 0, 11],
        vec![6, 3, 7, 2, 8, 9, 1],
        vec![8, 0, 0, 0, 0, 0, 4],
        vec![14, 0, 0, 0, 0, 0, 6],
        vec![10, 3, 11, 4, 12, 6, 11],
    ])
    .expect("sample grid is rectangular with codes in range");

    let seed = Rubric::from_pairs([(1, 'l'), (11, 'r')]).expect("sample seed is consistent");

    Puzzle { grid, seed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, Code};

    #[test]
    fn parse_grid_accepts_all_blocked_tokens() {
        let grid = parse_grid("1 0 2\n. 3 #\n").unwrap();

        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert!(grid.get(0, 1).is_blocked());
        assert!(grid.get(1, 0).is_blocked());
        assert!(grid.get(1, 2).is_blocked());
        assert_eq!(grid.get(1, 1), Cell::Code(Code::new(3).unwrap()));
    }

    #[test]
    fn parse_grid_skips_blank_lines() {
        let grid = parse_grid("\n1 2 3 4\n\n5 6 7 8\n\n").unwrap();
        assert_eq!(grid.rows(), 2);
    }

    #[test]
    fn parse_grid_rejects_bad_tokens() {
        let err = parse_grid("1 2\nx 3\n").unwrap_err();
        assert_eq!(
            err,
            PuzzleParseError::BadToken {
                line: 2,
                token: "x".to_string()
            }
        );
    }

    #[test]
    fn parse_grid_rejects_out_of_range_codes() {
        let err = parse_grid("1 27\n").unwrap_err();
        assert!(matches!(
            err,
            PuzzleParseError::Grid(GridError::CodeOutOfRange { value: 27, .. })
        ));
    }

    #[test]
    fn parse_grid_rejects_ragged_rows() {
        let err = parse_grid("1 2 3\n4 5\n").unwrap_err();
        assert!(matches!(
            err,
            PuzzleParseError::Grid(GridError::NotRectangular { .. })
        ));
    }

    #[test]
    fn sample_puzzle_shape() {
        let puzzle = sample();

        assert_eq!(puzzle.grid.rows(), 7);
        assert_eq!(puzzle.grid.cols(), 7);
        assert_eq!(puzzle.seed.assigned_count(), 2);
    }

    #[test]
    fn sample_puzzle_has_five_slots() {
        use crate::core::Direction;
        use crate::solver::extract_slots;

        let puzzle = sample();
        let slots = extract_slots(&puzzle.grid);

        assert_eq!(slots.len(), 5);
        assert_eq!(
            slots
                .iter()
                .filter(|s| s.direction == Direction::Across)
                .count(),
            3
        );
        assert_eq!(
            slots
                .iter()
                .filter(|s| s.direction == Direction::Down)
                .count(),
            2
        );
        assert!(slots.iter().all(|s| s.len() == 7));
    }
}
