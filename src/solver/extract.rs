//! Slot extraction
//!
//! Scans the grid in both orientations and collects every run of consecutive
//! coded cells long enough to be a word slot. A run closes at a blocked cell
//! or at the edge of the grid; runs shorter than [`MIN_SLOT_LEN`] are
//! discarded.

use crate::core::{Code, Direction, Grid, MIN_SLOT_LEN, Slot};

/// Extract all word slots from a grid: across slots first (row-major), then
/// down slots (column-major)
///
/// A single pass per orientation suffices; extraction is deterministic, so
/// re-running it on the same grid yields the same slots in the same order.
#[must_use]
pub fn extract_slots(grid: &Grid) -> Vec<Slot> {
    let mut slots = Vec::new();

    for row in 0..grid.rows() {
        let cells = (0..grid.cols()).map(|col| grid.get(row, col).code());
        collect_runs(cells, &mut slots, |start| {
            (row, start, Direction::Across)
        });
    }

    for col in 0..grid.cols() {
        let cells = (0..grid.rows()).map(|row| grid.get(row, col).code());
        collect_runs(cells, &mut slots, |start| (start, col, Direction::Down));
    }

    slots
}

/// Walk one line of cells, emitting a slot for every run of coded cells that
/// reaches the minimum length
///
/// `locate` maps the run's starting offset within the line to its grid
/// position and direction.
fn collect_runs(
    cells: impl Iterator<Item = Option<Code>>,
    slots: &mut Vec<Slot>,
    locate: impl Fn(usize) -> (usize, usize, Direction),
) {
    let mut run: Vec<Code> = Vec::new();
    let mut run_start = 0;

    for (offset, cell) in cells.enumerate() {
        match cell {
            Some(code) => {
                if run.is_empty() {
                    run_start = offset;
                }
                run.push(code);
            }
            None => close_run(&mut run, run_start, slots, &locate),
        }
    }

    // The line boundary terminates a run just like a blocked cell does
    close_run(&mut run, run_start, slots, &locate);
}

fn close_run(
    run: &mut Vec<Code>,
    run_start: usize,
    slots: &mut Vec<Slot>,
    locate: &impl Fn(usize) -> (usize, usize, Direction),
) {
    if run.len() >= MIN_SLOT_LEN {
        let (row, col, direction) = locate(run_start);
        slots.push(Slot::new(row, col, direction, std::mem::take(run)));
    } else {
        run.clear();
    }
}
