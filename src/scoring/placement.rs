//! Points for a tile placed on the wall.
//!
//! A placed tile scores itself plus every other tile in its contiguous
//! horizontal run plus every other tile in its contiguous vertical run. Runs
//! are read straight off the wall each time.

use crate::board::{Wall, WALL_SIZE};

/// Length of the horizontal run through (`row`, `col`), counting the cell
/// itself whether or not it is filled yet.
#[must_use]
pub fn horizontal_run(wall: &Wall, row: usize, col: usize) -> usize {
    let left = (0..col).rev().take_while(|&c| wall.is_filled(row, c)).count();
    let right = (col + 1..WALL_SIZE)
        .take_while(|&c| wall.is_filled(row, c))
        .count();
    1 + left + right
}

/// Length of the vertical run through (`row`, `col`), counting the cell
/// itself whether or not it is filled yet.
#[must_use]
pub fn vertical_run(wall: &Wall, row: usize, col: usize) -> usize {
    let up = (0..row).rev().take_while(|&r| wall.is_filled(r, col)).count();
    let down = (row + 1..WALL_SIZE)
        .take_while(|&r| wall.is_filled(r, col))
        .count();
    1 + up + down
}

/// Score for the tile at (`row`, `col`).
///
/// Works the same whether the tile is already on the wall or about to be
/// placed, so the AI can score hypothetical placements.
///
/// ```
/// use azul_engine::board::{wall_color, Wall};
/// use azul_engine::scoring::placement_score;
///
/// let mut wall = Wall::new();
/// assert_eq!(placement_score(&wall, 1, 1), 1);
///
/// wall.place(1, wall_color(1, 0)).unwrap(); // left neighbour
/// wall.place(0, wall_color(0, 1)).unwrap(); // top neighbour
/// assert_eq!(placement_score(&wall, 1, 1), 3);
/// ```
#[must_use]
pub fn placement_score(wall: &Wall, row: usize, col: usize) -> u32 {
    let horizontal = horizontal_run(wall, row, col);
    let vertical = vertical_run(wall, row, col);
    (horizontal + vertical - 1) as u32
}
