//! The 5×5 scoring wall.
//!
//! Each cell has a fixed color: row `r` holds color `c` in column
//! `(r + c) mod 5`, so every row and every column holds each color once.
//! Cells only ever go from empty to filled.

use serde::{Deserialize, Serialize};

use crate::core::{InvalidMove, Tile, TILE_COLORS};

/// Rows, columns and pattern lines per board.
pub const WALL_SIZE: usize = 5;

/// Column where `color` sits in `row`.
#[must_use]
pub const fn wall_column(row: usize, color: Tile) -> usize {
    (row + color.index()) % WALL_SIZE
}

/// Color printed on the cell at (`row`, `col`).
#[must_use]
pub const fn wall_color(row: usize, col: usize) -> Tile {
    Tile::ALL[(col + TILE_COLORS - row % WALL_SIZE) % TILE_COLORS]
}

/// A player's wall.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Wall {
    filled: [[bool; WALL_SIZE]; WALL_SIZE],
}

impl Wall {
    /// Empty wall.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.filled[row][col]
    }

    /// True if `row` already has its `color` cell filled.
    #[must_use]
    pub fn has_color(&self, row: usize, color: Tile) -> bool {
        self.filled[row][wall_column(row, color)]
    }

    /// Fill the `color` cell of `row` and return its column.
    pub fn place(&mut self, row: usize, color: Tile) -> Result<usize, InvalidMove> {
        let col = wall_column(row, color);
        if self.filled[row][col] {
            return Err(InvalidMove::WallCellFilled { line: row, color });
        }
        self.filled[row][col] = true;
        Ok(col)
    }

    /// Filled cells in a row.
    #[must_use]
    pub fn filled_in_row(&self, row: usize) -> usize {
        self.filled[row].iter().filter(|&&f| f).count()
    }

    /// Filled cells in a column.
    #[must_use]
    pub fn filled_in_column(&self, col: usize) -> usize {
        (0..WALL_SIZE).filter(|&row| self.filled[row][col]).count()
    }

    /// Filled cells of one color across all rows.
    #[must_use]
    pub fn color_count(&self, color: Tile) -> usize {
        (0..WALL_SIZE).filter(|&row| self.has_color(row, color)).count()
    }

    #[must_use]
    pub fn is_row_complete(&self, row: usize) -> bool {
        self.filled_in_row(row) == WALL_SIZE
    }

    /// Number of complete horizontal rows.
    #[must_use]
    pub fn complete_rows(&self) -> usize {
        (0..WALL_SIZE).filter(|&row| self.is_row_complete(row)).count()
    }

    /// Number of complete vertical columns.
    #[must_use]
    pub fn complete_columns(&self) -> usize {
        (0..WALL_SIZE)
            .filter(|&col| self.filled_in_column(col) == WALL_SIZE)
            .count()
    }

    /// Number of colors with all five cells filled.
    #[must_use]
    pub fn complete_colors(&self) -> usize {
        Tile::ALL
            .iter()
            .filter(|&&color| self.color_count(color) == WALL_SIZE)
            .count()
    }

    /// Total filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        (0..WALL_SIZE).map(|row| self.filled_in_row(row)).sum()
    }

    /// Filled cells counted per color.
    #[must_use]
    pub fn tile_counts(&self) -> crate::core::TileCounts {
        let mut counts = crate::core::TileCounts::empty();
        for color in Tile::ALL {
            counts.add(color, self.color_count(color) as u8);
        }
        counts
    }

    /// Filled orthogonal neighbours of a cell.
    #[must_use]
    pub fn filled_neighbours(&self, row: usize, col: usize) -> usize {
        let mut count = 0;
        if row > 0 && self.filled[row - 1][col] {
            count += 1;
        }
        if row + 1 < WALL_SIZE && self.filled[row + 1][col] {
            count += 1;
        }
        if col > 0 && self.filled[row][col - 1] {
            count += 1;
        }
        if col + 1 < WALL_SIZE && self.filled[row][col + 1] {
            count += 1;
        }
        count
    }
}
