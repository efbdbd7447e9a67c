//! End-of-game bonuses.

use serde::{Deserialize, Serialize};

use crate::board::Wall;

/// Bonus per complete horizontal row.
pub const ROW_BONUS: u32 = 2;

/// Bonus per complete vertical column.
pub const COLUMN_BONUS: u32 = 7;

/// Bonus per color with all five tiles on the wall.
pub const COLOR_BONUS: u32 = 10;

/// Breakdown of one player's end-of-game bonus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndGameBonus {
    pub rows: usize,
    pub columns: usize,
    pub colors: usize,
}

impl EndGameBonus {
    /// Total bonus points.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.rows as u32 * ROW_BONUS + self.columns as u32 * COLUMN_BONUS + self.colors as u32 * COLOR_BONUS
    }
}

/// Count the bonuses earned by a wall.
#[must_use]
pub fn end_game_bonus(wall: &Wall) -> EndGameBonus {
    EndGameBonus {
        rows: wall.complete_rows(),
        columns: wall.complete_columns(),
        colors: wall.complete_colors(),
    }
}
