//! Scoring engine.
//!
//! - Wall placement: the tile plus the other tiles in its horizontal and
//!   vertical runs.
//! - Floor: a fixed, cumulative penalty per occupied slot. Scores stop at 0.
//! - Game end: bonuses for complete rows, columns and colors.

pub mod bonus;
pub mod floor;
pub mod placement;

pub use bonus::{end_game_bonus, EndGameBonus, COLOR_BONUS, COLUMN_BONUS, ROW_BONUS};
pub use floor::{floor_penalty, floor_penalty_delta, FLOOR_PENALTIES};
pub use placement::{horizontal_run, placement_score, vertical_run};
