//! Per-player board entities: pattern lines, floor, wall.

pub mod floor;
pub mod pattern_line;
pub mod player_board;
pub mod wall;

pub use floor::{Floor, FloorSlot, FLOOR_CAPACITY};
pub use pattern_line::{capacity, PatternLine};
pub use player_board::{Placement, PlayerBoard};
pub use wall::{wall_color, wall_column, Wall, WALL_SIZE};
