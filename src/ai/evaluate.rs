//! Immediate effect of a move on the acting player's board.

use crate::board::{capacity, wall_column, PlayerBoard};
use crate::core::{Move, MoveDestination};
use crate::rules::MovePreview;
use crate::scoring::{floor_penalty_delta, placement_score};

/// What a move does to the mover's board this turn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveEffect {
    /// Target pattern line, if any.
    pub line: Option<usize>,
    /// Wall column the target line feeds.
    pub col: Option<usize>,
    /// Points the completed line will score when tiled. Zero if the line
    /// stays incomplete.
    pub wall_points: u32,
    /// Extra floor penalty caused by this move.
    pub floor_penalty: u32,
    /// Tiles that go to the floor or leave play.
    pub wasted: usize,
    /// Tiles added to the target line.
    pub to_line: usize,
    /// Fill level of the target line afterwards, 0.0 to 1.0.
    pub fill: f64,
    pub completes_line: bool,
    pub took_marker: bool,
}

impl MoveEffect {
    /// Measure a move from its preview.
    #[must_use]
    pub fn measure(board: &PlayerBoard, mv: &Move, preview: &MovePreview) -> Self {
        let placement = &preview.placement;
        let line = match mv.destination {
            MoveDestination::PatternLine(index) => Some(index),
            MoveDestination::Floor => None,
        };
        let col = line.map(|row| wall_column(row, mv.color));

        let wall_points = match (line, col) {
            (Some(row), Some(col)) if placement.completes_line => {
                placement_score(board.wall(), row, col)
            }
            _ => 0,
        };

        let fill = line.map_or(0.0, |row| {
            let held = board.line(row).map_or(0, |l| l.count());
            (held + placement.to_line) as f64 / capacity(row) as f64
        });

        Self {
            line,
            col,
            wall_points,
            floor_penalty: floor_penalty_delta(placement.floor_before, placement.floor_after()),
            wasted: placement.to_floor + placement.removed,
            to_line: placement.to_line,
            fill,
            completes_line: placement.completes_line,
            took_marker: preview.took_marker,
        }
    }

    /// Wall points minus floor penalty.
    #[must_use]
    pub fn immediate_delta(&self) -> i64 {
        i64::from(self.wall_points) - i64::from(self.floor_penalty)
    }
}
