//! A player's board: wall, five pattern lines, floor and score.

use serde::{Deserialize, Serialize};

use crate::core::{InvalidMove, MoveDestination, Tile, TileCounts};

use super::floor::Floor;
use super::pattern_line::PatternLine;
use super::wall::{Wall, WALL_SIZE};

/// Where a batch of drafted tiles ends up.
///
/// Computed before anything changes, so a rejected draft never leaves a
/// half-placed board behind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Placement {
    /// Tiles added to the pattern line.
    pub to_line: usize,
    /// Tiles added to the floor.
    pub to_floor: usize,
    /// Tiles that found no floor slot and leave play.
    pub removed: usize,
    /// True if the first-player marker got a floor slot.
    pub marker_on_floor: bool,
    /// True if the target pattern line is full afterwards.
    pub completes_line: bool,
    /// Floor slots occupied before the draft.
    pub floor_before: usize,
}

impl Placement {
    /// Floor slots occupied after the draft.
    #[must_use]
    pub fn floor_after(&self) -> usize {
        self.floor_before + self.to_floor + usize::from(self.marker_on_floor)
    }
}

/// Everything one player owns.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerBoard {
    wall: Wall,
    lines: [PatternLine; WALL_SIZE],
    floor: Floor,
    score: u32,
}

impl PlayerBoard {
    /// Empty board, score 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn wall(&self) -> &Wall {
        &self.wall
    }

    #[must_use]
    pub fn lines(&self) -> &[PatternLine; WALL_SIZE] {
        &self.lines
    }

    #[must_use]
    pub fn line(&self, index: usize) -> Option<&PatternLine> {
        self.lines.get(index)
    }

    #[must_use]
    pub fn floor(&self) -> &Floor {
        &self.floor
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Check that `color` may go onto pattern line `index`.
    ///
    /// Rejects unknown lines, lines holding another color, full lines, and
    /// lines whose wall row already has `color`.
    pub fn check_line(&self, index: usize, color: Tile) -> Result<(), InvalidMove> {
        let line = self.lines.get(index).ok_or(InvalidMove::NoSuchLine(index))?;
        line.accepts(index, color)?;
        if self.wall.has_color(index, color) {
            return Err(InvalidMove::WallCellFilled { line: index, color });
        }
        Ok(())
    }

    /// Work out where `count` tiles of `color` would go, without changing
    /// anything.
    pub fn plan(
        &self,
        destination: MoveDestination,
        color: Tile,
        count: usize,
        with_marker: bool,
    ) -> Result<Placement, InvalidMove> {
        let floor_before = self.floor.len();
        let mut floor_space = self.floor.space();

        let marker_on_floor = with_marker && floor_space > 0;
        if marker_on_floor {
            floor_space -= 1;
        }

        let (to_line, completes_line) = match destination {
            MoveDestination::PatternLine(index) => {
                self.check_line(index, color)?;
                let line = &self.lines[index];
                let to_line = count.min(line.space(index));
                (to_line, to_line == line.space(index))
            }
            MoveDestination::Floor => (0, false),
        };

        let overflow = count - to_line;
        let to_floor = overflow.min(floor_space);

        Ok(Placement {
            to_line,
            to_floor,
            removed: overflow - to_floor,
            marker_on_floor,
            completes_line,
            floor_before,
        })
    }

    /// Place drafted tiles: marker first, then the pattern line, overflow to
    /// the floor. Tiles the floor cannot hold are reported in
    /// [`Placement::removed`].
    pub fn place(
        &mut self,
        destination: MoveDestination,
        color: Tile,
        count: usize,
        with_marker: bool,
    ) -> Result<Placement, InvalidMove> {
        let placement = self.plan(destination, color, count, with_marker)?;

        if placement.marker_on_floor {
            self.floor.push_marker();
        }
        if let MoveDestination::PatternLine(index) = destination {
            self.lines[index].fill(index, color, placement.to_line);
        }
        self.floor.push_tiles(color, placement.to_floor);

        Ok(placement)
    }

    /// Add points.
    pub fn add_points(&mut self, points: u32) {
        self.score += points;
    }

    /// Subtract a penalty; the score never drops below zero.
    pub fn apply_penalty(&mut self, penalty: u32) {
        self.score = self.score.saturating_sub(penalty);
    }

    /// Move the tile of a full pattern line onto the wall.
    ///
    /// Returns the wall column and the pattern line's remaining tiles
    /// (destined for the discard), or `None` if the line is not full.
    pub fn tile_line(&mut self, index: usize) -> Result<Option<(usize, Tile, usize)>, InvalidMove> {
        let line = &self.lines[index];
        if !line.is_full(index) {
            return Ok(None);
        }
        let Some(color) = line.color() else {
            return Ok(None);
        };
        let col = self.wall.place(index, color)?;
        let held = self.lines[index].clear().map_or(0, |(_, n)| n);
        Ok(Some((col, color, held - 1)))
    }

    /// Empty the floor, returning its tiles.
    pub fn clear_floor(&mut self) -> TileCounts {
        self.floor.clear()
    }

    /// Tiles on this board: pattern lines, floor and wall.
    #[must_use]
    pub fn tile_counts(&self) -> TileCounts {
        let mut counts = self.wall.tile_counts();
        for line in &self.lines {
            if let Some(color) = line.color() {
                counts.add(color, line.count() as u8);
            }
        }
        counts.add_all(&self.floor.tile_counts());
        counts
    }

    /// Direct access for fixtures.
    #[doc(hidden)]
    pub fn wall_mut(&mut self) -> &mut Wall {
        &mut self.wall
    }

    /// Direct access for fixtures.
    #[doc(hidden)]
    pub fn set_score(&mut self, score: u32) {
        self.score = score;
    }
}
