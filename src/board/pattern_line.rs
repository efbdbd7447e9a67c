//! Pattern lines: single-color staging rows in front of the wall.

use serde::{Deserialize, Serialize};

use crate::core::{InvalidMove, Tile};

/// One pattern line. Line `i` holds up to `i + 1` tiles of one color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatternLine {
    color: Option<Tile>,
    count: u8,
}

impl PatternLine {
    /// Line contents: `None` when empty.
    #[must_use]
    pub fn color(&self) -> Option<Tile> {
        self.color
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count as usize
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// True if the line at `index` holds `index + 1` tiles.
    #[must_use]
    pub fn is_full(&self, index: usize) -> bool {
        self.count() == capacity(index)
    }

    /// Free spaces on the line at `index`.
    #[must_use]
    pub fn space(&self, index: usize) -> usize {
        capacity(index).saturating_sub(self.count())
    }

    /// Check that `color` can be added to the line at `index`.
    pub fn accepts(&self, index: usize, color: Tile) -> Result<(), InvalidMove> {
        if let Some(held) = self.color {
            if held != color {
                return Err(InvalidMove::LineHoldsOtherColor {
                    line: index,
                    held,
                    color,
                });
            }
        }
        if self.is_full(index) {
            return Err(InvalidMove::LineFull(index));
        }
        Ok(())
    }

    /// Add up to the free space; returns the overflow count.
    ///
    /// Callers check [`PatternLine::accepts`] first.
    pub fn fill(&mut self, index: usize, color: Tile, count: usize) -> usize {
        debug_assert!(self.accepts(index, color).is_ok());
        let placed = count.min(self.space(index));
        if placed > 0 {
            self.color = Some(color);
            self.count += placed as u8;
        }
        count - placed
    }

    /// Empty the line, returning what it held.
    pub fn clear(&mut self) -> Option<(Tile, usize)> {
        let held = self.color.map(|c| (c, self.count()));
        *self = Self::default();
        held
    }
}

/// Capacity of the pattern line at `index`.
#[must_use]
pub const fn capacity(index: usize) -> usize {
    index + 1
}
