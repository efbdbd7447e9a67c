//! The floor line: seven penalty slots for tiles that could not be placed.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Tile, TileCounts};

/// Penalty slots on a floor line.
pub const FLOOR_CAPACITY: usize = 7;

/// What occupies a floor slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FloorSlot {
    Tile(Tile),
    FirstPlayerMarker,
}

/// A player's floor line.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Floor {
    slots: SmallVec<[FloorSlot; FLOOR_CAPACITY]>,
}

impl Floor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Occupied slots, left to right.
    #[must_use]
    pub fn slots(&self) -> &[FloorSlot] {
        &self.slots
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Free slots.
    #[must_use]
    pub fn space(&self) -> usize {
        FLOOR_CAPACITY - self.slots.len()
    }

    #[must_use]
    pub fn has_marker(&self) -> bool {
        self.slots.contains(&FloorSlot::FirstPlayerMarker)
    }

    /// Append `count` tiles; returns how many did not fit.
    pub fn push_tiles(&mut self, color: Tile, count: usize) -> usize {
        let placed = count.min(self.space());
        self.slots
            .extend(std::iter::repeat(FloorSlot::Tile(color)).take(placed));
        count - placed
    }

    /// Put the marker in the next free slot. Returns false if the floor is
    /// full; the marker still counts for turn order in that case.
    pub fn push_marker(&mut self) -> bool {
        if self.space() == 0 {
            return false;
        }
        self.slots.push(FloorSlot::FirstPlayerMarker);
        true
    }

    /// Tiles on the floor, marker excluded.
    #[must_use]
    pub fn tile_counts(&self) -> TileCounts {
        self.slots
            .iter()
            .filter_map(|slot| match slot {
                FloorSlot::Tile(tile) => Some(*tile),
                FloorSlot::FirstPlayerMarker => None,
            })
            .collect()
    }

    /// Empty the floor, returning its tiles (marker excluded).
    pub fn clear(&mut self) -> TileCounts {
        let tiles = self.tile_counts();
        self.slots.clear();
        tiles
    }
}
