//! Factory displays.

use serde::{Deserialize, Serialize};

use crate::core::{Tile, TileCounts, FACTORY_CAPACITY};

/// One factory display: up to four tiles, unordered.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factory {
    tiles: TileCounts,
}

impl Factory {
    /// Empty factory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory holding exactly `tiles`.
    ///
    /// Panics if given more than [`FACTORY_CAPACITY`] tiles.
    #[must_use]
    pub fn with_tiles(tiles: &[Tile]) -> Self {
        assert!(
            tiles.len() <= FACTORY_CAPACITY,
            "A factory holds at most {FACTORY_CAPACITY} tiles"
        );
        Self {
            tiles: TileCounts::from_tiles(tiles),
        }
    }

    /// Current contents.
    #[must_use]
    pub fn tiles(&self) -> &TileCounts {
        &self.tiles
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.total()
    }

    /// True if the factory holds at least one tile of `color`.
    #[must_use]
    pub fn contains(&self, color: Tile) -> bool {
        self.tiles.contains(color)
    }

    /// Replace the contents with freshly drawn tiles.
    pub fn fill(&mut self, tiles: &[Tile]) {
        debug_assert!(tiles.len() <= FACTORY_CAPACITY);
        self.tiles = TileCounts::from_tiles(tiles);
    }

    /// Empty the factory and return what it held.
    pub fn clear(&mut self) -> TileCounts {
        std::mem::take(&mut self.tiles)
    }

    /// Take every tile of `color`; the rest are returned as leftovers for the
    /// center. The factory is empty afterwards.
    ///
    /// Returns `None` and leaves the factory untouched if `color` is absent.
    pub fn take(&mut self, color: Tile) -> Option<(u8, TileCounts)> {
        if !self.contains(color) {
            return None;
        }
        let mut leftovers = self.clear();
        let taken = leftovers.take_all(color);
        Some((taken, leftovers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_moves_leftovers_out() {
        let mut factory = Factory::with_tiles(&[Tile::Red, Tile::Red, Tile::Blue, Tile::Yellow]);

        let (taken, leftovers) = factory.take(Tile::Red).unwrap();

        assert_eq!(taken, 2);
        assert!(factory.is_empty());
        assert_eq!(leftovers, TileCounts::from_tiles(&[Tile::Blue, Tile::Yellow]));
    }

    #[test]
    fn test_take_absent_color() {
        let mut factory = Factory::with_tiles(&[Tile::Red, Tile::Blue]);
        assert!(factory.take(Tile::Black).is_none());
        assert_eq!(factory.len(), 2);
    }

    #[test]
    fn test_fill_replaces_contents() {
        let mut factory = Factory::with_tiles(&[Tile::Red]);
        factory.fill(&[Tile::Black, Tile::Black, Tile::Turquoise]);
        assert_eq!(factory.len(), 3);
        assert!(!factory.contains(Tile::Red));
    }

    #[test]
    #[should_panic(expected = "at most 4 tiles")]
    fn test_capacity_enforced() {
        let _ = Factory::with_tiles(&[Tile::Red; 5]);
    }
}
