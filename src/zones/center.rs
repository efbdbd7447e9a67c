//! The center of the table.
//!
//! Receives factory leftovers and holds the first-player marker until the
//! first player drafts from it.

use serde::{Deserialize, Serialize};

use crate::core::{Tile, TileCounts};

/// Result of drafting from the center.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CenterTake {
    /// Tiles of the requested color.
    pub taken: u8,
    /// True if this draft also claimed the first-player marker.
    pub took_marker: bool,
}

/// Center pool plus first-player marker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Center {
    tiles: TileCounts,
    has_marker: bool,
}

impl Default for Center {
    fn default() -> Self {
        Self::new()
    }
}

impl Center {
    /// Empty center with the marker available.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tiles: TileCounts::empty(),
            has_marker: true,
        }
    }

    /// Tiles currently in the center (marker excluded).
    #[must_use]
    pub fn tiles(&self) -> &TileCounts {
        &self.tiles
    }

    /// True while no one has drafted from the center this round.
    #[must_use]
    pub fn has_marker(&self) -> bool {
        self.has_marker
    }

    /// True if no tiles are left. The marker alone does not count.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn contains(&self, color: Tile) -> bool {
        self.tiles.contains(color)
    }

    /// Add factory leftovers.
    pub fn add(&mut self, tiles: &TileCounts) {
        self.tiles.add_all(tiles);
    }

    /// Clear all tiles and put the marker back, ready for a new round.
    /// Returns the tiles that were still here.
    pub fn reset(&mut self) -> TileCounts {
        self.has_marker = true;
        std::mem::take(&mut self.tiles)
    }

    /// Take every tile of `color`, plus the marker if it is still here.
    ///
    /// Returns `None` and leaves the center untouched if `color` is absent.
    pub fn take(&mut self, color: Tile) -> Option<CenterTake> {
        if !self.contains(color) {
            return None;
        }
        let took_marker = std::mem::take(&mut self.has_marker);
        Some(CenterTake {
            taken: self.tiles.take_all(color),
            took_marker,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_draft_claims_marker() {
        let mut center = Center::new();
        center.add(&TileCounts::from_tiles(&[Tile::Blue, Tile::Yellow, Tile::Blue]));

        let first = center.take(Tile::Blue).unwrap();
        assert_eq!(first, CenterTake { taken: 2, took_marker: true });
        assert!(!center.has_marker());

        let second = center.take(Tile::Yellow).unwrap();
        assert_eq!(second, CenterTake { taken: 1, took_marker: false });
        assert!(center.is_empty());
    }

    #[test]
    fn test_absent_color_keeps_marker() {
        let mut center = Center::new();
        center.add(&TileCounts::from_tiles(&[Tile::Red]));

        assert!(center.take(Tile::Black).is_none());
        assert!(center.has_marker());
        assert_eq!(center.tiles().total(), 1);
    }

    #[test]
    fn test_marker_alone_is_empty() {
        let center = Center::new();
        assert!(center.has_marker());
        assert!(center.is_empty());
    }

    #[test]
    fn test_reset() {
        let mut center = Center::new();
        center.add(&TileCounts::from_tiles(&[Tile::Red, Tile::Turquoise]));
        let _ = center.take(Tile::Red);

        let left = center.reset();
        assert_eq!(left, TileCounts::from_tiles(&[Tile::Turquoise]));
        assert!(center.has_marker());
        assert!(center.is_empty());
    }
}
