//! Tile colors and per-color tile counts.
//!
//! ## Tile
//!
//! A tile is nothing more than its color. The five colors have a fixed order
//! which is also the order used for enumeration, wall layout and
//! serialization.
//!
//! ## TileCounts
//!
//! The multiset representation shared by the bag, the discard, factories, the
//! center and the removed-tiles ledger. Factories and the center are
//! unordered, so a count per color is all the state they need.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of tile colors in play.
pub const TILE_COLORS: usize = 5;

/// Tiles of each color in a fresh bag.
pub const TILES_PER_COLOR: u8 = 20;

/// A tile color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tile {
    Blue,
    Yellow,
    Red,
    Black,
    Turquoise,
}

impl Tile {
    /// All colors in enumeration order.
    pub const ALL: [Tile; TILE_COLORS] = [
        Tile::Blue,
        Tile::Yellow,
        Tile::Red,
        Tile::Black,
        Tile::Turquoise,
    ];

    /// Position of this color in [`Tile::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Color at the given position, if any.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Tile> {
        Tile::ALL.get(index).copied()
    }

    /// One-letter label used by text renderers.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Tile::Blue => 'B',
            Tile::Yellow => 'Y',
            Tile::Red => 'R',
            Tile::Black => 'K',
            Tile::Turquoise => 'T',
        }
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Tile::Blue => "blue",
            Tile::Yellow => "yellow",
            Tile::Red => "red",
            Tile::Black => "black",
            Tile::Turquoise => "turquoise",
        };
        f.write_str(name)
    }
}

/// Per-color tile counts.
///
/// ```
/// use azul_engine::core::{Tile, TileCounts};
///
/// let mut counts = TileCounts::from_tiles(&[Tile::Red, Tile::Red, Tile::Blue]);
/// assert_eq!(counts[Tile::Red], 2);
/// assert_eq!(counts.total(), 3);
///
/// assert_eq!(counts.take_all(Tile::Red), 2);
/// assert_eq!(counts.colors().collect::<Vec<_>>(), vec![Tile::Blue]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCounts([u8; TILE_COLORS]);

impl TileCounts {
    /// No tiles.
    #[must_use]
    pub const fn empty() -> Self {
        Self([0; TILE_COLORS])
    }

    /// The same count for every color.
    #[must_use]
    pub const fn uniform(count: u8) -> Self {
        Self([count; TILE_COLORS])
    }

    /// Count the given tiles.
    #[must_use]
    pub fn from_tiles(tiles: &[Tile]) -> Self {
        let mut counts = Self::empty();
        for &tile in tiles {
            counts.add(tile, 1);
        }
        counts
    }

    /// Total number of tiles.
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().map(|&c| c as usize).sum()
    }

    /// True if no tiles are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }

    /// True if at least one tile of `tile` is held.
    #[must_use]
    pub fn contains(&self, tile: Tile) -> bool {
        self.0[tile.index()] > 0
    }

    /// Add `count` tiles of one color.
    pub fn add(&mut self, tile: Tile, count: u8) {
        let slot = &mut self.0[tile.index()];
        *slot = slot.saturating_add(count);
    }

    /// Add every tile held by `other`.
    pub fn add_all(&mut self, other: &TileCounts) {
        for tile in Tile::ALL {
            self.add(tile, other[tile]);
        }
    }

    /// Remove one tile. Returns false (and changes nothing) if none is held.
    pub fn remove_one(&mut self, tile: Tile) -> bool {
        let slot = &mut self.0[tile.index()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    /// Remove every tile of one color and return how many there were.
    pub fn take_all(&mut self, tile: Tile) -> u8 {
        std::mem::take(&mut self.0[tile.index()])
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.0 = [0; TILE_COLORS];
    }

    /// Colors with a non-zero count, in color order.
    pub fn colors(&self) -> impl Iterator<Item = Tile> + '_ {
        Tile::ALL.into_iter().filter(move |&t| self.contains(t))
    }

    /// (color, count) pairs for every color, including zeros.
    pub fn iter(&self) -> impl Iterator<Item = (Tile, u8)> + '_ {
        Tile::ALL.into_iter().map(move |t| (t, self.0[t.index()]))
    }

    /// Expand into individual tiles, in color order.
    #[must_use]
    pub fn to_tiles(&self) -> Vec<Tile> {
        self.iter()
            .flat_map(|(tile, count)| std::iter::repeat(tile).take(count as usize))
            .collect()
    }
}

impl Index<Tile> for TileCounts {
    type Output = u8;

    fn index(&self, tile: Tile) -> &Self::Output {
        &self.0[tile.index()]
    }
}

impl IndexMut<Tile> for TileCounts {
    fn index_mut(&mut self, tile: Tile) -> &mut Self::Output {
        &mut self.0[tile.index()]
    }
}

impl FromIterator<Tile> for TileCounts {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        let mut counts = Self::empty();
        for tile in iter {
            counts.add(tile, 1);
        }
        counts
    }
}
