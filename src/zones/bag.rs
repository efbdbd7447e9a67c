//! The bag and the discard (the box lid).
//!
//! Both are per-color counts. Drawing picks uniformly among the tiles left
//! in the bag; when the bag runs dry mid-draw the discard is poured back in
//! and drawing carries on.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::{GameRng, InsufficientTiles, Tile, TileCounts, FACTORY_CAPACITY};

/// Tiles drawn in one go. Sized for a factory refill.
pub type Draw = SmallVec<[Tile; FACTORY_CAPACITY]>;

/// Bag plus discard.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSupply {
    bag: TileCounts,
    discard: TileCounts,
}

impl TileSupply {
    /// A full bag with `tiles_per_color` of every color and an empty discard.
    #[must_use]
    pub fn full(tiles_per_color: u8) -> Self {
        Self {
            bag: TileCounts::uniform(tiles_per_color),
            discard: TileCounts::empty(),
        }
    }

    /// Supply with explicit contents.
    #[must_use]
    pub fn from_parts(bag: TileCounts, discard: TileCounts) -> Self {
        Self { bag, discard }
    }

    /// Tiles still in the bag.
    #[must_use]
    pub fn bag(&self) -> &TileCounts {
        &self.bag
    }

    /// Tiles in the discard.
    #[must_use]
    pub fn discard_pile(&self) -> &TileCounts {
        &self.discard
    }

    /// Tiles a draw could reach: bag plus discard.
    #[must_use]
    pub fn available(&self) -> usize {
        self.bag.total() + self.discard.total()
    }

    /// Draw `n` tiles uniformly at random without replacement.
    ///
    /// Refills the bag from the discard whenever it empties. Fails without
    /// touching the supply if bag and discard together hold fewer than `n`.
    pub fn draw(&mut self, n: usize, rng: &mut GameRng) -> Result<Draw, InsufficientTiles> {
        let available = self.available();
        if available < n {
            return Err(InsufficientTiles {
                requested: n,
                available,
            });
        }

        let mut drawn = Draw::new();
        for _ in 0..n {
            if self.bag.is_empty() {
                self.refill_from_discard();
            }
            if let Some(tile) = self.draw_one(rng) {
                drawn.push(tile);
            }
        }
        Ok(drawn)
    }

    /// Put tiles in the discard.
    pub fn discard(&mut self, tile: Tile, count: u8) {
        self.discard.add(tile, count);
    }

    /// Put a batch of tiles in the discard.
    pub fn discard_all(&mut self, tiles: &TileCounts) {
        self.discard.add_all(tiles);
    }

    fn refill_from_discard(&mut self) {
        debug!(tiles = self.discard.total(), "bag empty, pouring discard back in");
        self.bag.add_all(&self.discard);
        self.discard.clear();
    }

    fn draw_one(&mut self, rng: &mut GameRng) -> Option<Tile> {
        let total = self.bag.total();
        if total == 0 {
            return None;
        }

        let mut pick = rng.gen_range_usize(0..total);
        let tile = Tile::ALL.into_iter().find(|&tile| {
            let count = self.bag[tile] as usize;
            if pick < count {
                return true;
            }
            pick -= count;
            false
        })?;
        self.bag.remove_one(tile);
        Some(tile)
    }
}
