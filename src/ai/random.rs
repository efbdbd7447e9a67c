//! Uniform random play.

use crate::core::{GameRng, Move};

/// Pick any legal move with equal probability.
pub fn choose(legal: &[Move], rng: &mut GameRng) -> Option<Move> {
    rng.choose(legal).copied()
}
