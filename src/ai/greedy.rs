//! Greedy play: best immediate score change.

use crate::core::Move;
use crate::game::GameState;

use super::evaluate::MoveEffect;
use super::best_move;

/// Greedy value of a move: wall points it locks in minus the floor penalty
/// it adds.
#[must_use]
pub fn value(effect: &MoveEffect) -> f64 {
    effect.immediate_delta() as f64
}

/// Pick the move with the best immediate delta. Ties go to the move listed
/// first.
pub fn choose(state: &GameState, legal: &[Move]) -> Option<Move> {
    best_move(state, legal, |_, effect| value(effect))
}
