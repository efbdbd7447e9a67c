//! Rules: which moves are legal and who won.
//!
//! Everything here reads a [`GameState`](crate::game::GameState) and never
//! changes it. Move application lives in [`game`](crate::game).

pub mod engine;
pub mod moves;

pub use engine::{decide_result, GameResult};
pub use moves::{has_legal_moves, legal_moves, validate_move, MovePreview};
