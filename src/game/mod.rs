//! Game flow: state, rounds, seats and persistence.

pub mod driver;
pub mod round;
pub mod selection;
pub mod snapshot;
pub mod state;

pub use driver::{simulate_game, GameDriver, GameSummary, Seat, MAX_SIMULATED_MOVES};
pub use round::{RoundReport, RoundSummary, TurnOutcome, WallPlacement};
pub use selection::{selectable, Selection};
pub use state::{GameState, Phase};
