//! # azul-engine
//!
//! Rules engine, scoring engine and AI players for the tile-drafting board
//! game Azul.
//!
//! ## Design Principles
//!
//! 1. **One owner**: a single [`GameState`] holds the whole game. It changes
//!    only through [`GameState::apply_move`], which validates first and
//!    mutates second, so a rejected move never leaves a trace.
//!
//! 2. **Exact move sets**: [`legal_moves`] lists every legal move and
//!    nothing else. Renderers and AI players both work from it.
//!
//! 3. **Deterministic**: all randomness flows through seeded [`GameRng`]
//!    streams. The same seed and the same moves give the same game.
//!
//! ## Modules
//!
//! - `core`: tiles, players, moves, RNG, configuration, errors
//! - `zones`: bag and discard, factory displays, the center
//! - `board`: pattern lines, floor, wall, player board
//! - `scoring`: placement points, floor penalties, end-game bonuses
//! - `rules`: legal move enumeration, validation, winner
//! - `game`: state, round cycle, seats, human selection, snapshots
//! - `ai`: random, greedy and strategic policies
//!
//! ## Example
//!
//! ```
//! use azul_engine::{GameConfig, GameState, Policy, GameRng, legal_moves};
//!
//! let mut state = GameState::new(GameConfig::new(2).with_seed(7)).unwrap();
//! let mut rng = GameRng::new(1);
//!
//! while !state.is_over() && state.history().len() < 500 {
//!     let legal = legal_moves(&state);
//!     let mv = Policy::Greedy.choose_move(&state, &legal, &mut rng).unwrap();
//!     state.apply_move(mv).unwrap();
//! }
//! assert!(state.check_conservation().is_ok());
//! ```

pub mod core;
pub mod zones;
pub mod board;
pub mod scoring;
pub mod rules;
pub mod game;
pub mod ai;

// Re-export commonly used types
pub use crate::core::{
    Tile, TileCounts,
    PlayerId, PlayerMap,
    GameRng, GameRngState,
    GameConfig,
    FactoryId, Move, MoveSource, MoveDestination, MoveRecord,
    AzulError, InvalidMove, InsufficientTiles, ConfigError, SnapshotError,
};

pub use crate::zones::{Center, Factory, TileSupply};

pub use crate::board::{Floor, FloorSlot, PatternLine, PlayerBoard, Wall};

pub use crate::scoring::{end_game_bonus, floor_penalty, placement_score, EndGameBonus};

pub use crate::rules::{legal_moves, validate_move, GameResult, MovePreview};

pub use crate::game::{
    simulate_game, GameDriver, GameState, GameSummary, Phase, RoundReport, RoundSummary,
    Seat, Selection, TurnOutcome,
};

pub use crate::ai::{Policy, StrategicWeights};
