//! Core value types: tiles, players, moves, RNG, configuration, errors.
//!
//! Nothing in here knows about boards or rounds; the rest of the crate is
//! built from these pieces.

pub mod tile;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use tile::{Tile, TileCounts, TILES_PER_COLOR, TILE_COLORS};
pub use player::{PlayerId, PlayerMap, MAX_PLAYERS, MIN_PLAYERS};
pub use rng::{GameRng, GameRngState};
pub use config::{default_factory_count, GameConfig, FACTORY_CAPACITY};
pub use action::{FactoryId, Move, MoveDestination, MoveRecord, MoveSource};
pub use error::{AzulError, ConfigError, InsufficientTiles, InvalidMove, SnapshotError};
