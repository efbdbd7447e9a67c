//! Error types.
//!
//! - `InvalidMove`: a move the rules reject. Always recoverable; the game
//!   state is left untouched and the caller picks again.
//! - `InsufficientTiles`: the tile supply cannot satisfy a draw. Correct
//!   round management never triggers it, so seeing one means an engine
//!   invariant is broken.
//! - `ConfigError`: an unusable `GameConfig`.
//! - `SnapshotError`: a saved game that cannot be decoded or does not add up.

use thiserror::Error;

use super::action::{FactoryId, MoveSource};
use super::player::PlayerId;
use super::tile::Tile;

/// Rule violations detected while validating a move.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidMove {
    #[error("the game is over")]
    GameOver,

    #[error("moves can only be made while drafting")]
    NotDrafting,

    #[error("it is {expected}'s turn, not {actual}'s")]
    NotPlayersTurn { expected: PlayerId, actual: PlayerId },

    #[error("no such factory: {0}")]
    NoSuchFactory(FactoryId),

    #[error("{origin} holds no {color} tiles")]
    ColorNotAtSource { origin: MoveSource, color: Tile },

    #[error("no such pattern line: {0}")]
    NoSuchLine(usize),

    #[error("pattern line {line} already holds {held} tiles, cannot add {color}")]
    LineHoldsOtherColor { line: usize, held: Tile, color: Tile },

    #[error("pattern line {0} is already full")]
    LineFull(usize),

    #[error("wall row {line} already has a {color} tile")]
    WallCellFilled { line: usize, color: Tile },
}

/// The bag and discard together hold fewer tiles than a draw requires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("tile supply exhausted: requested {requested}, only {available} left in bag and discard")]
pub struct InsufficientTiles {
    pub requested: usize,
    pub available: usize,
}

/// Rejected game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("player count must be between {min} and {max}, got {got}")]
    PlayerCount { min: usize, max: usize, got: usize },

    #[error("expected {expected} player names, got {got}")]
    PlayerNames { expected: usize, got: usize },

    #[error("factory count must be at least 1, got {0}")]
    FactoryCount(usize),

    #[error("tiles per color must be at least 1")]
    TilesPerColor,
}

/// Failure to save or restore a game.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("json snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary snapshot: {0}")]
    Binary(#[from] bincode::Error),

    #[error("tile conservation broken for {color}: expected {expected}, found {found}")]
    Conservation { color: Tile, expected: usize, found: usize },

    #[error("snapshot is inconsistent: {0}")]
    Inconsistent(String),
}

/// Any engine error.
#[derive(Debug, Error)]
pub enum AzulError {
    #[error(transparent)]
    InvalidMove(#[from] InvalidMove),

    #[error(transparent)]
    InsufficientTiles(#[from] InsufficientTiles),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}
