//! Move representation: source + color + destination.
//!
//! Every Azul turn is one draft: take all tiles of one color from a factory
//! or the center, then put them on one pattern line or straight onto the
//! floor.
//!
//! ```
//! use azul_engine::core::{FactoryId, Move, MoveDestination, MoveSource, Tile};
//!
//! let mv = Move::new(
//!     MoveSource::Factory(FactoryId::new(0)),
//!     Tile::Red,
//!     MoveDestination::PatternLine(2),
//! );
//! assert_eq!(mv.to_string(), "factory 1: red -> line 3");
//! ```

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::tile::Tile;

/// Factory display index, 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FactoryId(pub u8);

impl FactoryId {
    /// Create a new factory ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for FactoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "factory {}", self.0 + 1)
    }
}

/// Where the drafted tiles come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MoveSource {
    Factory(FactoryId),
    Center,
}

impl std::fmt::Display for MoveSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveSource::Factory(id) => write!(f, "{id}"),
            MoveSource::Center => f.write_str("the center"),
        }
    }
}

/// Where the drafted tiles go.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MoveDestination {
    /// Pattern line index 0..=4 (capacity index + 1).
    PatternLine(usize),
    Floor,
}

impl std::fmt::Display for MoveDestination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveDestination::PatternLine(line) => write!(f, "line {}", line + 1),
            MoveDestination::Floor => f.write_str("floor"),
        }
    }
}

/// A complete draft.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub source: MoveSource,
    pub color: Tile,
    pub destination: MoveDestination,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(source: MoveSource, color: Tile, destination: MoveDestination) -> Self {
        Self {
            source,
            color,
            destination,
        }
    }

    /// Shorthand for a factory draft.
    #[must_use]
    pub const fn from_factory(factory: u8, color: Tile, destination: MoveDestination) -> Self {
        Self::new(MoveSource::Factory(FactoryId::new(factory)), color, destination)
    }

    /// Shorthand for a center draft.
    #[must_use]
    pub const fn from_center(color: Tile, destination: MoveDestination) -> Self {
        Self::new(MoveSource::Center, color, destination)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} -> {}", self.source, self.color, self.destination)
    }
}

/// An applied move, kept in the game's move log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Who made the move.
    pub player: PlayerId,

    /// The move.
    pub mv: Move,

    /// Round the move was made in (1-based).
    pub round: u32,

    /// Turn number within the round (0-based).
    pub turn: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(player: PlayerId, mv: Move, round: u32, turn: u32) -> Self {
        Self {
            player,
            mv,
            round,
            turn,
        }
    }
}
