//! Game configuration.
//!
//! A `GameConfig` fixes everything about a game before the first tile is
//! drawn: table size, player names, factory count, bag contents and the
//! seed for the bag RNG. Build one with the `with_*` methods and check it
//! with [`GameConfig::validate`]; `GameState::new` validates again.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::player::{MAX_PLAYERS, MIN_PLAYERS};
use super::tile::TILES_PER_COLOR;

/// Tiles placed on each factory at round setup.
pub const FACTORY_CAPACITY: usize = 4;

/// Default factory count for a table: 5, 6 or 7.
///
/// Tables that want the boxed-game count of `2n + 1` set it with
/// [`GameConfig::with_factory_count`].
#[must_use]
pub const fn default_factory_count(player_count: usize) -> usize {
    player_count + 3
}

/// Game configuration.
///
/// ```
/// use azul_engine::core::GameConfig;
///
/// let config = GameConfig::new(3).with_seed(7);
/// assert_eq!(config.factory_count(), 6);
/// assert!(config.validate().is_ok());
///
/// assert!(GameConfig::new(5).validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players (2-4).
    pub player_count: usize,

    /// Display names, one per seat.
    pub player_names: Vec<String>,

    /// Factory count override. `None` uses players + 3.
    pub factory_count: Option<usize>,

    /// Tiles of each color in the bag at game start.
    pub tiles_per_color: u8,

    /// Seed for the bag RNG.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(2)
    }
}

impl GameConfig {
    /// Standard configuration for `player_count` players.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            player_names: (1..=player_count).map(|i| format!("Player {i}")).collect(),
            factory_count: None,
            tiles_per_color: TILES_PER_COLOR,
            seed: 42,
        }
    }

    /// Set the bag seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set player names.
    #[must_use]
    pub fn with_player_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.player_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Override the number of factory displays.
    #[must_use]
    pub fn with_factory_count(mut self, count: usize) -> Self {
        self.factory_count = Some(count);
        self
    }

    /// Set the number of tiles of each color in the bag.
    #[must_use]
    pub fn with_tiles_per_color(mut self, count: u8) -> Self {
        self.tiles_per_color = count;
        self
    }

    /// Number of factory displays in play.
    #[must_use]
    pub fn factory_count(&self) -> usize {
        self.factory_count
            .unwrap_or_else(|| default_factory_count(self.player_count))
    }

    /// Check the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(ConfigError::PlayerCount {
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
                got: self.player_count,
            });
        }
        if self.player_names.len() != self.player_count {
            return Err(ConfigError::PlayerNames {
                expected: self.player_count,
                got: self.player_names.len(),
            });
        }
        let factories = self.factory_count();
        if factories == 0 || factories > u8::MAX as usize {
            return Err(ConfigError::FactoryCount(factories));
        }
        if self.tiles_per_color == 0 {
            return Err(ConfigError::TilesPerColor);
        }
        Ok(())
    }
}
