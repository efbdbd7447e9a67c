//! Game state.
//!
//! `GameState` owns everything: the tile supply, factories, center, player
//! boards, turn order, the removed-tiles ledger, the move log and the bag
//! RNG. Renderers read it through the accessors below; the only way to
//! change it is [`GameState::apply_move`].
//!
//! ## Tile conservation
//!
//! Every tile is always in exactly one place: bag, discard, a factory, the
//! center, a pattern line, a floor, a wall, or the removed ledger. The sum
//! per color equals `tiles_per_color` for the whole game.
//! [`GameState::check_conservation`] verifies this.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::PlayerBoard;
use crate::core::{
    AzulError, FactoryId, GameConfig, GameRng, MoveRecord, PlayerId, PlayerMap,
    SnapshotError, Tile, TileCounts,
};
use crate::rules::GameResult;
use crate::zones::{Center, Factory, TileSupply};

/// Where the game is in its round cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Factories are being filled.
    RoundSetup,
    /// Players are taking turns.
    Drafting,
    /// Lines are being tiled and floors scored.
    RoundEnd,
    /// Terminal.
    GameOver,
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub(super) config: GameConfig,

    // === Shared tiles ===
    pub(super) supply: TileSupply,
    pub(super) factories: Vec<Factory>,
    pub(super) center: Center,
    /// Tiles that overflowed a full floor.
    pub(super) removed: TileCounts,

    // === Players ===
    pub(super) boards: PlayerMap<PlayerBoard>,
    pub(super) current_player: PlayerId,
    pub(super) round_starter: PlayerId,
    /// Whoever took the first-player marker this round.
    pub(super) marker_holder: Option<PlayerId>,

    // === Progression ===
    /// Current round, starting at 1.
    pub(super) round: u32,
    /// Moves made this round.
    pub(super) turn: u32,
    pub(super) phase: Phase,
    pub(super) result: Option<GameResult>,

    /// Every applied move, oldest first.
    pub(super) history: Vector<MoveRecord>,

    pub(super) rng: GameRng,
}

impl GameState {
    /// Start a game: full bag, empty boards, first round set up with
    /// player 1 to move.
    pub fn new(config: GameConfig) -> Result<Self, AzulError> {
        config.validate()?;

        let player_count = config.player_count;
        let factory_count = config.factory_count();
        let mut state = Self {
            supply: TileSupply::full(config.tiles_per_color),
            factories: vec![Factory::new(); factory_count],
            center: Center::new(),
            removed: TileCounts::empty(),
            boards: PlayerMap::with_default(player_count),
            current_player: PlayerId::new(0),
            round_starter: PlayerId::new(0),
            marker_holder: None,
            round: 0,
            turn: 0,
            phase: Phase::RoundSetup,
            result: None,
            history: Vector::new(),
            rng: GameRng::new(config.seed),
            config,
        };

        state.begin_round(PlayerId::new(0))?;
        Ok(state)
    }

    // === Configuration ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.config.player_count
    }

    /// Display name of a seat.
    #[must_use]
    pub fn player_name(&self, player: PlayerId) -> &str {
        self.config
            .player_names
            .get(player.index())
            .map_or("", String::as_str)
    }

    // === Shared tiles ===

    /// Bag and discard.
    #[must_use]
    pub fn supply(&self) -> &TileSupply {
        &self.supply
    }

    #[must_use]
    pub fn factories(&self) -> &[Factory] {
        &self.factories
    }

    #[must_use]
    pub fn factory(&self, id: FactoryId) -> Option<&Factory> {
        self.factories.get(id.index())
    }

    #[must_use]
    pub fn center(&self) -> &Center {
        &self.center
    }

    /// Tiles removed from play by floor overflow.
    #[must_use]
    pub fn removed(&self) -> &TileCounts {
        &self.removed
    }

    // === Players ===

    #[must_use]
    pub fn boards(&self) -> &PlayerMap<PlayerBoard> {
        &self.boards
    }

    /// Board of one player.
    ///
    /// # Panics
    ///
    /// Panics if `player` is not seated in this game.
    #[must_use]
    pub fn board(&self, player: PlayerId) -> &PlayerBoard {
        &self.boards[player]
    }

    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.boards[player].score()
    }

    /// Scores in seat order.
    #[must_use]
    pub fn scores(&self) -> PlayerMap<u32> {
        self.boards.map(|_, board| board.score())
    }

    /// Player to move.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Player who opened the current round.
    #[must_use]
    pub fn round_starter(&self) -> PlayerId {
        self.round_starter
    }

    /// Player holding the first-player marker, if anyone has taken it this
    /// round.
    #[must_use]
    pub fn marker_holder(&self) -> Option<PlayerId> {
        self.marker_holder
    }

    // === Progression ===

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_drafting(&self) -> bool {
        self.phase == Phase::Drafting
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Final result once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    /// Move log, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Bag RNG.
    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    // === Conservation ===

    /// Count every tile in the game, wherever it is.
    #[must_use]
    pub fn tile_census(&self) -> TileCounts {
        let mut counts = *self.supply.bag();
        counts.add_all(self.supply.discard_pile());
        for factory in &self.factories {
            counts.add_all(factory.tiles());
        }
        counts.add_all(self.center.tiles());
        for board in self.boards.values() {
            counts.add_all(&board.tile_counts());
        }
        counts.add_all(&self.removed);
        counts
    }

    /// Check that no tile has been created or lost.
    pub fn check_conservation(&self) -> Result<(), SnapshotError> {
        let census = self.tile_census();
        let expected = self.config.tiles_per_color as usize;
        for color in Tile::ALL {
            let found = census[color] as usize;
            if found != expected {
                return Err(SnapshotError::Conservation { color, expected, found });
            }
        }
        Ok(())
    }

    // === Fixtures ===

    /// Direct access for fixtures.
    #[doc(hidden)]
    pub fn factories_mut(&mut self) -> &mut [Factory] {
        &mut self.factories
    }

    /// Direct access for fixtures.
    #[doc(hidden)]
    pub fn center_mut(&mut self) -> &mut Center {
        &mut self.center
    }

    /// Direct access for fixtures.
    #[doc(hidden)]
    pub fn board_mut(&mut self, player: PlayerId) -> &mut PlayerBoard {
        &mut self.boards[player]
    }

    /// Direct access for fixtures.
    #[doc(hidden)]
    pub fn supply_mut(&mut self) -> &mut TileSupply {
        &mut self.supply
    }
}
