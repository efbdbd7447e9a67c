//! Turn loop over seats.
//!
//! A `GameDriver` owns the game state and knows which seats are human and
//! which are AI. Humans submit moves through [`GameDriver::submit_move`];
//! AI seats are played by [`GameDriver::step_ai`] or
//! [`GameDriver::run_ai_turns`]. Everything is synchronous.
//!
//! [`simulate_game`] plays a whole AI-only game, for statistics and
//! benchmarks.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ai::Policy;
use crate::core::{
    AzulError, ConfigError, GameConfig, GameRng, InvalidMove, Move, PlayerId, PlayerMap,
};
use crate::rules::{legal_moves, GameResult};

use super::round::TurnOutcome;
use super::state::GameState;

/// Hard stop for AI-only games. Real games end in a handful of rounds; this
/// only guards against policies that never complete a row.
pub const MAX_SIMULATED_MOVES: usize = 2_000;

/// Who plays a seat.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Seat {
    Human,
    Ai(Policy),
}

impl Seat {
    #[must_use]
    pub fn is_human(&self) -> bool {
        matches!(self, Seat::Human)
    }
}

/// Game state plus seat assignments.
#[derive(Clone, Debug)]
pub struct GameDriver {
    state: GameState,
    seats: PlayerMap<Seat>,
    /// AI randomness, independent of the bag.
    policy_rng: GameRng,
}

impl GameDriver {
    /// Start a new game with one seat per player.
    pub fn new(config: GameConfig, seats: Vec<Seat>) -> Result<Self, AzulError> {
        check_seats(&config, &seats)?;
        let state = GameState::new(config)?;
        Self::resume(state, seats)
    }

    /// Continue a restored game.
    pub fn resume(state: GameState, seats: Vec<Seat>) -> Result<Self, AzulError> {
        check_seats(state.config(), &seats)?;
        let seats = PlayerMap::new(seats.len(), |p| seats[p.index()]);
        let policy_rng = state.rng().for_context("policy");
        Ok(Self {
            state,
            seats,
            policy_rng,
        })
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn seat(&self, player: PlayerId) -> Seat {
        self.seats[player]
    }

    /// Legal moves for the player to act.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.state)
    }

    /// True if the game is waiting on a human.
    #[must_use]
    pub fn awaiting_human(&self) -> bool {
        !self.state.is_over() && self.seats[self.state.current_player()].is_human()
    }

    /// Apply a human player's move.
    ///
    /// Rejected if it is not `player`'s turn; the state is untouched on any
    /// error.
    pub fn submit_move(&mut self, player: PlayerId, mv: Move) -> Result<TurnOutcome, AzulError> {
        let expected = self.state.current_player();
        if player != expected && !self.state.is_over() {
            return Err(InvalidMove::NotPlayersTurn {
                expected,
                actual: player,
            }
            .into());
        }
        self.state.apply_move(mv)
    }

    /// Play one AI turn. Returns `None` if the game is over or a human is
    /// to move.
    pub fn step_ai(&mut self) -> Result<Option<TurnOutcome>, AzulError> {
        if self.state.is_over() {
            return Ok(None);
        }
        let player = self.state.current_player();
        let Seat::Ai(policy) = self.seats[player] else {
            return Ok(None);
        };

        let legal = legal_moves(&self.state);
        let Some(mv) = policy.choose_move(&self.state, &legal, &mut self.policy_rng) else {
            return Ok(None);
        };
        debug!(player = %player, policy = %policy, mv = %mv, "ai move");

        self.state.apply_move(mv).map(Some)
    }

    /// Play AI turns until a human is to move or the game ends.
    pub fn run_ai_turns(&mut self) -> Result<Vec<TurnOutcome>, AzulError> {
        let mut outcomes = Vec::new();
        while let Some(outcome) = self.step_ai()? {
            outcomes.push(outcome);
            if outcomes.len() >= MAX_SIMULATED_MOVES {
                break;
            }
        }
        Ok(outcomes)
    }
}

fn check_seats(config: &GameConfig, seats: &[Seat]) -> Result<(), ConfigError> {
    if seats.len() != config.player_count {
        return Err(ConfigError::PlayerNames {
            expected: config.player_count,
            got: seats.len(),
        });
    }
    Ok(())
}

/// Final numbers of one simulated game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSummary {
    pub scores: PlayerMap<u32>,
    /// `None` if the move cap was hit first.
    pub result: Option<GameResult>,
    pub rounds: u32,
    pub moves: usize,
}

/// Play a full game between AI policies, one per seat.
///
/// ```
/// use azul_engine::ai::Policy;
/// use azul_engine::core::GameConfig;
/// use azul_engine::game::simulate_game;
///
/// let summary = simulate_game(GameConfig::new(2).with_seed(3), &[Policy::Greedy, Policy::Random]).unwrap();
/// assert!(summary.result.is_some());
/// ```
pub fn simulate_game(config: GameConfig, policies: &[Policy]) -> Result<GameSummary, AzulError> {
    let seats = policies.iter().map(|&p| Seat::Ai(p)).collect();
    let mut driver = GameDriver::new(config, seats)?;
    let moves = driver.run_ai_turns()?.len();

    let state = driver.into_state();
    Ok(GameSummary {
        scores: state.scores(),
        result: state.result().cloned(),
        rounds: state.round(),
        moves,
    })
}
