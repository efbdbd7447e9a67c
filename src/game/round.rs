//! Round state machine: setup, drafting, round end, game end.
//!
//! ```text
//! RoundSetup -> Drafting (one move per turn) -> RoundEnd -> RoundSetup
//!                                                        -> GameOver
//! ```
//!
//! Drafting ends the moment the last tile leaves the factories and center.
//! The round end then runs immediately as part of the same `apply_move`
//! call, and so does the next round's setup.

use tracing::{debug, info, warn};

use crate::board::WALL_SIZE;
use crate::core::{
    AzulError, InsufficientTiles, Move, MoveRecord, MoveSource, PlayerId, PlayerMap, Tile,
    FACTORY_CAPACITY,
};
use crate::rules::{decide_result, validate_move, GameResult, MovePreview};
use crate::scoring::{end_game_bonus, floor_penalty, placement_score, EndGameBonus};

use super::state::{GameState, Phase};

/// One tile moved from a full pattern line onto the wall.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WallPlacement {
    pub row: usize,
    pub col: usize,
    pub color: Tile,
    /// Adjacency points scored.
    pub points: u32,
}

/// What happened to one player's board at round end.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoundReport {
    /// Wall placements, top line first.
    pub placements: Vec<WallPlacement>,
    /// Points lost to the floor, before clamping at zero.
    pub floor_penalty: u32,
    /// End-game bonus, present only when this round ended the game.
    pub bonus: Option<EndGameBonus>,
    /// Score after the round.
    pub score: u32,
}

impl RoundReport {
    /// Points gained from wall placements.
    #[must_use]
    pub fn wall_points(&self) -> u32 {
        self.placements.iter().map(|p| p.points).sum()
    }
}

/// Summary of a finished round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundSummary {
    pub round: u32,
    pub reports: PlayerMap<RoundReport>,
    /// Starter of the next round, if the game goes on.
    pub next_starter: Option<PlayerId>,
}

/// Result of applying one move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    /// The applied move.
    pub record: MoveRecord,
    /// How the tiles were distributed.
    pub preview: MovePreview,
    /// Present when the move emptied the table and closed the round.
    pub round_end: Option<RoundSummary>,
    /// Present when the game ended.
    pub result: Option<GameResult>,
}

impl TurnOutcome {
    #[must_use]
    pub fn ended_round(&self) -> bool {
        self.round_end.is_some()
    }

    #[must_use]
    pub fn ended_game(&self) -> bool {
        self.result.is_some()
    }
}

impl GameState {
    /// Apply a move for the current player.
    ///
    /// The move is validated in full before anything changes; an invalid
    /// move returns an error and leaves the state as it was. If the move
    /// takes the last tile, the round end and the next round's setup (or
    /// the game end) run before this returns.
    pub fn apply_move(&mut self, mv: Move) -> Result<TurnOutcome, AzulError> {
        let preview = validate_move(self, &mv)?;
        let player = preview.player;

        self.take_tiles(player, &mv, &preview);
        let placement = self.boards[player].place(
            mv.destination,
            mv.color,
            preview.taken,
            preview.took_marker,
        )?;
        if placement.removed > 0 {
            self.removed.add(mv.color, placement.removed as u8);
        }

        let record = MoveRecord::new(player, mv, self.round, self.turn);
        self.history.push_back(record);
        self.turn += 1;

        debug!(
            player = %player,
            mv = %mv,
            taken = preview.taken,
            to_line = placement.to_line,
            to_floor = placement.to_floor,
            removed = placement.removed,
            marker = preview.took_marker,
            "move applied"
        );

        let mut outcome = TurnOutcome {
            record,
            preview,
            round_end: None,
            result: None,
        };

        if self.table_is_empty() {
            let summary = self.end_round()?;
            outcome.round_end = Some(summary);
            outcome.result = self.result.clone();
        } else {
            self.current_player = player.next(self.player_count());
        }

        Ok(outcome)
    }

    /// Remove the drafted tiles from their source.
    fn take_tiles(&mut self, player: PlayerId, mv: &Move, preview: &MovePreview) {
        match mv.source {
            MoveSource::Factory(id) => {
                if let Some((_, leftovers)) = self
                    .factories
                    .get_mut(id.index())
                    .and_then(|factory| factory.take(mv.color))
                {
                    self.center.add(&leftovers);
                }
            }
            MoveSource::Center => {
                self.center.take(mv.color);
                if preview.took_marker {
                    self.marker_holder = Some(player);
                }
            }
        }
    }

    fn table_is_empty(&self) -> bool {
        self.center.is_empty() && self.factories.iter().all(|f| f.is_empty())
    }

    // === Round setup ===

    /// Refill the factories and hand the turn to `starter`.
    ///
    /// If the supply is empty the game ends instead.
    pub(super) fn begin_round(&mut self, starter: PlayerId) -> Result<(), InsufficientTiles> {
        self.phase = Phase::RoundSetup;

        let leftover = self.center.reset();
        self.supply.discard_all(&leftover);
        self.refill_factories()?;

        self.round += 1;
        self.turn = 0;
        self.round_starter = starter;
        self.current_player = starter;
        self.marker_holder = None;

        if self.table_is_empty() {
            warn!(round = self.round, "no tiles left to draw, ending the game");
            self.finish_game();
            return Ok(());
        }

        self.phase = Phase::Drafting;
        debug!(round = self.round, starter = %starter, "round started");
        Ok(())
    }

    /// Empty every factory, then fill each with up to four tiles. The last
    /// factories get fewer, or none, once bag and discard run dry.
    fn refill_factories(&mut self) -> Result<(), InsufficientTiles> {
        for factory in &mut self.factories {
            let stale = factory.clear();
            self.supply.discard_all(&stale);
        }

        for (index, factory) in self.factories.iter_mut().enumerate() {
            let n = FACTORY_CAPACITY.min(self.supply.available());
            if n < FACTORY_CAPACITY {
                warn!(factory = index + 1, tiles = n, "tile supply exhausted");
            }
            let drawn = self.supply.draw(n, &mut self.rng)?;
            factory.fill(&drawn);
        }
        Ok(())
    }

    // === Round end ===

    fn end_round(&mut self) -> Result<RoundSummary, AzulError> {
        self.phase = Phase::RoundEnd;

        let mut reports: PlayerMap<RoundReport> = PlayerMap::with_default(self.player_count());
        for (player, board) in self.boards.iter_mut() {
            let report = &mut reports[player];

            for row in 0..WALL_SIZE {
                if let Some((col, color, rest)) = board.tile_line(row)? {
                    let points = placement_score(board.wall(), row, col);
                    board.add_points(points);
                    self.supply.discard(color, rest as u8);
                    report.placements.push(WallPlacement { row, col, color, points });
                }
            }

            report.floor_penalty = floor_penalty(board.floor().len());
            board.apply_penalty(report.floor_penalty);
            let floor_tiles = board.clear_floor();
            self.supply.discard_all(&floor_tiles);
            report.score = board.score();
        }

        let round = self.round;
        let game_over = self.boards.values().any(|b| b.wall().complete_rows() > 0);
        let next_starter = self.marker_holder.unwrap_or(self.round_starter);

        info!(
            round,
            game_over,
            next_starter = %next_starter,
            scores = ?self.boards.values().map(|b| b.score()).collect::<Vec<_>>(),
            "round ended"
        );

        let next_starter = if game_over {
            self.finish_game();
            None
        } else {
            self.begin_round(next_starter)?;
            Some(next_starter)
        };

        if self.is_over() {
            for (player, board) in self.boards.iter() {
                reports[player].bonus = Some(end_game_bonus(board.wall()));
                reports[player].score = board.score();
            }
        }

        Ok(RoundSummary {
            round,
            reports,
            next_starter: next_starter.filter(|_| !self.is_over()),
        })
    }

    // === Game end ===

    /// Add end-game bonuses, decide the winner, and stop.
    fn finish_game(&mut self) {
        for (_, board) in self.boards.iter_mut() {
            let bonus = end_game_bonus(board.wall());
            board.add_points(bonus.total());
        }

        let result = decide_result(&self.boards);
        info!(
            rounds = self.round,
            result = ?result,
            scores = ?self.boards.values().map(|b| b.score()).collect::<Vec<_>>(),
            "game over"
        );

        self.result = Some(result);
        self.phase = Phase::GameOver;
    }
}
