//! Strategic play: greedy value plus positional heuristics.
//!
//! On top of the immediate score delta the strategic player
//! - dislikes sending tiles to the floor even when the floor is still cheap,
//! - likes filling pattern lines, more so the closer they get to full,
//! - likes completing big lines and lines whose wall cell has neighbours,
//! - pushes rows, columns and colors that are already 3/5 done,
//! - values the first-player marker a little,
//! - avoids pushing tiles into the center that an opponent needs to finish
//!   a nearly full line.

use serde::{Deserialize, Serialize};

use crate::core::{Move, MoveSource};
use crate::game::GameState;

use super::evaluate::MoveEffect;
use super::best_move;

/// Filled cells from which a row, column or color counts as close to done.
const NEAR_COMPLETE: usize = 3;

/// Free spaces at or below which an opponent's line is worth denying.
const DENIAL_SPACE: usize = 2;

/// Heuristic weights for [`Policy::Strategic`](super::Policy::Strategic).
///
/// ```
/// use azul_engine::ai::StrategicWeights;
///
/// let weights = StrategicWeights { first_player: 0.0, ..Default::default() };
/// assert_eq!(weights.waste, StrategicWeights::default().waste);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategicWeights {
    /// Penalty per tile sent to the floor or out of play (default 0.5).
    pub waste: f64,

    /// Reward per tile added to a pattern line, scaled by how full the line
    /// is afterwards (default 0.5).
    pub progress: f64,

    /// Reward per tile of capacity when a line is completed (default 0.3).
    pub completion: f64,

    /// Reward per filled wall neighbour of the target cell, scaled by line
    /// fill (default 0.5).
    pub adjacency: f64,

    /// Reward for feeding a row that is close to complete (default 1.0).
    pub row: f64,

    /// Reward for feeding a column that is close to complete (default 1.5).
    pub column: f64,

    /// Reward for feeding a color that is close to complete (default 1.5).
    pub color: f64,

    /// Reward for taking the first-player marker (default 0.5).
    pub first_player: f64,

    /// Penalty per leftover tile a factory draft sends to the center that
    /// matches an opponent line within two tiles of full (default 2.0).
    pub denial: f64,
}

impl Default for StrategicWeights {
    fn default() -> Self {
        Self {
            waste: 0.5,
            progress: 0.5,
            completion: 0.3,
            adjacency: 0.5,
            row: 1.0,
            column: 1.5,
            color: 1.5,
            first_player: 0.5,
            denial: 2.0,
        }
    }
}

/// Strategic value of a move for the player to act.
#[must_use]
pub fn value(state: &GameState, mv: &Move, effect: &MoveEffect, weights: &StrategicWeights) -> f64 {
    let color = mv.color;
    let mut value = effect.immediate_delta() as f64;
    value -= weights.waste * effect.wasted as f64;
    value -= weights.denial * gifts(state, mv) as f64;

    if effect.took_marker {
        value += weights.first_player;
    }

    let (Some(row), Some(col)) = (effect.line, effect.col) else {
        return value;
    };
    let wall = state.board(state.current_player()).wall();

    value += weights.progress * effect.to_line as f64 * effect.fill;
    if effect.completes_line {
        value += weights.completion * (row + 1) as f64;
    }
    value += weights.adjacency * wall.filled_neighbours(row, col) as f64 * effect.fill;

    if wall.filled_in_row(row) >= NEAR_COMPLETE {
        value += weights.row * effect.fill;
    }
    if wall.filled_in_column(col) >= NEAR_COMPLETE {
        value += weights.column * effect.fill;
    }
    if wall.color_count(color) >= NEAR_COMPLETE {
        value += weights.color * effect.fill;
    }

    value
}

/// Leftover tiles a factory draft hands to opponents, counted once for each
/// opponent line of the same color that is within [`DENIAL_SPACE`] of full.
fn gifts(state: &GameState, mv: &Move) -> usize {
    let MoveSource::Factory(id) = mv.source else {
        return 0;
    };
    let Some(factory) = state.factory(id) else {
        return 0;
    };
    let me = state.current_player();

    let mut gifts = 0;
    for (color, count) in factory.tiles().iter() {
        if color == mv.color || count == 0 {
            continue;
        }
        for (player, board) in state.boards().iter() {
            if player == me {
                continue;
            }
            let near = board
                .lines()
                .iter()
                .enumerate()
                .filter(|(index, line)| {
                    line.color() == Some(color)
                        && !line.is_full(*index)
                        && line.space(*index) <= DENIAL_SPACE
                })
                .count();
            gifts += count as usize * near;
        }
    }
    gifts
}

/// Pick the move with the best strategic value. Ties go to the move listed
/// first.
pub fn choose(state: &GameState, legal: &[Move], weights: &StrategicWeights) -> Option<Move> {
    best_move(state, legal, |mv, effect| value(state, mv, effect, weights))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, MoveDestination, PlayerId, Tile};
    use crate::rules::legal_moves;
    use crate::zones::Factory;

    fn single_factory(tiles: &[Tile]) -> GameState {
        let mut state = GameState::new(GameConfig::new(2)).unwrap();
        for factory in state.factories_mut().iter_mut() {
            *factory = Factory::new();
        }
        state.factories_mut()[0] = Factory::with_tiles(tiles);
        state
    }

    #[test]
    fn test_prefers_bigger_completion() {
        let state = single_factory(&[Tile::Red, Tile::Red, Tile::Red, Tile::Blue]);
        let legal = legal_moves(&state);

        // Greedy sees +1 either way; completing the three-tile line is worth more
        let mv = choose(&state, &legal, &StrategicWeights::default()).unwrap();
        assert_eq!(mv, Move::from_factory(0, Tile::Red, MoveDestination::PatternLine(2)));
    }

    #[test]
    fn test_likes_adjacent_cells() {
        let mut state = single_factory(&[Tile::Yellow, Tile::Turquoise]);
        let p = PlayerId::new(0);
        // Turquoise on the top row sits right of one black tile and above the other
        state.board_mut(p).wall_mut().place(0, Tile::Black).unwrap();
        state.board_mut(p).wall_mut().place(1, Tile::Black).unwrap();

        let legal = legal_moves(&state);
        let mv = choose(&state, &legal, &StrategicWeights::default()).unwrap();
        assert_eq!(mv, Move::from_factory(0, Tile::Turquoise, MoveDestination::PatternLine(0)));
    }

    #[test]
    fn test_keeps_tiles_away_from_opponent_lines() {
        let mut state = single_factory(&[Tile::Red, Tile::Red, Tile::Blue, Tile::Blue]);
        // Opponent needs two more red for their three-tile line
        state
            .board_mut(PlayerId::new(1))
            .place(MoveDestination::PatternLine(2), Tile::Red, 1, false)
            .unwrap();
        let legal = legal_moves(&state);

        // Blue and red are worth the same to the mover; blue is listed first
        let careless = StrategicWeights { denial: 0.0, ..Default::default() };
        assert_eq!(
            choose(&state, &legal, &careless),
            Some(Move::from_factory(0, Tile::Blue, MoveDestination::PatternLine(1)))
        );

        // Taking blue would leave both red tiles in the center
        assert_eq!(
            choose(&state, &legal, &StrategicWeights::default()),
            Some(Move::from_factory(0, Tile::Red, MoveDestination::PatternLine(1)))
        );
    }

    #[test]
    fn test_center_drafts_deny_nothing() {
        let mut state = single_factory(&[]);
        state.center_mut().add(&crate::core::TileCounts::from_tiles(&[Tile::Red, Tile::Blue]));
        state
            .board_mut(PlayerId::new(1))
            .place(MoveDestination::PatternLine(1), Tile::Red, 1, false)
            .unwrap();

        let mv = Move::from_center(Tile::Blue, MoveDestination::Floor);
        assert_eq!(gifts(&state, &mv), 0);
    }

    #[test]
    fn test_weights_deserialize_with_defaults() {
        let weights: StrategicWeights = serde_json::from_str(r#"{"waste": 2.0}"#).unwrap();
        assert_eq!(weights.waste, 2.0);
        assert_eq!(weights.column, StrategicWeights::default().column);
        assert_eq!(weights.denial, 2.0);
    }
}
