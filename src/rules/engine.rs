//! Game outcome.
//!
//! Highest score wins; equal scores are split by the number of complete
//! wall rows; anything still level is a draw between the tied players.

use serde::{Deserialize, Serialize};

use crate::board::PlayerBoard;
use crate::core::{PlayerId, PlayerMap};

/// Result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Players tied on score and on complete rows.
    Draw(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won outright.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// Players sharing first place: the winner, or everyone in the draw.
    #[must_use]
    pub fn leaders(&self) -> Vec<PlayerId> {
        match self {
            GameResult::Winner(p) => vec![*p],
            GameResult::Draw(ps) => ps.clone(),
        }
    }
}

/// Decide the result from final boards.
#[must_use]
pub fn decide_result(boards: &PlayerMap<PlayerBoard>) -> GameResult {
    let key = |board: &PlayerBoard| (board.score(), board.wall().complete_rows());

    let best = boards.values().map(key).max().unwrap_or_default();
    let leaders: Vec<PlayerId> = boards
        .iter()
        .filter(|(_, board)| key(board) == best)
        .map(|(player, _)| player)
        .collect();

    match leaders.as_slice() {
        [single] => GameResult::Winner(*single),
        _ => GameResult::Draw(leaders),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Tile;

    fn board(score: u32, full_rows: usize) -> PlayerBoard {
        let mut board = PlayerBoard::new();
        board.set_score(score);
        for row in 0..full_rows {
            for color in Tile::ALL {
                board.wall_mut().place(row, color).unwrap();
            }
        }
        board
    }

    #[test]
    fn test_highest_score_wins() {
        let boards = PlayerMap::new(3, |p| board([50, 60, 10][p.index()], 0));
        assert_eq!(decide_result(&boards), GameResult::Winner(PlayerId::new(1)));
    }

    #[test]
    fn test_tie_broken_by_complete_rows() {
        let boards = PlayerMap::new(2, |p| board(50, [2, 1][p.index()]));
        assert_eq!(decide_result(&boards), GameResult::Winner(PlayerId::new(0)));
    }

    #[test]
    fn test_full_tie_is_draw() {
        let boards = PlayerMap::new(3, |p| board([40, 40, 12][p.index()], 1));
        let result = decide_result(&boards);
        assert_eq!(result, GameResult::Draw(vec![PlayerId::new(0), PlayerId::new(1)]));
        assert!(!result.is_winner(PlayerId::new(0)));
        assert_eq!(result.leaders().len(), 2);
    }
}
