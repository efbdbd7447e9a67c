//! Legal move enumeration and single-move validation.
//!
//! Both read the state only. `legal_moves` is exact: every move it returns
//! passes `validate_move`, and every move that passes `validate_move` is in
//! the list.

use crate::board::{Placement, WALL_SIZE};
use crate::core::{FactoryId, InvalidMove, Move, MoveDestination, MoveSource, PlayerId, TileCounts};
use crate::game::GameState;

/// What applying a move would do, computed without applying it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MovePreview {
    /// The acting player.
    pub player: PlayerId,
    /// Tiles of the chosen color taken from the source.
    pub taken: usize,
    /// Other tiles pushed from a factory into the center.
    pub to_center: usize,
    /// True if the draft claims the first-player marker.
    pub took_marker: bool,
    /// Where the taken tiles end up on the player's board.
    pub placement: Placement,
}

/// Every legal move for the current player, in a fixed order: factories by
/// index then the center; colors in [`Tile::ALL`](crate::core::Tile::ALL) order; pattern lines top to
/// bottom then the floor.
///
/// Empty when no tiles are left to draft or the game is not in drafting.
#[must_use]
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    if !state.is_drafting() {
        return Vec::new();
    }

    let board = state.board(state.current_player());
    let mut moves = Vec::new();

    for (source, tiles) in draft_sources(state) {
        for color in tiles.colors() {
            for line in 0..WALL_SIZE {
                if board.check_line(line, color).is_ok() {
                    moves.push(Move::new(source, color, MoveDestination::PatternLine(line)));
                }
            }
            moves.push(Move::new(source, color, MoveDestination::Floor));
        }
    }

    moves
}

/// True if any factory or the center still holds a tile.
#[must_use]
pub fn has_legal_moves(state: &GameState) -> bool {
    state.is_drafting() && draft_sources(state).next().is_some()
}

/// Check a move for the current player and preview its effect.
pub fn validate_move(state: &GameState, mv: &Move) -> Result<MovePreview, InvalidMove> {
    if state.is_over() {
        return Err(InvalidMove::GameOver);
    }
    if !state.is_drafting() {
        return Err(InvalidMove::NotDrafting);
    }

    let (taken, to_center, took_marker) = match mv.source {
        MoveSource::Factory(id) => {
            let factory = state
                .factory(id)
                .ok_or(InvalidMove::NoSuchFactory(id))?;
            let taken = factory.tiles()[mv.color] as usize;
            (taken, factory.len() - taken, false)
        }
        MoveSource::Center => {
            let center = state.center();
            (center.tiles()[mv.color] as usize, 0, center.has_marker())
        }
    };
    if taken == 0 {
        return Err(InvalidMove::ColorNotAtSource {
            origin: mv.source,
            color: mv.color,
        });
    }

    let player = state.current_player();
    let placement = state
        .board(player)
        .plan(mv.destination, mv.color, taken, took_marker)?;

    Ok(MovePreview {
        player,
        taken,
        to_center,
        took_marker,
        placement,
    })
}

/// Non-empty draft sources in enumeration order.
fn draft_sources(state: &GameState) -> impl Iterator<Item = (MoveSource, &TileCounts)> {
    let factories = state
        .factories()
        .iter()
        .enumerate()
        .map(|(i, f)| (MoveSource::Factory(FactoryId::new(i as u8)), f.tiles()));
    let center = std::iter::once((MoveSource::Center, state.center().tiles()));

    factories
        .chain(center)
        .filter(|(_, tiles)| !tiles.is_empty())
}
