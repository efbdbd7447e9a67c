//! Two-step move selection for human players.
//!
//! A renderer first picks a source and color (a click on a tile in a
//! factory or the center), then a destination (a pattern line or the
//! floor). Both steps are checked against the legal move set, so a
//! finished selection is always a legal move.

use crate::core::{InvalidMove, Move, MoveDestination, MoveSource, Tile};
use crate::rules::{legal_moves, validate_move};

use super::state::GameState;

/// A source and color picked, destination still open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    source: MoveSource,
    color: Tile,
    destinations: Vec<MoveDestination>,
}

impl Selection {
    /// Pick every `color` tile at `source`.
    ///
    /// Fails with the reason the source cannot be drafted from.
    pub fn begin(state: &GameState, source: MoveSource, color: Tile) -> Result<Self, InvalidMove> {
        // The floor is always open, so this only fails on the source
        validate_move(state, &Move::new(source, color, MoveDestination::Floor))?;

        let destinations = legal_moves(state)
            .into_iter()
            .filter(|m| m.source == source && m.color == color)
            .map(|m| m.destination)
            .collect();

        Ok(Self {
            source,
            color,
            destinations,
        })
    }

    #[must_use]
    pub fn source(&self) -> MoveSource {
        self.source
    }

    #[must_use]
    pub fn color(&self) -> Tile {
        self.color
    }

    /// Where the picked tiles may go, pattern lines first, floor last.
    #[must_use]
    pub fn destinations(&self) -> &[MoveDestination] {
        &self.destinations
    }

    #[must_use]
    pub fn allows(&self, destination: MoveDestination) -> bool {
        self.destinations.contains(&destination)
    }

    /// Complete the selection with a destination.
    pub fn finish(&self, state: &GameState, destination: MoveDestination) -> Result<Move, InvalidMove> {
        let mv = Move::new(self.source, self.color, destination);
        validate_move(state, &mv)?;
        Ok(mv)
    }
}

/// Every (source, color) pair a human can click on right now.
#[must_use]
pub fn selectable(state: &GameState) -> Vec<(MoveSource, Tile)> {
    let mut picks: Vec<(MoveSource, Tile)> = legal_moves(state)
        .into_iter()
        .map(|m| (m.source, m.color))
        .collect();
    picks.dedup();
    picks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FactoryId, GameConfig};

    #[test]
    fn test_two_step_selection() {
        let state = GameState::new(GameConfig::new(2).with_seed(1)).unwrap();
        let (source, color) = selectable(&state)[0];

        let selection = Selection::begin(&state, source, color).unwrap();
        assert_eq!(selection.destinations().len(), 6);
        assert_eq!(selection.destinations().last(), Some(&MoveDestination::Floor));

        let mv = selection.finish(&state, MoveDestination::PatternLine(3)).unwrap();
        assert_eq!(mv, Move::new(source, color, MoveDestination::PatternLine(3)));
        assert!(legal_moves(&state).contains(&mv));
    }

    #[test]
    fn test_bad_source_rejected() {
        let state = GameState::new(GameConfig::new(2).with_seed(1)).unwrap();

        assert!(matches!(
            Selection::begin(&state, MoveSource::Center, Tile::Blue),
            Err(InvalidMove::ColorNotAtSource { .. })
        ));
        assert_eq!(
            Selection::begin(&state, MoveSource::Factory(FactoryId::new(40)), Tile::Blue),
            Err(InvalidMove::NoSuchFactory(FactoryId::new(40)))
        );
    }

    #[test]
    fn test_bad_destination_rejected() {
        let state = GameState::new(GameConfig::new(2).with_seed(1)).unwrap();
        let (source, color) = selectable(&state)[0];
        let selection = Selection::begin(&state, source, color).unwrap();

        assert!(!selection.allows(MoveDestination::PatternLine(5)));
        assert_eq!(
            selection.finish(&state, MoveDestination::PatternLine(5)),
            Err(InvalidMove::NoSuchLine(5))
        );
    }

    #[test]
    fn test_selectable_pairs_are_unique() {
        let state = GameState::new(GameConfig::new(4).with_seed(2)).unwrap();
        let picks = selectable(&state);
        let distinct = picks.iter().collect::<std::collections::HashSet<_>>().len();
        assert_eq!(picks.len(), distinct);
    }
}
