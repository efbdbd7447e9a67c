//! Invariants that must hold for any sequence of legal moves.

use azul_engine::board::WALL_SIZE;
use azul_engine::core::{GameConfig, Move, MoveDestination, MoveSource, FactoryId, Tile};
use azul_engine::game::GameState;
use azul_engine::rules::{legal_moves, validate_move};
use proptest::prelude::*;

fn table_has_tiles(state: &GameState) -> bool {
    !state.center().is_empty() || state.factories().iter().any(|f| !f.is_empty())
}

fn filled_cells(state: &GameState) -> Vec<(usize, usize, usize)> {
    let mut cells = Vec::new();
    for (player, board) in state.boards().iter() {
        for row in 0..WALL_SIZE {
            for col in 0..WALL_SIZE {
                if board.wall().is_filled(row, col) {
                    cells.push((player.index(), row, col));
                }
            }
        }
    }
    cells
}

fn any_move() -> impl Strategy<Value = Move> {
    let source = prop_oneof![
        (0u8..12).prop_map(|i| MoveSource::Factory(FactoryId::new(i))),
        Just(MoveSource::Center),
    ];
    let color = (0usize..5).prop_map(|i| Tile::ALL[i]);
    let destination = prop_oneof![
        (0usize..6).prop_map(MoveDestination::PatternLine),
        Just(MoveDestination::Floor),
    ];
    (source, color, destination).prop_map(|(s, c, d)| Move::new(s, c, d))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_random_play_keeps_invariants(
        seed in any::<u64>(),
        players in 2usize..=4,
        choices in prop::collection::vec(any::<usize>(), 1..300),
    ) {
        let mut state = GameState::new(GameConfig::new(players).with_seed(seed)).unwrap();

        for choice in choices {
            if state.is_over() {
                prop_assert!(legal_moves(&state).is_empty());
                break;
            }

            let legal = legal_moves(&state);
            prop_assert_eq!(legal.is_empty(), !table_has_tiles(&state));
            prop_assert!(!legal.is_empty());

            let before = filled_cells(&state);
            let mv = legal[choice % legal.len()];
            prop_assert!(state.apply_move(mv).is_ok());

            prop_assert!(state.check_conservation().is_ok());
            let after = filled_cells(&state);
            for cell in before {
                prop_assert!(after.contains(&cell), "wall cell {:?} cleared", cell);
            }
        }
    }

    #[test]
    fn prop_validation_matches_enumeration(
        seed in any::<u64>(),
        warmup in 0usize..15,
        candidates in prop::collection::vec(any_move(), 1..40),
    ) {
        let mut state = GameState::new(GameConfig::new(3).with_seed(seed)).unwrap();
        for _ in 0..warmup {
            let mv = legal_moves(&state)[0];
            state.apply_move(mv).unwrap();
        }

        let legal = legal_moves(&state);
        for mv in candidates {
            let valid = validate_move(&state, &mv).is_ok();
            prop_assert_eq!(valid, legal.contains(&mv), "{}", mv);

            if !valid {
                let before = state.clone();
                prop_assert!(state.apply_move(mv).is_err());
                prop_assert_eq!(&state, &before);
            }
        }
    }

    #[test]
    fn prop_scores_never_drop_below_zero(seed in any::<u64>()) {
        let mut state = GameState::new(GameConfig::new(2).with_seed(seed)).unwrap();
        // Dump everything on the floor: the harshest penalties possible
        for _ in 0..200 {
            if state.is_over() {
                break;
            }
            let legal = legal_moves(&state);
            let mv = legal
                .iter()
                .copied()
                .find(|m| m.destination == MoveDestination::Floor)
                .unwrap();
            state.apply_move(mv).unwrap();
            prop_assert!(state.scores().values().all(|&s| s == 0));
        }
    }
}
