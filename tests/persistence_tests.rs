//! Save, restore and keep playing.

use azul_engine::ai::Policy;
use azul_engine::core::{AzulError, GameConfig, MoveDestination, PlayerId, SnapshotError};
use azul_engine::game::{selectable, GameDriver, GameState, Seat, Selection};
use serde_json::{json, Value};

fn seats() -> Vec<Seat> {
    vec![Seat::Human, Seat::Ai(Policy::Greedy), Seat::Ai(Policy::Random)]
}

/// Human plays the first selectable tile to the floor.
fn human_turn(driver: &mut GameDriver) {
    let (player, mv) = {
        let state = driver.state();
        let (source, color) = selectable(state)[0];
        let selection = Selection::begin(state, source, color).unwrap();
        let mv = selection.finish(state, MoveDestination::Floor).unwrap();
        (state.current_player(), mv)
    };
    driver.submit_move(player, mv).unwrap();
}

#[test]
fn test_resume_from_json_mid_round() {
    let mut driver = GameDriver::new(GameConfig::new(3).with_seed(31), seats()).unwrap();
    human_turn(&mut driver);
    driver.run_ai_turns().unwrap();

    let json = driver.state().to_json_pretty().unwrap();
    let restored = GameState::from_json(&json).unwrap();
    assert_eq!(&restored, driver.state());
    assert_eq!(restored.current_player(), PlayerId::new(0));
    assert_eq!(restored.history().len(), 3);

    let mut resumed = GameDriver::resume(restored, seats()).unwrap();
    assert!(resumed.awaiting_human());
    human_turn(&mut resumed);
    assert_eq!(resumed.state().history().len(), 4);
}

#[test]
fn test_binary_snapshot_of_finished_game() {
    let seats = vec![Seat::Ai(Policy::Greedy), Seat::Ai(Policy::strategic())];
    let mut driver = GameDriver::new(GameConfig::new(2).with_seed(2), seats).unwrap();
    driver.run_ai_turns().unwrap();
    assert!(driver.state().is_over());

    let bytes = driver.state().to_bytes().unwrap();
    let restored = GameState::from_bytes(&bytes).unwrap();
    assert!(restored.is_over());
    assert_eq!(restored.result(), driver.state().result());
    assert_eq!(restored.scores(), driver.state().scores());
}

#[test]
fn test_resume_rejects_wrong_seats() {
    let state = GameState::new(GameConfig::new(3)).unwrap();
    assert!(matches!(
        GameDriver::resume(state, vec![Seat::Human]),
        Err(AzulError::Config(_))
    ));
}

/// Load a fresh two-player game after editing its JSON.
fn load_edited(edit: impl FnOnce(&mut Value)) -> Result<GameState, SnapshotError> {
    let state = GameState::new(GameConfig::new(2)).unwrap();
    let mut value: Value = serde_json::from_str(&state.to_json().unwrap()).unwrap();
    edit(&mut value);
    GameState::from_json(&value.to_string())
}

fn assert_inconsistent(result: Result<GameState, SnapshotError>) {
    match result {
        Err(SnapshotError::Inconsistent(_)) => {}
        other => panic!("expected an inconsistent snapshot, got {other:?}"),
    }
}

// === Tampered snapshots ===

#[test]
fn test_untouched_snapshot_loads() {
    assert!(load_edited(|_| {}).is_ok());
}

#[test]
fn test_corrupt_snapshot_reports_reason() {
    assert_inconsistent(load_edited(|v| v["factories"] = json!([])));
}

#[test]
fn test_unseated_round_starter_is_rejected() {
    assert_inconsistent(load_edited(|v| {
        v["round_starter"] = json!(7);
        v["marker_holder"] = Value::Null;
        v["center"]["has_marker"] = json!(false);
    }));
    assert_inconsistent(load_edited(|v| v["round_starter"] = json!(7)));
}

#[test]
fn test_unseated_marker_holder_is_rejected() {
    assert_inconsistent(load_edited(|v| {
        v["marker_holder"] = json!(5);
        v["center"]["has_marker"] = json!(false);
    }));
}

#[test]
fn test_lost_marker_is_rejected() {
    assert_inconsistent(load_edited(|v| v["center"]["has_marker"] = json!(false)));
}

#[test]
fn test_overfull_floor_is_rejected() {
    assert_inconsistent(load_edited(|v| {
        v["boards"]["data"][0]["floor"]["slots"] = json!(vec![json!({ "Tile": "Red" }); 8]);
    }));
}

#[test]
fn test_overfull_pattern_line_is_rejected() {
    assert_inconsistent(load_edited(|v| {
        v["boards"]["data"][1]["lines"][0] = json!({ "color": "Red", "count": 3 });
    }));
}

#[test]
fn test_pattern_line_without_color_is_rejected() {
    assert_inconsistent(load_edited(|v| {
        v["boards"]["data"][0]["lines"][2] = json!({ "color": null, "count": 1 });
    }));
}
