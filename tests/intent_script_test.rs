//! Tests for scripted replays.

use tictactoe_history::{parse_script, replay, GameState, Intent, Player, Position};

#[test]
fn test_script_with_jump_branches_history() {
    let intents = parse_script("0,4,8 @1 2").unwrap();
    let state = replay(&intents);

    assert_eq!(state.history().len(), 3);
    assert_eq!(state.step_number(), 2);
    assert_eq!(state.next_player(), Player::X);
}

#[test]
fn test_script_labels_and_numbers_agree() {
    let by_number = replay(&parse_script("0 4 8").unwrap());
    let by_label = replay(&parse_script("top-left center bottom-right").unwrap());
    assert_eq!(by_number, by_label);
}

#[test]
fn test_out_of_range_jump_in_script_is_ignored() {
    let with_jump = replay(&parse_script("0 4 @7").unwrap());
    let without = replay(&parse_script("0 4").unwrap());
    assert_eq!(with_jump, without);
}

#[test]
fn test_invalid_token_reports_it() {
    let err = parse_script("0 4 banana").unwrap_err();
    assert!(err.message.contains("banana"));
}

#[test]
fn test_state_serializes_history_and_step() {
    let state = replay(&[
        Intent::CellClicked(Position::Center),
        Intent::HistoryJumped(0),
    ]);
    let json = serde_json::to_value(&state).unwrap();

    assert_eq!(json["step_number"], 0);
    assert_eq!(json["history"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["history"][1]["squares"][4], serde_json::json!({ "Occupied": "X" }));
    assert_eq!(replay(&[]), GameState::new());
}
