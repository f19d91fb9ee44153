//! Integration tests for click routing and tool actions.
//!
//! Drives `AppState` through the same entry points the mouse and keyboard
//! handlers use, so the selection rules and editor-mode gating are tested
//! without a terminal.

use pourlab::codec::{format_board, parse_board};
use pourlab::config::Config;
use pourlab::models::Board;
use pourlab::tui::handlers::{dispatch_tool, handle_hit};
use pourlab::tui::{AppState, HitItem, Selection, ToolAction};

/// Creates an app state around a board given in clipboard format.
fn state_with(text: &str) -> AppState {
    let board = parse_board(text).expect("test board text must parse");
    AppState::new(board, Config::default())
}

fn click_beaker(state: &mut AppState, index: usize) {
    handle_hit(state, HitItem::Beaker { index }, false);
}

fn right_click_beaker(state: &mut AppState, index: usize) {
    handle_hit(state, HitItem::Beaker { index }, true);
}

fn click_swatch(state: &mut AppState, index: usize) {
    handle_hit(state, HitItem::Swatch { index }, false);
}

#[test]
fn test_clicking_a_beaker_selects_it() {
    let mut state = state_with("A.\nB.");
    click_beaker(&mut state, 1);
    assert_eq!(state.selection, Selection::Beaker(1));
}

#[test]
fn test_clicking_the_selected_beaker_deselects() {
    let mut state = state_with("A.\nB.");
    click_beaker(&mut state, 0);
    click_beaker(&mut state, 0);
    assert_eq!(state.selection, Selection::None);
}

#[test]
fn test_clicking_a_second_beaker_pours() {
    let mut state = state_with("BAA.\n....");
    click_beaker(&mut state, 0);
    click_beaker(&mut state, 1);
    assert_eq!(format_board(&state.board), "B...\nAA..");
    // Selection survives the pour so chained pours stay fluent.
    assert_eq!(state.selection, Selection::Beaker(0));
}

#[test]
fn test_illegal_pour_retargets_selection() {
    let mut state = state_with("A...\nB...");
    click_beaker(&mut state, 0);
    click_beaker(&mut state, 1);
    // Nothing moved; the click behaves like a fresh selection.
    assert_eq!(format_board(&state.board), "A...\nB...");
    assert_eq!(state.selection, Selection::Beaker(1));
}

#[test]
fn test_right_click_pours_one_unit_back() {
    let mut state = state_with("BAA.\nC...");
    click_beaker(&mut state, 0);
    right_click_beaker(&mut state, 1);
    // One unit, no color rule, one unit of the run left behind.
    assert_eq!(format_board(&state.board), "BA..\nCA..");
}

#[test]
fn test_right_click_is_editor_only() {
    let mut state = state_with("BAA.\nC...");
    dispatch_tool(&mut state, ToolAction::ToggleEditor);
    click_beaker(&mut state, 0);
    right_click_beaker(&mut state, 1);
    assert_eq!(format_board(&state.board), "BAA.\nC...");
    assert_eq!(state.selection, Selection::Beaker(0));
}

#[test]
fn test_swatch_paints_units_and_stays_selected() {
    let mut state = state_with("....");
    click_swatch(&mut state, 1); // color "A"
    click_beaker(&mut state, 0);
    click_beaker(&mut state, 0);
    assert_eq!(format_board(&state.board), "AA..");
    assert_eq!(state.selection, Selection::Swatch(1));
}

#[test]
fn test_blank_swatch_removes_top_unit() {
    let mut state = state_with("AB..");
    click_swatch(&mut state, 0);
    click_beaker(&mut state, 0);
    assert_eq!(format_board(&state.board), "A...");
}

#[test]
fn test_swatch_applies_to_already_selected_beaker() {
    let mut state = state_with("A...\nB...");
    click_beaker(&mut state, 1);
    click_swatch(&mut state, 3); // color "C"
    assert_eq!(format_board(&state.board), "A...\nBC..");
    // The beaker stays selected for further edits.
    assert_eq!(state.selection, Selection::Beaker(1));
}

#[test]
fn test_clicking_selected_swatch_deselects() {
    let mut state = state_with("....");
    click_swatch(&mut state, 2);
    assert_eq!(state.selection, Selection::Swatch(2));
    click_swatch(&mut state, 2);
    assert_eq!(state.selection, Selection::None);
}

#[test]
fn test_add_appends_and_selects_without_reference() {
    let mut state = state_with("AB..\nC..");
    dispatch_tool(&mut state, ToolAction::AddBeaker);
    // Capacity copied from the last beaker.
    assert_eq!(format_board(&state.board), "AB..\nC..\n...");
    assert_eq!(state.selection, Selection::Beaker(2));
}

#[test]
fn test_add_inserts_before_the_selected_beaker() {
    let mut state = state_with("A.\nB.");
    click_beaker(&mut state, 1);
    dispatch_tool(&mut state, ToolAction::AddBeaker);
    assert_eq!(format_board(&state.board), "A.\n..\nB.");
    assert_eq!(state.selection, Selection::Beaker(1));
}

#[test]
fn test_add_on_empty_board_uses_default_capacity() {
    let mut state = AppState::new(Board::new(), Config::default());
    dispatch_tool(&mut state, ToolAction::AddBeaker);
    assert_eq!(state.board.len(), 1);
    assert_eq!(
        state.board.get(0).unwrap().capacity(),
        state.config.editor.default_capacity
    );
}

#[test]
fn test_remove_takes_selection_or_last() {
    let mut state = state_with("A.\nB.\nC.");
    click_beaker(&mut state, 1);
    dispatch_tool(&mut state, ToolAction::RemoveBeaker);
    assert_eq!(format_board(&state.board), "A.\nC.");
    assert_eq!(state.selection, Selection::Beaker(0));

    state.selection = Selection::None;
    dispatch_tool(&mut state, ToolAction::RemoveBeaker);
    assert_eq!(format_board(&state.board), "A.");
}

#[test]
fn test_removing_the_last_beaker_empties_the_board() {
    let mut state = state_with("ABC");
    click_beaker(&mut state, 0);
    dispatch_tool(&mut state, ToolAction::RemoveBeaker);
    assert!(state.board.is_empty());
    assert_eq!(state.selection, Selection::None);
}

#[test]
fn test_resize_needs_a_selected_beaker() {
    let mut state = state_with("A..");
    dispatch_tool(&mut state, ToolAction::ExpandBeaker);
    assert_eq!(state.board.get(0).unwrap().capacity(), 3);

    click_beaker(&mut state, 0);
    dispatch_tool(&mut state, ToolAction::ExpandBeaker);
    assert_eq!(state.board.get(0).unwrap().capacity(), 4);
    dispatch_tool(&mut state, ToolAction::ShrinkBeaker);
    assert_eq!(state.board.get(0).unwrap().capacity(), 3);
}

#[test]
fn test_shrink_stops_at_the_fill_line() {
    let mut state = state_with("ABC");
    click_beaker(&mut state, 0);
    dispatch_tool(&mut state, ToolAction::ShrinkBeaker);
    assert_eq!(state.board.get(0).unwrap().capacity(), 3);
}

#[test]
fn test_editor_only_tools_are_gated_in_play_mode() {
    let mut state = state_with("A.\nB.");
    dispatch_tool(&mut state, ToolAction::ToggleEditor);
    assert!(!state.editor_mode);

    dispatch_tool(&mut state, ToolAction::AddBeaker);
    dispatch_tool(&mut state, ToolAction::RemoveBeaker);
    assert_eq!(format_board(&state.board), "A.\nB.");

    // Pouring still works in play mode.
    let mut state = state_with("A.\n..");
    dispatch_tool(&mut state, ToolAction::ToggleEditor);
    click_beaker(&mut state, 0);
    click_beaker(&mut state, 1);
    assert_eq!(format_board(&state.board), "..\nA.");
}

#[test]
fn test_leaving_editor_mode_drops_swatch_selection() {
    let mut state = state_with("....");
    click_swatch(&mut state, 1);
    dispatch_tool(&mut state, ToolAction::ToggleEditor);
    assert_eq!(state.selection, Selection::None);
}

#[test]
fn test_swatch_clicks_are_ignored_in_play_mode() {
    let mut state = state_with("....");
    dispatch_tool(&mut state, ToolAction::ToggleEditor);
    click_swatch(&mut state, 1);
    assert_eq!(state.selection, Selection::None);
}

#[test]
fn test_reset_restores_the_starting_board() {
    let mut state = state_with("BAA.\n....");
    click_beaker(&mut state, 0);
    click_beaker(&mut state, 1);
    assert_ne!(format_board(&state.board), "BAA.\n....");

    dispatch_tool(&mut state, ToolAction::Reset);
    assert_eq!(format_board(&state.board), "BAA.\n....");
    assert_eq!(state.selection, Selection::None);
}

#[test]
fn test_load_board_replaces_the_reset_snapshot() {
    let mut state = state_with("A.");
    state.load_board(parse_board("CC.\n...").unwrap());
    click_beaker(&mut state, 0);
    click_beaker(&mut state, 1);
    dispatch_tool(&mut state, ToolAction::Reset);
    assert_eq!(format_board(&state.board), "CC.\n...");
}
