//! Input handling: keyboard shortcuts, mouse clicks, and tool actions.
//!
//! Every click maps to at most one board mutation, applied fully before
//! the next event is read. Invalid requests (illegal pour, full beaker,
//! shrink below fill) are rejected by the model and simply change nothing;
//! there is no error channel for them.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use crate::codec;

use super::hit_test::HitItem;
use super::swatch_bar::SwatchBar;
use super::toolbar::ToolAction;
use super::{AppState, Selection};

/// Handle a key event. Returns `Ok(true)` when the user quits.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    if key.kind != KeyEventKind::Press {
        return Ok(false);
    }
    state.clear_status();

    match key.code {
        KeyCode::Char('q') => return Ok(true),
        KeyCode::Esc => state.selection = Selection::None,
        KeyCode::Char('e') => dispatch_tool(state, ToolAction::ToggleEditor),
        KeyCode::Char('c') => dispatch_tool(state, ToolAction::Copy),
        KeyCode::Char('v') => dispatch_tool(state, ToolAction::Paste),
        KeyCode::Char('a') => dispatch_tool(state, ToolAction::AddBeaker),
        KeyCode::Char('r') => dispatch_tool(state, ToolAction::RemoveBeaker),
        KeyCode::Char('+' | '=') => dispatch_tool(state, ToolAction::ExpandBeaker),
        KeyCode::Char('-' | '_') => dispatch_tool(state, ToolAction::ShrinkBeaker),
        _ => {}
    }
    Ok(false)
}

/// Handle a mouse event by hit-testing the click position.
pub fn handle_mouse_event(state: &mut AppState, mouse: MouseEvent) {
    let button = match mouse.kind {
        MouseEventKind::Down(button @ (MouseButton::Left | MouseButton::Right)) => button,
        _ => return,
    };
    state.clear_status();

    if let Some(item) = state.hits.hit(mouse.column, mouse.row) {
        handle_hit(state, item, button == MouseButton::Right);
    }
}

/// Route a clicked element through the current selection.
pub fn handle_hit(state: &mut AppState, item: HitItem, right_click: bool) {
    match item {
        HitItem::Button { action } => dispatch_tool(state, action),
        HitItem::Beaker { index } => handle_beaker_click(state, index, right_click),
        HitItem::Swatch { index } => handle_swatch_click(state, index),
    }
}

/// A click on a beaker: select, pour, or paint depending on the selection.
fn handle_beaker_click(state: &mut AppState, index: usize, right_click: bool) {
    match state.selection {
        Selection::Swatch(swatch) => {
            if !state.editor_mode {
                return;
            }
            apply_swatch(state, swatch, index);
            // Swatch stays selected so several units can be painted in a row.
        }
        Selection::Beaker(from) if from == index => state.selection = Selection::None,
        Selection::Beaker(from) => {
            let moved = if right_click {
                if !state.editor_mode {
                    return;
                }
                state.board.pour_back(from, index, 1)
            } else {
                state.board.pour(from, index)
            };
            if !moved {
                // An illegal pour re-targets the selection instead.
                state.selection = Selection::Beaker(index);
            }
        }
        Selection::None => state.selection = Selection::Beaker(index),
    }
}

/// A click on a swatch: select it, or apply it to the selected beaker.
fn handle_swatch_click(state: &mut AppState, index: usize) {
    if !state.editor_mode {
        return;
    }
    match state.selection {
        Selection::Swatch(selected) if selected == index => state.selection = Selection::None,
        Selection::Beaker(beaker) => {
            apply_swatch(state, index, beaker);
        }
        _ => state.selection = Selection::Swatch(index),
    }
}

/// Paint with a swatch: the blank tool removes the top unit, a color
/// swatch adds one unit of that color (no pour-matching rule).
fn apply_swatch(state: &mut AppState, swatch: usize, beaker: usize) {
    match SwatchBar::color_at(swatch) {
        Some(color) => {
            state.board.add_unit(beaker, color);
        }
        None => {
            state.board.remove_top(beaker);
        }
    }
}

/// Apply a toolbar action against the current selection.
pub fn dispatch_tool(state: &mut AppState, action: ToolAction) {
    if action.editor_only() && !state.editor_mode {
        return;
    }
    match action {
        ToolAction::AddBeaker => add_beaker(state),
        ToolAction::RemoveBeaker => remove_beaker(state),
        ToolAction::ExpandBeaker => {
            if let Selection::Beaker(index) = state.selection {
                state.board.resize_beaker(index, 1);
            }
        }
        ToolAction::ShrinkBeaker => {
            if let Selection::Beaker(index) = state.selection {
                state.board.resize_beaker(index, -1);
            }
        }
        ToolAction::Copy => copy_to_clipboard(state),
        ToolAction::Paste => paste_from_clipboard(state),
        ToolAction::ToggleEditor => {
            state.editor_mode = !state.editor_mode;
            // Swatches disappear with the editor; drop a dangling selection.
            if matches!(state.selection, Selection::Swatch(_)) {
                state.selection = Selection::None;
            }
        }
        ToolAction::Reset => {
            state.board = state.starting_board.clone();
            state.selection = Selection::None;
        }
    }
}

/// Insert a new beaker before the selection, or append one.
///
/// The new beaker copies its capacity from the reference beaker (the
/// selected one, else the last one) and becomes the selection.
fn add_beaker(state: &mut AppState) {
    match state.selection {
        Selection::Beaker(index) => {
            let capacity = state
                .board
                .get(index)
                .map_or(state.config.editor.default_capacity, |b| b.capacity());
            state.board.insert_beaker(index, capacity);
            state.selection = Selection::Beaker(index);
        }
        _ => {
            let capacity = state
                .board
                .beakers()
                .last()
                .map_or(state.config.editor.default_capacity, |b| b.capacity());
            state.board.insert_beaker(state.board.len(), capacity);
            state.selection = Selection::Beaker(state.board.len() - 1);
        }
    }
}

/// Remove the selected beaker, or the last one when nothing is selected.
fn remove_beaker(state: &mut AppState) {
    match state.selection {
        Selection::Beaker(index) => {
            if state.board.remove_beaker(index) {
                state.selection = if index > 0 {
                    Selection::Beaker(index - 1)
                } else {
                    Selection::None
                };
            }
        }
        _ => {
            if !state.board.is_empty() {
                state.board.remove_beaker(state.board.len() - 1);
            }
        }
    }
}

/// Copy the board to the system clipboard as text.
fn copy_to_clipboard(state: &mut AppState) {
    let text = codec::format_board(&state.board);
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
        Ok(()) => state.set_status("Board copied to clipboard"),
        Err(e) => state.set_status(format!("Failed to copy to clipboard: {e}")),
    }
}

/// Replace the board from clipboard text.
///
/// A malformed board rejects the whole paste; the current board is never
/// partially overwritten.
fn paste_from_clipboard(state: &mut AppState) {
    let text = match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.get_text()) {
        Ok(text) => text,
        Err(e) => {
            state.set_status(format!("Failed to read clipboard: {e}"));
            return;
        }
    };
    if text.trim().is_empty() {
        state.set_status("Clipboard is empty");
        return;
    }
    match codec::parse_board(&text) {
        Ok(board) => {
            state.load_board(board);
            state.set_status("Board replaced from clipboard");
        }
        Err(_) => state.set_status("Clipboard does not contain a valid board"),
    }
}
