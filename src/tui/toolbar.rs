//! Toolbar widget with the editor's action buttons.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::hit_test::{HitItem, HitRegistry};
use super::theme::Theme;

/// An action triggered by a toolbar button or its shortcut key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolAction {
    /// Insert a beaker (before the selection, or at the end)
    AddBeaker,
    /// Remove the selected beaker (or the last one)
    RemoveBeaker,
    /// Grow the selected beaker by one slot
    ExpandBeaker,
    /// Shrink the selected beaker by one slot
    ShrinkBeaker,
    /// Replace the board from clipboard text
    Paste,
    /// Copy the board to the clipboard as text
    Copy,
    /// Toggle editor mode
    ToggleEditor,
    /// Restore the board loaded at startup or last paste
    Reset,
}

impl ToolAction {
    /// Buttons in display order.
    pub const ALL: [Self; 8] = [
        Self::AddBeaker,
        Self::RemoveBeaker,
        Self::ExpandBeaker,
        Self::ShrinkBeaker,
        Self::Paste,
        Self::Copy,
        Self::ToggleEditor,
        Self::Reset,
    ];

    /// Button caption.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AddBeaker => "Add",
            Self::RemoveBeaker => "Remove",
            Self::ExpandBeaker => "Expand",
            Self::ShrinkBeaker => "Shrink",
            Self::Paste => "Paste",
            Self::Copy => "Copy",
            Self::ToggleEditor => "Editor",
            Self::Reset => "Reset",
        }
    }

    /// Whether the action mutates the board in ways only the editor allows.
    #[must_use]
    pub const fn editor_only(self) -> bool {
        matches!(
            self,
            Self::AddBeaker
                | Self::RemoveBeaker
                | Self::ExpandBeaker
                | Self::ShrinkBeaker
                | Self::Paste
        )
    }
}

/// Toolbar widget: one bordered button per available action.
pub struct Toolbar;

impl Toolbar {
    /// Renders the toolbar and records each button's hit region.
    ///
    /// Editor-only buttons are hidden outside editor mode.
    pub fn render(
        f: &mut Frame,
        area: Rect,
        editor_mode: bool,
        theme: &Theme,
        hits: &mut HitRegistry,
    ) {
        let actions: Vec<ToolAction> = ToolAction::ALL
            .into_iter()
            .filter(|action| editor_mode || !action.editor_only())
            .collect();
        if actions.is_empty() {
            return;
        }

        let constraints = vec![Constraint::Ratio(1, actions.len() as u32); actions.len()];
        let cells = Layout::horizontal(constraints).split(area);

        for (action, cell) in actions.into_iter().zip(cells.iter()) {
            hits.push(*cell, HitItem::Button { action });

            let button = Paragraph::new(Line::from(action.label()).centered())
                .style(Style::default().fg(theme.text).bg(theme.background))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(theme.primary)),
                );
            f.render_widget(button, *cell);
        }
    }
}
