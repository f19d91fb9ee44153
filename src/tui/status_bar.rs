//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::swatch_bar::SwatchBar;
use super::{AppState, Selection, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let first_line = if state.status_message.is_empty() {
            Self::hints_line(state, theme)
        } else {
            Line::from(Span::styled(
                state.status_message.clone(),
                Style::default().fg(theme.accent),
            ))
        };

        let status = Paragraph::new(vec![first_line, Self::help_line(state, theme)])
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    /// Contextual hint for the current selection.
    fn hints_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let hint = match state.selection {
            Selection::None => "Click a beaker to select it",
            Selection::Beaker(_) => {
                "Click another beaker to pour into it; right-click pours one unit back"
            }
            Selection::Swatch(index) => match SwatchBar::color_at(index) {
                Some(_) => "Click a beaker to add a unit of the selected color",
                None => "Click a beaker to remove its top unit",
            },
        };
        Line::from(Span::styled(hint, Style::default().fg(theme.text_muted)))
    }

    /// Key binding summary at the bottom.
    fn help_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let bindings: &[(&str, &str)] = if state.editor_mode {
            &[
                ("q", "Quit"),
                ("Esc", "Deselect"),
                ("e", "Play mode"),
                ("c", "Copy"),
                ("v", "Paste"),
                ("a", "Add"),
                ("r", "Remove"),
                ("+/-", "Resize"),
            ]
        } else {
            &[
                ("q", "Quit"),
                ("Esc", "Deselect"),
                ("e", "Editor mode"),
                ("c", "Copy"),
            ]
        };

        let mut spans: Vec<Span<'static>> = Vec::new();
        spans.push(Span::styled("Help: ", Style::default().fg(theme.primary)));
        for (i, (key, action)) in bindings.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(
                (*key).to_string(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(": "));
            spans.push(Span::raw((*action).to_string()));
        }
        Line::from(spans)
    }
}
