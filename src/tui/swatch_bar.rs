//! Swatch bar widget with the paint colors and the blank remove tool.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{palette, ColorId};

use super::hit_test::{HitItem, HitRegistry};
use super::theme::Theme;

/// Swatch bar widget, shown only in editor mode.
///
/// Slot 0 is blank and acts as the remove-unit tool; slots 1..=N paint
/// units of color `N - 1` into a beaker.
pub struct SwatchBar;

impl SwatchBar {
    /// The color painted by swatch `index`, `None` for the blank tool.
    #[must_use]
    pub const fn color_at(index: usize) -> Option<ColorId> {
        match index.checked_sub(1) {
            Some(color) => Some(ColorId(color)),
            None => None,
        }
    }

    /// Renders the bar and records one hit region per swatch.
    pub fn render(
        f: &mut Frame,
        area: Rect,
        swatch_count: usize,
        selected: Option<usize>,
        theme: &Theme,
        hits: &mut HitRegistry,
    ) {
        let total = swatch_count + 1; // blank tool plus colors
        let cells =
            Layout::horizontal(vec![Constraint::Ratio(1, total as u32); total]).split(area);

        for (index, cell) in cells.iter().enumerate() {
            hits.push(*cell, HitItem::Swatch { index });

            let border_style = if selected == Some(index) {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.beaker_border)
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .style(Style::default().bg(theme.background));

            let content = match Self::color_at(index) {
                Some(color) => Line::from(Span::styled(
                    color.label(),
                    Style::default()
                        .fg(palette::label_color(color))
                        .bg(palette::slot_color(color)),
                ))
                .centered(),
                None => Line::from(Span::styled(
                    "\u{00d7}",
                    Style::default().fg(theme.text_muted),
                ))
                .centered(),
            };

            f.render_widget(Paragraph::new(content).block(block), *cell);
        }
    }
}
