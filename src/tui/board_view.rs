//! Board widget rendering the beaker grid.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{palette, Beaker, Board};

use super::hit_test::{HitItem, HitRegistry};
use super::theme::Theme;

/// Board widget: beakers as bordered columns of colored slots.
pub struct BoardView;

impl BoardView {
    /// Renders the board wrapped into rows of at most `grid_columns`
    /// beakers, recording one hit region per beaker.
    pub fn render(
        f: &mut Frame,
        area: Rect,
        board: &Board,
        selected: Option<usize>,
        grid_columns: usize,
        theme: &Theme,
        hits: &mut HitRegistry,
    ) {
        if board.is_empty() {
            let hint = Paragraph::new(Line::from("No beakers - click Add to create one").centered())
                .style(Style::default().fg(theme.text_muted).bg(theme.background));
            f.render_widget(hint, area);
            return;
        }

        let count = board.len();
        let rows = count.div_ceil(grid_columns.max(1));
        // Balance the rows instead of leaving a nearly empty last one.
        let columns = count.div_ceil(rows);

        let row_areas = Layout::vertical(vec![Constraint::Ratio(1, rows as u32); rows]).split(area);
        for (row, row_area) in row_areas.iter().enumerate() {
            let start = row * columns;
            let end = (start + columns).min(count);
            let cells =
                Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns])
                    .split(*row_area);
            for (offset, index) in (start..end).enumerate() {
                if let Some(beaker) = board.get(index) {
                    Self::render_beaker(
                        f,
                        cells[offset],
                        beaker,
                        index,
                        selected == Some(index),
                        theme,
                        hits,
                    );
                }
            }
        }
    }

    /// Renders a single beaker and records its hit region.
    fn render_beaker(
        f: &mut Frame,
        area: Rect,
        beaker: &Beaker,
        index: usize,
        selected: bool,
        theme: &Theme,
        hits: &mut HitRegistry,
    ) {
        hits.push(area, HitItem::Beaker { index });

        let border_style = if selected {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.beaker_border)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {}/{} ", beaker.fill(), beaker.capacity()))
            .style(Style::default().bg(theme.background));

        let inner = block.inner(area);
        f.render_widget(block, area);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        f.render_widget(
            Paragraph::new(Self::slot_lines(beaker, inner, theme)),
            inner,
        );
    }

    /// Builds the slot rows for a beaker, top of the glass first.
    ///
    /// Liquid sits at the bottom; when the beaker is taller than the cell,
    /// the top (empty) slots are clipped rather than the units.
    fn slot_lines(beaker: &Beaker, inner: Rect, theme: &Theme) -> Vec<Line<'static>> {
        let height = inner.height as usize;
        let visible = beaker.capacity().min(height);
        let mut lines = Vec::with_capacity(height);

        for _ in 0..height - visible {
            lines.push(Line::from(""));
        }
        for slot in (0..visible).rev() {
            let line = match beaker.units().get(slot) {
                Some(&color) => {
                    let label = color.label();
                    let width = inner.width as usize;
                    let text = format!("{label:^width$}");
                    Line::from(Span::styled(
                        text,
                        Style::default()
                            .fg(palette::label_color(color))
                            .bg(palette::slot_color(color)),
                    ))
                }
                None => Line::from(Span::styled(
                    "\u{00b7}".repeat(inner.width as usize),
                    Style::default().fg(theme.empty_slot),
                )),
            };
            lines.push(line);
        }
        lines
    }
}
