//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

pub mod board_view;
pub mod handlers;
pub mod status_bar;
pub mod swatch_bar;
pub mod theme;
pub mod toolbar;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::models::Board;

// Re-export TUI components
pub use board_view::BoardView;
pub use hit_test::{HitItem, HitRegistry};
pub use status_bar::StatusBar;
pub use swatch_bar::SwatchBar;
pub use theme::Theme;
pub use toolbar::{ToolAction, Toolbar};

/// What the user currently has selected.
///
/// At most one element is selected at a time; the variants make that
/// structurally impossible to violate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nothing selected
    #[default]
    None,
    /// A beaker, by board index
    Beaker(usize),
    /// A swatch, by swatch bar index (0 is the blank remove tool)
    Swatch(usize),
}

/// Application state for the TUI.
pub struct AppState {
    /// The board being edited
    pub board: Board,
    /// Snapshot restored by the Reset action (startup or last paste)
    pub starting_board: Board,
    /// Current selection
    pub selection: Selection,
    /// Whether the mutation surface (swatches, add/remove/resize, paste)
    /// is available
    pub editor_mode: bool,
    /// Transient message shown in the status bar until the next input
    pub status_message: String,
    /// Resolved color theme
    pub theme: Theme,
    /// Application configuration
    pub config: Config,
    /// Clickable regions recorded by the last rendered frame
    pub hits: HitRegistry,
}

impl AppState {
    /// Creates the application state around a starting board.
    #[must_use]
    pub fn new(board: Board, config: Config) -> Self {
        Self {
            starting_board: board.clone(),
            board,
            selection: Selection::None,
            editor_mode: true,
            status_message: String::new(),
            theme: Theme::from_mode(config.ui.theme_mode),
            config,
            hits: HitRegistry::new(),
        }
    }

    /// Replaces the board (after a paste) and clears the selection.
    ///
    /// The new board also becomes the Reset snapshot.
    pub fn load_board(&mut self, board: Board) {
        self.starting_board = board.clone();
        self.board = board;
        self.selection = Selection::None;
    }

    /// Sets the transient status message.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Clears the transient status message.
    pub fn clear_status(&mut self) {
        self.status_message.clear();
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Re-resolve the theme so Auto mode follows the OS preference.
        state.theme = Theme::from_mode(state.config.ui.theme_mode);

        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if handlers::handle_key_event(state, key)? {
                        break; // User quit
                    }
                }
                Event::Mouse(mouse) => handlers::handle_mouse_event(state, mouse),
                _ => {
                    // Terminal resized; re-rendered on the next loop
                }
            }
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &mut AppState) {
    // New frame: every widget re-records its clickable regions.
    state.hits.clear();
    let theme = state.theme;

    // Fill entire screen with the theme background color first
    let full_bg = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(full_bg, f.area());

    let constraints = if state.editor_mode {
        vec![
            Constraint::Length(3), // Title bar
            Constraint::Length(3), // Toolbar
            Constraint::Min(8),    // Board grid
            Constraint::Length(3), // Swatch bar
            Constraint::Length(4), // Status bar
        ]
    } else {
        vec![
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(4),
        ]
    };
    let chunks = Layout::vertical(constraints).split(f.area());

    render_title_bar(f, chunks[0], state);
    Toolbar::render(f, chunks[1], state.editor_mode, &theme, &mut state.hits);

    let selected_beaker = match state.selection {
        Selection::Beaker(index) => Some(index),
        _ => None,
    };
    BoardView::render(
        f,
        chunks[2],
        &state.board,
        selected_beaker,
        state.config.editor.grid_columns,
        &theme,
        &mut state.hits,
    );

    if state.editor_mode {
        let selected_swatch = match state.selection {
            Selection::Swatch(index) => Some(index),
            _ => None,
        };
        SwatchBar::render(
            f,
            chunks[3],
            state.config.editor.swatch_count,
            selected_swatch,
            &theme,
            &mut state.hits,
        );
    }

    let status_area = chunks[chunks.len() - 1];
    StatusBar::render(f, status_area, state, &theme);
}

/// Render title bar with beaker count and mode indicator
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let mode = if state.editor_mode { "editor" } else { "play" };
    let title = format!(
        " {} - {} beakers - {} mode",
        APP_NAME,
        state.board.len(),
        mode
    );

    let title_widget = Paragraph::new(Line::from(title))
        .style(
            Style::default()
                .fg(state.theme.primary)
                .bg(state.theme.background),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(state.theme.background)),
        );

    f.render_widget(title_widget, area);
}
