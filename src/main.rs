//! pourlab - Terminal-based water-sort puzzle workspace
//!
//! This application provides a visual sandbox for water-sort puzzle levels:
//! pour liquids between beakers, paint units in directly, rearrange and
//! resize beakers, and round-trip boards through the clipboard as text.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;

use pourlab::codec;
use pourlab::config::{Config, ThemeMode};
use pourlab::constants::{APP_BINARY_NAME, APP_NAME, DEFAULT_BEAKER_COUNT};
use pourlab::models::Board;
use pourlab::tui;

/// Theme choice on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ThemeArg {
    /// Follow the OS dark/light preference
    Auto,
    /// Always dark
    Dark,
    /// Always light
    Light,
}

impl From<ThemeArg> for ThemeMode {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Auto => Self::Auto,
            ThemeArg::Dark => Self::Dark,
            ThemeArg::Light => Self::Light,
        }
    }
}

/// pourlab - Terminal-based water-sort puzzle workspace
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a board text file (clipboard format) to load
    #[arg(value_name = "FILE")]
    board_path: Option<PathBuf>,

    /// Override the configured theme
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load or create default config
    let mut config = Config::load().unwrap_or_else(|_| Config::default());
    if let Some(theme) = cli.theme {
        config.ui.theme_mode = theme.into();
    }

    let board = if let Some(path) = &cli.board_path {
        if !path.exists() {
            eprintln!("Error: Board file not found: {}", path.display());
            eprintln!();
            eprintln!("Provide a path to a board text file, one beaker per line,");
            eprintln!("letters bottom-to-top and '.' for empty slots. Example:");
            eprintln!();
            eprintln!("  {} my_level.txt", APP_BINARY_NAME);
            eprintln!();
            eprintln!("Or run {} with no arguments for a fresh board.", APP_BINARY_NAME);
            std::process::exit(1);
        }

        let text = fs::read_to_string(path)
            .context(format!("Failed to read board file: {}", path.display()))?;
        codec::parse_board(&text)
            .context(format!("Failed to parse board file: {}", path.display()))?
    } else {
        Board::with_beakers(DEFAULT_BEAKER_COUNT, config.editor.default_capacity)
    };

    println!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;
    let mut state = tui::AppState::new(board, config);

    // Run main TUI loop
    let result = tui::run_tui(&mut state, &mut terminal);

    // Restore terminal before surfacing any loop error
    tui::restore_terminal(terminal)?;
    result?;

    Ok(())
}
