//! Plain-text board format for clipboard copy/paste.
//!
//! One line per beaker, in board order. Within a line, filled slots appear
//! bottom to top as uppercase letter labels and empty slots as `.` padding,
//! so the line's slot count equals the beaker's capacity and empty space is
//! always trailing. Lines that contain a multi-character label (colors past
//! "Z") separate their slots with commas:
//!
//! ```text
//! AAB.
//! B...
//! A,AA,AB,.
//! ```
//!
//! Parsing accepts lowercase letters and treats any letter-free token as an
//! empty slot. A filled slot above an empty one, or a token mixing letters
//! with anything else, rejects the whole parse — a pasted board is applied
//! fully or not at all. Line lengths are independent; each line alone
//! determines its beaker's capacity.

use anyhow::{bail, Context, Result};

use crate::models::{Beaker, Board, ColorId};

/// Placeholder emitted for an empty slot.
const EMPTY_SLOT: char = '.';

/// Formats the board as clipboard text, one line per beaker.
#[must_use]
pub fn format_board(board: &Board) -> String {
    board
        .beakers()
        .iter()
        .map(format_beaker)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Formats one beaker as a line of slot tokens.
fn format_beaker(beaker: &Beaker) -> String {
    let mut tokens: Vec<String> = beaker.units().iter().map(|c| c.label()).collect();
    tokens.resize(beaker.capacity(), EMPTY_SLOT.to_string());

    let has_multi_char = tokens.iter().any(|t| t.len() > 1);
    if has_multi_char {
        tokens.join(",")
    } else {
        tokens.concat()
    }
}

/// Parses clipboard text into a board.
///
/// Empty input yields an empty board (the serialization of one). Any
/// malformed line fails the whole parse; callers keep their current board
/// on error, so a bad paste can never half-apply.
pub fn parse_board(text: &str) -> Result<Board> {
    let mut beakers = Vec::new();
    for (row, line) in text.lines().enumerate() {
        let beaker = parse_beaker(line).with_context(|| format!("line {}", row + 1))?;
        beakers.push(beaker);
    }
    Ok(Board::from_beakers(beakers))
}

/// Parses one line into a beaker; the slot count is the capacity.
fn parse_beaker(line: &str) -> Result<Beaker> {
    if line.is_empty() {
        bail!("empty line; every beaker needs at least one slot");
    }

    let tokens: Vec<String> = if line.contains(',') {
        line.split(',').map(|t| t.trim().to_string()).collect()
    } else {
        line.chars().map(String::from).collect()
    };

    let capacity = tokens.len();
    let mut units = Vec::new();
    let mut saw_empty = false;
    for token in &tokens {
        if is_empty_slot(token) {
            saw_empty = true;
            continue;
        }
        let Some(color) = ColorId::from_label(token) else {
            bail!("unrecognized slot token {token:?}");
        };
        if saw_empty {
            bail!("filled slot above an empty slot");
        }
        units.push(color);
    }

    Beaker::from_units(units, capacity).context("beaker overflows its capacity")
}

/// A token with no letters in it marks an empty slot.
fn is_empty_slot(token: &str) -> bool {
    token.chars().all(|c| !c.is_ascii_alphabetic())
}
