//! Theme system for consistent UI colors across dark and light modes.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic color theme for the TUI.
///
/// Liquid units are drawn with the palette in `models::palette`; the theme
/// only covers the chrome around them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Primary color for borders, titles, and emphasis
    pub primary: Color,
    /// Accent color for the active selection
    pub accent: Color,
    /// Error/destructive color
    pub error: Color,
    /// Primary text content color
    pub text: Color,
    /// Muted text color for hints and placeholders
    pub text_muted: Color,
    /// Main background color
    pub background: Color,
    /// Beaker outline color
    pub beaker_border: Color,
    /// Marker color for empty slots inside a beaker
    pub empty_slot: Color,
}

impl Theme {
    /// Resolves the theme for a configured mode.
    ///
    /// `Auto` detects the OS preference via the `dark-light` crate and
    /// falls back to dark when detection fails or is unspecified.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
            ThemeMode::Auto => match dark_light::detect() {
                dark_light::Mode::Light => Self::light(),
                dark_light::Mode::Dark | dark_light::Mode::Default => Self::dark(),
            },
        }
    }

    /// Dark theme for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            error: Color::Red,
            text: Color::White,
            text_muted: Color::DarkGray,
            background: Color::Black,
            beaker_border: Color::Gray,
            empty_slot: Color::DarkGray,
        }
    }

    /// Light theme for light terminal backgrounds.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0), // dark orange for visibility
            error: Color::Red,
            text: Color::Black,
            text_muted: Color::Gray,
            background: Color::White,
            beaker_border: Color::Rgb(60, 60, 60),
            empty_slot: Color::Rgb(200, 200, 200),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_mode(ThemeMode::Auto)
    }
}
