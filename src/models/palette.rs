//! Display palette mapping color ids to terminal colors.

use ratatui::style::Color;

use super::ColorId;

/// RGB values for the fixed display palette, in alphabet order.
///
/// Ids beyond the table cycle back to the start; the letter label stays
/// unique, so two liquids can share a displayed color without being the
/// same liquid.
const PALETTE: [(u8, u8, u8); 32] = [
    (255, 0, 0),     // red
    (0, 0, 255),     // blue
    (255, 255, 0),   // yellow
    (0, 128, 0),     // green
    (160, 32, 240),  // purple
    (255, 165, 0),   // orange
    (0, 255, 255),   // cyan
    (255, 0, 255),   // magenta
    (0, 255, 0),     // lime
    (255, 192, 203), // pink
    (165, 42, 42),   // brown
    (0, 0, 128),     // navy
    (64, 224, 208),  // turquoise
    (128, 128, 0),   // olive
    (128, 0, 0),     // maroon
    (0, 255, 255),   // aqua
    (0, 128, 128),   // teal
    (255, 215, 0),   // gold
    (192, 192, 192), // silver
    (255, 127, 80),  // coral
    (238, 130, 238), // violet
    (152, 255, 152), // mint
    (245, 245, 220), // beige
    (250, 128, 114), // salmon
    (244, 164, 96),  // sandy brown
    (75, 0, 130),    // indigo
    (220, 20, 60),   // crimson
    (240, 230, 140), // khaki
    (221, 160, 221), // plum
    (210, 105, 30),  // chocolate
    (0, 100, 0),     // dark green
    (255, 140, 0),   // dark orange
];

/// Returns the terminal color used to draw units of the given liquid.
#[must_use]
pub fn slot_color(color: ColorId) -> Color {
    let (r, g, b) = PALETTE[color.0 % PALETTE.len()];
    Color::Rgb(r, g, b)
}

/// Returns a readable foreground color for a label drawn on `color`.
///
/// Perceived luminance threshold, same formula the sRGB relative-luminance
/// approximation uses for text contrast.
#[must_use]
pub fn label_color(color: ColorId) -> Color {
    let (r, g, b) = PALETTE[color.0 % PALETTE.len()];
    let luminance = 0.299 * f32::from(r) + 0.587 * f32::from(g) + 0.114 * f32::from(b);
    if luminance > 150.0 {
        Color::Black
    } else {
        Color::White
    }
}
