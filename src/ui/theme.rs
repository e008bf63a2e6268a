//! Color palettes for the SQL-Flow shell.
//!
//! Two palettes, one per theme mode. The renderer reads whichever palette
//! the theme store currently exposes; nothing else in the UI names raw
//! colors for chrome.

use ratatui::style::Color;

/// The set of colors a render pass needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background
    pub background: Color,
    /// Raised surfaces (header, sidebar, bottom bar)
    pub surface: Color,
    /// Primary text
    pub text: Color,
    /// Secondary/dim text
    pub dim: Color,
    /// Border lines
    pub border: Color,
    /// Highlight for the active navigation entry
    pub accent: Color,
    /// Error banner accent
    pub error: Color,
    /// Warning banner accent
    pub warning: Color,
    /// Informational banner accent
    pub info: Color,
}

// ============================================================================
// Light Mode
// ============================================================================

/// Light palette, matching the original `#fdfdfd` page background.
pub const LIGHT_PALETTE: Palette = Palette {
    background: Color::Rgb(253, 253, 253),
    surface: Color::Rgb(240, 240, 244),
    text: Color::Rgb(30, 30, 30),
    dim: Color::Rgb(110, 110, 120),
    border: Color::Rgb(200, 200, 208),
    accent: Color::Rgb(59, 130, 246), // blue #3b82f6
    error: Color::Rgb(211, 47, 47),
    warning: Color::Rgb(237, 108, 2),
    info: Color::Rgb(2, 136, 209),
};

// ============================================================================
// Dark Mode
// ============================================================================

/// Dark palette, matching the original `#121212` page background.
pub const DARK_PALETTE: Palette = Palette {
    background: Color::Rgb(18, 18, 18),
    surface: Color::Rgb(30, 30, 36),
    text: Color::Rgb(230, 230, 230),
    dim: Color::Rgb(140, 140, 150),
    border: Color::Rgb(60, 60, 70),
    accent: Color::Rgb(96, 165, 250), // blue #60a5fa
    error: Color::Rgb(244, 67, 54),
    warning: Color::Rgb(255, 167, 38),
    info: Color::Rgb(41, 182, 246),
};
