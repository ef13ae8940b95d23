//! Color theme constants for the sandbox UI
//!
//! A muted, paper-and-ink palette: dark chrome around the catalog, with a
//! lighter paper surface for the CV layout and status colors lifted from the
//! widget designs.

use ratatui::style::Color;

// ============================================================================
// Chrome
// ============================================================================

/// Primary border color for panes and cards
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for highlights and the focused pane
pub const COLOR_ACCENT: Color = Color::White;

/// Dim text for hints and secondary labels
pub const COLOR_DIM: Color = Color::DarkGray;

/// Muted warm gray for helper text
pub const COLOR_MUTED: Color = Color::Rgb(122, 117, 110);

// ============================================================================
// Widget state colors
// ============================================================================

/// Error state border and message text
pub const COLOR_ERROR: Color = Color::Rgb(177, 14, 46);

/// Error state fill (washed-out red)
pub const COLOR_ERROR_BG: Color = Color::Rgb(234, 112, 136);

/// Disabled state fill (desaturated slate)
pub const COLOR_DISABLED_BG: Color = Color::Rgb(159, 172, 177);

// ============================================================================
// Surfaces
// ============================================================================

/// Deep teal canvas behind showcase tiles
pub const COLOR_CANVAS_BG: Color = Color::Rgb(45, 74, 86);

/// Darker teal for the tile surfaces themselves
pub const COLOR_SURFACE_BG: Color = Color::Rgb(26, 46, 56);

/// Warm paper background for the CV layout
pub const COLOR_PAPER_BG: Color = Color::Rgb(236, 234, 223);

/// Ink text on paper surfaces
pub const COLOR_INK: Color = Color::Rgb(26, 24, 14);

// ============================================================================
// CV interaction colors
// ============================================================================

/// Liked heart and like-count meter
pub const COLOR_LIKE: Color = Color::Rgb(44, 122, 72);

/// Lock glyph and locked-section text
pub const COLOR_LOCKED: Color = Color::Rgb(184, 179, 173);
