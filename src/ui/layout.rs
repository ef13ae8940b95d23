//! Responsive layout helpers.
//!
//! A small `LayoutContext` wraps the terminal dimensions and answers the
//! layout questions the render code asks: how wide the sidebar should be,
//! whether the gallery fits two tile columns, and when to fall back to the
//! compact single-column arrangement.

// ============================================================================
// Breakpoints
// ============================================================================

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns), sidebar collapses to the tab row
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns), gallery drops to one tile column
    pub const SM_WIDTH: u16 = 80;

    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

// ============================================================================
// Layout Context
// ============================================================================

/// Terminal dimensions plus proportional sizing helpers.
///
/// Constructed fresh each frame from the frame size and passed down to the
/// render functions.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    /// Create a new layout context with the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Calculate a width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Check if the terminal is in a "narrow" state (less than 80 columns).
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Check if the terminal is in a "short" state (less than 24 rows).
    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    /// Check if the terminal is in a "compact" state (narrow or short).
    ///
    /// Compact terminals get a single gallery column and condensed hints.
    pub fn is_compact(&self) -> bool {
        self.is_narrow() || self.is_short()
    }

    /// Determine if the sidebar should be collapsed to just the tab row.
    pub fn should_collapse_sidebar(&self) -> bool {
        self.width < breakpoints::XS_WIDTH
    }

    /// Sidebar width in columns: a quarter of the terminal, within bounds.
    pub fn sidebar_width(&self) -> u16 {
        self.percent_width(25).clamp(18, 32)
    }

    /// Number of gallery tile columns that fit the preview pane.
    pub fn gallery_columns(&self) -> u16 {
        if self.is_narrow() {
            1
        } else {
            2
        }
    }
}

impl Default for LayoutContext {
    /// Returns a default layout context with standard 80x24 terminal size.
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
