//! Dropdown Component
//!
//! A select widget with an openable option menu, single and multi-select
//! modes, and a forced-state gallery. The menu paints over whatever sits
//! below it, so its hit areas are registered last (topmost z-order).

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_DISABLED_BG, COLOR_ERROR, COLOR_ERROR_BG,
    COLOR_SURFACE_BG,
};

use super::state::{resolve_visual_state, StateFlags, VisualState};

/// Default option labels for the live instance and gallery tiles.
const DEFAULT_OPTIONS: [&str; 4] = ["Option 1", "Option 2", "Option 3", "Option 4"];

/// Placeholder shown when nothing is selected.
const PLACEHOLDER: &str = "Select an option";

// ============================================================================
// State
// ============================================================================

/// Interaction state for one dropdown instance.
#[derive(Debug, Clone)]
pub struct Dropdown {
    /// Option labels in menu order
    pub options: Vec<String>,
    /// Indices of selected options, in selection order
    pub selected: Vec<usize>,
    /// Whether more than one option may be selected at once
    pub multi: bool,
    /// Whether the option menu is open
    pub open: bool,
    /// Whether the trigger has focus
    pub focused: bool,
    /// Interaction disabled
    pub disabled: bool,
    /// Inline error message, if any
    pub error: Option<String>,
    /// Keyboard cursor within the open menu
    pub cursor: usize,
    /// Explicit state override for gallery tiles
    pub forced: Option<VisualState>,
}

impl Default for Dropdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Dropdown {
    /// Create a live single-select dropdown with the default options.
    pub fn new() -> Self {
        Self {
            options: DEFAULT_OPTIONS.iter().map(|s| s.to_string()).collect(),
            selected: Vec::new(),
            multi: false,
            open: false,
            focused: false,
            disabled: false,
            error: None,
            cursor: 0,
            forced: None,
        }
    }

    /// Build a non-interactive tile pinned to one visual state.
    ///
    /// Each state is seeded with representative values so the tile looks the
    /// way a live instance in that state would.
    pub fn preview(state: VisualState) -> Self {
        let mut dropdown = Self::new();
        dropdown.forced = Some(state);
        match state {
            VisualState::Default => {}
            VisualState::Focused => {
                dropdown.focused = true;
                dropdown.open = true;
            }
            VisualState::Selected => dropdown.selected = vec![0],
            VisualState::SelectedMultiple => {
                dropdown.multi = true;
                dropdown.selected = vec![0, 2];
            }
            VisualState::Error => dropdown.error = Some("Selection is required".to_string()),
            VisualState::Disabled => dropdown.disabled = true,
        }
        dropdown
    }

    /// The derived visual state.
    ///
    /// Focus only shows while the menu is open; a focused-but-closed trigger
    /// reads as whatever its selection implies.
    pub fn state(&self) -> VisualState {
        resolve_visual_state(StateFlags {
            forced: self.forced,
            disabled: self.disabled,
            error: self.error.is_some(),
            focused: self.focused && self.open,
            selection_count: self.selected.len(),
        })
    }

    /// Open or close the option menu. No-op while disabled.
    pub fn toggle_open(&mut self) {
        if self.disabled {
            return;
        }
        self.open = !self.open;
        self.focused = self.open;
        if self.open {
            self.cursor = self.selected.first().copied().unwrap_or(0);
        }
    }

    /// Select the option at `index`.
    ///
    /// Single-select replaces the value and closes the menu; multi-select
    /// toggles membership and keeps the menu open. Out-of-range indices and
    /// disabled instances are ignored.
    pub fn select(&mut self, index: usize) {
        if self.disabled || index >= self.options.len() {
            return;
        }
        if self.multi {
            if let Some(pos) = self.selected.iter().position(|&i| i == index) {
                self.selected.remove(pos);
            } else {
                self.selected.push(index);
            }
        } else {
            self.selected = vec![index];
            self.open = false;
            self.focused = false;
        }
    }

    /// Move the menu cursor up one option.
    pub fn cursor_up(&mut self) {
        if self.open {
            self.cursor = self.cursor.saturating_sub(1);
        }
    }

    /// Move the menu cursor down one option.
    pub fn cursor_down(&mut self) {
        if self.open && self.cursor + 1 < self.options.len() {
            self.cursor += 1;
        }
    }

    /// Select the option under the menu cursor.
    pub fn select_cursor(&mut self) {
        if self.open {
            self.select(self.cursor);
        }
    }

    /// The trigger label: selected option names joined, or the placeholder.
    pub fn label(&self) -> String {
        if self.selected.is_empty() {
            PLACEHOLDER.to_string()
        } else {
            self.selected
                .iter()
                .filter_map(|&i| self.options.get(i))
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        }
    }

    /// Rows the trigger occupies (the menu overlays rows below it).
    pub fn trigger_height() -> u16 {
        3
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Render the dropdown trigger and, when open, its overlay menu.
///
/// Hit areas are registered for the trigger and for each visible option;
/// `interactive` is false for gallery tiles, which register nothing.
pub fn render_dropdown(
    frame: &mut Frame,
    area: Rect,
    dropdown: &Dropdown,
    hits: &mut HitAreaRegistry,
    interactive: bool,
) {
    let state = dropdown.state();

    let (border_color, bg, text_color) = match state {
        VisualState::Focused => (COLOR_ACCENT, COLOR_SURFACE_BG, COLOR_ACCENT),
        VisualState::Error => (COLOR_ERROR, COLOR_ERROR_BG, COLOR_ERROR),
        VisualState::Disabled => (COLOR_BORDER, COLOR_DISABLED_BG, COLOR_DIM),
        VisualState::Selected | VisualState::SelectedMultiple => {
            (COLOR_ACCENT, COLOR_SURFACE_BG, COLOR_ACCENT)
        }
        VisualState::Default => (COLOR_BORDER, COLOR_SURFACE_BG, COLOR_DIM),
    };

    let trigger_area = Rect {
        height: Dropdown::trigger_height().min(area.height),
        ..area
    };

    let arrow = if dropdown.open { "\u{25b4}" } else { "\u{25be}" };
    let trigger_line = Line::from(vec![
        Span::styled(dropdown.label(), Style::default().fg(text_color)),
        Span::raw(" "),
        Span::styled(arrow, Style::default().fg(COLOR_DIM)),
    ]);

    let trigger = Paragraph::new(trigger_line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(bg))
            .title(Span::styled(
                format!(" {} ", state.label()),
                Style::default().fg(COLOR_DIM),
            )),
    );
    frame.render_widget(trigger, trigger_area);

    if interactive {
        hits.register(trigger_area, ClickAction::DropdownToggle, None);
    }

    if !dropdown.open {
        return;
    }

    // Overlay menu directly below the trigger, clipped to the pane.
    let menu_height = (dropdown.options.len() as u16 + 2)
        .min(area.height.saturating_sub(Dropdown::trigger_height()));
    if menu_height < 3 {
        return;
    }
    let menu_area = Rect {
        x: area.x,
        y: area.y + Dropdown::trigger_height(),
        width: area.width,
        height: menu_height,
    };

    frame.render_widget(Clear, menu_area);
    let menu_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_ACCENT))
        .style(Style::default().bg(COLOR_SURFACE_BG));
    let inner = menu_block.inner(menu_area);
    frame.render_widget(menu_block, menu_area);

    for (i, option) in dropdown.options.iter().enumerate() {
        if i as u16 >= inner.height {
            break;
        }
        let row = Rect {
            x: inner.x,
            y: inner.y + i as u16,
            width: inner.width,
            height: 1,
        };

        let is_selected = dropdown.selected.contains(&i);
        let marker = if is_selected { "\u{2713} " } else { "  " };
        let mut style = Style::default().fg(if is_selected { COLOR_ACCENT } else { COLOR_DIM });
        if interactive && i == dropdown.cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let line = Paragraph::new(Line::from(Span::styled(
            format!("{marker}{option}"),
            style,
        )));
        frame.render_widget(line, row);

        if interactive {
            hits.register(row, ClickAction::DropdownSelect(i), Some(Style::default().add_modifier(Modifier::REVERSED)));
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_dropdown_is_default_state() {
        let dropdown = Dropdown::new();
        assert_eq!(dropdown.state(), VisualState::Default);
        assert_eq!(dropdown.label(), PLACEHOLDER);
    }

    #[test]
    fn test_open_shows_focused() {
        let mut dropdown = Dropdown::new();
        dropdown.toggle_open();
        assert!(dropdown.open);
        assert_eq!(dropdown.state(), VisualState::Focused);

        dropdown.toggle_open();
        assert!(!dropdown.open);
        assert_eq!(dropdown.state(), VisualState::Default);
    }

    #[test]
    fn test_single_select_closes_menu() {
        let mut dropdown = Dropdown::new();
        dropdown.toggle_open();
        dropdown.select(1);

        assert!(!dropdown.open);
        assert_eq!(dropdown.selected, vec![1]);
        assert_eq!(dropdown.state(), VisualState::Selected);
        assert_eq!(dropdown.label(), "Option 2");
    }

    #[test]
    fn test_multi_select_keeps_menu_open_and_toggles() {
        let mut dropdown = Dropdown::new();
        dropdown.multi = true;
        dropdown.toggle_open();

        dropdown.select(0);
        dropdown.select(2);
        assert!(dropdown.open);
        assert_eq!(dropdown.selected, vec![0, 2]);
        assert_eq!(dropdown.state(), VisualState::Focused); // still open

        dropdown.toggle_open();
        assert_eq!(dropdown.state(), VisualState::SelectedMultiple);
        assert_eq!(dropdown.label(), "Option 1, Option 3");

        // Re-selecting deselects
        dropdown.toggle_open();
        dropdown.select(0);
        assert_eq!(dropdown.selected, vec![2]);
    }

    #[test]
    fn test_disabled_ignores_interaction() {
        let mut dropdown = Dropdown::new();
        dropdown.disabled = true;

        dropdown.toggle_open();
        assert!(!dropdown.open);
        dropdown.select(1);
        assert!(dropdown.selected.is_empty());
        assert_eq!(dropdown.state(), VisualState::Disabled);
    }

    #[test]
    fn test_error_beats_selection() {
        let mut dropdown = Dropdown::new();
        dropdown.select(0);
        dropdown.error = Some("Selection is required".to_string());
        assert_eq!(dropdown.state(), VisualState::Error);
    }

    #[test]
    fn test_cursor_navigation() {
        let mut dropdown = Dropdown::new();
        dropdown.toggle_open();
        assert_eq!(dropdown.cursor, 0);

        dropdown.cursor_down();
        dropdown.cursor_down();
        assert_eq!(dropdown.cursor, 2);

        dropdown.cursor_up();
        assert_eq!(dropdown.cursor, 1);

        dropdown.select_cursor();
        assert_eq!(dropdown.selected, vec![1]);

        // Re-opening starts the cursor at the selection
        dropdown.toggle_open();
        assert_eq!(dropdown.cursor, 1);
    }

    #[test]
    fn test_preview_matches_forced_state() {
        for state in VisualState::ALL {
            let tile = Dropdown::preview(state);
            assert_eq!(tile.state(), state, "state={state}");
        }
    }

    #[test]
    fn test_out_of_range_select_is_ignored() {
        let mut dropdown = Dropdown::new();
        dropdown.select(99);
        assert!(dropdown.selected.is_empty());
    }
}
