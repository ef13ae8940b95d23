//! Input Field Component
//!
//! A single-line text input with focus handling, inline error display, and a
//! forced-state gallery. Shares the visual-state derivation with the dropdown;
//! "has a value" plays the role of "has a selection".

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use unicode_width::UnicodeWidthChar;

use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_DISABLED_BG, COLOR_ERROR, COLOR_ERROR_BG,
    COLOR_SURFACE_BG,
};

use super::state::{resolve_visual_state, StateFlags, VisualState};

/// Seed value used by gallery tiles that show a filled field.
const PREVIEW_VALUE: &str = "Input";

// ============================================================================
// State
// ============================================================================

/// Interaction state for one input field instance.
#[derive(Debug, Clone)]
pub struct InputField {
    /// Label displayed above the input
    pub label: String,
    /// Current value
    pub value: String,
    /// Placeholder shown while empty
    pub placeholder: String,
    /// Whether the field has focus
    pub focused: bool,
    /// Interaction disabled
    pub disabled: bool,
    /// Inline error message, if any
    pub error: Option<String>,
    /// Explicit state override for gallery tiles
    pub forced: Option<VisualState>,
}

impl Default for InputField {
    fn default() -> Self {
        Self::new()
    }
}

impl InputField {
    /// Create a live, empty input field.
    pub fn new() -> Self {
        Self {
            label: "Label".to_string(),
            value: String::new(),
            placeholder: "Type something".to_string(),
            focused: false,
            disabled: false,
            error: None,
            forced: None,
        }
    }

    /// Build a non-interactive tile pinned to one visual state.
    pub fn preview(state: VisualState) -> Self {
        let mut field = Self::new();
        field.forced = Some(state);
        match state {
            VisualState::Default => {}
            VisualState::Focused => field.focused = true,
            VisualState::Selected | VisualState::SelectedMultiple => {
                field.value = PREVIEW_VALUE.to_string();
            }
            VisualState::Error => {
                field.value = PREVIEW_VALUE.to_string();
                field.error = Some("Invalid value".to_string());
            }
            VisualState::Disabled => field.disabled = true,
        }
        field
    }

    /// The derived visual state. A non-empty value counts as one selection.
    pub fn state(&self) -> VisualState {
        resolve_visual_state(StateFlags {
            forced: self.forced,
            disabled: self.disabled,
            error: self.error.is_some(),
            focused: self.focused,
            selection_count: usize::from(!self.value.is_empty()),
        })
    }

    /// Give the field focus. No-op while disabled.
    pub fn focus(&mut self) {
        if !self.disabled {
            self.focused = true;
        }
    }

    /// Drop focus.
    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Append a character. Ignored while disabled; clears any error.
    pub fn type_char(&mut self, c: char) {
        if self.disabled {
            return;
        }
        self.value.push(c);
        self.error = None;
    }

    /// Delete the last character.
    pub fn backspace(&mut self) {
        if !self.disabled {
            self.value.pop();
        }
    }

    /// Clear the whole value.
    pub fn clear(&mut self) {
        if !self.disabled {
            self.value.clear();
            self.error = None;
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// The longest suffix of `text` that fits in `max_width` terminal columns.
fn visible_tail(text: &str, max_width: u16) -> String {
    let mut width = 0u16;
    let mut tail: Vec<char> = Vec::new();
    for c in text.chars().rev() {
        let w = c.width().unwrap_or(0) as u16;
        if width + w > max_width {
            break;
        }
        width += w;
        tail.push(c);
    }
    tail.into_iter().rev().collect()
}

/// Render the input field: label row, bordered value box, optional error row.
///
/// Registers a focus hit area over the box and a clear control when the field
/// holds a value; `interactive` is false for gallery tiles.
pub fn render_input_field(
    frame: &mut Frame,
    area: Rect,
    field: &InputField,
    hits: &mut HitAreaRegistry,
    interactive: bool,
) {
    let state = field.state();

    let (border_color, bg, text_color) = match state {
        VisualState::Focused => (COLOR_ACCENT, COLOR_SURFACE_BG, COLOR_ACCENT),
        VisualState::Error => (COLOR_ERROR, COLOR_ERROR_BG, COLOR_ERROR),
        VisualState::Disabled => (COLOR_BORDER, COLOR_DISABLED_BG, COLOR_DIM),
        VisualState::Selected | VisualState::SelectedMultiple => {
            (COLOR_ACCENT, COLOR_SURFACE_BG, COLOR_ACCENT)
        }
        VisualState::Default => (COLOR_BORDER, COLOR_SURFACE_BG, COLOR_DIM),
    };

    // Label row
    let label_area = Rect {
        height: 1.min(area.height),
        ..area
    };
    let label_style = if matches!(state, VisualState::Focused) {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(field.label.clone(), label_style))),
        label_area,
    );

    // Value box
    let box_area = Rect {
        x: area.x,
        y: area.y + 1,
        width: area.width,
        height: 3.min(area.height.saturating_sub(1)),
    };
    if box_area.height == 0 {
        return;
    }

    let (content, content_style) = if field.value.is_empty() && !field.focused {
        (
            field.placeholder.clone(),
            Style::default().fg(COLOR_DIM),
        )
    } else {
        let mut text = field.value.clone();
        if field.focused {
            text.push('\u{2588}'); // block cursor
        }
        // Keep the tail in view once the value outgrows the box
        let text = visible_tail(&text, box_area.width.saturating_sub(2));
        (text, Style::default().fg(text_color))
    };

    let value_box = Paragraph::new(Line::from(Span::styled(content, content_style))).block(
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
    frame.render_widget(value_box, box_area);

    if interactive {
        hits.register(box_area, ClickAction::InputFocus, None);
    }

    // Error row, plus a clear control when the field holds a value
    let footer_y = box_area.y + box_area.height;
    if footer_y < area.y + area.height {
        let footer_area = Rect {
            x: area.x,
            y: footer_y,
            width: area.width,
            height: 1,
        };
        if let Some(error) = &field.error {
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled("\u{2717} ", Style::default().fg(COLOR_ERROR)),
                    Span::styled(error.clone(), Style::default().fg(COLOR_ERROR)),
                ])),
                footer_area,
            );
        } else if interactive && !field.value.is_empty() {
            let clear_label = "[clear]";
            let clear_area = Rect {
                width: (clear_label.len() as u16).min(footer_area.width),
                ..footer_area
            };
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    clear_label,
                    Style::default().fg(COLOR_DIM),
                ))),
                clear_area,
            );
            hits.register(
                clear_area,
                ClickAction::InputClear,
                Some(Style::default().fg(COLOR_ACCENT)),
            );
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
