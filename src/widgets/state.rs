//! Visual-state derivation for interactive widgets.
//!
//! Every stateful widget (dropdown, input field) maps its interaction flags to
//! exactly one [`VisualState`] label, which in turn selects the visual
//! treatment (border, label position, icon). The derivation is a pure
//! function with a fixed precedence:
//!
//! 1. forced override (showcase mode) wins unconditionally
//! 2. disabled
//! 3. error
//! 4. focused (menu-style widgets pass `focused && open` here)
//! 5. exactly one value selected/entered
//! 6. multiple values selected (multi-select mode)
//! 7. default

use std::fmt;

/// The discrete visual state of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualState {
    /// Resting state, nothing entered
    Default,
    /// Has input focus (and is open, for menu widgets)
    Focused,
    /// Holds exactly one value ("Selected item" / "Filled")
    Selected,
    /// Holds more than one value (multi-select)
    SelectedMultiple,
    /// An error flag or message is present
    Error,
    /// Interaction is disabled
    Disabled,
}

impl VisualState {
    /// All states, in gallery display order.
    pub const ALL: [VisualState; 6] = [
        VisualState::Default,
        VisualState::Focused,
        VisualState::Selected,
        VisualState::SelectedMultiple,
        VisualState::Error,
        VisualState::Disabled,
    ];

    /// Gallery label for this state, using the dropdown's naming.
    pub fn label(&self) -> &'static str {
        match self {
            VisualState::Default => "Default",
            VisualState::Focused => "Focused",
            VisualState::Selected => "Selected item",
            VisualState::SelectedMultiple => "Selected multiple",
            VisualState::Error => "Error",
            VisualState::Disabled => "Disabled",
        }
    }

    /// The next state in gallery order, wrapping around.
    pub fn next(&self) -> VisualState {
        let idx = Self::ALL.iter().position(|s| s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for VisualState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Interaction flags a widget feeds into [`resolve_visual_state`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StateFlags {
    /// Explicit override supplied for showcase tiles; bypasses derivation
    pub forced: Option<VisualState>,
    /// Interaction disabled
    pub disabled: bool,
    /// An error flag or message is present
    pub error: bool,
    /// Widget has focus; menu widgets pass `focused && open`
    pub focused: bool,
    /// Number of selected/entered values (0, 1, or more)
    pub selection_count: usize,
}

/// Derive the visual state from interaction flags.
///
/// Pure and side-effect free; the precedence ladder in the module docs is
/// everything there is to know about this function.
pub fn resolve_visual_state(flags: StateFlags) -> VisualState {
    if let Some(forced) = flags.forced {
        return forced;
    }
    if flags.disabled {
        return VisualState::Disabled;
    }
    if flags.error {
        return VisualState::Error;
    }
    if flags.focused {
        return VisualState::Focused;
    }
    match flags.selection_count {
        0 => VisualState::Default,
        1 => VisualState::Selected,
        _ => VisualState::SelectedMultiple,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forced_wins_over_everything() {
        let flags = StateFlags {
            forced: Some(VisualState::Focused),
            disabled: true,
            error: true,
            focused: false,
            selection_count: 3,
        };
        assert_eq!(resolve_visual_state(flags), VisualState::Focused);
    }

    #[test]
    fn test_disabled_beats_error_and_focus() {
        let flags = StateFlags {
            disabled: true,
            error: true,
            focused: true,
            selection_count: 1,
            ..Default::default()
        };
        assert_eq!(resolve_visual_state(flags), VisualState::Disabled);
    }

    #[test]
    fn test_error_beats_focus_and_value() {
        let flags = StateFlags {
            error: true,
            focused: true,
            selection_count: 2,
            ..Default::default()
        };
        assert_eq!(resolve_visual_state(flags), VisualState::Error);
    }

    #[test]
    fn test_focus_beats_value() {
        let flags = StateFlags {
            focused: true,
            selection_count: 1,
            ..Default::default()
        };
        assert_eq!(resolve_visual_state(flags), VisualState::Focused);
    }

    #[test]
    fn test_selection_counts() {
        for (count, expected) in [
            (0, VisualState::Default),
            (1, VisualState::Selected),
            (2, VisualState::SelectedMultiple),
            (7, VisualState::SelectedMultiple),
        ] {
            let flags = StateFlags {
                selection_count: count,
                ..Default::default()
            };
            assert_eq!(resolve_visual_state(flags), expected, "count={count}");
        }
    }

    #[test]
    fn test_state_cycle_wraps() {
        let mut state = VisualState::Default;
        for _ in 0..VisualState::ALL.len() {
            state = state.next();
        }
        assert_eq!(state, VisualState::Default);
    }
}
