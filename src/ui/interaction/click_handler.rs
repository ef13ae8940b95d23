//! Click action handler for the mouse interaction system.
//!
//! Processes click actions dispatched from the hit area registry, translating
//! them into App state mutations.

use crate::app::{App, WidgetInstance};

use super::hit_area::ClickAction;

/// Handle a click action by updating App state.
///
/// Called from the event loop when a mouse click lands on a registered hit
/// area. Widget actions that arrive while a different widget is mounted are
/// stale (the click raced a navigation) and are dropped.
pub fn handle_click_action(app: &mut App, action: ClickAction) {
    // Any click action likely changes visible state
    app.mark_dirty();

    match action {
        // =====================================================================
        // Navigation
        // =====================================================================
        ClickAction::SelectTab(category) => {
            app.select_tab(category);
            tracing::debug!("Click: SelectTab({category})");
        }
        ClickAction::OpenEntry(index) => {
            app.open_entry(index);
            tracing::debug!("Click: OpenEntry({index})");
        }

        // =====================================================================
        // Dropdown
        // =====================================================================
        ClickAction::DropdownToggle => {
            if let Some(WidgetInstance::Dropdown(dropdown)) = &mut app.widget {
                dropdown.toggle_open();
                tracing::debug!(open = dropdown.open, "Click: DropdownToggle");
            }
        }
        ClickAction::DropdownSelect(index) => {
            if let Some(WidgetInstance::Dropdown(dropdown)) = &mut app.widget {
                dropdown.select(index);
                tracing::debug!("Click: DropdownSelect({index})");
            }
        }

        // =====================================================================
        // Input field
        // =====================================================================
        ClickAction::InputFocus => {
            if let Some(WidgetInstance::Input(field)) = &mut app.widget {
                field.focus();
                tracing::debug!("Click: InputFocus");
            }
        }
        ClickAction::InputClear => {
            if let Some(WidgetInstance::Input(field)) = &mut app.widget {
                field.clear();
                tracing::debug!("Click: InputClear");
            }
        }

        // =====================================================================
        // CV sections
        // =====================================================================
        ClickAction::CvToggleLike(section) => {
            if let Some(WidgetInstance::Cv(cv)) = &mut app.widget {
                cv.toggle_liked(section);
                tracing::debug!(
                    likes = cv.like_count(),
                    "Click: CvToggleLike({:?})",
                    section
                );
            }
        }
        ClickAction::CvToggleExpand(section) => {
            if let Some(WidgetInstance::Cv(cv)) = &mut app.widget {
                let changed = cv.toggle_expanded(section);
                tracing::debug!(changed, "Click: CvToggleExpand({:?})", section);
            }
        }

        // =====================================================================
        // Fade-in demo
        // =====================================================================
        ClickAction::FadeToggle => {
            if let Some(WidgetInstance::Fade(demo)) = &mut app.widget {
                demo.toggle();
                tracing::debug!(visible = demo.visible, "Click: FadeToggle");
            }
        }
        ClickAction::FadeDurationUp => {
            if let Some(WidgetInstance::Fade(demo)) = &mut app.widget {
                demo.duration_up();
                tracing::debug!(duration_ms = demo.duration_ms, "Click: FadeDurationUp");
            }
        }
        ClickAction::FadeDurationDown => {
            if let Some(WidgetInstance::Fade(demo)) = &mut app.widget {
                demo.duration_down();
                tracing::debug!(duration_ms = demo.duration_ms, "Click: FadeDurationDown");
            }
        }
        ClickAction::FadeDelayUp => {
            if let Some(WidgetInstance::Fade(demo)) = &mut app.widget {
                demo.delay_up();
                tracing::debug!(delay_ms = demo.delay_ms, "Click: FadeDelayUp");
            }
        }
        ClickAction::FadeDelayDown => {
            if let Some(WidgetInstance::Fade(demo)) = &mut app.widget {
                demo.delay_down();
                tracing::debug!(delay_ms = demo.delay_ms, "Click: FadeDelayDown");
            }
        }

        // =====================================================================
        // Hero card
        // =====================================================================
        ClickAction::HeroHover => {
            // Hover-only region; a click changes nothing
            tracing::debug!("Click: HeroHover (inert)");
        }
    }
}
