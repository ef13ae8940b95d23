//! UI rendering for the swatch design sandbox
//!
//! Implements the two-pane shell: a sidebar listing the active category's
//! entries and a preview pane showing the open entry, with a bottom bar
//! carrying the category tabs and key hints.
//!
//! All clickable regions are registered into the app's `HitAreaRegistry`
//! during the render pass; the registry is cleared at the start of every
//! frame so hit areas always match what is on screen.

pub mod interaction;
pub mod layout;
mod preview;
mod sidebar;
pub mod theme;

pub use layout::{breakpoints, LayoutContext};

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, View, WidgetInstance};
use crate::registry::Category;

use interaction::ClickAction;
use preview::render_preview;
use sidebar::render_sidebar;
use theme::{COLOR_ACCENT, COLOR_DIM};

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render one frame of the UI.
pub fn render(frame: &mut Frame, app: &mut App) {
    app.hit_registry.clear();

    let size = frame.area();
    let ctx = LayoutContext::new(size.width, size.height);

    let body = Rect {
        height: size.height.saturating_sub(1),
        ..size
    };
    let bottom = Rect {
        y: size.y + body.height,
        height: size.height - body.height,
        ..size
    };

    if app.view == View::EmptyState || ctx.should_collapse_sidebar() {
        render_preview(frame, body, app, &ctx);
    } else {
        let sidebar_width = ctx.sidebar_width();
        let sidebar_area = Rect {
            width: sidebar_width,
            ..body
        };
        let preview_area = Rect {
            x: body.x + sidebar_width,
            width: body.width - sidebar_width,
            ..body
        };
        render_sidebar(frame, sidebar_area, app);
        render_preview(frame, preview_area, app, &ctx);
    }

    render_bottom_bar(frame, bottom, app, &ctx);
}

/// Bottom bar: clickable category tabs on the left, key hints on the right.
fn render_bottom_bar(frame: &mut Frame, area: Rect, app: &mut App, ctx: &LayoutContext) {
    if area.height == 0 {
        return;
    }
    let active = app.active_category();

    let mut spans = Vec::new();
    let mut x = area.x;
    for category in Category::ALL {
        let label = format!(" {} ", category.title());
        let style = if category == active {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        let tab_rect = Rect {
            x,
            y: area.y,
            width: (label.len() as u16).min(area.width.saturating_sub(x - area.x)),
            height: 1,
        };
        app.hit_registry.register(
            tab_rect,
            ClickAction::SelectTab(category),
            Some(Style::default().fg(COLOR_ACCENT)),
        );
        x += label.len() as u16;
        spans.push(Span::styled(label, style));
    }

    if !ctx.is_compact() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(hint_text(app), Style::default().fg(COLOR_DIM)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Key hints tailored to the mounted widget.
fn hint_text(app: &App) -> &'static str {
    match &app.widget {
        Some(WidgetInstance::Dropdown(_)) => {
            "Tab category \u{b7} \u{2191}\u{2193} move \u{b7} Enter open/select \u{b7} Esc close \u{b7} q quit"
        }
        Some(WidgetInstance::Input(_)) => {
            "Tab category \u{b7} Enter focus \u{b7} type to edit \u{b7} Ctrl+U clear \u{b7} q quit"
        }
        Some(WidgetInstance::Cv(_)) => {
            "Tab category \u{b7} \u{2191}\u{2193} section \u{b7} Enter expand \u{b7} Space like \u{b7} q quit"
        }
        Some(WidgetInstance::Fade(_)) => {
            "Tab category \u{b7} Space replay \u{b7} [ ] duration \u{b7} , . delay \u{b7} q quit"
        }
        _ => "Tab category \u{b7} \u{2191}\u{2193} move \u{b7} Enter open \u{b7} q quit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{parse_path, Registry};
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_string(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn draw(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        buffer_string(&terminal)
    }

    #[test]
    fn test_full_frame_renders_shell() {
        let mut app = App::new(Registry::builtin());
        let buffer = draw(&mut app, 100, 40);

        assert!(buffer.contains("Design Sandbox"));
        assert!(buffer.contains("Components"));
        assert!(buffer.contains("Layouts"));
        assert!(buffer.contains("Animations"));
        assert!(buffer.contains("/components/dropdown"));
    }

    #[test]
    fn test_hit_areas_rebuilt_each_frame() {
        let mut app = App::new(Registry::builtin());
        draw(&mut app, 100, 40);
        let first = app.hit_registry.len();
        assert!(first > 0);

        draw(&mut app, 100, 40);
        // Cleared and re-registered, not accumulated
        assert_eq!(app.hit_registry.len(), first);
    }

    #[test]
    fn test_narrow_terminal_drops_sidebar() {
        let mut app = App::new(Registry::builtin());
        let buffer = draw(&mut app, 50, 24);

        assert!(!buffer.contains("Design Sandbox"));
        // Tabs remain reachable in the bottom bar
        assert!(buffer.contains("Components"));
    }

    #[test]
    fn test_empty_registry_renders_empty_state() {
        let mut app = App::new(Registry::empty());
        let buffer = draw(&mut app, 80, 24);
        assert!(buffer.contains("No components registered yet."));
    }

    #[test]
    fn test_layout_entry_renders_skeleton() {
        let mut app = App::new(Registry::builtin());
        app.open_route(parse_path("/layouts/test-layout-3").unwrap())
            .unwrap();
        let buffer = draw(&mut app, 100, 40);

        assert!(buffer.contains("Test Layout 3"));
        assert!(buffer.contains("sidebar"));
        assert!(buffer.contains("main"));
    }
}
