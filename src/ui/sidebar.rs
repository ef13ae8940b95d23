//! Sidebar: the catalog listing for the active category.
//!
//! One row per registry entry, with a cursor marker and a highlight on the
//! open entry. Every row is a click target.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus, View};

use super::interaction::ClickAction;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};

/// Render the sidebar and register a hit area per entry row.
pub fn render_sidebar(frame: &mut Frame, area: Rect, app: &mut App) {
    let category = app.active_category();
    let focused = app.focus == Focus::Sidebar;

    let border_color = if focused { COLOR_ACCENT } else { COLOR_BORDER };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            " Design Sandbox ",
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Category heading
    if inner.height == 0 {
        return;
    }
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            category.title().to_uppercase(),
            Style::default().fg(COLOR_DIM),
        ))),
        Rect { height: 1, ..inner },
    );

    let entries = app.registry.entries(category);
    if entries.is_empty() {
        if inner.height > 2 {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    format!("No {category} yet"),
                    Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
                ))),
                Rect {
                    y: inner.y + 2,
                    height: 1,
                    ..inner
                },
            );
        }
        return;
    }

    let open_slug = match &app.view {
        View::Entry { slug, .. } => Some(slug.as_str()),
        _ => None,
    };

    for (i, item) in entries.iter().enumerate() {
        let y = inner.y + 2 + i as u16;
        if y >= inner.y + inner.height {
            break;
        }
        let row = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height: 1,
        };

        let is_cursor = i == app.sidebar_index;
        let is_open = open_slug == Some(item.slug.as_str());

        let marker = if is_cursor && focused { "\u{25b8} " } else { "  " };
        let mut style = Style::default().fg(if is_open { COLOR_ACCENT } else { COLOR_DIM });
        if is_open {
            style = style.add_modifier(Modifier::BOLD);
        }

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(COLOR_ACCENT)),
                Span::styled(item.name.clone(), style),
            ])),
            row,
        );
        app.hit_registry.register(
            row,
            ClickAction::OpenEntry(i),
            Some(Style::default().fg(COLOR_ACCENT)),
        );
    }
}
