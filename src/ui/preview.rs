//! Preview pane: entry pages and category index listings.
//!
//! Grid-mode entries render a gallery of forced-state tiles followed by one
//! live instance; full-width entries hand the whole pane to the widget.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus, View, WidgetInstance};
use crate::registry::Category;
use crate::widgets::dropdown::{render_dropdown, Dropdown};
use crate::widgets::fade_in::render_fade_in;
use crate::widgets::hero_card::render_hero_card;
use crate::widgets::input_field::{render_input_field, InputField};
use crate::widgets::layouts::{render_split_layout, render_top_nav_layout};
use crate::widgets::state::VisualState;
use crate::widgets::cv::render_cv;

use super::interaction::ClickAction;
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_CANVAS_BG, COLOR_DIM};

/// Rows per gallery tile, outer border included.
const TILE_HEIGHT: u16 = 9;

/// Render the preview pane for the current view.
pub fn render_preview(frame: &mut Frame, area: Rect, app: &mut App, ctx: &LayoutContext) {
    let focused = app.focus == Focus::Preview;
    let border_color = if focused { COLOR_ACCENT } else { COLOR_BORDER };

    let view = app.view.clone();
    let title = match &view {
        View::Entry { category, slug } => format!(" /{category}/{slug} "),
        View::Index(category) => format!(" /{category} "),
        View::EmptyState => " swatch ".to_string(),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(title, Style::default().fg(COLOR_DIM)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match view {
        View::EmptyState => render_empty_state(frame, inner),
        View::Index(category) => render_index(frame, inner, app, category),
        View::Entry { category, slug } => {
            let Ok(item) = app.registry.lookup(category, &slug) else {
                return;
            };
            let name = item.name.clone();

            // Header: entry name
            if inner.height == 0 {
                return;
            }
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    name,
                    Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
                ))),
                Rect { height: 1, ..inner },
            );

            let content = Rect {
                x: inner.x,
                y: inner.y + 2,
                width: inner.width,
                height: inner.height.saturating_sub(2),
            };
            if content.height == 0 {
                return;
            }

            match &app.widget {
                Some(WidgetInstance::Dropdown(live)) => {
                    let live = live.clone();
                    render_dropdown_gallery(frame, content, app, &live, ctx);
                }
                Some(WidgetInstance::Input(live)) => {
                    let live = live.clone();
                    render_input_gallery(frame, content, app, &live, ctx);
                }
                Some(WidgetInstance::Hero(card)) => {
                    frame.render_widget(
                        Block::default().style(Style::default().bg(COLOR_CANVAS_BG)),
                        content,
                    );
                    let card_area = Rect {
                        x: content.x + 2,
                        y: content.y + 1,
                        width: content.width.saturating_sub(4).min(44),
                        height: content.height.saturating_sub(2).min(8),
                    };
                    let card = card.clone();
                    render_hero_card(frame, card_area, &card, &mut app.hit_registry);
                }
                Some(WidgetInstance::Cv(cv)) => {
                    let cv = cv.clone();
                    render_cv(frame, content, &cv, &mut app.hit_registry);
                }
                Some(WidgetInstance::TopNav) => render_top_nav_layout(frame, content),
                Some(WidgetInstance::Split) => render_split_layout(frame, content),
                Some(WidgetInstance::Fade(demo)) => {
                    let demo = demo.clone();
                    render_fade_in(frame, content, &demo, &mut app.hit_registry);
                }
                None => {}
            }
        }
    }
}

/// The dedicated page shown when the registry has no entries at all.
fn render_empty_state(frame: &mut Frame, area: Rect) {
    if area.height < 2 {
        return;
    }
    let message_area = Rect {
        x: area.x + 2,
        y: area.y + area.height / 2,
        width: area.width.saturating_sub(4),
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "No components registered yet.",
            Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
        ))),
        message_area,
    );
}

/// Category index listing: one row per entry with its path.
fn render_index(frame: &mut Frame, area: Rect, app: &mut App, category: Category) {
    let rows: Vec<(String, String)> = app
        .registry
        .entries(category)
        .iter()
        .map(|item| (item.name.clone(), format!("/{category}/{}", item.slug)))
        .collect();

    if rows.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("No {category} yet."),
                Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
            ))),
            Rect {
                height: 1.min(area.height),
                ..area
            },
        );
        return;
    }

    for (i, (name, path)) in rows.iter().enumerate() {
        let y = area.y + i as u16;
        if y >= area.y + area.height {
            break;
        }
        let row = Rect {
            x: area.x,
            y,
            width: area.width,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(name.clone(), Style::default().fg(COLOR_ACCENT)),
                Span::raw("  "),
                Span::styled(path.clone(), Style::default().fg(COLOR_DIM)),
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

/// Lay out `count` gallery cells over `cols` columns.
fn gallery_cell(area: Rect, index: usize, cols: u16) -> Rect {
    let col = index as u16 % cols;
    let row = index as u16 / cols;
    let width = area.width / cols;
    Rect {
        x: area.x + col * width,
        y: area.y + row * TILE_HEIGHT,
        width,
        height: TILE_HEIGHT,
    }
}

/// One bordered gallery tile; returns the inner content rect.
fn tile_frame(frame: &mut Frame, cell: Rect, label: &str, live: bool) -> Rect {
    let color = if live { COLOR_ACCENT } else { COLOR_BORDER };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(COLOR_CANVAS_BG))
        .title(Span::styled(
            format!(" {label} "),
            Style::default().fg(if live { COLOR_ACCENT } else { COLOR_DIM }),
        ));
    let inner = block.inner(cell);
    frame.render_widget(block, cell);
    inner
}

/// Forced-state tiles for every dropdown state, then the live instance.
fn render_dropdown_gallery(
    frame: &mut Frame,
    area: Rect,
    app: &mut App,
    live: &Dropdown,
    ctx: &LayoutContext,
) {
    let cols = ctx.gallery_columns();
    let mut index = 0;

    for state in VisualState::ALL {
        let cell = gallery_cell(area, index, cols);
        if cell.y + cell.height > area.y + area.height {
            break;
        }
        let inner = tile_frame(frame, cell, state.label(), false);
        let tile = Dropdown::preview(state);
        render_dropdown(frame, inner, &tile, &mut app.hit_registry, false);
        index += 1;
    }

    let cell = gallery_cell(area, index, cols);
    if cell.y + cell.height <= area.y + area.height {
        let inner = tile_frame(frame, cell, "Live", true);
        render_dropdown(frame, inner, live, &mut app.hit_registry, true);
    }
}

/// Forced-state tiles for the input field, then the live instance.
///
/// The multi-value state does not apply to a single-line input, so its tile
/// is skipped.
fn render_input_gallery(
    frame: &mut Frame,
    area: Rect,
    app: &mut App,
    live: &InputField,
    ctx: &LayoutContext,
) {
    let states = [
        VisualState::Default,
        VisualState::Focused,
        VisualState::Selected,
        VisualState::Error,
        VisualState::Disabled,
    ];
    let cols = ctx.gallery_columns();
    let mut index = 0;

    for state in states {
        let cell = gallery_cell(area, index, cols);
        if cell.y + cell.height > area.y + area.height {
            break;
        }
        let inner = tile_frame(frame, cell, state.label(), false);
        let tile = InputField::preview(state);
        render_input_field(frame, inner, &tile, &mut app.hit_registry, false);
        index += 1;
    }

    let cell = gallery_cell(area, index, cols);
    if cell.y + cell.height <= area.y + area.height {
        let inner = tile_frame(frame, cell, "Live", true);
        render_input_field(frame, inner, live, &mut app.hit_registry, true);
    }
}
