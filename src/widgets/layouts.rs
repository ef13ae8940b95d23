//! Static Layout Skeletons
//!
//! Two non-interactive page layouts: a top-nav page and a top-nav plus
//! sidebar split. They exist to preview page chrome, so they render greeked
//! placeholder blocks and register no hit areas.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_SURFACE_BG};

/// A greeked content block with a caption.
fn placeholder(frame: &mut Frame, area: Rect, caption: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_SURFACE_BG));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            caption.to_string(),
            Style::default().fg(COLOR_DIM),
        ))),
        inner,
    );
}

/// The shared top navigation bar.
fn nav_bar(frame: &mut Frame, area: Rect) {
    let bar = Paragraph::new(Line::from(vec![
        Span::styled(
            "LOGO",
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        Span::styled("Home   Work   About   Contact", Style::default().fg(COLOR_DIM)),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(COLOR_BORDER)),
    );
    frame.render_widget(bar, area);
}

/// Top-nav layout: nav bar over a single content column.
pub fn render_top_nav_layout(frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(4),
        ])
        .split(area);

    nav_bar(frame, rows[0]);
    placeholder(frame, rows[1], "content");
    placeholder(frame, rows[2], "footer");
}

/// Split layout: nav bar over a sidebar and main column.
pub fn render_split_layout(frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(3)])
        .split(area);

    nav_bar(frame, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
        .split(rows[1]);

    placeholder(frame, columns[0], "sidebar");
    placeholder(frame, columns[1], "main");
}
