//! Project Hero Card
//!
//! A static promotional card whose call-to-action only appears on hover.
//! Hover is synced from mouse-move events; there is no click behavior.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_MUTED, COLOR_SURFACE_BG};

/// State for the hero card: just the hover flag.
#[derive(Debug, Clone, Default)]
pub struct HeroCard {
    /// Whether the pointer is over the card
    pub hovered: bool,
}

impl HeroCard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the hover flag. Returns true when it changed.
    pub fn set_hovered(&mut self, hovered: bool) -> bool {
        let changed = self.hovered != hovered;
        self.hovered = hovered;
        changed
    }
}

/// Render the hero card and register its hover-tracking area.
pub fn render_hero_card(frame: &mut Frame, area: Rect, card: &HeroCard, hits: &mut HitAreaRegistry) {
    let border_color = if card.hovered { COLOR_ACCENT } else { COLOR_BORDER };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_SURFACE_BG));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "ATELIER NORD",
            Style::default().fg(COLOR_MUTED),
        )),
        Line::from(Span::styled(
            "Wayfinding for the Harbor District",
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Identity, signage, and a map system for a reclaimed waterfront.",
            Style::default().fg(COLOR_DIM),
        )),
    ];

    // The call-to-action is only revealed while hovered
    if card.hovered {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "VOIR \u{2192}",
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
    hits.register(area, ClickAction::HeroHover, None);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_hovered_reports_change() {
        let mut card = HeroCard::new();
        assert!(!card.hovered);

        assert!(card.set_hovered(true));
        assert!(card.hovered);

        // Same value again is not a change
        assert!(!card.set_hovered(true));
        assert!(card.set_hovered(false));
    }
}
