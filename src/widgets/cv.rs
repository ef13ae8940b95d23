//! CV Layout
//!
//! A résumé page rendered as expandable section cards on a paper surface.
//! Readers like sections with a heart control; the contact section stays
//! locked until the page has collected enough likes, at which point it can
//! be expanded like any other section.

use std::collections::HashSet;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme::{COLOR_BORDER, COLOR_INK, COLOR_LIKE, COLOR_LOCKED, COLOR_MUTED, COLOR_PAPER_BG};

/// Likes required before the contact section unlocks.
pub const LIKE_THRESHOLD: usize = 4;

// ============================================================================
// Sections
// ============================================================================

/// The fixed CV sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Profile,
    Experience,
    Education,
    Skills,
    Contact,
}

impl SectionId {
    /// All sections in page order.
    pub const ALL: [SectionId; 5] = [
        SectionId::Profile,
        SectionId::Experience,
        SectionId::Education,
        SectionId::Skills,
        SectionId::Contact,
    ];

    /// Card heading.
    pub fn title(&self) -> &'static str {
        match self {
            SectionId::Profile => "Profile",
            SectionId::Experience => "Experience",
            SectionId::Education => "Education",
            SectionId::Skills => "Skills",
            SectionId::Contact => "Contact",
        }
    }

    /// Body text shown while the section is expanded.
    pub fn body(&self) -> &'static str {
        match self {
            SectionId::Profile => {
                "Tobias is a product designer with a decade of practice turning \
                 ambiguous briefs into shipped interfaces."
            }
            SectionId::Experience => {
                "Lead designer at a design systems studio; before that, staff \
                 designer across two early-stage startups."
            }
            SectionId::Education => "MA Interaction Design, Umea Institute of Design.",
            SectionId::Skills => {
                "Design systems, prototyping, motion design, accessibility \
                 audits, front-of-the-frontend engineering."
            }
            SectionId::Contact => "tobias@example.com \u{b7} +46 70 000 00 00 \u{b7} Stockholm",
        }
    }
}

// ============================================================================
// State
// ============================================================================

/// Interaction state for the CV page.
#[derive(Debug, Clone, Default)]
pub struct CvShowcase {
    liked: HashSet<SectionId>,
    expanded: HashSet<SectionId>,
    /// Keyboard cursor over the section list
    pub cursor: usize,
}

impl CvShowcase {
    /// Fresh page: nothing liked, nothing expanded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of liked sections.
    pub fn like_count(&self) -> usize {
        self.liked.len()
    }

    /// Whether a section is currently liked.
    pub fn is_liked(&self, section: SectionId) -> bool {
        self.liked.contains(&section)
    }

    /// Whether a section's body is currently shown.
    pub fn is_expanded(&self, section: SectionId) -> bool {
        self.expanded.contains(&section)
    }

    /// Whether the like threshold has been reached.
    pub fn is_unlocked(&self) -> bool {
        self.like_count() >= LIKE_THRESHOLD
    }

    /// Whether a section refuses to expand right now.
    ///
    /// Only the contact section ever locks, and only below the threshold.
    /// The lock is recomputed from the live count, so dropping back under
    /// the threshold re-locks it.
    pub fn is_locked(&self, section: SectionId) -> bool {
        section == SectionId::Contact && !self.is_unlocked()
    }

    /// Flip a section's like marker.
    ///
    /// Always allowed and idempotent in pairs; gating applies to expansion,
    /// never to liking.
    pub fn toggle_liked(&mut self, section: SectionId) {
        if !self.liked.remove(&section) {
            self.liked.insert(section);
        }
    }

    /// Flip a section's expanded body. Returns false when the section is
    /// locked and nothing changed.
    pub fn toggle_expanded(&mut self, section: SectionId) -> bool {
        if self.is_locked(section) {
            return false;
        }
        if !self.expanded.remove(&section) {
            self.expanded.insert(section);
        }
        true
    }

    /// The section under the keyboard cursor.
    pub fn current_section(&self) -> SectionId {
        SectionId::ALL[self.cursor.min(SectionId::ALL.len() - 1)]
    }

    /// Move the cursor up one section.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor down one section.
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < SectionId::ALL.len() {
            self.cursor += 1;
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Render the CV page: header with like meter, then one card per section.
pub fn render_cv(frame: &mut Frame, area: Rect, cv: &CvShowcase, hits: &mut HitAreaRegistry) {
    let paper = Block::default().style(Style::default().bg(COLOR_PAPER_BG).fg(COLOR_INK));
    frame.render_widget(paper, area);

    // Header: name and the like meter
    let header_area = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: 1,
    };
    let meter = if cv.is_unlocked() {
        format!("\u{2665} {} \u{b7} contact unlocked", cv.like_count())
    } else {
        format!("\u{2665} {} / {LIKE_THRESHOLD} to unlock contact", cv.like_count())
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                "Tobias Lindgren",
                Style::default().fg(COLOR_INK).add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(meter, Style::default().fg(COLOR_LIKE)),
        ])),
        header_area,
    );

    // Section cards
    let mut y = header_area.y + 2;
    for (i, section) in SectionId::ALL.into_iter().enumerate() {
        let locked = cv.is_locked(section);
        let expanded = cv.is_expanded(section);
        let body_rows = if expanded { 2 } else { 0 };
        let card_height = 3 + body_rows;
        if y + card_height > area.y + area.height {
            break;
        }

        let card_area = Rect {
            x: area.x + 2,
            y,
            width: area.width.saturating_sub(4),
            height: card_height,
        };

        let border_color = if locked { COLOR_LOCKED } else { COLOR_BORDER };
        let card = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));
        let inner = card.inner(card_area);
        frame.render_widget(card, card_area);

        // Title row: cursor marker, heading, then like or lock on the right
        let marker = if i == cv.cursor { "\u{25b8} " } else { "  " };
        let chevron = if locked {
            "\u{1f512}"
        } else if expanded {
            "\u{25be}"
        } else {
            "\u{25b8}"
        };
        let title_color = if locked { COLOR_LOCKED } else { COLOR_INK };
        let title_area = Rect {
            height: 1.min(inner.height),
            ..inner
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(COLOR_MUTED)),
                Span::styled(
                    section.title(),
                    Style::default().fg(title_color).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(chevron, Style::default().fg(COLOR_MUTED)),
            ])),
            title_area,
        );
        hits.register(title_area, ClickAction::CvToggleExpand(section), None);

        // Like control: hidden while the section is locked
        if !locked && inner.width > 4 {
            let heart = if cv.is_liked(section) {
                "\u{2665}"
            } else {
                "\u{2661}"
            };
            let like_area = Rect {
                x: inner.x + inner.width - 3,
                y: inner.y,
                width: 3,
                height: 1,
            };
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    format!(" {heart} "),
                    Style::default().fg(COLOR_LIKE),
                ))),
                like_area,
            );
            hits.register(
                like_area,
                ClickAction::CvToggleLike(section),
                Some(Style::default().fg(COLOR_LIKE).add_modifier(Modifier::BOLD)),
            );
        }

        // Expanded body
        if expanded && inner.height > 1 {
            let body_area = Rect {
                x: inner.x + 2,
                y: inner.y + 1,
                width: inner.width.saturating_sub(2),
                height: inner.height - 1,
            };
            frame.render_widget(
                Paragraph::new(section.body())
                    .style(Style::default().fg(COLOR_MUTED))
                    .wrap(Wrap { trim: true }),
                body_area,
            );
        }

        y += card_height;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_page_is_locked() {
        let cv = CvShowcase::new();
        assert_eq!(cv.like_count(), 0);
        assert!(!cv.is_unlocked());
        assert!(cv.is_locked(SectionId::Contact));
        assert!(!cv.is_locked(SectionId::Profile));
    }

    #[test]
    fn test_contact_expand_is_noop_while_locked() {
        let mut cv = CvShowcase::new();
        assert!(!cv.toggle_expanded(SectionId::Contact));
        assert!(!cv.is_expanded(SectionId::Contact));
    }

    #[test]
    fn test_unlocks_at_threshold() {
        let mut cv = CvShowcase::new();
        for section in [
            SectionId::Profile,
            SectionId::Experience,
            SectionId::Education,
            SectionId::Skills,
        ] {
            cv.toggle_liked(section);
        }
        assert!(cv.is_unlocked());
        assert!(cv.toggle_expanded(SectionId::Contact));
        assert!(cv.is_expanded(SectionId::Contact));
    }

    #[test]
    fn test_unliking_relocks_contact() {
        let mut cv = CvShowcase::new();
        for section in [
            SectionId::Profile,
            SectionId::Experience,
            SectionId::Education,
            SectionId::Skills,
        ] {
            cv.toggle_liked(section);
        }
        assert!(cv.is_unlocked());

        cv.toggle_liked(SectionId::Skills);
        assert_eq!(cv.like_count(), 3);
        assert!(cv.is_locked(SectionId::Contact));
        assert!(!cv.toggle_expanded(SectionId::Contact));
    }

    #[test]
    fn test_like_toggle_is_idempotent_in_pairs() {
        let mut cv = CvShowcase::new();
        cv.toggle_liked(SectionId::Profile);
        cv.toggle_liked(SectionId::Profile);
        assert_eq!(cv.like_count(), 0);
        assert!(!cv.is_liked(SectionId::Profile));
    }

    #[test]
    fn test_other_sections_expand_freely() {
        let mut cv = CvShowcase::new();
        assert!(cv.toggle_expanded(SectionId::Experience));
        assert!(cv.is_expanded(SectionId::Experience));
        assert!(cv.toggle_expanded(SectionId::Experience));
        assert!(!cv.is_expanded(SectionId::Experience));
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut cv = CvShowcase::new();
        cv.cursor_up();
        assert_eq!(cv.current_section(), SectionId::Profile);

        for _ in 0..10 {
            cv.cursor_down();
        }
        assert_eq!(cv.current_section(), SectionId::Contact);
    }
}
