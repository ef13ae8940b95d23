//! Fade-In Demo
//!
//! A tick-driven opacity animation: a block of text fades from the canvas
//! color to full ink over a configurable duration, after a configurable
//! delay. Toggling visibility or adjusting either knob restarts the run.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme::{
    COLOR_ACCENT, COLOR_CANVAS_BG, COLOR_DIM, COLOR_MUTED, COLOR_PAPER_BG, COLOR_SURFACE_BG,
};

/// Animation duration bounds and step, in milliseconds.
pub const DURATION_MIN_MS: u64 = 100;
pub const DURATION_MAX_MS: u64 = 2000;
/// Start delay bounds, in milliseconds.
pub const DELAY_MAX_MS: u64 = 2000;
/// Knob adjustment increment.
pub const STEP_MS: u64 = 100;

// ============================================================================
// State
// ============================================================================

/// State for one fade-in run.
#[derive(Debug, Clone)]
pub struct FadeInDemo {
    /// Whether the subject is shown (and therefore animating or settled)
    pub visible: bool,
    /// Fade duration in milliseconds
    pub duration_ms: u64,
    /// Delay before the fade starts, in milliseconds
    pub delay_ms: u64,
    /// Time elapsed since the current run started
    pub elapsed_ms: u64,
}

impl Default for FadeInDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl FadeInDemo {
    /// A visible demo at the default 500ms fade with no delay.
    pub fn new() -> Self {
        Self {
            visible: true,
            duration_ms: 500,
            delay_ms: 0,
            elapsed_ms: 0,
        }
    }

    /// Toggle visibility. Showing restarts the run from zero.
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        self.elapsed_ms = 0;
    }

    /// Advance the animation clock. Call once per tick while animating.
    pub fn tick(&mut self, delta_ms: u64) {
        if self.is_animating() {
            self.elapsed_ms += delta_ms;
        }
    }

    /// Whether the run still has frames left to show.
    pub fn is_animating(&self) -> bool {
        self.visible && self.elapsed_ms < self.delay_ms + self.duration_ms
    }

    /// Current opacity in `0.0..=1.0`.
    ///
    /// Zero while hidden or still inside the delay window, then a linear
    /// ramp over the duration, clamped at one.
    pub fn opacity(&self) -> f32 {
        if !self.visible || self.elapsed_ms <= self.delay_ms {
            return 0.0;
        }
        let progress = (self.elapsed_ms - self.delay_ms) as f32 / self.duration_ms as f32;
        progress.min(1.0)
    }

    /// Lengthen the fade by one step, clamped, restarting the run.
    pub fn duration_up(&mut self) {
        self.duration_ms = (self.duration_ms + STEP_MS).min(DURATION_MAX_MS);
        self.elapsed_ms = 0;
    }

    /// Shorten the fade by one step, clamped, restarting the run.
    pub fn duration_down(&mut self) {
        self.duration_ms = self.duration_ms.saturating_sub(STEP_MS).max(DURATION_MIN_MS);
        self.elapsed_ms = 0;
    }

    /// Lengthen the start delay by one step, clamped, restarting the run.
    pub fn delay_up(&mut self) {
        self.delay_ms = (self.delay_ms + STEP_MS).min(DELAY_MAX_MS);
        self.elapsed_ms = 0;
    }

    /// Shorten the start delay by one step, clamped, restarting the run.
    pub fn delay_down(&mut self) {
        self.delay_ms = self.delay_ms.saturating_sub(STEP_MS);
        self.elapsed_ms = 0;
    }
}

/// Linear blend between two RGB colors; `t` of 0 is `from`, 1 is `to`.
/// Non-RGB colors pass through as `to`.
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(fr, fg, fb), Color::Rgb(tr, tg, tb)) => {
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            Color::Rgb(mix(fr, tr), mix(fg, tg), mix(fb, tb))
        }
        _ => to,
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Render the full-width fade demo: the fading subject plus its control row.
pub fn render_fade_in(frame: &mut Frame, area: Rect, demo: &FadeInDemo, hits: &mut HitAreaRegistry) {
    let canvas = Block::default().style(Style::default().bg(COLOR_CANVAS_BG));
    frame.render_widget(canvas, area);

    // Subject block
    let subject_area = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(5).max(3),
    };
    let ink = blend(COLOR_CANVAS_BG, COLOR_PAPER_BG, demo.opacity());
    let subject = Paragraph::new(vec![
        Line::from(Span::styled(
            "Hello.",
            Style::default().fg(ink).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "This block fades in from the canvas color.",
            Style::default().fg(ink),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(blend(COLOR_CANVAS_BG, COLOR_MUTED, demo.opacity()))),
    );
    frame.render_widget(subject, subject_area);

    // Control row
    let controls_y = subject_area.y + subject_area.height + 1;
    if controls_y >= area.y + area.height {
        return;
    }
    let controls_area = Rect {
        x: area.x + 2,
        y: controls_y,
        width: area.width.saturating_sub(4),
        height: 1,
    };

    let toggle_label = if demo.visible { "[hide]" } else { "[show]" };
    let duration_label = format!("[-] duration {}ms [+]", demo.duration_ms);
    let delay_label = format!("[-] delay {}ms [+]", demo.delay_ms);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(toggle_label, Style::default().fg(COLOR_ACCENT).bg(COLOR_SURFACE_BG)),
            Span::raw("  "),
            Span::styled(duration_label.clone(), Style::default().fg(COLOR_DIM)),
            Span::raw("  "),
            Span::styled(delay_label.clone(), Style::default().fg(COLOR_DIM)),
        ])),
        controls_area,
    );

    // Hit areas mirror the rendered spans, left to right
    let hover = Some(Style::default().fg(COLOR_ACCENT));
    let mut x = controls_area.x;
    let row = |x: u16, w: u16| Rect {
        x,
        y: controls_area.y,
        width: w,
        height: 1,
    };

    hits.register(row(x, toggle_label.len() as u16), ClickAction::FadeToggle, hover);
    x += toggle_label.len() as u16 + 2;

    // duration: the leading [-] and trailing [+]
    hits.register(row(x, 3), ClickAction::FadeDurationDown, hover);
    hits.register(
        row(x + duration_label.len() as u16 - 3, 3),
        ClickAction::FadeDurationUp,
        hover,
    );
    x += duration_label.len() as u16 + 2;

    hits.register(row(x, 3), ClickAction::FadeDelayDown, hover);
    hits.register(
        row(x + delay_label.len() as u16 - 3, 3),
        ClickAction::FadeDelayUp,
        hover,
    );
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opacity_ramps_linearly() {
        let mut demo = FadeInDemo::new();
        assert_eq!(demo.opacity(), 0.0);

        demo.tick(250);
        assert!((demo.opacity() - 0.5).abs() < 0.01);

        demo.tick(250);
        assert!((demo.opacity() - 1.0).abs() < f32::EPSILON);
        assert!(!demo.is_animating());
    }

    #[test]
    fn test_delay_holds_opacity_at_zero() {
        let mut demo = FadeInDemo::new();
        demo.delay_ms = 200;

        demo.tick(200);
        assert_eq!(demo.opacity(), 0.0);
        assert!(demo.is_animating());

        demo.tick(250);
        assert!((demo.opacity() - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_hidden_is_fully_transparent() {
        let mut demo = FadeInDemo::new();
        demo.tick(500);
        demo.toggle();
        assert!(!demo.visible);
        assert_eq!(demo.opacity(), 0.0);
        assert!(!demo.is_animating());
    }

    #[test]
    fn test_toggle_restarts_run() {
        let mut demo = FadeInDemo::new();
        demo.tick(500);
        demo.toggle();
        demo.toggle();
        assert!(demo.visible);
        assert_eq!(demo.elapsed_ms, 0);
        assert!(demo.is_animating());
    }

    #[test]
    fn test_knobs_clamp_and_restart() {
        let mut demo = FadeInDemo::new();

        for _ in 0..30 {
            demo.duration_up();
        }
        assert_eq!(demo.duration_ms, DURATION_MAX_MS);

        for _ in 0..30 {
            demo.duration_down();
        }
        assert_eq!(demo.duration_ms, DURATION_MIN_MS);

        for _ in 0..30 {
            demo.delay_up();
        }
        assert_eq!(demo.delay_ms, DELAY_MAX_MS);

        for _ in 0..30 {
            demo.delay_down();
        }
        assert_eq!(demo.delay_ms, 0);

        demo.tick(50);
        demo.duration_up();
        assert_eq!(demo.elapsed_ms, 0);
    }

    #[test]
    fn test_blend_endpoints() {
        let a = Color::Rgb(0, 0, 0);
        let b = Color::Rgb(100, 200, 50);
        assert_eq!(blend(a, b, 0.0), a);
        assert_eq!(blend(a, b, 1.0), b);
        assert_eq!(blend(a, b, 0.5), Color::Rgb(50, 100, 25));
    }
}
