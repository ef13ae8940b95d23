//! Hit area system for mouse interactions.
//!
//! This module provides a registry-based approach to handling clickable
//! regions in the TUI. Render code registers hit areas while drawing, and the
//! event loop queries the registry to determine what action a mouse event
//! should trigger.

use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::registry::Category;
use crate::widgets::cv::SectionId;

/// Represents an action that can be triggered by clicking a hit area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    // Navigation
    /// Switch to a category tab
    SelectTab(Category),
    /// Open the sidebar entry at the given index in the active category
    OpenEntry(usize),

    // Dropdown
    /// Open or close the live dropdown's menu
    DropdownToggle,
    /// Select the option at the given index in the open menu
    DropdownSelect(usize),

    // Input field
    /// Give the live input field focus
    InputFocus,
    /// Clear the live input field's value
    InputClear,

    // CV sections
    /// Toggle the like marker on a section
    CvToggleLike(SectionId),
    /// Toggle a section's expanded body
    CvToggleExpand(SectionId),

    // Fade-in demo
    /// Toggle visibility, restarting the animation
    FadeToggle,
    /// Step the fade duration up by one increment
    FadeDurationUp,
    /// Step the fade duration down by one increment
    FadeDurationDown,
    /// Step the start delay up by one increment
    FadeDelayUp,
    /// Step the start delay down by one increment
    FadeDelayDown,

    // Hero card
    /// Hover-tracking region over the hero card; clicks are inert
    HeroHover,
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    /// The rectangular region that responds to clicks
    pub rect: Rect,
    /// The action to trigger when this area is clicked
    pub action: ClickAction,
    /// Optional style to apply when hovering over this area
    pub hover_style: Option<Style>,
}

impl HitArea {
    /// Create a new hit area with the given rect and action.
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self {
            rect,
            action,
            hover_style: None,
        }
    }

    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x + self.rect.width
            && y >= self.rect.y
            && y < self.rect.y + self.rect.height
    }
}

/// Registry for managing hit areas across the UI.
///
/// Hit areas are registered during rendering and cleared at the start of each
/// render cycle. The registry supports hit testing (finding which area was
/// clicked) and hover tracking for visual feedback.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    /// All registered hit areas (order matters for overlapping regions)
    areas: Vec<HitArea>,
    /// Index of the currently hovered area (if any)
    hovered: Option<usize>,
}

impl HitAreaRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            areas: Vec::new(),
            hovered: None,
        }
    }

    /// Clear all registered areas and reset hover state.
    ///
    /// Call this at the start of each render cycle.
    pub fn clear(&mut self) {
        self.areas.clear();
        self.hovered = None;
    }

    /// Register a new hit area.
    ///
    /// Areas registered later take priority over earlier ones for overlapping
    /// regions (z-order: later = on top).
    pub fn register(&mut self, rect: Rect, action: ClickAction, hover_style: Option<Style>) {
        self.areas.push(HitArea {
            rect,
            action,
            hover_style,
        });
    }

    /// Perform a hit test at the given position.
    ///
    /// Returns the action for the topmost hit area containing the point,
    /// or None if no area was hit. Areas are checked in reverse order
    /// (last registered = highest priority).
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        // Iterate in reverse to check topmost (last registered) areas first
        for area in self.areas.iter().rev() {
            if area.contains(x, y) {
                return Some(area.action.clone());
            }
        }
        None
    }

    /// Update the hover state based on mouse position.
    ///
    /// Returns true if the hover state changed (requiring a redraw).
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        let new_hovered = self.find_hovered_index(x, y);
        let changed = new_hovered != self.hovered;
        self.hovered = new_hovered;
        changed
    }

    /// Find the index of the topmost area containing the given point.
    fn find_hovered_index(&self, x: u16, y: u16) -> Option<usize> {
        for (i, area) in self.areas.iter().enumerate().rev() {
            if area.contains(x, y) {
                return Some(i);
            }
        }
        None
    }

    /// Get the hover style for a rect if it matches the currently hovered area.
    ///
    /// This allows render code to apply hover styling to elements without
    /// needing to track hover state themselves.
    pub fn get_hover_style(&self, rect: Rect) -> Option<Style> {
        let hovered_area = self.areas.get(self.hovered?)?;
        if hovered_area.rect == rect {
            hovered_area.hover_style
        } else {
            None
        }
    }

    /// Check if any area is currently hovered.
    pub fn is_hovering(&self) -> bool {
        self.hovered.is_some()
    }

    /// Get the currently hovered area (if any).
    pub fn get_hovered(&self) -> Option<&HitArea> {
        self.hovered.and_then(|idx| self.areas.get(idx))
    }

    /// Get the number of registered areas.
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn make_rect(x: u16, y: u16, width: u16, height: u16) -> Rect {
        Rect::new(x, y, width, height)
    }

    #[test]
    fn test_hit_area_contains() {
        let area = HitArea::new(make_rect(10, 10, 20, 10), ClickAction::DropdownToggle);

        // Inside the area
        assert!(area.contains(10, 10)); // Top-left corner
        assert!(area.contains(29, 19)); // Bottom-right corner
        assert!(area.contains(20, 15)); // Center

        // Outside the area
        assert!(!area.contains(9, 10)); // Left of area
        assert!(!area.contains(30, 10)); // Right of area (x + width is exclusive)
        assert!(!area.contains(10, 20)); // Below area (y + height is exclusive)
    }

    #[test]
    fn test_hit_area_zero_size() {
        let area = HitArea::new(make_rect(5, 5, 0, 0), ClickAction::InputClear);
        assert!(!area.contains(5, 5));
    }

    #[test]
    fn test_registry_clear() {
        let mut registry = HitAreaRegistry::new();

        registry.register(make_rect(0, 0, 10, 10), ClickAction::InputFocus, None);
        registry.register(make_rect(10, 0, 10, 10), ClickAction::InputClear, None);
        assert_eq!(registry.len(), 2);

        registry.update_hover(5, 5);
        assert!(registry.is_hovering());

        registry.clear();
        assert_eq!(registry.len(), 0);
        assert!(!registry.is_hovering());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_hit_test_basic() {
        let mut registry = HitAreaRegistry::new();

        registry.register(
            make_rect(0, 0, 10, 10),
            ClickAction::SelectTab(Category::Components),
            None,
        );
        registry.register(
            make_rect(20, 0, 10, 10),
            ClickAction::SelectTab(Category::Layouts),
            None,
        );

        assert_eq!(
            registry.hit_test(5, 5),
            Some(ClickAction::SelectTab(Category::Components))
        );
        assert_eq!(
            registry.hit_test(25, 5),
            Some(ClickAction::SelectTab(Category::Layouts))
        );

        // Miss all areas
        assert_eq!(registry.hit_test(15, 5), None);
        assert_eq!(registry.hit_test(100, 100), None);
    }

    #[test]
    fn test_hit_test_overlapping_areas() {
        let mut registry = HitAreaRegistry::new();

        // Register overlapping areas - later ones should take priority
        registry.register(make_rect(0, 0, 20, 20), ClickAction::DropdownToggle, None);
        registry.register(
            make_rect(5, 5, 10, 10),
            ClickAction::DropdownSelect(2),
            None,
        );

        // Click in overlapping region - should hit top layer
        assert_eq!(
            registry.hit_test(10, 10),
            Some(ClickAction::DropdownSelect(2))
        );

        // Click outside inner area but inside outer - should hit bottom layer
        assert_eq!(registry.hit_test(2, 2), Some(ClickAction::DropdownToggle));
    }

    #[test]
    fn test_update_hover_returns_changed() {
        let mut registry = HitAreaRegistry::new();

        registry.register(make_rect(0, 0, 10, 10), ClickAction::HeroHover, None);
        registry.register(make_rect(20, 0, 10, 10), ClickAction::InputFocus, None);

        // Initial hover - should return true (changed from None)
        assert!(registry.update_hover(5, 5));

        // Same area, different position - should return false
        assert!(!registry.update_hover(8, 8));

        // Move to different area - should return true
        assert!(registry.update_hover(25, 5));

        // Move to no area - should return true
        assert!(registry.update_hover(100, 100));

        // Still in no area - should return false
        assert!(!registry.update_hover(200, 200));
    }

    #[test]
    fn test_get_hover_style() {
        let mut registry = HitAreaRegistry::new();

        let hover_style = Style::default().fg(Color::Yellow);
        let rect1 = make_rect(0, 0, 10, 10);
        let rect2 = make_rect(20, 0, 10, 10);

        registry.register(rect1, ClickAction::HeroHover, Some(hover_style));
        registry.register(rect2, ClickAction::InputFocus, None);

        // No hover yet
        assert_eq!(registry.get_hover_style(rect1), None);

        // Hover over first area
        registry.update_hover(5, 5);
        assert_eq!(registry.get_hover_style(rect1), Some(hover_style));
        assert_eq!(registry.get_hover_style(rect2), None);

        // Hover over second area (no hover style)
        registry.update_hover(25, 5);
        assert_eq!(registry.get_hover_style(rect1), None);
        assert_eq!(registry.get_hover_style(rect2), None);
    }

    #[test]
    fn test_get_hovered() {
        let mut registry = HitAreaRegistry::new();

        registry.register(
            make_rect(0, 0, 10, 10),
            ClickAction::CvToggleLike(SectionId::Profile),
            None,
        );

        assert!(registry.get_hovered().is_none());

        registry.update_hover(5, 5);
        let hovered = registry.get_hovered().unwrap();
        assert_eq!(hovered.action, ClickAction::CvToggleLike(SectionId::Profile));

        registry.update_hover(100, 100);
        assert!(registry.get_hovered().is_none());
    }
}
