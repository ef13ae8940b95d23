//! Application state.
//!
//! [`App`] owns the registry, the current view, and the mounted widget
//! instance. Widget state lives only while its entry is open: navigating
//! away drops the instance, and returning mounts a fresh one.

pub mod navigation;

use crate::registry::{Category, Registry, RegistryItem, WidgetKind};
use crate::ui::interaction::HitAreaRegistry;
use crate::widgets::cv::CvShowcase;
use crate::widgets::dropdown::Dropdown;
use crate::widgets::fade_in::FadeInDemo;
use crate::widgets::hero_card::HeroCard;
use crate::widgets::input_field::InputField;

/// Milliseconds per animation tick.
pub const TICK_MS: u64 = 16;

// ============================================================================
// Views and focus
// ============================================================================

/// What the preview pane is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Registry has no entries at all
    EmptyState,
    /// Category index listing
    Index(Category),
    /// One catalog entry's page
    Entry {
        /// Category the entry belongs to
        category: Category,
        /// Slug of the open entry
        slug: String,
    },
}

/// Which pane keyboard input goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move the sidebar selection
    Sidebar,
    /// Keys drive the mounted widget
    Preview,
}

// ============================================================================
// Mounted widget
// ============================================================================

/// The live widget instance for the open entry.
///
/// Created when an entry opens and dropped when navigation leaves it, so
/// every visit starts from the widget's initial state.
#[derive(Debug, Clone)]
pub enum WidgetInstance {
    Dropdown(Dropdown),
    Input(InputField),
    Hero(HeroCard),
    Cv(CvShowcase),
    TopNav,
    Split,
    Fade(FadeInDemo),
}

impl WidgetInstance {
    /// Mount a fresh instance for the given kind.
    pub fn mount(kind: WidgetKind) -> Self {
        match kind {
            WidgetKind::Dropdown => WidgetInstance::Dropdown(Dropdown::new()),
            WidgetKind::InputField => WidgetInstance::Input(InputField::new()),
            WidgetKind::HeroCard => WidgetInstance::Hero(HeroCard::new()),
            WidgetKind::CvLayout => WidgetInstance::Cv(CvShowcase::new()),
            WidgetKind::TopNavLayout => WidgetInstance::TopNav,
            WidgetKind::SplitLayout => WidgetInstance::Split,
            WidgetKind::FadeIn => WidgetInstance::Fade(FadeInDemo::new()),
        }
    }
}

// ============================================================================
// App
// ============================================================================

/// Top-level application state.
pub struct App {
    /// The immutable catalog
    pub registry: Registry,
    /// What the preview pane shows
    pub view: View,
    /// Which pane receives keyboard input
    pub focus: Focus,
    /// Sidebar selection within the active category
    pub sidebar_index: usize,
    /// Live widget for the open entry, if any
    pub widget: Option<WidgetInstance>,
    /// Clickable regions registered by the last render
    pub hit_registry: HitAreaRegistry,
    /// Whether the next loop iteration must redraw
    pub needs_redraw: bool,
    /// Set when the user quits
    pub should_quit: bool,
    /// Animation ticks since startup
    pub tick_count: u64,
}

impl App {
    /// Create the app at its root view.
    ///
    /// The root redirects to the first registered component; with no
    /// components the Components index is shown, and a fully empty registry
    /// gets the dedicated empty state.
    pub fn new(registry: Registry) -> Self {
        let mut app = Self {
            registry,
            view: View::EmptyState,
            focus: Focus::Sidebar,
            sidebar_index: 0,
            widget: None,
            hit_registry: HitAreaRegistry::new(),
            needs_redraw: true,
            should_quit: false,
            tick_count: 0,
        };

        if let Some(first) = app.registry.first_component() {
            let slug = first.slug.clone();
            // First component always resolves; ignore the impossible error
            let _ = app.open_route(crate::registry::Route::Entry {
                category: Category::Components,
                slug,
            });
        } else if !app.registry.is_empty() {
            app.view = View::Index(Category::Components);
        }
        app
    }

    /// The category the sidebar is showing.
    pub fn active_category(&self) -> Category {
        match &self.view {
            View::Index(category) => *category,
            View::Entry { category, .. } => *category,
            View::EmptyState => Category::Components,
        }
    }

    /// The open entry, if the view is an entry page.
    pub fn current_entry(&self) -> Option<&RegistryItem> {
        match &self.view {
            View::Entry { category, slug } => self.registry.lookup(*category, slug).ok(),
            _ => None,
        }
    }

    /// Advance animation state by one tick.
    pub fn tick(&mut self) {
        self.tick_count += 1;
        if let Some(WidgetInstance::Fade(demo)) = &mut self.widget {
            if demo.is_animating() {
                demo.tick(TICK_MS);
                self.needs_redraw = true;
            }
        }
    }

    /// Request a redraw on the next loop iteration.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Request shutdown.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Close the live dropdown's menu if it is open.
    ///
    /// Used for outside clicks and Esc. Returns true when something closed.
    pub fn close_open_menu(&mut self) -> bool {
        if let Some(WidgetInstance::Dropdown(dropdown)) = &mut self.widget {
            if dropdown.open {
                dropdown.toggle_open();
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;

    #[test]
    fn test_root_redirects_to_first_component() {
        let app = App::new(Registry::builtin());
        assert_eq!(
            app.view,
            View::Entry {
                category: Category::Components,
                slug: "dropdown".to_string()
            }
        );
        assert!(matches!(app.widget, Some(WidgetInstance::Dropdown(_))));
    }

    #[test]
    fn test_empty_registry_shows_empty_state() {
        let app = App::new(Registry::empty());
        assert_eq!(app.view, View::EmptyState);
        assert!(app.widget.is_none());
    }

    #[test]
    fn test_tick_advances_fade_animation() {
        let mut app = App::new(Registry::builtin());
        app.widget = Some(WidgetInstance::Fade(FadeInDemo::new()));
        app.needs_redraw = false;

        app.tick();
        assert!(app.needs_redraw);
        if let Some(WidgetInstance::Fade(demo)) = &app.widget {
            assert_eq!(demo.elapsed_ms, TICK_MS);
        } else {
            panic!("fade widget expected");
        }
    }

    #[test]
    fn test_close_open_menu() {
        let mut app = App::new(Registry::builtin());
        // Fresh dropdown is closed; nothing to do
        assert!(!app.close_open_menu());

        if let Some(WidgetInstance::Dropdown(dropdown)) = &mut app.widget {
            dropdown.toggle_open();
        }
        assert!(app.close_open_menu());
        assert!(!app.close_open_menu());
    }
}
