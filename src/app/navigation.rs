//! Navigation between categories and entries.
//!
//! All navigation funnels through [`App::open_route`], which is the single
//! place a widget gets mounted or unmounted.

use crate::error::RegistryError;
use crate::registry::{Category, Route};

use super::{App, Focus, View, WidgetInstance};

impl App {
    /// Navigate to a parsed route.
    ///
    /// Entry routes are validated against the registry; an unknown slug
    /// leaves the current view untouched and returns the lookup error.
    pub fn open_route(&mut self, route: Route) -> Result<(), RegistryError> {
        match route {
            Route::Index(category) => {
                self.view = View::Index(category);
                self.widget = None;
                self.sidebar_index = 0;
                self.focus = Focus::Sidebar;
            }
            Route::Entry { category, slug } => {
                let item = self.registry.lookup(category, &slug)?;
                let kind = item.kind;
                self.sidebar_index = self.registry.position(category, &slug).unwrap_or(0);
                self.view = View::Entry { category, slug };
                self.widget = Some(WidgetInstance::mount(kind));
            }
        }
        self.mark_dirty();
        Ok(())
    }

    /// Switch to a category tab.
    ///
    /// The components tab jumps straight to the first component's page;
    /// every other tab lands on the category's index listing.
    pub fn select_tab(&mut self, category: Category) {
        let route = match self.registry.entries(category).first() {
            Some(first) if category == Category::Components => Route::Entry {
                category,
                slug: first.slug.clone(),
            },
            _ => Route::Index(category),
        };
        // Both arms are known-valid, the entry slug came from the registry
        let _ = self.open_route(route);
    }

    /// Switch to the next category tab.
    pub fn next_tab(&mut self) {
        self.select_tab(self.active_category().next());
    }

    /// Switch to the previous category tab.
    pub fn prev_tab(&mut self) {
        self.select_tab(self.active_category().prev());
    }

    /// Move the sidebar selection up.
    pub fn move_up(&mut self) {
        if self.sidebar_index > 0 {
            self.sidebar_index -= 1;
            self.mark_dirty();
        }
    }

    /// Move the sidebar selection down.
    pub fn move_down(&mut self) {
        let count = self.registry.entries(self.active_category()).len();
        if self.sidebar_index + 1 < count {
            self.sidebar_index += 1;
            self.mark_dirty();
        }
    }

    /// Open the entry under the sidebar selection.
    pub fn open_selected(&mut self) {
        self.open_entry(self.sidebar_index);
    }

    /// Open the entry at `index` in the active category's display order.
    ///
    /// Out-of-range indices are ignored.
    pub fn open_entry(&mut self, index: usize) {
        let category = self.active_category();
        if let Some(item) = self.registry.entries(category).get(index) {
            let slug = item.slug.clone();
            let _ = self.open_route(Route::Entry { category, slug });
            self.focus = Focus::Preview;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{parse_path, Registry};

    fn app() -> App {
        App::new(Registry::builtin())
    }

    #[test]
    fn test_open_route_mounts_widget() {
        let mut app = app();
        app.open_route(parse_path("/layouts/tobias-cv").unwrap())
            .unwrap();

        assert_eq!(
            app.view,
            View::Entry {
                category: Category::Layouts,
                slug: "tobias-cv".to_string()
            }
        );
        assert!(matches!(app.widget, Some(WidgetInstance::Cv(_))));
        assert_eq!(app.sidebar_index, 0);
    }

    #[test]
    fn test_open_route_unknown_slug_keeps_view() {
        let mut app = app();
        let before = app.view.clone();

        let err = app
            .open_route(parse_path("/layouts/missing").unwrap())
            .unwrap_err();
        assert!(matches!(err, RegistryError::UnknownSlug { .. }));
        assert_eq!(app.view, before);
    }

    #[test]
    fn test_navigation_unmounts_previous_widget() {
        let mut app = app();

        // Mutate the dropdown, then navigate away and back
        if let Some(WidgetInstance::Dropdown(dropdown)) = &mut app.widget {
            dropdown.select(2);
        }
        app.open_route(parse_path("/layouts/tobias-cv").unwrap())
            .unwrap();
        app.open_route(parse_path("/components/dropdown").unwrap())
            .unwrap();

        // Remounted fresh: the earlier selection is gone
        match &app.widget {
            Some(WidgetInstance::Dropdown(dropdown)) => assert!(dropdown.selected.is_empty()),
            other => panic!("dropdown expected, got {other:?}"),
        }
    }

    #[test]
    fn test_components_tab_opens_first_entry() {
        let mut app = app();
        app.select_tab(Category::Layouts);
        app.select_tab(Category::Components);
        assert_eq!(
            app.view,
            View::Entry {
                category: Category::Components,
                slug: "dropdown".to_string()
            }
        );
    }

    #[test]
    fn test_other_tabs_show_index() {
        let mut app = app();
        app.select_tab(Category::Layouts);
        assert_eq!(app.view, View::Index(Category::Layouts));
        assert!(app.widget.is_none());

        app.select_tab(Category::Animations);
        assert_eq!(app.view, View::Index(Category::Animations));
    }

    #[test]
    fn test_tab_cycling_wraps() {
        let mut app = app();
        app.next_tab();
        assert_eq!(app.active_category(), Category::Layouts);
        app.next_tab();
        assert_eq!(app.active_category(), Category::Animations);
        app.next_tab();
        assert_eq!(app.active_category(), Category::Components);
        app.prev_tab();
        assert_eq!(app.active_category(), Category::Animations);
    }

    #[test]
    fn test_sidebar_movement_clamps() {
        let mut app = app();
        app.move_up();
        assert_eq!(app.sidebar_index, 0);

        for _ in 0..10 {
            app.move_down();
        }
        // Three components registered
        assert_eq!(app.sidebar_index, 2);
    }

    #[test]
    fn test_open_selected_follows_cursor() {
        let mut app = app();
        app.move_down();
        app.open_selected();
        assert_eq!(
            app.view,
            View::Entry {
                category: Category::Components,
                slug: "input-field".to_string()
            }
        );
        assert_eq!(app.focus, Focus::Preview);
    }

    #[test]
    fn test_select_empty_tab_shows_index() {
        let registry = Registry::new(
            vec![crate::registry::RegistryItem::new(
                "dropdown",
                "Dropdown",
                crate::registry::WidgetKind::Dropdown,
            )],
            Vec::new(),
            Vec::new(),
        );
        let mut app = App::new(registry);
        app.select_tab(Category::Layouts);
        assert_eq!(app.view, View::Index(Category::Layouts));
        assert!(app.widget.is_none());
    }
}
