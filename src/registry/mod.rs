//! The showcase registry: a static catalog mapping slugs to renderable entries.
//!
//! The registry is built once at startup ([`Registry::builtin`]) and passed by
//! reference to everything that reads it. There is no global mutable state;
//! entries are immutable after construction and keep their insertion order,
//! which doubles as display order.

mod route;

pub use route::{parse_path, Route};

use serde::Serialize;
use std::fmt;

use crate::error::RegistryError;

// ============================================================================
// Categories
// ============================================================================

/// Top-level catalog category, one per navigation tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Reusable UI components (dropdowns, inputs, cards)
    Components,
    /// Full page layout skeletons
    Layouts,
    /// Animation demos
    Animations,
}

impl Category {
    /// All categories in tab order.
    pub const ALL: [Category; 3] = [
        Category::Components,
        Category::Layouts,
        Category::Animations,
    ];

    /// The URL path segment for this category (`/components/...`).
    pub fn as_segment(&self) -> &'static str {
        match self {
            Category::Components => "components",
            Category::Layouts => "layouts",
            Category::Animations => "animations",
        }
    }

    /// Parse a path segment into a category.
    pub fn from_segment(segment: &str) -> Option<Category> {
        match segment {
            "components" => Some(Category::Components),
            "layouts" => Some(Category::Layouts),
            "animations" => Some(Category::Animations),
            _ => None,
        }
    }

    /// Human-readable title for headers ("Components").
    pub fn title(&self) -> &'static str {
        match self {
            Category::Components => "Components",
            Category::Layouts => "Layouts",
            Category::Animations => "Animations",
        }
    }

    /// The next category in tab order, wrapping around.
    pub fn next(&self) -> Category {
        match self {
            Category::Components => Category::Layouts,
            Category::Layouts => Category::Animations,
            Category::Animations => Category::Components,
        }
    }

    /// The previous category in tab order, wrapping around.
    pub fn prev(&self) -> Category {
        match self {
            Category::Components => Category::Animations,
            Category::Layouts => Category::Components,
            Category::Animations => Category::Layouts,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_segment())
    }
}

// ============================================================================
// Registry entries
// ============================================================================

/// The concrete widget a registry entry renders.
///
/// This is the tagged variant that replaces an opaque "component reference":
/// the preview pane matches on it to mount and render the right widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetKind {
    /// Interactive dropdown with a forced-state gallery
    Dropdown,
    /// Interactive text input with a forced-state gallery
    InputField,
    /// Static project hero card with hover treatment
    HeroCard,
    /// Expandable CV with the like-gated contact section
    CvLayout,
    /// Static top-nav page skeleton
    TopNavLayout,
    /// Static top-nav + sidebar page skeleton
    SplitLayout,
    /// Tick-driven fade-in demo
    FadeIn,
}

/// How an entry's page is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DisplayMode {
    /// Tiled gallery of forced states plus one live instance
    #[serde(rename = "grid")]
    Grid,
    /// Full-width single-instance showcase
    #[serde(rename = "full-width")]
    FullWidth,
}

/// A single catalog entry.
#[derive(Debug, Clone, Serialize)]
pub struct RegistryItem {
    /// URL-safe identifier, unique within its category
    pub slug: String,
    /// Display name shown in the sidebar and page header
    pub name: String,
    /// Which widget this entry renders
    pub kind: WidgetKind,
    /// Grid gallery vs full-width showcase
    pub display: DisplayMode,
}

impl RegistryItem {
    /// Create a grid-mode entry.
    pub fn new(slug: &str, name: &str, kind: WidgetKind) -> Self {
        Self {
            slug: slug.to_string(),
            name: name.to_string(),
            kind,
            display: DisplayMode::Grid,
        }
    }

    /// Create a full-width showcase entry.
    pub fn full_width(slug: &str, name: &str, kind: WidgetKind) -> Self {
        Self {
            display: DisplayMode::FullWidth,
            ..Self::new(slug, name, kind)
        }
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Immutable catalog of showcase entries, grouped by category.
///
/// Constructed once and injected into consumers; lookups never mutate.
#[derive(Debug, Clone, Serialize)]
pub struct Registry {
    components: Vec<RegistryItem>,
    layouts: Vec<RegistryItem>,
    animations: Vec<RegistryItem>,
}

impl Registry {
    /// Build a registry from per-category entry lists.
    ///
    /// Slugs must be unique within each category; duplicates are a
    /// programming error and rejected in debug builds.
    pub fn new(
        components: Vec<RegistryItem>,
        layouts: Vec<RegistryItem>,
        animations: Vec<RegistryItem>,
    ) -> Self {
        let registry = Self {
            components,
            layouts,
            animations,
        };
        debug_assert!(
            Category::ALL.iter().all(|c| registry.slugs_are_unique(*c)),
            "registry slugs must be unique per category"
        );
        registry
    }

    /// An empty registry (useful for empty-state tests).
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new())
    }

    /// The catalog shipped with the binary.
    pub fn builtin() -> Self {
        Self::new(
            vec![
                RegistryItem::new("dropdown", "Dropdown", WidgetKind::Dropdown),
                RegistryItem::new("input-field", "Input Field", WidgetKind::InputField),
                RegistryItem::new(
                    "project-hero-card",
                    "Project Hero Card",
                    WidgetKind::HeroCard,
                ),
            ],
            vec![
                RegistryItem::new("tobias-cv", "Tobias CV", WidgetKind::CvLayout),
                RegistryItem::new("test-layout-2", "Test Layout 2", WidgetKind::TopNavLayout),
                RegistryItem::new("test-layout-3", "Test Layout 3", WidgetKind::SplitLayout),
            ],
            vec![RegistryItem::full_width(
                "fade-in-basics",
                "1. Fade In — The Basics",
                WidgetKind::FadeIn,
            )],
        )
    }

    /// All entries in a category, in display (insertion) order.
    pub fn entries(&self, category: Category) -> &[RegistryItem] {
        match category {
            Category::Components => &self.components,
            Category::Layouts => &self.layouts,
            Category::Animations => &self.animations,
        }
    }

    /// Look up an entry by category and slug.
    ///
    /// Returns [`RegistryError::UnknownSlug`] when no entry matches; callers
    /// must treat that as a not-found outcome, never as a default entry.
    pub fn lookup(&self, category: Category, slug: &str) -> Result<&RegistryItem, RegistryError> {
        self.entries(category)
            .iter()
            .find(|item| item.slug == slug)
            .ok_or_else(|| RegistryError::UnknownSlug {
                category,
                slug: slug.to_string(),
            })
    }

    /// Position of a slug within its category's display order.
    pub fn position(&self, category: Category, slug: &str) -> Option<usize> {
        self.entries(category).iter().position(|i| i.slug == slug)
    }

    /// All slugs in a category, for static path enumeration.
    pub fn slugs(&self, category: Category) -> Vec<&str> {
        self.entries(category)
            .iter()
            .map(|item| item.slug.as_str())
            .collect()
    }

    /// Every navigable entry path across all categories.
    ///
    /// This is the pre-rendering set: each returned path resolves via
    /// [`Registry::lookup`].
    pub fn paths(&self) -> Vec<String> {
        Category::ALL
            .iter()
            .flat_map(|category| {
                self.entries(*category)
                    .iter()
                    .map(move |item| format!("/{}/{}", category.as_segment(), item.slug))
            })
            .collect()
    }

    /// The first registered component, if any (root-redirect target).
    pub fn first_component(&self) -> Option<&RegistryItem> {
        self.components.first()
    }

    /// Whether the registry has no entries at all.
    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|c| self.entries(*c).is_empty())
    }

    /// Serialize the full catalog as pretty JSON (for `--list --json`).
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    fn slugs_are_unique(&self, category: Category) -> bool {
        let slugs = self.slugs(category);
        let mut seen = std::collections::HashSet::new();
        slugs.iter().all(|s| seen.insert(*s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_segment_roundtrip() {
        for category in Category::ALL {
            assert_eq!(
                Category::from_segment(category.as_segment()),
                Some(category)
            );
        }
        assert_eq!(Category::from_segment("widgets"), None);
    }

    #[test]
    fn test_category_cycle() {
        let mut category = Category::Components;
        for _ in 0..3 {
            category = category.next();
        }
        assert_eq!(category, Category::Components);
        assert_eq!(Category::Components.prev(), Category::Animations);
    }

    #[test]
    fn test_builtin_lookup_every_slug() {
        let registry = Registry::builtin();
        for category in Category::ALL {
            for slug in registry.slugs(category) {
                let item = registry.lookup(category, slug).expect("slug must resolve");
                assert_eq!(item.slug, slug);
            }
        }
    }

    #[test]
    fn test_lookup_unknown_slug_is_not_found() {
        let registry = Registry::builtin();
        for category in Category::ALL {
            let err = registry.lookup(category, "nonexistent").unwrap_err();
            assert_eq!(
                err,
                RegistryError::UnknownSlug {
                    category,
                    slug: "nonexistent".to_string()
                }
            );
        }
    }

    #[test]
    fn test_entries_preserve_insertion_order() {
        let registry = Registry::builtin();
        let slugs = registry.slugs(Category::Layouts);
        assert_eq!(slugs, vec!["tobias-cv", "test-layout-2", "test-layout-3"]);
    }

    #[test]
    fn test_paths_cover_all_entries() {
        let registry = Registry::builtin();
        let paths = registry.paths();
        let expected: usize = Category::ALL
            .iter()
            .map(|c| registry.entries(*c).len())
            .sum();
        assert_eq!(paths.len(), expected);
        assert!(paths.contains(&"/components/dropdown".to_string()));
        assert!(paths.contains(&"/animations/fade-in-basics".to_string()));
    }

    #[test]
    fn test_first_component_and_empty() {
        let registry = Registry::builtin();
        assert_eq!(registry.first_component().unwrap().slug, "dropdown");
        assert!(!registry.is_empty());

        let empty = Registry::empty();
        assert!(empty.first_component().is_none());
        assert!(empty.is_empty());
    }

    #[test]
    fn test_json_dump_contains_display_modes() {
        let registry = Registry::builtin();
        let json = registry.to_json().expect("registry must serialize");
        assert!(json.contains("\"full-width\""));
        assert!(json.contains("\"grid\""));
        assert!(json.contains("\"tobias-cv\""));
    }
}
