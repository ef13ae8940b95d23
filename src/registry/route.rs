//! URL-style route parsing for the sandbox.
//!
//! Paths mirror the original site structure: `/{category}/{slug}` opens an
//! entry page and `/{category}` opens that category's index listing.

use crate::error::RegistryError;

use super::Category;

/// A parsed navigable path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Category index listing (`/layouts`)
    Index(Category),
    /// A specific entry page (`/layouts/tobias-cv`)
    Entry {
        /// Category segment of the path
        category: Category,
        /// Slug segment of the path; existence is checked at lookup time
        slug: String,
    },
}

impl Route {
    /// Render the route back into its path form.
    pub fn path(&self) -> String {
        match self {
            Route::Index(category) => format!("/{}", category.as_segment()),
            Route::Entry { category, slug } => format!("/{}/{}", category.as_segment(), slug),
        }
    }
}

/// Parse a path like `/components/dropdown` into a [`Route`].
///
/// The slug is not validated against the registry here; unknown slugs are
/// reported by [`Registry::lookup`](super::Registry::lookup) so that a
/// not-found entry stays a distinct outcome from a malformed path.
pub fn parse_path(path: &str) -> Result<Route, RegistryError> {
    let trimmed = path.trim().trim_start_matches('/').trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(RegistryError::InvalidPath(path.to_string()));
    }

    let mut segments = trimmed.split('/');
    let category_segment = segments.next().unwrap_or_default();
    let category = Category::from_segment(category_segment)
        .ok_or_else(|| RegistryError::UnknownCategory(category_segment.to_string()))?;

    match (segments.next(), segments.next()) {
        (None, _) => Ok(Route::Index(category)),
        (Some(slug), None) if !slug.is_empty() => Ok(Route::Entry {
            category,
            slug: slug.to_string(),
        }),
        _ => Err(RegistryError::InvalidPath(path.to_string())),
    }
}
