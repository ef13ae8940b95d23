//! Error types for catalog lookups and path resolution.
//!
//! The sandbox has exactly one meaningful failure mode: asking for something
//! the registry does not contain. Everything else (toggling flags, adjusting
//! ranges, typing text) is always-valid and never produces an error.

use thiserror::Error;

use crate::registry::Category;

/// Errors produced by registry lookups and route parsing.
///
/// A not-found lookup is a distinct outcome from a successful one; the
/// registry never substitutes a default entry for an unknown slug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The category exists but no entry carries this slug.
    #[error("no {category} entry with slug \"{slug}\"")]
    UnknownSlug {
        /// Category that was searched
        category: Category,
        /// Slug that was requested
        slug: String,
    },

    /// The path segment does not name a known category.
    #[error("unknown category \"{0}\" (expected components, layouts, or animations)")]
    UnknownCategory(String),

    /// The path is not of the form `/{category}/{slug}` or `/{category}`.
    #[error("invalid path \"{0}\"")]
    InvalidPath(String),
}
