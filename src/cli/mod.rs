//! CLI commands that run without the TUI.

pub mod args;

pub use args::{parse_args, CliCommand};

use crate::registry::{Category, Registry};

/// Format the catalog for `--list`.
///
/// Plain mode prints one `path  name` row per entry grouped by category;
/// `--json` emits the registry's JSON form instead.
pub fn run_list(registry: &Registry, json: bool) -> color_eyre::Result<String> {
    if json {
        return Ok(registry.to_json()?);
    }

    let mut out = String::new();
    for category in Category::ALL {
        let entries = registry.entries(category);
        if entries.is_empty() {
            continue;
        }
        out.push_str(category.title());
        out.push('\n');
        for item in entries {
            out.push_str(&format!("  /{category}/{}  {}\n", item.slug, item.name));
        }
    }
    if out.is_empty() {
        out.push_str("No entries registered.\n");
    }
    Ok(out)
}
