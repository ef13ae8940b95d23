//! Tracing setup.
//!
//! The TUI owns the terminal, so log output goes to a file instead of
//! stderr. Set `SWATCH_LOG` to a file path to enable logging; when it is
//! unset no subscriber is installed and the tracing macros are no-ops.
//! `RUST_LOG` controls the filter as usual.

use std::fs::File;
use std::sync::Arc;

use color_eyre::Result;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber if `SWATCH_LOG` is set.
pub fn init() -> Result<()> {
    let Ok(path) = std::env::var("SWATCH_LOG") else {
        return Ok(());
    };

    let file = File::create(&path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("swatch=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    tracing::debug!(log_file = %path, "logging initialized");
    Ok(())
}
