//! The showcase widgets.
//!
//! Each module pairs a widget's interaction state with its render code, the
//! same way the catalog pairs a slug with a [`WidgetKind`](crate::registry::WidgetKind).
//! Interactive widgets derive their look from [`state::resolve_visual_state`];
//! static layouts are plain render functions.

pub mod cv;
pub mod dropdown;
pub mod fade_in;
pub mod hero_card;
pub mod input_field;
pub mod layouts;
pub mod state;

pub use state::{resolve_visual_state, StateFlags, VisualState};
