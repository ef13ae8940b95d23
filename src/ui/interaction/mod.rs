//! Mouse interaction system for the sandbox.
//!
//! Clickable regions are registered into a [`HitAreaRegistry`] during
//! rendering; the event loop hit-tests mouse events against the registry and
//! dispatches the resulting [`ClickAction`] through [`handle_click_action`].

pub mod click_handler;
pub mod hit_area;

pub use click_handler::handle_click_action;
pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};
