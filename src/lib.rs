//! Swatch - a terminal design sandbox
//!
//! A catalog of UI components, layouts, and animations rendered as
//! interactive showcase pages. This library exposes modules for use in
//! integration tests.

pub mod app;
pub mod cli;
pub mod error;
pub mod logging;
pub mod registry;
pub mod ui;
pub mod widgets;
