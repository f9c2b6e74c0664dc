//! City weather - terminal weather lookup widget
//!
//! This library exposes the app's modules for testing.

pub mod action;
pub mod api;
pub mod components;
pub mod effect;
pub mod icon;
pub mod logging;
pub mod reducer;
pub mod state;
