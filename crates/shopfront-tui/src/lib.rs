//! shopfront-tui - Terminal UI for Shopfront
//!
//! Adds terminal rendering, event polling and the main loop on top of the
//! state and orchestration in shopfront-app.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::{run, StartPage};
