//! shopfront-app - Application state and orchestration for Shopfront
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management:
//! per-page state records (home, search panel, product views, edit page), the
//! message/update cycle, request sequencing, configuration loading, and the
//! dispatch of API calls as background tasks.

pub mod actions;
pub mod config;
pub mod edit;
pub mod handler;
pub mod home;
pub mod input_key;
pub mod message;
pub mod process;
pub mod product_view;
pub mod request;
pub mod search;
pub mod state;

// Re-export primary types
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use request::{ListOrigin, ListRequest, RequestSeq, RequestToken};
pub use state::{AppState, Screen};
