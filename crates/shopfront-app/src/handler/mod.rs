//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per screen and focus
//! - `home`: Pagination and list response handlers
//! - `search`: Search panel handlers
//! - `edit`: Edit page handlers

pub(crate) mod edit;
pub(crate) mod home;
pub(crate) mod keys;
pub(crate) mod search;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use shopfront_core::ProductUpdate;

use crate::message::Message;
use crate::request::{ListOrigin, ListRequest, RequestToken};

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Fetch a product list; the response comes back as `PageLoaded`/`PageFailed`
    FetchPage {
        token: RequestToken,
        origin: ListOrigin,
        request: ListRequest,
    },

    /// Fetch one product for the edit page
    LoadProduct { token: RequestToken, id: String },

    /// Send a partial update for one product
    SaveProduct {
        token: RequestToken,
        id: String,
        update: ProductUpdate,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    pub fn with_action(message: Message, action: UpdateAction) -> Self {
        Self {
            message: Some(message),
            action: Some(action),
        }
    }
}
