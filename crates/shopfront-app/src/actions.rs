//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Each action becomes one tokio task that calls the [`ProductApi`] and sends
//! exactly one result message back. Nothing is cancelled or retried here;
//! stale results are filtered by token in the update handlers.

use std::sync::Arc;

use tokio::sync::mpsc;

use shopfront_api::ProductApi;
use shopfront_core::prelude::*;

use crate::edit::SaveFailure;
use crate::message::Message;
use crate::request::ListRequest;
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action<A>(action: UpdateAction, api: Arc<A>, msg_tx: mpsc::Sender<Message>)
where
    A: ProductApi + Sync + 'static,
{
    tokio::spawn(async move {
        let message = execute_action(action, api.as_ref()).await;
        if let Err(e) = msg_tx.send(message).await {
            // Receiver is gone only during shutdown
            debug!("dropping action result: {e}");
        }
    });
}

/// Run an action to completion and produce its result message
pub async fn execute_action<A>(action: UpdateAction, api: &A) -> Message
where
    A: ProductApi + Sync,
{
    match action {
        UpdateAction::FetchPage {
            token,
            origin,
            request,
        } => {
            let result = match &request {
                ListRequest::Query(query) => api.list_products(query).await,
                ListRequest::Uri(uri) => api.fetch_uri(uri).await,
            };
            match result {
                Ok(page) => Message::PageLoaded {
                    token,
                    origin,
                    page,
                },
                Err(e) => Message::PageFailed {
                    token,
                    origin,
                    error: e.to_string(),
                },
            }
        }

        UpdateAction::LoadProduct { token, id } => match api.get_product(&id).await {
            Ok(product) => Message::ProductLoaded { token, product },
            Err(e) => Message::ProductLoadFailed {
                token,
                error: e.to_string(),
            },
        },

        UpdateAction::SaveProduct { token, id, update } => {
            match api.update_product(&id, &update).await {
                Ok(()) => Message::SaveCompleted { token },
                Err(e) => Message::SaveFailed {
                    token,
                    failure: SaveFailure::from_error(&e),
                },
            }
        }
    }
}
