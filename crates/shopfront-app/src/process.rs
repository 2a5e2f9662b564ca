//! Message processing: runs update to completion and dispatches actions

use std::sync::Arc;

use tokio::sync::mpsc;

use shopfront_api::ProductApi;

use crate::handler;
use crate::message::Message;
use crate::state::AppState;

use super::actions::handle_action;

/// Process a message through the TEA update function.
///
/// Follow-up messages are processed immediately; every action is handed to
/// [`handle_action`], whose results arrive later through `msg_tx`.
pub fn process_message<A>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    api: &Arc<A>,
) where
    A: ProductApi + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, Arc::clone(api), msg_tx.clone());
        }

        msg = result.message;
    }
}
