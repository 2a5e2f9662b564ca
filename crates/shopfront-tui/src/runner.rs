//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use tokio::sync::mpsc;

use shopfront_api::ProductApi;
use shopfront_app::config::Settings;
use shopfront_app::message::Message;
use shopfront_app::process::process_message;
use shopfront_app::state::AppState;
use shopfront_core::prelude::*;

use crate::{event, render, terminal};

/// Page shown first
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StartPage {
    #[default]
    Home,
    /// Open the edit page for this product id on top of the home page
    Edit(String),
}

/// Run the TUI against `api` until the user quits
pub async fn run<A>(settings: Settings, api: Arc<A>, start: StartPage) -> Result<()>
where
    A: ProductApi + Sync + 'static,
{
    terminal::install_panic_hook();

    info!(
        "Starting shopfront against {} (page size {})",
        settings.api.base_url, settings.api.page_size
    );

    let mut term = ratatui::init();
    let mut state = AppState::with_settings(settings);
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    process_message(&mut state, Message::FetchFirstPage, &msg_tx, &api);
    if let StartPage::Edit(id) = start {
        process_message(&mut state, Message::OpenEdit { id }, &msg_tx, &api);
    }

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &api);

    ratatui::restore();

    if let Err(e) = &result {
        error!("TUI loop exited with error: {e}");
    } else {
        info!("Shopfront exited");
    }
    result
}

/// Main event loop
fn run_loop<A>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    api: &Arc<A>,
) -> Result<()>
where
    A: ProductApi + Sync + 'static,
{
    while !state.should_quit() {
        // Results of API tasks
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, api);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, api);
        }
    }

    Ok(())
}
