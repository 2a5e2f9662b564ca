//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{edit, home, keys::handle_key, search, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Home Page
        // ─────────────────────────────────────────────────────────
        Message::FetchFirstPage => home::handle_fetch_first_page(state),
        Message::ReloadPage => home::handle_reload_page(state),
        Message::NextPage => home::handle_next_page(state),
        Message::PrevPage => home::handle_prev_page(state),
        Message::ScrollToTop => {
            state.home.scroll_to_top();
            UpdateResult::none()
        }
        Message::SelectNextProduct => {
            state.home.select_next();
            UpdateResult::none()
        }
        Message::SelectPrevProduct => {
            state.home.select_prev();
            UpdateResult::none()
        }
        Message::ToggleProductDetails => {
            if let Some(view) = state.home.selected_view_mut() {
                view.toggle();
            }
            UpdateResult::none()
        }
        Message::IncrementQuantity => {
            if let Some(view) = state.home.selected_view_mut() {
                view.quantity.increment();
            }
            UpdateResult::none()
        }
        Message::DecrementQuantity => {
            if let Some(view) = state.home.selected_view_mut() {
                view.quantity.decrement();
            }
            UpdateResult::none()
        }
        Message::PageLoaded {
            token,
            origin,
            page,
        } => home::handle_page_loaded(state, token, origin, page),
        Message::PageFailed {
            token,
            origin,
            error,
        } => home::handle_page_failed(state, token, origin, &error),

        // ─────────────────────────────────────────────────────────
        // Search Panel
        // ─────────────────────────────────────────────────────────
        Message::FocusSearch => search::handle_focus(state),
        Message::BlurSearch => {
            state.search.focused = false;
            UpdateResult::none()
        }
        Message::ToggleAdvancedSearch => {
            state.search.toggle_advanced();
            UpdateResult::none()
        }
        Message::SearchFocusNext => {
            state.search.focus_next();
            UpdateResult::none()
        }
        Message::SearchFocusPrev => {
            state.search.focus_prev();
            UpdateResult::none()
        }
        Message::SearchInput { text } => {
            state.search.set_focused_text(text);
            UpdateResult::none()
        }
        Message::SearchToggleRange => {
            state.search.toggle_focused_range();
            UpdateResult::none()
        }
        Message::SearchNudge { steps } => {
            state.search.nudge_focused(steps);
            UpdateResult::none()
        }
        Message::SubmitSearch => search::handle_submit(state),

        // ─────────────────────────────────────────────────────────
        // Edit Page
        // ─────────────────────────────────────────────────────────
        Message::OpenEdit { id } => edit::handle_open(state, id),
        Message::CloseEdit => edit::handle_close(state),
        Message::RetryLoadProduct => edit::handle_retry(state),
        Message::ProductLoaded { token, product } => edit::handle_loaded(state, token, product),
        Message::ProductLoadFailed { token, error } => {
            edit::handle_load_failed(state, token, &error)
        }
        Message::EditFocusNext => edit::handle_focus(state, true),
        Message::EditFocusPrev => edit::handle_focus(state, false),
        Message::EditInput { text } => edit::handle_input(state, text),
        Message::EditCycleCategory { forward } => edit::handle_cycle_category(state, forward),
        Message::SaveProduct => edit::handle_save(state),
        Message::SaveCompleted { token } => edit::handle_save_completed(state, token),
        Message::SaveFailed { token, failure } => edit::handle_save_failed(state, token, &failure),
        Message::DismissAlert => {
            if let Some(edit) = state.edit.as_mut() {
                edit.dismiss_alert();
            }
            UpdateResult::none()
        }
    }
}
