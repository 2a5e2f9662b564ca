//! Edit page handlers

use shopfront_core::prelude::*;
use shopfront_core::Product;

use crate::edit::{EditState, SaveFailure};
use crate::request::RequestToken;
use crate::state::{AppState, Screen};

use super::{UpdateAction, UpdateResult};

pub fn handle_open(state: &mut AppState, id: String) -> UpdateResult {
    let token = state.edit_requests.next_token();
    info!("editing product {id}");
    state.edit = Some(EditState::loading(id.clone(), token));
    state.screen = Screen::Edit;
    UpdateResult::action(UpdateAction::LoadProduct { token, id })
}

/// Back to the home page; in-flight edit responses are dropped on arrival
pub fn handle_close(state: &mut AppState) -> UpdateResult {
    state.edit = None;
    state.screen = Screen::Home;
    UpdateResult::none()
}

pub fn handle_retry(state: &mut AppState) -> UpdateResult {
    let Some(edit) = state.edit.as_mut().filter(|e| e.can_retry()) else {
        return UpdateResult::none();
    };
    let token = state.edit_requests.next_token();
    edit.retry_load(token);
    UpdateResult::action(UpdateAction::LoadProduct {
        token,
        id: edit.id.clone(),
    })
}

pub fn handle_loaded(state: &mut AppState, token: RequestToken, product: Product) -> UpdateResult {
    match state.edit.as_mut() {
        Some(edit) => {
            edit.apply_loaded(token, product);
        }
        None => debug!("product {} arrived after the edit page closed", product.id),
    }
    UpdateResult::none()
}

pub fn handle_load_failed(state: &mut AppState, token: RequestToken, error: &str) -> UpdateResult {
    if let Some(edit) = state.edit.as_mut() {
        if edit.fail_load(token, error) {
            warn!("loading product {} failed: {error}", edit.id);
        }
    }
    UpdateResult::none()
}

pub fn handle_focus(state: &mut AppState, forward: bool) -> UpdateResult {
    if let Some(form) = state.edit.as_mut().and_then(|e| e.form.as_mut()) {
        form.focus = if forward {
            form.focus.next()
        } else {
            form.focus.prev()
        };
    }
    UpdateResult::none()
}

pub fn handle_input(state: &mut AppState, text: String) -> UpdateResult {
    let Some(edit) = state.edit.as_mut().filter(|e| e.is_editable()) else {
        return UpdateResult::none();
    };
    if let Some(form) = edit.form.as_mut() {
        if !form.set_focused_text(text) {
            trace!("rejected input for {:?}", form.focus);
        }
    }
    UpdateResult::none()
}

pub fn handle_cycle_category(state: &mut AppState, forward: bool) -> UpdateResult {
    let Some(edit) = state.edit.as_mut().filter(|e| e.is_editable()) else {
        return UpdateResult::none();
    };
    if let Some(form) = edit.form.as_mut() {
        form.cycle_category(forward);
    }
    UpdateResult::none()
}

pub fn handle_save(state: &mut AppState) -> UpdateResult {
    let Some(edit) = state.edit.as_mut().filter(|e| e.is_editable()) else {
        return UpdateResult::none();
    };
    let token = state.edit_requests.next_token();
    match edit.begin_save(token) {
        Some(update) => {
            info!("saving product {} ({token})", edit.id);
            UpdateResult::action(UpdateAction::SaveProduct {
                token,
                id: edit.id.clone(),
                update,
            })
        }
        None => UpdateResult::none(),
    }
}

pub fn handle_save_completed(state: &mut AppState, token: RequestToken) -> UpdateResult {
    if let Some(edit) = state.edit.as_mut() {
        if edit.complete_save(token) {
            info!("product {} saved", edit.id);
        }
    }
    UpdateResult::none()
}

pub fn handle_save_failed(
    state: &mut AppState,
    token: RequestToken,
    failure: &SaveFailure,
) -> UpdateResult {
    if let Some(edit) = state.edit.as_mut() {
        if edit.fail_save(token, failure) {
            warn!("saving product {} failed: {failure:?}", edit.id);
        }
    }
    UpdateResult::none()
}
