//! Home page handlers: initial fetch, pagination, and list responses

use shopfront_api::ListQuery;
use shopfront_core::prelude::*;
use shopfront_core::ProductPage;

use crate::message::Message;
use crate::request::{ListOrigin, ListRequest, RequestToken};
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Issue a page fetch with a fresh token from the list sequence
fn start_page_fetch(state: &mut AppState, request: ListRequest) -> UpdateAction {
    let token = state.list_requests.next_token();
    state.home.begin_fetch(token, ListOrigin::Page);
    debug!("page fetch {token}: {request:?}");
    UpdateAction::FetchPage {
        token,
        origin: ListOrigin::Page,
        request,
    }
}

pub fn handle_fetch_first_page(state: &mut AppState) -> UpdateResult {
    let query = ListQuery::page(None, state.page_size());
    UpdateResult::action(start_page_fetch(state, ListRequest::Query(query)))
}

/// Re-fetch `navigation.self`, or page 1 when nothing has loaded yet
pub fn handle_reload_page(state: &mut AppState) -> UpdateResult {
    match state.home.navigation.as_ref().map(|n| n.self_uri.clone()) {
        Some(uri) => UpdateResult::action(start_page_fetch(state, ListRequest::Uri(uri))),
        None => handle_fetch_first_page(state),
    }
}

/// Follow `navigation.next`; scrolls to top whether or not a fetch is issued
pub fn handle_next_page(state: &mut AppState) -> UpdateResult {
    let next = state.home.navigation.as_ref().and_then(|n| n.next.clone());
    follow(state, next)
}

/// Follow `navigation.prev`; scrolls to top whether or not a fetch is issued
pub fn handle_prev_page(state: &mut AppState) -> UpdateResult {
    let prev = state.home.navigation.as_ref().and_then(|n| n.prev.clone());
    follow(state, prev)
}

fn follow(state: &mut AppState, uri: Option<String>) -> UpdateResult {
    match uri {
        Some(uri) => {
            let action = start_page_fetch(state, ListRequest::Uri(uri));
            UpdateResult::with_action(Message::ScrollToTop, action)
        }
        None => UpdateResult::message(Message::ScrollToTop),
    }
}

pub fn handle_page_loaded(
    state: &mut AppState,
    token: RequestToken,
    origin: ListOrigin,
    page: ProductPage,
) -> UpdateResult {
    if !state.list_requests.is_latest(token) {
        debug!("discarding stale list response {token} ({origin:?})");
        return UpdateResult::none();
    }

    info!(
        "loaded {} products, page {} of {} ({origin:?})",
        page.data.len(),
        page.navigation.current,
        page.navigation.pages
    );
    let base = state.settings.ui.placeholder_image_base.clone();
    state.home.apply_page(page, &base, origin);
    UpdateResult::none()
}

pub fn handle_page_failed(
    state: &mut AppState,
    token: RequestToken,
    origin: ListOrigin,
    error: &str,
) -> UpdateResult {
    if !state.list_requests.is_latest(token) {
        debug!("discarding stale list failure {token}: {error}");
        return UpdateResult::none();
    }

    match origin {
        ListOrigin::Page => {
            error!("product fetch failed: {error}");
            state.home.fail_fetch();
        }
        ListOrigin::Search => {
            // Search failures are not shown to the user
            warn!("search failed: {error}");
            state.home.finish_fetch();
        }
    }
    UpdateResult::none()
}
