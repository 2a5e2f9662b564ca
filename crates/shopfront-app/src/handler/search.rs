//! Search panel handlers

use shopfront_api::ListQuery;
use shopfront_core::prelude::*;

use crate::request::{ListOrigin, ListRequest};
use crate::search::SearchField;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub fn handle_focus(state: &mut AppState) -> UpdateResult {
    state.search.focused = true;
    state.search.focus = SearchField::Basic;
    UpdateResult::none()
}

/// Build the query from the active filters and issue one list fetch
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    let criteria = state.search.criteria();
    let query = ListQuery::from_criteria(&criteria, state.page_size());
    let token = state.list_requests.next_token();
    state.home.begin_fetch(token, ListOrigin::Search);
    state.search.focused = false;

    info!("search {token}: {:?}", query.params());
    UpdateResult::action(UpdateAction::FetchPage {
        token,
        origin: ListOrigin::Search,
        request: ListRequest::Query(query),
    })
}
