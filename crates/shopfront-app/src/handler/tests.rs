//! Tests for handler module

use super::*;
use crate::edit::{EditField, EditPhase, SaveFailure, SAVE_SUCCESS_MESSAGE};
use crate::home::FETCH_FAILED_MESSAGE;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::request::{ListOrigin, ListRequest, RequestToken};
use crate::search::SearchField;
use crate::state::{AppPhase, AppState, Screen};
use shopfront_api::test_utils::{test_product, test_product_numbered};
use shopfront_api::{params, ListQuery};
use shopfront_core::{Navigation, ProductPage};

fn page(start: usize, total: usize) -> ProductPage {
    let end = (start + 9).min(total);
    ProductPage {
        data: (start..=end).map(test_product_numbered).collect(),
        navigation: Navigation::for_window(total, start, 10, "/products"),
    }
}

/// Run `FetchFirstPage` and return the issued token
fn issue_first_page(state: &mut AppState) -> RequestToken {
    match update(state, Message::FetchFirstPage).action {
        Some(UpdateAction::FetchPage { token, .. }) => token,
        other => panic!("expected FetchPage, got {other:?}"),
    }
}

/// State with page `start` of `total` products loaded
fn loaded_state(start: usize, total: usize) -> AppState {
    let mut state = AppState::new();
    let token = issue_first_page(&mut state);
    update(
        &mut state,
        Message::PageLoaded {
            token,
            origin: ListOrigin::Page,
            page: page(start, total),
        },
    );
    state
}

/// Feed `message` and any follow-ups through update, collecting actions
fn run(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);
        actions.extend(result.action);
        msg = result.message;
    }
    actions
}

// ─────────────────────────────────────────────────────────
// Quit
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::new();
    update(&mut state, Message::Quit);
    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_q_key_quits_from_home() {
    let state = AppState::new();
    assert!(matches!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::Quit)
    ));
}

#[test]
fn test_ctrl_c_quits_from_search_focus() {
    let mut state = AppState::new();
    state.search.focused = true;
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));
}

// ─────────────────────────────────────────────────────────
// Home page
// ─────────────────────────────────────────────────────────

#[test]
fn test_first_page_requests_limit_only() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::FetchFirstPage);

    assert!(state.home.loading);
    match result.action {
        Some(UpdateAction::FetchPage {
            origin: ListOrigin::Page,
            request: ListRequest::Query(query),
            ..
        }) => {
            assert_eq!(query.keys(), vec![params::LIMIT]);
            assert_eq!(query.get(params::LIMIT), Some("10"));
        }
        other => panic!("expected page query, got {other:?}"),
    }
}

#[test]
fn test_page_loaded_populates_home() {
    let state = loaded_state(1, 25);
    assert!(!state.home.loading);
    assert!(state.home.error.is_none());
    assert_eq!(state.home.products.len(), 10);
    assert_eq!(state.home.products[3].image, "https://picsum.photos/500?random=3");
    assert_eq!(state.home.navigation.as_ref().unwrap().pages, 3);
}

#[test]
fn test_next_page_follows_navigation_uri_and_scrolls() {
    let mut state = loaded_state(1, 25);
    state.home.selected = 5;
    state.home.scroll = 3;

    let actions = run(&mut state, Message::NextPage);

    assert_eq!(actions.len(), 1);
    assert!(matches!(
        &actions[0],
        UpdateAction::FetchPage { request: ListRequest::Uri(uri), .. }
            if uri == "/products?start=11&limit=10"
    ));
    assert_eq!(state.home.selected, 0);
    assert_eq!(state.home.scroll, 0);
    assert!(state.home.loading);
}

#[test]
fn test_next_on_last_page_issues_nothing_but_scrolls() {
    let mut state = loaded_state(21, 25);
    state.home.selected = 2;
    let before = state.home.products.clone();

    let actions = run(&mut state, Message::NextPage);

    assert!(actions.is_empty());
    assert_eq!(state.home.selected, 0);
    assert_eq!(state.home.products, before);
}

#[test]
fn test_prev_on_first_page_issues_nothing() {
    let mut state = loaded_state(1, 25);
    assert!(run(&mut state, Message::PrevPage).is_empty());
}

#[test]
fn test_failed_fetch_keeps_previous_products() {
    let mut state = loaded_state(1, 25);
    let actions = run(&mut state, Message::NextPage);
    let UpdateAction::FetchPage { token, .. } = actions[0].clone() else {
        panic!("expected FetchPage");
    };

    update(
        &mut state,
        Message::PageFailed {
            token,
            origin: ListOrigin::Page,
            error: "No response received from server: refused".into(),
        },
    );

    assert_eq!(state.home.error.as_deref(), Some(FETCH_FAILED_MESSAGE));
    assert!(!state.home.loading);
    assert_eq!(state.home.products[0].product.id, "1");
    assert_eq!(state.home.navigation.as_ref().unwrap().current, 1);
}

#[test]
fn test_stale_page_response_is_discarded() {
    let mut state = loaded_state(1, 25);
    let first = run(&mut state, Message::NextPage);
    let second = run(&mut state, Message::NextPage);
    let (UpdateAction::FetchPage { token: t1, .. }, UpdateAction::FetchPage { token: t2, .. }) =
        (first[0].clone(), second[0].clone())
    else {
        panic!("expected two fetches");
    };

    // Newer response lands first, the older one must not overwrite it
    update(
        &mut state,
        Message::PageLoaded {
            token: t2,
            origin: ListOrigin::Page,
            page: page(11, 25),
        },
    );
    update(
        &mut state,
        Message::PageLoaded {
            token: t1,
            origin: ListOrigin::Page,
            page: page(21, 25),
        },
    );

    assert_eq!(state.home.products[0].product.id, "11");
    assert_eq!(state.home.navigation.as_ref().unwrap().current, 2);
}

#[test]
fn test_reload_uses_self_uri() {
    let mut state = loaded_state(11, 25);
    let actions = run(&mut state, Message::ReloadPage);
    assert!(matches!(
        &actions[0],
        UpdateAction::FetchPage { request: ListRequest::Uri(uri), .. }
            if uri == "/products?start=11&limit=10"
    ));
}

#[test]
fn test_toggle_twice_restores_view() {
    let mut state = loaded_state(1, 25);
    let before = state.home.views[0].clone();
    update(&mut state, Message::ToggleProductDetails);
    assert!(state.home.views[0].expanded);
    update(&mut state, Message::ToggleProductDetails);
    assert_eq!(state.home.views[0], before);
}

#[test]
fn test_quantity_keys_adjust_selected_product() {
    let mut state = loaded_state(1, 25);
    // Product 3 has 3 units
    state.home.selected = 2;
    for _ in 0..5 {
        run(&mut state, Message::Key(InputKey::Char('+')));
    }
    assert_eq!(state.home.views[2].quantity.value, 3);
    run(&mut state, Message::Key(InputKey::Char('-')));
    assert_eq!(state.home.views[2].quantity.value, 2);
}

#[test]
fn test_e_key_opens_selected_product() {
    let mut state = loaded_state(1, 25);
    state.home.selected = 4;
    let actions = run(&mut state, Message::Key(InputKey::Char('e')));

    assert_eq!(state.screen, Screen::Edit);
    assert!(matches!(
        &actions[0],
        UpdateAction::LoadProduct { id, .. } if id == "5"
    ));
}

// ─────────────────────────────────────────────────────────
// Search panel
// ─────────────────────────────────────────────────────────

#[test]
fn test_typing_into_basic_search() {
    let mut state = AppState::new();
    run(&mut state, Message::Key(InputKey::Char('/')));
    assert!(state.search.focused);

    for c in "fan".chars() {
        run(&mut state, Message::Key(InputKey::Char(c)));
    }
    run(&mut state, Message::Key(InputKey::Backspace));
    assert_eq!(state.search.basic_query, "fa");

    // 'q' is text while the panel has focus
    run(&mut state, Message::Key(InputKey::Char('q')));
    assert!(!state.should_quit());
}

#[test]
fn test_basic_search_submit_builds_name_query() {
    let mut state = AppState::new();
    state.search.basic_query = "cooler".into();
    state.search.focused = true;

    let actions = run(&mut state, Message::Key(InputKey::Enter));

    match &actions[0] {
        UpdateAction::FetchPage {
            origin: ListOrigin::Search,
            request: ListRequest::Query(query),
            ..
        } => assert_eq!(
            query,
            &ListQuery::from_criteria(&shopfront_api::SearchCriteria::Basic("cooler".into()), 10)
        ),
        other => panic!("expected search fetch, got {other:?}"),
    }
    assert!(!state.search.focused);
}

#[test]
fn test_search_supersedes_page_fetch() {
    let mut state = AppState::new();
    let page_token = issue_first_page(&mut state);
    assert!(state.home.loading);

    let actions = run(&mut state, Message::SubmitSearch);
    let UpdateAction::FetchPage { token: search_token, .. } = actions[0].clone() else {
        panic!("expected FetchPage");
    };
    assert!(!state.home.loading);

    update(
        &mut state,
        Message::PageLoaded {
            token: search_token,
            origin: ListOrigin::Search,
            page: page(1, 3),
        },
    );
    update(
        &mut state,
        Message::PageLoaded {
            token: page_token,
            origin: ListOrigin::Page,
            page: page(1, 25),
        },
    );

    assert_eq!(state.home.products.len(), 3);
}

#[test]
fn test_search_failure_leaves_state_untouched() {
    let mut state = loaded_state(1, 25);
    let actions = run(&mut state, Message::SubmitSearch);
    let UpdateAction::FetchPage { token, .. } = actions[0].clone() else {
        panic!("expected FetchPage");
    };

    update(
        &mut state,
        Message::PageFailed {
            token,
            origin: ListOrigin::Search,
            error: "Server returned status code 500".into(),
        },
    );

    assert!(state.home.error.is_none());
    assert_eq!(state.home.products.len(), 10);
}

#[test]
fn test_advanced_keys_toggle_and_nudge_ranges() {
    let mut state = AppState::new();
    state.search.focused = true;
    run(&mut state, Message::Key(InputKey::CharCtrl('a')));
    assert!(state.search.advanced);

    // Basic -> Name -> Brand -> Category -> PriceToggle
    for _ in 0..4 {
        run(&mut state, Message::Key(InputKey::Tab));
    }
    assert_eq!(state.search.focus, SearchField::PriceToggle);
    run(&mut state, Message::Key(InputKey::Char(' ')));
    assert!(state.search.price.enabled);

    run(&mut state, Message::Key(InputKey::Tab));
    run(&mut state, Message::Key(InputKey::Right));
    run(&mut state, Message::Key(InputKey::Right));
    assert_eq!(state.search.price.low, 200);
}

// ─────────────────────────────────────────────────────────
// Edit page
// ─────────────────────────────────────────────────────────

/// Open the edit page for `id` and deliver the product
fn edit_state(id: &str) -> AppState {
    let mut state = AppState::new();
    let actions = run(&mut state, Message::OpenEdit { id: id.into() });
    let UpdateAction::LoadProduct { token, .. } = actions[0].clone() else {
        panic!("expected LoadProduct");
    };
    update(
        &mut state,
        Message::ProductLoaded {
            token,
            product: test_product(id, 1999.0, 3),
        },
    );
    state
}

#[test]
fn test_open_edit_loads_product() {
    let state = edit_state("9");
    let edit = state.edit.as_ref().unwrap();
    assert_eq!(edit.phase, EditPhase::Loaded);
    assert_eq!(edit.form.as_ref().unwrap().price, "1999");
}

#[test]
fn test_load_failure_can_be_retried() {
    let mut state = AppState::new();
    let actions = run(&mut state, Message::OpenEdit { id: "9".into() });
    let UpdateAction::LoadProduct { token, .. } = actions[0].clone() else {
        panic!("expected LoadProduct");
    };
    update(
        &mut state,
        Message::ProductLoadFailed {
            token,
            error: "Server returned status code 404".into(),
        },
    );
    assert!(matches!(
        state.edit.as_ref().unwrap().phase,
        EditPhase::LoadFailed { .. }
    ));

    let retry = run(&mut state, Message::Key(InputKey::Char('r')));
    assert!(matches!(
        &retry[0],
        UpdateAction::LoadProduct { token: t, id } if *t != token && id == "9"
    ));
}

#[test]
fn test_typing_edits_fields_and_rejects_bad_numbers() {
    let mut state = edit_state("9");
    run(&mut state, Message::Key(InputKey::Char('!')));
    run(&mut state, Message::Key(InputKey::Tab));
    run(&mut state, Message::Key(InputKey::Char('x')));
    run(&mut state, Message::Key(InputKey::Char('.')));
    run(&mut state, Message::Key(InputKey::Char('5')));

    let form = state.edit.as_ref().unwrap().form.as_ref().unwrap();
    assert_eq!(form.name, "Product 9!");
    assert_eq!(form.focus, EditField::Price);
    assert_eq!(form.price, "1999.5");
}

#[test]
fn test_save_payload_reflects_edits() {
    let mut state = edit_state("9");
    run(&mut state, Message::Key(InputKey::CharCtrl('u')));
    for c in "Lamp".chars() {
        run(&mut state, Message::Key(InputKey::Char(c)));
    }

    let actions = run(&mut state, Message::Key(InputKey::CharCtrl('s')));

    match &actions[0] {
        UpdateAction::SaveProduct { id, update, .. } => {
            assert_eq!(id, "9");
            assert_eq!(update.name, "Lamp");
            assert_eq!(update.price, 1999.0);
            assert_eq!(update.quantity, 3);
        }
        other => panic!("expected SaveProduct, got {other:?}"),
    }
    assert_eq!(state.edit.as_ref().unwrap().phase, EditPhase::Saving);
}

#[test]
fn test_save_completion_and_dismiss() {
    let mut state = edit_state("9");
    let actions = run(&mut state, Message::SaveProduct);
    let UpdateAction::SaveProduct { token, .. } = actions[0].clone() else {
        panic!("expected SaveProduct");
    };

    update(&mut state, Message::SaveCompleted { token });
    assert_eq!(
        state.edit.as_ref().unwrap().phase,
        EditPhase::Success {
            message: SAVE_SUCCESS_MESSAGE.into()
        }
    );

    run(&mut state, Message::Key(InputKey::Esc));
    assert_eq!(state.edit.as_ref().unwrap().phase, EditPhase::Loaded);
    assert_eq!(state.screen, Screen::Edit);
}

#[test]
fn test_save_failure_surfaces_status() {
    let mut state = edit_state("9");
    let actions = run(&mut state, Message::SaveProduct);
    let UpdateAction::SaveProduct { token, .. } = actions[0].clone() else {
        panic!("expected SaveProduct");
    };

    update(
        &mut state,
        Message::SaveFailed {
            token,
            failure: SaveFailure::ErrorStatus(422),
        },
    );
    assert_eq!(
        state.edit.as_ref().unwrap().phase,
        EditPhase::Error {
            message: "Server returned status code 422.".into()
        }
    );
}

#[test]
fn test_empty_quantity_blocks_request() {
    let mut state = edit_state("9");
    run(&mut state, Message::EditFocusNext);
    run(&mut state, Message::EditFocusNext);
    run(&mut state, Message::Key(InputKey::Backspace));

    let actions = run(&mut state, Message::SaveProduct);

    assert!(actions.is_empty());
    assert!(matches!(
        state.edit.as_ref().unwrap().phase,
        EditPhase::Error { .. }
    ));
}

#[test]
fn test_response_after_close_is_ignored() {
    let mut state = AppState::new();
    let actions = run(&mut state, Message::OpenEdit { id: "1".into() });
    let UpdateAction::LoadProduct { token, .. } = actions[0].clone() else {
        panic!("expected LoadProduct");
    };
    run(&mut state, Message::Key(InputKey::Esc));
    assert_eq!(state.screen, Screen::Home);

    run(&mut state, Message::OpenEdit { id: "2".into() });
    update(
        &mut state,
        Message::ProductLoaded {
            token,
            product: test_product("1", 1.0, 1),
        },
    );

    assert_eq!(state.edit.as_ref().unwrap().phase, EditPhase::Loading);
}

#[test]
fn test_category_cycles_with_arrows() {
    let mut state = edit_state("9");
    for _ in 0..5 {
        run(&mut state, Message::EditFocusNext);
    }
    run(&mut state, Message::Key(InputKey::Right));
    let form = state.edit.as_ref().unwrap().form.as_ref().unwrap();
    assert_eq!(form.focus, EditField::Category);
    assert_eq!(form.category, "Home & Kitchen");
}
