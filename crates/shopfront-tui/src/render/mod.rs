//! Main render/view function (View in TEA pattern)


use ratatui::layout::{Constraint, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use shopfront_app::edit::EditPhase;
use shopfront_app::state::{AppState, Screen};

use crate::theme::palette;
use crate::{layout, widgets};

const HOME_HINTS: &[(&str, &str)] = &[
    ("j/k", "select"),
    ("Enter", "details"),
    ("n/p", "page"),
    ("/", "search"),
    ("e", "edit"),
    ("q", "quit"),
];

const SEARCH_HINTS: &[(&str, &str)] = &[
    ("Tab", "next field"),
    ("Ctrl+A", "advanced"),
    ("Enter", "search"),
    ("Esc", "back"),
];

const EDIT_HINTS: &[(&str, &str)] = &[
    ("Tab", "next field"),
    ("Ctrl+S", "save"),
    ("Esc", "back"),
];

/// Render the complete UI (View function in TEA)
///
/// Only the home list's scroll offset is written back, so the selected card
/// stays inside the viewport.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    match state.screen {
        Screen::Home => render_home(frame, state),
        Screen::Edit => render_edit(frame, state),
    }
}

fn render_home(frame: &mut Frame, state: &mut AppState) {
    let areas = layout::home(frame.area(), state.search.advanced);

    let hints = if state.search.focused {
        SEARCH_HINTS
    } else {
        HOME_HINTS
    };
    let header = widgets::MainHeader::new()
        .context(&state.settings.api.base_url)
        .hints(hints);
    frame.render_widget(header, areas.header);

    frame.render_widget(widgets::SearchPanel::new(&state.search), areas.search);

    let rows = widgets::ProductList::new(&state.home, state.currency_symbol()).card_rows(areas.list);
    state.home.scroll = widgets::scroll_for_selection(
        &state.home.views,
        state.home.selected,
        state.home.scroll,
        rows,
    );
    frame.render_widget(
        widgets::ProductList::new(&state.home, state.currency_symbol()),
        areas.list,
    );

    let pagination = widgets::PaginationBar::new(state.home.navigation.as_ref())
        .loading(state.home.loading)
        .last_fetched(state.home.last_fetched);
    frame.render_widget(pagination, areas.pagination);
}

fn render_edit(frame: &mut Frame, state: &AppState) {
    let (header_area, body) = layout::edit(frame.area());

    let context = state
        .edit
        .as_ref()
        .map(|edit| format!("Edit product {}", edit.id))
        .unwrap_or_default();
    let header = widgets::MainHeader::new()
        .context(&context)
        .hints(EDIT_HINTS);
    frame.render_widget(header, header_area);

    let Some(edit) = &state.edit else {
        return;
    };

    let alert = match &edit.phase {
        EditPhase::Success { message } => Some((widgets::AlertKind::Success, message)),
        EditPhase::Error { message } => Some((widgets::AlertKind::Error, message)),
        _ => None,
    };

    match alert {
        Some((kind, message)) => {
            let [form_area, alert_area] =
                Layout::vertical([Constraint::Min(3), Constraint::Length(3)]).areas(body);
            frame.render_widget(widgets::EditForm::new(edit), form_area);
            frame.render_widget(widgets::Alert::new(kind, message), alert_area);
        }
        None => frame.render_widget(widgets::EditForm::new(edit), body),
    }
}
