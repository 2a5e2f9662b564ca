//! Key event handlers for each screen

use crate::edit::{EditField, EditPhase, EditState};
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Screen};

/// Convert key events to messages based on the current screen and focus
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit from anywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.screen {
        Screen::Home if state.search.focused => handle_key_search(state, key),
        Screen::Home => handle_key_home(state, key),
        Screen::Edit => match state.edit.as_ref() {
            Some(edit) => handle_key_edit(edit, key),
            None => Some(Message::CloseEdit),
        },
    }
}

/// Product list navigation
fn handle_key_home(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),

        InputKey::Char('j') | InputKey::Down => Some(Message::SelectNextProduct),
        InputKey::Char('k') | InputKey::Up => Some(Message::SelectPrevProduct),
        InputKey::Char('g') | InputKey::Home => Some(Message::ScrollToTop),

        // Title/ellipsis toggle
        InputKey::Enter | InputKey::Char(' ') => Some(Message::ToggleProductDetails),

        InputKey::Char('+' | '=') => Some(Message::IncrementQuantity),
        InputKey::Char('-') => Some(Message::DecrementQuantity),

        InputKey::Char('e') => state
            .home
            .selected_product()
            .map(|p| Message::OpenEdit {
                id: p.product.id.clone(),
            }),

        InputKey::Char('n') | InputKey::Right | InputKey::PageDown => Some(Message::NextPage),
        InputKey::Char('p') | InputKey::Left | InputKey::PageUp => Some(Message::PrevPage),
        InputKey::Char('r') => Some(Message::ReloadPage),

        InputKey::Char('/') => Some(Message::FocusSearch),
        InputKey::Char('a') => Some(Message::ToggleAdvancedSearch),

        _ => None,
    }
}

/// Search panel has keyboard focus
fn handle_key_search(state: &AppState, key: InputKey) -> Option<Message> {
    let search = &state.search;
    let focus = search.focus;

    match key {
        InputKey::Esc => Some(Message::BlurSearch),
        InputKey::Enter => Some(Message::SubmitSearch),
        InputKey::Tab => Some(Message::SearchFocusNext),
        InputKey::BackTab => Some(Message::SearchFocusPrev),
        InputKey::CharCtrl('a') => Some(Message::ToggleAdvancedSearch),

        InputKey::Char(' ') if focus.is_toggle() => Some(Message::SearchToggleRange),
        InputKey::Left if focus.is_slider() => Some(Message::SearchNudge { steps: -1 }),
        InputKey::Right if focus.is_slider() => Some(Message::SearchNudge { steps: 1 }),

        InputKey::CharCtrl('u') if focus.is_text() => Some(Message::SearchInput {
            text: String::new(),
        }),
        InputKey::Backspace => search.focused_text().map(|current| {
            let mut text = current.to_string();
            text.pop();
            Message::SearchInput { text }
        }),
        key => {
            let c = key.printable()?;
            search.focused_text().map(|current| Message::SearchInput {
                text: format!("{current}{c}"),
            })
        }
    }
}

fn handle_key_edit(edit: &EditState, key: InputKey) -> Option<Message> {
    match &edit.phase {
        EditPhase::Loading => match key {
            InputKey::Esc | InputKey::Char('q') => Some(Message::CloseEdit),
            _ => None,
        },
        EditPhase::LoadFailed { .. } => match key {
            InputKey::Char('r') => Some(Message::RetryLoadProduct),
            InputKey::Esc | InputKey::Char('q') => Some(Message::CloseEdit),
            _ => None,
        },
        EditPhase::Saving => match key {
            InputKey::Esc => Some(Message::CloseEdit),
            _ => None,
        },
        EditPhase::Success { .. } | EditPhase::Error { .. }
            if matches!(key, InputKey::Esc | InputKey::Enter) =>
        {
            Some(Message::DismissAlert)
        }
        _ => handle_key_edit_form(edit, key),
    }
}

/// Form is loaded and accepting input
fn handle_key_edit_form(edit: &EditState, key: InputKey) -> Option<Message> {
    let form = edit.form.as_ref()?;
    let focus = form.focus;

    match key {
        InputKey::Esc => Some(Message::CloseEdit),
        InputKey::CharCtrl('s') => Some(Message::SaveProduct),
        InputKey::Tab | InputKey::Down => Some(Message::EditFocusNext),
        InputKey::BackTab | InputKey::Up => Some(Message::EditFocusPrev),

        InputKey::Enter if focus == EditField::Save => Some(Message::SaveProduct),
        InputKey::Enter => Some(Message::EditFocusNext),

        InputKey::Left if focus == EditField::Category => {
            Some(Message::EditCycleCategory { forward: false })
        }
        InputKey::Right | InputKey::Char(' ') if focus == EditField::Category => {
            Some(Message::EditCycleCategory { forward: true })
        }

        InputKey::CharCtrl('u') if focus.is_text() => Some(Message::EditInput {
            text: String::new(),
        }),
        InputKey::Backspace => form.focused_text().map(|current| {
            let mut text = current.to_string();
            text.pop();
            Message::EditInput { text }
        }),
        key => {
            let c = key.printable()?;
            form.focused_text().map(|current| Message::EditInput {
                text: format!("{current}{c}"),
            })
        }
    }
}
