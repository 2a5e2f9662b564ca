//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Areas of the home screen
#[derive(Debug, Clone, Copy)]
pub struct HomeAreas {
    /// Title and key hints
    pub header: Rect,
    /// Search panel (taller when advanced options are shown)
    pub search: Rect,
    /// Status line, error line and product cards
    pub list: Rect,
    /// Previous / page indicator / next
    pub pagination: Rect,
}

/// Height of the search panel including its border
pub fn search_height(advanced: bool) -> u16 {
    if advanced {
        6
    } else {
        3
    }
}

/// Split the home screen
pub fn home(area: Rect, advanced_search: bool) -> HomeAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(search_height(advanced_search)),
        Constraint::Min(3),
        Constraint::Length(3),
    ])
    .split(area);

    HomeAreas {
        header: chunks[0],
        search: chunks[1],
        list: chunks[2],
        pagination: chunks[3],
    }
}

/// Split the edit screen into header and form
pub fn edit(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).split(area);
    (chunks[0], chunks[1])
}
