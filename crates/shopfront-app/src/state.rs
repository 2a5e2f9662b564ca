//! Application state (Model in TEA pattern)

use crate::config::Settings;
use crate::edit::EditState;
use crate::home::HomeState;
use crate::request::RequestSeq;
use crate::search::SearchPanelState;

/// Which page is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Edit,
}

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub screen: Screen,
    pub settings: Settings,

    pub home: HomeState,
    pub search: SearchPanelState,
    /// Present while the edit page is open
    pub edit: Option<EditState>,

    /// Shared by every list fetch (pagination and search)
    pub list_requests: RequestSeq,
    /// Shared by edit page loads and saves
    pub edit_requests: RequestSeq,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            screen: Screen::Home,
            search: SearchPanelState::new(&settings.search),
            home: HomeState::new(),
            edit: None,
            list_requests: RequestSeq::new(),
            edit_requests: RequestSeq::new(),
            settings,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn page_size(&self) -> u32 {
        self.settings.api.page_size
    }

    pub fn placeholder_base(&self) -> &str {
        &self.settings.ui.placeholder_image_base
    }

    pub fn currency_symbol(&self) -> &str {
        &self.settings.ui.currency_symbol
    }
}
