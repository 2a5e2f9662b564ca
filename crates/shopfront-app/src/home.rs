//! Home page state: the current page of products and its navigation
//!
//! Every successful fetch replaces the products and navigation wholesale.
//! A failed fetch only sets the error message; whatever was displayed before
//! stays on screen.

use chrono::{DateTime, Local};

use shopfront_core::{Navigation, ProductPage, ProductWithImage};

use crate::product_view::ProductViewState;
use crate::request::{ListOrigin, RequestToken};

/// Message shown when a page fetch fails, whatever the cause
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch products.";

#[derive(Debug, Clone, Default)]
pub struct HomeState {
    pub products: Vec<ProductWithImage>,
    /// One entry per product, rebuilt whenever `products` is replaced
    pub views: Vec<ProductViewState>,
    pub navigation: Option<Navigation>,
    pub loading: bool,
    pub error: Option<String>,
    /// Index of the highlighted product
    pub selected: usize,
    /// First product row shown in the viewport
    pub scroll: usize,
    pub last_fetched: Option<DateTime<Local>>,
    /// Latest list request still awaiting a response
    pub in_flight: Option<(RequestToken, ListOrigin)>,
}

impl HomeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a newly issued list request.
    ///
    /// A page fetch raises the loading flag and clears the error; a search
    /// supersedes any page fetch, so the flag drops.
    pub fn begin_fetch(&mut self, token: RequestToken, origin: ListOrigin) {
        self.in_flight = Some((token, origin));
        match origin {
            ListOrigin::Page => {
                self.loading = true;
                self.error = None;
            }
            ListOrigin::Search => self.loading = false,
        }
    }

    /// Replace the displayed page with a fetched one
    pub fn apply_page(&mut self, page: ProductPage, placeholder_base: &str, origin: ListOrigin) {
        let (products, navigation) = page.with_placeholder_images(placeholder_base);
        self.views = products
            .iter()
            .map(|p| ProductViewState::new(p.product.quantity))
            .collect();
        self.products = products;
        self.navigation = Some(navigation);
        if origin == ListOrigin::Page {
            self.error = None;
        }
        self.finish_fetch();
        self.last_fetched = Some(Local::now());
        self.clamp_selection();
    }

    /// A page fetch failed; keep the stale data
    pub fn fail_fetch(&mut self) {
        self.error = Some(FETCH_FAILED_MESSAGE.to_string());
        self.finish_fetch();
    }

    /// Clear in-flight bookkeeping without touching displayed data
    pub fn finish_fetch(&mut self) {
        self.in_flight = None;
        self.loading = false;
    }

    pub fn scroll_to_top(&mut self) {
        self.selected = 0;
        self.scroll = 0;
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.products.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn can_next(&self) -> bool {
        self.navigation.as_ref().is_some_and(Navigation::has_next)
    }

    pub fn can_prev(&self) -> bool {
        self.navigation.as_ref().is_some_and(Navigation::has_prev)
    }

    pub fn selected_product(&self) -> Option<&ProductWithImage> {
        self.products.get(self.selected)
    }

    pub fn selected_view_mut(&mut self) -> Option<&mut ProductViewState> {
        self.views.get_mut(self.selected)
    }

    fn clamp_selection(&mut self) {
        if self.selected >= self.products.len() {
            self.selected = self.products.len().saturating_sub(1);
        }
        if self.scroll > self.selected {
            self.scroll = self.selected;
        }
    }
}
