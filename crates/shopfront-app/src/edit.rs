//! Edit page state machine
//!
//! ```text
//! Loading ──► Loaded ──► Saving ──► Success ─┐
//!    │          ▲                 └► Error ──┤ (dismiss)
//!    ▼          └────────────────────────────┘
//! LoadFailed ──(retry)──► Loading
//! ```
//!
//! The form is bound to local state after the initial load; nothing reaches
//! the server until an explicit save.

use shopfront_core::prelude::*;
use shopfront_core::{Category, Product, ProductUpdate};

use crate::request::RequestToken;

pub const SAVE_SUCCESS_MESSAGE: &str = "Product updated successfully.";
pub const NO_RESPONSE_MESSAGE: &str = "No response received from server.";
pub const GENERIC_SAVE_ERROR_MESSAGE: &str = "Server error.";

/// Why a save did not produce a 204
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveFailure {
    /// 2xx other than 204
    UnexpectedStatus(u16),
    /// Non-2xx status
    ErrorStatus(u16),
    /// The request never got a response
    NoResponse,
    /// Anything else (bad URL, decode failure, ...)
    Other,
}

impl SaveFailure {
    pub fn from_error(err: &Error) -> Self {
        match err {
            Error::Status { status } if (200..300).contains(status) => {
                SaveFailure::UnexpectedStatus(*status)
            }
            Error::Status { status } => SaveFailure::ErrorStatus(*status),
            Error::Transport { .. } => SaveFailure::NoResponse,
            _ => SaveFailure::Other,
        }
    }

    /// User-facing text for the error alert
    pub fn message(&self) -> String {
        match self {
            SaveFailure::UnexpectedStatus(status) => {
                format!("Unexpected response from server. Status code: {status}")
            }
            SaveFailure::ErrorStatus(status) => format!("Server returned status code {status}."),
            SaveFailure::NoResponse => NO_RESPONSE_MESSAGE.to_string(),
            SaveFailure::Other => GENERIC_SAVE_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Form controls in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Name,
    Price,
    Quantity,
    Brand,
    Description,
    Category,
    Save,
}

impl EditField {
    pub const ORDER: [EditField; 7] = [
        EditField::Name,
        EditField::Price,
        EditField::Quantity,
        EditField::Brand,
        EditField::Description,
        EditField::Category,
        EditField::Save,
    ];

    pub fn next(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            EditField::Name => "Name",
            EditField::Price => "Price",
            EditField::Quantity => "Quantity",
            EditField::Brand => "Brand",
            EditField::Description => "Description",
            EditField::Category => "Category",
            EditField::Save => "Save",
        }
    }

    /// Whether typed characters edit this field
    pub fn is_text(self) -> bool {
        !matches!(self, EditField::Category | EditField::Save)
    }
}

/// Optional leading `-`, then digits with at most one decimal point (empty
/// allowed while typing). A negative price is refused at save time instead, so
/// a seeded negative value can still be edited key by key.
pub fn is_valid_price_text(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    digits.chars().all(|c| c.is_ascii_digit() || c == '.')
        && digits.chars().filter(|c| *c == '.').count() <= 1
}

/// Digits only, within `u32` (empty allowed while typing)
pub fn is_valid_quantity_text(text: &str) -> bool {
    text.is_empty() || (text.chars().all(|c| c.is_ascii_digit()) && text.parse::<u32>().is_ok())
}

/// Local editable copy of a product
#[derive(Debug, Clone, PartialEq)]
pub struct EditForm {
    pub name: String,
    pub price: String,
    pub quantity: String,
    pub brand: String,
    pub description: String,
    pub category: String,
    pub focus: EditField,
    /// Record as last fetched or saved
    pub original: Product,
}

impl EditForm {
    pub fn from_product(product: Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
            quantity: product.quantity.to_string(),
            brand: product.brand.clone(),
            description: product.description.clone(),
            category: product.category.clone(),
            focus: EditField::Name,
            original: product,
        }
    }

    pub fn focused_text(&self) -> Option<&str> {
        self.text(self.focus)
    }

    /// Current text of a text field; `None` for category and the save button
    pub fn text(&self, field: EditField) -> Option<&str> {
        match field {
            EditField::Name => Some(&self.name),
            EditField::Price => Some(&self.price),
            EditField::Quantity => Some(&self.quantity),
            EditField::Brand => Some(&self.brand),
            EditField::Description => Some(&self.description),
            EditField::Category | EditField::Save => None,
        }
    }

    /// Replace the focused field's text.
    ///
    /// Returns `false` and leaves the field untouched when the text would make
    /// a numeric field unparsable.
    pub fn set_focused_text(&mut self, text: String) -> bool {
        match self.focus {
            EditField::Name => self.name = text,
            EditField::Price if is_valid_price_text(&text) => self.price = text,
            EditField::Quantity if is_valid_quantity_text(&text) => self.quantity = text,
            EditField::Brand => self.brand = text,
            EditField::Description => self.description = text,
            _ => return false,
        }
        true
    }

    /// Step through the fixed category list; an unknown label starts at the first
    pub fn cycle_category(&mut self, forward: bool) {
        let next = match Category::from_label(&self.category) {
            Some(current) if forward => current.next(),
            Some(current) => current.prev(),
            None => Category::ALL[0],
        };
        self.category = next.label().to_string();
    }

    /// Build the update payload from the form
    pub fn to_update(&self) -> Result<ProductUpdate> {
        // f64 parsing saturates to infinity on very long input
        let price = self
            .price
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .ok_or_else(|| Error::validation("Price", "enter a number"))?;
        if price < 0.0 {
            return Err(Error::validation("Price", "must not be negative"));
        }
        let quantity = self
            .quantity
            .parse::<u32>()
            .map_err(|_| Error::validation("Quantity", "enter a whole number"))?;

        Ok(ProductUpdate {
            name: self.name.clone(),
            price,
            quantity,
            category: self.category.clone(),
            description: self.description.clone(),
            brand: self.brand.clone(),
        })
    }

    /// Whether the form differs from the last known record
    pub fn is_dirty(&self) -> bool {
        self.to_update()
            .map_or(true, |update| update != ProductUpdate::from(&self.original))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditPhase {
    Loading,
    LoadFailed { message: String },
    Loaded,
    Saving,
    Success { message: String },
    Error { message: String },
}

#[derive(Debug, Clone)]
pub struct EditState {
    pub id: String,
    pub phase: EditPhase,
    /// Present once the product has loaded
    pub form: Option<EditForm>,
    /// Token of the load or save awaiting a response
    pub pending: Option<RequestToken>,
}

impl EditState {
    pub fn loading(id: impl Into<String>, token: RequestToken) -> Self {
        Self {
            id: id.into(),
            phase: EditPhase::Loading,
            form: None,
            pending: Some(token),
        }
    }

    fn take_pending(&mut self, token: RequestToken) -> bool {
        if self.pending == Some(token) {
            self.pending = None;
            true
        } else {
            debug!("edit {}: ignoring response for {token}", self.id);
            false
        }
    }

    /// Populate the form; ignored unless `token` is the pending load
    pub fn apply_loaded(&mut self, token: RequestToken, product: Product) -> bool {
        if self.phase != EditPhase::Loading || !self.take_pending(token) {
            return false;
        }
        self.form = Some(EditForm::from_product(product));
        self.phase = EditPhase::Loaded;
        true
    }

    pub fn fail_load(&mut self, token: RequestToken, cause: &str) -> bool {
        if self.phase != EditPhase::Loading || !self.take_pending(token) {
            return false;
        }
        self.phase = EditPhase::LoadFailed {
            message: format!("Failed to load product {}. {cause}", self.id),
        };
        true
    }

    pub fn can_retry(&self) -> bool {
        matches!(self.phase, EditPhase::LoadFailed { .. })
    }

    pub fn retry_load(&mut self, token: RequestToken) {
        self.phase = EditPhase::Loading;
        self.pending = Some(token);
    }

    /// Whether the form accepts input and saves
    pub fn is_editable(&self) -> bool {
        self.form.is_some()
            && matches!(
                self.phase,
                EditPhase::Loaded | EditPhase::Success { .. } | EditPhase::Error { .. }
            )
    }

    /// Validate the form and enter `Saving`.
    ///
    /// A validation failure shows the error alert and yields `None`, so no
    /// request is issued.
    pub fn begin_save(&mut self, token: RequestToken) -> Option<ProductUpdate> {
        if !self.is_editable() {
            return None;
        }
        let form = self.form.as_ref()?;
        match form.to_update() {
            Ok(update) => {
                self.phase = EditPhase::Saving;
                self.pending = Some(token);
                Some(update)
            }
            Err(e) => {
                self.phase = EditPhase::Error {
                    message: e.to_string(),
                };
                None
            }
        }
    }

    pub fn complete_save(&mut self, token: RequestToken) -> bool {
        if self.phase != EditPhase::Saving || !self.take_pending(token) {
            return false;
        }
        if let Some(form) = self.form.as_mut() {
            if let Ok(update) = form.to_update() {
                let saved = &mut form.original;
                saved.name = update.name;
                saved.price = update.price;
                saved.quantity = update.quantity;
                saved.category = update.category;
                saved.description = update.description;
                saved.brand = update.brand;
            }
        }
        self.phase = EditPhase::Success {
            message: SAVE_SUCCESS_MESSAGE.to_string(),
        };
        true
    }

    pub fn fail_save(&mut self, token: RequestToken, failure: &SaveFailure) -> bool {
        if self.phase != EditPhase::Saving || !self.take_pending(token) {
            return false;
        }
        self.phase = EditPhase::Error {
            message: failure.message(),
        };
        true
    }

    /// Close a success or error alert
    pub fn dismiss_alert(&mut self) {
        if matches!(self.phase, EditPhase::Success { .. } | EditPhase::Error { .. }) {
            self.phase = EditPhase::Loaded;
        }
    }

    pub fn has_alert(&self) -> bool {
        matches!(self.phase, EditPhase::Success { .. } | EditPhase::Error { .. })
    }
}
