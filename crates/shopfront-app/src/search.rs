//! Search panel state: basic and advanced criteria being composed
//!
//! Nothing here is persisted; the panel only turns its fields into a
//! [`SearchCriteria`] when the user submits.

use shopfront_api::{AdvancedCriteria, SearchCriteria};

use crate::config::SearchSettings;

/// Two-handle slider with an enable checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeFilter {
    pub enabled: bool,
    pub low: u32,
    pub high: u32,
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl RangeFilter {
    /// Disabled filter spanning the whole `[min, max]` range
    pub fn new(min: u32, max: u32, step: u32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            enabled: false,
            low: min,
            high: max,
            min,
            max,
            step: step.max(1),
        }
    }

    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    /// Move the low handle; it never passes the high handle
    pub fn set_low(&mut self, value: u32) {
        self.low = value.clamp(self.min, self.high);
    }

    /// Move the high handle; it never passes the low handle
    pub fn set_high(&mut self, value: u32) {
        self.high = value.clamp(self.low, self.max);
    }

    pub fn nudge_low(&mut self, steps: i32) {
        self.set_low(offset(self.low, self.step, steps));
    }

    pub fn nudge_high(&mut self, steps: i32) {
        self.set_high(offset(self.high, self.step, steps));
    }

    /// Active bounds, `None` while the checkbox is off
    pub fn bounds(&self) -> Option<(u32, u32)> {
        self.enabled.then_some((self.low, self.high))
    }
}

fn offset(value: u32, step: u32, steps: i32) -> u32 {
    let delta = step.saturating_mul(steps.unsigned_abs());
    if steps < 0 {
        value.saturating_sub(delta)
    } else {
        value.saturating_add(delta)
    }
}

/// Focusable controls of the search panel, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Basic,
    Name,
    Brand,
    Category,
    PriceToggle,
    PriceLow,
    PriceHigh,
    QuantityToggle,
    QuantityLow,
    QuantityHigh,
}

impl SearchField {
    const ADVANCED_ORDER: [SearchField; 10] = [
        SearchField::Basic,
        SearchField::Name,
        SearchField::Brand,
        SearchField::Category,
        SearchField::PriceToggle,
        SearchField::PriceLow,
        SearchField::PriceHigh,
        SearchField::QuantityToggle,
        SearchField::QuantityLow,
        SearchField::QuantityHigh,
    ];

    pub fn is_text(self) -> bool {
        matches!(
            self,
            SearchField::Basic | SearchField::Name | SearchField::Brand | SearchField::Category
        )
    }

    pub fn is_toggle(self) -> bool {
        matches!(self, SearchField::PriceToggle | SearchField::QuantityToggle)
    }

    pub fn is_slider(self) -> bool {
        matches!(
            self,
            SearchField::PriceLow
                | SearchField::PriceHigh
                | SearchField::QuantityLow
                | SearchField::QuantityHigh
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            SearchField::Basic => "Search",
            SearchField::Name => "Name",
            SearchField::Brand => "Brand",
            SearchField::Category => "Category",
            SearchField::PriceToggle => "Filter by price",
            SearchField::PriceLow => "Min price",
            SearchField::PriceHigh => "Max price",
            SearchField::QuantityToggle => "Filter by quantity",
            SearchField::QuantityLow => "Min quantity",
            SearchField::QuantityHigh => "Max quantity",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchPanelState {
    pub advanced: bool,
    pub basic_query: String,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub price: RangeFilter,
    pub quantity: RangeFilter,
    pub focus: SearchField,
    /// Whether keystrokes go to the panel rather than the product list
    pub focused: bool,
}

impl Default for SearchPanelState {
    fn default() -> Self {
        Self::new(&SearchSettings::default())
    }
}

impl SearchPanelState {
    pub fn new(settings: &SearchSettings) -> Self {
        Self {
            advanced: false,
            basic_query: String::new(),
            name: String::new(),
            brand: String::new(),
            category: String::new(),
            price: RangeFilter::new(settings.price_min, settings.price_max, settings.price_step),
            quantity: RangeFilter::new(
                settings.quantity_min,
                settings.quantity_max,
                settings.quantity_step,
            ),
            focus: SearchField::Basic,
            focused: false,
        }
    }

    /// Controls reachable with the current mode
    pub fn fields(&self) -> &'static [SearchField] {
        if self.advanced {
            &SearchField::ADVANCED_ORDER
        } else {
            &SearchField::ADVANCED_ORDER[..1]
        }
    }

    pub fn focus_next(&mut self) {
        self.move_focus(1);
    }

    pub fn focus_prev(&mut self) {
        let len = self.fields().len();
        self.move_focus(len - 1);
    }

    fn move_focus(&mut self, by: usize) {
        let fields = self.fields();
        let current = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(current + by) % fields.len()];
    }

    pub fn toggle_advanced(&mut self) {
        self.advanced = !self.advanced;
        if !self.fields().contains(&self.focus) {
            self.focus = SearchField::Basic;
        }
    }

    /// Text of the focused field, if it is a text field
    pub fn focused_text(&self) -> Option<&str> {
        match self.focus {
            SearchField::Basic => Some(&self.basic_query),
            SearchField::Name => Some(&self.name),
            SearchField::Brand => Some(&self.brand),
            SearchField::Category => Some(&self.category),
            _ => None,
        }
    }

    pub fn set_focused_text(&mut self, text: String) {
        match self.focus {
            SearchField::Basic => self.basic_query = text,
            SearchField::Name => self.name = text,
            SearchField::Brand => self.brand = text,
            SearchField::Category => self.category = text,
            _ => {}
        }
    }

    pub fn toggle_focused_range(&mut self) {
        match self.focus {
            SearchField::PriceToggle => self.price.toggle(),
            SearchField::QuantityToggle => self.quantity.toggle(),
            _ => {}
        }
    }

    /// Move the focused slider handle by `steps` configured steps
    pub fn nudge_focused(&mut self, steps: i32) {
        match self.focus {
            SearchField::PriceLow => self.price.nudge_low(steps),
            SearchField::PriceHigh => self.price.nudge_high(steps),
            SearchField::QuantityLow => self.quantity.nudge_low(steps),
            SearchField::QuantityHigh => self.quantity.nudge_high(steps),
            _ => {}
        }
    }

    /// Criteria for the mode currently shown
    pub fn criteria(&self) -> SearchCriteria {
        if self.advanced {
            SearchCriteria::Advanced(AdvancedCriteria {
                name: self.name.clone(),
                brand: self.brand.clone(),
                category: self.category.clone(),
                price: self.price.bounds(),
                quantity: self.quantity.bounds(),
            })
        } else {
            SearchCriteria::Basic(self.basic_query.clone())
        }
    }
}
