//! Per-product view state: the expanded flag and the quantity selector

/// Bounded integer picker; moving never leaves `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantitySelector {
    pub value: u32,
    pub min: u32,
    pub max: u32,
}

impl QuantitySelector {
    /// Selector for a product with `available` units in stock.
    ///
    /// Starts at 1 even when nothing is available, so the display reads
    /// `1 (0 available)` for an out-of-stock product.
    pub fn for_stock(available: u32) -> Self {
        Self {
            value: 1,
            min: 1,
            max: available,
        }
    }

    pub fn increment(&mut self) {
        if self.value < self.max {
            self.value += 1;
        }
    }

    pub fn decrement(&mut self) {
        if self.value > self.min {
            self.value -= 1;
        }
    }
}

/// UI state owned by one rendered product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductViewState {
    pub expanded: bool,
    pub quantity: QuantitySelector,
}

impl ProductViewState {
    pub fn new(available: u32) -> Self {
        Self {
            expanded: false,
            quantity: QuantitySelector::for_stock(available),
        }
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }
}
