//! Query parameters for product list requests
//!
//! Only filters that are set are sent; the backend treats a missing
//! parameter as "no constraint".

/// Parameter names understood by `GET /products`
pub mod params {
    pub const START: &str = "start";
    pub const LIMIT: &str = "limit";
    pub const NAME: &str = "name";
    pub const BRAND: &str = "brand";
    pub const CATEGORY: &str = "category";
    pub const PRICE_MIN: &str = "price_greater_than_e";
    pub const PRICE_MAX: &str = "price_less_than_e";
    pub const QUANTITY_MIN: &str = "quantity_greater_than_e";
    pub const QUANTITY_MAX: &str = "quantity_less_than_e";

    /// Every known parameter, in the order they are emitted
    pub const ALL: [&str; 9] = [
        START,
        LIMIT,
        NAME,
        BRAND,
        CATEGORY,
        PRICE_MIN,
        PRICE_MAX,
        QUANTITY_MIN,
        QUANTITY_MAX,
    ];
}

/// Filters for one search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchCriteria {
    /// Free text matched against the product name only
    Basic(String),
    /// Independently enabled filters
    Advanced(AdvancedCriteria),
}

/// Advanced search filters; empty strings and `None` ranges are omitted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvancedCriteria {
    pub name: String,
    pub brand: String,
    pub category: String,
    /// Inclusive `(min, max)` price bounds
    pub price: Option<(u32, u32)>,
    /// Inclusive `(min, max)` quantity bounds
    pub quantity: Option<(u32, u32)>,
}

/// Ordered query parameters for `GET /products`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    params: Vec<(&'static str, String)>,
}

impl ListQuery {
    /// First-page style request: optional 1-based `start` and a page size
    pub fn page(start: Option<u32>, limit: u32) -> Self {
        let mut query = Self::default();
        if let Some(start) = start {
            query.push(params::START, start.to_string());
        }
        query.push(params::LIMIT, limit.to_string());
        query
    }

    /// Build the request for a search, keeping only active filters
    pub fn from_criteria(criteria: &SearchCriteria, limit: u32) -> Self {
        let mut query = Self::default();
        query.push(params::LIMIT, limit.to_string());

        match criteria {
            SearchCriteria::Basic(text) => {
                query.push_non_empty(params::NAME, text);
            }
            SearchCriteria::Advanced(adv) => {
                query.push_non_empty(params::NAME, &adv.name);
                query.push_non_empty(params::BRAND, &adv.brand);
                query.push_non_empty(params::CATEGORY, &adv.category);
                if let Some((low, high)) = adv.price {
                    query.push(params::PRICE_MIN, low.to_string());
                    query.push(params::PRICE_MAX, high.to_string());
                }
                if let Some((low, high)) = adv.quantity {
                    query.push(params::QUANTITY_MIN, low.to_string());
                    query.push(params::QUANTITY_MAX, high.to_string());
                }
            }
        }

        query
    }

    /// Rebuild a query from decoded key/value pairs; unknown keys are dropped
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            if let Some(known) = params::ALL.iter().find(|p| **p == key.as_ref()) {
                query.push(*known, value.into());
            }
        }
        query
    }

    fn push(&mut self, key: &'static str, value: String) {
        self.params.push((key, value));
    }

    fn push_non_empty(&mut self, key: &'static str, value: &str) {
        if !value.is_empty() {
            self.push(key, value.to_string());
        }
    }

    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Parameter names in emission order
    pub fn keys(&self) -> Vec<&'static str> {
        self.params.iter().map(|(k, _)| *k).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}
