//! Configuration types for Shopfront
//!
//! Every field has a serde default so a partial (or empty) file still loads.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use shopfront_api::{ApiConfig, DEFAULT_BASE_URL};
use shopfront_core::{DEFAULT_CURRENCY_SYMBOL, DEFAULT_PLACEHOLDER_IMAGE_BASE};

/// Global application settings from `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub search: SearchSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Where and how to reach the product API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Scheme, host and optional path prefix
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Products requested per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Whole-request timeout in seconds (0 = wait indefinitely)
    #[serde(default)]
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
            timeout_secs: 0,
        }
    }
}

impl ApiSettings {
    pub fn to_api_config(&self) -> ApiConfig {
        let config = ApiConfig::new(self.base_url.clone());
        if self.timeout_secs > 0 {
            config.with_timeout(Duration::from_secs(self.timeout_secs))
        } else {
            config
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_page_size() -> u32 {
    10
}

/// Slider bounds and steps for the advanced search panel
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SearchSettings {
    #[serde(default)]
    pub price_min: u32,

    #[serde(default = "default_price_max")]
    pub price_max: u32,

    #[serde(default)]
    pub quantity_min: u32,

    #[serde(default = "default_quantity_max")]
    pub quantity_max: u32,

    #[serde(default = "default_price_step")]
    pub price_step: u32,

    #[serde(default = "default_quantity_step")]
    pub quantity_step: u32,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            price_min: 0,
            price_max: default_price_max(),
            quantity_min: 0,
            quantity_max: default_quantity_max(),
            price_step: default_price_step(),
            quantity_step: default_quantity_step(),
        }
    }
}

fn default_price_max() -> u32 {
    10_000
}

fn default_quantity_max() -> u32 {
    500
}

fn default_price_step() -> u32 {
    100
}

fn default_quantity_step() -> u32 {
    5
}

/// Display settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Prefix for synthesized product images; the page index is appended
    #[serde(default = "default_placeholder_image_base")]
    pub placeholder_image_base: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            placeholder_image_base: default_placeholder_image_base(),
        }
    }
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn default_placeholder_image_base() -> String {
    DEFAULT_PLACEHOLDER_IMAGE_BASE.to_string()
}
