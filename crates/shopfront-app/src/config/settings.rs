//! Loading, creating and resolving the settings file

use std::path::{Path, PathBuf};

use url::Url;

use shopfront_core::prelude::*;

use super::types::Settings;

/// Environment variable overriding `api.base_url`
pub const API_BASE_ENV: &str = "SHOPFRONT_API_BASE_URI";

const CONFIG_DIR: &str = "shopfront";
const CONFIG_FILENAME: &str = "config.toml";

/// `{config_dir}/shopfront/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`.
///
/// A missing file yields defaults; an unreadable or malformed file is logged
/// and also yields defaults.
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config file unless one already exists
pub fn init_config_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::config(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }
    }

    if path.exists() {
        debug!("Config file {:?} already exists, leaving it alone", path);
        return Ok(());
    }

    let default_content = r#"# Shopfront Configuration

[api]
# Product API location, may include a path prefix
base_url = "http://localhost:8080"
# Products per page
page_size = 10
# Request timeout in seconds (0 = no timeout)
timeout_secs = 0

[search]
# Advanced search slider bounds
price_min = 0
price_max = 10000
quantity_min = 0
quantity_max = 500
# Arrow keys move a slider handle by this much
price_step = 100
quantity_step = 5

[ui]
currency_symbol = "₹"
placeholder_image_base = "https://picsum.photos/500?random="
"#;
    std::fs::write(path, default_content)
        .map_err(|e| Error::config(format!("Failed to write {}: {}", path.display(), e)))?;
    info!("Created config file at {:?}", path);
    Ok(())
}

/// Apply `SHOPFRONT_API_BASE_URI` over the file value
pub fn apply_env_overrides(settings: &mut Settings) {
    if let Ok(base) = std::env::var(API_BASE_ENV) {
        let base = base.trim();
        if !base.is_empty() {
            debug!("{} overrides api.base_url", API_BASE_ENV);
            settings.api.base_url = base.to_string();
        }
    }
}

impl Settings {
    /// Reject settings the app cannot run with
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.api.base_url).map_err(|e| {
            Error::config_invalid(format!("api.base_url '{}': {}", self.api.base_url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config_invalid(format!(
                "api.base_url '{}' must use http or https",
                self.api.base_url
            )));
        }
        if self.api.page_size == 0 {
            return Err(Error::config_invalid("api.page_size must be at least 1"));
        }
        if self.search.price_min > self.search.price_max {
            return Err(Error::config_invalid(
                "search.price_min must not exceed search.price_max",
            ));
        }
        if self.search.quantity_min > self.search.quantity_max {
            return Err(Error::config_invalid(
                "search.quantity_min must not exceed search.quantity_max",
            ));
        }
        Ok(())
    }
}
