//! Configuration file parsing for Shopfront
//!
//! Settings live in `{config_dir}/shopfront/config.toml`. The API base URL
//! can be overridden by `SHOPFRONT_API_BASE_URI` and by the command line.

pub mod settings;
pub mod types;

pub use settings::{
    apply_env_overrides, default_config_path, init_config_file, load_settings, API_BASE_ENV,
};
pub use types::*;
