//! Shopfront - a terminal client for a product catalog REST API
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::eyre;
use tracing::info;

use shopfront_api::ApiClient;
use shopfront_app::config::{
    apply_env_overrides, default_config_path, init_config_file, load_settings, Settings,
};
use shopfront_tui::StartPage;

/// Shopfront - browse, search and edit a product catalog
#[derive(Parser, Debug)]
#[command(name = "shopfront")]
#[command(about = "Browse, search and edit a product catalog from the terminal", long_about = None)]
struct Args {
    /// API base URL (overrides config file and SHOPFRONT_API_BASE_URI)
    #[arg(long, value_name = "URL")]
    api_base: Option<String>,

    /// Path to config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Products per page
    #[arg(long)]
    page_size: Option<u32>,

    /// Open the edit page for this product id
    #[arg(long, value_name = "ID")]
    edit: Option<String>,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    shopfront_core::logging::init()?;

    let config_path = args
        .config
        .clone()
        .or_else(default_config_path)
        .ok_or_else(|| eyre!("no config directory on this platform, pass --config"))?;

    if args.init_config {
        init_config_file(&config_path)?;
        eprintln!("Config file: {}", config_path.display());
        return Ok(());
    }

    let settings = resolve_settings(&args, load_settings(&config_path));
    settings.validate()?;
    info!("Using config {:?}", config_path);

    let client = ApiClient::new(&settings.api.to_api_config())?;
    let start = match args.edit {
        Some(id) => StartPage::Edit(id),
        None => StartPage::Home,
    };

    shopfront_tui::run(settings, Arc::new(client), start).await?;
    Ok(())
}

/// Layer environment and command line over the file settings
fn resolve_settings(args: &Args, mut settings: Settings) -> Settings {
    apply_env_overrides(&mut settings);
    if let Some(base) = &args.api_base {
        settings.api.base_url = base.clone();
    }
    if let Some(page_size) = args.page_size {
        settings.api.page_size = page_size;
    }
    settings
}
