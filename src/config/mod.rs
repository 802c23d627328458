mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Environment variable that overrides `api.api_key`.
pub const API_KEY_ENV: &str = "CINESCROLL_API_KEY";

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    apply_env_overrides(&mut config);
    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = ["./cinescroll.toml", "~/.config/cinescroll/config.toml"];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    let mut config = Config::default();
    apply_env_overrides(&mut config);
    validate_config(&config)?;
    Ok(config)
}

fn apply_env_overrides(config: &mut Config) {
    if let Ok(key) = std::env::var(API_KEY_ENV) {
        if !key.trim().is_empty() {
            config.api.api_key = key;
        }
    }
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    reqwest::Url::parse(&config.api.base_url)
        .with_context(|| format!("Invalid api.base_url: {}", config.api.base_url))?;

    reqwest::Url::parse(&config.api.image_base_url)
        .with_context(|| format!("Invalid api.image_base_url: {}", config.api.image_base_url))?;

    if config.api.timeout_secs == 0 {
        anyhow::bail!("api.timeout_secs cannot be 0");
    }

    if config.browse.pages == 0 {
        anyhow::bail!("browse.pages must be at least 1");
    }

    if !config.api.has_api_key() {
        tracing::warn!("No API key configured; set api.api_key or {}", API_KEY_ENV);
    }

    Ok(())
}
