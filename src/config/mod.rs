mod types;

pub use types::*;

use crate::Result;
use std::{env, path::Path};
use tracing::{debug, warn};

pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";
pub const PLACEHOLDER_API_KEY: &str = "DUMMY_KEY";

/// Loads configuration from `CONFIG_PATH` (or `config.yaml`).
pub async fn load() -> Result<Config> {
    let explicit_path = env::var("CONFIG_PATH").ok();
    load_from(explicit_path.as_deref()).await
}

/// Reads the YAML file at `path`. With no explicit path, a missing
/// `config.yaml` yields the built-in defaults.
pub async fn load_from(path: Option<&str>) -> Result<Config> {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    if path.is_none() && !Path::new(config_path).exists() {
        debug!("No {} found, using default configuration", config_path);
        return Ok(Config::default());
    }

    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

/// Picks the configured key, then the environment key, then the placeholder.
pub fn resolve_api_key(configured: Option<String>, from_env: Option<String>) -> Option<String> {
    let key = configured
        .filter(|k| !k.trim().is_empty())
        .or_else(|| from_env.filter(|k| !k.trim().is_empty()));

    match key {
        Some(key) => Some(key),
        None => {
            warn!("{} is not defined in environment variables.", API_KEY_ENV);
            Some(PLACEHOLDER_API_KEY.to_string())
        }
    }
}
