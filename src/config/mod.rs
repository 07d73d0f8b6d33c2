mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    load_from(&config_path).await
}

pub async fn load_from(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    let mut config: Config = serde_yaml::from_str(&config_str)?;

    // Secrets can be supplied outside the config file
    if let Ok(token) = env::var("WORKERS_AI_API_TOKEN") {
        config.inference.api_token = token;
    }

    validate(&config)?;

    Ok(config)
}

fn validate(config: &Config) -> Result<()> {
    if config.inference.account_id.is_empty() {
        return Err(Error::config("inference.account_id must be set"));
    }
    if config.inference.api_token.is_empty() {
        return Err(Error::config(
            "inference.api_token must be set (or exported as WORKERS_AI_API_TOKEN)",
        ));
    }
    Ok(())
}
