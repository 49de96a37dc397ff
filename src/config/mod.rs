mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the configuration: `.env`, then the YAML file named by
/// `CONFIG_PATH` (or `config.yaml` when present), then environment
/// overrides.
pub async fn load() -> Result<Config> {
    dotenvy::dotenv().ok();

    let explicit_path = env::var("CONFIG_PATH").ok();
    let mut config = match explicit_path.as_deref() {
        Some(path) => from_file(path).await?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => from_file(DEFAULT_CONFIG_PATH).await?,
        None => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    config.apply_overrides(|key| env::var(key).ok())?;
    config.validate()?;

    Ok(config)
}

pub async fn from_file(path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", path);

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

impl Config {
    /// Applies `PORT`, `HOST`, `OPENAI_API_KEY`, `OPENAI_BASE_URL`,
    /// `PRICING_MODEL` and `LLM_TIMEOUT_SECS` from `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|e| Error::config(format!("Invalid PORT '{}': {}", port, e)))?;
        }
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(api_key) = lookup("OPENAI_API_KEY") {
            self.llm.api_key = api_key;
        }
        if let Some(base_url) = lookup("OPENAI_BASE_URL") {
            self.llm.base_url = base_url;
        }
        if let Some(model) = lookup("PRICING_MODEL") {
            self.llm.model = model;
        }
        if let Some(timeout) = lookup("LLM_TIMEOUT_SECS") {
            let secs = timeout.trim().parse().map_err(|e| {
                Error::config(format!("Invalid LLM_TIMEOUT_SECS '{}': {}", timeout, e))
            })?;
            self.llm.timeout_secs = Some(secs);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.llm.api_key.trim().is_empty() {
            return Err(Error::config(
                "LLM API key is missing (set OPENAI_API_KEY or llm.api_key)",
            ));
        }
        if self.llm.model.trim().is_empty() {
            return Err(Error::config("LLM model must not be empty"));
        }
        Ok(())
    }
}
