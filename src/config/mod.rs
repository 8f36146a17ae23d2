pub mod types;

use std::path::Path;

use crate::error::{JobFeedError, Result};
use types::Config;

pub const API_KEY_VAR: &str = "JOB_API_KEY";
pub const PORT_VAR: &str = "JOB_FEED_PORT";
pub const SEARCH_VAR: &str = "JOB_FEED_SEARCH";

pub fn load_config(path: &Path) -> Result<Config> {
    let config = read_config_file(path)?;
    apply_env_overrides(config, |name| std::env::var(name).ok())
}

fn read_config_file(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        JobFeedError::Config(format!(
            "failed to read config file {}: {e}",
            path.display()
        ))
    })?;
    let config: Config = serde_yml::from_str(&content)?;
    Ok(config)
}

/// Layer environment variables over file settings.
///
/// `lookup` resolves a variable name; empty values count as unset.
pub fn apply_env_overrides(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<Config> {
    let lookup = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(key) = lookup(API_KEY_VAR) {
        config.upstream.api_key = Some(key);
    }
    if let Some(search) = lookup(SEARCH_VAR) {
        config.upstream.search = search;
    }
    if let Some(port) = lookup(PORT_VAR) {
        config.server.port = port
            .trim()
            .parse::<u16>()
            .map_err(|e| JobFeedError::Config(format!("invalid {PORT_VAR} '{port}': {e}")))?;
    }
    Ok(config)
}
