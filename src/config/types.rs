use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Which job-search API populates the feed.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Remotive,
    Jsearch,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    #[serde(default)]
    pub provider: Provider,
    /// Overrides the provider's default base URL (used by tests and proxies).
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_search")]
    pub search: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_rapidapi_host")]
    pub rapidapi_host: String,
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl UpstreamConfig {
    pub fn resolved_base_url(&self) -> String {
        self.base_url.clone().unwrap_or_else(|| match self.provider {
            Provider::Remotive => default_remotive_url(),
            Provider::Jsearch => format!("https://{}", self.rapidapi_host),
        })
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            provider: Provider::default(),
            base_url: None,
            search: default_search(),
            api_key: None,
            rapidapi_host: default_rapidapi_host(),
            request_timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    #[serde(default = "default_ttl")]
    pub ttl_secs: u64,
    #[serde(default = "default_true")]
    pub persist: bool,
    #[serde(default = "default_persist_path")]
    pub persist_path: PathBuf,
    #[serde(default = "default_true")]
    pub warm_on_start: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl(),
            persist: true,
            persist_path: default_persist_path(),
            warm_on_start: true,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    3000
}

fn default_search() -> String {
    "front end".into()
}

fn default_remotive_url() -> String {
    "https://remotive.com".into()
}

fn default_rapidapi_host() -> String {
    "jsearch.p.rapidapi.com".into()
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("job-feed-cache/", env!("CARGO_PKG_VERSION")).into()
}

fn default_ttl() -> u64 {
    7200 // 2 hours
}

fn default_true() -> bool {
    true
}

fn default_persist_path() -> PathBuf {
    PathBuf::from("job_cache.json")
}
