use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::adapters::jsearch::parser;
use crate::adapters::shared::{build_http_client, fetch_json};
use crate::config::API_KEY_VAR;
use crate::config::types::UpstreamConfig;
use crate::domain::job_post::JobPost;
use crate::error::{JobFeedError, Result};
use crate::ports::job_source::JobSource;

/// JSearch on RapidAPI. Needs an API key; only the first page is requested.
pub struct JSearchClient {
    http: Client,
    base_url: String,
    search: String,
    api_key: Option<String>,
    host: String,
}

impl JSearchClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        if config.api_key.is_none() {
            tracing::warn!("{API_KEY_VAR} is not set, JSearch requests will fail");
        }
        Ok(Self {
            http: build_http_client(config)?,
            base_url: config.resolved_base_url(),
            search: config.search.clone(),
            api_key: config.api_key.clone(),
            host: config.rapidapi_host.clone(),
        })
    }
}

#[async_trait]
impl JobSource for JSearchClient {
    async fn fetch_job_posts(&self) -> Result<Vec<JobPost>> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            JobFeedError::Config(format!("{API_KEY_VAR} is required for the JSearch provider"))
        })?;

        let url = build_search_url(&self.base_url, &self.search)?;
        let request = self
            .http
            .get(url.clone())
            .header("X-RapidAPI-Key", api_key)
            .header("X-RapidAPI-Host", &self.host);
        let json = fetch_json(request, url.as_str()).await?;
        let posts = parser::parse_jobs(&json)?;
        debug!(count = posts.len(), "Parsed JSearch jobs");
        Ok(posts)
    }

    fn name(&self) -> &'static str {
        "jsearch"
    }
}

fn build_search_url(base_url: &str, search: &str) -> Result<Url> {
    let mut url = Url::parse(&format!("{}/search", base_url.trim_end_matches('/')))?;
    url.query_pairs_mut()
        .append_pair("query", search)
        .append_pair("page", "1")
        .append_pair("num_pages", "1");
    Ok(url)
}
