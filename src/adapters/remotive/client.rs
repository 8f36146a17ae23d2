use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::adapters::remotive::parser;
use crate::adapters::shared::{build_http_client, fetch_json};
use crate::config::types::UpstreamConfig;
use crate::domain::job_post::JobPost;
use crate::error::Result;
use crate::ports::job_source::JobSource;

/// Remotive public API. No key required.
pub struct RemotiveClient {
    http: Client,
    base_url: String,
    search: String,
}

impl RemotiveClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        Ok(Self {
            http: build_http_client(config)?,
            base_url: config.resolved_base_url(),
            search: config.search.clone(),
        })
    }

    fn search_url(&self) -> Result<Url> {
        build_search_url(&self.base_url, &self.search)
    }
}

#[async_trait]
impl JobSource for RemotiveClient {
    async fn fetch_job_posts(&self) -> Result<Vec<JobPost>> {
        let url = self.search_url()?;
        let json = fetch_json(self.http.get(url.clone()), url.as_str()).await?;
        let posts = parser::parse_jobs(&json)?;
        debug!(count = posts.len(), "Parsed Remotive jobs");
        Ok(posts)
    }

    fn name(&self) -> &'static str {
        "remotive"
    }
}

fn build_search_url(base_url: &str, search: &str) -> Result<Url> {
    let mut url = Url::parse(&format!(
        "{}/api/remote-jobs",
        base_url.trim_end_matches('/')
    ))?;
    if !search.is_empty() {
        url.query_pairs_mut().append_pair("search", search);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_encodes_term() {
        let url = build_search_url("https://remotive.com", "front end").unwrap();
        assert_eq!(url.path(), "/api/remote-jobs");
        let pairs: Vec<_> = url.query_pairs().collect();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0, "search");
        assert_eq!(pairs[0].1, "front end");
    }

    #[test]
    fn search_url_trailing_slash() {
        let url = build_search_url("https://remotive.com/", "rust").unwrap();
        assert_eq!(url.as_str(), "https://remotive.com/api/remote-jobs?search=rust");
    }

    #[test]
    fn search_url_empty_term_has_no_query() {
        let url = build_search_url("https://remotive.com", "").unwrap();
        assert!(url.query().is_none());
    }

    #[test]
    fn search_url_invalid_base_is_error() {
        assert!(build_search_url("not a url", "rust").is_err());
    }
}
