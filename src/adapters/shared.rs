use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use tracing::debug;

use crate::config::types::UpstreamConfig;
use crate::error::{JobFeedError, Result};

/// HTTP client shared by the upstream providers.
pub fn build_http_client(config: &UpstreamConfig) -> Result<Client> {
    Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .map_err(JobFeedError::Http)
}

/// Send a prepared request and decode the body as JSON.
///
/// Any non-2xx status is an [`JobFeedError::Upstream`] error.
pub async fn fetch_json(request: RequestBuilder, url: &str) -> Result<Value> {
    debug!(url, "Fetching upstream job feed");

    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(JobFeedError::Upstream {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| JobFeedError::Parse {
        reason: format!("response from {url} is not valid JSON: {e}"),
    })
}

/// Read the item array at `key`; a missing or null key means no items.
pub fn items<'a>(json: &'a Value, key: &str) -> Result<&'a [Value]> {
    match json.get(key) {
        None | Some(Value::Null) => Ok(&[][..]),
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(other) => Err(JobFeedError::Parse {
            reason: format!("expected '{key}' to be an array, got {}", type_name(other)),
        }),
    }
}

/// String field of an upstream item, empty when absent or not a string.
pub fn text(item: &Value, key: &str) -> String {
    item.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or_default()
        .to_string()
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn items_missing_key_is_empty() {
        let json = json!({"other": 1});
        assert!(items(&json, "jobs").unwrap().is_empty());
    }

    #[test]
    fn items_null_is_empty() {
        let json = json!({"jobs": null});
        assert!(items(&json, "jobs").unwrap().is_empty());
    }

    #[test]
    fn items_returns_array() {
        let json = json!({"jobs": [{"title": "a"}, {"title": "b"}]});
        assert_eq!(items(&json, "jobs").unwrap().len(), 2);
    }

    #[test]
    fn items_wrong_type_is_parse_error() {
        let json = json!({"jobs": "nope"});
        let err = items(&json, "jobs").unwrap_err();
        assert!(matches!(err, JobFeedError::Parse { .. }));
        assert!(err.to_string().contains("a string"));
    }

    #[test]
    fn text_handles_missing_and_non_string() {
        let item = json!({"title": "  Rust Dev ", "salary": 100});
        assert_eq!(text(&item, "title"), "Rust Dev");
        assert_eq!(text(&item, "salary"), "");
        assert_eq!(text(&item, "company"), "");
    }
}
