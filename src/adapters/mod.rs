pub mod jsearch;
pub mod remotive;
pub mod shared;
pub mod store;

use std::sync::Arc;

use crate::config::types::{Provider, UpstreamConfig};
use crate::error::Result;
use crate::ports::job_source::JobSource;
use jsearch::client::JSearchClient;
use remotive::client::RemotiveClient;

/// Build the job source selected by `config.provider`.
pub fn job_source(config: &UpstreamConfig) -> Result<Arc<dyn JobSource>> {
    let source: Arc<dyn JobSource> = match config.provider {
        Provider::Remotive => Arc::new(RemotiveClient::new(config)?),
        Provider::Jsearch => Arc::new(JSearchClient::new(config)?),
    };
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_source_follows_provider() {
        let mut config = UpstreamConfig::default();
        assert_eq!(job_source(&config).unwrap().name(), "remotive");

        config.provider = Provider::Jsearch;
        config.api_key = Some("key".into());
        assert_eq!(job_source(&config).unwrap().name(), "jsearch");
    }
}
