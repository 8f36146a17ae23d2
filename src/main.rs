use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use job_feed_cache::adapters;
use job_feed_cache::adapters::store::json_file::JsonFileStore;
use job_feed_cache::config::load_config;
use job_feed_cache::server::{self, state::AppState};
use job_feed_cache::service::feed_cache::FeedCache;

fn find_config_path() -> PathBuf {
    let candidates = [PathBuf::from("config.yaml"), exe_dir().join("config.yaml")];

    for path in &candidates {
        if path.exists() {
            return path.clone();
        }
    }

    candidates[0].clone()
}

fn exe_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; real environment variables still apply.
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Ok(path) = dotenv {
        tracing::debug!("Loaded environment from {}", path.display());
    }
    tracing::info!("Starting job-feed-cache");

    let config = load_config(&find_config_path())?;
    let source = adapters::job_source(&config.upstream)?;
    tracing::info!(
        provider = source.name(),
        search = %config.upstream.search,
        ttl_secs = config.cache.ttl_secs,
        "Upstream configured"
    );

    let mut feed = FeedCache::new(source, Duration::from_secs(config.cache.ttl_secs));
    if config.cache.persist {
        tracing::info!(path = %config.cache.persist_path.display(), "Persistence enabled");
        feed = feed.with_store(Arc::new(JsonFileStore::new(
            config.cache.persist_path.clone(),
        )));
    }
    let feed = Arc::new(feed);
    feed.load_from_storage().await;

    if config.cache.warm_on_start && feed.is_stale().await {
        let warm = Arc::clone(&feed);
        tokio::spawn(async move {
            warm.get_job_posts().await;
        });
    }

    server::serve(&config.server, AppState::new(feed)).await?;
    Ok(())
}
