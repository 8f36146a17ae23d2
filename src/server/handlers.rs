use axum::Json;
use axum::extract::State;
use tracing::info;

use crate::domain::feed::{FeedResponse, RefreshResponse};
use crate::server::state::AppState;

/// `GET /scrape-job-posts`: cached feed, refreshed first when stale.
pub async fn scrape_job_posts(State(state): State<AppState>) -> Json<FeedResponse> {
    let snapshot = state.feed.get_job_posts().await;
    Json(snapshot.into())
}

/// `GET /refresh-cache`: unconditional refresh. Always answers 200.
pub async fn refresh_cache(State(state): State<AppState>) -> Json<RefreshResponse> {
    info!("Manual cache refresh requested");
    let outcome = state.feed.force_refresh().await;
    Json(RefreshResponse::from(&outcome))
}
