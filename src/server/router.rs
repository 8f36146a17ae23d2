use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/scrape-job-posts", get(handlers::scrape_job_posts))
        .route("/refresh-cache", get(handlers::refresh_cache))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
