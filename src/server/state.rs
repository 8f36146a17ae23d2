use std::sync::Arc;

use crate::service::feed_cache::FeedCache;

#[derive(Clone)]
pub struct AppState {
    pub feed: Arc<FeedCache>,
}

impl AppState {
    pub fn new(feed: Arc<FeedCache>) -> Self {
        Self { feed }
    }
}
