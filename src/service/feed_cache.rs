use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::domain::feed::{FeedSnapshot, RefreshOutcome};
use crate::domain::job_post::sort_newest_first;
use crate::ports::feed_store::FeedStore;
use crate::ports::job_source::JobSource;

pub const DEFAULT_TTL: Duration = Duration::from_secs(2 * 60 * 60);

/// Time-based cache in front of one upstream job source.
///
/// The whole feed expires at once: it is refreshed when it is empty or older
/// than the TTL. Refreshes are single-flight; callers that queue up behind a
/// running refresh get its outcome instead of hitting upstream again.
pub struct FeedCache {
    source: Arc<dyn JobSource>,
    store: Option<Arc<dyn FeedStore>>,
    ttl: TimeDelta,
    snapshot: RwLock<FeedSnapshot>,
    refresh_gate: Mutex<Option<RefreshOutcome>>,
    completed_refreshes: AtomicU64,
}

impl FeedCache {
    pub fn new(source: Arc<dyn JobSource>, ttl: Duration) -> Self {
        let ttl = TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX);
        Self {
            source,
            store: None,
            ttl,
            snapshot: RwLock::new(FeedSnapshot::empty()),
            refresh_gate: Mutex::new(None),
            completed_refreshes: AtomicU64::new(0),
        }
    }

    /// Persist every successful refresh to `store`.
    #[must_use]
    pub fn with_store(mut self, store: Arc<dyn FeedStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn ttl(&self) -> TimeDelta {
        self.ttl
    }

    /// Current contents, without any freshness check.
    pub async fn snapshot(&self) -> FeedSnapshot {
        self.snapshot.read().await.clone()
    }

    pub async fn is_stale(&self) -> bool {
        let snapshot = self.snapshot.read().await;
        self.needs_refresh(&snapshot, Utc::now())
    }

    fn needs_refresh(&self, snapshot: &FeedSnapshot, now: DateTime<Utc>) -> bool {
        snapshot.is_empty() || snapshot.age(now) > self.ttl
    }

    /// Serve the feed, refreshing first if it is empty or expired.
    ///
    /// Never fails: after a failed refresh the previous contents are returned.
    pub async fn get_job_posts(&self) -> FeedSnapshot {
        {
            let snapshot = self.snapshot.read().await;
            if !self.needs_refresh(&snapshot, Utc::now()) {
                debug!(count = snapshot.job_posts.len(), "Serving cached job posts");
                return snapshot.clone();
            }
        }

        let seen = self.completed_refreshes.load(Ordering::Acquire);
        let mut last_outcome = self.refresh_gate.lock().await;
        let joined = self.completed_refreshes.load(Ordering::Acquire) != seen;
        if joined || !self.is_stale().await {
            debug!("Cache was refreshed while waiting, serving that result");
        } else {
            info!("Cache expired or empty, fetching new data");
            let outcome = self.run_refresh().await;
            self.record(&mut last_outcome, outcome);
        }
        drop(last_outcome);

        self.snapshot().await
    }

    /// Refresh regardless of freshness.
    ///
    /// A caller that had to wait for a refresh already in flight gets that
    /// refresh's outcome.
    pub async fn force_refresh(&self) -> RefreshOutcome {
        info!("Forced cache refresh");

        let seen = self.completed_refreshes.load(Ordering::Acquire);
        let mut last_outcome = self.refresh_gate.lock().await;
        if self.completed_refreshes.load(Ordering::Acquire) != seen
            && let Some(outcome) = last_outcome.as_ref()
        {
            debug!("Refresh finished while waiting, reusing its outcome");
            return outcome.clone();
        }

        let outcome = self.run_refresh().await;
        self.record(&mut last_outcome, outcome.clone());
        outcome
    }

    fn record(&self, slot: &mut Option<RefreshOutcome>, outcome: RefreshOutcome) {
        *slot = Some(outcome);
        self.completed_refreshes.fetch_add(1, Ordering::Release);
    }

    async fn run_refresh(&self) -> RefreshOutcome {
        info!(source = self.source.name(), "Refreshing cached job posts");

        let mut posts = match self.source.fetch_job_posts().await {
            Ok(posts) => posts,
            Err(e) => {
                warn!(
                    source = self.source.name(),
                    error = %e,
                    "Failed to fetch job posts, keeping previous cache"
                );
                return RefreshOutcome::Failed {
                    reason: e.to_string(),
                };
            }
        };
        sort_newest_first(&mut posts);

        let fresh = FeedSnapshot {
            last_updated: Utc::now(),
            job_posts: posts,
        };
        let count = fresh.job_posts.len();
        *self.snapshot.write().await = fresh.clone();
        info!(count, "Cache updated");

        self.save_to_storage(fresh).await;
        RefreshOutcome::Updated { count }
    }

    /// Replace the in-memory feed with the persisted one, if any.
    ///
    /// A missing or unreadable file leaves the cache empty. Returns whether a
    /// snapshot was loaded.
    pub async fn load_from_storage(&self) -> bool {
        let Some(store) = self.store.clone() else {
            return false;
        };

        match tokio::task::spawn_blocking(move || store.load()).await {
            Ok(Ok(Some(snapshot))) => {
                info!(
                    count = snapshot.job_posts.len(),
                    last_updated = %snapshot.last_updated,
                    "Loaded persisted job posts"
                );
                *self.snapshot.write().await = snapshot;
                true
            }
            Ok(Ok(None)) => {
                debug!("No persisted cache found");
                false
            }
            Ok(Err(e)) => {
                warn!(error = %e, "Ignoring unreadable persisted cache");
                false
            }
            Err(e) => {
                warn!(error = %e, "Loading persisted cache panicked");
                false
            }
        }
    }

    async fn save_to_storage(&self, snapshot: FeedSnapshot) {
        let Some(store) = self.store.clone() else {
            return;
        };

        match tokio::task::spawn_blocking(move || store.save(&snapshot)).await {
            Ok(Ok(())) => debug!("Persisted job posts"),
            Ok(Err(e)) => warn!(error = %e, "Failed to persist job posts"),
            Err(e) => warn!(error = %e, "Persisting job posts panicked"),
        }
    }
}
