use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::job_post::JobPost;

/// The cached feed: posts newest first, stamped with the last successful refresh.
///
/// This is also the on-disk format of the persisted cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedSnapshot {
    pub last_updated: DateTime<Utc>,
    pub job_posts: Vec<JobPost>,
}

impl FeedSnapshot {
    /// A snapshot that has never been filled; stamped at the Unix epoch.
    pub fn empty() -> Self {
        Self {
            last_updated: DateTime::<Utc>::UNIX_EPOCH,
            job_posts: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.job_posts.is_empty()
    }

    pub fn age(&self, now: DateTime<Utc>) -> chrono::Duration {
        now - self.last_updated
    }
}

impl Default for FeedSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

/// Result of one refresh attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    Updated { count: usize },
    Failed { reason: String },
}

impl RefreshOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, Self::Updated { .. })
    }

    pub fn message(&self) -> String {
        match self {
            Self::Updated { .. } => "Cache refreshed successfully!".into(),
            Self::Failed { reason } => {
                format!("Cache refresh failed, keeping previous data: {reason}")
            }
        }
    }
}

/// Body of `GET /scrape-job-posts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedResponse {
    pub success: bool,
    pub last_updated: DateTime<Utc>,
    pub job_posts: Vec<JobPost>,
}

impl From<FeedSnapshot> for FeedResponse {
    fn from(snapshot: FeedSnapshot) -> Self {
        Self {
            success: true,
            last_updated: snapshot.last_updated,
            job_posts: snapshot.job_posts,
        }
    }
}

/// Body of `GET /refresh-cache`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub success: bool,
    pub message: String,
}

impl From<&RefreshOutcome> for RefreshResponse {
    fn from(outcome: &RefreshOutcome) -> Self {
        Self {
            success: true,
            message: outcome.message(),
        }
    }
}
