use async_trait::async_trait;

use crate::domain::job_post::JobPost;
use crate::error::Result;

/// An upstream job-search API.
///
/// Implementations return posts already renamed into [`JobPost`], in upstream
/// order; sorting is the cache's job.
#[async_trait]
pub trait JobSource: Send + Sync {
    async fn fetch_job_posts(&self) -> Result<Vec<JobPost>>;

    fn name(&self) -> &'static str;
}
