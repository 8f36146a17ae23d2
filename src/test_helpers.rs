use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::job_post::JobPost;
use crate::error::{JobFeedError, Result};
use crate::ports::job_source::JobSource;

type FetchFn = Box<dyn Fn(usize) -> Result<Vec<JobPost>> + Send + Sync>;

/// Scriptable upstream that counts how often it was called.
///
/// The fetch closure receives the 1-based call number.
pub struct MockJobSource {
    fetch_fn: Mutex<FetchFn>,
    delay: Duration,
    calls: AtomicUsize,
}

impl Default for MockJobSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockJobSource {
    pub fn new() -> Self {
        Self {
            fetch_fn: Mutex::new(Box::new(|_| Ok(vec![]))),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn returning(posts: Vec<JobPost>) -> Self {
        Self::new().with_fetch(move |_| Ok(posts.clone()))
    }

    pub fn failing(status: u16) -> Self {
        Self::new().with_fetch(move |_| Err(upstream_error(status)))
    }

    #[must_use]
    pub fn with_fetch(
        self,
        f: impl Fn(usize) -> Result<Vec<JobPost>> + Send + Sync + 'static,
    ) -> Self {
        *self.fetch_fn.lock().unwrap() = Box::new(f);
        self
    }

    /// Hold each fetch open for `delay` before answering.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JobSource for MockJobSource {
    async fn fetch_job_posts(&self) -> Result<Vec<JobPost>> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let f = self.fetch_fn.lock().unwrap();
        f(call)
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

// --- Factory functions ---

pub fn make_job_post(title: &str, date: &str) -> JobPost {
    JobPost {
        title: title.to_string(),
        company: "Test Co".to_string(),
        location: "Remote".to_string(),
        url: format!("https://jobs.example.com/{}", title.to_lowercase().replace(' ', "-")),
        date: date.to_string(),
    }
}

pub fn upstream_error(status: u16) -> JobFeedError {
    JobFeedError::Upstream {
        status,
        url: "https://jobs.example.com/api".to_string(),
    }
}
