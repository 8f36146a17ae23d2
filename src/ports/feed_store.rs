use crate::domain::feed::FeedSnapshot;
use crate::error::Result;

pub trait FeedStore: Send + Sync {
    /// `Ok(None)` when nothing has been persisted yet.
    fn load(&self) -> Result<Option<FeedSnapshot>>;
    fn save(&self, snapshot: &FeedSnapshot) -> Result<()>;
}
