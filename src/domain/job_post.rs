use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A job listing in the shape served to clients, whatever the upstream schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPost {
    pub title: String,
    pub company: String,
    pub location: String,
    pub url: String,
    /// Publication date as reported upstream; not rewritten.
    pub date: String,
}

impl JobPost {
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        parse_post_date(&self.date)
    }
}

impl std::fmt::Display for JobPost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.title, self.company)?;
        if !self.location.is_empty() {
            write!(f, " ({})", self.location)?;
        }
        if !self.date.is_empty() {
            write!(f, " - {}", self.date)?;
        }
        Ok(())
    }
}

/// Parse the date formats job APIs are known to emit.
///
/// Accepts RFC 3339, a naive ISO date-time (taken as UTC), or a bare date.
pub fn parse_post_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Order posts newest first. Undated posts go last; ties keep upstream order.
pub fn sort_newest_first(posts: &mut [JobPost]) {
    posts.sort_by_cached_key(|post| std::cmp::Reverse(post.published_at()));
}
