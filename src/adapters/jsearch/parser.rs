use serde_json::Value;

use crate::adapters::shared::{items, text};
use crate::domain::job_post::JobPost;
use crate::error::Result;

/// Map a JSearch `/search` response into job posts.
pub fn parse_jobs(json: &Value) -> Result<Vec<JobPost>> {
    Ok(items(json, "data")?
        .iter()
        .map(|job| JobPost {
            title: text(job, "job_title"),
            company: text(job, "employer_name"),
            location: location(job),
            url: text(job, "job_apply_link"),
            date: text(job, "job_posted_at_datetime_utc"),
        })
        .collect())
}

fn location(job: &Value) -> String {
    [text(job, "job_city"), text(job, "job_country")]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
