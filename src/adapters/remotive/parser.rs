use serde_json::Value;

use crate::adapters::shared::{items, text};
use crate::domain::job_post::JobPost;
use crate::error::Result;

/// Map a Remotive `remote-jobs` response into job posts.
pub fn parse_jobs(json: &Value) -> Result<Vec<JobPost>> {
    Ok(items(json, "jobs")?
        .iter()
        .map(|job| JobPost {
            title: text(job, "title"),
            company: text(job, "company_name"),
            location: text(job, "candidate_required_location"),
            url: text(job, "url"),
            date: text(job, "publication_date"),
        })
        .collect())
}
