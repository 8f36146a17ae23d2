pub mod feed;
pub mod job_post;
