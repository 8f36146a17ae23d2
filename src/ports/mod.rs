pub mod feed_store;
pub mod job_source;
