pub mod feed_cache;
