pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod server;
pub mod service;

#[cfg(test)]
pub mod test_helpers;
