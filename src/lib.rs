//! fscache - A lightweight cached file store
//!
//! Serves repeated reads of JSON and text files from an in-process cache
//! bounded by a time-to-live, while writes go through to disk immediately
//! and refresh the cache. Built for short-lived, single-threaded tools that
//! repeatedly inspect configuration or pattern files; hosts with concurrent
//! access need their own synchronization around the store.

pub mod cache;
pub mod config;
pub mod error;
pub mod fsio;

pub use cache::{FileStore, StoreStats, DEFAULT_TTL_MS};
pub use config::Config;
pub use error::StoreError;
