//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with freshness checks.

use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

// == Cached Content ==
/// Content captured by a cache entry.
///
/// Reads are either parsed JSON or opaque text; a lookup of one kind never
/// satisfies an entry of the other kind.
#[derive(Debug, Clone, PartialEq)]
pub enum CachedContent {
    /// Parsed JSON document
    Json(Value),
    /// Raw UTF-8 text
    Text(String),
}

impl CachedContent {
    /// Returns the JSON document, if this content is the JSON kind.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            CachedContent::Json(value) => Some(value),
            CachedContent::Text(_) => None,
        }
    }

    /// Returns the text, if this content is the text kind.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CachedContent::Text(text) => Some(text),
            CachedContent::Json(_) => None,
        }
    }
}

// == Cache Entry ==
/// Represents a single cache entry: captured content plus capture time.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The captured content
    pub content: CachedContent,
    /// Capture timestamp (Unix milliseconds)
    pub cached_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry captured at `cached_at`.
    ///
    /// # Arguments
    /// * `content` - The content to cache
    /// * `cached_at` - Capture timestamp in Unix milliseconds
    pub fn new(content: CachedContent, cached_at: u64) -> Self {
        Self { content, cached_at }
    }

    // == Is Fresh ==
    /// Checks whether the entry is still fresh at `now` for the given TTL.
    ///
    /// Boundary condition: an entry is fresh while strictly less than the
    /// full TTL has elapsed, so an entry becomes stale at the instant
    /// `now - cached_at` reaches the TTL.
    ///
    /// # Arguments
    /// * `now_ms` - Current time in Unix milliseconds
    /// * `ttl_ms` - Time-to-live in milliseconds
    ///
    /// # Returns
    /// - `true` if the entry is younger than the TTL
    /// - `false` once the TTL has fully elapsed
    pub fn is_fresh(&self, now_ms: u64, ttl_ms: u64) -> bool {
        now_ms.saturating_sub(self.cached_at) < ttl_ms
    }

    // == Age ==
    /// Returns the entry age in milliseconds at `now`, saturating to zero
    /// if the clock reads earlier than the capture time.
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.cached_at)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
