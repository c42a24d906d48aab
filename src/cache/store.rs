//! File Store Module
//!
//! Main store engine combining a path-keyed entry map with TTL-gated file
//! reads and write-through JSON updates.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::cache::{current_timestamp_ms, CacheEntry, CachedContent, StoreStats, DEFAULT_TTL_MS};
use crate::config::Config;
use crate::error::Result;
use crate::fsio;

// == File Store ==
/// Cached file store with TTL-gated reads and write-through JSON updates.
///
/// Entries are keyed by the path the caller supplied; no canonicalization
/// is performed. The map is unbounded: entries leave it only through
/// [`clear`](FileStore::clear) and [`clear_all`](FileStore::clear_all),
/// which suits the short-lived single-threaded processes this store is
/// written for. External file changes are never watched; a fresh entry
/// keeps serving its captured content until its TTL elapses on a later
/// read.
///
/// Every operation absorbs its own I/O and parse failures: reads degrade
/// to `None`, writes to `false`, and the absorbed cause is logged.
#[derive(Debug)]
pub struct FileStore {
    /// Path-keyed entry storage
    entries: HashMap<PathBuf, CacheEntry>,
    /// Performance statistics
    stats: StoreStats,
    /// TTL in milliseconds applied when the caller does not pass one
    default_ttl: u64,
    /// Millisecond clock used for freshness decisions, swappable in tests
    clock: fn() -> u64,
}

impl FileStore {
    // == Constructors ==
    /// Creates a new FileStore with the given default TTL in milliseconds.
    pub fn new(default_ttl_ms: u64) -> Self {
        Self::with_clock(default_ttl_ms, current_timestamp_ms)
    }

    /// Creates a new FileStore from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.default_ttl_ms)
    }

    /// Creates a new FileStore with an injected millisecond clock.
    ///
    /// # Arguments
    /// * `default_ttl_ms` - TTL applied to reads without an explicit TTL
    /// * `clock` - Returns the current time in Unix milliseconds
    pub fn with_clock(default_ttl_ms: u64, clock: fn() -> u64) -> Self {
        Self {
            entries: HashMap::new(),
            stats: StoreStats::new(),
            default_ttl: default_ttl_ms,
            clock,
        }
    }

    // == Read JSON ==
    /// Reads a JSON file through the cache using the store's default TTL.
    ///
    /// Returns `None` if the file does not exist or cannot be parsed.
    pub fn read_json(&mut self, path: impl AsRef<Path>) -> Option<Value> {
        let ttl = self.default_ttl;
        self.read_json_with_ttl(path, ttl)
    }

    /// Reads a JSON file through the cache with an explicit TTL.
    ///
    /// A cache entry younger than `ttl_ms` is returned without touching the
    /// filesystem. Otherwise the file is re-read: a missing file yields
    /// `None` and caches nothing (absence is re-checked on every call), a
    /// parse or I/O failure yields `None` and leaves any prior entry in
    /// place, and a successful read refreshes the entry.
    ///
    /// # Arguments
    /// * `path` - File to read; also the cache key
    /// * `ttl_ms` - Maximum entry age in milliseconds to serve from cache
    pub fn read_json_with_ttl(&mut self, path: impl AsRef<Path>, ttl_ms: u64) -> Option<Value> {
        let path = path.as_ref();
        let now = (self.clock)();

        if let Some(entry) = self.entries.get(path) {
            if entry.is_fresh(now, ttl_ms) {
                if let Some(value) = entry.content.as_json() {
                    let value = value.clone();
                    self.stats.record_hit();
                    debug!("JSON cache hit: {}", path.display());
                    return Some(value);
                }
                // Fresh entry of the wrong kind: fall through to a re-read.
            }
        }

        self.stats.record_miss();
        debug!("JSON cache miss: {}", path.display());

        match load_json(path) {
            Ok(Some(value)) => {
                self.entries.insert(
                    path.to_path_buf(),
                    CacheEntry::new(CachedContent::Json(value.clone()), now),
                );
                self.stats.set_total_entries(self.entries.len());
                Some(value)
            }
            Ok(None) => None,
            Err(err) => {
                warn!("Failed to read JSON file {}: {}", path.display(), err);
                None
            }
        }
    }

    /// Reads a JSON file through the cache and deserializes it into `T`.
    ///
    /// The raw value stays cached even when it does not match `T`.
    pub fn read_json_as<T: DeserializeOwned>(&mut self, path: impl AsRef<Path>) -> Option<T> {
        let path = path.as_ref();
        let value = self.read_json(path)?;
        match serde_json::from_value(value) {
            Ok(data) => Some(data),
            Err(err) => {
                warn!(
                    "Cached JSON in {} did not match requested type: {}",
                    path.display(),
                    err
                );
                None
            }
        }
    }

    // == Write JSON ==
    /// Writes `data` as pretty-printed JSON (2-space indent) to `path`,
    /// creating parent directories as needed, and refreshes the cache entry
    /// on success.
    ///
    /// # Returns
    /// `true` on success; `false` on any serialization or I/O failure, in
    /// which case the prior cache entry is left untouched.
    pub fn write_json<T: Serialize>(&mut self, path: impl AsRef<Path>, data: &T) -> bool {
        let path = path.as_ref();

        let value = match serde_json::to_value(data) {
            Ok(value) => value,
            Err(err) => {
                warn!("Failed to serialize value for {}: {}", path.display(), err);
                return false;
            }
        };

        if let Err(err) = store_json(path, &value) {
            warn!("Failed to write JSON file {}: {}", path.display(), err);
            return false;
        }

        let now = (self.clock)();
        self.entries.insert(
            path.to_path_buf(),
            CacheEntry::new(CachedContent::Json(value), now),
        );
        self.stats.record_write();
        self.stats.set_total_entries(self.entries.len());
        true
    }

    // == Read Text ==
    /// Reads a text file through the cache using the store's default TTL.
    ///
    /// Returns `None` if the file does not exist or cannot be read.
    pub fn read_text(&mut self, path: impl AsRef<Path>) -> Option<String> {
        let ttl = self.default_ttl;
        self.read_text_with_ttl(path, ttl)
    }

    /// Reads a text file through the cache with an explicit TTL.
    ///
    /// Identical contract to [`read_json_with_ttl`](FileStore::read_json_with_ttl)
    /// with no parse step; content is opaque text.
    pub fn read_text_with_ttl(&mut self, path: impl AsRef<Path>, ttl_ms: u64) -> Option<String> {
        let path = path.as_ref();
        let now = (self.clock)();

        if let Some(entry) = self.entries.get(path) {
            if entry.is_fresh(now, ttl_ms) {
                if let Some(text) = entry.content.as_text() {
                    let text = text.to_string();
                    self.stats.record_hit();
                    debug!("Text cache hit: {}", path.display());
                    return Some(text);
                }
            }
        }

        self.stats.record_miss();
        debug!("Text cache miss: {}", path.display());

        match load_text(path) {
            Ok(Some(text)) => {
                self.entries.insert(
                    path.to_path_buf(),
                    CacheEntry::new(CachedContent::Text(text.clone()), now),
                );
                self.stats.set_total_entries(self.entries.len());
                Some(text)
            }
            Ok(None) => None,
            Err(err) => {
                warn!("Failed to read text file {}: {}", path.display(), err);
                None
            }
        }
    }

    // == Clear ==
    /// Removes the cache entry for `path`, if any.
    ///
    /// The next read of `path` will consult the filesystem regardless of TTL.
    pub fn clear(&mut self, path: impl AsRef<Path>) {
        self.entries.remove(path.as_ref());
        self.stats.set_total_entries(self.entries.len());
    }

    /// Empties the entire cache.
    pub fn clear_all(&mut self) {
        self.entries.clear();
        self.stats.set_total_entries(0);
    }

    // == Stats ==
    /// Returns current store statistics.
    pub fn stats(&self) -> StoreStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of cache entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(DEFAULT_TTL_MS)
    }
}

// == Load Helpers ==
/// Reads and parses a JSON file. A missing file is `Ok(None)`, not an error.
fn load_json(path: &Path) -> Result<Option<Value>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)?;
    let value = serde_json::from_str(&raw)?;
    Ok(Some(value))
}

/// Reads a text file. A missing file is `Ok(None)`, not an error.
fn load_text(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    Ok(Some(fs::read_to_string(path)?))
}

/// Pretty-prints `value` and writes it, creating parent directories.
fn store_json(path: &Path, value: &Value) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fsio::try_write(path, &json)
}
