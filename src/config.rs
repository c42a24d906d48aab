//! Configuration Module
//!
//! Handles loading store configuration from environment variables.

use std::env;

use crate::cache::DEFAULT_TTL_MS;

/// Store configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// TTL in milliseconds applied to reads that do not pass an explicit TTL
    pub default_ttl_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `FSCACHE_DEFAULT_TTL_MS` - Default read TTL in milliseconds (default: 60000)
    pub fn from_env() -> Self {
        Self {
            default_ttl_ms: env::var("FSCACHE_DEFAULT_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TTL_MS),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_ttl_ms: DEFAULT_TTL_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.default_ttl_ms, 60_000);
    }

    #[test]
    fn test_config_from_env() {
        // Env mutations stay inside one test; the test harness runs in parallel.
        env::set_var("FSCACHE_DEFAULT_TTL_MS", "2500");
        let config = Config::from_env();
        assert_eq!(config.default_ttl_ms, 2500);

        env::set_var("FSCACHE_DEFAULT_TTL_MS", "not-a-number");
        let config = Config::from_env();
        assert_eq!(config.default_ttl_ms, 60_000);

        env::remove_var("FSCACHE_DEFAULT_TTL_MS");
        let config = Config::from_env();
        assert_eq!(config.default_ttl_ms, 60_000);
    }
}
