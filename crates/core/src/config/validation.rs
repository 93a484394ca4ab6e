//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values
//! after they have been loaded from environment, files, or defaults.

use crate::config::AppConfig;
use thiserror::Error;

/// Largest chunk size a request or the configuration may ask for.
pub const MAX_CHUNK_SIZE: usize = 1_000_000;

/// Longest cache lifetime the configuration accepts (one week).
pub const MAX_CACHE_TTL_SECS: u64 = 7 * 24 * 3600;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },
}

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `ytdlp_path` or `sub_langs` is empty
    /// - `timeout_ms` is less than 1s or exceeds 10 minutes
    /// - `default_chunk_size` is 0 or exceeds `MAX_CHUNK_SIZE`
    /// - `cache_ttl_secs` is 0 or exceeds `MAX_CACHE_TTL_SECS`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ytdlp_path.trim().is_empty() {
            return Err(ConfigError::Invalid { field: "ytdlp_path".into(), reason: "must not be empty".into() });
        }
        if self.sub_langs.trim().is_empty() {
            return Err(ConfigError::Invalid { field: "sub_langs".into(), reason: "must not be empty".into() });
        }

        if self.timeout_ms < 1_000 {
            return Err(ConfigError::Invalid { field: "timeout_ms".into(), reason: "must be at least 1000ms".into() });
        }
        if self.timeout_ms > 600_000 {
            return Err(ConfigError::Invalid {
                field: "timeout_ms".into(),
                reason: "must not exceed 10 minutes (600000ms)".into(),
            });
        }

        if self.default_chunk_size == 0 {
            return Err(ConfigError::Invalid {
                field: "default_chunk_size".into(),
                reason: "must be greater than 0".into(),
            });
        }
        if self.default_chunk_size > MAX_CHUNK_SIZE {
            return Err(ConfigError::Invalid {
                field: "default_chunk_size".into(),
                reason: format!("must not exceed {MAX_CHUNK_SIZE}"),
            });
        }

        if self.cache_ttl_secs == 0 {
            return Err(ConfigError::Invalid { field: "cache_ttl_secs".into(), reason: "must be greater than 0".into() });
        }
        if self.cache_ttl_secs > MAX_CACHE_TTL_SECS {
            return Err(ConfigError::Invalid {
                field: "cache_ttl_secs".into(),
                reason: format!("must not exceed one week ({MAX_CACHE_TTL_SECS}s)"),
            });
        }

        if self.cache_ttl_secs < 60 {
            tracing::warn!(
                cache_ttl_secs = self.cache_ttl_secs,
                "cache_ttl_secs is under a minute; paginated reads will refetch often"
            );
        }

        Ok(())
    }
}
