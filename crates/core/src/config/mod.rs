//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (MCP_TRANSCRIPT_*)
//! 2. TOML config file (if MCP_TRANSCRIPT_CONFIG_FILE set)
//! 3. Built-in defaults

use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::{ConfigError, MAX_CACHE_TTL_SECS, MAX_CHUNK_SIZE};

/// Characters per chunk when a request does not specify one.
pub const DEFAULT_CHUNK_SIZE: usize = 15_000;

/// Maximum age of a cached transcript, in seconds.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 30 * 60;

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (MCP_TRANSCRIPT_*)
/// 2. TOML config file (if MCP_TRANSCRIPT_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path or name of the yt-dlp executable.
    ///
    /// Set via MCP_TRANSCRIPT_YTDLP_PATH environment variable.
    #[serde(default = "default_ytdlp_path")]
    pub ytdlp_path: String,

    /// Subtitle languages passed to `--sub-langs`.
    ///
    /// Set via MCP_TRANSCRIPT_SUB_LANGS environment variable.
    #[serde(default = "default_sub_langs")]
    pub sub_langs: String,

    /// Extractor timeout in milliseconds.
    ///
    /// Set via MCP_TRANSCRIPT_TIMEOUT_MS environment variable.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Chunk size used when a request does not supply one.
    ///
    /// Set via MCP_TRANSCRIPT_DEFAULT_CHUNK_SIZE environment variable.
    #[serde(default = "default_chunk_size")]
    pub default_chunk_size: usize,

    /// Cache entry lifetime in seconds.
    ///
    /// Set via MCP_TRANSCRIPT_CACHE_TTL_SECS environment variable.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

fn default_ytdlp_path() -> String {
    "yt-dlp".into()
}

fn default_sub_langs() -> String {
    "en".into()
}

fn default_timeout_ms() -> u64 {
    120_000
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

fn default_cache_ttl_secs() -> u64 {
    DEFAULT_CACHE_TTL_SECS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ytdlp_path: default_ytdlp_path(),
            sub_langs: default_sub_langs(),
            timeout_ms: default_timeout_ms(),
            default_chunk_size: default_chunk_size(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with tokio.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Cache TTL as a chrono Duration, matching the cache's timestamps.
    ///
    /// Saturates at `chrono::Duration::MAX` for values chrono cannot represent;
    /// `validate` rejects anything above [`MAX_CACHE_TTL_SECS`].
    pub fn cache_ttl(&self) -> chrono::Duration {
        i64::try_from(self.cache_ttl_secs)
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .unwrap_or(chrono::Duration::MAX)
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `MCP_TRANSCRIPT_`
    /// 2. TOML file from `MCP_TRANSCRIPT_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("MCP_TRANSCRIPT_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(
            Env::prefixed("MCP_TRANSCRIPT_")
                .ignore(&["config_file"])
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        );

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }
}
