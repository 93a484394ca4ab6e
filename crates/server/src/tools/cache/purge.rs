//! transcript_cache_purge tool implementation.
//!
//! Sweeps expired transcripts and optionally evicts one URL or everything.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use vidscript_core::Error;

use crate::tools::ToolState;

/// Parameters for the transcript_cache_purge tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CachePurgeParams {
    /// Evict the cached transcript for this exact URL.
    #[serde(default)]
    pub url: Option<String>,

    /// Evict every cached transcript.
    #[serde(default)]
    pub all: bool,
}

/// Output from the transcript_cache_purge tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CachePurgeOutput {
    /// Entries removed because they reached the TTL.
    pub expired: usize,
    /// Unexpired entries removed on request.
    pub evicted: usize,
    /// Entries left in the cache.
    pub remaining: usize,
}

/// Implementation of the transcript_cache_purge tool.
pub async fn purge_impl(state: &ToolState, params: CachePurgeParams) -> Result<CallToolResult, McpError> {
    let expired = state.sweep().await;

    let evicted = if params.all {
        state.cache.clear().await
    } else if let Some(url) = params.url.as_deref() {
        usize::from(state.cache.evict(url).await)
    } else {
        0
    };

    let output = CachePurgeOutput { expired, evicted, remaining: state.cache.len().await };
    tracing::info!(expired, evicted, remaining = output.remaining, "purged transcript cache");

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| Error::Internal(format!("Failed to serialize output: {e}")))?;

    Ok(CallToolResult::success(vec![Content::text(json)]))
}
