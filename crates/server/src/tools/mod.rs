//! MCP tool implementations.
//!
//! This module contains all tools exposed by the mcp-transcript server.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use vidscript_core::{Error, TranscriptCache, TranscriptSource};

pub mod cache;
pub mod get_transcript;
pub mod get_transcript_chunk;

/// State shared by every tool call.
pub struct ToolState {
    pub cache: TranscriptCache,
    pub source: Arc<dyn TranscriptSource>,
    /// Chunk size for calls that do not choose one.
    pub default_chunk_size: usize,
}

impl ToolState {
    /// Run the lazy expiry sweep that starts every transcript operation.
    pub(crate) async fn sweep(&self) -> usize {
        self.cache.sweep_expired(self.cache.now()).await
    }
}

/// Convert an operation error into the tool-call envelope.
///
/// Invalid arguments and internal failures are protocol errors; everything else
/// is reported as a failed tool result so the caller can read the message and
/// retry.
pub(crate) fn error_result(err: Error) -> Result<CallToolResult, McpError> {
    if err.is_tool_failure() { Ok(CallToolResult::error(vec![Content::text(err.to_string())])) } else { Err(err.into()) }
}
