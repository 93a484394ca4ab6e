//! MCP server handler implementation.
//!
//! This module defines the main server handler that
//! routes tool calls to the appropriate implementations.
use std::sync::Arc;

use crate::tools::{
    ToolState,
    cache::{CachePurgeParams, purge_impl},
    get_transcript::{GetTranscriptParams, get_transcript_impl},
    get_transcript_chunk::{GetTranscriptChunkParams, get_transcript_chunk_impl},
};

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{
        tool::{ToolCallContext, ToolRouter},
        wrapper::Parameters,
    },
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_router,
};

/// The main MCP server handler for mcp-transcript.
#[derive(Clone)]
pub struct TranscriptServer {
    tool_router: ToolRouter<Self>,
    state: Arc<ToolState>,
}

/// Tool router implementation using the #[tool_router] macro.
///
/// This macro generates the routing logic that maps tool names to handler methods.
/// Calls naming any other tool are rejected by the router.
#[tool_router]
impl TranscriptServer {
    /// Create a new server handler.
    pub fn new(state: ToolState) -> Self {
        Self { tool_router: Self::tool_router(), state: Arc::new(state) }
    }

    /// Fetch the first chunk of a video transcript.
    #[tool(
        description = "Get the transcript of a video by URL. Returns the first chunk; if the transcript is long, a footer explains how to request the next chunk with get_transcript_chunk."
    )]
    async fn get_transcript(&self, params: Parameters<GetTranscriptParams>) -> Result<CallToolResult, McpError> {
        get_transcript_impl(&self.state, params.0).await
    }

    /// Fetch an arbitrary chunk of a video transcript.
    #[tool(
        description = "Get a specific chunk of a video transcript by 0-based chunk_index. Optional chunk_size (characters) applies only when the transcript is not cached yet."
    )]
    async fn get_transcript_chunk(
        &self, params: Parameters<GetTranscriptChunkParams>,
    ) -> Result<CallToolResult, McpError> {
        get_transcript_chunk_impl(&self.state, params.0).await
    }

    /// Sweep and optionally clear the transcript cache.
    #[tool(
        description = "Remove expired transcripts from the cache, and optionally evict one URL or all cached transcripts."
    )]
    async fn transcript_cache_purge(&self, params: Parameters<CachePurgeParams>) -> Result<CallToolResult, McpError> {
        purge_impl(&self.state, params.0).await
    }
}

impl ServerHandler for TranscriptServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "mcp-transcript".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self, _request: Option<PaginatedRequestParam>, _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, rmcp::model::ErrorData> {
        Ok(ListToolsResult { meta: None, tools: self.tool_router.list_all(), next_cursor: None })
    }

    async fn call_tool(
        &self, request: CallToolRequestParam, context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, rmcp::model::ErrorData> {
        self.tool_router
            .call(ToolCallContext::new(self, request, context))
            .await
    }
}
