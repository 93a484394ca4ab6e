//! mcp-transcript server entry point.
//!
//! This is the main binary that boots the MCP server on stdio transport.
//! Logging goes to stderr to avoid interfering with the JSON-RPC protocol on stdout.

use std::sync::Arc;

use anyhow::Result;
use rmcp::service::serve_server;
use rmcp::transport::io::stdio;
use tracing_subscriber::EnvFilter;
use vidscript_client::{YtDlpConfig, YtDlpSource};
use vidscript_core::{AppConfig, TranscriptCache};

mod handler;
mod tools;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = AppConfig::load()?;

    tracing::info!(
        ytdlp = %config.ytdlp_path,
        sub_langs = %config.sub_langs,
        chunk_size = config.default_chunk_size,
        ttl_secs = config.cache_ttl_secs,
        "Starting mcp-transcript server on stdio transport"
    );

    let state = tools::ToolState {
        cache: TranscriptCache::new(config.cache_ttl()),
        source: Arc::new(YtDlpSource::new(YtDlpConfig::from(&config))),
        default_chunk_size: config.default_chunk_size,
    };

    let handler = handler::TranscriptServer::new(state);
    let transport = stdio();
    let server = serve_server(handler, transport).await?;

    server.waiting().await?;

    Ok(())
}
