//! get_transcript tool implementation.
//!
//! Returns the first chunk of a video's transcript, fetching and caching it on
//! a miss. Footer only appears when more chunks follow.

use rmcp::{ErrorData as McpError, model::*};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use vidscript_core::{Error, page::render_first};

use super::{ToolState, error_result};

/// Input parameters for get_transcript tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetTranscriptParams {
    /// The video URL, passed to the extractor as-is.
    pub url: String,
}

/// Implementation of the get_transcript tool.
pub async fn get_transcript_impl(state: &ToolState, params: GetTranscriptParams) -> Result<CallToolResult, McpError> {
    state.sweep().await;

    if params.url.trim().is_empty() {
        return Err(Error::InvalidInput("url cannot be empty".into()).into());
    }

    let entry = match state
        .cache
        .get_or_populate(&params.url, state.default_chunk_size, state.source.as_ref())
        .await
    {
        Ok(entry) => entry,
        Err(err) => return error_result(err),
    };

    let page = render_first(&entry);
    tracing::debug!(url = %params.url, chunks = page.meta.total_chunks, "served first transcript chunk");

    Ok(CallToolResult::success(vec![Content::text(page.text)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::testing::{CannedSource, result_text, state};
    use std::sync::Arc;

    fn params(url: &str) -> GetTranscriptParams {
        GetTranscriptParams { url: url.into() }
    }

    #[tokio::test]
    async fn test_single_chunk_has_no_footer() {
        let source = Arc::new(CannedSource::with_lines(&["Hello", "Hello", "World"]));
        let (state, _clock) = state(source.clone(), 15_000);

        let result = get_transcript_impl(&state, params("https://youtu.be/abc123")).await.unwrap();
        assert!(!result.is_error.unwrap_or(false));

        let text = result_text(&result);
        assert!(text.starts_with("Transcript: abc123.en.vtt\n"));
        assert!(text.ends_with("Hello\nWorld"));
        assert!(!text.contains("This is chunk"));
    }

    #[tokio::test]
    async fn test_multi_chunk_has_footer() {
        let source = Arc::new(CannedSource::with_lines(&["line one", "line two", "line three"]));
        let (state, _clock) = state(source, 20);

        let result = get_transcript_impl(&state, params("https://youtu.be/abc123")).await.unwrap();
        let text = result_text(&result);
        assert!(text.contains("This is chunk 1 of"));
        assert!(text.contains("chunk_index=1"));
    }

    #[tokio::test]
    async fn test_repeat_call_uses_cache() {
        let source = Arc::new(CannedSource::with_lines(&["Hello"]));
        let (state, _clock) = state(source.clone(), 15_000);

        get_transcript_impl(&state, params("https://youtu.be/abc123")).await.unwrap();
        get_transcript_impl(&state, params("https://youtu.be/abc123")).await.unwrap();
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_expired_entry_refetched() {
        let source = Arc::new(CannedSource::with_lines(&["Hello"]));
        let (state, clock) = state(source.clone(), 15_000);

        get_transcript_impl(&state, params("https://youtu.be/abc123")).await.unwrap();
        clock.advance(chrono::Duration::minutes(31));
        get_transcript_impl(&state, params("https://youtu.be/abc123")).await.unwrap();
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn test_source_failure_is_error_result() {
        let source = Arc::new(CannedSource::failing("ERROR: Video unavailable"));
        let (state, _clock) = state(source, 15_000);

        let result = get_transcript_impl(&state, params("https://youtu.be/gone")).await.unwrap();
        assert!(result.is_error.unwrap_or(false));
        let text = result_text(&result);
        assert!(text.starts_with("SOURCE_FAILED"));
        assert!(text.contains("Video unavailable"));
    }

    #[tokio::test]
    async fn test_empty_url_rejected() {
        let source = Arc::new(CannedSource::with_lines(&["Hello"]));
        let (state, _clock) = state(source.clone(), 15_000);

        let result = get_transcript_impl(&state, params("  ")).await;
        assert!(result.is_err());
        assert_eq!(source.calls(), 0);
    }
}
