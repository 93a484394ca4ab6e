//! get_transcript_chunk tool implementation.
//!
//! Returns any chunk of a video's transcript with a navigation footer.

use rmcp::{ErrorData as McpError, model::*};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use vidscript_core::{Error, config::MAX_CHUNK_SIZE, page::render};

use super::{ToolState, error_result};

/// Input parameters for get_transcript_chunk tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetTranscriptChunkParams {
    /// The video URL, passed to the extractor as-is.
    pub url: String,

    /// 0-based index of the chunk to return.
    pub chunk_index: i64,

    /// Characters per chunk. Only applies when this call fetches the
    /// transcript; a cached transcript keeps the chunk size it was stored with.
    #[serde(default)]
    pub chunk_size: Option<usize>,
}

/// Implementation of the get_transcript_chunk tool.
pub async fn get_transcript_chunk_impl(
    state: &ToolState, params: GetTranscriptChunkParams,
) -> Result<CallToolResult, McpError> {
    state.sweep().await;

    if params.url.trim().is_empty() {
        return Err(Error::InvalidInput("url cannot be empty".into()).into());
    }

    let chunk_size = params.chunk_size.unwrap_or(state.default_chunk_size);
    if chunk_size == 0 || chunk_size > MAX_CHUNK_SIZE {
        return Err(Error::InvalidInput(format!("chunk_size must be between 1 and {MAX_CHUNK_SIZE}")).into());
    }

    let entry = match state
        .cache
        .get_or_populate(&params.url, chunk_size, state.source.as_ref())
        .await
    {
        Ok(entry) => entry,
        Err(err) => return error_result(err),
    };

    match render(&entry, params.chunk_index) {
        Ok(page) => Ok(CallToolResult::success(vec![Content::text(page.text)])),
        Err(out_of_range) => {
            tracing::debug!(
                url = %params.url,
                requested = out_of_range.requested,
                last = out_of_range.last,
                "chunk index out of range"
            );
            error_result(out_of_range.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::testing::{CannedSource, result_text, state};
    use std::sync::Arc;

    const URL: &str = "https://www.youtube.com/watch?v=abc123";

    fn params(chunk_index: i64, chunk_size: Option<usize>) -> GetTranscriptChunkParams {
        GetTranscriptChunkParams { url: URL.into(), chunk_index, chunk_size }
    }

    fn forty_thousand_char_source() -> Arc<CannedSource> {
        let header = format!("Transcript: abc123.en.vtt\n{}\n", "=".repeat(40));
        let body = "x".repeat(40_000 - header.chars().count());
        Arc::new(CannedSource::with_lines(&[body.as_str()]))
    }

    #[tokio::test]
    async fn test_last_of_three_chunks() {
        let (state, _clock) = state(forty_thousand_char_source(), 15_000);

        let result = get_transcript_chunk_impl(&state, params(2, None)).await.unwrap();
        assert!(!result.is_error.unwrap_or(false));
        let text = result_text(&result);
        assert!(text.contains("This is chunk 3 of 3 (10000 characters in this chunk, 40000 characters"));
        assert!(text.contains("This is the last chunk."));
    }

    #[tokio::test]
    async fn test_past_end_is_out_of_range() {
        let (state, _clock) = state(forty_thousand_char_source(), 15_000);

        let result = get_transcript_chunk_impl(&state, params(3, None)).await.unwrap();
        assert!(result.is_error.unwrap_or(false));
        let text = result_text(&result);
        assert!(text.starts_with("CHUNK_OUT_OF_RANGE"));
        assert!(text.contains("0-2"));
    }

    #[tokio::test]
    async fn test_negative_index_is_out_of_range() {
        let (state, _clock) = state(forty_thousand_char_source(), 15_000);

        let result = get_transcript_chunk_impl(&state, params(-1, None)).await.unwrap();
        assert!(result.is_error.unwrap_or(false));
        assert!(result_text(&result).contains("Available range: 0-2"));
    }

    #[tokio::test]
    async fn test_footer_always_present() {
        let source = Arc::new(CannedSource::with_lines(&["Hello"]));
        let (state, _clock) = state(source, 15_000);

        let result = get_transcript_chunk_impl(&state, params(0, None)).await.unwrap();
        let text = result_text(&result);
        assert!(text.contains("This is chunk 1 of 1"));
        assert!(text.contains("This is the last chunk."));
    }

    #[tokio::test]
    async fn test_first_chunk_size_wins() {
        let source = Arc::new(CannedSource::with_lines(&["alpha beta gamma delta"]));
        let (state, _clock) = state(source.clone(), 15_000);

        let small = get_transcript_chunk_impl(&state, params(0, Some(10))).await.unwrap();
        let again = get_transcript_chunk_impl(&state, params(0, Some(15_000))).await.unwrap();

        assert_eq!(result_text(&small), result_text(&again));
        assert!(result_text(&again).contains("(10 characters in this chunk"));
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_zero_chunk_size_rejected() {
        let source = Arc::new(CannedSource::with_lines(&["Hello"]));
        let (state, _clock) = state(source.clone(), 15_000);

        let result = get_transcript_chunk_impl(&state, params(0, Some(0))).await;
        let err = result.unwrap_err();
        assert_eq!(err.code.0, -32602);
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn test_source_failure_is_error_result() {
        let source = Arc::new(CannedSource::failing("ERROR: no captions"));
        let (state, _clock) = state(source, 15_000);

        let result = get_transcript_chunk_impl(&state, params(0, None)).await.unwrap();
        assert!(result.is_error.unwrap_or(false));
        assert!(result_text(&result).starts_with("SOURCE_FAILED"));
    }
}
