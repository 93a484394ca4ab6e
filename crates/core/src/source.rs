//! Transcript source capability.
//!
//! The cache never talks to an extractor directly; it is handed something that
//! implements [`TranscriptSource`]. Production uses the yt-dlp backed source in
//! `vidscript-client`, tests use canned payloads.

use async_trait::async_trait;

use crate::Error;

/// One raw caption payload returned by a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTranscript {
    /// Human-readable name for the payload (e.g. the caption file name).
    pub label: String,
    /// Unprocessed caption markup.
    pub raw_text: String,
}

impl RawTranscript {
    pub fn new(label: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self { label: label.into(), raw_text: raw_text.into() }
    }
}

/// Fetches raw caption payloads for a video URL.
///
/// Implementations own their timeout and retry behavior. Failures are returned,
/// never panicked.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    async fn fetch_raw_transcripts(&self, url: &str) -> Result<Vec<RawTranscript>, Error>;
}
