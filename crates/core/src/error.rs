//! Unified error types for mcp-transcript.
//!
//! Every message is prefixed with a stable error code so tool results can be
//! matched by clients without parsing free-form text.

use rmcp::model::{ErrorCode, ErrorData as McpError};

/// Unified error types for the mcp-transcript server.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid input parameters (e.g., empty URL, zero chunk size).
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// Requested chunk index is outside `0..=last`.
    #[error("CHUNK_OUT_OF_RANGE: chunk_index {requested} is invalid. Available range: 0-{last}")]
    ChunkOutOfRange { requested: i64, last: usize },

    /// The transcript extractor could not be started.
    #[error("SOURCE_UNAVAILABLE: {0}")]
    SourceUnavailable(String),

    /// The transcript extractor ran but reported a failure.
    #[error("SOURCE_FAILED: {0}")]
    SourceFailed(String),

    /// The transcript extractor did not finish in time.
    #[error("SOURCE_TIMEOUT: {0}")]
    SourceTimeout(String),

    /// The extractor succeeded but no caption tracks were produced.
    #[error("NO_CAPTIONS: {0}")]
    NoCaptions(String),

    /// Local filesystem failure while staging caption files.
    #[error("IO_ERROR: {0}")]
    Io(#[from] std::io::Error),

    /// Server-side failure unrelated to the request (e.g. encoding a response).
    #[error("INTERNAL_ERROR: {0}")]
    Internal(String),
}

impl Error {
    /// Whether this error belongs in a tool result (`is_error = true`) rather
    /// than a protocol-level JSON-RPC error.
    pub fn is_tool_failure(&self) -> bool {
        !matches!(self, Error::InvalidInput(_) | Error::Internal(_))
    }
}

impl From<Error> for McpError {
    fn from(err: Error) -> Self {
        let code = match &err {
            Error::InvalidInput(_) => -32602,
            Error::ChunkOutOfRange { .. } => -32001,
            Error::SourceUnavailable(_) => -32002,
            Error::SourceFailed(_) => -32003,
            Error::SourceTimeout(_) => -32004,
            Error::NoCaptions(_) => -32005,
            Error::Io(_) => -32000,
            Error::Internal(_) => -32603,
        };

        McpError { code: ErrorCode(code), message: err.to_string().into(), data: None }
    }
}
