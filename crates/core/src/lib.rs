//! Core types and shared functionality for mcp-transcript.
//!
//! This crate provides:
//! - Caption normalization and fixed-size chunking
//! - In-memory transcript cache with lazy TTL expiry
//! - Pagination rendering for chunked transcripts
//! - The `TranscriptSource` capability consumed by the cache
//! - Unified error types and configuration

pub mod cache;
pub mod config;
pub mod error;
pub mod page;
pub mod source;
pub mod transcript;

pub use cache::{CacheEntry, TranscriptCache};
pub use config::AppConfig;
pub use error::Error;
pub use page::{OutOfRange, PageMeta, RenderedPage};
pub use source::{RawTranscript, TranscriptSource};
