//! Client code for mcp-transcript.
//!
//! This crate provides the concrete transcript source: it drives `yt-dlp` to
//! download caption tracks into a scratch directory and hands the raw WebVTT
//! text back to the core cache.

pub mod ytdlp;

pub use ytdlp::{YtDlpConfig, YtDlpSource, collect_captions};
