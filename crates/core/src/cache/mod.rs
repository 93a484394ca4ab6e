//! In-memory transcript cache.
//!
//! This module provides a process-local cache keyed by a SHA-256 digest of the
//! source URL. It supports:
//!
//! - Populate-on-miss through an injected `TranscriptSource`
//! - Chunk layout fixed at population time
//! - Lazy TTL expiry driven by an injectable `Clock`

pub mod clock;
pub mod entry;
pub mod hash;
pub mod store;

pub use crate::Error;

pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::{CacheEntry, combine_transcripts};
pub use store::TranscriptCache;
