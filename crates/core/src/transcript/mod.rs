//! Transcript text processing.
//!
//! Pure functions only: caption normalization and fixed-size chunking. Both are
//! applied once when a transcript enters the cache.

pub mod chunk;
pub mod normalize;

pub use chunk::chunk_text;
pub use normalize::{CAPTION_MARKER, clean_cue_text, normalize_captions};
