//! Pagination rendering for chunked transcripts.
//!
//! A page is the chunk text followed by a navigation footer telling the caller
//! where it is and which `chunk_index` to request next.

use serde::Serialize;

use crate::Error;
use crate::cache::CacheEntry;

/// Tool named in the "next chunk" hint.
pub const CHUNK_TOOL_NAME: &str = "get_transcript_chunk";

/// Navigation metadata for one rendered chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    /// 0-based chunk index.
    pub index: usize,
    pub total_chunks: usize,
    /// Characters in this chunk.
    pub chunk_chars: usize,
    /// Characters in the whole transcript.
    pub total_chars: usize,
    pub has_next: bool,
}

/// A chunk ready to return to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub text: String,
    pub meta: PageMeta,
}

/// A chunk index outside `0..=last`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("chunk_index {requested} is invalid. Available range: 0-{last}")]
pub struct OutOfRange {
    pub requested: i64,
    pub last: usize,
}

impl From<OutOfRange> for Error {
    fn from(err: OutOfRange) -> Self {
        Error::ChunkOutOfRange { requested: err.requested, last: err.last }
    }
}

/// Render chunk `index` of `entry` with a navigation footer.
///
/// # Errors
///
/// Returns [`OutOfRange`] when `index` is negative or past the last chunk.
pub fn render(entry: &CacheEntry, index: i64) -> Result<RenderedPage, OutOfRange> {
    let total_chunks = entry.chunk_count();
    let position = usize::try_from(index)
        .ok()
        .filter(|i| *i < total_chunks)
        .ok_or(OutOfRange { requested: index, last: total_chunks.saturating_sub(1) })?;

    let chunk = &entry.chunks[position];
    let meta = page_meta(entry, position);

    Ok(RenderedPage { text: format!("{chunk}{}", footer(&meta)), meta })
}

/// Render the first chunk.
///
/// Single-chunk transcripts are returned bare, with no footer.
pub fn render_first(entry: &CacheEntry) -> RenderedPage {
    let meta = page_meta(entry, 0);
    let chunk = entry.chunks.first().map(String::as_str).unwrap_or_default();

    if meta.total_chunks <= 1 {
        return RenderedPage { text: chunk.to_string(), meta };
    }

    RenderedPage { text: format!("{chunk}{}", footer(&meta)), meta }
}

fn page_meta(entry: &CacheEntry, index: usize) -> PageMeta {
    let total_chunks = entry.chunk_count();
    PageMeta {
        index,
        total_chunks,
        chunk_chars: entry.chunks.get(index).map_or(0, |c| c.chars().count()),
        total_chars: entry.total_chars(),
        has_next: index + 1 < total_chunks,
    }
}

fn footer(meta: &PageMeta) -> String {
    let position = format!(
        "This is chunk {} of {} ({} characters in this chunk, {} characters in the full transcript).",
        meta.index + 1,
        meta.total_chunks,
        meta.chunk_chars,
        meta.total_chars
    );

    let next = if meta.has_next {
        format!("To get the next chunk, call {CHUNK_TOOL_NAME} with chunk_index={}.", meta.index + 1)
    } else {
        "This is the last chunk.".to_string()
    };

    format!("\n\n---\n{position}\n{next}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entry_with(text: &str, chunk_size: usize) -> CacheEntry {
        CacheEntry::from_text("https://youtu.be/abc", text.to_string(), chunk_size, Utc::now())
    }

    #[test]
    fn test_forty_thousand_chars_last_chunk() {
        let entry = entry_with(&"a".repeat(40_000), 15_000);
        assert_eq!(entry.chunk_count(), 3);

        let page = render(&entry, 2).unwrap();
        assert!(page.text.contains("This is chunk 3 of 3"));
        assert!(page.text.contains("This is the last chunk."));
        assert!(!page.text.contains("chunk_index="));
        assert_eq!(page.meta.chunk_chars, 10_000);
        assert_eq!(page.meta.total_chars, 40_000);
        assert!(!page.meta.has_next);
    }

    #[test]
    fn test_forty_thousand_chars_past_end() {
        let entry = entry_with(&"a".repeat(40_000), 15_000);
        let err = render(&entry, 3).unwrap_err();
        assert_eq!(err, OutOfRange { requested: 3, last: 2 });
        assert!(err.to_string().contains("0-2"));
    }

    #[test]
    fn test_negative_and_one_past_end_out_of_range() {
        let entry = entry_with("abcdefghij", 4);
        let last = entry.chunk_count() - 1;
        for index in [-1, entry.chunk_count() as i64] {
            let err = render(&entry, index).unwrap_err();
            assert_eq!(err.last, last);
            assert_eq!(err.requested, index);
        }
    }

    #[test]
    fn test_next_hint_names_following_index() {
        let entry = entry_with("abcdefghij", 4);
        for index in 0..entry.chunk_count() - 1 {
            let page = render(&entry, index as i64).unwrap();
            assert!(page.text.contains(&format!("chunk_index={}", index + 1)));
            assert!(!page.text.contains("This is the last chunk."));
            assert!(page.meta.has_next);
        }
    }

    #[test]
    fn test_page_starts_with_chunk_text() {
        let entry = entry_with("abcdefghij", 4);
        let page = render(&entry, 1).unwrap();
        assert!(page.text.starts_with("efgh\n\n---\n"));
        assert!(page.text.contains("This is chunk 2 of 3 (4 characters in this chunk, 10 characters"));
    }

    #[test]
    fn test_render_first_single_chunk_has_no_footer() {
        let entry = entry_with("short transcript", 15_000);
        let page = render_first(&entry);
        assert_eq!(page.text, "short transcript");
        assert_eq!(page.meta.total_chunks, 1);
    }

    #[test]
    fn test_render_first_multi_chunk_matches_render_zero() {
        let entry = entry_with("abcdefghij", 4);
        assert_eq!(render_first(&entry), render(&entry, 0).unwrap());
    }

    #[test]
    fn test_empty_transcript_renders_chunk_one_of_one() {
        let entry = entry_with("", 15_000);
        let page = render(&entry, 0).unwrap();
        assert!(page.text.contains("This is chunk 1 of 1"));
        assert_eq!(render_first(&entry).text, "");
        assert_eq!(render(&entry, 1).unwrap_err().last, 0);
    }

    #[test]
    fn test_out_of_range_into_error() {
        let err: Error = OutOfRange { requested: -1, last: 4 }.into();
        assert_eq!(err.to_string(), "CHUNK_OUT_OF_RANGE: chunk_index -1 is invalid. Available range: 0-4");
    }
}
