//! Fixed-size character chunking.

/// Split `text` into contiguous slices of `size` characters.
///
/// Every slice except the last holds exactly `size` characters; the last holds
/// the remainder. Empty text yields no slices. Sizes are counted in `char`s so
/// a slice never splits a UTF-8 sequence. Callers validate `size >= 1`; in
/// release builds a zero size is treated as one.
pub fn chunk_text(text: &str, size: usize) -> Vec<String> {
    debug_assert!(size > 0, "chunk size must be at least 1");
    let size = size.max(1);
    let mut chunks = Vec::with_capacity(text.len() / size + 1);
    let mut start = 0;
    let mut count = 0;

    for (idx, _) in text.char_indices() {
        if count == size {
            chunks.push(text[start..idx].to_string());
            start = idx;
            count = 0;
        }
        count += 1;
    }

    if start < text.len() {
        chunks.push(text[start..].to_string());
    }

    chunks
}
