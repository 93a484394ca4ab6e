//! Cached transcript entries.

use chrono::{DateTime, Duration, Utc};

use super::hash::compute_identity;
use crate::source::RawTranscript;
use crate::transcript::{chunk_text, normalize_captions};

/// Width of the rule printed under each transcript label.
const LABEL_RULE_WIDTH: usize = 40;

/// A normalized transcript and its fixed chunk layout.
///
/// Entries are write-once: they are shared behind an `Arc` and never mutated
/// after construction. `chunks.concat() == full_text` always holds, and
/// `chunks` is never empty (an empty transcript has one empty chunk).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub identity: String,
    pub source_url: String,
    pub full_text: String,
    pub chunks: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Build an entry from raw source payloads.
    ///
    /// Each payload is normalized on its own, then labelled and joined.
    pub fn build(url: &str, payloads: &[RawTranscript], chunk_size: usize, created_at: DateTime<Utc>) -> Self {
        Self::from_text(url, combine_transcripts(payloads), chunk_size, created_at)
    }

    /// Build an entry from already-normalized text.
    pub fn from_text(url: &str, full_text: String, chunk_size: usize, created_at: DateTime<Utc>) -> Self {
        let mut chunks = chunk_text(&full_text, chunk_size);
        if chunks.is_empty() {
            chunks.push(String::new());
        }

        Self { identity: compute_identity(url), source_url: url.to_string(), full_text, chunks, created_at }
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Length of the full transcript in characters.
    pub fn total_chars(&self) -> usize {
        self.full_text.chars().count()
    }

    /// Whether the entry has reached `ttl` at time `now`.
    pub fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.created_at >= ttl
    }
}

/// Normalize each payload and join them under labelled headers.
pub fn combine_transcripts(payloads: &[RawTranscript]) -> String {
    let rule = "=".repeat(LABEL_RULE_WIDTH);
    payloads
        .iter()
        .map(|p| format!("Transcript: {}\n{}\n{}", p.label, rule, normalize_captions(&p.raw_text)))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const VTT: &str = "WEBVTT\nKind: captions\nLanguage: en\n\n00:00:00.000 --> 00:00:01.000\nHello\n";

    #[test]
    fn test_combine_single_payload() {
        let text = combine_transcripts(&[RawTranscript::new("abc.en.vtt", VTT)]);
        assert_eq!(text, format!("Transcript: abc.en.vtt\n{}\nHello", "=".repeat(40)));
    }

    #[test]
    fn test_combine_multiple_payloads_in_order() {
        let payloads = [RawTranscript::new("a.en.vtt", VTT), RawTranscript::new("a.en-orig.vtt", VTT)];
        let text = combine_transcripts(&payloads);
        let first = text.find("Transcript: a.en.vtt").unwrap();
        let second = text.find("Transcript: a.en-orig.vtt").unwrap();
        assert!(first < second);
        assert!(text.contains("Hello\n\nTranscript: a.en-orig.vtt"));
    }

    #[test]
    fn test_combine_no_payloads() {
        assert_eq!(combine_transcripts(&[]), "");
    }

    #[test]
    fn test_empty_text_has_one_empty_chunk() {
        let entry = CacheEntry::from_text("https://youtu.be/x", String::new(), 10, Utc::now());
        assert_eq!(entry.chunks, vec![String::new()]);
        assert_eq!(entry.chunk_count(), 1);
        assert_eq!(entry.total_chars(), 0);
    }

    #[test]
    fn test_chunks_reproduce_full_text() {
        let payloads = [RawTranscript::new("a.vtt", VTT), RawTranscript::new("b.vtt", VTT)];
        let entry = CacheEntry::build("https://youtu.be/x", &payloads, 7, Utc::now());
        assert_eq!(entry.chunks.concat(), entry.full_text);
        assert_eq!(entry.identity, compute_identity("https://youtu.be/x"));
        assert_eq!(entry.source_url, "https://youtu.be/x");
    }

    #[test]
    fn test_expiry_boundary() {
        let created = Utc::now();
        let entry = CacheEntry::from_text("u", "t".into(), 10, created);
        let ttl = Duration::minutes(30);
        assert!(!entry.is_expired(created + Duration::minutes(29), ttl));
        assert!(entry.is_expired(created + ttl, ttl));
    }
}
