//! In-memory transcript cache with lazy expiry.
//!
//! Entries are keyed by [`compute_identity`] of the source URL and expire
//! `ttl` after they were populated. Nothing runs in the background: callers
//! invoke [`TranscriptCache::sweep_expired`] at the top of each operation, and
//! lookups additionally treat expired entries as misses.
//!
//! The map lock is held only for lookups and inserts, never across the source
//! fetch. Two concurrent misses for the same URL both fetch; the last insert
//! wins.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;

use super::clock::{Clock, SystemClock};
use super::entry::CacheEntry;
use super::hash::compute_identity;
use crate::Error;
use crate::source::TranscriptSource;

/// Transcript cache handle.
#[derive(Debug)]
pub struct TranscriptCache {
    entries: Mutex<HashMap<String, Arc<CacheEntry>>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl TranscriptCache {
    /// Create a cache backed by the system clock.
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self { entries: Mutex::new(HashMap::new()), ttl, clock }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Current time according to the cache's clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Remove every entry whose age at `now` is at least the TTL.
    ///
    /// Returns the number of entries removed.
    pub async fn sweep_expired(&self, now: DateTime<Utc>) -> usize {
        let mut entries = self.entries.lock().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now, self.ttl));
        let removed = before - entries.len();

        if removed > 0 {
            tracing::debug!(removed, remaining = entries.len(), "swept expired transcripts");
        }

        removed
    }

    /// Look up an unexpired entry without populating.
    pub async fn get(&self, url: &str) -> Option<Arc<CacheEntry>> {
        self.lookup(&compute_identity(url), self.clock.now()).await
    }

    /// Return the cached entry for `url`, fetching and storing it on a miss.
    ///
    /// A hit is returned unchanged regardless of `chunk_size`; the chunk layout
    /// chosen by the populating call is kept until the entry expires.
    ///
    /// # Errors
    ///
    /// Propagates the source's error on a miss. Nothing is stored in that case.
    pub async fn get_or_populate(
        &self, url: &str, chunk_size: usize, source: &dyn TranscriptSource,
    ) -> Result<Arc<CacheEntry>, Error> {
        let identity = compute_identity(url);

        if let Some(entry) = self.lookup(&identity, self.clock.now()).await {
            tracing::debug!(url, identity = %identity, "transcript cache hit");
            return Ok(entry);
        }

        tracing::debug!(url, identity = %identity, "transcript cache miss");

        let payloads = source.fetch_raw_transcripts(url).await.inspect_err(|e| {
            tracing::warn!(url, error = %e, "transcript source failed");
        })?;

        let entry = Arc::new(CacheEntry::build(url, &payloads, chunk_size, self.clock.now()));

        tracing::info!(
            url,
            payloads = payloads.len(),
            chars = entry.total_chars(),
            chunks = entry.chunk_count(),
            chunk_size,
            "cached transcript"
        );

        self.entries.lock().await.insert(identity, Arc::clone(&entry));

        Ok(entry)
    }

    /// Drop the entry for `url`. Returns whether one was present.
    pub async fn evict(&self, url: &str) -> bool {
        self.entries.lock().await.remove(&compute_identity(url)).is_some()
    }

    /// Drop every entry. Returns how many were removed.
    pub async fn clear(&self) -> usize {
        let mut entries = self.entries.lock().await;
        let removed = entries.len();
        entries.clear();
        removed
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }

    async fn lookup(&self, identity: &str, now: DateTime<Utc>) -> Option<Arc<CacheEntry>> {
        self.entries
            .lock()
            .await
            .get(identity)
            .filter(|entry| !entry.is_expired(now, self.ttl))
            .cloned()
    }
}
