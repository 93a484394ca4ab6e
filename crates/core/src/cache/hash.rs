//! Cache identity derivation.

use sha2::{Digest, Sha256};

/// Compute the cache identity for a source URL.
///
/// The URL is hashed exactly as given. No canonicalization is applied, so
/// `https://youtu.be/x` and `https://youtu.be/x/` are different identities.
pub fn compute_identity(url: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    hex::encode(hasher.finalize())
}
