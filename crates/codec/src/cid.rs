use sha2::{Digest, Sha256};
use std::fmt::Write as _;

/// Content identifier: lowercase hex SHA-256 of an artifact's canonical bytes.
pub type Cid = String;

/// Derive the CID for a byte sequence.
///
/// Stable across calls, process restarts, and platforms; the digest depends
/// only on the input bytes. This is the dedup key for the record store, so
/// every ingestion path must feed it the same byte span for the same artifact.
#[must_use]
pub fn digest(bytes: &[u8]) -> Cid {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let digest = hasher.finalize();
    let mut out = String::with_capacity(digest.len() * 2);
    for byte in digest {
        let _ = write!(out, "{byte:02x}");
    }
    out
}
