use sha2::{Digest, Sha256};

/// SHA-256 hex digest of the raw text bytes.
///
/// Identical text always hashes the same; the hash identifies content, it
/// does not deduplicate receipts.
pub fn content_hash(raw_text: &str) -> String {
    format!("{:x}", Sha256::digest(raw_text.as_bytes()))
}
