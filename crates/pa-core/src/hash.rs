use sha2::{Digest, Sha256};

/// Generic SHA256 helper — returns a lowercase hex-encoded digest.
pub fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Fingerprint of a whole input document as read from disk.
///
/// Reports carry one per input so two reports can be told apart when the
/// underlying files were edited between runs.
pub fn fingerprint(text: &str) -> String {
    sha256_hex(text)
}
