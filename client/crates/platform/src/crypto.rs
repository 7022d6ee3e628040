//! Cryptographic Utilities

use base64::{Engine, engine::general_purpose};
use sha2::{Digest, Sha256};

/// Compute SHA-256 hash
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Short, stable, non-reversible label for a credential
///
/// Lets logs correlate requests made with the same token without ever
/// writing the token itself.
pub fn token_fingerprint(token: &str) -> String {
    let digest = sha256(token.as_bytes());
    general_purpose::URL_SAFE_NO_PAD.encode(&digest[..6])
}
