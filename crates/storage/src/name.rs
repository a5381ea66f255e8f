//! Random object-name generation.

use rand::RngCore;

/// Bytes of randomness per object name; 32 hex chars keeps collisions
/// out of reach without content hashing.
const SUFFIX_BYTES: usize = 16;

/// Generate a random object name, preserving the original filename's
/// extension (lowercased) when present and falling back to
/// `fallback_ext` otherwise. The original name itself is discarded.
pub fn object_name(original_filename: Option<&str>, fallback_ext: &str) -> String {
    let ext = original_filename
        .and_then(|name| name.rsplit_once('.').map(|(_, ext)| ext))
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(str::to_lowercase)
        .unwrap_or_else(|| fallback_ext.to_string());

    let mut bytes = [0u8; SUFFIX_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    let suffix = hex::encode(bytes);

    format!("{suffix}.{ext}")
}

mod hex {
    /// Encode bytes as a lowercase hex string.
    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        bytes.as_ref().iter().map(|b| format!("{b:02x}")).collect()
    }
}
