use sha2::{Digest, Sha256};

/// Compute hash for arbitrary content (manifest payloads, on-disk files)
pub fn compute_content_hash(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    let digest = hasher.finalize();
    format!("{:x}", digest)
}

/// Compute hash for string content
pub fn compute_string_hash(content: &str) -> String {
    compute_content_hash(content.as_bytes())
}

/// Generate a short hash (first 12 characters) for display purposes
pub fn short_hash(full_hash: &str) -> String {
    full_hash.chars().take(12).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_string_hash() {
        let hash1 = compute_string_hash("hello world");
        let hash2 = compute_string_hash("hello world");
        let hash3 = compute_string_hash("hello world!");

        assert_eq!(hash1, hash2);
        assert_ne!(hash1, hash3);
        assert_eq!(hash1.len(), 64); // SHA-256 produces 64 hex characters
    }

    #[test]
    fn test_short_hash() {
        let full_hash = "a1b2c3d4e5f6789012345678901234567890abcdef1234567890abcdef123456";
        let short = short_hash(full_hash);
        assert_eq!(short, "a1b2c3d4e5f6");
        assert_eq!(short.len(), 12);
    }
}
