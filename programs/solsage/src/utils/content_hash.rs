use anchor_lang::solana_program::hash::hash;

/// SHA-256 of the knowledge content. Callers compute this off chain; the
/// program only ever sees the digest.
pub fn content_hash(content: &[u8]) -> [u8; 32] {
    hash(content).to_bytes()
}

/// SHA-256 of the query text that triggered an attribution.
pub fn query_hash(query: &str) -> [u8; 32] {
    hash(query.as_bytes()).to_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_hash_is_sha256() {
        assert_eq!(
            hex::encode(content_hash(b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            hex::encode(content_hash(b"")),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_content_hash_is_deterministic() {
        let content = b"Borrowed references must not outlive their owner.";
        assert_eq!(content_hash(content), content_hash(content));
        assert_ne!(content_hash(content), content_hash(b"Something else entirely."));
    }

    #[test]
    fn test_query_hash_matches_content_hash_of_text() {
        let query = "how do lifetimes work";
        assert_eq!(query_hash(query), content_hash(query.as_bytes()));
    }
}
