use sha2::{Digest, Sha256};

/// Returns the lowercase hex SHA-256 digest of `data`.
pub fn sha256_hex(data: &[u8]) -> String {
    let digest = Sha256::new().chain_update(data).finalize();
    hex::encode(digest)
}

/// Hashes the concatenation of two hex-encoded digests, as used when
/// climbing a Merkle tree: `hex(SHA-256(left_hex || right_hex))`.
///
/// This hashes the hex *strings* themselves, not the bytes they decode to.
pub fn hash_hex_pair(left_hex: &str, right_hex: &str) -> String {
    let mut joined = String::with_capacity(left_hex.len() + right_hex.len());
    joined.push_str(left_hex);
    joined.push_str(right_hex);
    sha256_hex(joined.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_hex_known_vector() {
        // SHA-256("") per FIPS 180-4 test vectors.
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn sha256_hex_is_64_lowercase_hex_chars() {
        let digest = sha256_hex(b"hello world");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn sha256_hex_deterministic() {
        assert_eq!(sha256_hex(b"same input"), sha256_hex(b"same input"));
    }

    #[test]
    fn sha256_hex_differs_across_inputs() {
        assert_ne!(sha256_hex(b"a"), sha256_hex(b"b"));
    }

    #[test]
    fn hash_hex_pair_concatenates_strings_not_bytes() {
        let left = sha256_hex(b"left");
        let right = sha256_hex(b"right");
        let via_helper = hash_hex_pair(&left, &right);
        let manual = sha256_hex(format!("{left}{right}").as_bytes());
        assert_eq!(via_helper, manual);
    }
}
