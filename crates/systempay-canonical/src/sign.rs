//! Signature computation
//!
//! Pure functions from a canonical message to a signature string. No I/O,
//! deterministic for given inputs.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::{Digest, Sha256};

use systempay_core::HashAlgorithm;

use crate::field_set::FieldSet;

type HmacSha256 = Hmac<Sha256>;

/// Sign a canonical field set
///
/// Concatenates the values in ascending name order and encodes the result
/// with [`encode`]. Callers that need an extra trailing component (the
/// outbound builder's `z_key` field, the inbound verifier's `+key` suffix)
/// add it before calling in.
///
/// # Example
///
/// ```rust
/// use systempay_canonical::{sign, FieldSet};
/// use systempay_core::HashAlgorithm;
///
/// let fields = FieldSet::from_pairs([("b", "2"), ("a", "1")]).unwrap();
/// let first = sign(&fields, "secret", HashAlgorithm::Sha256);
/// let second = sign(&fields, "secret", HashAlgorithm::Sha256);
/// assert_eq!(first, second);
/// ```
pub fn sign(fields: &FieldSet, key: &str, algorithm: HashAlgorithm) -> String {
    encode(&fields.concatenated(), key, algorithm)
}

/// Encode an already-concatenated message
///
/// - `Sha256`: HMAC-SHA256 over the message with `key` as the secret,
///   base64 of the raw 32-byte tag.
/// - `Sha1`: lowercase hex SHA-1 digest of the message alone. The key is
///   not mixed cryptographically; legacy contracts include it as a
///   trailing field in the message instead.
pub fn encode(message: &str, key: &str, algorithm: HashAlgorithm) -> String {
    match algorithm {
        HashAlgorithm::Sha256 => {
            let mut mac = HmacSha256::new_from_slice(key.as_bytes())
                .expect("HMAC-SHA256 accepts keys of any length");
            mac.update(message.as_bytes());
            BASE64.encode(mac.finalize().into_bytes())
        }
        HashAlgorithm::Sha1 => hex::encode(Sha1::digest(message.as_bytes())),
    }
}

/// Compare a computed signature against a received one in constant time
pub fn signatures_match(computed: &str, received: &str) -> bool {
    if computed.len() != received.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in computed.bytes().zip(received.bytes()) {
        result |= x ^ y;
    }
    result == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_deterministic() {
        let fields = FieldSet::from_pairs([("a", "1"), ("b", "2")]).unwrap();

        let signatures: Vec<_> = (0..10)
            .map(|_| sign(&fields, "key", HashAlgorithm::Sha256))
            .collect();

        for signature in &signatures[1..] {
            assert_eq!(&signatures[0], signature);
        }
    }

    #[test]
    fn test_sha256_is_base64_of_32_bytes() {
        let signature = encode("a+b+c", "key", HashAlgorithm::Sha256);

        let raw = BASE64.decode(&signature).unwrap();
        assert_eq!(raw.len(), 32);
    }

    #[test]
    fn test_sha256_known_vector() {
        // RFC 4231 test case 2, base64 instead of hex
        let signature = encode("what do ya want for nothing?", "Jefe", HashAlgorithm::Sha256);
        assert_eq!(signature, "W9zBRr9gdU5qBCQmCJV1x1oAPwidJzmDnexYuWTsOEM=");
    }

    #[test]
    fn test_sha1_known_vector() {
        let signature = encode("hello", "ignored", HashAlgorithm::Sha1);
        assert_eq!(signature, "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d");
    }

    #[test]
    fn test_sha1_ignores_key() {
        // Legacy mode hashes the message alone
        assert_eq!(
            encode("message", "key one", HashAlgorithm::Sha1),
            encode("message", "key two", HashAlgorithm::Sha1)
        );
    }

    #[test]
    fn test_sha256_key_changes_signature() {
        assert_ne!(
            encode("message", "key one", HashAlgorithm::Sha256),
            encode("message", "key two", HashAlgorithm::Sha256)
        );
    }

    #[test]
    fn test_different_messages_different_signatures() {
        assert_ne!(
            encode("message one", "key", HashAlgorithm::Sha256),
            encode("message two", "key", HashAlgorithm::Sha256)
        );
    }

    #[test]
    fn test_signatures_match() {
        let signature = encode("message", "key", HashAlgorithm::Sha256);

        assert!(signatures_match(&signature, &signature.clone()));
        assert!(!signatures_match(&signature, "Ur5s9uhuLMSxTS7X7qIHuUdvIiWTFk2FPfCXDxIRP0I="));
        assert!(!signatures_match(&signature, ""));
    }

    #[test]
    fn test_sign_uses_sorted_values() {
        let fields = FieldSet::from_pairs([("z", "last"), ("a", "first")]).unwrap();

        assert_eq!(
            sign(&fields, "key", HashAlgorithm::Sha256),
            encode("first+last", "key", HashAlgorithm::Sha256)
        );
    }
}
