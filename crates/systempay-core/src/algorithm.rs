//! Hash algorithm selection
//!
//! The gateway signs form fields with one of two schemes: HMAC-SHA256
//! (the current default) or a plain SHA-1 digest kept for merchants on the
//! historical contract. The allowed set is derived from the enum itself so
//! the error message can never drift from the variants.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Signature scheme selector for the form API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// Plain SHA-1 hex digest. Legacy contracts only; the secret key is not
    /// mixed cryptographically in this mode.
    Sha1,
    /// HMAC-SHA256 with the secret key, base64-encoded.
    #[default]
    Sha256,
}

impl HashAlgorithm {
    /// Every algorithm the gateway accepts
    pub const ALL: [HashAlgorithm; 2] = [HashAlgorithm::Sha1, HashAlgorithm::Sha256];

    /// The lowercase wire name (`sha1`, `sha256`)
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha256 => "sha256",
        }
    }

    /// Comma-separated list of allowed names, for error messages
    pub fn allowed() -> String {
        Self::ALL
            .iter()
            .map(|algorithm| algorithm.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Display for HashAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sha1" => Ok(HashAlgorithm::Sha1),
            "sha256" => Ok(HashAlgorithm::Sha256),
            _ => Err(CoreError::UnsupportedAlgorithm {
                got: s.to_string(),
                allowed: Self::allowed(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sha256() {
        assert_eq!(HashAlgorithm::default(), HashAlgorithm::Sha256);
    }

    #[test]
    fn test_parse_allowed_algorithms() {
        assert_eq!("sha1".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha1);
        assert_eq!(
            "sha256".parse::<HashAlgorithm>().unwrap(),
            HashAlgorithm::Sha256
        );
    }

    #[test]
    fn test_parse_rejects_sha512() {
        let err = "sha512".parse::<HashAlgorithm>().unwrap_err();
        assert_eq!(
            err,
            CoreError::UnsupportedAlgorithm {
                got: "sha512".to_string(),
                allowed: "sha1, sha256".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "hash algorithm sha512 is not allowed (allowed: sha1, sha256)"
        );
    }

    #[test]
    fn test_allowed_list_derived_from_variants() {
        assert_eq!(HashAlgorithm::allowed(), "sha1, sha256");
    }

    #[test]
    fn test_display_matches_wire_names() {
        assert_eq!(HashAlgorithm::Sha1.to_string(), "sha1");
        assert_eq!(HashAlgorithm::Sha256.to_string(), "sha256");
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&HashAlgorithm::Sha256).unwrap(),
            "\"sha256\""
        );
        let parsed: HashAlgorithm = serde_json::from_str("\"sha1\"").unwrap();
        assert_eq!(parsed, HashAlgorithm::Sha1);
    }
}
