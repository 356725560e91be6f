//! # Systempay Canonical
//!
//! Canonical field sets and signature computation for the Systempay form
//! API, shared by the outbound form builder and the inbound notification
//! verifier.
//!
//! ## Canonicalization rules
//!
//! 1. Field names are unique
//! 2. Fields are sorted by name, ascending byte order
//! 3. Field **values** (never names) are concatenated with `+`
//! 4. `sha256` signs the concatenation with HMAC-SHA256 and base64-encodes
//!    the raw tag; `sha1` is a plain lowercase hex digest kept for legacy
//!    contracts
//!
//! ## Example
//!
//! ```rust
//! use systempay_canonical::{sign, FieldSet};
//! use systempay_core::HashAlgorithm;
//!
//! let mut fields = FieldSet::new();
//! fields.insert("vads_amount", "19999").unwrap();
//! fields.insert("vads_ctx_mode", "TEST").unwrap();
//!
//! let signature = sign(&fields, "secret", HashAlgorithm::Sha256);
//! assert!(!signature.is_empty());
//! ```

mod error;
mod field_set;
mod sign;

pub use error::*;
pub use field_set::*;
pub use sign::*;
