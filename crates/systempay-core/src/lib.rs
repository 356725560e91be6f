//! # Systempay Core
//!
//! Core types and code tables for the Systempay hosted form API (V2).
//!
//! This crate provides:
//! - Closed enums for the gateway's enumerated fields (hash algorithm,
//!   context mode, payment configuration, transaction status, event source)
//! - The ISO-4217 currency lookup used to fill `vads_currency`
//! - The authorization-result code classifier for `vads_auth_result`
//!
//! ## Example
//!
//! ```rust
//! use systempay_core::{ContextMode, Currency, HashAlgorithm};
//!
//! let mode: ContextMode = "TEST".parse().unwrap();
//! assert_eq!(mode, ContextMode::Test);
//!
//! let currency: Currency = "EUR".parse().unwrap();
//! assert_eq!(currency.numeric(), 978);
//!
//! assert!("sha512".parse::<HashAlgorithm>().is_err());
//! ```

pub mod algorithm;
pub mod auth_result;
pub mod currency;
pub mod error;
pub mod types;

// Re-exports for convenience
pub use algorithm::*;
pub use auth_result::*;
pub use currency::*;
pub use error::*;
pub use types::*;
