//! # Systempay
//!
//! Client library for the Systempay hosted payment page (form API V2).
//!
//! This crate provides:
//! - [`Payment`]: builds the signed hidden-input fields that redirect a
//!   shopper to the hosted payment page
//! - [`PaymentNotification`]: wraps the instant notification POST sent by
//!   the gateway and verifies its signature
//!
//! Both sides share the canonicalization and signature engine from
//! `systempay-canonical`.
//!
//! ## Example
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use systempay::Payment;
//! use systempay_core::{ContextMode, HashAlgorithm, PaymentConfiguration};
//!
//! # fn main() -> Result<(), systempay::PaymentError> {
//! let mut payment = Payment::new()?;
//! payment
//!     .set_key("foo")
//!     .set_site_id("12345678")?
//!     .set_total_amount(Decimal::new(19999, 2))
//!     .set_context_mode(ContextMode::Test)
//!     .set_currency("EUR")?
//!     .set_payment_configuration(PaymentConfiguration::Single)
//!     .set_transaction_id("xrT15p")?
//!     .set_hash_algorithm(HashAlgorithm::Sha256);
//!
//! let form_fields = payment.html_form_fields()?;
//! assert!(form_fields.contains("vads_amount"));
//! # Ok(())
//! # }
//! ```

pub mod error;
mod html;
pub mod notification;
pub mod payment;

pub use error::*;
pub use notification::*;
pub use payment::*;

/// Name of the non-prefixed field carrying the signature itself. It is
/// compared against the recomputed value but never part of the signed set.
pub const SIGNATURE_FIELD: &str = "signature";
