//! Error types for the Systempay client

use thiserror::Error;

use systempay_core::CoreError;

/// Errors raised while building an outbound payment
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaymentError {
    #[error("the site id should not exceed {max} characters")]
    SiteIdTooLong { max: usize },

    #[error("transaction id must be {expected} characters long")]
    BadTransactionIdLength { expected: usize },

    #[error("key must be set to compute the signature (use Payment::set_key())")]
    MissingKey,

    #[error("failed to generate a random transaction id")]
    Randomness,

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Errors raised while reading an inbound notification
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotificationError {
    #[error("the key is required to check the signature")]
    MissingKey,

    #[error("missing field {0}")]
    MissingField(String),

    #[error("invalid value for {field}: {reason}")]
    InvalidField { field: String, reason: String },
}
