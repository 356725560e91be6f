//! Error types for Systempay Core

use thiserror::Error;

/// Errors raised when raw gateway values fail to resolve to a known variant
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("hash algorithm {got} is not allowed (allowed: {allowed})")]
    UnsupportedAlgorithm { got: String, allowed: String },

    #[error("context mode {got} not allowed (allowed: {allowed})")]
    UnknownContextMode { got: String, allowed: String },

    #[error("payment configuration {got} not allowed (allowed: {allowed})")]
    UnknownPaymentConfiguration { got: String, allowed: String },

    #[error("unknown transaction status {got}")]
    UnknownTransactionStatus { got: String },

    #[error("unknown event source {got}")]
    UnknownEventSource { got: String },

    #[error("unknown currency {got}")]
    UnknownCurrency { got: String },
}
