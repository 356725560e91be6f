//! Error types for Systempay Canonical

use thiserror::Error;

/// Errors that can occur while building a canonical field set
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("duplicate field {0} in canonical field set")]
    DuplicateField(String),
}
