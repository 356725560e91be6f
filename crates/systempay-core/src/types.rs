//! Enumerated form-field values
//!
//! Each enum mirrors one of the gateway's closed value sets. The allowed
//! list shown in parse errors is derived from the enum variants.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Execution context for a payment (`vads_ctx_mode`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContextMode {
    #[default]
    Test,
    Production,
}

impl ContextMode {
    pub const ALL: [ContextMode; 2] = [ContextMode::Test, ContextMode::Production];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContextMode::Test => "TEST",
            ContextMode::Production => "PRODUCTION",
        }
    }

    /// Comma-separated list of allowed values, for error messages
    pub fn allowed() -> String {
        Self::ALL
            .iter()
            .map(|mode| mode.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Display for ContextMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContextMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TEST" => Ok(ContextMode::Test),
            "PRODUCTION" => Ok(ContextMode::Production),
            _ => Err(CoreError::UnknownContextMode {
                got: s.to_string(),
                allowed: Self::allowed(),
            }),
        }
    }
}

/// Single or installment payment (`vads_payment_config`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentConfiguration {
    #[default]
    Single,
    Multi,
}

impl PaymentConfiguration {
    pub const ALL: [PaymentConfiguration; 2] =
        [PaymentConfiguration::Single, PaymentConfiguration::Multi];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentConfiguration::Single => "SINGLE",
            PaymentConfiguration::Multi => "MULTI",
        }
    }

    /// Comma-separated list of allowed values, for error messages
    pub fn allowed() -> String {
        Self::ALL
            .iter()
            .map(|configuration| configuration.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Display for PaymentConfiguration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentConfiguration {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SINGLE" => Ok(PaymentConfiguration::Single),
            "MULTI" => Ok(PaymentConfiguration::Multi),
            _ => Err(CoreError::UnknownPaymentConfiguration {
                got: s.to_string(),
                allowed: Self::allowed(),
            }),
        }
    }
}

/// Lifecycle state reported in `vads_trans_status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Abandoned,
    Authorised,
    AuthorisedToValidate,
    Cancelled,
    Captured,
    CaptureFailed,
    Expired,
    Initial,
    NotCreated,
    Refused,
    SuspendedAuthorised,
    UnderVerification,
    WaitingAuthorisation,
    WaitingAuthorisationToValidate,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Abandoned => "ABANDONED",
            TransactionStatus::Authorised => "AUTHORISED",
            TransactionStatus::AuthorisedToValidate => "AUTHORISED_TO_VALIDATE",
            TransactionStatus::Cancelled => "CANCELLED",
            TransactionStatus::Captured => "CAPTURED",
            TransactionStatus::CaptureFailed => "CAPTURE_FAILED",
            TransactionStatus::Expired => "EXPIRED",
            TransactionStatus::Initial => "INITIAL",
            TransactionStatus::NotCreated => "NOT_CREATED",
            TransactionStatus::Refused => "REFUSED",
            TransactionStatus::SuspendedAuthorised => "SUSPENDED_AUTHORISED",
            TransactionStatus::UnderVerification => "UNDER_VERIFICATION",
            TransactionStatus::WaitingAuthorisation => "WAITING_AUTHORISATION",
            TransactionStatus::WaitingAuthorisationToValidate => {
                "WAITING_AUTHORISATION_TO_VALIDATE"
            }
        }
    }

    /// Whether the payment will eventually reach the merchant account
    /// without further action from the merchant.
    pub fn is_accepted(&self) -> bool {
        matches!(
            self,
            TransactionStatus::Authorised
                | TransactionStatus::Captured
                | TransactionStatus::WaitingAuthorisation
        )
    }
}

impl Display for TransactionStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ABANDONED" => Ok(TransactionStatus::Abandoned),
            "AUTHORISED" => Ok(TransactionStatus::Authorised),
            "AUTHORISED_TO_VALIDATE" => Ok(TransactionStatus::AuthorisedToValidate),
            "CANCELLED" => Ok(TransactionStatus::Cancelled),
            "CAPTURED" => Ok(TransactionStatus::Captured),
            "CAPTURE_FAILED" => Ok(TransactionStatus::CaptureFailed),
            "EXPIRED" => Ok(TransactionStatus::Expired),
            "INITIAL" => Ok(TransactionStatus::Initial),
            "NOT_CREATED" => Ok(TransactionStatus::NotCreated),
            "REFUSED" => Ok(TransactionStatus::Refused),
            "SUSPENDED_AUTHORISED" => Ok(TransactionStatus::SuspendedAuthorised),
            "UNDER_VERIFICATION" => Ok(TransactionStatus::UnderVerification),
            "WAITING_AUTHORISATION" => Ok(TransactionStatus::WaitingAuthorisation),
            "WAITING_AUTHORISATION_TO_VALIDATE" => {
                Ok(TransactionStatus::WaitingAuthorisationToValidate)
            }
            _ => Err(CoreError::UnknownTransactionStatus { got: s.to_string() }),
        }
    }
}

/// Origin of a notification (`vads_url_check_src`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventSource {
    /// End of a payment, immediate or deferred
    #[serde(rename = "PAY")]
    Payment,
    /// Payment created from the back office
    #[serde(rename = "BO")]
    BackOffice,
    /// Status change picked up by the batch job
    #[serde(rename = "BATCH")]
    Batch,
    /// Automatic batch processing of a deferred payment
    #[serde(rename = "BATCH_AUTO")]
    BatchAuto,
    /// Installment of a recurring payment
    #[serde(rename = "REC")]
    Recurring,
    /// Operation made by the merchant from the back office
    #[serde(rename = "MERCH_BO")]
    MerchantBackOffice,
    /// Automatic retry of a notification
    #[serde(rename = "RETRY")]
    AutoRetry,
}

impl EventSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventSource::Payment => "PAY",
            EventSource::BackOffice => "BO",
            EventSource::Batch => "BATCH",
            EventSource::BatchAuto => "BATCH_AUTO",
            EventSource::Recurring => "REC",
            EventSource::MerchantBackOffice => "MERCH_BO",
            EventSource::AutoRetry => "RETRY",
        }
    }
}

impl Display for EventSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventSource {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PAY" => Ok(EventSource::Payment),
            "BO" => Ok(EventSource::BackOffice),
            "BATCH" => Ok(EventSource::Batch),
            "BATCH_AUTO" => Ok(EventSource::BatchAuto),
            "REC" => Ok(EventSource::Recurring),
            "MERCH_BO" => Ok(EventSource::MerchantBackOffice),
            "RETRY" => Ok(EventSource::AutoRetry),
            _ => Err(CoreError::UnknownEventSource { got: s.to_string() }),
        }
    }
}
