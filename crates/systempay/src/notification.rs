//! Inbound notification verifier
//!
//! Wraps the POST body of an instant notification (IPN) sent by the
//! gateway once the shopper completed or abandoned the payment. The
//! payload is taken as-is at construction time; the signature check and
//! the typed accessors are explicit and lazy.
//!
//! The signed set is every `vads`-prefixed field, sorted by name. It is a
//! superset of the outbound fields: the gateway echoes the request fields
//! and adds its own result fields. Absent (`None`) values count as empty
//! strings, and the secret key is appended to the concatenation as a
//! literal `+key` suffix. With sha256 the key is therefore applied twice,
//! once as HMAC secret and once as suffix; both applications are required
//! to reproduce the gateway's signature.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;

use systempay_canonical::{encode, signatures_match, VALUE_SEPARATOR};
use systempay_core::{
    AuthorizationResult, ContextMode, EventSource, HashAlgorithm, PaymentConfiguration,
    TransactionStatus,
};

use crate::error::NotificationError;
use crate::SIGNATURE_FIELD;

/// Prefix of the gateway fields included in the signed set
pub const GATEWAY_FIELD_PREFIX: &str = "vads";

const TRANSACTION_DATE_FORMAT: &str = "%Y%m%d%H%M%S";

/// A received instant notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentNotification {
    data: BTreeMap<String, Option<String>>,
    key: String,
    hash_algorithm: HashAlgorithm,
}

impl PaymentNotification {
    /// Wrap a raw payload of nullable values
    pub fn new(data: impl IntoIterator<Item = (String, Option<String>)>) -> Self {
        Self {
            data: data.into_iter().collect(),
            key: String::new(),
            hash_algorithm: HashAlgorithm::default(),
        }
    }

    /// Wrap a form-encoded payload, where absent values arrive as empty
    /// strings rather than nulls
    pub fn from_form(data: impl IntoIterator<Item = (String, String)>) -> Self {
        Self::new(data.into_iter().map(|(name, value)| (name, Some(value))))
    }

    /// Set the test or production secret key
    pub fn set_key(&mut self, key: &str) -> &mut Self {
        self.key = key.to_string();
        self
    }

    pub fn set_hash_algorithm(&mut self, algorithm: HashAlgorithm) -> &mut Self {
        self.hash_algorithm = algorithm;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn hash_algorithm(&self) -> HashAlgorithm {
        self.hash_algorithm
    }

    /// The raw payload
    pub fn data(&self) -> &BTreeMap<String, Option<String>> {
        &self.data
    }

    /// A raw field value
    ///
    /// # Errors
    ///
    /// Returns `NotificationError::MissingField` if the field is absent or
    /// null.
    pub fn field(&self, name: &str) -> Result<&str, NotificationError> {
        self.data
            .get(name)
            .and_then(Option::as_deref)
            .ok_or_else(|| NotificationError::MissingField(name.to_string()))
    }

    /// Recompute the signature and compare it against the `signature` field
    ///
    /// A mismatch is an untrusted notification, not an error; only a
    /// missing key fails.
    ///
    /// # Errors
    ///
    /// Returns `NotificationError::MissingKey` if the key is empty or
    /// whitespace-only.
    pub fn has_valid_signature(&self) -> Result<bool, NotificationError> {
        let computed = encode(&self.signed_payload()?, &self.key, self.hash_algorithm);

        match self.data.get(SIGNATURE_FIELD) {
            Some(Some(received)) => Ok(signatures_match(&computed, received)),
            _ => Ok(false),
        }
    }

    /// What triggered the notification (`vads_url_check_src`)
    pub fn event_source(&self) -> Result<EventSource, NotificationError> {
        self.parsed_field("vads_url_check_src")
    }

    pub fn context_mode(&self) -> Result<ContextMode, NotificationError> {
        self.parsed_field("vads_ctx_mode")
    }

    pub fn transaction_status(&self) -> Result<TransactionStatus, NotificationError> {
        self.parsed_field("vads_trans_status")
    }

    pub fn transaction_id(&self) -> Result<&str, NotificationError> {
        self.field("vads_trans_id")
    }

    /// The transaction date, parsed from the gateway's `YYYYMMDDhhmmss`
    /// UTC encoding
    pub fn transaction_date(&self) -> Result<DateTime<Utc>, NotificationError> {
        let raw = self.field("vads_trans_date")?;

        NaiveDateTime::parse_from_str(raw, TRANSACTION_DATE_FORMAT)
            .map(|date| date.and_utc())
            .map_err(|err| NotificationError::InvalidField {
                field: "vads_trans_date".to_string(),
                reason: err.to_string(),
            })
    }

    pub fn payment_configuration(&self) -> Result<PaymentConfiguration, NotificationError> {
        self.parsed_field("vads_payment_config")
    }

    /// How many attempts the shopper needed (`vads_sequence_number`)
    pub fn payment_attempts(&self) -> Result<u32, NotificationError> {
        self.parsed_field("vads_sequence_number")
    }

    /// Days before the payment is deposited at the bank
    /// (`vads_capture_delay`)
    pub fn capture_delay_days(&self) -> Result<u32, NotificationError> {
        self.parsed_field("vads_capture_delay")
    }

    /// The paid amount in major units
    ///
    /// `vads_amount` carries minor units; the gateway settles two-decimal
    /// currencies over this channel, so the divisor is a fixed 100.
    pub fn amount(&self) -> Result<Decimal, NotificationError> {
        let minor_units: Decimal = self.parsed_field("vads_amount")?;

        Ok(minor_units / Decimal::ONE_HUNDRED)
    }

    pub fn authorization_result(&self) -> Result<AuthorizationResult, NotificationError> {
        Ok(AuthorizationResult::new(self.field("vads_auth_result")?))
    }

    /// The message the signature is computed over: every `vads` field's
    /// value in ascending name order, `+`-separated, with the key appended
    fn signed_payload(&self) -> Result<String, NotificationError> {
        if self.key.trim().is_empty() {
            return Err(NotificationError::MissingKey);
        }

        let values: Vec<&str> = self
            .data
            .iter()
            .filter(|(name, _)| name.starts_with(GATEWAY_FIELD_PREFIX))
            .map(|(_, value)| value.as_deref().unwrap_or(""))
            .collect();

        let separator = VALUE_SEPARATOR.to_string();
        Ok(format!(
            "{}{separator}{}",
            values.join(&separator),
            self.key
        ))
    }

    fn parsed_field<T>(&self, name: &str) -> Result<T, NotificationError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.field(name)?
            .parse()
            .map_err(|err: T::Err| NotificationError::InvalidField {
                field: name.to_string(),
                reason: err.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(pairs: &[(&str, &str)]) -> PaymentNotification {
        PaymentNotification::from_form(
            pairs
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string())),
        )
    }

    #[test]
    fn test_missing_key_is_an_error() {
        let result = notification(&[("vads_amount", "100")]).has_valid_signature();
        assert_eq!(result.unwrap_err(), NotificationError::MissingKey);
    }

    #[test]
    fn test_whitespace_key_is_an_error() {
        let mut payload = notification(&[("vads_amount", "100")]);
        payload.set_key("   ");

        assert_eq!(
            payload.has_valid_signature().unwrap_err(),
            NotificationError::MissingKey
        );
    }

    #[test]
    fn test_missing_signature_field_is_invalid_not_error() {
        let mut payload = notification(&[("vads_amount", "100")]);
        payload.set_key("secret");

        assert!(!payload.has_valid_signature().unwrap());
    }

    #[test]
    fn test_signature_roundtrip() {
        // vads_amount=100, vads_ctx_mode=TEST, sorted, plus "+secret"
        let expected = encode("100+TEST+secret", "secret", HashAlgorithm::Sha256);

        let mut payload = notification(&[
            ("vads_ctx_mode", "TEST"),
            ("vads_amount", "100"),
            ("signature", &expected),
        ]);
        payload.set_key("secret");

        assert!(payload.has_valid_signature().unwrap());
    }

    #[test]
    fn test_non_vads_fields_are_not_signed() {
        let expected = encode("100+secret", "secret", HashAlgorithm::Sha256);

        let mut payload = notification(&[
            ("vads_amount", "100"),
            ("order_id", "untrusted"),
            ("signature", &expected),
        ]);
        payload.set_key("secret");

        assert!(payload.has_valid_signature().unwrap());
    }

    #[test]
    fn test_null_values_sign_as_empty_strings() {
        let expected = encode("100++secret", "secret", HashAlgorithm::Sha256);

        let mut payload = PaymentNotification::new([
            ("vads_amount".to_string(), Some("100".to_string())),
            ("vads_threeds_cavv".to_string(), None),
            ("signature".to_string(), Some(expected)),
        ]);
        payload.set_key("secret");

        assert!(payload.has_valid_signature().unwrap());
    }

    #[test]
    fn test_tampered_amount_is_detected() {
        let expected = encode("100+secret", "secret", HashAlgorithm::Sha256);

        let mut payload = notification(&[("vads_amount", "999"), ("signature", &expected)]);
        payload.set_key("secret");

        assert!(!payload.has_valid_signature().unwrap());
    }

    #[test]
    fn test_sha1_signature() {
        let expected = encode("100+secret", "ignored", HashAlgorithm::Sha1);

        let mut payload = notification(&[("vads_amount", "100"), ("signature", &expected)]);
        payload.set_key("secret").set_hash_algorithm(HashAlgorithm::Sha1);

        assert!(payload.has_valid_signature().unwrap());
    }

    #[test]
    fn test_field_accessors() {
        let payload = notification(&[
            ("vads_trans_id", "9c20f0"),
            ("vads_trans_status", "AUTHORISED"),
            ("vads_ctx_mode", "TEST"),
            ("vads_url_check_src", "PAY"),
            ("vads_payment_config", "SINGLE"),
            ("vads_sequence_number", "1"),
            ("vads_capture_delay", "0"),
            ("vads_amount", "19999"),
            ("vads_auth_result", "00"),
            ("vads_trans_date", "20200801134711"),
        ]);

        assert_eq!(payload.transaction_id().unwrap(), "9c20f0");
        assert_eq!(
            payload.transaction_status().unwrap(),
            TransactionStatus::Authorised
        );
        assert_eq!(payload.context_mode().unwrap(), ContextMode::Test);
        assert_eq!(payload.event_source().unwrap(), EventSource::Payment);
        assert_eq!(
            payload.payment_configuration().unwrap(),
            PaymentConfiguration::Single
        );
        assert_eq!(payload.payment_attempts().unwrap(), 1);
        assert_eq!(payload.capture_delay_days().unwrap(), 0);
        assert_eq!(payload.amount().unwrap(), Decimal::new(19999, 2));
        assert!(payload.authorization_result().unwrap().is_success());
    }

    #[test]
    fn test_transaction_date_parsed_as_utc() {
        let payload = notification(&[("vads_trans_date", "20200801134711")]);
        let date = payload.transaction_date().unwrap();

        assert_eq!(date.to_rfc3339(), "2020-08-01T13:47:11+00:00");
    }

    #[test]
    fn test_missing_field() {
        let payload = notification(&[]);

        assert_eq!(
            payload.transaction_id().unwrap_err(),
            NotificationError::MissingField("vads_trans_id".to_string())
        );
    }

    #[test]
    fn test_invalid_field_reports_reason() {
        let payload = notification(&[("vads_sequence_number", "first")]);

        let err = payload.payment_attempts().unwrap_err();
        assert!(matches!(err, NotificationError::InvalidField { .. }));
        assert!(err.to_string().contains("vads_sequence_number"));
    }
}
