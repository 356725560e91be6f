//! Authorization result classification
//!
//! `vads_auth_result` carries the raw return code of the acquirer network.
//! Different networks use different codes for the same outcome, so callers
//! should branch on the predicates below rather than on raw codes. The
//! tables cover the CB network; Elavon Europe, Amex Global and GICC codes
//! are reported verbatim by `code()` but classify as unknown.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// CB network return codes
pub mod cb {
    pub const SUCCESS: &str = "00";
    pub const CONTACT_CARD_ISSUER: &str = "02";
    pub const INVALID_ACCEPTOR: &str = "03";
    pub const KEEP_CARD: &str = "04";
    pub const DO_NOT_HONOR: &str = "05";
    pub const KEEP_CARD_SPECIAL_CONDITIONS: &str = "07";
    pub const APPROVE_AFTER_IDENTIFICATION: &str = "08";
    pub const INVALID_TRANSACTION: &str = "12";
    pub const INVALID_AMOUNT: &str = "13";
    pub const INVALID_CARD_HOLDER_NUMBER: &str = "14";
    pub const UNKNOWN_CARD_ISSUER: &str = "15";
    pub const SHOPPER_CANCELLED: &str = "17";
    pub const RETRY_LATER: &str = "19";
    pub const RESPONSE_ERROR: &str = "20";
    pub const UNSUPPORTED_FILE_UPDATE: &str = "24";
    pub const RECORD_NOT_FOUND: &str = "25";
    pub const DUPLICATE_RECORD: &str = "26";
    pub const EDIT_LIST_FILE_ERROR: &str = "27";
    pub const FORBIDDEN_FILE_ACCESS: &str = "28";
    pub const UPDATE_NOT_POSSIBLE: &str = "29";
    pub const FORMAT_ERROR: &str = "30";
    pub const UNKNOWN_ACQUIRER: &str = "31";
    pub const FRAUD_EXPIRED_CARD: &str = "33";
    pub const SUSPECTED_FRAUD: &str = "34";
    pub const EXPIRED_CARD: &str = "38";
    pub const CARD_LOST: &str = "41";
    pub const CARD_STOLEN: &str = "43";
    pub const INSUFFICIENT_FUNDS: &str = "51";
    pub const FRAUD_EXPIRED_CARD_2: &str = "54";
    pub const WRONG_PIN: &str = "55";
    pub const CARD_UNKNOWN: &str = "56";
    pub const FRAUD_NOT_PERMITTED: &str = "57";
    pub const NOT_PERMITTED: &str = "58";
    pub const SUSPECTED_FRAUD_2: &str = "59";
    pub const CONTACT_ACQUIRER: &str = "60";
    pub const WITHDRAWAL_LIMIT_EXCEEDED: &str = "61";
    pub const SECURITY_RULES_VIOLATED: &str = "63";
    pub const NO_RESPONSE: &str = "68";
    pub const PIN_ATTEMPTS_EXCEEDED: &str = "75";
    pub const HOLDER_IN_OPPOSITION: &str = "76";
    pub const SYSTEM_SHUTDOWN: &str = "90";
    pub const CARD_ISSUER_UNREACHABLE: &str = "91";
    pub const DUPLICATE_TRANSACTION: &str = "94";
    pub const SYSTEM_MALFUNCTION: &str = "96";
    pub const MONITORING_TIMEOUT: &str = "97";
    pub const SERVER_UNREACHABLE: &str = "98";
    pub const DOMAIN_INCIDENT: &str = "99";
}

/// A raw authorization return code with outcome classification
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorizationResult(String);

impl AuthorizationResult {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The raw return code as sent by the gateway
    pub fn code(&self) -> &str {
        &self.0
    }

    fn is_one_of(&self, codes: &[&str]) -> bool {
        codes.contains(&self.0.as_str())
    }

    /// The payment was approved
    pub fn is_success(&self) -> bool {
        self.is_one_of(&[cb::SUCCESS])
    }

    /// The shopper must contact their card issuer
    pub fn requires_contacting_card_issuer(&self) -> bool {
        self.is_one_of(&[cb::CONTACT_CARD_ISSUER])
    }

    /// The merchant must contact the acquirer
    pub fn requires_contacting_acquirer(&self) -> bool {
        self.is_one_of(&[cb::CONTACT_ACQUIRER])
    }

    pub fn is_invalid_acceptor(&self) -> bool {
        self.is_one_of(&[cb::INVALID_ACCEPTOR])
    }

    pub fn is_invalid_transaction(&self) -> bool {
        self.is_one_of(&[cb::INVALID_TRANSACTION])
    }

    pub fn is_invalid_amount(&self) -> bool {
        self.is_one_of(&[cb::INVALID_AMOUNT])
    }

    pub fn is_invalid_card_holder_number(&self) -> bool {
        self.is_one_of(&[cb::INVALID_CARD_HOLDER_NUMBER])
    }

    /// The shopper abandoned the payment
    pub fn is_shopper_cancelled(&self) -> bool {
        self.is_one_of(&[cb::SHOPPER_CANCELLED])
    }

    /// A technical failure somewhere between the gateway and the issuer
    pub fn is_response_error(&self) -> bool {
        self.is_one_of(&[
            cb::RESPONSE_ERROR,
            cb::UNSUPPORTED_FILE_UPDATE,
            cb::EDIT_LIST_FILE_ERROR,
            cb::FORBIDDEN_FILE_ACCESS,
            cb::RECORD_NOT_FOUND,
            cb::UPDATE_NOT_POSSIBLE,
            cb::FORMAT_ERROR,
            cb::DUPLICATE_RECORD,
            cb::NO_RESPONSE,
            cb::SYSTEM_SHUTDOWN,
            cb::CARD_ISSUER_UNREACHABLE,
            cb::SYSTEM_MALFUNCTION,
            cb::MONITORING_TIMEOUT,
            cb::SERVER_UNREACHABLE,
            cb::DOMAIN_INCIDENT,
        ])
    }

    pub fn is_expired_card(&self) -> bool {
        self.is_one_of(&[cb::FRAUD_EXPIRED_CARD, cb::EXPIRED_CARD])
    }

    pub fn is_insufficient_funds(&self) -> bool {
        self.is_one_of(&[cb::INSUFFICIENT_FUNDS, cb::WITHDRAWAL_LIMIT_EXCEEDED])
    }

    pub fn is_wrong_pin(&self) -> bool {
        self.is_one_of(&[cb::WRONG_PIN])
    }

    pub fn is_pin_attempts_exceeded(&self) -> bool {
        self.is_one_of(&[cb::PIN_ATTEMPTS_EXCEEDED])
    }

    pub fn is_transaction_not_permitted(&self) -> bool {
        self.is_one_of(&[cb::NOT_PERMITTED])
    }

    /// The card must be retained by the terminal
    pub fn requires_keeping_card(&self) -> bool {
        self.is_one_of(&[cb::KEEP_CARD, cb::KEEP_CARD_SPECIAL_CONDITIONS])
    }

    pub fn is_do_not_honor(&self) -> bool {
        self.is_one_of(&[cb::DO_NOT_HONOR])
    }

    pub fn requires_identification(&self) -> bool {
        self.is_one_of(&[cb::KEEP_CARD_SPECIAL_CONDITIONS])
    }

    /// The transaction should be retried later
    pub fn requires_retrying_later(&self) -> bool {
        self.is_one_of(&[cb::RETRY_LATER])
    }

    /// The code belongs to the fraud family. A declined payment outside
    /// this family is an ordinary refusal.
    pub fn is_fraud_suspected(&self) -> bool {
        self.is_one_of(&[
            cb::INVALID_ACCEPTOR,
            cb::KEEP_CARD,
            cb::KEEP_CARD_SPECIAL_CONDITIONS,
            cb::DO_NOT_HONOR,
            cb::INVALID_TRANSACTION,
            cb::INVALID_AMOUNT,
            cb::INVALID_CARD_HOLDER_NUMBER,
            cb::UNKNOWN_CARD_ISSUER,
            cb::UNKNOWN_ACQUIRER,
            cb::FRAUD_EXPIRED_CARD,
            cb::SUSPECTED_FRAUD,
            cb::SUSPECTED_FRAUD_2,
            cb::CARD_LOST,
            cb::CARD_STOLEN,
            cb::FRAUD_EXPIRED_CARD_2,
            cb::CARD_UNKNOWN,
            cb::FRAUD_NOT_PERMITTED,
            cb::SECURITY_RULES_VIOLATED,
            cb::HOLDER_IN_OPPOSITION,
        ])
    }
}

impl Display for AuthorizationResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AuthorizationResult {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success() {
        let result = AuthorizationResult::new("00");
        assert!(result.is_success());
        assert!(!result.is_fraud_suspected());
    }

    #[test]
    fn test_code_is_reported_verbatim() {
        assert_eq!(AuthorizationResult::new("51").code(), "51");
        assert_eq!(AuthorizationResult::new("51").to_string(), "51");
    }

    #[test]
    fn test_keep_card_is_also_fraud() {
        let keep = AuthorizationResult::new(cb::KEEP_CARD);
        assert!(keep.requires_keeping_card());
        assert!(keep.is_fraud_suspected());
        assert!(!keep.is_success());
    }

    #[test]
    fn test_special_conditions_requires_identification() {
        let result = AuthorizationResult::new(cb::KEEP_CARD_SPECIAL_CONDITIONS);
        assert!(result.requires_keeping_card());
        assert!(result.requires_identification());
    }

    #[test]
    fn test_insufficient_funds() {
        assert!(AuthorizationResult::new("51").is_insufficient_funds());
        assert!(AuthorizationResult::new("61").is_insufficient_funds());
        assert!(!AuthorizationResult::new("00").is_insufficient_funds());
    }

    #[test]
    fn test_expired_card() {
        assert!(AuthorizationResult::new("33").is_expired_card());
        assert!(AuthorizationResult::new("38").is_expired_card());
        // "33" is also fraudulent, "38" is not
        assert!(AuthorizationResult::new("33").is_fraud_suspected());
        assert!(!AuthorizationResult::new("38").is_fraud_suspected());
    }

    #[test]
    fn test_response_errors() {
        for code in ["20", "68", "90", "91", "96", "97", "98", "99"] {
            assert!(
                AuthorizationResult::new(code).is_response_error(),
                "code {code} should classify as response error"
            );
        }
    }

    #[test]
    fn test_unknown_code_classifies_as_nothing() {
        let result = AuthorizationResult::new("ZZ");
        assert!(!result.is_success());
        assert!(!result.is_fraud_suspected());
        assert!(!result.is_response_error());
        assert_eq!(result.code(), "ZZ");
    }

    #[test]
    fn test_stolen_card_is_fraud() {
        assert!(AuthorizationResult::new("43").is_fraud_suspected());
        assert!(AuthorizationResult::new("41").is_fraud_suspected());
    }
}
