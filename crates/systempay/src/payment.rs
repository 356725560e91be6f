//! Outbound payment builder
//!
//! `Payment` accumulates the parameters of a checkout, renders them as the
//! canonical `vads_*` field set, signs the set and emits the hidden-input
//! markup for the redirect form. Setters validate eagerly; an invalid value
//! never reaches the field set.

use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use rand::RngCore;
use rust_decimal::Decimal;

use systempay_canonical::{sign, FieldSet};
use systempay_core::{ContextMode, Currency, HashAlgorithm, PaymentConfiguration};

use crate::error::PaymentError;
use crate::html;
use crate::SIGNATURE_FIELD;

/// URL of the hosted payment page the form must POST to
pub const FORM_URL: &str = "https://paiement.systempay.fr/vads-payment/";

/// Maximum length of a site id, in bytes
pub const MAX_SITE_ID_LENGTH: usize = 8;

/// Exact length of a transaction id, in bytes
pub const TRANSACTION_ID_LENGTH: usize = 6;

const ACTION_MODE: &str = "INTERACTIVE";
const PAGE_ACTION: &str = "PAYMENT";
const PROTOCOL_VERSION: &str = "V2";
const TRANSACTION_DATE_FORMAT: &str = "%Y%m%d%H%M%S";

// Reserved trailing field carrying the secret into the signed set. The name
// sorts after every vads_* field and is never rendered.
const KEY_FIELD: &str = "z_key";

/// Builder for a signed checkout form
///
/// Defaults: sha256, amount 0, test mode, EUR, single payment, current
/// timestamp, random transaction id, empty key.
#[derive(Debug, Clone)]
pub struct Payment {
    hash_algorithm: HashAlgorithm,
    total_amount: Decimal,
    site_id: String,
    context_mode: ContextMode,
    currency: Currency,
    payment_configuration: PaymentConfiguration,
    transaction_date: DateTime<Utc>,
    transaction_id: String,
    key: String,
}

impl Payment {
    /// Create a builder with default values and a random transaction id
    ///
    /// # Errors
    ///
    /// Returns `PaymentError::Randomness` if the OS entropy source is
    /// unavailable.
    pub fn new() -> Result<Self, PaymentError> {
        let mut payment = Self {
            hash_algorithm: HashAlgorithm::default(),
            total_amount: Decimal::ZERO,
            site_id: String::new(),
            context_mode: ContextMode::default(),
            currency: Currency::default(),
            payment_configuration: PaymentConfiguration::default(),
            transaction_date: Utc::now(),
            transaction_id: String::new(),
            key: String::new(),
        };
        payment.set_random_transaction_id()?;
        Ok(payment)
    }

    pub fn set_hash_algorithm(&mut self, algorithm: HashAlgorithm) -> &mut Self {
        self.hash_algorithm = algorithm;
        self
    }

    /// Set the amount in the major unit of the currency
    ///
    /// The scale of the decimal is preserved and drives the minor-unit
    /// conversion at render time, see [`Payment::form_amount`].
    pub fn set_total_amount(&mut self, total_amount: Decimal) -> &mut Self {
        self.total_amount = total_amount;
        self
    }

    /// Set the shop identifier from the back office
    ///
    /// # Errors
    ///
    /// Returns `PaymentError::SiteIdTooLong` past 8 characters.
    pub fn set_site_id(&mut self, site_id: &str) -> Result<&mut Self, PaymentError> {
        if site_id.len() > MAX_SITE_ID_LENGTH {
            return Err(PaymentError::SiteIdTooLong {
                max: MAX_SITE_ID_LENGTH,
            });
        }

        self.site_id = site_id.to_string();

        Ok(self)
    }

    pub fn set_context_mode(&mut self, mode: ContextMode) -> &mut Self {
        self.context_mode = mode;
        self
    }

    /// Resolve and set the currency from its ISO alpha-3 code
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnknownCurrency` (wrapped) if the code is not in
    /// the lookup table.
    pub fn set_currency(&mut self, alpha3: &str) -> Result<&mut Self, PaymentError> {
        self.currency = alpha3.parse::<Currency>()?;

        Ok(self)
    }

    pub fn set_payment_configuration(&mut self, configuration: PaymentConfiguration) -> &mut Self {
        self.payment_configuration = configuration;
        self
    }

    pub fn set_transaction_date(&mut self, date: DateTime<Utc>) -> &mut Self {
        self.transaction_date = date;
        self
    }

    /// Replace the transaction id with 3 random bytes rendered as hex
    ///
    /// # Errors
    ///
    /// Returns `PaymentError::Randomness` if the OS entropy source is
    /// unavailable.
    pub fn set_random_transaction_id(&mut self) -> Result<&mut Self, PaymentError> {
        let mut bytes = [0u8; TRANSACTION_ID_LENGTH / 2];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|_| PaymentError::Randomness)?;

        self.transaction_id = hex::encode(bytes);

        Ok(self)
    }

    /// Set the transaction id, unique per site and per day
    ///
    /// # Errors
    ///
    /// Returns `PaymentError::BadTransactionIdLength` unless exactly 6
    /// characters long.
    pub fn set_transaction_id(&mut self, transaction_id: &str) -> Result<&mut Self, PaymentError> {
        if transaction_id.len() != TRANSACTION_ID_LENGTH {
            return Err(PaymentError::BadTransactionIdLength {
                expected: TRANSACTION_ID_LENGTH,
            });
        }

        self.transaction_id = transaction_id.to_string();

        Ok(self)
    }

    /// Set the test or production secret key
    pub fn set_key(&mut self, key: &str) -> &mut Self {
        self.key = key.to_string();
        self
    }

    pub fn hash_algorithm(&self) -> HashAlgorithm {
        self.hash_algorithm
    }

    pub fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    /// The amount converted to minor units for the `vads_amount` field
    ///
    /// The decimal is scaled by 10^(number of fractional digits of its
    /// textual representation): `199.99` becomes `19999`, while an integer
    /// amount like `199` passes through unchanged. Scaling by the actual
    /// precision instead of a fixed 100 avoids silent rounding for
    /// currencies without two-digit minor units.
    pub fn form_amount(&self) -> i128 {
        self.total_amount.mantissa()
    }

    pub fn site_id(&self) -> &str {
        &self.site_id
    }

    pub fn context_mode(&self) -> ContextMode {
        self.context_mode
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn currency_numeric_code(&self) -> u16 {
        self.currency.numeric()
    }

    pub fn payment_configuration(&self) -> PaymentConfiguration {
        self.payment_configuration
    }

    pub fn transaction_date(&self) -> DateTime<Utc> {
        self.transaction_date
    }

    /// The transaction date rendered for the `vads_trans_date` field
    /// (`YYYYMMDDhhmmss`, UTC)
    pub fn form_transaction_date(&self) -> String {
        self.transaction_date
            .format(TRANSACTION_DATE_FORMAT)
            .to_string()
    }

    pub fn transaction_id(&self) -> &str {
        &self.transaction_id
    }

    /// The form protocol version (`V2`)
    pub fn version(&self) -> &'static str {
        PROTOCOL_VERSION
    }

    pub fn action_mode(&self) -> &'static str {
        ACTION_MODE
    }

    pub fn page_action(&self) -> &'static str {
        PAGE_ACTION
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn form_url(&self) -> &'static str {
        FORM_URL
    }

    /// The canonical field set sent to the gateway
    pub fn form_fields(&self) -> FieldSet {
        FieldSet::from_pairs([
            ("vads_action_mode", ACTION_MODE.to_string()),
            ("vads_amount", self.form_amount().to_string()),
            ("vads_ctx_mode", self.context_mode.to_string()),
            ("vads_currency", self.currency.numeric_code()),
            ("vads_page_action", PAGE_ACTION.to_string()),
            ("vads_payment_config", self.payment_configuration.to_string()),
            ("vads_site_id", self.site_id.clone()),
            ("vads_trans_date", self.form_transaction_date()),
            ("vads_trans_id", self.transaction_id.clone()),
            ("vads_version", PROTOCOL_VERSION.to_string()),
        ])
        .expect("form field names are distinct")
    }

    /// Compute the signature over the form fields
    ///
    /// The secret is appended as a trailing `z_key` field before
    /// concatenation; for sha256 it also serves as the HMAC secret.
    ///
    /// # Errors
    ///
    /// Returns `PaymentError::MissingKey` if no key has been set.
    pub fn signature(&self) -> Result<String, PaymentError> {
        if self.key.is_empty() {
            return Err(PaymentError::MissingKey);
        }

        let mut fields = self.form_fields();
        fields
            .insert(KEY_FIELD, self.key.clone())
            .expect("the key field is not a form field name");

        Ok(sign(&fields, &self.key, self.hash_algorithm))
    }

    /// Render the hidden inputs for the redirect form, signature last
    ///
    /// # Errors
    ///
    /// Returns `PaymentError::MissingKey` if no key has been set.
    pub fn html_form_fields(&self) -> Result<String, PaymentError> {
        let signature = self.signature()?;

        let mut lines: Vec<String> = self
            .form_fields()
            .iter()
            .map(|(name, value)| html::hidden_input(name, value))
            .collect();
        lines.push(html::hidden_input(SIGNATURE_FIELD, &signature));

        Ok(lines.join("\n"))
    }
}
