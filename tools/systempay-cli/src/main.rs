//! Systempay command line tool
//!
//! Provides commands for working with checkout forms and notifications:
//! - render: print the signed hidden-input fields for a checkout
//! - sign: print the checkout signature alone
//! - verify: recompute and check the signature of a notification payload

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use serde::Deserialize;

use systempay::{Payment, PaymentNotification};
use systempay_core::{ContextMode, HashAlgorithm, PaymentConfiguration};

#[derive(Parser)]
#[command(name = "systempay")]
#[command(version)]
#[command(about = "Systempay form API tool - render, sign and verify payment payloads")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the hidden-input fields of a checkout form
    #[command(about = "Render the signed hidden-input fields for a checkout JSON file")]
    Render {
        /// Path to the checkout JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Compute the signature of a checkout
    #[command(about = "Print the signature for a checkout JSON file")]
    Sign {
        /// Path to the checkout JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Verify a notification payload
    #[command(about = "Check the signature of a notification payload JSON file")]
    Verify {
        /// Path to the notification payload JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// The test or production secret key
        #[arg(long, short)]
        key: String,

        /// Signature scheme the shop is configured for
        #[arg(long, default_value = "sha256")]
        algorithm: String,
    },
}

/// Checkout parameters as read from a JSON file
///
/// Amounts and dates are strings so their textual precision reaches the
/// builder untouched.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CheckoutSpec {
    key: String,
    site_id: String,
    amount: String,

    #[serde(default)]
    currency: Option<String>,

    #[serde(default)]
    context_mode: Option<String>,

    #[serde(default)]
    payment_config: Option<String>,

    #[serde(default)]
    transaction_id: Option<String>,

    #[serde(default)]
    transaction_date: Option<String>,

    #[serde(default)]
    hash_algorithm: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render { file } => handle_render(&file),
        Commands::Sign { file } => handle_sign(&file),
        Commands::Verify {
            file,
            key,
            algorithm,
        } => handle_verify(&file, &key, &algorithm),
    }
}

fn handle_render(file: &PathBuf) -> Result<()> {
    let payment = read_checkout(file)?;

    let form_fields = payment
        .html_form_fields()
        .with_context(|| "Failed to render form fields")?;
    println!("{form_fields}");

    Ok(())
}

fn handle_sign(file: &PathBuf) -> Result<()> {
    let payment = read_checkout(file)?;

    let signature = payment
        .signature()
        .with_context(|| "Failed to compute the signature")?;
    println!("{signature}");

    Ok(())
}

fn handle_verify(file: &PathBuf, key: &str, algorithm: &str) -> Result<()> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read file: {}", file.display()))?;

    let payload: BTreeMap<String, Option<String>> = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse {} as a notification payload", file.display()))?;

    let algorithm = HashAlgorithm::from_str(algorithm)?;

    let mut notification = PaymentNotification::new(payload);
    notification.set_key(key).set_hash_algorithm(algorithm);

    if notification
        .has_valid_signature()
        .with_context(|| "Failed to check the signature")?
    {
        println!("signature valid");
        Ok(())
    } else {
        bail!("signature mismatch");
    }
}

fn read_checkout(file: &PathBuf) -> Result<Payment> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read file: {}", file.display()))?;

    let spec: CheckoutSpec = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse {} as a checkout", file.display()))?;

    build_payment(&spec)
}

fn build_payment(spec: &CheckoutSpec) -> Result<Payment> {
    let mut payment = Payment::new()?;

    payment.set_key(&spec.key);
    payment.set_site_id(&spec.site_id)?;

    let amount = Decimal::from_str(&spec.amount)
        .with_context(|| format!("Invalid amount: {}", spec.amount))?;
    payment.set_total_amount(amount);

    if let Some(currency) = &spec.currency {
        payment.set_currency(currency)?;
    }

    if let Some(mode) = &spec.context_mode {
        payment.set_context_mode(ContextMode::from_str(mode)?);
    }

    if let Some(configuration) = &spec.payment_config {
        payment.set_payment_configuration(PaymentConfiguration::from_str(configuration)?);
    }

    if let Some(transaction_id) = &spec.transaction_id {
        payment.set_transaction_id(transaction_id)?;
    }

    if let Some(date) = &spec.transaction_date {
        let parsed = NaiveDateTime::parse_from_str(date, "%Y%m%d%H%M%S")
            .with_context(|| format!("Invalid transaction date: {date}"))?;
        payment.set_transaction_date(parsed.and_utc());
    }

    if let Some(algorithm) = &spec.hash_algorithm {
        payment.set_hash_algorithm(HashAlgorithm::from_str(algorithm)?);
    }

    Ok(payment)
}
