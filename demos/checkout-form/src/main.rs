//! Prints a ready-to-serve checkout page for a 199.99 EUR test payment.
//!
//! Usage:
//!   cargo run --package checkout-form > checkout.html
//!
//! Replace the key and site id with the values from your back office
//! before pointing a real shopper at the page.

use anyhow::Result;
use rust_decimal::Decimal;

use systempay::Payment;
use systempay_core::{ContextMode, HashAlgorithm, PaymentConfiguration};

fn main() -> Result<()> {
    let mut payment = Payment::new()?;
    payment
        .set_key("foo")
        .set_site_id("12345678")?
        .set_total_amount(Decimal::new(19999, 2))
        .set_context_mode(ContextMode::Test)
        .set_currency("EUR")?
        .set_payment_configuration(PaymentConfiguration::Single)
        .set_hash_algorithm(HashAlgorithm::Sha256);

    let fields = payment.html_form_fields()?;
    let url = payment.form_url();

    println!(
        r#"<form method="POST" action="{url}">
{fields}
<button type="submit">Pay</button>
</form>"#
    );

    Ok(())
}
