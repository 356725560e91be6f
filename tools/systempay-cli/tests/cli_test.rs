//! CLI integration tests using assert_cmd

use assert_cmd::Command;
use predicates::prelude::*;

fn systempay_cmd() -> Command {
    Command::cargo_bin("systempay").unwrap()
}

mod sign {
    use super::*;

    #[test]
    fn test_sign_checkout_fixture() {
        systempay_cmd()
            .arg("sign")
            .arg("../../fixtures/payments/checkout.json")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "j87zVO4hq/vU97yH5NoybcH+KyYFg3LVYWxldsFvPPQ=",
            ));
    }

    #[test]
    fn test_sign_without_key_fails() {
        systempay_cmd()
            .arg("sign")
            .arg("../../fixtures/payments/missing_key.json")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to compute the signature"));
    }

    #[test]
    fn test_sign_nonexistent_file() {
        systempay_cmd()
            .arg("sign")
            .arg("nonexistent.json")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to read file"));
    }
}

mod render {
    use super::*;

    #[test]
    fn test_render_checkout_fixture() {
        systempay_cmd()
            .arg("render")
            .arg("../../fixtures/payments/checkout.json")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                r#"<input type="hidden" name="vads_amount" value="19999" />"#,
            ))
            .stdout(predicate::str::contains(r#"name="signature""#));
    }

    #[test]
    fn test_render_does_not_leak_the_key() {
        systempay_cmd()
            .arg("render")
            .arg("../../fixtures/payments/checkout.json")
            .assert()
            .success()
            .stdout(predicate::str::contains("z_key").not());
    }
}

mod verify {
    use super::*;

    #[test]
    fn test_verify_authorised_fixture() {
        systempay_cmd()
            .arg("verify")
            .arg("../../fixtures/notifications/authorised.json")
            .arg("--key")
            .arg("PLtsY7IpnYMBadb5")
            .assert()
            .success()
            .stdout(predicate::str::contains("signature valid"));
    }

    #[test]
    fn test_verify_wrong_key_fails() {
        systempay_cmd()
            .arg("verify")
            .arg("../../fixtures/notifications/authorised.json")
            .arg("--key")
            .arg("not-the-right-key")
            .assert()
            .failure()
            .stderr(predicate::str::contains("signature mismatch"));
    }

    #[test]
    fn test_verify_rejects_unknown_algorithm() {
        systempay_cmd()
            .arg("verify")
            .arg("../../fixtures/notifications/authorised.json")
            .arg("--key")
            .arg("PLtsY7IpnYMBadb5")
            .arg("--algorithm")
            .arg("sha512")
            .assert()
            .failure()
            .stderr(predicate::str::contains("allowed: sha1, sha256"));
    }
}
