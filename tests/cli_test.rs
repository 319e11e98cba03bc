use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_pay_paypal() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("paypair"));
    cmd.args(["pay", "PayPal", "100.00"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Processing PayPal payment of 100.00",
        ));

    Ok(())
}

#[test]
fn test_cli_pay_each_builtin_method() {
    let cases = [
        ("CreditCard", "Processing credit card payment of 42.5"),
        ("Crypto", "Processing cryptocurrency payment of 42.5"),
    ];

    for (method, expected) in cases {
        let mut cmd = Command::new(cargo_bin!("paypair"));
        cmd.args(["pay", method, "42.5"]);
        cmd.assert()
            .success()
            .stdout(predicate::str::contains(expected));
    }
}

#[test]
fn test_cli_pay_unknown_method() {
    let mut cmd = Command::new(cargo_bin!("paypair"));
    cmd.args(["pay", "Cheque", "10"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid payment method type: Cheque"));
}

#[test]
fn test_cli_pay_rejects_non_positive_amount() {
    let mut cmd = Command::new(cargo_bin!("paypair"));
    cmd.args(["pay", "PayPal", "0"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Amount must be positive"));
}

#[test]
fn test_cli_pair_found() {
    let mut cmd = Command::new(cargo_bin!("paypair"));
    cmd.args(["pair", "--target", "9", "2", "7", "11", "15"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Numbers: 2 and 7"));
}

#[test]
fn test_cli_pair_not_found() {
    let mut cmd = Command::new(cargo_bin!("paypair"));
    cmd.args(["pair", "--target", "10", "2", "7", "11", "15"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No two numbers add up to 10."));
}

#[test]
fn test_cli_pair_negative_numbers() {
    let mut cmd = Command::new(cargo_bin!("paypair"));
    cmd.args(["pair", "--target", "-3", "4", "-1", "-2"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Numbers: -1 and -2"));
}

#[test]
fn test_cli_pair_without_numbers() {
    let mut cmd = Command::new(cargo_bin!("paypair"));
    cmd.args(["pair", "--target", "5"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No two numbers add up to 5."));
}
