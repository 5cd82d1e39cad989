//! End-to-end tests for the `housesplit` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn housesplit(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("housesplit").unwrap();
    cmd.env("HOUSESPLIT_DATA_DIR", data_dir.path())
        .env_remove("HOUSESPLIT_MEMBER")
        .env_remove("RUST_LOG");
    cmd
}

/// Alice creates "Flat", Bob and Carol join
fn flat_of_three() -> TempDir {
    let dir = TempDir::new().unwrap();
    housesplit(&dir).arg("init").assert().success();

    for (name, email) in [
        ("Alice", "alice@example.com"),
        ("Bob", "bob@example.com"),
        ("Carol", "carol@example.com"),
    ] {
        housesplit(&dir)
            .args(["member", "register", name, email])
            .assert()
            .success();
    }

    housesplit(&dir)
        .args(["--as", "alice@example.com", "household", "create", "Flat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created household: Flat"));

    for who in ["bob@example.com", "carol@example.com"] {
        housesplit(&dir)
            .args(["--as", who, "household", "join", "Flat"])
            .assert()
            .success();
    }

    dir
}

#[test]
fn init_creates_data_files() {
    let dir = TempDir::new().unwrap();
    housesplit(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").join("members.json").exists());
}

#[test]
fn first_registered_member_becomes_default() {
    let dir = TempDir::new().unwrap();
    housesplit(&dir)
        .args(["member", "register", "Alice", "alice@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Now acting as Alice by default."));

    // No --as needed now
    housesplit(&dir)
        .args(["household", "create", "Flat"])
        .assert()
        .success();
}

#[test]
fn duplicate_email_fails() {
    let dir = TempDir::new().unwrap();
    housesplit(&dir)
        .args(["member", "register", "Alice", "alice@example.com"])
        .assert()
        .success();

    housesplit(&dir)
        .args(["member", "register", "Alicia", "ALICE@example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn no_identity_is_reported() {
    let dir = TempDir::new().unwrap();
    housesplit(&dir)
        .args(["household", "create", "Flat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No acting member"));
}

#[test]
fn joining_twice_is_harmless() {
    let dir = flat_of_three();
    housesplit(&dir)
        .args(["--as", "bob@example.com", "household", "join", "Flat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already a member"));
}

#[test]
fn summary_settles_single_payer() {
    let dir = flat_of_three();
    housesplit(&dir)
        .args([
            "--as",
            "alice@example.com",
            "expense",
            "add",
            "Flat",
            "90.00",
            "-d",
            "Groceries",
            "--date",
            "2025-01-10",
        ])
        .assert()
        .success();

    let output = housesplit(&dir)
        .args(["--as", "bob@example.com", "summary", "Flat", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["members_count"], 3);
    assert_eq!(summary["expenses_count"], 1);
    assert_eq!(summary["balances"][0]["net"], 60.0);
    assert_eq!(summary["settlements"][0]["from"]["name"], "Bob");
    assert_eq!(summary["settlements"][0]["to"]["name"], "Alice");
    assert_eq!(summary["settlements"][0]["amount"], 30.0);
    assert_eq!(summary["settlements"][1]["from"]["name"], "Carol");
}

#[test]
fn summary_table_output() {
    let dir = flat_of_three();
    housesplit(&dir)
        .env("HOUSESPLIT_MEMBER", "alice@example.com")
        .args(["expense", "add", "Flat", "90", "--date", "2025-01-10"])
        .assert()
        .success();

    housesplit(&dir)
        .env("HOUSESPLIT_MEMBER", "carol@example.com")
        .args(["summary", "Flat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settle up:"))
        .stdout(predicate::str::contains("-$30.00"));
}

#[test]
fn month_filter_limits_expenses() {
    let dir = flat_of_three();
    for (amount, date) in [("30", "2025-01-10"), ("60", "2025-02-10")] {
        housesplit(&dir)
            .args([
                "--as", "alice@example.com", "expense", "add", "Flat", amount, "--date", date,
            ])
            .assert()
            .success();
    }

    let output = housesplit(&dir)
        .args([
            "--as", "alice@example.com", "summary", "Flat", "--month", "2", "--year", "2025",
            "--format", "json",
        ])
        .output()
        .unwrap();
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["expenses_count"], 1);
    assert_eq!(summary["total_spent"], 60.0);
}

#[test]
fn period_flag_limits_expenses() {
    let dir = flat_of_three();
    for (amount, date) in [("30", "2025-01-10"), ("60", "2025-02-10")] {
        housesplit(&dir)
            .args([
                "--as", "alice@example.com", "expense", "add", "Flat", amount, "--date", date,
            ])
            .assert()
            .success();
    }

    let output = housesplit(&dir)
        .args([
            "--as", "alice@example.com", "summary", "Flat", "--period", "2025-01", "--format",
            "json",
        ])
        .output()
        .unwrap();
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["expenses_count"], 1);
    assert_eq!(summary["total_spent"], 30.0);

    housesplit(&dir)
        .args([
            "--as", "alice@example.com", "summary", "Flat", "--period", "2025-01", "--month", "1",
            "--year", "2025",
        ])
        .assert()
        .failure();
}

#[test]
fn month_without_year_is_rejected() {
    let dir = flat_of_three();
    housesplit(&dir)
        .args(["--as", "alice@example.com", "summary", "Flat", "--month", "2"])
        .assert()
        .failure();
}

#[test]
fn non_positive_amount_rejected() {
    let dir = flat_of_three();
    for amount in ["0", "-5"] {
        housesplit(&dir)
            .args(["--as", "alice@example.com", "expense", "add", "Flat", amount])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Validation error"));
    }
}

#[test]
fn huge_amount_is_rejected_without_panic() {
    let dir = flat_of_three();
    housesplit(&dir)
        .args([
            "--as", "alice@example.com", "expense", "add", "Flat", "79228162514264337593543950335",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn outsider_cannot_record_expenses() {
    let dir = flat_of_three();
    housesplit(&dir)
        .args(["member", "register", "Dave", "dave@example.com"])
        .assert()
        .success();

    housesplit(&dir)
        .args(["--as", "dave@example.com", "expense", "add", "Flat", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a member"));

    housesplit(&dir)
        .args([
            "--as", "alice@example.com", "expense", "add", "Flat", "10", "--payer", "Dave",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a member"));
}

#[test]
fn export_summary_csv() {
    let dir = flat_of_three();
    housesplit(&dir)
        .args(["--as", "alice@example.com", "expense", "add", "Flat", "90"])
        .assert()
        .success();

    let out = dir.path().join("summary.csv");
    housesplit(&dir)
        .args(["--as", "alice@example.com", "export", "summary", "Flat"])
        .arg(&out)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&out).unwrap();
    assert!(contents.starts_with("record,member,counterparty,paid,owed,net,amount"));
    assert!(contents.contains("transfer,Bob,Alice,,,,30.00"));
}

#[test]
fn mutations_are_audited() {
    let dir = flat_of_three();
    let log = std::fs::read_to_string(dir.path().join("audit.log")).unwrap();
    // 3 members, 1 household, 2 joins
    assert_eq!(log.lines().count(), 6);
}
