use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ledger(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ledger").unwrap();
    cmd.env("LEDGER_CLI_DATA_DIR", data_dir.path())
        .env_remove("LEDGER_CLI_FILE");
    cmd
}

fn add(data_dir: &TempDir, amount: &str, category: &str, date: &str, description: &str) {
    ledger(data_dir)
        .args(["add", amount, category, "--date", date, "-m", description])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry added successfully!"));
}

#[test]
fn test_init_creates_header_only_ledger() {
    let data_dir = TempDir::new().unwrap();

    ledger(&data_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ledger initialized at"));

    let content = fs::read_to_string(data_dir.path().join("finance_data.csv")).unwrap();
    assert_eq!(
        content.lines().collect::<Vec<_>>(),
        vec!["date,amount,category,description"]
    );
    assert!(data_dir.path().join("config.json").exists());

    // Second init leaves the file alone
    ledger(&data_dir).arg("init").assert().success();
    assert_eq!(
        fs::read_to_string(data_dir.path().join("finance_data.csv")).unwrap(),
        content
    );
}

#[test]
fn test_add_then_view_summary() {
    let data_dir = TempDir::new().unwrap();

    add(&data_dir, "100", "I", "01/01/2025", "Salary");
    add(&data_dir, "40", "e", "02/01/2025", "Food");
    add(&data_dir, "10", "Expense", "02/01/2025", "Bus");

    ledger(&data_dir)
        .args(["view", "--start", "01/01/2025", "--end", "02/01/2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"))
        .stdout(predicate::str::contains("Total Income:  $100.00"))
        .stdout(predicate::str::contains("Total Expense: $50.00"))
        .stdout(predicate::str::contains("Net Savings:   $50.00"));

    let content = fs::read_to_string(data_dir.path().join("finance_data.csv")).unwrap();
    assert_eq!(content.lines().count(), 4);
    assert!(content.contains("02/01/2025,10.00,Expense,Bus"));
}

#[test]
fn test_view_empty_range() {
    let data_dir = TempDir::new().unwrap();
    add(&data_dir, "5", "I", "01/01/2025", "Gift");

    ledger(&data_dir)
        .args(["view", "-s", "01/06/2025", "-e", "30/06/2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No transactions found in the given date range.",
        ));
}

#[test]
fn test_add_rejects_invalid_amount() {
    let data_dir = TempDir::new().unwrap();

    ledger(&data_dir)
        .args(["add", "0", "I", "--date", "01/01/2025"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    assert!(!data_dir.path().join("finance_data.csv").exists());
}

#[test]
fn test_add_rejects_sub_cent_amount() {
    let data_dir = TempDir::new().unwrap();

    ledger(&data_dir)
        .args(["add", "1.999", "I", "--date", "01/01/2025"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("more than two decimal places"));

    assert!(!data_dir.path().join("finance_data.csv").exists());
}

#[test]
fn test_view_rejects_corrupt_ledger() {
    let data_dir = TempDir::new().unwrap();
    fs::write(
        data_dir.path().join("finance_data.csv"),
        "date,amount,category,description\n2025-01-01,5,Income,iso date\n",
    )
    .unwrap();

    ledger(&data_dir)
        .args(["view", "-s", "01/01/2025", "-e", "31/12/2025"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Parse error on line 2"));
}

#[test]
fn test_file_flag_overrides_location() {
    let data_dir = TempDir::new().unwrap();
    let other = data_dir.path().join("elsewhere.csv");

    ledger(&data_dir)
        .args(["--file", other.to_str().unwrap(), "add", "3", "E", "-d", "05/05/2025"])
        .assert()
        .success();

    assert!(other.exists());
    assert!(!data_dir.path().join("finance_data.csv").exists());
}

#[test]
fn test_shell_add_and_exit() {
    let data_dir = TempDir::new().unwrap();

    ledger(&data_dir)
        .arg("shell")
        .write_stdin("7\n1\n13/03/2025\n9.60\nE\nFood\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice. Enter 1, 2 or 3."))
        .stdout(predicate::str::contains("Entry added successfully!"))
        .stdout(predicate::str::contains("Exiting..."));

    let content = fs::read_to_string(data_dir.path().join("finance_data.csv")).unwrap();
    assert!(content.contains("13/03/2025,9.60,Expense,Food"));
}

#[test]
fn test_config_lists_paths() {
    let data_dir = TempDir::new().unwrap();

    ledger(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ledger file:"))
        .stdout(predicate::str::contains("finance_data.csv"));
}
