//! End-to-end tests for the `casher` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn casher(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("casher").unwrap();
    cmd.env("CASHER_DATA_DIR", data_dir.path())
        .env_remove("OPENAI_API_KEY")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_add_and_list_expense() {
    let dir = TempDir::new().unwrap();

    casher(&dir)
        .args(["expense", "add", "12.50", "Lunch", "-c", "Food", "-d", "2025-01-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense: exp-"));

    casher(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("$12.50"))
        .stdout(predicate::str::contains("01/05/2025"));

    assert!(dir.path().join("state.json").exists());
}

#[test]
fn test_invalid_amount_is_rejected() {
    let dir = TempDir::new().unwrap();

    casher(&dir)
        .args(["expense", "add", "abc", "Lunch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid"));

    casher(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses yet"));
}

#[test]
fn test_unknown_category_needs_adding_first() {
    let dir = TempDir::new().unwrap();

    casher(&dir)
        .args(["expense", "add", "9", "Vet", "-c", "Pets"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("category add"));

    casher(&dir)
        .args(["category", "add", "Pets"])
        .assert()
        .success();

    casher(&dir)
        .args(["expense", "add", "9", "Vet", "-c", "Pets"])
        .assert()
        .success();

    casher(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pets"))
        .stdout(predicate::str::contains("$9.00"));
}

#[test]
fn test_export_csv_to_stdout() {
    let dir = TempDir::new().unwrap();

    casher(&dir)
        .args([
            "expense",
            "add",
            "12.5",
            "Coffee, \"large\"",
            "-c",
            "Food",
            "-d",
            "2025-01-05",
        ])
        .assert()
        .success();

    casher(&dir)
        .args(["export", "-"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "id,amount,description,category,date\n1,12.5,\"Coffee, \"\"large\"\"\",Food,2025-01-05",
        ));
}

#[test]
fn test_export_then_import_into_fresh_store() {
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    let file = source.path().join("backup.csv");

    casher(&source)
        .args(["category", "add", "Pets"])
        .assert()
        .success();
    casher(&source)
        .args(["expense", "add", "40", "Vet", "-c", "Pets", "-d", "2025-02-01"])
        .assert()
        .success();
    casher(&source)
        .args(["export", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 expense(s)"));

    casher(&target)
        .args(["import", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported:    1"))
        .stdout(predicate::str::contains("New categories: Pets"));

    casher(&target)
        .args(["import", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped:     1"));
}

#[test]
fn test_settings_change_currency_display() {
    let dir = TempDir::new().unwrap();

    casher(&dir)
        .args(["settings", "set", "--currency", "eur", "--date-format", "YYYY-MM-DD"])
        .assert()
        .success();

    casher(&dir)
        .args(["expense", "add", "1234.5", "Laptop", "-c", "Shopping", "-d", "2025-03-09"])
        .assert()
        .success()
        .stdout(predicate::str::contains("€1,234.50"))
        .stdout(predicate::str::contains("2025-03-09"));
}

#[test]
fn test_corrupt_state_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("state.json"), "{ definitely not json").unwrap();

    casher(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entertainment"));
}

#[test]
fn test_clear_requires_confirmation_and_keeps_settings() {
    let dir = TempDir::new().unwrap();

    casher(&dir)
        .args(["settings", "set", "--theme", "dark"])
        .assert()
        .success();
    casher(&dir)
        .args(["expense", "add", "5", "Snack"])
        .assert()
        .success();

    casher(&dir)
        .args(["clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--yes"));

    casher(&dir)
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 expense(s)"));

    casher(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses yet"));

    casher(&dir)
        .args(["settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dark"));
}

#[test]
fn test_report_for_month() {
    let dir = TempDir::new().unwrap();

    for (amount, category, date) in [
        ("10", "Food", "2025-01-05"),
        ("20", "Food", "2025-01-06"),
        ("5", "Transport", "2025-01-06"),
    ] {
        casher(&dir)
            .args(["expense", "add", amount, "item", "-c", category, "-d", date])
            .assert()
            .success();
    }

    casher(&dir)
        .args(["report", "--month", "2025-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Spending Report: January 2025"))
        .stdout(predicate::str::contains("Food ($30.00)"))
        .stdout(predicate::str::contains("$17.50"));
}

#[test]
fn test_ai_without_key_uses_fallbacks() {
    let dir = TempDir::new().unwrap();

    casher(&dir)
        .args(["ai", "categorize", "Uber to the airport"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Other\n"));

    casher(&dir)
        .args(["ai", "insights"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Start tracking expenses to get personalized insights!",
        ));
}

#[test]
fn test_audit_records_changes() {
    let dir = TempDir::new().unwrap();

    casher(&dir)
        .args(["expense", "add", "3", "Tea", "-c", "Food"])
        .assert()
        .success();

    casher(&dir)
        .args(["audit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE"))
        .stdout(predicate::str::contains("Tea"));
}
