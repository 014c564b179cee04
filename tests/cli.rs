//! End-to-end tests running the tally binary against temp ledgers.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn tally(ledger: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.arg("--ledger").arg(ledger);
    cmd
}

fn add(ledger: &Path, date: &str, category: &str, amount: &str) {
    tally(ledger)
        .args(["add", date, category, amount])
        .assert()
        .success();
}

#[test]
fn test_add_then_view_month() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = dir.path().join("ledger.json");
    add(&ledger, "01-03-2024", "Food", "50");
    add(&ledger, "02-04-2024", "Rent", "1000");

    tally(&ledger)
        .args(["month", "03-2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("01-03-2024"))
        .stdout(predicate::str::contains("Rent").not());

    tally(&ledger)
        .args(["month", "05-2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found for this month."));
}

#[test]
fn test_add_rejects_bad_date() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = dir.path().join("ledger.json");
    tally(&ledger)
        .args(["add", "2024-03-01", "Food", "50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
    assert!(!ledger.exists());
}

#[test]
fn test_summary_on_empty_ledger() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = dir.path().join("ledger.json");
    tally(&ledger)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses to display."));
}

#[test]
fn test_summary_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = dir.path().join("ledger.json");
    add(&ledger, "01-03-2024", "Food", "50");
    add(&ledger, "15-03-2024", "Food", "150");
    add(&ledger, "02-04-2024", "Rent", "1000");

    tally(&ledger)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("03-2024"))
        .stdout(predicate::str::contains("200.00"))
        .stdout(predicate::str::contains("0.00% more"))
        .stdout(predicate::str::contains("400.00% more"))
        .stdout(predicate::str::contains("1,200.00"));
}

#[test]
fn test_export_on_empty_ledger_writes_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = dir.path().join("ledger.json");
    let out = dir.path().join("out.xlsx");
    tally(&ledger)
        .args(["export", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No data to save."));
    assert!(!out.exists());
}

#[test]
fn test_export_import_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = dir.path().join("ledger.json");
    let other = dir.path().join("other.json");
    let out = dir.path().join("out.xlsx");

    add(&ledger, "01-03-2024", "Food", "50");
    add(&ledger, "15-03-2024", "Food", "150");
    add(&ledger, "02-04-2024", "Rent", "1000");
    tally(&ledger)
        .args(["export", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Data saved to"));

    tally(&other)
        .args(["import", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 imported (3 new, 0 updated)"));

    tally(&other)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("400.00% more"))
        .stdout(predicate::str::contains("1,200.00"));
}

#[test]
fn test_import_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = dir.path().join("ledger.json");
    let out = dir.path().join("out.xlsx");

    add(&ledger, "01-03-2024", "Food", "50");
    tally(&ledger)
        .args(["export", out.to_str().unwrap()])
        .assert()
        .success();

    tally(&ledger)
        .args(["import", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 imported (0 new, 1 updated)"));
    let after_first = std::fs::read_to_string(&ledger).unwrap();

    tally(&ledger)
        .args(["import", out.to_str().unwrap()])
        .assert()
        .success();
    let after_second = std::fs::read_to_string(&ledger).unwrap();
    assert_eq!(after_first, after_second);
}

#[test]
fn test_import_overwrites_colliding_record() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("source.json");
    let target = dir.path().join("target.json");
    let out = dir.path().join("out.xlsx");

    add(&source, "01-01-2024", "Food", "10");
    tally(&source)
        .args(["export", out.to_str().unwrap()])
        .assert()
        .success();

    add(&target, "01-01-2024", "Food", "99");
    tally(&target)
        .args(["import", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("(0 new, 1 updated)"));

    tally(&target)
        .args(["month", "01-2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10.00"))
        .stdout(predicate::str::contains("99.00").not());
}

#[test]
fn test_import_missing_file_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = dir.path().join("ledger.json");
    add(&ledger, "01-01-2024", "Food", "10");
    let before = std::fs::read_to_string(&ledger).unwrap();

    tally(&ledger)
        .args(["import", dir.path().join("missing.xlsx").to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read workbook"));

    assert_eq!(before, std::fs::read_to_string(&ledger).unwrap());
}

#[test]
fn test_clear_commands() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = dir.path().join("ledger.json");
    add(&ledger, "01-03-2024", "Food", "50");
    add(&ledger, "15-03-2024", "Food", "150");
    add(&ledger, "02-04-2024", "Rent", "1000");

    tally(&ledger)
        .args(["clear", "date", "01-03-2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 records"));

    tally(&ledger)
        .args(["clear", "month", "03-2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 records"));

    tally(&ledger)
        .args(["clear", "all"])
        .assert()
        .success();
    tally(&ledger)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses to display."));
}

#[test]
fn test_demo_and_status() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = dir.path().join("ledger.json");

    tally(&ledger)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Demo data loaded!"));

    // Second run leaves the seeded ledger alone.
    tally(&ledger)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("demo data not loaded"));

    tally(&ledger)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Records: 36"))
        .stdout(predicate::str::contains("Months:  6"));
}
