use assert_cmd::Command;
use predicates::prelude::*;

fn salary_totals() -> Command {
    let mut cmd = Command::cargo_bin("salary-totals").unwrap();
    cmd.env("RUST_LOG", "error");
    cmd
}

#[test]
fn prints_totals_as_csv() {
    salary_totals()
        .arg("test-inputs/salaries.csv")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("total,average,count\n6000.00,"))
        .stdout(predicate::str::ends_with(",3\n"));
}

#[test]
fn empty_file_prints_zeros() {
    salary_totals()
        .arg("test-inputs/empty.csv")
        .assert()
        .success()
        .stdout("total,average,count\n0,0,0\n");
}

#[test]
fn malformed_row_exits_with_failure() {
    salary_totals()
        .arg("test-inputs/malformed.csv")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("does not contain enough columns").count(1));
}

#[test]
fn missing_file_exits_with_failure() {
    salary_totals()
        .arg("test-inputs/missing.csv")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("does not exist."));
}

#[test]
fn file_argument_is_required() {
    salary_totals().assert().failure();
}
