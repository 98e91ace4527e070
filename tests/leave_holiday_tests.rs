//! Leave requests and the company holiday calendar.

use predicates::str::contains;

mod common;
use common::{init_db, pc, setup_test_db};

#[test]
fn test_leave_request_and_list() {
    let db_path = setup_test_db("leave_request");
    init_db(&db_path);

    pc().args([
        "--db",
        &db_path,
        "--test",
        "leave",
        "--request",
        "--type",
        "sick",
        "--from",
        "2025-12-01",
        "--to",
        "2025-12-02",
        "--reason",
        "flu",
    ])
    .assert()
    .success()
    .stdout(contains("2 days"));

    pc().args(["--db", &db_path, "--test", "leave", "--list"])
        .assert()
        .success()
        .stdout(contains("sick"))
        .stdout(contains("pending"))
        .stdout(contains("flu"));
}

#[test]
fn test_leave_request_defaults_to_single_day() {
    let db_path = setup_test_db("leave_single_day");
    init_db(&db_path);

    pc().args([
        "--db",
        &db_path,
        "--test",
        "leave",
        "--request",
        "--type",
        "personal",
        "--from",
        "2025-12-05",
    ])
    .assert()
    .success()
    .stdout(contains("1 day"));
}

#[test]
fn test_leave_request_rejects_inverted_range() {
    let db_path = setup_test_db("leave_inverted");
    init_db(&db_path);

    pc().args([
        "--db",
        &db_path,
        "--test",
        "leave",
        "--request",
        "--type",
        "vacation",
        "--from",
        "2025-12-10",
        "--to",
        "2025-12-01",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid date"));
}

#[test]
fn test_leave_request_requires_type() {
    let db_path = setup_test_db("leave_missing_type");
    init_db(&db_path);

    pc().args([
        "--db",
        &db_path,
        "--test",
        "leave",
        "--request",
        "--from",
        "2025-12-01",
    ])
    .assert()
    .failure()
    .stderr(contains("--type"));
}

#[test]
fn test_leave_lists_are_per_worker() {
    let db_path = setup_test_db("leave_per_worker");
    init_db(&db_path);

    pc().args([
        "--db",
        &db_path,
        "--test",
        "--worker",
        "alice",
        "leave",
        "--request",
        "--type",
        "vacation",
        "--from",
        "2025-12-01",
    ])
    .assert()
    .success();

    pc().args([
        "--db",
        &db_path,
        "--test",
        "--worker",
        "bob",
        "leave",
        "--list",
    ])
    .assert()
    .success()
    .stdout(contains("No leave requests for bob"));
}

#[test]
fn test_holidays_add_and_list_sorted() {
    let db_path = setup_test_db("holidays");
    init_db(&db_path);

    pc().args([
        "--db",
        &db_path,
        "--test",
        "holidays",
        "--add",
        "--date",
        "2025-12-25",
        "--name",
        "Christmas Day",
    ])
    .assert()
    .success();

    pc().args([
        "--db",
        &db_path,
        "--test",
        "holidays",
        "--add",
        "--date",
        "2025-01-01",
        "--name",
        "New Year's Day",
    ])
    .assert()
    .success();

    let out = pc()
        .args(["--db", &db_path, "--test", "holidays", "--list"])
        .output()
        .expect("failed to list holidays");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let new_year = stdout.find("New Year's Day").expect("new year listed");
    let christmas = stdout.find("Christmas Day").expect("christmas listed");

    // calendar is ascending by date
    assert!(new_year < christmas);
}

#[test]
fn test_holidays_add_requires_date_and_name() {
    let db_path = setup_test_db("holidays_missing_args");
    init_db(&db_path);

    pc().args(["--db", &db_path, "--test", "holidays", "--add"])
        .assert()
        .failure()
        .stderr(contains("--date"));
}
