//! `list`, `log` and `db` maintenance commands.

use predicates::str::contains;

mod common;
use common::{clock_at, init_db, pc, setup_test_db};

#[test]
fn test_list_period_shows_daily_summaries() {
    let db_path = setup_test_db("list_period");
    init_db(&db_path);

    clock_at(&db_path, "in", "2025-10-01T09:00:00Z");
    clock_at(&db_path, "out", "2025-10-01T17:00:00Z");

    pc().args(["--db", &db_path, "--test", "clock", "in", "--at", "2025-10-03T08:00:00Z", "--force"])
        .assert()
        .success();
    pc().args(["--db", &db_path, "--test", "clock", "out", "--at", "2025-10-03T16:00:00Z", "--force"])
        .assert()
        .success();

    pc().args(["--db", &db_path, "--test", "list", "--period", "2025-10"])
        .assert()
        .success()
        .stdout(contains("2025-10-01"))
        .stdout(contains("2025-10-03"))
        .stdout(contains("08:00"));
}

#[test]
fn test_list_range_across_months() {
    let db_path = setup_test_db("list_range");
    init_db(&db_path);

    clock_at(&db_path, "in", "2025-09-15T09:00:00Z");
    pc().args(["--db", &db_path, "--test", "clock", "in", "--at", "2025-10-02T09:00:00Z", "--force"])
        .assert()
        .success();

    pc().args([
        "--db",
        &db_path,
        "--test",
        "list",
        "--period",
        "2025-09:2025-10",
        "--events",
    ])
    .assert()
    .success()
    .stdout(contains("2025-09-15"))
    .stdout(contains("2025-10-02"));
}

#[test]
fn test_list_empty_period() {
    let db_path = setup_test_db("list_empty");
    init_db(&db_path);

    pc().args(["--db", &db_path, "--test", "list", "--period", "2024"])
        .assert()
        .success()
        .stdout(contains("No entries for the selected period."));
}

#[test]
fn test_internal_log_records_operations() {
    let db_path = setup_test_db("internal_log");
    init_db(&db_path);

    clock_at(&db_path, "in", "2025-10-01T09:00:00Z");

    pc().args(["--db", &db_path, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("clock"));
}

#[test]
fn test_db_check_and_info() {
    let db_path = setup_test_db("db_maintenance");
    init_db(&db_path);

    clock_at(&db_path, "in", "2025-10-01T09:00:00Z");

    pc().args(["--db", &db_path, "--test", "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));

    pc().args(["--db", &db_path, "--test", "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Time entries"))
        .stdout(contains("Leave requests"));
}

#[test]
fn test_db_migrate_is_idempotent() {
    let db_path = setup_test_db("db_migrate_twice");
    init_db(&db_path);

    for _ in 0..2 {
        pc().args(["--db", &db_path, "--test", "db", "--migrate"])
            .assert()
            .success()
            .stdout(contains("Migration completed"));
    }
}
