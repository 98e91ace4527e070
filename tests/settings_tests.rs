//! Notification/privacy settings round-trips.

use predicates::str::contains;

mod common;
use common::{init_db, pc, setup_test_db};

#[test]
fn test_settings_print_defaults() {
    let db_path = setup_test_db("settings_defaults");
    init_db(&db_path);

    pc().args(["--db", &db_path, "--test", "settings", "--print"])
        .assert()
        .success()
        .stdout(contains("email_notifications"))
        .stdout(contains("share_location"))
        .stdout(contains("auto_checkout"));
}

#[test]
fn test_settings_set_and_persist() {
    let db_path = setup_test_db("settings_set");
    init_db(&db_path);

    pc().args([
        "--db",
        &db_path,
        "--test",
        "settings",
        "--set",
        "share_location=off",
    ])
    .assert()
    .success()
    .stdout(contains("share_location = off"));

    // check through the library that the change was stored
    let mut pool = punchclock::db::pool::DbPool::new(&db_path).expect("open db");
    let settings =
        punchclock::db::queries::load_settings(&mut pool, "default").expect("load settings");
    assert!(!settings.share_location);
    // untouched keys keep their defaults
    assert!(settings.email_notifications);
}

#[test]
fn test_settings_rejects_unknown_key() {
    let db_path = setup_test_db("settings_unknown_key");
    init_db(&db_path);

    pc().args([
        "--db",
        &db_path,
        "--test",
        "settings",
        "--set",
        "ringtone=off",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid settings key"));
}

#[test]
fn test_settings_rejects_bad_value() {
    let db_path = setup_test_db("settings_bad_value");
    init_db(&db_path);

    pc().args([
        "--db",
        &db_path,
        "--test",
        "settings",
        "--set",
        "share_location=maybe",
    ])
    .assert()
    .failure()
    .stderr(contains("expected on/off"));
}

#[test]
fn test_settings_are_per_worker() {
    let db_path = setup_test_db("settings_per_worker");
    init_db(&db_path);

    pc().args([
        "--db",
        &db_path,
        "--test",
        "--worker",
        "alice",
        "settings",
        "--set",
        "push_notifications=off",
    ])
    .assert()
    .success();

    let mut pool = punchclock::db::pool::DbPool::new(&db_path).expect("open db");
    let alice = punchclock::db::queries::load_settings(&mut pool, "alice").expect("alice");
    let bob = punchclock::db::queries::load_settings(&mut pool, "bob").expect("bob");

    assert!(!alice.push_notifications);
    assert!(bob.push_notifications);
}
