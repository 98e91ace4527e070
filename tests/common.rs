#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pc() -> Command {
    cargo_bin_cmd!("punchclock")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punchclock.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the schema in a test DB (uses --test so the user's real
/// config file is never touched)
pub fn init_db(db_path: &str) {
    pc().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Record one action at a fixed instant
pub fn clock_at(db_path: &str, action: &str, at: &str) {
    pc().args(["--db", db_path, "--test", "clock", action, "--at", at])
        .assert()
        .success();
}
