#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rov() -> Command {
    cargo_bin_cmd!("rovertime")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rovertime.sqlite", name));
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

/// Record one time slot through the CLI
pub fn set_time(db_path: &str, date: &str, field: &str, time: &str) {
    rov()
        .args([
            "--db", db_path, "set", date, "--field", field, "--time", time,
        ])
        .assert()
        .success();
}

/// Initialize DB and record two days of October 2024:
/// - 2024-10-01: 09:00-19:30 with 13:00-14:00 lunch → 1:30 extra
/// - 2024-10-02: 08:00-16:45 with no lunch → 0:45 extra
pub fn init_db_with_data(db_path: &str) {
    rov()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    set_time(db_path, "2024-10-01", "entry", "09:00");
    set_time(db_path, "2024-10-01", "lunch-start", "13:00");
    set_time(db_path, "2024-10-01", "lunch-end", "14:00");
    set_time(db_path, "2024-10-01", "exit", "19:30");

    set_time(db_path, "2024-10-02", "entry", "08:00");
    set_time(db_path, "2024-10-02", "exit", "16:45");
}
