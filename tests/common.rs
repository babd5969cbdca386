#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rfattracker::models::entry::Entry;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rft() -> Command {
    cargo_bin_cmd!("rfattracker")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rfattracker.sqlite", name));
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

/// Initialize the DB schema without touching the user's config file
pub fn init_db(db_path: &str) {
    rft()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Record one entry through the CLI, pretending today is `today`
pub fn add(db_path: &str, today: &str, intake: &str, burn: &str) {
    rft()
        .args([
            "--db", db_path, "--today", today, "add", "--in", intake, "--out", burn,
        ])
        .assert()
        .success();
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn entry(id: &str, date: &str, intake: u32, burn: u32) -> Entry {
    Entry {
        id: id.to_string(),
        date: d(date),
        intake,
        burn,
    }
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
