#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// healthlog binary with a fresh, empty config dir and no ANSI colors.
pub fn hl() -> Command {
    let home = tempfile::tempdir().expect("temp config home").keep();
    hl_in(&home)
}

/// healthlog binary using `home` as its config dir.
pub fn hl_in(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("healthlog");
    cmd.env("HEALTHLOG_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("HEALTHLOG_BACKEND")
        .env_remove("SUPABASE_URL")
        .env_remove("SUPABASE_KEY")
        .env_remove("RUST_LOG");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_healthlog.sqlite", name));
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

/// Log one entry through the CLI at a fixed timestamp.
pub fn add_at(db_path: &str, food: &str, sugar: &str, water: &str, insulin: &str, at: &str) {
    hl()
        .args([
            "--db", db_path, "add", food, "--sugar", sugar, "--water", water, "--insulin",
            insulin, "--at", at,
        ])
        .assert()
        .success();
}

/// Initialize DB and add a small dataset spread over three days
pub fn init_db_with_data(db_path: &str) {
    hl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    add_at(db_path, "Porridge", "12", "1", "4", "2025-03-01 08:00");
    add_at(db_path, "Orange juice", "21", "1", "0", "2025-03-01 12:30");
    add_at(db_path, "Late snack", "9.5", "0", "2", "2025-03-01 23:59");
    add_at(db_path, "Night tea", "3", "2", "0", "2025-03-02 00:00");
    add_at(db_path, "Cake", "30", "0", "6", "2025-02-28 18:00");
}
