#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn jornada() -> Command {
    cargo_bin_cmd!("jornada")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_jornada.sqlite", name));
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

/// Initialize DB (test mode) and register two colaboradores:
/// #1 Ana Pérez (user `u-ana`) and #2 Luis Gómez (user `u-luis`).
pub fn init_with_team(db_path: &str) {
    jornada()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    for (name, surname, user) in [("Ana", "Pérez", "u-ana"), ("Luis", "Gómez", "u-luis")] {
        jornada()
            .args([
                "--db", db_path, "colaborador", "add", name, surname, "--user-id", user,
            ])
            .assert()
            .success();
    }
}

/// Run one clock action as `user` at a pinned instant.
pub fn clock_as(db_path: &str, user: &str, action: &str, at: &str) -> assert_cmd::assert::Assert {
    jornada()
        .args(["--db", db_path, "--user", user, "--at", at, "clock", action])
        .assert()
}

/// A full day for `user` on `date` (09:30 / 13:00 / 14:00 / 18:30).
pub fn full_day(db_path: &str, user: &str, date: &str) {
    clock_as(db_path, user, "in", &format!("{date} 09:30")).success();
    clock_as(db_path, user, "lunch", &format!("{date} 13:00")).success();
    clock_as(db_path, user, "back", &format!("{date} 14:00")).success();
    clock_as(db_path, user, "out", &format!("{date} 18:30")).success();
}
