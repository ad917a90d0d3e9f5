#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn tkr() -> Command {
    cargo_bin_cmd!("timekeeper")
}

/// Create a unique, empty working directory inside the system temp dir.
/// Used as --config-dir so every test gets an isolated data file, config
/// file and backup directory.
pub fn setup_test_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timekeeper", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

/// Fixed base instant for library-level tests; `t(n)` is n seconds after it.
pub fn t(secs: i64) -> NaiveDateTime {
    base() + Duration::seconds(secs)
}

/// Like `t` but with sub-second resolution for truncation tests.
pub fn t_ms(millis: i64) -> NaiveDateTime {
    base() + Duration::milliseconds(millis)
}

fn base() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

/// Record one session via the CLI so CLI-level tests have data to work with.
pub fn track_session(dir: &PathBuf, project: &str, memo: &str) {
    tkr()
        .args([
            "--config-dir",
            dir.to_str().unwrap(),
            "track",
            project,
            "--memo",
            memo,
        ])
        .write_stdin("s\n")
        .assert()
        .success();
}
