use predicates::prelude::PredicateBooleanExt;
use predicates::str::{contains, is_match};
use std::fs;

mod common;
use common::{setup_test_dir, tkr, track_session};

#[test]
fn test_track_records_a_session() {
    let dir = setup_test_dir("cli_track");

    tkr()
        .args([
            "--config-dir",
            dir.to_str().unwrap(),
            "track",
            "Acme",
            "--memo",
            "kickoff call",
        ])
        .write_stdin("s\n")
        .assert()
        .success()
        .stdout(contains("Session saved"));

    assert!(dir.join("work_hours.json").exists());

    tkr()
        .args(["--config-dir", dir.to_str().unwrap(), "list"])
        .assert()
        .success()
        .stdout(contains("Acme").and(contains("kickoff call")));
}

#[test]
fn test_track_pause_resume_stop() {
    let dir = setup_test_dir("cli_track_pause");

    tkr()
        .args(["--config-dir", dir.to_str().unwrap(), "track", "Beta"])
        .write_stdin("p\ne\nr\ns\n")
        .assert()
        .success()
        .stdout(contains("Timer paused"))
        .stdout(contains("Elapsed:"))
        .stdout(contains("Timer resumed"))
        .stdout(contains("Session saved"));
}

#[test]
fn test_track_eof_stops_and_saves() {
    let dir = setup_test_dir("cli_track_eof");

    // No explicit stop command: end of input must not lose the session.
    tkr()
        .args(["--config-dir", dir.to_str().unwrap(), "track", "Gamma"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(contains("Session saved"));
}

#[test]
fn test_track_requires_a_project_name() {
    let dir = setup_test_dir("cli_track_empty");

    tkr()
        .args(["--config-dir", dir.to_str().unwrap(), "track", "   "])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(contains("project required"));
}

#[test]
fn test_edit_by_id() {
    let dir = setup_test_dir("cli_edit");
    track_session(&dir, "Acme", "first pass");

    tkr()
        .args([
            "--config-dir",
            dir.to_str().unwrap(),
            "edit",
            "e1",
            "--duration",
            "01:30:45",
            "--invoiced",
            "yes",
        ])
        .assert()
        .success()
        .stdout(contains("Updated e1"));

    tkr()
        .args(["--config-dir", dir.to_str().unwrap(), "list"])
        .assert()
        .success()
        .stdout(contains("01:30:45"))
        .stdout(contains("Yes"));
}

#[test]
fn test_edit_malformed_duration_counts_as_zero() {
    let dir = setup_test_dir("cli_edit_garbage");
    track_session(&dir, "Acme", "");

    tkr()
        .args([
            "--config-dir",
            dir.to_str().unwrap(),
            "edit",
            "e1",
            "--duration",
            "garbage",
        ])
        .assert()
        .success();

    tkr()
        .args(["--config-dir", dir.to_str().unwrap(), "list"])
        .assert()
        .success()
        .stdout(contains("00:00:00"));
}

#[test]
fn test_edit_unknown_id_fails() {
    let dir = setup_test_dir("cli_edit_unknown");
    track_session(&dir, "Acme", "");

    tkr()
        .args([
            "--config-dir",
            dir.to_str().unwrap(),
            "edit",
            "e42",
            "--memo",
            "nope",
        ])
        .assert()
        .failure()
        .stderr(contains("No entry with id 'e42'"));
}

#[test]
fn test_del_with_confirmation() {
    let dir = setup_test_dir("cli_del");
    track_session(&dir, "Acme", "");
    track_session(&dir, "Beta", "");

    // Declining leaves the store untouched.
    tkr()
        .args(["--config-dir", dir.to_str().unwrap(), "del", "e1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Delete cancelled"));

    tkr()
        .args(["--config-dir", dir.to_str().unwrap(), "del", "e1", "--yes"])
        .assert()
        .success()
        .stdout(contains("Deleted e1"));

    tkr()
        .args(["--config-dir", dir.to_str().unwrap(), "list"])
        .assert()
        .success()
        .stdout(contains("Beta").and(contains("Acme").not()));
}

#[test]
fn test_list_filters_by_project() {
    let dir = setup_test_dir("cli_list_filter");
    track_session(&dir, "Acme", "");
    track_session(&dir, "Beta", "");

    tkr()
        .args([
            "--config-dir",
            dir.to_str().unwrap(),
            "list",
            "--project",
            "acme",
        ])
        .assert()
        .success()
        .stdout(contains("Acme").and(contains("Beta").not()));
}

#[test]
fn test_corrupt_data_file_warns_and_continues() {
    let dir = setup_test_dir("cli_corrupt_data");
    fs::write(dir.join("work_hours.json"), "not json").unwrap();

    tkr()
        .args(["--config-dir", dir.to_str().unwrap(), "list"])
        .assert()
        .success()
        .stdout(contains("starting empty"));

    // A new session can still be recorded over the corrupt file.
    track_session(&dir, "Recovered", "");
    tkr()
        .args(["--config-dir", dir.to_str().unwrap(), "list"])
        .assert()
        .success()
        .stdout(contains("Recovered"));
}

#[test]
fn test_corrupt_config_falls_back_to_defaults() {
    let dir = setup_test_dir("cli_corrupt_config");
    fs::write(dir.join("config.json"), "{ definitely not json").unwrap();

    // The command still runs, on default settings, with a warning.
    tkr()
        .args(["--config-dir", dir.to_str().unwrap(), "list"])
        .assert()
        .success()
        .stdout(contains("Config file is corrupt, using defaults"));

    // Default auto_backup=true applies, so recording a session backs up.
    track_session(&dir, "Acme", "");
    assert!(dir.join("backups").exists());
}

#[test]
fn test_corrupt_project_catalog_warns_and_continues() {
    let dir = setup_test_dir("cli_corrupt_projects");
    fs::write(dir.join("projects.json"), "[ broken").unwrap();

    // Listing succeeds with an empty catalog plus a warning.
    tkr()
        .args(["--config-dir", dir.to_str().unwrap(), "projects"])
        .assert()
        .success()
        .stdout(contains("Project catalog is corrupt"));

    // And the catalog is usable again once a project is added.
    tkr()
        .args([
            "--config-dir",
            dir.to_str().unwrap(),
            "projects",
            "--add",
            "Fresh Start",
        ])
        .assert()
        .success()
        .stdout(contains("fresh-start"));
}

#[test]
fn test_config_defaults_written_on_first_use() {
    let dir = setup_test_dir("cli_config_defaults");

    tkr()
        .args(["--config-dir", dir.to_str().unwrap(), "config", "--print"])
        .assert()
        .success()
        .stdout(contains("\"auto_backup\": true"))
        .stdout(contains("\"backup_interval_days\": 7"))
        .stdout(contains("\"theme\": \"default\""));
}

#[test]
fn test_config_set_auto_backup() {
    let dir = setup_test_dir("cli_config_set");

    tkr()
        .args([
            "--config-dir",
            dir.to_str().unwrap(),
            "config",
            "--set-auto-backup",
            "off",
        ])
        .assert()
        .success();

    tkr()
        .args(["--config-dir", dir.to_str().unwrap(), "config", "--print"])
        .assert()
        .success()
        .stdout(contains("\"auto_backup\": false"));

    // With auto-backup off, saving a session creates no backup files.
    track_session(&dir, "Acme", "");
    assert!(!dir.join("backups").exists());
}

#[test]
fn test_backup_and_restore_flow() {
    let dir = setup_test_dir("cli_backup_restore");
    track_session(&dir, "Acme", "");

    tkr()
        .args(["--config-dir", dir.to_str().unwrap(), "backup", "--manual"])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    let manual_name = fs::read_dir(dir.join("backups"))
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .find(|n| n.starts_with("manual_backup_"))
        .expect("manual backup file");

    track_session(&dir, "Beta", "");

    tkr()
        .args(["--config-dir", dir.to_str().unwrap(), "restore", "--list"])
        .assert()
        .success()
        .stdout(contains(manual_name.as_str()));

    tkr()
        .args([
            "--config-dir",
            dir.to_str().unwrap(),
            "restore",
            "--file",
            &manual_name,
            "--yes",
        ])
        .assert()
        .success()
        .stdout(contains("Data restored"));

    // Back to the single-session state from before the second track.
    tkr()
        .args(["--config-dir", dir.to_str().unwrap(), "list"])
        .assert()
        .success()
        .stdout(contains("Acme").and(contains("Beta").not()));
}

#[test]
fn test_projects_catalog() {
    let dir = setup_test_dir("cli_projects");

    // First run seeds the default project.
    tkr()
        .args(["--config-dir", dir.to_str().unwrap(), "projects"])
        .assert()
        .success()
        .stdout(contains("Default Project"));

    tkr()
        .args([
            "--config-dir",
            dir.to_str().unwrap(),
            "projects",
            "--add",
            "Acme Corp",
            "--description",
            "consulting",
        ])
        .assert()
        .success()
        .stdout(contains("acme-corp"));

    // Duplicate ids are rejected.
    tkr()
        .args([
            "--config-dir",
            dir.to_str().unwrap(),
            "projects",
            "--add",
            "Acme Corp",
        ])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    // Tracking against an unknown catalog id fails before the timer starts.
    tkr()
        .args([
            "--config-dir",
            dir.to_str().unwrap(),
            "track",
            "Acme",
            "--project-id",
            "missing",
        ])
        .write_stdin("s\n")
        .assert()
        .failure()
        .stderr(contains("No project with id 'missing'"));

    tkr()
        .args([
            "--config-dir",
            dir.to_str().unwrap(),
            "track",
            "Acme",
            "--project-id",
            "acme-corp",
        ])
        .write_stdin("s\n")
        .assert()
        .success();
}

#[test]
fn test_report_totals_per_project() {
    let dir = setup_test_dir("cli_report");
    track_session(&dir, "Acme", "");
    track_session(&dir, "Acme", "");
    track_session(&dir, "Beta", "");

    // Whole rows: project, hours, seconds, entry count.
    tkr()
        .args(["--config-dir", dir.to_str().unwrap(), "report"])
        .assert()
        .success()
        .stdout(is_match(r"Acme\s+0\.00\s+0\s+2").unwrap())
        .stdout(is_match(r"Beta\s+0\.00\s+0\s+1").unwrap());
}
