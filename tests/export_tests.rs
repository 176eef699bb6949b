use predicates::str::contains;
use std::fs;

mod common;
use common::*;

fn saved_report(name: &str) -> (String, String) {
    let db = setup_test_db(name);
    let jd = setup_json_dir(name);
    init_db(&db, &jd);
    let payload = write_payload(name, &sample_payload("Line 5", "2025-08-01"));
    save_file(&db, &jd, &payload);
    (db, jd)
}

#[test]
fn test_export_report_as_json() {
    let (db, jd) = saved_report("export_json");
    let out = temp_out("export_json", "json");

    stl()
        .args([
            "--db", &db, "--json-dir", &jd, "--test", "export", "--format", "json", "--file",
            &out, "--report", "1",
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("export file exists");
    assert!(content.contains("\"project_name\": \"Line 5\""));
    assert!(content.contains("Electricians"));
    assert!(content.contains("Excavate"));
}

#[test]
fn test_export_report_as_csv() {
    let (db, jd) = saved_report("export_csv");
    let out = temp_out("export_csv", "csv");

    stl()
        .args([
            "--db", &db, "--json-dir", &jd, "--test", "export", "--format", "csv", "--file",
            &out, "--report", "1",
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("export file exists");
    assert!(content.contains("section"));
    assert!(content.contains("manpower"));
    assert!(content.contains("Electricians"));
    assert!(content.contains("activity"));
}

#[test]
fn test_export_rejects_relative_path() {
    let (db, jd) = saved_report("export_rel");

    stl()
        .args([
            "--db", &db, "--json-dir", &jd, "--test", "export", "--format", "csv", "--file",
            "relative.csv", "--report", "1",
        ])
        .assert()
        .failure()
        .stderr(contains("absolute"));
}

#[test]
fn test_export_unknown_report_fails() {
    let (db, jd) = saved_report("export_missing");
    let out = temp_out("export_missing", "csv");

    stl()
        .args([
            "--db", &db, "--json-dir", &jd, "--test", "export", "--format", "csv", "--file",
            &out, "--report", "42",
        ])
        .assert()
        .failure()
        .stderr(contains("does not exist"));
}

#[test]
fn test_export_existing_file_needs_confirmation() {
    let (db, jd) = saved_report("export_exists");
    let out = temp_out("export_exists", "csv");
    fs::write(&out, "old contents").unwrap();

    // Empty stdin: the overwrite prompt reads EOF and cancels.
    stl()
        .args([
            "--db", &db, "--json-dir", &jd, "--test", "export", "--format", "csv", "--file",
            &out, "--report", "1",
        ])
        .assert()
        .failure()
        .stderr(contains("Cancelled"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "old contents");

    // --force overwrites without asking.
    stl()
        .args([
            "--db", &db, "--json-dir", &jd, "--test", "export", "--format", "csv", "--file",
            &out, "--report", "1", "--force",
        ])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().contains("Electricians"));
}
