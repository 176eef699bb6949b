use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::*;

#[test]
fn test_end_to_end_line5_report() {
    let db = setup_test_db("e2e_line5");
    let jd = setup_json_dir("e2e_line5");
    init_db(&db, &jd);

    let payload = write_payload("e2e_line5", &sample_payload("Line 5", "2025-08-01"));

    stl()
        .args([
            "--db", &db, "--json-dir", &jd, "--test", "save", "--file", &payload,
        ])
        .assert()
        .success()
        .stdout(contains("Report saved (ID: 1)"))
        .stdout(contains("Session JSON saved"));

    stl()
        .args(["--db", &db, "--json-dir", &jd, "--test", "show", "1"])
        .assert()
        .success()
        .stdout(contains("Line 5"))
        .stdout(contains("2025-08-01"))
        .stdout(contains("Electricians"))
        .stdout(contains("Excavate"))
        .stdout(contains("Completed"))
        .stdout(contains("No equipment logged"))
        .stdout(contains("No materials delivered"));
}

#[test]
fn test_blank_trade_row_is_dropped_silently() {
    let db = setup_test_db("blank_trade");
    let jd = setup_json_dir("blank_trade");
    init_db(&db, &jd);

    let payload = write_payload(
        "blank_trade",
        r#"{
            "project_name": "Line 5",
            "report_date": "2025-08-01",
            "manpower": [
                {"trade": "Ironworkers", "number_of_workers": 3, "hours_worked": 7.5},
                {"trade": "   ", "number_of_workers": 2, "hours_worked": 9.9}
            ]
        }"#,
    );

    stl()
        .args([
            "--db", &db, "--json-dir", &jd, "--test", "save", "--file", &payload,
        ])
        .assert()
        .success()
        .stdout(contains("Report saved"));

    stl()
        .args(["--db", &db, "--json-dir", &jd, "--test", "show", "1"])
        .assert()
        .success()
        .stdout(contains("Ironworkers"))
        .stdout(contains("9.9").not());
}

#[test]
fn test_save_without_project_name_fails() {
    let db = setup_test_db("no_project");
    let jd = setup_json_dir("no_project");
    init_db(&db, &jd);

    let payload = write_payload("no_project", r#"{"report_date": "2025-08-01"}"#);

    stl()
        .args([
            "--db", &db, "--json-dir", &jd, "--test", "save", "--file", &payload,
        ])
        .assert()
        .failure()
        .stderr(contains("Project name is required"));
}

#[test]
fn test_save_without_date_fails() {
    let db = setup_test_db("no_date");
    let jd = setup_json_dir("no_date");
    init_db(&db, &jd);

    let payload = write_payload("no_date", r#"{"project_name": "Line 5"}"#);

    stl()
        .args([
            "--db", &db, "--json-dir", &jd, "--test", "save", "--file", &payload,
        ])
        .assert()
        .failure()
        .stderr(contains("Report date is required"));
}

#[test]
fn test_same_day_reports_get_distinct_ids() {
    let db = setup_test_db("same_day");
    let jd = setup_json_dir("same_day");
    init_db(&db, &jd);

    let payload = write_payload("same_day", &sample_payload("Line 5", "2025-08-01"));

    stl()
        .args([
            "--db", &db, "--json-dir", &jd, "--test", "save", "--file", &payload,
        ])
        .assert()
        .success()
        .stdout(contains("Report saved (ID: 1)"));

    // Two reports for the same project and day are both kept.
    stl()
        .args([
            "--db", &db, "--json-dir", &jd, "--test", "save", "--file", &payload,
        ])
        .assert()
        .success()
        .stdout(contains("Report saved (ID: 2)"));
}

#[test]
fn test_session_snapshot_reuse_and_new_session() {
    let db = setup_test_db("session_flow");
    let jd = setup_json_dir("session_flow");
    init_db(&db, &jd);

    let payload = write_payload("session_flow", &sample_payload("Line 5", "2025-08-01"));

    save_file(&db, &jd, &payload);
    save_file(&db, &jd, &payload);

    // Same session: both saves land in one snapshot file.
    let count = std::fs::read_dir(&jd)
        .unwrap()
        .flatten()
        .filter(|e| e.path().extension().and_then(|x| x.to_str()) == Some("json"))
        .count();
    assert_eq!(count, 1);

    stl()
        .args(["--db", &db, "--json-dir", &jd, "--test", "sessions", "--new"])
        .assert()
        .success();

    save_file(&db, &jd, &payload);

    let count = std::fs::read_dir(&jd)
        .unwrap()
        .flatten()
        .filter(|e| e.path().extension().and_then(|x| x.to_str()) == Some("json"))
        .count();
    assert_eq!(count, 2);

    stl()
        .args(["--db", &db, "--json-dir", &jd, "--test", "sessions", "--list"])
        .assert()
        .success()
        .stdout(contains(".json"))
        .stdout(contains("(current)"));
}
