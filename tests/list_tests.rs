use predicates::str::contains;

mod common;
use common::*;

#[test]
fn test_reports_listed_most_recent_first() {
    let db = setup_test_db("list_order");
    let jd = setup_json_dir("list_order");
    init_db(&db, &jd);

    for date in ["2025-08-01", "2025-08-03", "2025-08-02"] {
        let payload = write_payload(
            &format!("list_order_{date}"),
            &sample_payload("Line 5", date),
        );
        save_file(&db, &jd, &payload);
    }

    let output = stl()
        .args(["--db", &db, "--json-dir", &jd, "--test", "list", "--project", "Line 5"])
        .output()
        .expect("run list");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let pos_03 = stdout.find("2025-08-03").expect("08-03 listed");
    let pos_02 = stdout.find("2025-08-02").expect("08-02 listed");
    let pos_01 = stdout.find("2025-08-01").expect("08-01 listed");
    assert!(pos_03 < pos_02, "08-03 must come before 08-02");
    assert!(pos_02 < pos_01, "08-02 must come before 08-01");
}

#[test]
fn test_list_can_filter_by_date() {
    let db = setup_test_db("list_by_date");
    let jd = setup_json_dir("list_by_date");
    init_db(&db, &jd);

    for date in ["2025-08-01", "2025-08-02"] {
        let payload = write_payload(
            &format!("list_by_date_{date}"),
            &sample_payload("Line 5", date),
        );
        save_file(&db, &jd, &payload);
    }

    let output = stl()
        .args([
            "--db", &db, "--json-dir", &jd, "--test", "list", "--project", "Line 5", "--date",
            "2025-08-02",
        ])
        .output()
        .expect("run list");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2025-08-02"));
    assert!(!stdout.contains("2025-08-01"));
}

#[test]
fn test_projects_lists_all_created_projects() {
    let db = setup_test_db("projects_list");
    let jd = setup_json_dir("projects_list");
    init_db(&db, &jd);

    for project in ["Line 5", "Substation West"] {
        let payload = write_payload(
            &format!("projects_list_{}", project.replace(' ', "_")),
            &sample_payload(project, "2025-08-01"),
        );
        save_file(&db, &jd, &payload);
    }

    stl()
        .args(["--db", &db, "--json-dir", &jd, "--test", "projects"])
        .assert()
        .success()
        .stdout(contains("Line 5"))
        .stdout(contains("Substation West"));
}

#[test]
fn test_list_unknown_project_fails() {
    let db = setup_test_db("list_unknown");
    let jd = setup_json_dir("list_unknown");
    init_db(&db, &jd);

    stl()
        .args(["--db", &db, "--json-dir", &jd, "--test", "list", "--project", "Nowhere"])
        .assert()
        .failure()
        .stderr(contains("does not exist"));
}

#[test]
fn test_show_unknown_report_fails() {
    let db = setup_test_db("show_unknown");
    let jd = setup_json_dir("show_unknown");
    init_db(&db, &jd);

    stl()
        .args(["--db", &db, "--json-dir", &jd, "--test", "show", "99"])
        .assert()
        .failure()
        .stderr(contains("Report 99 does not exist"));
}
