use predicates::str::contains;
use std::env;
use std::fs;
use std::path::PathBuf;

mod common;
use common::*;

fn doc_root(name: &str) -> PathBuf {
    let mut root: PathBuf = env::temp_dir();
    root.push(format!("{}_sitelogger_docs", name));
    fs::remove_dir_all(&root).ok();
    root
}

fn write_doc(root: &PathBuf, app: &str, user: &str, file: &str, json: &str) {
    let dir = root
        .join("artifacts")
        .join(app)
        .join("users")
        .join(user)
        .join("daily_reports");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(file), json).unwrap();
}

#[test]
fn test_fetch_renders_documents() {
    let db = setup_test_db("fetch_docs");
    let jd = setup_json_dir("fetch_docs");
    init_db(&db, &jd);

    let root = doc_root("fetch_docs");
    write_doc(
        &root,
        "app1",
        "user1",
        "r1.json",
        &sample_payload("Line 5", "2025-08-01"),
    );
    write_doc(
        &root,
        "app1",
        "user1",
        "r2.json",
        &sample_payload("Line 5", "2025-08-02"),
    );

    stl()
        .args([
            "--db",
            &db,
            "--json-dir",
            &jd,
            "--test",
            "fetch",
            "--root",
            &root.to_string_lossy(),
            "--app-id",
            "app1",
            "--user-id",
            "user1",
        ])
        .assert()
        .success()
        .stdout(contains("Fetched 2 report document(s)"))
        .stdout(contains("Line 5"))
        .stdout(contains("Electricians"));
}

#[test]
fn test_fetch_unknown_user_is_empty() {
    let db = setup_test_db("fetch_nobody");
    let jd = setup_json_dir("fetch_nobody");
    init_db(&db, &jd);

    let root = doc_root("fetch_nobody");
    write_doc(
        &root,
        "app1",
        "user1",
        "r1.json",
        &sample_payload("Line 5", "2025-08-01"),
    );

    stl()
        .args([
            "--db",
            &db,
            "--json-dir",
            &jd,
            "--test",
            "fetch",
            "--root",
            &root.to_string_lossy(),
            "--app-id",
            "app1",
            "--user-id",
            "nobody",
        ])
        .assert()
        .success()
        .stdout(contains("No report documents found"));
}

#[test]
fn test_fetch_skips_malformed_documents() {
    let db = setup_test_db("fetch_bad_doc");
    let jd = setup_json_dir("fetch_bad_doc");
    init_db(&db, &jd);

    let root = doc_root("fetch_bad_doc");
    write_doc(
        &root,
        "app1",
        "user1",
        "good.json",
        &sample_payload("Line 5", "2025-08-01"),
    );
    write_doc(&root, "app1", "user1", "bad.json", "{ not json at all");

    stl()
        .args([
            "--db",
            &db,
            "--json-dir",
            &jd,
            "--test",
            "fetch",
            "--root",
            &root.to_string_lossy(),
            "--app-id",
            "app1",
            "--user-id",
            "user1",
        ])
        .assert()
        .success()
        .stdout(contains("Fetched 1 report document(s)"));
}
