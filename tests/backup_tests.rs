use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::*;

#[test]
fn test_backup_copies_database() {
    let db = setup_test_db("backup_plain");
    let jd = setup_json_dir("backup_plain");
    init_db(&db, &jd);

    let payload = write_payload("backup_plain", &sample_payload("Line 5", "2025-08-01"));
    save_file(&db, &jd, &payload);

    let dest = temp_out("backup_plain", "sqlite");

    stl()
        .args([
            "--db", &db, "--json-dir", &jd, "--test", "backup", "--file", &dest,
        ])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(Path::new(&dest).exists());
    assert!(fs::metadata(&dest).unwrap().len() > 0);
}

#[test]
fn test_backup_compress_leaves_only_zip() {
    let db = setup_test_db("backup_zip");
    let jd = setup_json_dir("backup_zip");
    init_db(&db, &jd);

    let dest = temp_out("backup_zip", "sqlite");
    let zipped = Path::new(&dest).with_extension("zip");
    fs::remove_file(&zipped).ok();

    stl()
        .args([
            "--db", &db, "--json-dir", &jd, "--test", "backup", "--file", &dest, "--compress",
        ])
        .assert()
        .success()
        .stdout(contains("Compressed"));

    assert!(zipped.exists());
    assert!(!Path::new(&dest).exists(), "uncompressed copy is removed");
}

#[test]
fn test_backup_missing_database_fails() {
    let db = setup_test_db("backup_missing");
    let jd = setup_json_dir("backup_missing");
    // No init: the database file does not exist.

    let dest = temp_out("backup_missing", "sqlite");

    stl()
        .args([
            "--db", &db, "--json-dir", &jd, "--test", "backup", "--file", &dest,
        ])
        .assert()
        .failure()
        .stderr(contains("Database not found"));
}
