#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn stl() -> Command {
    cargo_bin_cmd!("sitelogger")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_sitelogger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a unique snapshot directory inside the system temp dir, wiped clean
pub fn setup_json_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_sitelogger_json", name));
    let dir = path.to_string_lossy().to_string();
    fs::remove_dir_all(&dir).ok();
    dir
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a payload JSON file into tempdir and return its path
pub fn write_payload(name: &str, json: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_payload.json", name));
    fs::write(&path, json).expect("write payload file");
    path.to_string_lossy().to_string()
}

/// The end-to-end scenario payload: one manpower row, one completed
/// activity, nothing else.
pub fn sample_payload(project: &str, date: &str) -> String {
    format!(
        r#"{{
            "project_name": "{project}",
            "report_date": "{date}",
            "prepared_by": "A. Site Manager",
            "weather": "Sunny, 32C",
            "site_conditions": "Ground is dry",
            "general_notes": "",
            "manpower": [
                {{"trade": "Electricians", "number_of_workers": 4, "hours_worked": 8.0}}
            ],
            "equipment": [],
            "activities": [
                {{"activity_description": "Excavate", "status": "Completed", "percent_complete": 100, "notes": ""}}
            ],
            "materials": []
        }}"#
    )
}

/// Initialize DB + schema via the CLI
pub fn init_db(db_path: &str, json_dir: &str) {
    stl()
        .args(["--db", db_path, "--json-dir", json_dir, "--test", "init"])
        .assert()
        .success();
}

/// Save one payload file via the CLI
pub fn save_file(db_path: &str, json_dir: &str, payload_file: &str) {
    stl()
        .args([
            "--db",
            db_path,
            "--json-dir",
            json_dir,
            "--test",
            "save",
            "--file",
            payload_file,
        ])
        .assert()
        .success();
}
