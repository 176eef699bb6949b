//! Read-side collaborator: report documents fetched from an external
//! document store, shaped like the session snapshot payloads.

use std::fs;
use std::path::PathBuf;

use crate::errors::AppResult;
use crate::models::payload::ReportPayload;

/// A passive source of payload-shaped report documents, keyed by a
/// caller-supplied (app, user) identity pair.
pub trait ReportDocSource {
    fn fetch_reports(&self, app_id: &str, user_id: &str) -> AppResult<Vec<ReportPayload>>;
}

/// Directory-backed source laid out the way the cloud exporter writes it:
/// `<root>/artifacts/<app_id>/users/<user_id>/daily_reports/*.json`
pub struct DirDocSource {
    root: PathBuf,
}

impl DirDocSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ReportDocSource for DirDocSource {
    fn fetch_reports(&self, app_id: &str, user_id: &str) -> AppResult<Vec<ReportPayload>> {
        if app_id.is_empty() || user_id.is_empty() {
            return Ok(Vec::new());
        }

        let dir = self
            .root
            .join("artifacts")
            .join(app_id)
            .join("users")
            .join(user_id)
            .join("daily_reports");

        let Ok(entries) = fs::read_dir(&dir) else {
            return Ok(Vec::new());
        };

        let mut out = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            // Unreadable or malformed documents are skipped, not fatal.
            if let Ok(data) = fs::read_to_string(&path)
                && let Ok(payload) = serde_json::from_str::<ReportPayload>(&data)
            {
                out.push(payload);
            }
        }

        out.sort_by(|a, b| b.report_date.cmp(&a.report_date));
        Ok(out)
    }
}
