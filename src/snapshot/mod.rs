//! Session-keyed JSON mirror of saved report payloads.
//!
//! The snapshot store is a best-effort secondary write: the relational
//! database stays authoritative, and a stale or missing snapshot is never
//! reconciled back. One editing session owns exactly one snapshot file,
//! rewritten in full on every save; a new session allocates a new file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::Local;

use crate::errors::{AppError, AppResult};
use crate::models::payload::ReportPayload;

const SESSION_POINTER: &str = ".session";

/// One continuous editing session. The first save allocates a snapshot
/// file and the session keeps that key for its remaining lifetime.
#[derive(Debug, Clone, Default)]
pub struct Session {
    current_file: Option<PathBuf>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_file(&self) -> Option<&Path> {
        self.current_file.as_deref()
    }
}

pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn ensure_dir(&self) -> AppResult<()> {
        fs::create_dir_all(&self.dir)?;
        Ok(())
    }

    /// Resume the session recorded in the pointer file, or start fresh if
    /// there is none (or its file has disappeared).
    pub fn open_session(&self) -> Session {
        let pointer = self.dir.join(SESSION_POINTER);
        let current_file = fs::read_to_string(&pointer)
            .ok()
            .map(|name| self.dir.join(name.trim()))
            .filter(|p| p.is_file());
        Session { current_file }
    }

    /// Persist the session key so a later process resumes the same file.
    pub fn remember_session(&self, session: &Session) -> AppResult<()> {
        let pointer = self.dir.join(SESSION_POINTER);
        match session.current_file.as_ref().and_then(|p| p.file_name()) {
            Some(name) => fs::write(&pointer, name.to_string_lossy().as_bytes())?,
            None => {
                fs::remove_file(&pointer).ok();
            }
        }
        Ok(())
    }

    /// Forget the current session: the next save allocates a new file.
    pub fn reset_session(&self) {
        fs::remove_file(self.dir.join(SESSION_POINTER)).ok();
    }

    /// Snapshot files sorted by newest first.
    pub fn list(&self) -> Vec<PathBuf> {
        let Ok(entries) = fs::read_dir(&self.dir) else {
            return Vec::new();
        };
        let mut files: Vec<PathBuf> = entries
            .flatten()
            .map(|e| e.path())
            .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("json"))
            .collect();
        files.sort_by_key(|p| {
            std::cmp::Reverse(
                fs::metadata(p)
                    .and_then(|m| m.modified())
                    .unwrap_or(SystemTime::UNIX_EPOCH),
            )
        });
        files
    }

    /// Allocate a file name from the wall clock plus a per-day sequence
    /// number, so two sessions created in the same second stay distinct.
    fn new_session_file(&self) -> AppResult<PathBuf> {
        self.ensure_dir()?;
        let now = Local::now();
        let stamp = now.format("%Y%m%d-%H%M%S").to_string();
        let today_prefix = now.format("%Y%m%d").to_string();
        let seq = self
            .list()
            .iter()
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(&today_prefix))
            })
            .count()
            + 1;
        Ok(self.dir.join(format!("{stamp}-{seq:02}.json")))
    }

    /// Write the payload to the session's snapshot file, allocating one on
    /// first use. Last write wins: the file is rewritten in full.
    pub fn snapshot(&self, session: &mut Session, payload: &ReportPayload) -> AppResult<PathBuf> {
        let file = match session.current_file.clone() {
            Some(f) => f,
            None => {
                let f = self.new_session_file()?;
                session.current_file = Some(f.clone());
                f
            }
        };

        let json = serde_json::to_string_pretty(payload)
            .map_err(|e| AppError::Snapshot(format!("cannot serialize payload: {e}")))?;
        fs::write(&file, json)?;
        Ok(file)
    }

    /// Read a snapshot back. Unreadable or malformed files yield None;
    /// this never raises.
    pub fn load(&self, key: &Path) -> Option<ReportPayload> {
        let path = if key.is_absolute() {
            key.to_path_buf()
        } else {
            self.dir.join(key)
        };
        let data = fs::read_to_string(path).ok()?;
        serde_json::from_str(&data).ok()
    }
}
