//! High-level save flow: relational write first, session snapshot second.

use std::path::PathBuf;

use chrono::{SecondsFormat, Utc};

use crate::config::Config;
use crate::db::initialize::ensure_schema;
use crate::db::pool::DbPool;
use crate::db::reports::{SaveFailure, save_report};
use crate::models::payload::ReportPayload;
use crate::snapshot::{Session, SnapshotStore};

/// What a completed save looked like. The snapshot half is best-effort:
/// its failure is carried here instead of undoing the relational write.
pub struct SaveOutcome {
    pub report_id: i64,
    pub snapshot_file: Option<PathBuf>,
    pub snapshot_error: Option<String>,
}

pub struct SaveLogic;

impl SaveLogic {
    /// Persist the payload to SQLite, then mirror it to the session
    /// snapshot file. `new_session` forces a fresh snapshot key.
    pub fn save(
        cfg: &Config,
        payload: &mut ReportPayload,
        new_session: bool,
    ) -> Result<SaveOutcome, SaveFailure> {
        let mut pool = DbPool::new(&cfg.database).map_err(SaveFailure::storage)?;
        ensure_schema(&pool.conn).map_err(SaveFailure::storage)?;

        let report_id = save_report(&mut pool.conn, payload)?;

        payload.saved_at = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true));

        let store = SnapshotStore::new(&cfg.json_dir);
        let mut session = if new_session {
            store.reset_session();
            Session::new()
        } else {
            store.open_session()
        };

        let (snapshot_file, snapshot_error) = match store.snapshot(&mut session, payload) {
            Ok(path) => {
                store.remember_session(&session).ok();
                (Some(path), None)
            }
            Err(e) => (None, Some(e.to_string())),
        };

        Ok(SaveOutcome {
            report_id,
            snapshot_file,
            snapshot_error,
        })
    }
}
