use chrono::Utc;
use rusqlite::{Connection, params};

/// Append one row to the internal audit log table.
pub fn audit(conn: &Connection, operation: &str, target: &str, message: &str) -> rusqlite::Result<()> {
    let now = Utc::now().to_rfc3339(); // ISO 8601
    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message) VALUES (?1, ?2, ?3, ?4)",
    )?;
    stmt.execute(params![&now, operation, target, message])?;
    Ok(())
}
