use crate::errors::{AppError, AppResult};
use crate::models::report::Project;
use rusqlite::{Connection, OptionalExtension, params};

/// Get-or-create a project by its unique name.
///
/// Insert-on-conflict-ignore followed by a lookup: the row exists after
/// this call no matter which of two concurrent writers won the insert.
pub fn resolve_project(conn: &Connection, name: &str) -> AppResult<i64> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Project name is required".to_string()));
    }

    conn.execute(
        "INSERT INTO Projects (project_name) VALUES (?1) ON CONFLICT(project_name) DO NOTHING",
        params![name],
    )?;

    let id: i64 = conn.query_row(
        "SELECT project_id FROM Projects WHERE project_name = ?1",
        params![name],
        |row| row.get(0),
    )?;
    Ok(id)
}

/// Lookup without the create side effect, for read-only commands.
pub fn find_project_by_name(conn: &Connection, name: &str) -> AppResult<Option<i64>> {
    let id = conn
        .query_row(
            "SELECT project_id FROM Projects WHERE project_name = ?1",
            params![name.trim()],
            |row| row.get(0),
        )
        .optional()?;
    Ok(id)
}

/// All known projects, ordered by name.
pub fn list_projects(conn: &Connection) -> AppResult<Vec<Project>> {
    let mut stmt = conn.prepare_cached(
        "SELECT project_id, project_name, location, start_date, end_date \
         FROM Projects \
         ORDER BY project_name ASC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(Project {
            project_id: row.get(0)?,
            project_name: row.get(1)?,
            location: row.get(2)?,
            start_date: row.get(3)?,
            end_date: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
