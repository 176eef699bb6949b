use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the report tables if they do not exist.
///
/// Non-destructive: no table is dropped or altered once created. Safe to
/// call on every process start, and the write path calls it before every
/// save so a fresh database file is usable immediately.
pub fn ensure_schema(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS Projects (
            project_id INTEGER PRIMARY KEY AUTOINCREMENT,
            project_name TEXT NOT NULL UNIQUE,
            location TEXT,
            start_date DATE,
            end_date DATE
        );

        CREATE TABLE IF NOT EXISTS DailyReports (
            report_id INTEGER PRIMARY KEY AUTOINCREMENT,
            project_id INTEGER NOT NULL,
            report_date DATE NOT NULL,
            weather TEXT,
            site_conditions TEXT,
            general_notes TEXT,
            prepared_by TEXT,
            FOREIGN KEY (project_id) REFERENCES Projects (project_id)
        );

        CREATE TABLE IF NOT EXISTS ManpowerLog (
            log_id INTEGER PRIMARY KEY AUTOINCREMENT,
            report_id INTEGER NOT NULL,
            trade TEXT NOT NULL,
            number_of_workers INTEGER NOT NULL,
            hours_worked REAL NOT NULL,
            FOREIGN KEY (report_id) REFERENCES DailyReports (report_id)
        );

        CREATE TABLE IF NOT EXISTS EquipmentLog (
            log_id INTEGER PRIMARY KEY AUTOINCREMENT,
            report_id INTEGER NOT NULL,
            equipment_name TEXT NOT NULL,
            quantity INTEGER NOT NULL,
            hours_used REAL NOT NULL,
            FOREIGN KEY (report_id) REFERENCES DailyReports (report_id)
        );

        CREATE TABLE IF NOT EXISTS MaterialDeliveries (
            delivery_id INTEGER PRIMARY KEY AUTOINCREMENT,
            report_id INTEGER NOT NULL,
            material_name TEXT NOT NULL,
            quantity REAL NOT NULL,
            unit TEXT NOT NULL,
            supplier TEXT,
            ticket_number TEXT,
            FOREIGN KEY (report_id) REFERENCES DailyReports (report_id)
        );

        CREATE TABLE IF NOT EXISTS WorkActivities (
            activity_id INTEGER PRIMARY KEY AUTOINCREMENT,
            report_id INTEGER NOT NULL,
            activity_description TEXT NOT NULL,
            status TEXT CHECK(status IN ('Not Started', 'In Progress', 'Completed', 'Delayed')),
            percent_complete INTEGER,
            notes TEXT,
            FOREIGN KEY (report_id) REFERENCES DailyReports (report_id)
        );

        CREATE TABLE IF NOT EXISTS log (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date TEXT NOT NULL,
            operation TEXT NOT NULL,
            target TEXT DEFAULT '',
            message TEXT NOT NULL
        );
        ",
    )?;
    Ok(())
}
