//! Report writer and reader: the transactional multi-table save and the
//! joined read-side reconstruction.

use std::fmt;

use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, params};

use crate::db::log::audit;
use crate::db::projects::resolve_project;
use crate::errors::{AppError, AppResult};
use crate::models::payload::ReportPayload;
use crate::models::report::{ReportSummary, ReportView};
use crate::models::rows::{ActivityRow, EquipmentRow, ManpowerRow, MaterialRow};

/// Why a save was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Caller must fix the input; retrying unchanged cannot succeed.
    Validation,
    /// Store-side failure with rollback already applied; the whole
    /// operation is safe to retry.
    Storage,
}

/// Structured save failure. The writer converts every internal error into
/// one of these instead of letting it escape.
#[derive(Debug, Clone)]
pub struct SaveFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl SaveFailure {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Validation,
            message: message.into(),
        }
    }

    pub fn storage(err: impl fmt::Display) -> Self {
        Self {
            kind: FailureKind::Storage,
            message: err.to_string(),
        }
    }
}

impl fmt::Display for SaveFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Persist one report: header plus all four child collections, atomically.
///
/// Validates up front, coerces child rows once (blank-keyed rows are
/// dropped), then runs resolve-project → insert-header → insert-children
/// inside a single transaction. On any error the transaction rolls back
/// and no partial state survives, the project row included.
pub fn save_report(conn: &mut Connection, payload: &ReportPayload) -> Result<i64, SaveFailure> {
    if payload.project_name.trim().is_empty() {
        return Err(SaveFailure::validation("Project name is required."));
    }
    let report_date = payload
        .report_date
        .ok_or_else(|| SaveFailure::validation("Report date is required."))?;

    let manpower = ManpowerRow::from_records(&payload.manpower);
    let equipment = EquipmentRow::from_records(&payload.equipment);
    let activities = ActivityRow::from_records(&payload.activities);
    let materials = MaterialRow::from_records(&payload.materials);

    let tx = conn.transaction().map_err(SaveFailure::storage)?;

    let result = (|| -> AppResult<i64> {
        let project_id = resolve_project(&tx, &payload.project_name)?;
        let report_id = insert_header(&tx, project_id, report_date, payload)?;
        insert_manpower(&tx, report_id, &manpower)?;
        insert_equipment(&tx, report_id, &equipment)?;
        insert_activities(&tx, report_id, &activities)?;
        insert_materials(&tx, report_id, &materials)?;
        audit(
            &tx,
            "save",
            &format!("report {report_id}"),
            &format!(
                "daily report for '{}' on {}",
                payload.project_name.trim(),
                report_date.format("%Y-%m-%d")
            ),
        )?;
        Ok(report_id)
    })();

    match result {
        Ok(report_id) => {
            tx.commit().map_err(SaveFailure::storage)?;
            Ok(report_id)
        }
        // Dropping the transaction rolls everything back.
        Err(AppError::Validation(msg)) => Err(SaveFailure::validation(msg)),
        Err(e) => Err(SaveFailure::storage(e)),
    }
}

fn insert_header(
    conn: &Connection,
    project_id: i64,
    report_date: NaiveDate,
    p: &ReportPayload,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO DailyReports (project_id, report_date, weather, site_conditions, general_notes, prepared_by) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            project_id,
            report_date.format("%Y-%m-%d").to_string(),
            p.weather,
            p.site_conditions,
            p.general_notes,
            p.prepared_by,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

fn insert_manpower(conn: &Connection, report_id: i64, rows: &[ManpowerRow]) -> AppResult<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO ManpowerLog (report_id, trade, number_of_workers, hours_worked) \
         VALUES (?1, ?2, ?3, ?4)",
    )?;
    for row in rows {
        stmt.execute(params![
            report_id,
            row.trade,
            row.number_of_workers,
            row.hours_worked
        ])?;
    }
    Ok(())
}

fn insert_equipment(conn: &Connection, report_id: i64, rows: &[EquipmentRow]) -> AppResult<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO EquipmentLog (report_id, equipment_name, quantity, hours_used) \
         VALUES (?1, ?2, ?3, ?4)",
    )?;
    for row in rows {
        stmt.execute(params![
            report_id,
            row.equipment_name,
            row.quantity,
            row.hours_used
        ])?;
    }
    Ok(())
}

fn insert_activities(conn: &Connection, report_id: i64, rows: &[ActivityRow]) -> AppResult<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO WorkActivities (report_id, activity_description, status, percent_complete, notes) \
         VALUES (?1, ?2, ?3, ?4, ?5)",
    )?;
    for row in rows {
        stmt.execute(params![
            report_id,
            row.activity_description,
            row.status,
            row.percent_complete,
            row.notes
        ])?;
    }
    Ok(())
}

fn insert_materials(conn: &Connection, report_id: i64, rows: &[MaterialRow]) -> AppResult<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO MaterialDeliveries (report_id, material_name, quantity, unit, supplier, ticket_number) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )?;
    for row in rows {
        stmt.execute(params![
            report_id,
            row.material_name,
            row.quantity,
            row.unit,
            row.supplier,
            row.ticket_number
        ])?;
    }
    Ok(())
}

fn parse_report_date(date_str: String) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str)),
        )
    })
}

/// Reports for one project, most recent date first.
pub fn list_reports(conn: &Connection, project_id: i64) -> AppResult<Vec<ReportSummary>> {
    let mut stmt = conn.prepare_cached(
        "SELECT report_id, report_date FROM DailyReports \
         WHERE project_id = ?1 \
         ORDER BY report_date DESC, report_id DESC",
    )?;
    let rows = stmt.query_map([project_id], |row| {
        Ok(ReportSummary {
            report_id: row.get(0)?,
            report_date: parse_report_date(row.get(1)?)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Reconstruct the full view for one report: header joined to its project
/// name, plus exactly the child rows whose foreign key matches.
pub fn load_report(conn: &Connection, report_id: i64) -> AppResult<ReportView> {
    let header = conn
        .query_row(
            "SELECT r.report_id, r.report_date, r.weather, r.site_conditions, r.general_notes, r.prepared_by, p.project_name \
             FROM DailyReports r \
             JOIN Projects p ON p.project_id = r.project_id \
             WHERE r.report_id = ?1",
            [report_id],
            |row| {
                Ok(ReportView {
                    report_id: Some(row.get(0)?),
                    report_date: Some(parse_report_date(row.get(1)?)?),
                    weather: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                    site_conditions: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                    general_notes: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
                    prepared_by: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
                    project_name: row.get(6)?,
                    manpower: Vec::new(),
                    equipment: Vec::new(),
                    activities: Vec::new(),
                    materials: Vec::new(),
                })
            },
        )
        .optional()?;

    let Some(mut view) = header else {
        return Err(AppError::NotFound(format!(
            "Report {report_id} does not exist"
        )));
    };

    view.manpower = load_manpower(conn, report_id)?;
    view.equipment = load_equipment(conn, report_id)?;
    view.activities = load_activities(conn, report_id)?;
    view.materials = load_materials(conn, report_id)?;
    Ok(view)
}

fn load_manpower(conn: &Connection, report_id: i64) -> AppResult<Vec<ManpowerRow>> {
    let mut stmt = conn.prepare_cached(
        "SELECT trade, number_of_workers, hours_worked FROM ManpowerLog \
         WHERE report_id = ?1 \
         ORDER BY log_id ASC",
    )?;
    let rows = stmt.query_map([report_id], |row| {
        Ok(ManpowerRow {
            trade: row.get(0)?,
            number_of_workers: row.get(1)?,
            hours_worked: row.get(2)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn load_equipment(conn: &Connection, report_id: i64) -> AppResult<Vec<EquipmentRow>> {
    let mut stmt = conn.prepare_cached(
        "SELECT equipment_name, quantity, hours_used FROM EquipmentLog \
         WHERE report_id = ?1 \
         ORDER BY log_id ASC",
    )?;
    let rows = stmt.query_map([report_id], |row| {
        Ok(EquipmentRow {
            equipment_name: row.get(0)?,
            quantity: row.get(1)?,
            hours_used: row.get(2)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn load_activities(conn: &Connection, report_id: i64) -> AppResult<Vec<ActivityRow>> {
    let mut stmt = conn.prepare_cached(
        "SELECT activity_description, status, percent_complete, notes FROM WorkActivities \
         WHERE report_id = ?1 \
         ORDER BY activity_id ASC",
    )?;
    let rows = stmt.query_map([report_id], |row| {
        Ok(ActivityRow {
            activity_description: row.get(0)?,
            status: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            percent_complete: row.get::<_, Option<i64>>(2)?.unwrap_or(0),
            notes: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn load_materials(conn: &Connection, report_id: i64) -> AppResult<Vec<MaterialRow>> {
    let mut stmt = conn.prepare_cached(
        "SELECT material_name, quantity, unit, supplier, ticket_number FROM MaterialDeliveries \
         WHERE report_id = ?1 \
         ORDER BY delivery_id ASC",
    )?;
    let rows = stmt.query_map([report_id], |row| {
        Ok(MaterialRow {
            material_name: row.get(0)?,
            quantity: row.get(1)?,
            unit: row.get(2)?,
            supplier: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            ticket_number: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
