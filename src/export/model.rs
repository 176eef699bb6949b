// src/export/model.rs

use serde::Serialize;

use crate::models::report::ReportView;

/// Flat per-row shape for CSV export: one record per child row, tagged
/// with its section.
#[derive(Serialize, Clone, Debug)]
pub struct ReportRowExport {
    pub report_id: i64,
    pub project_name: String,
    pub report_date: String,
    pub section: String,
    pub item: String,
    pub quantity: f64,
    pub hours: f64,
    pub status: String,
    pub percent_complete: i64,
    pub unit: String,
    pub supplier: String,
    pub ticket_number: String,
    pub notes: String,
}

impl ReportRowExport {
    fn base(view: &ReportView, section: &str, item: &str) -> Self {
        Self {
            report_id: view.report_id.unwrap_or(0),
            project_name: view.project_name.clone(),
            report_date: view
                .report_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            section: section.to_string(),
            item: item.to_string(),
            quantity: 0.0,
            hours: 0.0,
            status: String::new(),
            percent_complete: 0,
            unit: String::new(),
            supplier: String::new(),
            ticket_number: String::new(),
            notes: String::new(),
        }
    }
}

/// Flatten a report view into export rows, section by section.
pub(crate) fn rows_for_view(view: &ReportView) -> Vec<ReportRowExport> {
    let mut rows = Vec::new();

    for m in &view.manpower {
        let mut row = ReportRowExport::base(view, "manpower", &m.trade);
        row.quantity = m.number_of_workers as f64;
        row.hours = m.hours_worked;
        rows.push(row);
    }

    for e in &view.equipment {
        let mut row = ReportRowExport::base(view, "equipment", &e.equipment_name);
        row.quantity = e.quantity as f64;
        row.hours = e.hours_used;
        rows.push(row);
    }

    for a in &view.activities {
        let mut row = ReportRowExport::base(view, "activity", &a.activity_description);
        row.status = a.status.clone();
        row.percent_complete = a.percent_complete;
        row.notes = a.notes.clone();
        rows.push(row);
    }

    for m in &view.materials {
        let mut row = ReportRowExport::base(view, "material", &m.material_name);
        row.quantity = m.quantity;
        row.unit = m.unit.clone();
        row.supplier = m.supplier.clone();
        row.ticket_number = m.ticket_number.clone();
        rows.push(row);
    }

    rows
}
