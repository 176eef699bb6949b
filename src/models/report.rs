//! Read-side view models: project rows, report summaries and the fully
//! reconstructed report view.

use chrono::NaiveDate;
use serde::Serialize;

use super::payload::ReportPayload;
use super::rows::{ActivityRow, EquipmentRow, ManpowerRow, MaterialRow};

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub project_id: i64,
    pub project_name: String,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// One line of the report picker: id + date, newest first.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub report_id: i64,
    pub report_date: NaiveDate,
}

/// Header plus all four child collections, joined to the project name.
#[derive(Debug, Clone, Serialize)]
pub struct ReportView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_id: Option<i64>,
    pub project_name: String,
    pub report_date: Option<NaiveDate>,
    pub prepared_by: String,
    pub weather: String,
    pub site_conditions: String,
    pub general_notes: String,
    pub manpower: Vec<ManpowerRow>,
    pub equipment: Vec<EquipmentRow>,
    pub activities: Vec<ActivityRow>,
    pub materials: Vec<MaterialRow>,
}

impl ReportView {
    /// Reconstruct a view from a payload-shaped document (session snapshot
    /// or external document source) through the same coercion as the writer.
    pub fn from_payload(p: &ReportPayload) -> Self {
        Self {
            report_id: None,
            project_name: p.project_name.trim().to_string(),
            report_date: p.report_date,
            prepared_by: p.prepared_by.clone(),
            weather: p.weather.clone(),
            site_conditions: p.site_conditions.clone(),
            general_notes: p.general_notes.clone(),
            manpower: ManpowerRow::from_records(&p.manpower),
            equipment: EquipmentRow::from_records(&p.equipment),
            activities: ActivityRow::from_records(&p.activities),
            materials: MaterialRow::from_records(&p.materials),
        }
    }

    /// Total manpower hours per trade, in first-seen order.
    pub fn manpower_hours_by_trade(&self) -> Vec<(String, f64)> {
        let mut totals: Vec<(String, f64)> = Vec::new();
        for row in &self.manpower {
            match totals.iter_mut().find(|(t, _)| *t == row.trade) {
                Some((_, h)) => *h += row.hours_worked,
                None => totals.push((row.trade.clone(), row.hours_worked)),
            }
        }
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::payload::ReportPayload;

    #[test]
    fn from_payload_drops_blank_rows() {
        let p = ReportPayload::from_json(
            r#"{
                "project_name": " Line 5 ",
                "report_date": "2025-08-01",
                "manpower": [
                    {"trade": "Electricians", "number_of_workers": 4, "hours_worked": 8.0},
                    {"trade": "", "number_of_workers": 1, "hours_worked": 1.0}
                ]
            }"#,
        )
        .unwrap();
        let view = ReportView::from_payload(&p);
        assert_eq!(view.project_name, "Line 5");
        assert_eq!(view.manpower.len(), 1);
        assert!(view.report_id.is_none());
    }

    #[test]
    fn hours_by_trade_accumulates() {
        let p = ReportPayload::from_json(
            r#"{
                "manpower": [
                    {"trade": "Electricians", "number_of_workers": 4, "hours_worked": 8.0},
                    {"trade": "Riggers", "number_of_workers": 2, "hours_worked": 6.0},
                    {"trade": "Electricians", "number_of_workers": 1, "hours_worked": 2.0}
                ]
            }"#,
        )
        .unwrap();
        let view = ReportView::from_payload(&p);
        assert_eq!(
            view.manpower_hours_by_trade(),
            vec![("Electricians".to_string(), 10.0), ("Riggers".to_string(), 6.0)]
        );
    }
}
