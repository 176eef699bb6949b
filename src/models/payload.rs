//! Report payload as supplied by the entry-form collaborator.
//!
//! This is the external contract: header fields plus four ordered sequences
//! of loosely-typed row records. The same shape is written verbatim to the
//! session snapshot files, so it round-trips through serde_json unchanged.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Loosely-typed row record (field name → value), exactly as the caller
/// sends it. Typed coercion happens once, in `models::rows`.
pub type RawRecord = Map<String, Value>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportPayload {
    #[serde(default)]
    pub project_name: String,

    /// ISO-8601 date ("YYYY-MM-DD") or absent.
    #[serde(default)]
    pub report_date: Option<NaiveDate>,

    #[serde(default)]
    pub prepared_by: String,
    #[serde(default)]
    pub weather: String,
    #[serde(default)]
    pub site_conditions: String,
    #[serde(default)]
    pub general_notes: String,

    #[serde(default)]
    pub manpower: Vec<RawRecord>,
    #[serde(default)]
    pub equipment: Vec<RawRecord>,
    #[serde(default)]
    pub activities: Vec<RawRecord>,
    #[serde(default)]
    pub materials: Vec<RawRecord>,

    /// UTC save timestamp with "Z" suffix; stamped right before the
    /// snapshot write.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,
}

impl ReportPayload {
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn minimal_payload_deserializes_with_defaults() {
        let p = ReportPayload::from_json(r#"{"project_name": "Line 5"}"#).unwrap();
        assert_eq!(p.project_name, "Line 5");
        assert_eq!(p.report_date, None);
        assert!(p.manpower.is_empty());
        assert!(p.saved_at.is_none());
    }

    #[test]
    fn report_date_parses_iso() {
        let p = ReportPayload::from_json(r#"{"report_date": "2025-08-01"}"#).unwrap();
        assert_eq!(p.report_date, NaiveDate::from_ymd_opt(2025, 8, 1));
    }

    #[test]
    fn null_report_date_is_absent() {
        let p = ReportPayload::from_json(r#"{"report_date": null}"#).unwrap();
        assert_eq!(p.report_date, None);
    }
}
