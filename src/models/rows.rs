//! Typed child rows and the one-time coercion from loose payload records.
//!
//! Rows whose identifying text field is empty after trimming are dropped
//! here, before any insert. Missing or unparseable numeric values coerce
//! to zero instead of failing the row.
//!
//! Numeric fields accept the relational column names and the shorter
//! aliases used by external report documents ("count", "hours"), so both
//! shapes flow through the same reconstruction.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::payload::RawRecord;

fn field<'a>(rec: &'a RawRecord, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|k| rec.get(*k))
}

/// Trimmed text field; scalars are stringified, null and missing become "".
fn text(rec: &RawRecord, keys: &[&str]) -> String {
    match field(rec, keys) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Integer field; floats truncate, numeric strings parse, everything else is 0.
fn int(rec: &RawRecord, keys: &[&str]) -> i64 {
    match field(rec, keys) {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
                .unwrap_or(0)
        }
        _ => 0,
    }
}

/// Real field; numeric strings parse, everything else is 0.0.
fn float(rec: &RawRecord, keys: &[&str]) -> f64 {
    match field(rec, keys) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManpowerRow {
    pub trade: String,
    pub number_of_workers: i64,
    pub hours_worked: f64,
}

impl ManpowerRow {
    pub fn from_record(rec: &RawRecord) -> Option<Self> {
        let trade = text(rec, &["trade"]);
        if trade.is_empty() {
            return None;
        }
        Some(Self {
            trade,
            number_of_workers: int(rec, &["number_of_workers", "count"]),
            hours_worked: float(rec, &["hours_worked", "hours"]),
        })
    }

    pub fn from_records(records: &[RawRecord]) -> Vec<Self> {
        records.iter().filter_map(Self::from_record).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentRow {
    pub equipment_name: String,
    pub quantity: i64,
    pub hours_used: f64,
}

impl EquipmentRow {
    pub fn from_record(rec: &RawRecord) -> Option<Self> {
        let equipment_name = text(rec, &["equipment_name"]);
        if equipment_name.is_empty() {
            return None;
        }
        Some(Self {
            equipment_name,
            quantity: int(rec, &["quantity"]),
            hours_used: float(rec, &["hours_used", "hours"]),
        })
    }

    pub fn from_records(records: &[RawRecord]) -> Vec<Self> {
        records.iter().filter_map(Self::from_record).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRow {
    pub activity_description: String,
    /// Kept as the caller's string: a missing status defaults to
    /// "In Progress", an invalid one is rejected by the schema CHECK.
    pub status: String,
    pub percent_complete: i64,
    pub notes: String,
}

impl ActivityRow {
    pub fn from_record(rec: &RawRecord) -> Option<Self> {
        let activity_description = text(rec, &["activity_description"]);
        if activity_description.is_empty() {
            return None;
        }
        let status = match rec.get("status") {
            None | Some(Value::Null) => "In Progress".to_string(),
            Some(_) => text(rec, &["status"]),
        };
        Some(Self {
            activity_description,
            status,
            percent_complete: int(rec, &["percent_complete"]),
            notes: text(rec, &["notes"]),
        })
    }

    pub fn from_records(records: &[RawRecord]) -> Vec<Self> {
        records.iter().filter_map(Self::from_record).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRow {
    pub material_name: String,
    pub quantity: f64,
    pub unit: String,
    pub supplier: String,
    pub ticket_number: String,
}

impl MaterialRow {
    pub fn from_record(rec: &RawRecord) -> Option<Self> {
        let material_name = text(rec, &["material_name"]);
        if material_name.is_empty() {
            return None;
        }
        Some(Self {
            material_name,
            quantity: float(rec, &["quantity"]),
            unit: text(rec, &["unit"]),
            supplier: text(rec, &["supplier"]),
            ticket_number: text(rec, &["ticket_number"]),
        })
    }

    pub fn from_records(records: &[RawRecord]) -> Vec<Self> {
        records.iter().filter_map(Self::from_record).collect()
    }
}
