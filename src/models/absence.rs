use crate::models::absence_type::AbsenceType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One marked day of leave. At most one record exists per (employee_id, date).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbsenceRecord {
    pub employee_id: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: AbsenceType,
}

impl AbsenceRecord {
    pub fn new(employee_id: impl Into<String>, date: NaiveDate, kind: AbsenceType) -> Self {
        Self {
            employee_id: employee_id.into(),
            date,
            kind,
        }
    }
}

/// Absences of a single employee, keyed by day.
pub type AbsenceByDate = HashMap<NaiveDate, AbsenceType>;

/// Index a flat record list as employee id → (date → type).
pub fn index_by_employee(records: &[AbsenceRecord]) -> HashMap<String, AbsenceByDate> {
    let mut out: HashMap<String, AbsenceByDate> = HashMap::new();
    for r in records {
        out.entry(r.employee_id.clone())
            .or_default()
            .insert(r.date, r.kind);
    }
    out
}
