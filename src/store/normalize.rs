//! Validation of stored rows into typed values.

use crate::core::calendar::DATE_FMT;
use crate::errors::{AppError, AppResult};
use crate::models::absence::AbsenceRecord;
use crate::models::absence_type::AbsenceType;
use crate::models::department::Department;
use crate::models::employee::Employee;
use chrono::NaiveDate;
use serde::Deserialize;

/// Employee row as it may come out of storage.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEmployee {
    pub id: Option<String>,
    pub name: Option<String>,
    pub department: Option<String>,
}

/// Absence row as it may come out of storage.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAbsence {
    pub employee_id: Option<String>,
    pub date: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

fn required(value: Option<String>, what: &str) -> AppResult<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Validation(format!("missing {}", what)))
}

/// Missing or unknown departments become [`Department::Office`] so no
/// employee disappears from the grid; id and name are mandatory.
pub fn normalize_employee(raw: RawEmployee) -> AppResult<Employee> {
    let id = required(raw.id, "employee id")?;
    let name = required(raw.name, &format!("name for employee {}", id))?;
    let department = raw
        .department
        .as_deref()
        .and_then(|d| Department::from_db_str(d).or_else(|| Department::from_code(d)))
        .unwrap_or(Department::Office);

    Ok(Employee {
        id,
        name,
        department,
    })
}

pub fn normalize_absence(raw: RawAbsence) -> AppResult<AbsenceRecord> {
    let employee_id = required(raw.employee_id, "absence employee id")?;
    let date_str = required(raw.date, "absence date")?;
    let date = NaiveDate::parse_from_str(&date_str, DATE_FMT)
        .map_err(|_| AppError::Validation(format!("invalid absence date '{}'", date_str)))?;
    let kind_str = required(raw.kind, "absence type")?;
    let kind = AbsenceType::from_db_str(&kind_str)
        .or_else(|| AbsenceType::from_code(&kind_str))
        .ok_or_else(|| AppError::Validation(format!("invalid absence type '{}'", kind_str)))?;

    Ok(AbsenceRecord {
        employee_id,
        date,
        kind,
    })
}
