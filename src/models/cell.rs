use crate::models::absence_type::AbsenceType;
use chrono::NaiveDate;
use serde::Serialize;

/// Resolved classification of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CellCategory {
    Vacation,
    Overtime,
    Sick,
    PublicHoliday,
    SchoolHoliday,
    Weekend,
    Plain,
}

impl From<AbsenceType> for CellCategory {
    fn from(kind: AbsenceType) -> Self {
        match kind {
            AbsenceType::Vacation => CellCategory::Vacation,
            AbsenceType::Overtime => CellCategory::Overtime,
            AbsenceType::Sick => CellCategory::Sick,
        }
    }
}

impl CellCategory {
    pub fn is_absence(&self) -> bool {
        matches!(
            self,
            CellCategory::Vacation | CellCategory::Overtime | CellCategory::Sick
        )
    }
}

/// Output contract of the classifier for a single (employee, date) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub date: NaiveDate,
    pub category: CellCategory,
    pub label: String,
    pub interactive: bool,
    pub is_today: bool,
}
