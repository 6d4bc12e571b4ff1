use crate::models::cell::Cell;
use crate::models::department::Department;
use crate::models::employee::Employee;
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct EmployeeRow {
    pub employee: Employee,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone)]
pub struct DepartmentBlock {
    pub department: Department,
    pub rows: Vec<EmployeeRow>,
}

/// Fully classified view of one month.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub days: Vec<NaiveDate>,
    pub blocks: Vec<DepartmentBlock>,
    pub today: NaiveDate,
    /// Public holidays falling into the month, ascending.
    pub public_holidays: Vec<(NaiveDate, String)>,
    /// School-holiday period names touching the month, in order of first day.
    pub school_holidays: Vec<String>,
    /// False when the holiday table has no entry for `year`.
    pub has_holiday_data: bool,
}

impl MonthGrid {
    pub fn employee_count(&self) -> usize {
        self.blocks.iter().map(|b| b.rows.len()).sum()
    }

    /// Column index of `today`, when it lies inside the month.
    pub fn today_column(&self) -> Option<usize> {
        self.days.iter().position(|d| *d == self.today)
    }
}
