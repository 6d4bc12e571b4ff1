//! Absence statistics per year: totals by type and head count by department.

use crate::core::roster;
use crate::models::absence::AbsenceRecord;
use crate::models::absence_type::AbsenceType;
use crate::models::department::Department;
use crate::models::employee::Employee;
use chrono::Datelike;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct EmployeeTally {
    pub employee: Employee,
    pub vacation: usize,
    pub overtime: usize,
    pub sick: usize,
}

impl EmployeeTally {
    pub fn total(&self) -> usize {
        self.vacation + self.overtime + self.sick
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub year: Option<i32>,
    pub total_employees: usize,
    pub total_absences: usize,
    pub by_type: Vec<(AbsenceType, usize)>,
    pub by_department: Vec<(Department, usize)>,
    pub employees: Vec<EmployeeTally>,
}

impl Report {
    /// Count absences of `year` (all years when `None`). Records of unknown
    /// employees are ignored.
    pub fn build(employees: &[Employee], absences: &[AbsenceRecord], year: Option<i32>) -> Self {
        let counted: Vec<&AbsenceRecord> = absences
            .iter()
            .filter(|r| {
                year.is_none_or(|y| r.date.year() == y)
                    && employees.iter().any(|e| e.id == r.employee_id)
            })
            .collect();

        let by_type = AbsenceType::ALL
            .iter()
            .map(|t| (*t, counted.iter().filter(|r| r.kind == *t).count()))
            .collect();

        let by_department = Department::ALL
            .iter()
            .map(|d| (*d, employees.iter().filter(|e| e.department == *d).count()))
            .collect();

        let tallies = roster::group(employees)
            .into_iter()
            .flat_map(|(_, members)| members)
            .map(|employee| {
                let count = |t: AbsenceType| {
                    counted
                        .iter()
                        .filter(|r| r.employee_id == employee.id && r.kind == t)
                        .count()
                };
                let vacation = count(AbsenceType::Vacation);
                let overtime = count(AbsenceType::Overtime);
                let sick = count(AbsenceType::Sick);
                EmployeeTally {
                    employee,
                    vacation,
                    overtime,
                    sick,
                }
            })
            .collect();

        Report {
            year,
            total_employees: employees.len(),
            total_absences: counted.len(),
            by_type,
            by_department,
            employees: tallies,
        }
    }

    pub fn count_for(&self, kind: AbsenceType) -> usize {
        self.by_type
            .iter()
            .find(|(t, _)| *t == kind)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}
