use crate::errors::{AppError, AppResult};
use crate::models::absence::AbsenceRecord;
use crate::models::absence_type::AbsenceType;
use crate::models::employee::Employee;
use crate::store::AbsenceStore;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// In-process store with the same semantics as the SQLite backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    employees: Vec<Employee>,
    absences: BTreeMap<(String, NaiveDate), AbsenceType>,
    log: Vec<(String, String, String)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Audit entries as (operation, target, message).
    pub fn audit_entries(&self) -> &[(String, String, String)] {
        &self.log
    }

    fn ensure_employee(&self, id: &str) -> AppResult<()> {
        if self.employees.iter().any(|e| e.id == id) {
            Ok(())
        } else {
            Err(AppError::EmployeeNotFound(id.to_string()))
        }
    }
}

impl AbsenceStore for MemoryStore {
    fn load_employees(&mut self) -> AppResult<Vec<Employee>> {
        Ok(self.employees.clone())
    }

    fn load_absences(&mut self) -> AppResult<Vec<AbsenceRecord>> {
        Ok(self
            .absences
            .iter()
            .map(|((id, date), kind)| AbsenceRecord::new(id.clone(), *date, *kind))
            .collect())
    }

    fn find_employee(&mut self, id: &str) -> AppResult<Option<Employee>> {
        Ok(self.employees.iter().find(|e| e.id == id).cloned())
    }

    fn find_absence(
        &mut self,
        employee_id: &str,
        date: NaiveDate,
    ) -> AppResult<Option<AbsenceType>> {
        Ok(self
            .absences
            .get(&(employee_id.to_string(), date))
            .copied())
    }

    fn add_employee(&mut self, employee: &Employee) -> AppResult<()> {
        if self.employees.iter().any(|e| e.id == employee.id) {
            return Err(AppError::StoreWrite(format!(
                "employee id {} already exists",
                employee.id
            )));
        }
        self.employees.push(employee.clone());
        Ok(())
    }

    fn remove_employee(&mut self, id: &str) -> AppResult<()> {
        self.ensure_employee(id)?;
        self.employees.retain(|e| e.id != id);
        self.absences.retain(|(emp, _), _| emp != id);
        Ok(())
    }

    fn set_absence(&mut self, record: &AbsenceRecord) -> AppResult<()> {
        self.ensure_employee(&record.employee_id)?;
        self.absences
            .insert((record.employee_id.clone(), record.date), record.kind);
        Ok(())
    }

    fn clear_absence(&mut self, employee_id: &str, date: NaiveDate) -> AppResult<()> {
        self.absences.remove(&(employee_id.to_string(), date));
        Ok(())
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        self.log
            .push((operation.into(), target.into(), message.into()));
        Ok(())
    }
}
