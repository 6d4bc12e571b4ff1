use crate::core::absence::audit_quietly;
use crate::errors::{AppError, AppResult};
use crate::models::department::Department;
use crate::models::employee::Employee;
use crate::store::AbsenceStore;
use chrono::Utc;

pub struct EmployeeLogic;

/// Millisecond timestamp, bumped until it does not collide with `existing`.
fn next_id(existing: &[Employee]) -> String {
    let mut candidate = Utc::now().timestamp_millis();
    while existing.iter().any(|e| e.id == candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}

impl EmployeeLogic {
    pub fn add<S: AbsenceStore + ?Sized>(
        store: &mut S,
        name: &str,
        department: Department,
    ) -> AppResult<Employee> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::EmptyName);
        }

        let existing = store.load_employees()?;
        let employee = Employee::new(next_id(&existing), name, department);
        store.add_employee(&employee)?;

        audit_quietly(
            store,
            "add",
            &employee.id,
            &format!("{} ({})", employee.name, department.label()),
        );

        Ok(employee)
    }

    /// Remove an employee together with all of their absences.
    pub fn remove<S: AbsenceStore + ?Sized>(store: &mut S, id: &str) -> AppResult<Employee> {
        let employee = store
            .find_employee(id)?
            .ok_or_else(|| AppError::EmployeeNotFound(id.to_string()))?;

        store.remove_employee(id)?;
        audit_quietly(store, "del", id, &employee.name);

        Ok(employee)
    }
}
