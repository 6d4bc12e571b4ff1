use crate::core::calendar::{format_date, is_weekend};
use crate::errors::{AppError, AppResult};
use crate::models::absence::AbsenceRecord;
use crate::models::absence_type::AbsenceType;
use crate::store::AbsenceStore;
use crate::ui::messages::warning;
use chrono::NaiveDate;

/// Mutation protocol for a single (employee, day) cell.
pub struct AbsenceLogic;

/// Audit failures are reported and never undo the mutation itself.
pub(crate) fn audit_quietly<S: AbsenceStore + ?Sized>(
    store: &mut S,
    operation: &str,
    target: &str,
    message: &str,
) {
    if let Err(e) = store.audit(operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}

impl AbsenceLogic {
    /// Upsert the absence of `employee_id` on `date`, returning the type it replaced.
    ///
    /// A weekend day only accepts a type when it already holds one.
    pub fn set<S: AbsenceStore + ?Sized>(
        store: &mut S,
        employee_id: &str,
        date: NaiveDate,
        kind: AbsenceType,
    ) -> AppResult<Option<AbsenceType>> {
        if store.find_employee(employee_id)?.is_none() {
            return Err(AppError::EmployeeNotFound(employee_id.to_string()));
        }

        let previous = store.find_absence(employee_id, date)?;
        if previous.is_none() && is_weekend(date) {
            return Err(AppError::NotEditable(format_date(date)));
        }

        store.set_absence(&AbsenceRecord::new(employee_id, date, kind))?;

        let message = match previous {
            Some(old) if old != kind => format!("{} → {}", old.label(), kind.label()),
            _ => kind.label().to_string(),
        };
        audit_quietly(
            store,
            "set",
            &format!("{}@{}", employee_id, format_date(date)),
            &message,
        );

        Ok(previous)
    }

    /// Remove the absence of `employee_id` on `date`. Returns the removed type,
    /// `None` when there was nothing to remove.
    pub fn clear<S: AbsenceStore + ?Sized>(
        store: &mut S,
        employee_id: &str,
        date: NaiveDate,
    ) -> AppResult<Option<AbsenceType>> {
        let previous = store.find_absence(employee_id, date)?;
        store.clear_absence(employee_id, date)?;

        if let Some(old) = previous {
            audit_quietly(
                store,
                "clear",
                &format!("{}@{}", employee_id, format_date(date)),
                old.label(),
            );
        }

        Ok(previous)
    }

    /// Toggle entry point: `Some(type)` sets, `None` clears.
    pub fn apply<S: AbsenceStore + ?Sized>(
        store: &mut S,
        employee_id: &str,
        date: NaiveDate,
        kind: Option<AbsenceType>,
    ) -> AppResult<Option<AbsenceType>> {
        match kind {
            Some(k) => Self::set(store, employee_id, date, k),
            None => Self::clear(store, employee_id, date),
        }
    }
}
