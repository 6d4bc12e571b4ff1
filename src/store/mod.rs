//! Absence Store boundary.
//!
//! The calendar engine only sees typed snapshots; every backend loads and
//! writes through [`AbsenceStore`]. Loosely typed stored rows pass through
//! [`normalize`] before they reach the engine.

pub mod memory;
pub mod normalize;
pub mod sqlite;

use crate::errors::AppResult;
use crate::models::absence::AbsenceRecord;
use crate::models::absence_type::AbsenceType;
use crate::models::employee::Employee;
use chrono::NaiveDate;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

pub trait AbsenceStore {
    fn load_employees(&mut self) -> AppResult<Vec<Employee>>;

    fn load_absences(&mut self) -> AppResult<Vec<AbsenceRecord>>;

    fn find_employee(&mut self, id: &str) -> AppResult<Option<Employee>>;

    fn find_absence(&mut self, employee_id: &str, date: NaiveDate)
    -> AppResult<Option<AbsenceType>>;

    fn add_employee(&mut self, employee: &Employee) -> AppResult<()>;

    /// Removes the employee and all of their absences.
    fn remove_employee(&mut self, id: &str) -> AppResult<()>;

    /// Insert or replace the record for (employee_id, date).
    fn set_absence(&mut self, record: &AbsenceRecord) -> AppResult<()>;

    /// Remove the record for (employee_id, date); absent records are a no-op.
    fn clear_absence(&mut self, employee_id: &str, date: NaiveDate) -> AppResult<()>;

    /// Append an entry to the backend's audit trail, if it keeps one.
    fn audit(&mut self, _operation: &str, _target: &str, _message: &str) -> AppResult<()> {
        Ok(())
    }
}
