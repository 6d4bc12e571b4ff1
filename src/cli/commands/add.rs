use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::employee::EmployeeLogic;
use crate::errors::{AppError, AppResult};
use crate::models::department::Department;
use crate::store::SqliteStore;
use crate::ui::messages::success;

/// Add an employee to the roster.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { name, dept } = cmd {
        let department =
            Department::from_code(dept).ok_or_else(|| AppError::InvalidDepartment(dept.clone()))?;

        let mut store = SqliteStore::open(&cfg.database)?;
        let employee = EmployeeLogic::add(&mut store, name, department)?;

        success(format!(
            "Added {} to {} (id {})",
            employee.name,
            department.label(),
            employee.id
        ));
    }

    Ok(())
}
