use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::employee::EmployeeLogic;
use crate::errors::{AppError, AppResult};
use crate::store::{AbsenceStore, SqliteStore};
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes" | "j" | "ja")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut store = SqliteStore::open(&cfg.database)?;

        let employee = store
            .find_employee(id)?
            .ok_or_else(|| AppError::EmployeeNotFound(id.clone()))?;
        let remaining = store.load_employees()?.len();

        if !*yes {
            let prompt = if remaining == 1 {
                format!(
                    "{} is the last employee. Remove them and empty the roster?",
                    employee.name
                )
            } else {
                format!(
                    "Remove {} and all of their absences? This action is irreversible.",
                    employee.name
                )
            };

            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let removed = EmployeeLogic::remove(&mut store, id)?;
        success(format!("Removed {} (id {})", removed.name, removed.id));
    }

    Ok(())
}
