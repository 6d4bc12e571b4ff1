use crate::config::Config;
use crate::core::roster;
use crate::errors::AppResult;
use crate::store::{AbsenceStore, SqliteStore};
use crate::ui::messages::{header, info};
use crate::utils::table::{Column, Table};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut store = SqliteStore::open(&cfg.database)?;
    let employees = store.load_employees()?;

    if employees.is_empty() {
        info("No employees yet. Add one with `teamcal add <name>`.");
        return Ok(());
    }

    for (department, members) in roster::group(&employees) {
        if members.is_empty() {
            continue;
        }
        header(department.label());

        let mut table = Table::new(vec![Column::new("ID", 15), Column::new("Name", 30)]);
        for e in members {
            table.add_row(vec![e.id, e.name]);
        }
        println!("{}", table.render());
    }

    Ok(())
}
