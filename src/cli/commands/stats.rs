use crate::config::Config;
use crate::core::report::Report;
use crate::errors::AppResult;
use crate::store::{AbsenceStore, SqliteStore};
use crate::ui::messages::header;
use crate::utils::table::{Column, Table};

pub fn handle(year: Option<i32>, cfg: &Config) -> AppResult<()> {
    let mut store = SqliteStore::open(&cfg.database)?;
    let employees = store.load_employees()?;
    let absences = store.load_absences()?;

    let report = Report::build(&employees, &absences, year);

    match report.year {
        Some(y) => header(format!("Statistik {}", y)),
        None => header("Statistik"),
    }
    println!("Employees:    {}", report.total_employees);
    println!("Absence days: {}\n", report.total_absences);

    for (kind, count) in &report.by_type {
        println!("  {:<16} {}", kind.label(), count);
    }
    println!();
    for (dept, count) in &report.by_department {
        println!("  {:<16} {} employees", dept.label(), count);
    }
    println!();

    let mut table = Table::new(vec![
        Column::new("Name", 24),
        Column::new("Urlaub", 7),
        Column::new("Übst.", 7),
        Column::new("Krank", 7),
        Column::new("Gesamt", 7),
    ]);
    for t in &report.employees {
        table.add_row(vec![
            t.employee.name.clone(),
            t.vacation.to_string(),
            t.overtime.to_string(),
            t.sick.to_string(),
            t.total().to_string(),
        ]);
    }
    println!("{}", table.render());

    Ok(())
}
