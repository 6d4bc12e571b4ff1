use crate::cli::commands::holiday_table;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::{next_month, parse_month, previous_month};
use crate::core::logic::MonthContext;
use crate::errors::AppResult;
use crate::store::{AbsenceStore, SqliteStore};
use crate::ui::grid::{GridOptions, legend, render};
use crate::ui::messages::{info, warning};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show {
        month,
        prev,
        next,
        plain,
    } = cmd
    {
        let (mut year, mut m) = match month {
            Some(s) => parse_month(s)?,
            None => date::current_month(),
        };
        if *prev {
            (year, m) = previous_month(year, m);
        } else if *next {
            (year, m) = next_month(year, m);
        }

        let table = holiday_table(cfg);
        let ctx = MonthContext::new(&table, year, m);

        if !table.has_year(year) {
            let years: Vec<String> = table.years().map(|y| y.to_string()).collect();
            warning(format!("No holiday data available for {}.", year));
            println!(
                "Für das Jahr {} sind keine Feiertagsdaten hinterlegt. Verfügbare Jahre: {}",
                year,
                years.join(", ")
            );
            return Ok(());
        }

        // Load failures surface here, before anything is rendered.
        let mut store = SqliteStore::open(&cfg.database)?;
        let employees = store.load_employees()?;
        let absences = store.load_absences()?;

        let grid = ctx.grid(&employees, &absences, date::today());

        let opts = GridOptions {
            color: !*plain && std::env::var_os("NO_COLOR").is_none(),
            show_today: cfg.show_today,
            region: &cfg.region,
        };

        if grid.employee_count() == 0 {
            println!("{}", render(&grid, &opts));
            info("Keine Mitarbeiter vorhanden. Add one with `teamcal add <name>`.");
            return Ok(());
        }

        print!("{}", render(&grid, &opts));
        print!("{}", legend(&grid, &opts));
    }

    Ok(())
}
