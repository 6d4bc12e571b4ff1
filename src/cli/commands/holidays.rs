use crate::cli::commands::holiday_table;
use crate::config::Config;
use crate::core::calendar::format_date;
use crate::core::holidays::HolidayMaps;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::utils::date;
use crate::utils::table::{Column, Table};
use chrono::Datelike;

pub fn handle(year: Option<i32>, cfg: &Config) -> AppResult<()> {
    let year = year.unwrap_or_else(|| date::today().year());
    let table = holiday_table(cfg);

    if !table.has_year(year) {
        warning(format!("No holiday data available for {}.", year));
        return Ok(());
    }

    let resolved = table.resolve_year(year);
    let maps = HolidayMaps::expand(&resolved);

    header(format!("Gesetzliche Feiertage {} · {}", year, cfg.region));
    let mut public = Table::new(vec![Column::new("Datum", 10), Column::new("Name", 30)]);
    for h in &resolved.public_holidays {
        public.add_row(vec![format_date(h.date), h.name.clone()]);
    }
    println!("{}", public.render());

    header(format!("Schulferien {} · {}", year, cfg.region));
    let mut school = Table::new(vec![
        Column::new("Name", 20),
        Column::new("Von", 10),
        Column::new("Bis", 10),
        Column::new("Werktage", 8),
    ]);
    for p in &resolved.school_holidays {
        let workdays = maps
            .school
            .iter()
            .filter(|(d, name)| **name == p.name && **d >= p.start_date && **d <= p.end_date)
            .count();
        school.add_row(vec![
            p.name.clone(),
            format_date(p.start_date),
            format_date(p.end_date),
            workdays.to_string(),
        ]);
    }
    println!("{}", school.render());

    Ok(())
}
