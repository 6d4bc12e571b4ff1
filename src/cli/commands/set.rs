use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::absence::AbsenceLogic;
use crate::errors::{AppError, AppResult};
use crate::models::absence_type::AbsenceType;
use crate::store::SqliteStore;
use crate::ui::messages::success;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set {
        id,
        date: date_str,
        kind,
    } = cmd
    {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.into()))?;
        let kind =
            AbsenceType::from_code(kind).ok_or_else(|| AppError::InvalidAbsenceType(kind.into()))?;

        let mut store = SqliteStore::open(&cfg.database)?;
        let previous = AbsenceLogic::set(&mut store, id, d, kind)?;

        match previous {
            Some(old) if old != kind => success(format!(
                "{}: {} replaced by {} for #{}",
                d,
                old.label(),
                kind.label(),
                id
            )),
            _ => success(format!("{}: {} for #{}", d, kind.label(), id)),
        }
    }

    Ok(())
}
