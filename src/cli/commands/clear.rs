use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::absence::AbsenceLogic;
use crate::errors::{AppError, AppResult};
use crate::store::SqliteStore;
use crate::ui::messages::{info, success};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear {
        id,
        date: date_str,
    } = cmd
    {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.into()))?;

        let mut store = SqliteStore::open(&cfg.database)?;
        match AbsenceLogic::clear(&mut store, id, d)? {
            Some(old) => success(format!("{}: {} cleared for #{}", d, old.label(), id)),
            None => info(format!("{}: nothing to clear for #{}", d, id)),
        }
    }

    Ok(())
}
