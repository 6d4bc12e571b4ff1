pub mod add;
pub mod clear;
pub mod config;
pub mod db;
pub mod del;
pub mod holidays;
pub mod init;
pub mod log;
pub mod roster;
pub mod set;
pub mod show;
pub mod stats;

use crate::config::Config;
use crate::core::holidays::HolidayTable;
use crate::ui::messages::warning;

/// Holiday table for display commands. A broken external file only costs its
/// own years: the built-in data keeps working.
pub(crate) fn holiday_table(cfg: &Config) -> HolidayTable {
    match cfg.holiday_table() {
        Ok(table) => table,
        Err(e) => {
            warning(format!("{} (using built-in holiday data)", e));
            HolidayTable::builtin()
        }
    }
}
