pub mod absence;
pub mod calendar;
pub mod classifier;
pub mod employee;
pub mod holiday_data;
pub mod holidays;
pub mod log;
pub mod logic;
pub mod report;
pub mod roster;
