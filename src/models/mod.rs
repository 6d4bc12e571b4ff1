pub mod absence;
pub mod absence_type;
pub mod cell;
pub mod department;
pub mod employee;
pub mod holiday;
pub mod month_grid;
