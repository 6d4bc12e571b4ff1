//! Unified application error type.
//! All modules (db, store, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid month: {0} (expected YYYY-MM)")]
    InvalidMonth(String),

    #[error("Invalid department: {0}")]
    InvalidDepartment(String),

    #[error("Invalid absence type: {0}")]
    InvalidAbsenceType(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Employee not found: {0}")]
    EmployeeNotFound(String),

    #[error("Employee name must not be empty")]
    EmptyName,

    #[error("Day {0} is a weekend and does not accept a new absence")]
    NotEditable(String),

    // ---------------------------
    // Holiday data
    // ---------------------------
    #[error("Holiday data unavailable: {0}")]
    HolidayData(String),

    #[error("Invalid holiday period '{name}': {start} is after {end}")]
    InvalidDateRange {
        name: String,
        start: String,
        end: String,
    },

    // ---------------------------
    // Absence store boundary
    // ---------------------------
    #[error("Failed to load from store: {0}")]
    StoreRead(String),

    #[error("Failed to write to store: {0}")]
    StoreWrite(String),

    #[error("Invalid stored record: {0}")]
    Validation(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,
}

pub type AppResult<T> = Result<T, AppError>;
