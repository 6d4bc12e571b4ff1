#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;
use teamcal::models::employee::Employee;
use teamcal::store::{AbsenceStore, SqliteStore};

pub fn tc() -> Command {
    cargo_bin_cmd!("teamcal")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_teamcal.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// Init a DB through the CLI and add the given (name, dept) employees.
pub fn init_with_employees(db_path: &str, people: &[(&str, &str)]) {
    tc().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    for (name, dept) in people {
        tc().args(["--db", db_path, "add", name, "--dept", dept])
            .assert()
            .success();
    }
}

/// Look up an employee through the library store.
pub fn employee_by_name(db_path: &str, name: &str) -> Employee {
    let mut store = SqliteStore::open(db_path).expect("open store");
    store
        .load_employees()
        .expect("load employees")
        .into_iter()
        .find(|e| e.name == name)
        .expect("employee present")
}
