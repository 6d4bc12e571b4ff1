use crate::core::calendar::format_date;
use crate::errors::AppResult;
use crate::models::absence::AbsenceRecord;
use crate::models::absence_type::AbsenceType;
use crate::models::employee::Employee;
use crate::store::normalize::{RawAbsence, RawEmployee, normalize_absence, normalize_employee};
use chrono::{NaiveDate, Utc};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn raw_employee(row: &Row) -> Result<RawEmployee> {
    Ok(RawEmployee {
        id: row.get("id")?,
        name: row.get("name")?,
        department: row.get("department")?,
    })
}

fn raw_absence(row: &Row) -> Result<RawAbsence> {
    Ok(RawAbsence {
        employee_id: row.get("employee_id")?,
        date: row.get("date")?,
        kind: row.get("type")?,
    })
}

pub fn load_employees(conn: &Connection) -> AppResult<Vec<Employee>> {
    let mut stmt = conn.prepare("SELECT id, name, department FROM employees ORDER BY id ASC")?;
    let rows = stmt.query_map([], raw_employee)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(normalize_employee(r?)?);
    }
    Ok(out)
}

pub fn find_employee(conn: &Connection, id: &str) -> AppResult<Option<Employee>> {
    let raw = conn
        .query_row(
            "SELECT id, name, department FROM employees WHERE id = ?1",
            [id],
            raw_employee,
        )
        .optional()?;

    raw.map(normalize_employee).transpose()
}

pub fn load_absences(conn: &Connection) -> AppResult<Vec<AbsenceRecord>> {
    let mut stmt = conn.prepare(
        "SELECT employee_id, date, type FROM absences
         ORDER BY employee_id ASC, date ASC",
    )?;
    let rows = stmt.query_map([], raw_absence)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(normalize_absence(r?)?);
    }
    Ok(out)
}

pub fn find_absence(
    conn: &Connection,
    employee_id: &str,
    date: &NaiveDate,
) -> AppResult<Option<AbsenceType>> {
    let raw = conn
        .query_row(
            "SELECT employee_id, date, type FROM absences
             WHERE employee_id = ?1 AND date = ?2",
            params![employee_id, format_date(*date)],
            raw_absence,
        )
        .optional()?;

    Ok(raw.map(normalize_absence).transpose()?.map(|r| r.kind))
}

pub fn insert_employee(conn: &Connection, emp: &Employee) -> Result<()> {
    conn.execute(
        "INSERT INTO employees (id, name, department, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            emp.id,
            emp.name,
            emp.department.to_db_str(),
            Utc::now().to_rfc3339(),
        ],
    )?;
    Ok(())
}

/// Delete an employee and their absences in one transaction.
/// Returns the number of employee rows removed.
pub fn delete_employee(conn: &Connection, id: &str) -> Result<usize> {
    let tx = conn.unchecked_transaction()?;
    tx.execute("DELETE FROM absences WHERE employee_id = ?1", [id])?;
    let removed = tx.execute("DELETE FROM employees WHERE id = ?1", [id])?;
    tx.commit()?;
    Ok(removed)
}

pub fn upsert_absence(conn: &Connection, rec: &AbsenceRecord) -> Result<()> {
    conn.execute(
        "INSERT INTO absences (employee_id, date, type, created_at)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(employee_id, date) DO UPDATE SET type = excluded.type",
        params![
            rec.employee_id,
            format_date(rec.date),
            rec.kind.to_db_str(),
            Utc::now().to_rfc3339(),
        ],
    )?;
    Ok(())
}

pub fn delete_absence(conn: &Connection, employee_id: &str, date: &NaiveDate) -> Result<usize> {
    conn.execute(
        "DELETE FROM absences WHERE employee_id = ?1 AND date = ?2",
        params![employee_id, format_date(*date)],
    )
}

/// Audit trail rows: (id, date, operation, target, message).
pub fn load_log(conn: &Connection) -> Result<Vec<(i64, String, String, String, String)>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, operation, IFNULL(target, ''), message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get(0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
        ))
    })?;

    rows.collect()
}
