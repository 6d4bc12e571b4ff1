use crate::db::initialize::init_db;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::absence::AbsenceRecord;
use crate::models::absence_type::AbsenceType;
use crate::models::employee::Employee;
use crate::store::AbsenceStore;
use chrono::NaiveDate;

/// Absence store persisted in the SQLite database.
pub struct SqliteStore {
    pool: DbPool,
    migrations_applied: usize,
}

fn read_failure(e: AppError) -> AppError {
    match e {
        AppError::Db(inner) => AppError::StoreRead(inner.to_string()),
        other => other,
    }
}

fn write_failure(e: rusqlite::Error) -> AppError {
    AppError::StoreWrite(e.to_string())
}

impl SqliteStore {
    /// Open the database at `path` and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path).map_err(|e| AppError::StoreRead(e.to_string()))?;
        Self::from_pool(pool)
    }

    pub fn open_in_memory() -> AppResult<Self> {
        let pool = DbPool::in_memory().map_err(|e| AppError::StoreRead(e.to_string()))?;
        Self::from_pool(pool)
    }

    /// A schema that cannot be read or upgraded is a read failure.
    pub fn from_pool(pool: DbPool) -> AppResult<Self> {
        let migrations_applied = init_db(&pool.conn).map_err(read_failure)?;
        Ok(Self {
            pool,
            migrations_applied,
        })
    }

    /// Migrations run while opening this store.
    pub fn migrations_applied(&self) -> usize {
        self.migrations_applied
    }

    pub fn pool(&mut self) -> &mut DbPool {
        &mut self.pool
    }

    fn ensure_employee(&mut self, id: &str) -> AppResult<()> {
        match self.find_employee(id)? {
            Some(_) => Ok(()),
            None => Err(AppError::EmployeeNotFound(id.to_string())),
        }
    }
}

impl AbsenceStore for SqliteStore {
    fn load_employees(&mut self) -> AppResult<Vec<Employee>> {
        queries::load_employees(&self.pool.conn).map_err(read_failure)
    }

    fn load_absences(&mut self) -> AppResult<Vec<AbsenceRecord>> {
        queries::load_absences(&self.pool.conn).map_err(read_failure)
    }

    fn find_employee(&mut self, id: &str) -> AppResult<Option<Employee>> {
        queries::find_employee(&self.pool.conn, id).map_err(read_failure)
    }

    fn find_absence(
        &mut self,
        employee_id: &str,
        date: NaiveDate,
    ) -> AppResult<Option<AbsenceType>> {
        queries::find_absence(&self.pool.conn, employee_id, &date).map_err(read_failure)
    }

    fn add_employee(&mut self, employee: &Employee) -> AppResult<()> {
        queries::insert_employee(&self.pool.conn, employee).map_err(write_failure)
    }

    fn remove_employee(&mut self, id: &str) -> AppResult<()> {
        let removed = queries::delete_employee(&self.pool.conn, id).map_err(write_failure)?;
        if removed == 0 {
            return Err(AppError::EmployeeNotFound(id.to_string()));
        }
        Ok(())
    }

    fn set_absence(&mut self, record: &AbsenceRecord) -> AppResult<()> {
        self.ensure_employee(&record.employee_id)?;
        queries::upsert_absence(&self.pool.conn, record).map_err(write_failure)
    }

    fn clear_absence(&mut self, employee_id: &str, date: NaiveDate) -> AppResult<()> {
        queries::delete_absence(&self.pool.conn, employee_id, &date).map_err(write_failure)?;
        Ok(())
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        log::audit(&self.pool.conn, operation, target, message)
    }
}
