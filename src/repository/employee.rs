use std::cell::RefCell;
use std::rc::Rc;

use rusqlite::{params, Connection, OptionalExtension, ToSql};

use crate::storage::{Database, Result, StoreError};
use crate::types::{Department, Employee, EmployeeRef};

use super::{DepartmentLookup, IdentityMap};

const COLUMNS: &str = "id, name, job_title, department_id";

fn map_employee_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<(i64, Employee)> {
    let id: i64 = row.get(0)?;
    Ok((
        id,
        Employee {
            id: Some(id),
            name: row.get(1)?,
            job_title: row.get(2)?,
            department_id: row.get(3)?,
        },
    ))
}

fn db_insert_employee(conn: &Connection, employee: &Employee) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO employees (name, job_title, department_id) VALUES (?1, ?2, ?3)",
        params![employee.name, employee.job_title, employee.department_id],
    )?;
    Ok(conn.last_insert_rowid())
}

fn db_update_employee(conn: &Connection, id: i64, employee: &Employee) -> rusqlite::Result<usize> {
    conn.execute(
        r#"
        UPDATE employees
        SET name = ?1, job_title = ?2, department_id = ?3
        WHERE id = ?4
        "#,
        params![employee.name, employee.job_title, employee.department_id, id],
    )
}

fn db_select_employees(
    conn: &Connection,
    filter: &str,
    params: &[&dyn ToSql],
) -> rusqlite::Result<Vec<(i64, Employee)>> {
    let mut stmt = conn.prepare(&format!("SELECT {COLUMNS} FROM employees {filter}"))?;
    let rows = stmt
        .query_map(params, map_employee_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

/// CRUD over the `employees` table with an identity map in front of it.
///
/// Every method runs a single statement in autocommit mode. Reads hand back
/// the cached instance for a row id when one exists, refreshed from the row,
/// so repeated lookups of one id share a single `EmployeeRef`.
pub struct EmployeeRepository {
    db: Rc<Database>,
    departments: Rc<dyn DepartmentLookup>,
    identity: IdentityMap<Employee>,
}

impl EmployeeRepository {
    pub fn new(db: Rc<Database>, departments: Rc<dyn DepartmentLookup>) -> Self {
        Self {
            db,
            departments,
            identity: IdentityMap::new(),
        }
    }

    pub fn identity_map(&self) -> &IdentityMap<Employee> {
        &self.identity
    }

    pub fn create_table(&self) -> Result<()> {
        self.db.conn().execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS employees (
                id INTEGER PRIMARY KEY,
                name TEXT,
                job_title TEXT,
                department_id INTEGER,
                FOREIGN KEY (department_id) REFERENCES departments(id)
            );
            "#,
        )?;
        log::info!("employees table ready");
        Ok(())
    }

    /// Drops the table and forgets every cached employee. Handles held
    /// elsewhere keep their ids but no longer correspond to any row.
    pub fn drop_table(&self) -> Result<()> {
        self.db
            .conn()
            .execute_batch("DROP TABLE IF EXISTS employees;")?;
        self.identity.clear();
        log::info!("employees table dropped");
        Ok(())
    }

    pub fn create(
        &self,
        name: &str,
        job_title: &str,
        department_id: Option<i64>,
    ) -> Result<EmployeeRef> {
        self.insert(Employee::new(name, job_title, department_id))
    }

    /// Persist a new employee and return its shared handle.
    pub fn insert(&self, employee: Employee) -> Result<EmployeeRef> {
        if let Some(id) = employee.id {
            return Err(StoreError::AlreadyPersisted(id));
        }
        let handle = Rc::new(RefCell::new(employee));
        self.insert_shared(&handle)?;
        Ok(handle)
    }

    fn insert_shared(&self, handle: &EmployeeRef) -> Result<i64> {
        self.check_department(handle.borrow().department_id)?;
        let id = db_insert_employee(self.db.conn(), &handle.borrow())?;
        handle.borrow_mut().id = Some(id);
        self.identity.insert(id, handle.clone());
        log::debug!("inserted employee {id}");
        Ok(id)
    }

    /// Write every field to the row with this employee's id. An id with no
    /// row is not an error; the statement simply matches nothing.
    pub fn update(&self, employee: &EmployeeRef) -> Result<()> {
        let id = employee.borrow().id.ok_or(StoreError::NotPersisted)?;
        self.check_department(employee.borrow().department_id)?;
        let rows = db_update_employee(self.db.conn(), id, &employee.borrow())?;
        if rows == 0 {
            log::debug!("update of employee {id} matched no row");
        }
        self.identity.insert(id, employee.clone());
        Ok(())
    }

    /// Insert when the employee has no id yet, otherwise update.
    pub fn save(&self, employee: &EmployeeRef) -> Result<()> {
        if !employee.borrow().is_persisted() {
            self.insert_shared(employee)?;
            return Ok(());
        }
        self.update(employee)
    }

    /// Remove the row, drop it from the identity map and clear the id, which
    /// leaves `employee` free to be saved again as a new row.
    pub fn delete(&self, employee: &EmployeeRef) -> Result<()> {
        let id = employee.borrow().id.ok_or(StoreError::NotPersisted)?;
        self.db
            .conn()
            .execute("DELETE FROM employees WHERE id = ?1", params![id])?;
        self.identity.remove(id);
        employee.borrow_mut().id = None;
        log::debug!("deleted employee {id}");
        Ok(())
    }

    pub fn get_all(&self) -> Result<Vec<EmployeeRef>> {
        let rows = db_select_employees(self.db.conn(), "ORDER BY id", &[])?;
        Ok(self.resolve_all(rows))
    }

    pub fn find_by_id(&self, id: i64) -> Result<Option<EmployeeRef>> {
        let row = self
            .db
            .conn()
            .query_row(
                &format!("SELECT {COLUMNS} FROM employees WHERE id = ?1"),
                params![id],
                map_employee_row,
            )
            .optional()?;
        Ok(row.map(|(id, row)| self.resolve(id, row)))
    }

    /// First row with exactly this name, in whatever order SQLite yields.
    pub fn find_by_name(&self, name: &str) -> Result<Option<EmployeeRef>> {
        let row = self
            .db
            .conn()
            .query_row(
                &format!("SELECT {COLUMNS} FROM employees WHERE name = ?1"),
                params![name],
                map_employee_row,
            )
            .optional()?;
        Ok(row.map(|(id, row)| self.resolve(id, row)))
    }

    pub fn find_by_department(&self, department_id: i64) -> Result<Vec<EmployeeRef>> {
        let rows = db_select_employees(
            self.db.conn(),
            "WHERE department_id = ?1 ORDER BY id",
            &[&department_id],
        )?;
        Ok(self.resolve_all(rows))
    }

    pub fn get_department(&self, employee: &Employee) -> Result<Option<Department>> {
        match employee.department_id {
            Some(id) => self.departments.find_department(id),
            None => Ok(None),
        }
    }

    fn check_department(&self, department_id: Option<i64>) -> Result<()> {
        let Some(id) = department_id else {
            return Ok(());
        };
        if self.db.policy().is_strict() && self.departments.find_department(id)?.is_none() {
            return Err(StoreError::UnknownDepartment(id));
        }
        Ok(())
    }

    fn resolve(&self, id: i64, row: Employee) -> EmployeeRef {
        self.identity
            .reconcile(id, row, |cached, row| cached.refresh_from(row))
    }

    fn resolve_all(&self, rows: Vec<(i64, Employee)>) -> Vec<EmployeeRef> {
        rows.into_iter()
            .map(|(id, row)| self.resolve(id, row))
            .collect()
    }
}
