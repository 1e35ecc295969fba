use std::cell::RefCell;
use std::rc::Rc;

use rusqlite::{params, Connection, OptionalExtension};

use crate::storage::{Database, Result, StoreError};
use crate::types::{Department, DepartmentRef};

use super::{DepartmentLookup, IdentityMap};

const COLUMNS: &str = "id, name, location";

fn map_department_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<(i64, Department)> {
    let id: i64 = row.get(0)?;
    Ok((
        id,
        Department {
            id: Some(id),
            name: row.get(1)?,
            location: row.get(2)?,
        },
    ))
}

fn db_insert_department(conn: &Connection, department: &Department) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO departments (name, location) VALUES (?1, ?2)",
        params![department.name, department.location],
    )?;
    Ok(conn.last_insert_rowid())
}

fn db_update_department(conn: &Connection, id: i64, department: &Department) -> rusqlite::Result<usize> {
    conn.execute(
        "UPDATE departments SET name = ?1, location = ?2 WHERE id = ?3",
        params![department.name, department.location, id],
    )
}

pub struct DepartmentRepository {
    db: Rc<Database>,
    identity: IdentityMap<Department>,
}

impl DepartmentRepository {
    pub fn new(db: Rc<Database>) -> Self {
        Self {
            db,
            identity: IdentityMap::new(),
        }
    }

    pub fn identity_map(&self) -> &IdentityMap<Department> {
        &self.identity
    }

    pub fn create_table(&self) -> Result<()> {
        self.db.conn().execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS departments (
                id INTEGER PRIMARY KEY,
                name TEXT,
                location TEXT
            );
            "#,
        )?;
        log::info!("departments table ready");
        Ok(())
    }

    pub fn drop_table(&self) -> Result<()> {
        self.db
            .conn()
            .execute_batch("DROP TABLE IF EXISTS departments;")?;
        self.identity.clear();
        log::info!("departments table dropped");
        Ok(())
    }

    pub fn create(&self, name: &str, location: &str) -> Result<DepartmentRef> {
        self.insert(Department::new(name, location))
    }

    pub fn insert(&self, department: Department) -> Result<DepartmentRef> {
        if let Some(id) = department.id {
            return Err(StoreError::AlreadyPersisted(id));
        }
        let handle = Rc::new(RefCell::new(department));
        self.insert_shared(&handle)?;
        Ok(handle)
    }

    fn insert_shared(&self, handle: &DepartmentRef) -> Result<i64> {
        let id = db_insert_department(self.db.conn(), &handle.borrow())?;
        handle.borrow_mut().id = Some(id);
        self.identity.insert(id, handle.clone());
        log::debug!("inserted department {id}");
        Ok(id)
    }

    pub fn update(&self, department: &DepartmentRef) -> Result<()> {
        let id = department.borrow().id.ok_or(StoreError::NotPersisted)?;
        let rows = db_update_department(self.db.conn(), id, &department.borrow())?;
        if rows == 0 {
            log::debug!("update of department {id} matched no row");
        }
        self.identity.insert(id, department.clone());
        Ok(())
    }

    /// Insert when the department has no id yet, otherwise update.
    pub fn save(&self, department: &DepartmentRef) -> Result<()> {
        if !department.borrow().is_persisted() {
            self.insert_shared(department)?;
            return Ok(());
        }
        self.update(department)
    }

    pub fn delete(&self, department: &DepartmentRef) -> Result<()> {
        let id = department.borrow().id.ok_or(StoreError::NotPersisted)?;
        self.db
            .conn()
            .execute("DELETE FROM departments WHERE id = ?1", params![id])?;
        self.identity.remove(id);
        department.borrow_mut().id = None;
        log::debug!("deleted department {id}");
        Ok(())
    }

    pub fn get_all(&self) -> Result<Vec<DepartmentRef>> {
        let mut stmt = self
            .db
            .conn()
            .prepare(&format!("SELECT {COLUMNS} FROM departments ORDER BY id"))?;
        let rows = stmt
            .query_map([], map_department_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows
            .into_iter()
            .map(|(id, row)| self.resolve(id, row))
            .collect())
    }

    pub fn find_by_id(&self, id: i64) -> Result<Option<DepartmentRef>> {
        let row = self
            .db
            .conn()
            .query_row(
                &format!("SELECT {COLUMNS} FROM departments WHERE id = ?1"),
                params![id],
                map_department_row,
            )
            .optional()?;
        Ok(row.map(|(id, row)| self.resolve(id, row)))
    }

    pub fn find_by_name(&self, name: &str) -> Result<Option<DepartmentRef>> {
        let row = self
            .db
            .conn()
            .query_row(
                &format!("SELECT {COLUMNS} FROM departments WHERE name = ?1"),
                params![name],
                map_department_row,
            )
            .optional()?;
        Ok(row.map(|(id, row)| self.resolve(id, row)))
    }

    fn resolve(&self, id: i64, row: Department) -> DepartmentRef {
        self.identity
            .reconcile(id, row, |cached, row| cached.refresh_from(row))
    }
}

impl DepartmentLookup for DepartmentRepository {
    fn find_department(&self, id: i64) -> Result<Option<Department>> {
        Ok(self.find_by_id(id)?.map(|d| d.borrow().clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::ForeignKeyPolicy;

    fn repo() -> DepartmentRepository {
        let db = Rc::new(Database::open_in_memory(ForeignKeyPolicy::Unchecked).unwrap());
        let repo = DepartmentRepository::new(db);
        repo.create_table().unwrap();
        repo
    }

    #[test]
    fn create_assigns_id_and_caches() {
        let repo = repo();
        let payroll = repo.create("Payroll", "Building A").unwrap();
        let id = payroll.borrow().id.unwrap();
        let found = repo.find_by_id(id).unwrap().unwrap();
        assert!(Rc::ptr_eq(&payroll, &found));
    }

    #[test]
    fn save_then_update_location() {
        let repo = repo();
        let dept = Rc::new(RefCell::new(Department::new("HR", "Floor 1")));
        repo.save(&dept).unwrap();
        let id = dept.borrow().id.unwrap();
        dept.borrow_mut().location = Some("Floor 2".into());
        repo.save(&dept).unwrap();
        assert_eq!(dept.borrow().id, Some(id));
        let snapshot = repo.find_department(id).unwrap().unwrap();
        assert_eq!(snapshot.location.as_deref(), Some("Floor 2"));
    }

    #[test]
    fn delete_clears_id_and_cache() {
        let repo = repo();
        let dept = repo.create("Sales", "Remote").unwrap();
        let id = dept.borrow().id.unwrap();
        repo.delete(&dept).unwrap();
        assert_eq!(dept.borrow().id, None);
        assert!(!repo.identity_map().contains(id));
        assert!(repo.find_by_id(id).unwrap().is_none());
        assert!(repo.get_all().unwrap().is_empty());
    }

    #[test]
    fn find_by_name_returns_none_when_missing() {
        let repo = repo();
        repo.create("Legal", "Basement").unwrap();
        assert!(repo.find_by_name("Marketing").unwrap().is_none());
        let legal = repo.find_by_name("Legal").unwrap().unwrap();
        assert_eq!(legal.borrow().location.as_deref(), Some("Basement"));
    }

    #[test]
    fn rows_with_null_columns_are_readable() {
        let repo = repo();
        repo.db
            .conn()
            .execute("INSERT INTO departments (name) VALUES ('Archive')", [])
            .unwrap();
        let all = repo.get_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].borrow().name.as_deref(), Some("Archive"));
        assert_eq!(all[0].borrow().location, None);
        let found = repo.find_by_name("Archive").unwrap().unwrap();
        assert!(Rc::ptr_eq(&found, &all[0]));
    }

    #[test]
    fn insert_rejects_persisted_department() {
        let repo = repo();
        let mut dept = Department::new("Ops", "HQ");
        dept.id = Some(3);
        let err = repo.insert(dept).unwrap_err();
        assert!(matches!(err, StoreError::AlreadyPersisted(3)));
    }

    #[test]
    fn drop_table_clears_identity_map() {
        let repo = repo();
        repo.create("A", "B").unwrap();
        assert_eq!(repo.identity_map().len(), 1);
        repo.drop_table().unwrap();
        assert!(repo.identity_map().is_empty());
        repo.create_table().unwrap();
        assert!(repo.get_all().unwrap().is_empty());
    }
}
