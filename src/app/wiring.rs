use std::rc::Rc;

use anyhow::{Context, Result};

use crate::context;
use crate::repository::{DepartmentRepository, EmployeeRepository};
use crate::storage::Database;

use super::Repositories;

pub fn init_data_dir(ctx: &context::Context) -> Result<()> {
    let data_dir = std::path::PathBuf::from(&ctx.config.data_dir);
    std::fs::create_dir_all(&data_dir)?;
    Ok(())
}

pub fn init_database(ctx: &context::Context) -> Result<Rc<Database>> {
    let db_path = ctx.config.db_path();
    if ctx.config.reset {
        Database::reset_file(&db_path).context("resetting database")?;
    }
    let db = Database::open(&db_path, ctx.config.foreign_keys)
        .with_context(|| format!("opening {}", db_path.display()))?;
    Ok(Rc::new(db))
}

pub fn build_repositories(db: Rc<Database>) -> Repositories {
    let departments = Rc::new(DepartmentRepository::new(db.clone()));
    let employees = EmployeeRepository::new(db, departments.clone());
    Repositories {
        departments,
        employees,
    }
}
