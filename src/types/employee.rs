use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Shared handle to the single in-memory instance of an employee row.
pub type EmployeeRef = Rc<RefCell<Employee>>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub job_title: Option<String>,
    pub department_id: Option<i64>,
}

impl Employee {
    /// A fresh, not yet persisted employee.
    pub fn new(
        name: impl Into<String>,
        job_title: impl Into<String>,
        department_id: Option<i64>,
    ) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            job_title: Some(job_title.into()),
            department_id,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Overwrite the row-backed fields, leaving the id untouched.
    pub(crate) fn refresh_from(&mut self, row: Employee) {
        self.name = row.name;
        self.job_title = row.job_title;
        self.department_id = row.department_id;
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Employee ")?;
        match self.id {
            Some(id) => write!(f, "{id}")?,
            None => write!(f, "None")?,
        }
        write!(
            f,
            ": {}, {}, Department ",
            self.name.as_deref().unwrap_or("None"),
            self.job_title.as_deref().unwrap_or("None")
        )?;
        match self.department_id {
            Some(id) => write!(f, "{id}>"),
            None => write!(f, "None>"),
        }
    }
}
