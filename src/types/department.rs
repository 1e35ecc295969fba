use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

pub type DepartmentRef = Rc<RefCell<Department>>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub location: Option<String>,
}

impl Department {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            location: Some(location.into()),
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    pub(crate) fn refresh_from(&mut self, row: Department) {
        self.name = row.name;
        self.location = row.location;
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name.as_deref().unwrap_or("None");
        let location = self.location.as_deref().unwrap_or("None");
        match self.id {
            Some(id) => write!(f, "<Department {id}: {name}, {location}>"),
            None => write!(f, "<Department None: {name}, {location}>"),
        }
    }
}
