use crate::storage::Result;
use crate::types::Department;

/// Resolves a department id for the employee side of the relationship.
pub trait DepartmentLookup {
    fn find_department(&self, id: i64) -> Result<Option<Department>>;
}
