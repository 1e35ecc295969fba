mod department;
mod employee;

pub use department::{Department, DepartmentRef};
pub use employee::{Employee, EmployeeRef};
