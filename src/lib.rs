pub mod app;
pub mod cli;
pub mod commands;
pub mod configuration;
pub mod context;
pub mod repository;
pub mod storage;
pub mod tracing;
pub mod types;

pub use repository::{DepartmentLookup, DepartmentRepository, EmployeeRepository, IdentityMap};
pub use storage::{Database, ForeignKeyPolicy, StoreError};
pub use types::{Department, DepartmentRef, Employee, EmployeeRef};
