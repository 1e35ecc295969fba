mod args;
mod command;
mod department_cmd;
mod employee_cmd;
mod schema_cmd;

pub use args::Cli;
pub use command::Command;
pub use department_cmd::DepartmentCmd;
pub use employee_cmd::EmployeeCmd;
pub use schema_cmd::SchemaCmd;

pub use args::parse;
