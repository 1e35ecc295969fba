use clap::Subcommand;

use crate::cli::department_cmd::DepartmentCmd;
use crate::cli::employee_cmd::EmployeeCmd;
use crate::cli::schema_cmd::SchemaCmd;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    #[command(
        about = "Employee records",
        long_about = "Create, inspect, update and delete employees, and resolve the department an employee belongs to."
    )]
    Employee {
        #[command(subcommand)]
        cmd: EmployeeCmd,
    },
    #[command(
        about = "Department records",
        long_about = "Create, inspect, update and delete departments, and list their employees."
    )]
    Department {
        #[command(subcommand)]
        cmd: DepartmentCmd,
    },
    #[command(
        about = "Table management",
        long_about = "Create or drop the employees and departments tables."
    )]
    Schema {
        #[command(subcommand)]
        cmd: SchemaCmd,
    },
}
