use std::io::Write;

use anyhow::{Context, Result};

use crate::app::Repositories;
use crate::cli::EmployeeCmd;
use crate::types::{Employee, EmployeeRef};

use super::{print_json, CommandRunner};

fn snapshot(employee: &EmployeeRef) -> Employee {
    employee.borrow().clone()
}

fn snapshots(employees: &[EmployeeRef]) -> Vec<Employee> {
    employees.iter().map(snapshot).collect()
}

fn load(repos: &Repositories, id: i64) -> Result<EmployeeRef> {
    match repos.employees.find_by_id(id).context("loading employee")? {
        Some(e) => Ok(e),
        None => anyhow::bail!("employee {id} not found"),
    }
}

impl CommandRunner for EmployeeCmd {
    fn run(&self, repos: &Repositories, out: &mut dyn Write) -> Result<()> {
        match self {
            EmployeeCmd::Create {
                name,
                job_title,
                department_id,
            } => {
                let e = repos
                    .employees
                    .create(name, job_title, *department_id)
                    .context("creating employee")?;
                log::info!("created {}", e.borrow());
                print_json(out, &snapshot(&e))
            }
            EmployeeCmd::List { department_id } => {
                let all = match department_id {
                    Some(id) => repos.employees.find_by_department(*id),
                    None => repos.employees.get_all(),
                }
                .context("listing employees")?;
                print_json(out, &snapshots(&all))
            }
            EmployeeCmd::Show { id } => {
                let e = load(repos, *id)?;
                print_json(out, &snapshot(&e))
            }
            EmployeeCmd::Find { name } => {
                match repos
                    .employees
                    .find_by_name(name)
                    .context("finding employee")?
                {
                    Some(e) => print_json(out, &snapshot(&e)),
                    None => anyhow::bail!("no employee named {name:?}"),
                }
            }
            EmployeeCmd::Update {
                id,
                name,
                job_title,
                department_id,
                clear_department,
            } => {
                let e = load(repos, *id)?;
                {
                    let mut e = e.borrow_mut();
                    if let Some(name) = name {
                        e.name = Some(name.clone());
                    }
                    if let Some(job_title) = job_title {
                        e.job_title = Some(job_title.clone());
                    }
                    if *clear_department {
                        e.department_id = None;
                    } else if department_id.is_some() {
                        e.department_id = *department_id;
                    }
                }
                repos.employees.update(&e).context("updating employee")?;
                log::info!("updated {}", e.borrow());
                print_json(out, &snapshot(&e))
            }
            EmployeeCmd::Delete { id } => {
                let e = load(repos, *id)?;
                repos.employees.delete(&e).context("deleting employee")?;
                log::info!("deleted employee {id}");
                print_json(out, &snapshot(&e))
            }
            EmployeeCmd::Department { id } => {
                let e = load(repos, *id)?;
                let department = repos
                    .employees
                    .get_department(&e.borrow())
                    .context("resolving department")?;
                print_json(out, &department)
            }
        }
    }
}
