use std::io::Write;

use anyhow::{Context, Result};

use crate::app::Repositories;
use crate::cli::DepartmentCmd;
use crate::types::{Department, DepartmentRef, Employee};

use super::{print_json, CommandRunner};

fn snapshot(department: &DepartmentRef) -> Department {
    department.borrow().clone()
}

fn load(repos: &Repositories, id: i64) -> Result<DepartmentRef> {
    match repos.departments.find_by_id(id).context("loading department")? {
        Some(d) => Ok(d),
        None => anyhow::bail!("department {id} not found"),
    }
}

impl CommandRunner for DepartmentCmd {
    fn run(&self, repos: &Repositories, out: &mut dyn Write) -> Result<()> {
        match self {
            DepartmentCmd::Create { name, location } => {
                let d = repos
                    .departments
                    .create(name, location)
                    .context("creating department")?;
                log::info!("created {}", d.borrow());
                print_json(out, &snapshot(&d))
            }
            DepartmentCmd::List => {
                let all = repos.departments.get_all().context("listing departments")?;
                let all: Vec<Department> = all.iter().map(snapshot).collect();
                print_json(out, &all)
            }
            DepartmentCmd::Show { id } => {
                let d = load(repos, *id)?;
                print_json(out, &snapshot(&d))
            }
            DepartmentCmd::Find { name } => {
                match repos
                    .departments
                    .find_by_name(name)
                    .context("finding department")?
                {
                    Some(d) => print_json(out, &snapshot(&d)),
                    None => anyhow::bail!("no department named {name:?}"),
                }
            }
            DepartmentCmd::Update { id, name, location } => {
                let d = load(repos, *id)?;
                {
                    let mut d = d.borrow_mut();
                    if let Some(name) = name {
                        d.name = Some(name.clone());
                    }
                    if let Some(location) = location {
                        d.location = Some(location.clone());
                    }
                }
                repos.departments.update(&d).context("updating department")?;
                log::info!("updated {}", d.borrow());
                print_json(out, &snapshot(&d))
            }
            DepartmentCmd::Delete { id } => {
                let d = load(repos, *id)?;
                repos.departments.delete(&d).context("deleting department")?;
                log::info!("deleted department {id}");
                print_json(out, &snapshot(&d))
            }
            DepartmentCmd::Employees { id } => {
                let members = repos
                    .employees
                    .find_by_department(*id)
                    .context("listing department employees")?;
                let members: Vec<Employee> = members.iter().map(|e| e.borrow().clone()).collect();
                print_json(out, &members)
            }
        }
    }
}
