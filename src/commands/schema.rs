use std::io::Write;

use anyhow::{Context, Result};

use crate::app::Repositories;
use crate::cli::SchemaCmd;

use super::CommandRunner;

impl CommandRunner for SchemaCmd {
    fn run(&self, repos: &Repositories, out: &mut dyn Write) -> Result<()> {
        match self {
            SchemaCmd::Create => {
                repos.create_tables().context("creating tables")?;
                writeln!(out, "tables created")?;
            }
            SchemaCmd::Drop => {
                // employees first, it references departments
                repos
                    .employees
                    .drop_table()
                    .context("dropping employees")?;
                repos
                    .departments
                    .drop_table()
                    .context("dropping departments")?;
                writeln!(out, "tables dropped")?;
            }
        }
        Ok(())
    }
}
