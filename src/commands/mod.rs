use std::io::Write;

use serde::Serialize;

use crate::app::Repositories;
use crate::cli::Command;

pub mod department;
pub mod employee;
pub mod schema;

pub trait CommandRunner {
    fn run(&self, repos: &Repositories, out: &mut dyn Write) -> anyhow::Result<()>;
}

impl Command {
    pub fn run(&self, repos: &Repositories, out: &mut dyn Write) -> anyhow::Result<()> {
        match self {
            Command::Employee { cmd } => cmd.run(repos, out),
            Command::Department { cmd } => cmd.run(repos, out),
            Command::Schema { cmd } => cmd.run(repos, out),
        }
    }
}

pub(crate) fn print_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
