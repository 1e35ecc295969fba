mod wiring;

use std::io::Write;
use std::path::Path;
use std::rc::Rc;

use anyhow::{Context as AnyhowContext, Result};

use crate::repository::{DepartmentRepository, EmployeeRepository};
use crate::storage::{self, Database};
use crate::{cli, context};

/// Both repositories over one shared connection.
pub struct Repositories {
    pub departments: Rc<DepartmentRepository>,
    pub employees: EmployeeRepository,
}

impl Repositories {
    pub fn new(db: Rc<Database>) -> Self {
        wiring::build_repositories(db)
    }

    pub fn create_tables(&self) -> storage::Result<()> {
        self.departments.create_table()?;
        self.employees.create_table()
    }
}

pub struct App {
    pub ctx: context::Context,
    pub repos: Repositories,
}

impl App {
    pub fn from_cli(cli: &cli::Cli) -> Result<Self> {
        let ctx = context::Context::from_cli(cli);

        crate::tracing::init(ctx.config.log_file.as_deref().map(Path::new));
        log::info!("📂 Data dir: {}", ctx.config.data_dir);
        log::debug!("🔗 Foreign keys: {:?}", ctx.config.foreign_keys);

        wiring::init_data_dir(&ctx).context("initializing data dir")?;
        let db = wiring::init_database(&ctx)?;
        let repos = Repositories::new(db);
        repos.create_tables().context("initializing schema")?;

        Ok(Self { ctx, repos })
    }

    pub fn execute(&self, cmd: &cli::Command, out: &mut dyn Write) -> Result<()> {
        let _span = ::tracing::info_span!("command", db = %self.ctx.config.db_path().display())
            .entered();
        cmd.run(&self.repos, out)
    }
}

pub fn run() -> Result<()> {
    let cli = crate::cli::parse();
    let app = App::from_cli(&cli)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    app.execute(&cli.cmd, &mut out)
}
