use crate::configuration::Configuration;
use crate::storage::ForeignKeyPolicy;

pub struct Context {
    pub config: Configuration,
}

impl Context {
    pub fn from_cli(cli: &crate::cli::Cli) -> Self {
        let cfg = Configuration {
            data_dir: cli.data_dir.clone(),
            db_file: cli.db_file.clone(),
            log_file: cli.log_file.clone(),
            foreign_keys: ForeignKeyPolicy::from_flag(cli.strict_foreign_keys),
            reset: cli.reset,
        };
        Self { config: cfg }
    }
}
