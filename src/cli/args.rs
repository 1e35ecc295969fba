use clap::Parser;
use std::env;

use crate::cli::command::Command;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Manage employees and departments stored in SQLite",
    long_about = "A small record keeper for employees and the departments they belong to, backed by a local SQLite database.\n\nEnvironment:\n  STAFFDB_DATA_DIR      Directory holding the database\n  STAFFDB_LOG_FILE      Also write logs to this file\n  STAFFDB_STRICT_FK     Reject department ids that do not exist\n  DOTENV_PATH           Env file to load (default .env)\n"
)]
pub struct Cli {
    #[arg(
        long,
        env = "STAFFDB_DATA_DIR",
        default_value = ".staffdb/",
        value_name = "DIR",
        help = "Directory to store persistent data"
    )]
    pub data_dir: String,

    #[arg(
        long,
        default_value = "staffdb.sqlite",
        value_name = "NAME",
        help = "SQLite file name inside the data directory"
    )]
    pub db_file: String,

    #[arg(
        long = "log-file",
        env = "STAFFDB_LOG_FILE",
        value_name = "PATH",
        help = "Write logs to PATH (in addition to stderr)"
    )]
    pub log_file: Option<String>,

    #[arg(
        long,
        env = "STAFFDB_STRICT_FK",
        default_value_t = false,
        help = "Reject employee writes whose department id does not exist"
    )]
    pub strict_foreign_keys: bool,

    #[arg(
        long,
        default_value_t = false,
        help = "Reset all persisted state (delete the SQLite database) before running"
    )]
    pub reset: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

pub fn parse() -> Cli {
    let dotenv_path = env::var("DOTENV_PATH").unwrap_or(".env".into());
    dotenvy::from_filename(&dotenv_path).ok();
    Cli::parse()
}
