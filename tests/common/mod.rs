#![allow(dead_code)]

use std::path::Path;
use std::process::Command as ProcCommand;
use std::rc::Rc;

use staffdb::app::Repositories;
use staffdb::{Database, ForeignKeyPolicy};
use tempfile::TempDir;

pub fn base_cmd(data_dir: &TempDir) -> ProcCommand {
    let mut command = ProcCommand::new(env!("CARGO_BIN_EXE_staffdb"));
    command
        .env_remove("STAFFDB_DATA_DIR")
        .env_remove("STAFFDB_STRICT_FK")
        .env_remove("RUST_LOG")
        .env("DOTENV_PATH", data_dir.path().join("missing.env"))
        .arg("--data-dir")
        .arg(data_dir.path());
    command
}

/// Run the binary and parse stdout as JSON, asserting success.
pub fn run_json(command: &mut ProcCommand) -> serde_json::Value {
    let output = command.output().expect("run staffdb");
    assert!(output.status.success(), "{:?}", output);
    serde_json::from_slice(&output.stdout).expect("json stdout")
}

pub fn db_path(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("staffdb.sqlite")
}

pub fn open_repos(path: &Path, policy: ForeignKeyPolicy) -> Repositories {
    let db = Rc::new(Database::open(path, policy).expect("open database"));
    let repos = Repositories::new(db);
    repos.create_tables().expect("create tables");
    repos
}
