use std::path::PathBuf;

use crate::storage::ForeignKeyPolicy;

#[derive(Clone, Debug)]
pub struct Configuration {
    pub data_dir: String,
    pub db_file: String,
    pub log_file: Option<String>,
    pub foreign_keys: ForeignKeyPolicy,
    pub reset: bool,
}

impl Configuration {
    pub fn db_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.db_file)
    }
}
