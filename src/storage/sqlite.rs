use std::path::Path;

use rusqlite::Connection;

use super::error::Result;

/// How `department_id` references are treated on write.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ForeignKeyPolicy {
    /// Declared in the schema but never checked.
    #[default]
    Unchecked,
    /// `PRAGMA foreign_keys = ON`, plus a lookup before each employee write.
    Strict,
}

impl ForeignKeyPolicy {
    pub fn from_flag(strict: bool) -> Self {
        if strict {
            ForeignKeyPolicy::Strict
        } else {
            ForeignKeyPolicy::Unchecked
        }
    }

    pub fn is_strict(self) -> bool {
        matches!(self, ForeignKeyPolicy::Strict)
    }
}

/// The single connection every repository executes against. SQLite runs in
/// autocommit mode, so each statement is committed as soon as it returns.
pub struct Database {
    conn: Connection,
    policy: ForeignKeyPolicy,
}

impl Database {
    pub fn open<P: AsRef<Path>>(path: P, policy: ForeignKeyPolicy) -> Result<Self> {
        let conn = Connection::open(path.as_ref())?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        conn.busy_timeout(std::time::Duration::from_millis(500))?;
        log::debug!("opened sqlite database at {}", path.as_ref().display());
        Self::with_policy(conn, policy)
    }

    pub fn open_in_memory(policy: ForeignKeyPolicy) -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::with_policy(conn, policy)
    }

    fn with_policy(conn: Connection, policy: ForeignKeyPolicy) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", policy.is_strict())?;
        Ok(Self { conn, policy })
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    pub fn policy(&self) -> ForeignKeyPolicy {
        self.policy
    }

    /// Remove the database file to force a clean start.
    pub fn reset_file<P: AsRef<Path>>(path: P) -> std::io::Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(());
        }
        std::fs::remove_file(path)
    }
}
