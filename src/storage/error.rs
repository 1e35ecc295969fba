use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("entity has no id; it was never persisted or has been deleted")]
    NotPersisted,
    #[error("entity is already persisted with id {0}")]
    AlreadyPersisted(i64),
    #[error("department {0} does not exist")]
    UnknownDepartment(i64),
}

pub type Result<T> = std::result::Result<T, StoreError>;
