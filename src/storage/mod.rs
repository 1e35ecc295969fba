mod error;
pub mod sqlite;

pub use error::{Result, StoreError};
pub use sqlite::{Database, ForeignKeyPolicy};
