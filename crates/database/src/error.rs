use core_types::Table;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to connect to the database: {0}")]
    ConnectionError(#[source] sqlx::Error),

    #[error("Database error: {0}")]
    QueryError(#[from] sqlx::Error),

    #[error("Invalid database name '{0}'.")]
    InvalidDatabaseName(String),

    #[error("No record with id {id} in table {table}.")]
    NotFound { table: Table, id: i32 },

    #[error("The store assigned id {0}, which does not fit the id column type.")]
    IdOutOfRange(u64),
}
