use crate::enums::Table;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid input for {0}: {1}")]
    InvalidInput(String, String),

    #[error("Unknown table '{0}'. Use Employees or Products.")]
    UnknownTable(String),

    #[error("Column '{column}' cannot be changed in table {table}. Allowed columns: {allowed}.")]
    UnknownColumn {
        table: Table,
        column: String,
        allowed: String,
    },
}
