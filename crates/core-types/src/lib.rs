//! Domain types shared by every crate in the market manager: the two records
//! the store keeps, the allow-lists that guard dynamic SQL, and the parsers
//! that turn raw console input into typed values.

pub mod enums;
pub mod error;
pub mod parse;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{EmployeeColumn, ProductColumn, ReportKind, Table};
pub use error::CoreError;
pub use structs::{Employee, FieldUpdate, FieldValue, NewEmployee, NewProduct, Product};
