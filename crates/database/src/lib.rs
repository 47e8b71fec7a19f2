//! # Market Database Crate
//!
//! This crate is the application-specific interface to the MySQL store that
//! holds the market's employees and products.
//!
//! ## Architectural Principles
//!
//! - **Adapter:** all SQL lives here. The console only sees the `MarketStore`
//!   trait and the domain types from `core-types`.
//! - **One connection per session:** `connect` opens a single `MySqlConnection`
//!   that `DbRepository` owns until `DbRepository::close`. There is no pool.
//! - **Auto-commit:** every statement commits on its own. No transactions.
//! - **Closed SQL text:** table and column names come from the `Table`,
//!   `EmployeeColumn` and `ProductColumn` allow-lists; values are always bound.
//!
//! ## Public API
//!
//! - `connect`: opens the session connection from `DatabaseSettings`.
//! - `ensure_schema`: creates the database and both tables if absent.
//! - `MarketStore`: the operations the console consumes.
//! - `DbRepository`: the MySQL implementation of `MarketStore`.
//! - `DbError`: the error type returned by every operation.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;
pub mod schema;
pub mod store;

// Re-export the key components to create a clean, public-facing API.
pub use connection::connect;
pub use error::DbError;
pub use repository::DbRepository;
pub use schema::ensure_schema;
pub use store::MarketStore;
