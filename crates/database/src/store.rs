use crate::error::DbError;
use async_trait::async_trait;
use core_types::{Employee, FieldUpdate, NewEmployee, NewProduct, Product, Table};

/// The operations the console performs against the market's records.
///
/// `DbRepository` implements this over MySQL. Keeping the console behind this
/// trait lets it run against any store, including an in-memory one in tests.
///
/// Contract shared by every implementation:
/// - each write is durable once the call returns `Ok` (auto-commit);
/// - ids are assigned by the store, unique, and never change;
/// - updates and deletes on an id that does not exist return
///   `DbError::NotFound` and change nothing.
#[async_trait]
pub trait MarketStore: Send {
    /// Creates the database and tables if absent. Safe to call repeatedly.
    async fn ensure_schema(&mut self, database_name: &str) -> Result<(), DbError>;

    /// Inserts an employee and returns the assigned id. A missing hire date
    /// is stored as today.
    async fn insert_employee(&mut self, employee: &NewEmployee) -> Result<i32, DbError>;

    /// Inserts a product and returns the assigned id.
    async fn insert_product(&mut self, product: &NewProduct) -> Result<i32, DbError>;

    /// Sets a single column of the row with the given id.
    async fn update_field(&mut self, id: i32, update: &FieldUpdate) -> Result<(), DbError>;

    /// Sets the quantity of a product.
    async fn update_stock(&mut self, product_id: i32, quantity: i32) -> Result<(), DbError>;

    async fn delete_record(&mut self, table: Table, id: i32) -> Result<(), DbError>;

    /// All employees, ordered by id.
    async fn employees(&mut self) -> Result<Vec<Employee>, DbError>;

    /// Products ordered by id, restricted to an exact category match when one
    /// is given.
    async fn products(&mut self, category: Option<&str>) -> Result<Vec<Product>, DbError>;

    async fn employee(&mut self, id: i32) -> Result<Option<Employee>, DbError>;

    async fn product(&mut self, id: i32) -> Result<Option<Product>, DbError>;
}
