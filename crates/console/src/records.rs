//! Writes against the store, each reported to the user.
//!
//! Every function here catches the store's error, prints a diagnostic and
//! returns normally: a failed write never ends the session and is never
//! retried. The `io::Result` only carries failures to write to the console.

use core_types::{FieldUpdate, NewEmployee, NewProduct, Table};
use database::MarketStore;
use std::io::{self, Write};

/// Registers an employee. Returns the assigned id, or `None` if the store
/// rejected the insert.
pub async fn insert_employee<S, W>(
    store: &mut S,
    out: &mut W,
    employee: &NewEmployee,
) -> io::Result<Option<i32>>
where
    S: MarketStore + ?Sized,
    W: Write,
{
    match store.insert_employee(employee).await {
        Ok(id) => {
            writeln!(out, "Employee {} registered successfully with id {}.", employee.name, id)?;
            Ok(Some(id))
        }
        Err(e) => {
            tracing::error!(error = ?e, name = %employee.name, "Failed to insert employee.");
            writeln!(out, "Error registering employee: {e}")?;
            Ok(None)
        }
    }
}

pub async fn insert_product<S, W>(
    store: &mut S,
    out: &mut W,
    product: &NewProduct,
) -> io::Result<Option<i32>>
where
    S: MarketStore + ?Sized,
    W: Write,
{
    match store.insert_product(product).await {
        Ok(id) => {
            writeln!(out, "Product {} registered successfully with id {}.", product.name, id)?;
            Ok(Some(id))
        }
        Err(e) => {
            tracing::error!(error = ?e, name = %product.name, "Failed to insert product.");
            writeln!(out, "Error registering product: {e}")?;
            Ok(None)
        }
    }
}

/// Generic single-column update. The table and column were already resolved
/// against the allow-lists when `update` was parsed.
pub async fn update_field<S, W>(
    store: &mut S,
    out: &mut W,
    id: i32,
    update: &FieldUpdate,
) -> io::Result<bool>
where
    S: MarketStore + ?Sized,
    W: Write,
{
    match store.update_field(id, update).await {
        Ok(()) => {
            writeln!(out, "Record {} in table {} updated successfully.", id, update.table())?;
            Ok(true)
        }
        Err(e) => {
            tracing::error!(
                error = ?e,
                table = %update.table(),
                id,
                column = update.column_sql(),
                "Failed to update field."
            );
            writeln!(out, "Error updating record: {e}")?;
            Ok(false)
        }
    }
}

pub async fn update_stock<S, W>(
    store: &mut S,
    out: &mut W,
    product_id: i32,
    quantity: i32,
) -> io::Result<bool>
where
    S: MarketStore + ?Sized,
    W: Write,
{
    match store.update_stock(product_id, quantity).await {
        Ok(()) => {
            writeln!(out, "Stock of product {product_id} updated to {quantity}.")?;
            Ok(true)
        }
        Err(e) => {
            tracing::error!(error = ?e, id = product_id, quantity, "Failed to update stock.");
            writeln!(out, "Error updating stock: {e}")?;
            Ok(false)
        }
    }
}

pub async fn delete_record<S, W>(
    store: &mut S,
    out: &mut W,
    table: Table,
    id: i32,
) -> io::Result<bool>
where
    S: MarketStore + ?Sized,
    W: Write,
{
    match store.delete_record(table, id).await {
        Ok(()) => {
            writeln!(out, "Record {id} deleted successfully from table {table}.")?;
            Ok(true)
        }
        Err(e) => {
            tracing::error!(error = ?e, table = %table, id, "Failed to delete record.");
            writeln!(out, "Error deleting record: {e}")?;
            Ok(false)
        }
    }
}
