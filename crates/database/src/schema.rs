use crate::error::DbError;
use configuration::is_valid_database_name;
use sqlx::Executor;
use sqlx::mysql::MySqlConnection;

pub const CREATE_EMPLOYEES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS Employees (
        id INT AUTO_INCREMENT PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        role VARCHAR(50),
        salary DECIMAL(10, 2),
        hire_date DATE
    )
"#;

pub const CREATE_PRODUCTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS Products (
        id INT AUTO_INCREMENT PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        price DECIMAL(10, 2) NOT NULL,
        quantity INT NOT NULL DEFAULT 0,
        category VARCHAR(50)
    )
"#;

/// Creates the database if absent, makes it the active schema and creates
/// both tables if absent.
///
/// Idempotent: every statement is `IF NOT EXISTS`, so this runs on every
/// startup. Each statement is sent as plain text with no bound arguments,
/// which keeps it on the text protocol: MySQL does not accept `USE` as a
/// prepared statement.
pub async fn ensure_schema(
    conn: &mut MySqlConnection,
    database_name: &str,
) -> Result<(), DbError> {
    if !is_valid_database_name(database_name) {
        return Err(DbError::InvalidDatabaseName(database_name.to_string()));
    }

    let create_database = format!("CREATE DATABASE IF NOT EXISTS `{database_name}`");
    conn.execute(create_database.as_str()).await?;

    let use_database = format!("USE `{database_name}`");
    conn.execute(use_database.as_str()).await?;

    conn.execute(CREATE_EMPLOYEES_TABLE).await?;
    conn.execute(CREATE_PRODUCTS_TABLE).await?;

    tracing::info!(database = %database_name, "Schema ensured.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;

    // `MarketStore` is an `#[async_trait]` trait, so the schema future must be `Send`.
    fn schema_future<'a>(
        conn: &'a mut MySqlConnection,
    ) -> impl Future<Output = Result<(), DbError>> + Send + 'a {
        ensure_schema(conn, "mercado")
    }

    #[test]
    fn schema_future_can_cross_threads() {
        let _ = schema_future;
    }
}
