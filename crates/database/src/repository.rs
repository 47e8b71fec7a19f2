use crate::error::DbError;
use crate::schema;
use crate::store::MarketStore;
use async_trait::async_trait;
use core_types::{Employee, FieldUpdate, FieldValue, NewEmployee, NewProduct, Product, Table};
use sqlx::Connection;
use sqlx::MySql;
use sqlx::mysql::{MySqlArguments, MySqlConnection, MySqlQueryResult};
use sqlx::query::Query;

const SELECT_EMPLOYEES: &str = "SELECT id, name, role, salary, hire_date FROM Employees";
const SELECT_PRODUCTS: &str = "SELECT id, name, price, quantity, category FROM Products";
const INSERT_EMPLOYEE: &str =
    "INSERT INTO Employees (name, role, salary, hire_date) VALUES (?, ?, ?, ?)";
const INSERT_PRODUCT: &str =
    "INSERT INTO Products (name, price, quantity, category) VALUES (?, ?, ?, ?)";

/// The `DbRepository` provides the market's data access over one MySQL
/// connection. It encapsulates all SQL queries.
///
/// The repository owns the session connection; call `close` once when the
/// session ends.
#[derive(Debug)]
pub struct DbRepository {
    conn: MySqlConnection,
}

impl DbRepository {
    /// Creates a new `DbRepository` that takes ownership of the session connection.
    pub fn new(conn: MySqlConnection) -> Self {
        Self { conn }
    }

    /// Closes the session connection, sending a clean disconnect to the server.
    pub async fn close(self) -> Result<(), DbError> {
        self.conn.close().await?;
        tracing::info!("Database connection closed.");
        Ok(())
    }

    async fn exists(&mut self, table: Table, id: i32) -> Result<bool, DbError> {
        let sql = format!("SELECT COUNT(*) FROM {} WHERE id = ?", table.as_sql());
        let count: i64 = sqlx::query_scalar(&sql).bind(id).fetch_one(&mut self.conn).await?;
        Ok(count > 0)
    }

    /// MySQL may report zero affected rows when the new value equals the old
    /// one, so a zero count is confirmed with a lookup before it becomes
    /// `NotFound`.
    async fn require_row(
        &mut self,
        result: MySqlQueryResult,
        table: Table,
        id: i32,
    ) -> Result<(), DbError> {
        if result.rows_affected() == 0 && !self.exists(table, id).await? {
            return Err(DbError::NotFound { table, id });
        }
        Ok(())
    }
}

type MySqlQuery<'q> = Query<'q, MySql, MySqlArguments>;

fn bind_value<'q>(query: MySqlQuery<'q>, value: &FieldValue) -> MySqlQuery<'q> {
    match value {
        FieldValue::Text(text) => query.bind(text.clone()),
        FieldValue::Decimal(amount) => query.bind(*amount),
        FieldValue::Integer(number) => query.bind(*number),
        FieldValue::Date(date) => query.bind(*date),
    }
}

fn assigned_id(result: &MySqlQueryResult) -> Result<i32, DbError> {
    let raw = result.last_insert_id();
    i32::try_from(raw).map_err(|_| DbError::IdOutOfRange(raw))
}

#[async_trait]
impl MarketStore for DbRepository {
    async fn ensure_schema(&mut self, database_name: &str) -> Result<(), DbError> {
        schema::ensure_schema(&mut self.conn, database_name).await
    }

    async fn insert_employee(&mut self, employee: &NewEmployee) -> Result<i32, DbError> {
        let result = sqlx::query(INSERT_EMPLOYEE)
            .bind(&employee.name)
            .bind(&employee.role)
            .bind(employee.salary)
            .bind(employee.hire_date_or_today())
            .execute(&mut self.conn)
            .await?;

        let id = assigned_id(&result)?;
        tracing::info!(table = "Employees", id, name = %employee.name, "Inserted employee.");
        Ok(id)
    }

    async fn insert_product(&mut self, product: &NewProduct) -> Result<i32, DbError> {
        let result = sqlx::query(INSERT_PRODUCT)
            .bind(&product.name)
            .bind(product.price)
            .bind(product.quantity)
            .bind(&product.category)
            .execute(&mut self.conn)
            .await?;

        let id = assigned_id(&result)?;
        tracing::info!(table = "Products", id, name = %product.name, "Inserted product.");
        Ok(id)
    }

    async fn update_field(&mut self, id: i32, update: &FieldUpdate) -> Result<(), DbError> {
        let table = update.table();
        // Both identifiers come from the allow-lists; only the value and id are bound.
        let sql = format!("UPDATE {} SET {} = ? WHERE id = ?", table.as_sql(), update.column_sql());
        let result = bind_value(sqlx::query(&sql), update.value())
            .bind(id)
            .execute(&mut self.conn)
            .await?;

        self.require_row(result, table, id).await?;
        tracing::info!(table = %table, id, column = update.column_sql(), "Updated field.");
        Ok(())
    }

    async fn update_stock(&mut self, product_id: i32, quantity: i32) -> Result<(), DbError> {
        let result = sqlx::query("UPDATE Products SET quantity = ? WHERE id = ?")
            .bind(quantity)
            .bind(product_id)
            .execute(&mut self.conn)
            .await?;

        self.require_row(result, Table::Products, product_id).await?;
        tracing::info!(id = product_id, quantity, "Updated stock.");
        Ok(())
    }

    async fn delete_record(&mut self, table: Table, id: i32) -> Result<(), DbError> {
        let sql = format!("DELETE FROM {} WHERE id = ?", table.as_sql());
        let result = sqlx::query(&sql).bind(id).execute(&mut self.conn).await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound { table, id });
        }
        tracing::info!(table = %table, id, "Deleted record.");
        Ok(())
    }

    async fn employees(&mut self) -> Result<Vec<Employee>, DbError> {
        let sql = format!("{SELECT_EMPLOYEES} ORDER BY id");
        let employees = sqlx::query_as::<_, Employee>(&sql).fetch_all(&mut self.conn).await?;
        Ok(employees)
    }

    async fn products(&mut self, category: Option<&str>) -> Result<Vec<Product>, DbError> {
        let products = match category {
            Some(category) => {
                let sql = format!("{SELECT_PRODUCTS} WHERE category = ? ORDER BY id");
                sqlx::query_as::<_, Product>(&sql)
                    .bind(category)
                    .fetch_all(&mut self.conn)
                    .await?
            }
            None => {
                let sql = format!("{SELECT_PRODUCTS} ORDER BY id");
                sqlx::query_as::<_, Product>(&sql).fetch_all(&mut self.conn).await?
            }
        };
        Ok(products)
    }

    async fn employee(&mut self, id: i32) -> Result<Option<Employee>, DbError> {
        let sql = format!("{SELECT_EMPLOYEES} WHERE id = ?");
        let employee = sqlx::query_as::<_, Employee>(&sql)
            .bind(id)
            .fetch_optional(&mut self.conn)
            .await?;
        Ok(employee)
    }

    async fn product(&mut self, id: i32) -> Result<Option<Product>, DbError> {
        let sql = format!("{SELECT_PRODUCTS} WHERE id = ?");
        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&mut self.conn)
            .await?;
        Ok(product)
    }
}
