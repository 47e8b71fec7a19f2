#![allow(dead_code)]

use async_trait::async_trait;
use core_types::{Employee, FieldUpdate, FieldValue, NewEmployee, NewProduct, Product, Table};
use core_types::{EmployeeColumn, ProductColumn};
use database::{DbError, MarketStore};
use rust_decimal_macros::dec;

/// A `MarketStore` kept in two vectors, following the same contract as the
/// MySQL repository: store-assigned increasing ids and `NotFound` for writes
/// to missing ids.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    pub employees: Vec<Employee>,
    pub products: Vec<Product>,
    pub schema_calls: usize,
    /// When set, every call fails like a lost connection would.
    pub broken: bool,
    last_id: i32,
}

impl InMemoryStore {
    pub fn with_products(products: Vec<Product>) -> Self {
        let last_id = products.iter().map(|p| p.id).max().unwrap_or(0);
        Self {
            products,
            last_id,
            ..Self::default()
        }
    }

    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), DbError> {
        if self.broken {
            return Err(DbError::QueryError(sqlx::Error::Protocol("connection lost".to_string())));
        }
        Ok(())
    }

    fn next_id(&mut self) -> i32 {
        self.last_id += 1;
        self.last_id
    }
}

pub fn product(id: i32, name: &str, category: &str) -> Product {
    Product {
        id,
        name: name.to_string(),
        price: dec!(4.50),
        quantity: 20,
        category: Some(category.to_string()),
    }
}

fn text(value: &FieldValue) -> String {
    value.to_string()
}

#[async_trait]
impl MarketStore for InMemoryStore {
    async fn ensure_schema(&mut self, _database_name: &str) -> Result<(), DbError> {
        self.check()?;
        self.schema_calls += 1;
        Ok(())
    }

    async fn insert_employee(&mut self, employee: &NewEmployee) -> Result<i32, DbError> {
        self.check()?;
        let id = self.next_id();
        self.employees.push(Employee {
            id,
            name: employee.name.clone(),
            role: Some(employee.role.clone()),
            salary: Some(employee.salary),
            hire_date: Some(employee.hire_date_or_today()),
        });
        Ok(id)
    }

    async fn insert_product(&mut self, product: &NewProduct) -> Result<i32, DbError> {
        self.check()?;
        let id = self.next_id();
        self.products.push(Product {
            id,
            name: product.name.clone(),
            price: product.price,
            quantity: product.quantity,
            category: Some(product.category.clone()),
        });
        Ok(id)
    }

    async fn update_field(&mut self, id: i32, update: &FieldUpdate) -> Result<(), DbError> {
        self.check()?;
        let not_found = DbError::NotFound { table: update.table(), id };
        match update {
            FieldUpdate::Employee(column, value) => {
                let row = self.employees.iter_mut().find(|e| e.id == id).ok_or(not_found)?;
                match (column, value) {
                    (EmployeeColumn::Name, v) => row.name = text(v),
                    (EmployeeColumn::Role, v) => row.role = Some(text(v)),
                    (EmployeeColumn::Salary, FieldValue::Decimal(d)) => row.salary = Some(*d),
                    (EmployeeColumn::HireDate, FieldValue::Date(d)) => row.hire_date = Some(*d),
                    (column, value) => panic!("mistyped update {column:?} = {value:?}"),
                }
            }
            FieldUpdate::Product(column, value) => {
                let row = self.products.iter_mut().find(|p| p.id == id).ok_or(not_found)?;
                match (column, value) {
                    (ProductColumn::Name, v) => row.name = text(v),
                    (ProductColumn::Category, v) => row.category = Some(text(v)),
                    (ProductColumn::Price, FieldValue::Decimal(d)) => row.price = *d,
                    (ProductColumn::Quantity, FieldValue::Integer(q)) => row.quantity = *q,
                    (column, value) => panic!("mistyped update {column:?} = {value:?}"),
                }
            }
        }
        Ok(())
    }

    async fn update_stock(&mut self, product_id: i32, quantity: i32) -> Result<(), DbError> {
        self.check()?;
        let row = self
            .products
            .iter_mut()
            .find(|p| p.id == product_id)
            .ok_or(DbError::NotFound { table: Table::Products, id: product_id })?;
        row.quantity = quantity;
        Ok(())
    }

    async fn delete_record(&mut self, table: Table, id: i32) -> Result<(), DbError> {
        self.check()?;
        let removed = match table {
            Table::Employees => {
                let before = self.employees.len();
                self.employees.retain(|e| e.id != id);
                before - self.employees.len()
            }
            Table::Products => {
                let before = self.products.len();
                self.products.retain(|p| p.id != id);
                before - self.products.len()
            }
        };
        if removed == 0 {
            return Err(DbError::NotFound { table, id });
        }
        Ok(())
    }

    async fn employees(&mut self) -> Result<Vec<Employee>, DbError> {
        self.check()?;
        Ok(self.employees.clone())
    }

    async fn products(&mut self, category: Option<&str>) -> Result<Vec<Product>, DbError> {
        self.check()?;
        Ok(self
            .products
            .iter()
            .filter(|p| category.is_none_or(|c| p.category.as_deref() == Some(c)))
            .cloned()
            .collect())
    }

    async fn employee(&mut self, id: i32) -> Result<Option<Employee>, DbError> {
        self.check()?;
        Ok(self.employees.iter().find(|e| e.id == id).cloned())
    }

    async fn product(&mut self, id: i32) -> Result<Option<Product>, DbError> {
        self.check()?;
        Ok(self.products.iter().find(|p| p.id == id).cloned())
    }
}
