use crate::enums::{EmployeeColumn, ProductColumn, Table};
use crate::error::CoreError;
use crate::parse;
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// A row of the `Employees` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub role: Option<String>,
    pub salary: Option<Decimal>,
    pub hire_date: Option<NaiveDate>,
}

/// The fields needed to register an employee. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub role: String,
    pub salary: Decimal,
    /// `None` means the employee was hired today.
    pub hire_date: Option<NaiveDate>,
}

impl NewEmployee {
    pub fn hire_date_or_today(&self) -> NaiveDate {
        self.hire_date.unwrap_or_else(|| Local::now().date_naive())
    }
}

/// A row of the `Products` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    pub quantity: i32,
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
    pub quantity: i32,
    pub category: String,
}

/// A value already coerced to the type of the column it is written to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldValue {
    Text(String),
    Decimal(Decimal),
    Integer(i32),
    Date(NaiveDate),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Decimal(d) => write!(f, "{d}"),
            FieldValue::Integer(i) => write!(f, "{i}"),
            FieldValue::Date(d) => write!(f, "{}", d.format(parse::DATE_FORMAT)),
        }
    }
}

/// A single-column change for one row, restricted to the known columns of
/// the known tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldUpdate {
    Employee(EmployeeColumn, FieldValue),
    Product(ProductColumn, FieldValue),
}

impl FieldUpdate {
    /// Resolves `column` against the table's allow-list and coerces `raw` to
    /// that column's type.
    pub fn parse(table: Table, column: &str, raw: &str) -> Result<Self, CoreError> {
        match table {
            Table::Employees => {
                let column: EmployeeColumn = column.parse()?;
                let value = match column {
                    EmployeeColumn::Name | EmployeeColumn::Role => {
                        FieldValue::Text(raw.to_string())
                    }
                    EmployeeColumn::Salary => {
                        FieldValue::Decimal(parse::parse_decimal("salary", raw)?)
                    }
                    EmployeeColumn::HireDate => {
                        FieldValue::Date(parse::parse_date("hire_date", raw)?)
                    }
                };
                Ok(FieldUpdate::Employee(column, value))
            }
            Table::Products => {
                let column: ProductColumn = column.parse()?;
                let value = match column {
                    ProductColumn::Name | ProductColumn::Category => {
                        FieldValue::Text(raw.to_string())
                    }
                    ProductColumn::Price => {
                        FieldValue::Decimal(parse::parse_decimal("price", raw)?)
                    }
                    ProductColumn::Quantity => {
                        FieldValue::Integer(parse::parse_integer("quantity", raw)?)
                    }
                };
                Ok(FieldUpdate::Product(column, value))
            }
        }
    }

    pub fn table(&self) -> Table {
        match self {
            FieldUpdate::Employee(..) => Table::Employees,
            FieldUpdate::Product(..) => Table::Products,
        }
    }

    pub fn column_sql(&self) -> &'static str {
        match self {
            FieldUpdate::Employee(column, _) => column.as_sql(),
            FieldUpdate::Product(column, _) => column.as_sql(),
        }
    }

    pub fn value(&self) -> &FieldValue {
        match self {
            FieldUpdate::Employee(_, value) | FieldUpdate::Product(_, value) => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn update_values_are_coerced_per_column() {
        let update = FieldUpdate::parse(Table::Products, "price", "4.75").unwrap();
        assert_eq!(
            update,
            FieldUpdate::Product(ProductColumn::Price, FieldValue::Decimal(dec!(4.75)))
        );
        assert_eq!(update.table(), Table::Products);
        assert_eq!(update.column_sql(), "price");

        let update = FieldUpdate::parse(Table::Employees, "hire_date", "2023-07-15").unwrap();
        assert_eq!(
            update.value(),
            &FieldValue::Date(NaiveDate::from_ymd_opt(2023, 7, 15).unwrap())
        );
    }

    #[test]
    fn text_columns_keep_the_raw_value() {
        let update = FieldUpdate::parse(Table::Employees, "role", "Cashier").unwrap();
        assert_eq!(update.value(), &FieldValue::Text("Cashier".to_string()));
    }

    #[test]
    fn malformed_values_are_rejected() {
        assert!(FieldUpdate::parse(Table::Products, "quantity", "lots").is_err());
        assert!(FieldUpdate::parse(Table::Employees, "salary", "").is_err());
    }

    #[test]
    fn columns_outside_the_allow_list_are_rejected() {
        let err = FieldUpdate::parse(Table::Products, "id", "7").unwrap_err();
        assert!(matches!(err, CoreError::UnknownColumn { .. }));
        let err = FieldUpdate::parse(Table::Employees, "name = 'x', salary", "1").unwrap_err();
        assert!(matches!(err, CoreError::UnknownColumn { .. }));
    }

    #[test]
    fn missing_hire_date_defaults_to_today() {
        let employee = NewEmployee {
            name: "Ana".to_string(),
            role: "Cashier".to_string(),
            salary: dec!(2500.00),
            hire_date: None,
        };
        assert_eq!(employee.hire_date_or_today(), Local::now().date_naive());
    }

    #[test]
    fn field_values_display_as_entered() {
        assert_eq!(FieldValue::Decimal(dec!(4.50)).to_string(), "4.50");
        assert_eq!(
            FieldValue::Date(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()).to_string(),
            "2024-01-02"
        );
    }
}
