use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The tables the market keeps.
///
/// Statements that must name their table in the SQL text (generic update and
/// delete) only ever use `as_sql()`, so user input never reaches the statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Table {
    Employees,
    Products,
}

impl Table {
    pub const ALL: [Table; 2] = [Table::Employees, Table::Products];

    pub fn as_sql(&self) -> &'static str {
        match self {
            Table::Employees => "Employees",
            Table::Products => "Products",
        }
    }

    /// The columns a generic update may touch. `id` is never among them.
    pub fn updatable_columns(&self) -> Vec<&'static str> {
        match self {
            Table::Employees => EmployeeColumn::ALL.iter().map(|c| c.as_sql()).collect(),
            Table::Products => ProductColumn::ALL.iter().map(|c| c.as_sql()).collect(),
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

impl FromStr for Table {
    type Err = CoreError;

    /// Accepts the table names case-insensitively. The Portuguese names the
    /// legacy schema used are accepted as aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "employees" | "funcionarios" => Ok(Table::Employees),
            "products" | "produtos" => Ok(Table::Products),
            _ => Err(CoreError::UnknownTable(s.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeColumn {
    Name,
    Role,
    Salary,
    HireDate,
}

impl EmployeeColumn {
    pub const ALL: [EmployeeColumn; 4] = [
        EmployeeColumn::Name,
        EmployeeColumn::Role,
        EmployeeColumn::Salary,
        EmployeeColumn::HireDate,
    ];

    pub fn as_sql(&self) -> &'static str {
        match self {
            EmployeeColumn::Name => "name",
            EmployeeColumn::Role => "role",
            EmployeeColumn::Salary => "salary",
            EmployeeColumn::HireDate => "hire_date",
        }
    }
}

impl FromStr for EmployeeColumn {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_sql().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| unknown_column(Table::Employees, wanted))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductColumn {
    Name,
    Price,
    Quantity,
    Category,
}

impl ProductColumn {
    pub const ALL: [ProductColumn; 4] = [
        ProductColumn::Name,
        ProductColumn::Price,
        ProductColumn::Quantity,
        ProductColumn::Category,
    ];

    pub fn as_sql(&self) -> &'static str {
        match self {
            ProductColumn::Name => "name",
            ProductColumn::Price => "price",
            ProductColumn::Quantity => "quantity",
            ProductColumn::Category => "category",
        }
    }
}

impl FromStr for ProductColumn {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_sql().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| unknown_column(Table::Products, wanted))
    }
}

fn unknown_column(table: Table, column: &str) -> CoreError {
    CoreError::UnknownColumn {
        table,
        column: column.to_string(),
        allowed: table.updatable_columns().join(", "),
    }
}

/// The two fixed full-table reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportKind {
    Employees,
    Products,
}

impl ReportKind {
    /// Maps a report sub-menu code to its report. Anything else is not a report.
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(ReportKind::Employees),
            "2" => Some(ReportKind::Products),
            _ => None,
        }
    }

    pub fn table(&self) -> Table {
        match self {
            ReportKind::Employees => Table::Employees,
            ReportKind::Products => Table::Products,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::Employees => "=== Employees Report ===",
            ReportKind::Products => "=== Products in Stock ===",
        }
    }
}
