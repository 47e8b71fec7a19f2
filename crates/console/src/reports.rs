use comfy_table::Table as TextTable;
use comfy_table::presets::ASCII_FULL;
use core_types::{Employee, Product, ReportKind};
use database::MarketStore;
use std::io::{self, Write};

pub const PRODUCTS_QUERY_TITLE: &str = "=== Products ===";

const EMPTY: &str = "(no records)";

fn or_dash(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}

pub fn employees_table(rows: &[Employee]) -> TextTable {
    let mut table = TextTable::new();
    table
        .load_preset(ASCII_FULL)
        .set_header(vec!["ID", "Name", "Role", "Salary", "Hire date"]);
    for employee in rows {
        table.add_row(vec![
            employee.id.to_string(),
            employee.name.clone(),
            or_dash(employee.role.clone()),
            or_dash(employee.salary.map(|s| s.to_string())),
            or_dash(employee.hire_date.map(|d| d.to_string())),
        ]);
    }
    table
}

pub fn products_table(rows: &[Product]) -> TextTable {
    let mut table = TextTable::new();
    table
        .load_preset(ASCII_FULL)
        .set_header(vec!["ID", "Name", "Price", "Quantity", "Category"]);
    for product in rows {
        table.add_row(vec![
            product.id.to_string(),
            product.name.clone(),
            product.price.to_string(),
            product.quantity.to_string(),
            or_dash(product.category.clone()),
        ]);
    }
    table
}

fn write_section<W: Write>(out: &mut W, title: &str, table: Option<TextTable>) -> io::Result<()> {
    writeln!(out, "\n{title}")?;
    match table {
        Some(table) => writeln!(out, "{table}"),
        None => writeln!(out, "{EMPTY}"),
    }
}

/// Runs one of the fixed full-table reports and prints it. Returns the
/// number of rows shown; a store failure is printed and counts as zero.
pub async fn report<S, W>(store: &mut S, out: &mut W, kind: ReportKind) -> io::Result<usize>
where
    S: MarketStore + ?Sized,
    W: Write,
{
    let rendered = match kind {
        ReportKind::Employees => store
            .employees()
            .await
            .map(|rows| (rows.len(), (!rows.is_empty()).then(|| employees_table(&rows)))),
        ReportKind::Products => store
            .products(None)
            .await
            .map(|rows| (rows.len(), (!rows.is_empty()).then(|| products_table(&rows)))),
    };

    match rendered {
        Ok((count, table)) => {
            write_section(out, kind.title(), table)?;
            tracing::debug!(table = %kind.table(), rows = count, "Report generated.");
            Ok(count)
        }
        Err(e) => {
            tracing::error!(error = ?e, table = %kind.table(), "Failed to generate report.");
            writeln!(out, "Error generating report: {e}")?;
            Ok(0)
        }
    }
}

/// Prints the products in `category`, or every product when the category is
/// blank or absent. The category is bound as a parameter, never spliced.
pub async fn query_products<S, W>(
    store: &mut S,
    out: &mut W,
    category: Option<&str>,
) -> io::Result<usize>
where
    S: MarketStore + ?Sized,
    W: Write,
{
    let category = category.map(str::trim).filter(|c| !c.is_empty());

    match store.products(category).await {
        Ok(rows) => {
            let table = (!rows.is_empty()).then(|| products_table(&rows));
            write_section(out, PRODUCTS_QUERY_TITLE, table)?;
            Ok(rows.len())
        }
        Err(e) => {
            tracing::error!(error = ?e, category = ?category, "Failed to query products.");
            writeln!(out, "Error querying products: {e}")?;
            Ok(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn product_rows_render_every_field() {
        let rendered = products_table(&[Product {
            id: 3,
            name: "Milk".to_string(),
            price: dec!(4.50),
            quantity: 20,
            category: Some("Dairy".to_string()),
        }])
        .to_string();

        for cell in ["ID", "Category", "3", "Milk", "4.50", "20", "Dairy"] {
            assert!(rendered.contains(cell), "missing {cell} in\n{rendered}");
        }
    }

    #[test]
    fn missing_employee_fields_render_as_dash() {
        let rendered = employees_table(&[Employee {
            id: 1,
            name: "Ana".to_string(),
            role: None,
            salary: None,
            hire_date: Some(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()),
        }])
        .to_string();

        assert!(rendered.contains("Ana"));
        assert!(rendered.contains("2024-02-29"));
        assert!(rendered.contains(" - "));
    }
}
