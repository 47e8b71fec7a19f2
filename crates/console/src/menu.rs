use crate::error::ConsoleError;
use crate::prompt::Prompter;
use crate::{records, reports};
use core_types::parse::{parse_decimal, parse_id, parse_integer, parse_optional_date};
use core_types::{FieldUpdate, NewEmployee, NewProduct, ReportKind, Table};
use database::MarketStore;
use std::io::{self, BufRead, Write};

const MAIN_MENU: &str = "
=== MARKET MANAGEMENT SYSTEM ===
1. Register Employee or Product
2. Update Record
3. Update Stock
4. Delete Record
5. Generate Reports
6. Query Products
7. Exit";

const CREATE_MENU: &str = "Choose what to register:
1. Register Employee
2. Register Product";

const REPORT_MENU: &str = "1. Employees Report
2. Products Report";

pub const INVALID_OPTION: &str = "Invalid option. Try again.";
pub const FAREWELL: &str = "Exiting the system... Goodbye!";

/// The top-level menu codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Create,
    UpdateField,
    UpdateStock,
    Delete,
    Report,
    QueryProducts,
    Exit,
}

impl MenuChoice {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "1" => Some(MenuChoice::Create),
            "2" => Some(MenuChoice::UpdateField),
            "3" => Some(MenuChoice::UpdateStock),
            "4" => Some(MenuChoice::Delete),
            "5" => Some(MenuChoice::Report),
            "6" => Some(MenuChoice::QueryProducts),
            "7" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// What the loop does after one menu iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// The interactive loop. It owns the store for the session; take it back
/// with `into_parts` to close it.
pub struct Menu<S, R, W> {
    store: S,
    prompter: Prompter<R, W>,
}

impl<S, R, W> Menu<S, R, W>
where
    S: MarketStore,
    R: BufRead,
    W: Write,
{
    pub fn new(store: S, input: R, output: W) -> Self {
        Self {
            store,
            prompter: Prompter::new(input, output),
        }
    }

    pub fn into_parts(self) -> (S, W) {
        (self.store, self.prompter.into_output())
    }

    /// Runs until the exit code is chosen or input ends.
    ///
    /// Invalid input and failed operations are reported and the menu is shown
    /// again. Only a failure to use the console itself is returned.
    pub async fn run(&mut self) -> io::Result<()> {
        loop {
            match self.step().await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(ConsoleError::Invalid(e)) => {
                    tracing::debug!(error = %e, "Rejected console input.");
                    self.prompter.line(&e.to_string())?;
                }
                Err(ConsoleError::InputClosed) => {
                    tracing::info!("Input closed, ending session.");
                    self.prompter.line("")?;
                    self.prompter.line(FAREWELL)?;
                    return Ok(());
                }
                Err(ConsoleError::Io(e)) => return Err(e),
            }
        }
    }

    /// Shows the menu, reads one code and performs it.
    pub async fn step(&mut self) -> Result<Flow, ConsoleError> {
        self.prompter.line(MAIN_MENU)?;
        let code = self.prompter.ask("Choose an option: ")?;

        let Some(choice) = MenuChoice::from_code(&code) else {
            self.prompter.line(&format!("Option {code} is invalid. Try again."))?;
            return Ok(Flow::Continue);
        };
        tracing::debug!(?choice, "Menu choice.");

        match choice {
            MenuChoice::Create => self.create().await?,
            MenuChoice::UpdateField => self.update_field().await?,
            MenuChoice::UpdateStock => self.update_stock().await?,
            MenuChoice::Delete => self.delete().await?,
            MenuChoice::Report => self.report().await?,
            MenuChoice::QueryProducts => self.query_products().await?,
            MenuChoice::Exit => {
                self.prompter.line(FAREWELL)?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    async fn create(&mut self) -> Result<(), ConsoleError> {
        self.prompter.line(CREATE_MENU)?;
        let code = self.prompter.ask("Choose an option: ")?;
        match code.as_str() {
            "1" => self.create_employee().await,
            "2" => self.create_product().await,
            _ => Ok(self.prompter.line(INVALID_OPTION)?),
        }
    }

    async fn create_employee(&mut self) -> Result<(), ConsoleError> {
        let name = self.prompter.ask("Employee name: ")?;
        let role = self.prompter.ask("Employee role: ")?;
        let salary = self
            .prompter
            .ask_parsed("Employee salary: ", |raw| parse_decimal("salary", raw))?;
        let hire_date = self
            .prompter
            .ask_parsed("Hire date (YYYY-MM-DD, blank for today): ", |raw| {
                parse_optional_date("hire_date", raw)
            })?;

        let employee = NewEmployee {
            name,
            role,
            salary,
            hire_date,
        };
        records::insert_employee(&mut self.store, self.prompter.output(), &employee).await?;
        Ok(())
    }

    async fn create_product(&mut self) -> Result<(), ConsoleError> {
        let name = self.prompter.ask("Product name: ")?;
        let price = self
            .prompter
            .ask_parsed("Product price: ", |raw| parse_decimal("price", raw))?;
        let quantity = self
            .prompter
            .ask_parsed("Product quantity (blank for 0): ", |raw| match raw {
                "" => Ok(0),
                raw => parse_integer("quantity", raw),
            })?;
        let category = self.prompter.ask("Product category: ")?;

        let product = NewProduct {
            name,
            price,
            quantity,
            category,
        };
        records::insert_product(&mut self.store, self.prompter.output(), &product).await?;
        Ok(())
    }

    fn ask_table(&mut self, action: &str) -> Result<Table, ConsoleError> {
        self.prompter
            .ask_parsed(&format!("Table to {action} (Employees or Products): "), |raw| raw.parse())
    }

    async fn update_field(&mut self) -> Result<(), ConsoleError> {
        let table = self.ask_table("update")?;
        let id = self
            .prompter
            .ask_parsed(&format!("ID of the record in table {table}: "), parse_id)?;
        let column = self.prompter.ask(&format!(
            "Column to change in table {table} ({}): ",
            table.updatable_columns().join(", ")
        ))?;
        let raw = self.prompter.ask(&format!("New value for column {column}: "))?;

        let update = FieldUpdate::parse(table, &column, &raw)?;
        records::update_field(&mut self.store, self.prompter.output(), id, &update).await?;
        Ok(())
    }

    async fn update_stock(&mut self) -> Result<(), ConsoleError> {
        let id = self.prompter.ask_parsed("Product ID: ", parse_id)?;
        let quantity = self
            .prompter
            .ask_parsed("New quantity: ", |raw| parse_integer("quantity", raw))?;
        records::update_stock(&mut self.store, self.prompter.output(), id, quantity).await?;
        Ok(())
    }

    async fn delete(&mut self) -> Result<(), ConsoleError> {
        let table = self.ask_table("delete from")?;
        let id = self
            .prompter
            .ask_parsed(&format!("ID of the record to delete from table {table}: "), parse_id)?;
        records::delete_record(&mut self.store, self.prompter.output(), table, id).await?;
        Ok(())
    }

    async fn report(&mut self) -> Result<(), ConsoleError> {
        self.prompter.line(REPORT_MENU)?;
        let code = self.prompter.ask("Choose the report type: ")?;
        match ReportKind::from_choice(&code) {
            Some(kind) => {
                reports::report(&mut self.store, self.prompter.output(), kind).await?;
            }
            None => self.prompter.line(INVALID_OPTION)?,
        }
        Ok(())
    }

    async fn query_products(&mut self) -> Result<(), ConsoleError> {
        let category = self
            .prompter
            .ask("Category to query (leave blank for all products): ")?;
        let out = self.prompter.output();
        reports::query_products(&mut self.store, out, Some(category.as_str())).await?;
        Ok(())
    }
}
