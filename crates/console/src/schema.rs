use database::MarketStore;
use std::io::{self, Write};

/// Ensures the database and tables exist, reporting the outcome.
///
/// A failure is printed and logged but not returned: the session goes on, and
/// later operations will report the missing tables themselves.
pub async fn initialize<S, W>(store: &mut S, out: &mut W, database_name: &str) -> io::Result<bool>
where
    S: MarketStore + ?Sized,
    W: Write,
{
    match store.ensure_schema(database_name).await {
        Ok(()) => {
            writeln!(out, "Database and tables created/verified successfully.")?;
            Ok(true)
        }
        Err(e) => {
            tracing::error!(error = ?e, database = %database_name, "Schema initialization failed.");
            writeln!(out, "Error creating database or tables: {e}")?;
            Ok(false)
        }
    }
}
