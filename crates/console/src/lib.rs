//! The interactive side of the market manager.
//!
//! - `records`: inserts, updates and deletes, reported to the user.
//! - `reports`: the fixed full-table reports and the product query.
//! - `schema`: startup schema initialization, reported to the user.
//! - `menu`: the loop that reads a menu code and dispatches to the above.
//!
//! Everything here talks to the store through `database::MarketStore` and to
//! the user through any `BufRead`/`Write` pair, so none of it touches the
//! process environment or the real terminal directly.

pub mod error;
pub mod menu;
pub mod prompt;
pub mod records;
pub mod reports;
pub mod schema;

pub use error::ConsoleError;
pub use menu::{Flow, Menu, MenuChoice};
pub use prompt::Prompter;
