//! Conversions from raw console text into typed values.
//!
//! Every function here is a precondition check: a value that fails to parse
//! never reaches the database.

use crate::error::CoreError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

fn invalid(field: &str, raw: &str, expected: &str) -> CoreError {
    CoreError::InvalidInput(field.to_string(), format!("'{}' is not {}", raw.trim(), expected))
}

/// Parses a record id.
pub fn parse_id(raw: &str) -> Result<i32, CoreError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| invalid("id", raw, "a whole number"))
}

pub fn parse_integer(field: &str, raw: &str) -> Result<i32, CoreError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| invalid(field, raw, "a whole number"))
}

/// Parses a money amount. Accepts a decimal comma as well as a decimal point.
pub fn parse_decimal(field: &str, raw: &str) -> Result<Decimal, CoreError> {
    let normalized = raw.trim().replace(',', ".");
    Decimal::from_str(&normalized).map_err(|_| invalid(field, raw, "a decimal number"))
}

pub fn parse_date(field: &str, raw: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| invalid(field, raw, "a date in YYYY-MM-DD format"))
}

/// Blank input means "not given".
pub fn parse_optional_date(field: &str, raw: &str) -> Result<Option<NaiveDate>, CoreError> {
    if raw.trim().is_empty() {
        Ok(None)
    } else {
        parse_date(field, raw).map(Some)
    }
}
