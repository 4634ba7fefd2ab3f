//! Parsing helpers for Text-stored decimals and dates.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::errors::StorageError;

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

pub(crate) fn parse_decimal(column: &str, raw: &str) -> Result<Decimal, StorageError> {
    Decimal::from_str(raw)
        .map_err(|e| StorageError::MalformedRow(format!("{}='{}': {}", column, raw, e)))
}

pub(crate) fn parse_date(column: &str, raw: &str) -> Result<NaiveDate, StorageError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|e| StorageError::MalformedRow(format!("{}='{}': {}", column, raw, e)))
}

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
