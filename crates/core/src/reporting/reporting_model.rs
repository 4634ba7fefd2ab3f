//! Result row shapes handed to the presentation layer.
//!
//! The serialized field names are a de facto wire format: the dashboard
//! addresses its table columns by these exact strings. Do not rename them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::brokers::PrimeBroker;

/// One book after pivoting: margin per prime broker plus totals, in the
/// reporting currency.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BookAggregateRow {
    pub book: String,
    /// Margin per prime broker. Always carries every broker in the fixed
    /// set; a book with no position at a broker holds zero, never null.
    #[serde(flatten)]
    pub margins: BTreeMap<PrimeBroker, Decimal>,
    #[serde(rename = "Total Margin")]
    pub total_margin: Decimal,
    #[serde(rename = "Total GMV")]
    pub total_gmv: Decimal,
    /// `Total Margin / Total GMV`; `None` when the book has no GMV.
    #[serde(rename = "Margin Rate")]
    pub margin_rate: Option<Decimal>,
}

/// One prime broker's reported margin against the replicated value, plus a
/// synthetic `Total` row summing the numeric columns.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PbActualRow {
    pub pb: String,
    #[serde(rename = "pb actual margin")]
    pub actual_margin: Decimal,
    #[serde(rename = "margin replication")]
    pub replication: Decimal,
    /// `|actual - replication| / actual`; `None` when the broker reported
    /// zero margin.
    pub deviation: Option<Decimal>,
}

/// The three tables produced for one business date, plus any data-quality
/// warnings raised while computing them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarginReport {
    pub summary: Vec<BookAggregateRow>,
    pub details: Vec<BookAggregateRow>,
    pub pb_actual: Vec<PbActualRow>,
    pub warnings: Vec<String>,
}

/// One point of a book's margin-rate history.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BookHistoryPoint {
    #[serde(rename = "businessdate")]
    pub business_date: NaiveDate,
    #[serde(rename = "margin rate")]
    pub margin_rate: Option<Decimal>,
}
