use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One currency-pair rate for a given date, as published by the rate source.
/// `pair` uses the source's `"GBP/USD"` notation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FxRate {
    pub pair: String,
    pub rate: Decimal,
    pub date: NaiveDate,
}
