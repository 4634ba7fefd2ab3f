use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A margin figure reported by a prime broker for one business date.
///
/// `pb` arrives in whatever casing the broker feed uses; `entity` is the
/// broker's record classification (the reconciliation only looks at `Prop`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PbActualRecord {
    pub pb: String,
    pub entity: String,
    pub margin_value: Decimal,
    pub date: NaiveDate,
}
