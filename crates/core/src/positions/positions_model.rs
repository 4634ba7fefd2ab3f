use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One position row from the margin replica source: a (book, prime broker)
/// pair for a single business date.
///
/// `pb` is kept as the raw source string. The replica is fed upstream and
/// occasionally carries counterparties outside the cleared set; the
/// aggregation layer decides what to do with those.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PositionRecord {
    pub book: String,
    pub pb: String,
    pub margin: Decimal,
    pub adjustment: Decimal,
    pub gmv: Decimal,
    pub business_date: NaiveDate,
}

impl PositionRecord {
    /// The margin actually charged: base margin plus any manual adjustment.
    /// Everything downstream works off this value, never off `margin` alone.
    pub fn margin_adjusted(&self) -> Decimal {
        self.margin + self.adjustment
    }
}
