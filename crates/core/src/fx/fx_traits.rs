use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::errors::Result;

use super::FxRate;

/// Source of currency conversion rates.
///
/// The convention is fixed by the rate source: rates are quoted as
/// `{ccy}/USD`, and callers *divide* local amounts by `rate(target, date)`
/// to reach the target currency. `rate("USD", _)` is exactly 1.
#[async_trait]
pub trait FxRateProviderTrait: Send + Sync {
    /// The `{currency}/USD` rate for `date`.
    ///
    /// A pair missing from the source is an [`super::FxError::RateNotFound`],
    /// never a silent 1.
    async fn rate(&self, currency: &str, date: NaiveDate) -> Result<Decimal>;

    /// Every pair the source publishes for `date`.
    async fn all_rates(&self, date: NaiveDate) -> Result<Vec<FxRate>>;
}
