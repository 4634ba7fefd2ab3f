use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::Result;

use super::{BookHistoryPoint, MarginReport};

/// Produces the three reporting tables for one business date.
#[async_trait]
pub trait MarginReportServiceTrait: Send + Sync {
    /// Compute summary, detail, and pb reconciliation tables for
    /// `business_date`, converted to `currency` (the configured default
    /// when `None`).
    async fn reporting(
        &self,
        business_date: NaiveDate,
        currency: Option<&str>,
    ) -> Result<MarginReport>;
}

/// Produces the per-book margin-rate time series.
pub trait BookHistoryServiceTrait: Send + Sync {
    /// Date-ascending margin-rate series for `book`. The most recent date
    /// in the source is dropped as provisional. Recomputed fresh per call.
    fn history(&self, book: &str) -> Result<Vec<BookHistoryPoint>>;

    /// Sorted distinct book list, for the dashboard's book picker.
    fn books(&self) -> Result<Vec<String>>;
}
