use chrono::NaiveDate;

use crate::errors::Result;

use super::PositionRecord;

/// Read-only access to the margin replica source.
///
/// Implementations must bind every caller-supplied value as a query
/// parameter; book names and dates come straight from HTTP requests.
pub trait PositionRepositoryTrait: Send + Sync {
    /// All position rows for one business date.
    fn positions_for_date(&self, business_date: NaiveDate) -> Result<Vec<PositionRecord>>;

    /// Sorted distinct book identifiers across all dates.
    fn distinct_books(&self) -> Result<Vec<String>>;

    /// Every row for one book, all dates.
    fn book_history(&self, book: &str) -> Result<Vec<PositionRecord>>;
}
