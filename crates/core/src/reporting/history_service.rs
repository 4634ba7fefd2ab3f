//! Per-book margin-rate history for the dashboard chart.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::positions::PositionRepositoryTrait;

use super::reporting_traits::BookHistoryServiceTrait;
use super::BookHistoryPoint;

pub struct BookHistoryService {
    positions: Arc<dyn PositionRepositoryTrait>,
}

impl BookHistoryService {
    pub fn new(positions: Arc<dyn PositionRepositoryTrait>) -> Self {
        Self { positions }
    }
}

impl BookHistoryServiceTrait for BookHistoryService {
    fn history(&self, book: &str) -> Result<Vec<BookHistoryPoint>> {
        let rows = self.positions.book_history(book)?;

        // Sum adjusted margin and GMV per date across every broker the
        // book traded with, known or not. The history view is about the
        // book as a whole, not the cleared set.
        let mut by_date: BTreeMap<NaiveDate, (Decimal, Decimal)> = BTreeMap::new();
        for row in &rows {
            let entry = by_date.entry(row.business_date).or_default();
            entry.0 += row.margin_adjusted();
            entry.1 += row.gmv;
        }

        let mut points: Vec<BookHistoryPoint> = by_date
            .into_iter()
            .map(|(business_date, (margin, gmv))| BookHistoryPoint {
                business_date,
                margin_rate: margin.checked_div(gmv),
            })
            .collect();

        // The most recent date is still being loaded upstream; drop it.
        points.pop();

        Ok(points)
    }

    fn books(&self) -> Result<Vec<String>> {
        self.positions.distinct_books()
    }
}
