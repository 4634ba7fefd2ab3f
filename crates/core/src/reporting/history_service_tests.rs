//! Unit tests for the book history service.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

use crate::errors::Result;
use crate::positions::{PositionRecord, PositionRepositoryTrait};

use super::history_service::BookHistoryService;
use super::reporting_traits::BookHistoryServiceTrait;

struct MockPositionRepository {
    rows: Vec<PositionRecord>,
}

impl PositionRepositoryTrait for MockPositionRepository {
    fn positions_for_date(&self, business_date: NaiveDate) -> Result<Vec<PositionRecord>> {
        Ok(self
            .rows
            .iter()
            .filter(|r| r.business_date == business_date)
            .cloned()
            .collect())
    }

    fn distinct_books(&self) -> Result<Vec<String>> {
        let mut books: Vec<String> = self.rows.iter().map(|r| r.book.clone()).collect();
        books.sort();
        books.dedup();
        Ok(books)
    }

    fn book_history(&self, book: &str) -> Result<Vec<PositionRecord>> {
        Ok(self
            .rows
            .iter()
            .filter(|r| r.book == book)
            .cloned()
            .collect())
    }
}

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
}

fn row(book: &str, pb: &str, margin: Decimal, adjustment: Decimal, gmv: Decimal, d: u32) -> PositionRecord {
    PositionRecord {
        book: book.to_string(),
        pb: pb.to_string(),
        margin,
        adjustment,
        gmv,
        business_date: date(d),
    }
}

fn service(rows: Vec<PositionRecord>) -> BookHistoryService {
    BookHistoryService::new(Arc::new(MockPositionRepository { rows }))
}

#[test]
fn orders_ascending_and_drops_the_latest_date() {
    // Deliberately unordered input; 2024-06-12 is the most recent and must go.
    let svc = service(vec![
        row("A", "GS", dec!(30), dec!(0), dec!(300), 12),
        row("A", "GS", dec!(10), dec!(0), dec!(100), 10),
        row("A", "GS", dec!(20), dec!(0), dec!(100), 11),
    ]);

    let points = svc.history("A").unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].business_date, date(10));
    assert_eq!(points[0].margin_rate, Some(dec!(0.1)));
    assert_eq!(points[1].business_date, date(11));
    assert_eq!(points[1].margin_rate, Some(dec!(0.2)));
}

#[test]
fn sums_across_every_broker_for_the_date() {
    // The history view does not filter on the cleared broker set.
    let svc = service(vec![
        row("A", "GS", dec!(10), dec!(0), dec!(100), 10),
        row("A", "UBS", dec!(10), dec!(10), dec!(100), 10),
        row("A", "GS", dec!(1), dec!(0), dec!(10), 11),
    ]);

    let points = svc.history("A").unwrap();
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].margin_rate, Some(dec!(30) / dec!(200)));
}

#[test]
fn zero_gmv_date_has_undefined_rate() {
    let svc = service(vec![
        row("A", "GS", dec!(10), dec!(0), dec!(0), 10),
        row("A", "GS", dec!(1), dec!(0), dec!(10), 11),
    ]);

    let points = svc.history("A").unwrap();
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].margin_rate, None);
}

#[test]
fn single_date_series_is_empty() {
    let svc = service(vec![row("A", "GS", dec!(10), dec!(0), dec!(100), 10)]);
    assert!(svc.history("A").unwrap().is_empty());
}

#[test]
fn unknown_book_yields_empty_series() {
    let svc = service(vec![row("A", "GS", dec!(10), dec!(0), dec!(100), 10)]);
    assert!(svc.history("nope").unwrap().is_empty());
}
