//! Margin aggregation and prime-broker reconciliation for one business date.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::warn;
use rust_decimal::Decimal;

use crate::brokers::PrimeBroker;
use crate::constants::{DEFAULT_REPORTING_CURRENCY, PROP_ENTITY, ROLLUP_BOOKS, TOTAL_BOOK};
use crate::errors::Result;
use crate::fx::{FxError, FxRateProviderTrait};
use crate::pbactual::PbActualRepositoryTrait;
use crate::positions::{PositionRecord, PositionRepositoryTrait};

use super::reporting_traits::MarginReportServiceTrait;
use super::{BookAggregateRow, MarginReport, PbActualRow};

pub struct MarginReportService {
    positions: Arc<dyn PositionRepositoryTrait>,
    pb_actual: Arc<dyn PbActualRepositoryTrait>,
    fx: Arc<dyn FxRateProviderTrait>,
}

/// Margin and GMV cells for one book, keyed by prime broker. Both maps
/// always hold the full fixed broker set.
struct PivotCells {
    margin: BTreeMap<PrimeBroker, Decimal>,
    gmv: BTreeMap<PrimeBroker, Decimal>,
}

impl PivotCells {
    fn zeroed() -> Self {
        let zeros: BTreeMap<PrimeBroker, Decimal> = PrimeBroker::ALL
            .iter()
            .map(|pb| (*pb, Decimal::ZERO))
            .collect();
        Self {
            margin: zeros.clone(),
            gmv: zeros,
        }
    }
}

impl MarginReportService {
    pub fn new(
        positions: Arc<dyn PositionRepositoryTrait>,
        pb_actual: Arc<dyn PbActualRepositoryTrait>,
        fx: Arc<dyn FxRateProviderTrait>,
    ) -> Self {
        Self {
            positions,
            pb_actual,
            fx,
        }
    }

    /// Pivot raw rows into book-keyed margin/GMV cells. Rows carrying a
    /// prime broker outside the fixed set are excluded from every total
    /// and reported once per distinct value.
    fn pivot_positions(
        rows: &[PositionRecord],
        warnings: &mut Vec<String>,
    ) -> BTreeMap<String, PivotCells> {
        let mut books: BTreeMap<String, PivotCells> = BTreeMap::new();
        let mut unknown: BTreeSet<String> = BTreeSet::new();

        for row in rows {
            let Some(pb) = PrimeBroker::parse(&row.pb) else {
                unknown.insert(row.pb.clone());
                continue;
            };
            let cells = books
                .entry(row.book.clone())
                .or_insert_with(PivotCells::zeroed);
            *cells.margin.entry(pb).or_insert(Decimal::ZERO) += row.margin_adjusted();
            *cells.gmv.entry(pb).or_insert(Decimal::ZERO) += row.gmv;
        }

        for value in unknown {
            warn!("position rows with unknown prime broker '{}' excluded from totals", value);
            warnings.push(format!(
                "unknown prime broker '{}' excluded from totals",
                value
            ));
        }

        books
    }

    /// Totals and margin rate per book. The cell maps only ever hold the
    /// fixed broker set, so summing their values sums exactly over it.
    fn aggregate_rows(
        books: BTreeMap<String, PivotCells>,
        warnings: &mut Vec<String>,
    ) -> Vec<BookAggregateRow> {
        books
            .into_iter()
            .map(|(book, cells)| {
                let total_margin: Decimal = cells.margin.values().copied().sum();
                let total_gmv: Decimal = cells.gmv.values().copied().sum();
                let margin_rate = total_margin.checked_div(total_gmv);
                if margin_rate.is_none() {
                    warn!("book '{}' has zero Total GMV; margin rate undefined", book);
                    warnings.push(format!(
                        "book '{}' has zero Total GMV; margin rate undefined",
                        book
                    ));
                }
                BookAggregateRow {
                    book,
                    margins: cells.margin,
                    total_margin,
                    total_gmv,
                    margin_rate,
                }
            })
            .collect()
    }

    /// Divide every monetary column by the reporting-currency rate. The
    /// margin rate is a dimensionless ratio and stays untouched.
    fn convert_currency(rows: &mut [BookAggregateRow], rate: Decimal) {
        for row in rows.iter_mut() {
            for value in row.margins.values_mut() {
                *value /= rate;
            }
            row.total_margin /= rate;
            row.total_gmv /= rate;
        }
    }

    /// Join broker-reported actual margins against the Total book's
    /// replicated per-broker margins, then append a synthetic `Total` row
    /// whose deviation is recomputed from the summed values.
    fn reconcile_pb_actuals(
        &self,
        business_date: NaiveDate,
        summary: &[BookAggregateRow],
        warnings: &mut Vec<String>,
    ) -> Result<Vec<PbActualRow>> {
        let actuals = self
            .pb_actual
            .actual_margin_for_date(business_date, PROP_ENTITY)?;

        let replication: BTreeMap<PrimeBroker, Decimal> = summary
            .iter()
            .find(|row| row.book == TOTAL_BOOK)
            .map(|row| row.margins.clone())
            .unwrap_or_default();

        let mut rows = Vec::new();
        for record in &actuals {
            let Some(pb) = PrimeBroker::parse(&record.pb) else {
                warn!("pbactual row with unknown prime broker '{}' ignored", record.pb);
                warnings.push(format!(
                    "unknown prime broker '{}' in actual margins",
                    record.pb
                ));
                continue;
            };
            // No Total book for the date means nothing to reconcile against.
            let Some(replicated) = replication.get(&pb).copied() else {
                continue;
            };
            if record.margin_value.is_zero() {
                warn!("'{}' reported zero actual margin; deviation undefined", pb);
                warnings.push(format!(
                    "'{}' reported zero actual margin; deviation undefined",
                    pb
                ));
            }
            rows.push(PbActualRow {
                pb: pb.as_str().to_string(),
                actual_margin: record.margin_value,
                replication: replicated,
                deviation: deviation(record.margin_value, replicated),
            });
        }

        let total_actual: Decimal = rows.iter().map(|row| row.actual_margin).sum();
        let total_replication: Decimal = rows.iter().map(|row| row.replication).sum();
        rows.push(PbActualRow {
            pb: TOTAL_BOOK.to_string(),
            actual_margin: total_actual,
            replication: total_replication,
            deviation: deviation(total_actual, total_replication),
        });

        Ok(rows)
    }
}

/// `|actual - replication| / actual`; undefined when the reported margin
/// is zero.
fn deviation(actual: Decimal, replication: Decimal) -> Option<Decimal> {
    (actual - replication)
        .checked_div(actual)
        .map(|ratio| ratio.abs())
}

#[async_trait]
impl MarginReportServiceTrait for MarginReportService {
    async fn reporting(
        &self,
        business_date: NaiveDate,
        currency: Option<&str>,
    ) -> Result<MarginReport> {
        let currency = currency.unwrap_or(DEFAULT_REPORTING_CURRENCY);
        let rate = self.fx.rate(currency, business_date).await?;
        if rate <= Decimal::ZERO {
            return Err(FxError::InvalidRate(format!(
                "{}/USD on {} is {}",
                currency, business_date, rate
            ))
            .into());
        }

        let position_rows = self.positions.positions_for_date(business_date)?;

        let mut warnings = Vec::new();
        let books = Self::pivot_positions(&position_rows, &mut warnings);
        let mut all_rows = Self::aggregate_rows(books, &mut warnings);
        Self::convert_currency(&mut all_rows, rate);

        let (summary, mut details): (Vec<BookAggregateRow>, Vec<BookAggregateRow>) = all_rows
            .into_iter()
            .partition(|row| ROLLUP_BOOKS.contains(&row.book.as_str()));
        details.retain(|row| !row.total_margin.is_zero());
        details.sort_by(|a, b| b.total_margin.cmp(&a.total_margin));

        let pb_actual = self.reconcile_pb_actuals(business_date, &summary, &mut warnings)?;

        Ok(MarginReport {
            summary,
            details,
            pb_actual,
            warnings,
        })
    }
}
