use diesel::prelude::*;
use std::sync::Arc;

use chrono::NaiveDate;

use margindesk_core::errors::{Error, Result};
use margindesk_core::positions::{PositionRecord, PositionRepositoryTrait};

use crate::db::{get_connection, with_retry, DbPool};
use crate::errors::IntoCore;
use crate::schema::margin_replica_adjusted::dsl::*;
use crate::utils::format_date;

use super::model::PositionDB;

/// Read-only repository over the margin replica source.
pub struct PositionRepository {
    pool: Arc<DbPool>,
}

impl PositionRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl PositionRepositoryTrait for PositionRepository {
    fn positions_for_date(&self, for_date: NaiveDate) -> Result<Vec<PositionRecord>> {
        with_retry(|| {
            let mut conn = get_connection(&self.pool)?;

            let rows: Vec<PositionDB> = margin_replica_adjusted
                .filter(businessdate.eq(format_date(for_date)))
                .select(PositionDB::as_select())
                .load(&mut conn)
                .into_core()?;

            rows.into_iter()
                .map(|row| PositionRecord::try_from(row).map_err(Error::from))
                .collect()
        })
    }

    fn distinct_books(&self) -> Result<Vec<String>> {
        with_retry(|| {
            let mut conn = get_connection(&self.pool)?;

            margin_replica_adjusted
                .select(book)
                .distinct()
                .order(book.asc())
                .load(&mut conn)
                .into_core()
        })
    }

    fn book_history(&self, book_name: &str) -> Result<Vec<PositionRecord>> {
        with_retry(|| {
            let mut conn = get_connection(&self.pool)?;

            let rows: Vec<PositionDB> = margin_replica_adjusted
                .filter(book.eq(book_name))
                .select(PositionDB::as_select())
                .load(&mut conn)
                .into_core()?;

            rows.into_iter()
                .map(|row| PositionRecord::try_from(row).map_err(Error::from))
                .collect()
        })
    }
}
