use diesel::prelude::*;
use std::sync::Arc;

use chrono::NaiveDate;

use margindesk_core::errors::{Error, Result};
use margindesk_core::pbactual::{PbActualRecord, PbActualRepositoryTrait};

use crate::db::{get_connection, with_retry, DbPool};
use crate::errors::IntoCore;
use crate::schema::pbactualmargin::dsl::*;
use crate::utils::format_date;

use super::model::PbActualDB;

/// Read-only repository over the pbactual source.
pub struct PbActualRepository {
    pool: Arc<DbPool>,
}

impl PbActualRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl PbActualRepositoryTrait for PbActualRepository {
    fn actual_margin_for_date(
        &self,
        for_date: NaiveDate,
        entity_name: &str,
    ) -> Result<Vec<PbActualRecord>> {
        with_retry(|| {
            let mut conn = get_connection(&self.pool)?;

            let rows: Vec<PbActualDB> = pbactualmargin
                .filter(date.eq(format_date(for_date)))
                .filter(entity.eq(entity_name))
                .select(PbActualDB::as_select())
                .load(&mut conn)
                .into_core()?;

            rows.into_iter()
                .map(|row| PbActualRecord::try_from(row).map_err(Error::from))
                .collect()
        })
    }
}
