//! Database model for prime-broker reported margins.

use diesel::prelude::*;

use margindesk_core::pbactual::PbActualRecord;

use crate::errors::StorageError;
use crate::utils::{parse_date, parse_decimal};

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::pbactualmargin)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PbActualDB {
    pub pb: String,
    pub entity: String,
    pub marginvalue: String,
    pub date: String,
}

impl TryFrom<PbActualDB> for PbActualRecord {
    type Error = StorageError;

    fn try_from(db: PbActualDB) -> Result<Self, StorageError> {
        Ok(PbActualRecord {
            margin_value: parse_decimal("marginvalue", &db.marginvalue)?,
            date: parse_date("date", &db.date)?,
            pb: db.pb,
            entity: db.entity,
        })
    }
}
