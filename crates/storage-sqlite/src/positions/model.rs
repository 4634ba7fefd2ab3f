//! Database model for margin replica rows.

use diesel::prelude::*;

use margindesk_core::positions::PositionRecord;

use crate::errors::StorageError;
use crate::utils::{parse_date, parse_decimal};

/// Row shape of the `margin_replica_adjusted` feed. Numeric columns arrive
/// as text and are parsed on conversion; a value that does not parse fails
/// the whole query rather than becoming a silent zero.
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::margin_replica_adjusted)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PositionDB {
    pub book: String,
    pub pb: String,
    pub margin: String,
    pub adjustment: String,
    pub gmv: String,
    pub businessdate: String,
}

impl TryFrom<PositionDB> for PositionRecord {
    type Error = StorageError;

    fn try_from(db: PositionDB) -> Result<Self, StorageError> {
        Ok(PositionRecord {
            margin: parse_decimal("margin", &db.margin)?,
            adjustment: parse_decimal("adjustment", &db.adjustment)?,
            gmv: parse_decimal("gmv", &db.gmv)?,
            business_date: parse_date("businessdate", &db.businessdate)?,
            book: db.book,
            pb: db.pb,
        })
    }
}
