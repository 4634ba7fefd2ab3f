use chrono::NaiveDate;

use crate::errors::Result;

use super::PbActualRecord;

/// Read-only access to the pbactual source.
pub trait PbActualRepositoryTrait: Send + Sync {
    /// Reported margins for one business date, restricted to one entity
    /// classification.
    fn actual_margin_for_date(&self, date: NaiveDate, entity: &str)
        -> Result<Vec<PbActualRecord>>;
}
