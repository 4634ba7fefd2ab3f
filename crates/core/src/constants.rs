/// Book holding the firm-wide aggregate. Its per-broker margins form the
/// replication side of the prime-broker reconciliation.
pub const TOTAL_BOOK: &str = "Total";

/// Books reported in the summary partition; everything else is detail.
pub const ROLLUP_BOOKS: &[&str] = &["Total", "MIPL", "MIPUS"];

/// Reporting currency used when the caller does not ask for one.
pub const DEFAULT_REPORTING_CURRENCY: &str = "GBP";

/// Currency with a defined identity rate.
pub const USD: &str = "USD";

/// Entity classification used when pulling prime-broker actual margins.
pub const PROP_ENTITY: &str = "Prop";
