//! Business-day arithmetic.
//!
//! Weekends are skipped; no holiday calendar is modeled. Reports therefore
//! land on exchange holidays too, where the sources simply return no rows.

use chrono::{Datelike, Duration, NaiveDate, Utc, Weekday};

/// The business day before `day`: Mondays step back over the weekend,
/// every other day steps back one calendar day.
pub fn previous_business_day(day: NaiveDate) -> NaiveDate {
    let days_back = if day.weekday() == Weekday::Mon { 3 } else { 1 };
    day - Duration::days(days_back)
}

/// Two business days before `today`. The reporting sources lag by two days,
/// so this is the latest date a report can be complete for.
pub fn two_business_days_ago(today: NaiveDate) -> NaiveDate {
    previous_business_day(previous_business_day(today))
}

/// `two_business_days_ago` anchored on the current UTC date.
pub fn latest_reporting_date() -> NaiveDate {
    two_business_days_ago(Utc::now().date_naive())
}
