use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::Deserialize;

use margindesk_core::reporting::MarginReport;
use margindesk_core::utils::date_utils::latest_reporting_date;

use crate::error::ApiResult;
use crate::main_lib::AppState;

#[derive(Deserialize)]
struct ReportingQuery {
    date: NaiveDate,
    ccy: Option<String>,
}

async fn get_reporting(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ReportingQuery>,
) -> ApiResult<Json<MarginReport>> {
    let report = state
        .report_service
        .reporting(query.date, query.ccy.as_deref())
        .await?;
    Ok(Json(report))
}

/// The most recent date a report can be complete for; the dashboard uses it
/// as the date picker's upper bound and as the refresh target.
async fn get_latest_business_date() -> Json<NaiveDate> {
    Json(latest_reporting_date())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/reporting", get(get_reporting))
        .route("/latest-business-date", get(get_latest_business_date))
}
