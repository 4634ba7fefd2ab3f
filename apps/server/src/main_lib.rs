use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use margindesk_core::fx::HttpFxRateProvider;
use margindesk_core::reporting::{
    BookHistoryService, BookHistoryServiceTrait, MarginReportService, MarginReportServiceTrait,
};
use margindesk_storage_sqlite::db;
use margindesk_storage_sqlite::pbactual::PbActualRepository;
use margindesk_storage_sqlite::positions::PositionRepository;

use crate::config::Config;

pub struct AppState {
    pub report_service: Arc<dyn MarginReportServiceTrait + Send + Sync>,
    pub history_service: Arc<dyn BookHistoryServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let log_format = std::env::var("MD_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let replica_pool = db::create_pool(&config.replica_db_path)?;
    let pbactual_pool = db::create_pool(&config.pbactual_db_path)?;
    tracing::info!(
        "Data sources: replica={} pbactual={}",
        config.replica_db_path,
        config.pbactual_db_path
    );

    let positions = Arc::new(PositionRepository::new(replica_pool));
    let pb_actual = Arc::new(PbActualRepository::new(pbactual_pool));
    let fx = Arc::new(HttpFxRateProvider::new(config.fx_api_url.clone()));

    let report_service = Arc::new(MarginReportService::new(
        positions.clone(),
        pb_actual,
        fx,
    ));
    let history_service = Arc::new(BookHistoryService::new(positions));

    Ok(Arc::new(AppState {
        report_service,
        history_service,
    }))
}
