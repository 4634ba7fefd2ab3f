//! The reporting core: book×prime-broker aggregation, currency conversion,
//! and reconciliation of replicated margin against broker-reported actuals.

mod history_service;
mod reporting_model;
mod reporting_service;
mod reporting_traits;

#[cfg(test)]
mod history_service_tests;
#[cfg(test)]
mod reporting_model_tests;

pub use history_service::BookHistoryService;
pub use reporting_model::{BookAggregateRow, BookHistoryPoint, MarginReport, PbActualRow};
pub use reporting_service::MarginReportService;
pub use reporting_traits::{BookHistoryServiceTrait, MarginReportServiceTrait};
