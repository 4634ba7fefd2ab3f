//! FX (Foreign Exchange) module - rate lookup for currency conversion.

mod fx_errors;
mod fx_model;
mod fx_provider;
mod fx_traits;

pub use fx_errors::FxError;
pub use fx_model::FxRate;
pub use fx_provider::HttpFxRateProvider;
pub use fx_traits::FxRateProviderTrait;
