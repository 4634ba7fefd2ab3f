use thiserror::Error;

#[derive(Error, Debug)]
pub enum FxError {
    /// The requested currency pair is absent from the rate source for the
    /// requested date. Fatal to the single reporting request, never
    /// silently defaulted.
    #[error("Exchange rate not found: {0}")]
    RateNotFound(String),

    #[error("Failed to fetch rates: {0}")]
    Fetch(String),

    #[error("Invalid rate payload: {0}")]
    InvalidPayload(String),

    /// A rate came back that cannot be divided by (zero or negative).
    #[error("Invalid exchange rate: {0}")]
    InvalidRate(String),
}
