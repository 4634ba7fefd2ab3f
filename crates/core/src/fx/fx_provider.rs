//! HTTP-backed rate provider against the internal FX rates API.
//!
//! The API returns, per date, a JSON array of `{"pair": "GBP/USD",
//! "rate": 1.27}` objects covering every pair it knows about.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::time::Duration;

use crate::constants::USD;
use crate::errors::Result;

use super::{FxError, FxRate, FxRateProviderTrait};

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct FxRatePayload {
    pair: String,
    rate: Decimal,
}

pub struct HttpFxRateProvider {
    client: Client,
    base_url: String,
}

impl HttpFxRateProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    async fn fetch_rates(&self, date: NaiveDate) -> Result<Vec<FxRate>> {
        let url = format!("{}/rates", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .get(&url)
            .query(&[("date", date.format("%Y-%m-%d").to_string())])
            .send()
            .await
            .map_err(|e| FxError::Fetch(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FxError::Fetch(format!(
                "rates API returned {} for {}",
                response.status(),
                date
            ))
            .into());
        }

        let payload: Vec<FxRatePayload> = response
            .json()
            .await
            .map_err(|e| FxError::InvalidPayload(e.to_string()))?;

        Ok(payload
            .into_iter()
            .map(|p| FxRate {
                pair: p.pair,
                rate: p.rate,
                date,
            })
            .collect())
    }
}

/// Find `{currency}/USD` in a published rate list.
fn lookup_pair(rates: &[FxRate], currency: &str, date: NaiveDate) -> Result<Decimal> {
    let pair = format!("{}/USD", currency);
    rates
        .iter()
        .find(|r| r.pair == pair)
        .map(|r| r.rate)
        .ok_or_else(|| FxError::RateNotFound(format!("{} on {}", pair, date)).into())
}

#[async_trait]
impl FxRateProviderTrait for HttpFxRateProvider {
    async fn rate(&self, currency: &str, date: NaiveDate) -> Result<Decimal> {
        if currency == USD {
            return Ok(Decimal::ONE);
        }
        let rates = self.fetch_rates(date).await?;
        lookup_pair(&rates, currency, date)
    }

    async fn all_rates(&self, date: NaiveDate) -> Result<Vec<FxRate>> {
        self.fetch_rates(date).await
    }
}
