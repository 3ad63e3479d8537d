use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

use crate::config::EXCHANGE_RATE_API_BASE_URL;
use crate::rate_source::RateSource;

/// Fetches the latest USD rates from exchangerate-api.com and picks out EUR.
pub struct ExchangeRateApiSource {
    base_url: String,
}

impl ExchangeRateApiSource {
    pub fn new(base_url: &str) -> Self {
        ExchangeRateApiSource {
            base_url: base_url.to_string(),
        }
    }
}

impl Default for ExchangeRateApiSource {
    fn default() -> Self {
        Self::new(EXCHANGE_RATE_API_BASE_URL)
    }
}

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    rates: HashMap<String, f64>,
}

#[async_trait]
impl RateSource for ExchangeRateApiSource {
    async fn fetch_rate(&self) -> Result<Option<f64>> {
        let url = format!("{}/v4/latest/USD", self.base_url);
        debug!("Requesting USD rates from {}", url);

        let client = reqwest::Client::builder().user_agent("fxrate/0.1").build()?;
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for URL: {}", e, url))?;

        if !response.status().is_success() {
            debug!("Rate endpoint answered {}, keeping current rate", response.status());
            return Ok(None);
        }

        let text = response.text().await?;
        let data: LatestRatesResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse rates response: {}", e))?;

        // Zero is treated the same as absent; sign and magnitude are not
        // validated otherwise.
        Ok(data.rates.get("EUR").copied().filter(|rate| *rate != 0.0))
    }
}
