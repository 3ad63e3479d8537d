//! Outbound rate fetch abstraction.

use anyhow::Result;
use async_trait::async_trait;

/// A source of the EUR-per-USD exchange rate.
///
/// `Ok(Some(rate))` carries a fetched rate. `Ok(None)` means the source
/// answered but had no usable rate for us (non-success status, or the EUR
/// field missing or zero) and the caller should stay on its current rate
/// without logging. `Err` is a transport or parse failure worth logging.
#[async_trait]
pub trait RateSource: Send + Sync {
    async fn fetch_rate(&self) -> Result<Option<f64>>;
}
