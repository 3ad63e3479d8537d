//! The stateful exchange rate component handed to view code.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use tracing::{debug, error};

use crate::config::FALLBACK_EUR_RATE;
use crate::rate_source::RateSource;

// State shared between the provider and its single background fetch. The
// rate is stored as f64 bits so the synchronous conversion helpers never
// take a lock.
struct Shared {
    rate_bits: AtomicU64,
    loading: AtomicBool,
}

impl Shared {
    fn rate(&self) -> f64 {
        f64::from_bits(self.rate_bits.load(Ordering::Acquire))
    }
}

/// Supplies an always-available EUR-per-USD rate plus conversion helpers,
/// degrading to [`FALLBACK_EUR_RATE`] whenever the network is unavailable.
///
/// Construction spawns exactly one fetch on the ambient tokio runtime; the
/// fetch is never retried and never repeated for the provider's lifetime.
/// Conversions may be called at any point, including before the fetch
/// settles, and then use the fallback rate.
pub struct ExchangeRateProvider {
    shared: Arc<Shared>,
}

impl ExchangeRateProvider {
    pub fn new(source: Arc<dyn RateSource>) -> Self {
        Self::with_fallback(source, FALLBACK_EUR_RATE)
    }

    /// Like [`ExchangeRateProvider::new`] with an explicit fallback rate.
    pub fn with_fallback(source: Arc<dyn RateSource>, fallback: f64) -> Self {
        let shared = Arc::new(Shared {
            rate_bits: AtomicU64::new(fallback.to_bits()),
            loading: AtomicBool::new(true),
        });

        // The task holds only a weak handle; a provider dropped mid-flight
        // turns the settle into a no-op.
        tokio::spawn(fetch_once(source, Arc::downgrade(&shared)));

        ExchangeRateProvider { shared }
    }

    /// EUR per 1 USD currently held: the fallback until a live rate lands.
    pub fn rate(&self) -> f64 {
        self.shared.rate()
    }

    /// True from construction until the single fetch settles, then
    /// permanently false.
    pub fn loading(&self) -> bool {
        self.shared.loading.load(Ordering::Acquire)
    }

    pub fn convert_to_eur(&self, usd_amount: f64) -> f64 {
        usd_amount * self.rate()
    }

    /// Inverse conversion. Falls back to returning the amount unchanged
    /// when the held rate is not positive, so it never divides by zero.
    pub fn convert_to_usd(&self, eur_amount: f64) -> f64 {
        let rate = self.rate();
        if rate > 0.0 {
            eur_amount / rate
        } else {
            eur_amount
        }
    }
}

async fn fetch_once(source: Arc<dyn RateSource>, shared: Weak<Shared>) {
    let outcome = source.fetch_rate().await;

    let Some(shared) = shared.upgrade() else {
        debug!("Provider dropped before the rate fetch settled, discarding result");
        return;
    };

    match outcome {
        Ok(Some(rate)) => {
            debug!("Live USD/EUR rate received: {}", rate);
            shared.rate_bits.store(rate.to_bits(), Ordering::Release);
        }
        // Endpoint answered without a usable EUR rate: stay on the current
        // rate, silently.
        Ok(None) => {}
        Err(e) => error!("Error fetching exchange rate: {e}"),
    }

    shared.loading.store(false, Ordering::Release);
}
