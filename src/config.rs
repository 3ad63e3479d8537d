//! Built-in defaults for the exchange rate provider.

/// EUR per 1 USD used until a live rate arrives, and kept forever when the
/// fetch fails. Named so tests can reference and override it.
pub const FALLBACK_EUR_RATE: f64 = 0.92;

/// Base URL of the public exchangerate-api.com endpoint.
pub const EXCHANGE_RATE_API_BASE_URL: &str = "https://api.exchangerate-api.com";
