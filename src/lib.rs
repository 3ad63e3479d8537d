//! Always-available USD to EUR conversion backed by a single remote fetch.
//!
//! Construct an [`ExchangeRateProvider`] once per owning view; it starts out
//! on the built-in fallback rate, issues one background fetch, and upgrades
//! to the live rate when the fetch lands. Conversions never fail and never
//! block.

pub mod config;
pub mod log;
pub mod provider;
pub mod rate_source;
pub mod sources;

pub use config::FALLBACK_EUR_RATE;
pub use provider::ExchangeRateProvider;
pub use rate_source::RateSource;
pub use sources::exchangerate_api::ExchangeRateApiSource;
