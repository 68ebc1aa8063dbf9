//! Trait for the upstream arrivals data provider.

use anyhow::Result;
use bcn_arrivals::records::RawFlightRecord;

/// Abstraction over a flight-arrivals provider (e.g., aviationstack).
#[async_trait::async_trait]
pub trait ArrivalsApi {
    /// Returns the current batch of arrival records for `airport_iata`.
    async fn fetch_arrivals(&self, airport_iata: &str) -> Result<Vec<RawFlightRecord>>;
}
