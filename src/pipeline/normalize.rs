//! Record normalization: status filtering and arrival time resolution.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::pipeline::types::NormalizedFlight;
use crate::records::RawFlightRecord;

/// Statuses for flights that will not land here and must not be counted.
static REJECTED_STATUSES: &[&str] = &["cancelled", "diverted"];

/// Normalizes one raw record, or rejects it.
///
/// A record is rejected when its status says the flight will not land, or
/// when it carries neither an estimated nor a scheduled arrival time (a time
/// is never synthesized). Rejections are logged and excluded; they never
/// abort the batch.
pub fn normalize(raw: &RawFlightRecord) -> Option<NormalizedFlight> {
    let status = raw.status();
    if REJECTED_STATUSES.contains(&status) {
        debug!(flight = raw.flight_code(), status, "dropping flight that will not land");
        return None;
    }

    let arrival_group = raw.arrival.as_ref();
    let instant = arrival_group
        .and_then(|a| a.estimated.as_deref())
        .or_else(|| arrival_group.and_then(|a| a.scheduled.as_deref()));

    let Some(instant) = instant else {
        debug!(flight = raw.flight_code(), "dropping flight with no arrival time");
        return None;
    };

    let arrival = match parse_instant(instant) {
        Ok(ts) => ts,
        Err(error) => {
            warn!(flight = raw.flight_code(), instant, %error, "unparseable arrival time");
            return None;
        }
    };

    Some(NormalizedFlight {
        arrival,
        hora: arrival.format("%H:%M").to_string(),
        bucket: arrival.format("%H").to_string(),
        aerolinea: raw.airline_name().to_string(),
        vuelo_id: raw.flight_code().to_string(),
        origen_iata: raw.origin_iata().map(str::to_string),
        origen_nombre: raw.origin_airport().map(str::to_string),
        avion: raw.aircraft_code().to_string(),
        estado_raw: status.to_string(),
        terminal_hint: raw.terminal().map(str::to_string),
    })
}

/// Parses an ISO-8601 instant (`Z` or explicit offset) and pins it to UTC so
/// that display time and bucket key come from the same zoned timestamp.
fn parse_instant(value: &str) -> chrono::ParseResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value).map(|ts| ts.with_timezone(&Utc))
}
