//! Serde model for the raw aviationstack arrivals feed.
//!
//! Every nested group and almost every field is optional upstream: the free
//! tier routinely ships records with `aircraft: null` or a missing
//! `departure` group. Absence is never an error here; sentinel values are
//! applied through the accessor methods.

use serde::{Deserialize, Deserializer};

/// One entry of the feed's top-level `data` array, as delivered upstream.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct RawFlightRecord {
    pub arrival: Option<ArrivalGroup>,
    pub departure: Option<DepartureGroup>,
    pub airline: Option<AirlineGroup>,
    pub flight: Option<FlightGroup>,
    pub aircraft: Option<AircraftGroup>,
    pub flight_status: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct ArrivalGroup {
    pub estimated: Option<String>,
    pub scheduled: Option<String>,
    /// Some providers send the terminal as a bare number.
    #[serde(default, deserialize_with = "string_or_number")]
    pub terminal: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct DepartureGroup {
    pub iata: Option<String>,
    pub airport: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct AirlineGroup {
    pub name: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct FlightGroup {
    pub iata: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct AircraftGroup {
    pub iata: Option<String>,
}

impl RawFlightRecord {
    pub fn status(&self) -> &str {
        self.flight_status.as_deref().unwrap_or("scheduled")
    }

    pub fn airline_name(&self) -> &str {
        self.airline
            .as_ref()
            .and_then(|a| a.name.as_deref())
            .unwrap_or("Unknown")
    }

    pub fn flight_code(&self) -> &str {
        self.flight
            .as_ref()
            .and_then(|f| f.iata.as_deref())
            .unwrap_or("UNK")
    }

    pub fn aircraft_code(&self) -> &str {
        self.aircraft
            .as_ref()
            .and_then(|a| a.iata.as_deref())
            .unwrap_or("Jet")
    }

    pub fn origin_iata(&self) -> Option<&str> {
        self.departure.as_ref().and_then(|d| d.iata.as_deref())
    }

    pub fn origin_airport(&self) -> Option<&str> {
        self.departure.as_ref().and_then(|d| d.airport.as_deref())
    }

    pub fn terminal(&self) -> Option<&str> {
        self.arrival.as_ref().and_then(|a| a.terminal.as_deref())
    }
}

/// Accepts `"2"`, `2`, or `null` for a field and yields an owned string.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_on_empty_record() {
        let record = RawFlightRecord::default();

        assert_eq!(record.status(), "scheduled");
        assert_eq!(record.airline_name(), "Unknown");
        assert_eq!(record.flight_code(), "UNK");
        assert_eq!(record.aircraft_code(), "Jet");
        assert_eq!(record.origin_iata(), None);
        assert_eq!(record.terminal(), None);
    }

    #[test]
    fn test_null_groups_deserialize() {
        let json = r#"{
            "arrival": null,
            "departure": null,
            "airline": null,
            "flight": null,
            "aircraft": null,
            "flight_status": null
        }"#;

        let record: RawFlightRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.airline_name(), "Unknown");
        assert_eq!(record.status(), "scheduled");
    }

    #[test]
    fn test_numeric_terminal_is_coerced() {
        let json = r#"{"arrival": {"terminal": 2}}"#;
        let record: RawFlightRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.terminal(), Some("2"));
    }

    #[test]
    fn test_string_terminal_passes_through() {
        let json = r#"{"arrival": {"terminal": "2B"}}"#;
        let record: RawFlightRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.terminal(), Some("2B"));
    }
}
