//! JSON parser for the raw arrivals feed.

use anyhow::Result;
use serde_json::Value;
use tracing::warn;

use crate::records::RawFlightRecord;

/// Decodes a raw feed document into its batch of flight records.
///
/// A document without a usable top-level `data` array is treated as an empty
/// batch, and a malformed entry inside the array is skipped; neither aborts
/// the run.
///
/// # Errors
///
/// Returns an error only when the bytes are not valid JSON at all.
pub fn parse_batch(bytes: &[u8]) -> Result<Vec<RawFlightRecord>> {
    let doc: Value = serde_json::from_slice(bytes)?;
    Ok(extract_records(&doc))
}

fn extract_records(doc: &Value) -> Vec<RawFlightRecord> {
    let Some(entries) = doc.get("data").and_then(Value::as_array) else {
        warn!("feed has no `data` array, treating as empty batch");
        return Vec::new();
    };

    entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            match serde_json::from_value::<RawFlightRecord>(entry.clone()) {
                Ok(record) => Some(record),
                Err(error) => {
                    warn!(index, %error, "skipping malformed flight record");
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_invalid_json_is_an_error() {
        assert!(parse_batch(b"not json at all").is_err());
    }

    #[test]
    fn test_missing_data_key_yields_empty_batch() {
        let records = parse_batch(br#"{"pagination": {"total": 0}}"#).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_non_array_data_yields_empty_batch() {
        let records = parse_batch(br#"{"data": "oops"}"#).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_empty_data_array() {
        let records = parse_batch(br#"{"data": []}"#).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_malformed_entry_is_skipped() {
        let json = br#"{"data": [
            {"airline": {"name": "Vueling"}},
            42,
            {"airline": {"name": "Iberia"}}
        ]}"#;

        let records = parse_batch(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].airline_name(), "Vueling");
        assert_eq!(records[1].airline_name(), "Iberia");
    }
}
