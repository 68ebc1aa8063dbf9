//! The arrivals-to-dashboard transformation pipeline.
//!
//! Each raw record flows one way through normalize → classify → aggregate,
//! and the finished state is assembled into the dashboard document. The
//! pipeline is total: any batch, including an empty or fully malformed one,
//! yields a structurally valid document.

pub mod aggregate;
pub mod assemble;
pub mod classify;
pub mod normalize;
pub mod types;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::records::RawFlightRecord;
use aggregate::AggregateState;
use types::{Dashboard, Extras};

/// Runs the full pipeline over one batch. `now` is injected so the same
/// batch always renders the same document.
pub fn build_dashboard(
    records: &[RawFlightRecord],
    now: DateTime<Utc>,
    extras: Extras,
) -> Dashboard {
    let mut state = AggregateState::new();

    for raw in records {
        let Some(flight) = normalize::normalize(raw) else {
            continue;
        };
        state.push(&classify::classify(flight));
    }

    let state = state.finish();
    info!(
        received = records.len(),
        accepted = state.total_vuelos(),
        "batch processed"
    );

    assemble::assemble(&state, now, extras)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(json: &str) -> RawFlightRecord {
        serde_json::from_str(json).unwrap()
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_shuttle_scenario() {
        let records = vec![record(
            r#"{
                "airline": {"name": "Vueling"},
                "departure": {"iata": "MAD"},
                "flight_status": "scheduled",
                "arrival": {"scheduled": "2024-01-01T10:00:00Z"}
            }"#,
        )];

        let dashboard = build_dashboard(&records, noon(), Extras::default());

        assert_eq!(dashboard.resumen_cards.t1.vuelos, 1);
        assert_eq!(dashboard.resumen_cards.puente.vuelos, 1);
        assert_eq!(dashboard.grafica[10].pax, 180);
        assert_eq!(dashboard.vuelos[0].hora, "10:00");
        assert_eq!(dashboard.vuelos[0].pax, 180);
        assert!(dashboard.vuelos[0].es_puente);
        assert_eq!(dashboard.vuelos[0].estado, "En hora");
    }

    #[test]
    fn test_easyjet_scenario() {
        let records = vec![record(
            r#"{
                "airline": {"name": "EasyJet"},
                "flight_status": "active",
                "arrival": {"estimated": "2024-01-01T16:20:00Z"}
            }"#,
        )];

        let dashboard = build_dashboard(&records, noon(), Extras::default());

        assert_eq!(dashboard.resumen_cards.t2.vuelos, 1);
        assert_eq!(dashboard.resumen_cards.t2c.vuelos, 1);
        assert_eq!(dashboard.vuelos[0].pax, 170);
        assert!(dashboard.vuelos[0].es_t2c);
        assert_eq!(dashboard.vuelos[0].estado, "Aterrizando");
        assert_eq!(dashboard.vuelos[0].estado_color, "warning");
    }

    #[test]
    fn test_rejected_records_contribute_nothing() {
        let records = vec![
            record(
                r#"{
                    "airline": {"name": "Vueling"},
                    "flight_status": "cancelled",
                    "arrival": {"scheduled": "2024-01-01T10:00:00Z"}
                }"#,
            ),
            record(r#"{"airline": {"name": "Iberia"}}"#),
        ];

        let dashboard = build_dashboard(&records, noon(), Extras::default());

        assert_eq!(dashboard.meta.total_vuelos, 0);
        assert!(dashboard.vuelos.is_empty());
        assert!(dashboard.grafica.iter().all(|slot| slot.pax == 0));
    }

    #[test]
    fn test_counter_identities_hold() {
        let records = vec![
            record(
                r#"{
                    "airline": {"name": "Vueling"},
                    "departure": {"iata": "MAD"},
                    "arrival": {"scheduled": "2024-01-01T08:00:00Z"}
                }"#,
            ),
            record(
                r#"{
                    "airline": {"name": "EasyJet"},
                    "arrival": {"scheduled": "2024-01-01T09:00:00Z"}
                }"#,
            ),
            record(
                r#"{
                    "airline": {"name": "Emirates"},
                    "aircraft": {"iata": "777"},
                    "arrival": {"scheduled": "2024-01-01T10:00:00Z"}
                }"#,
            ),
        ];

        let dashboard = build_dashboard(&records, noon(), Extras::default());
        let cards = &dashboard.resumen_cards;

        assert_eq!(cards.t1.vuelos + cards.t2.vuelos, dashboard.meta.total_vuelos);
        assert!(cards.puente.vuelos <= cards.t1.vuelos);
        assert!(cards.t2c.vuelos <= cards.t2.vuelos);

        let histogram_total: u32 = dashboard.grafica.iter().map(|s| s.pax).sum();
        assert_eq!(histogram_total, cards.t1.pax + cards.t2.pax);
        assert_eq!(histogram_total, 180 + 170 + 300);
    }

    #[test]
    fn test_idempotent_for_a_fixed_now() {
        let records = vec![
            record(
                r#"{
                    "airline": {"name": "Ryanair"},
                    "arrival": {"scheduled": "2024-01-01T21:00:00Z"}
                }"#,
            ),
            record(
                r#"{
                    "airline": {"name": "Iberia"},
                    "arrival": {"estimated": "2024-01-01T07:30:00Z"}
                }"#,
            ),
        ];

        let first = build_dashboard(&records, noon(), Extras::default());
        let second = build_dashboard(&records, noon(), Extras::default());

        assert_eq!(first, second);
    }
}
