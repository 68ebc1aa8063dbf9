//! Packages a finished run into the dashboard document.

use chrono::{DateTime, Utc};

use crate::pipeline::aggregate::AggregateState;
use crate::pipeline::types::{Dashboard, Extras, Meta, ResumenCards};

/// Snapshots the aggregate state into the output document. Pure packaging:
/// no counting or classification happens here, and `state` is left intact.
pub fn assemble(state: &AggregateState, now: DateTime<Utc>, extras: Extras) -> Dashboard {
    Dashboard {
        meta: Meta {
            update_time: now.format("%H:%M").to_string(),
            total_vuelos: state.total_vuelos(),
        },
        resumen_cards: ResumenCards {
            t1: state.t1.clone(),
            t2: state.t2.clone(),
            puente: state.puente.clone(),
            t2c: state.t2c.clone(),
        },
        grafica: state.hour_slots(),
        vuelos: state.vuelos().to_vec(),
        extras,
    }
}
