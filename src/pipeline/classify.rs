//! Terminal, subset, and passenger-estimate classification.
//!
//! All rules are fixed lookup tables; extending a table must not require
//! touching the control flow below.

use crate::pipeline::types::{ClassifiedFlight, NormalizedFlight, Terminal};

/// Carriers with a known home terminal, used when the feed omits the
/// terminal. Anything not listed lands on T1.
static CARRIER_TERMINALS: &[(&str, Terminal)] = &[
    ("Vueling", Terminal::T1),
    ("Iberia", Terminal::T1),
    ("Lufthansa", Terminal::T1),
    ("British Airways", Terminal::T1),
    ("American Airlines", Terminal::T1),
    ("Ryanair", Terminal::T2),
    ("EasyJet", Terminal::T2),
    ("Wizz Air", Terminal::T2),
];

/// Operators flying the Madrid air shuttle.
static PUENTE_OPERATORS: &[&str] = &["Iberia", "Vueling", "Air Europa"];

/// Origin of the shuttle route.
const PUENTE_ORIGIN: &str = "MAD";

/// The low-cost carrier whose T2 traffic is tracked separately.
const T2C_CARRIER: &str = "EasyJet";

/// Aircraft codes estimated at wide-body capacity ("350" kept as delivered
/// by the upstream tables).
static WIDE_BODY_CODES: &[&str] = &["330", "340", "350", "380", "747", "777", "787"];

const PAX_PUENTE: u32 = 180;
const PAX_T2C: u32 = 170;
const PAX_WIDE_BODY: u32 = 300;
const PAX_DEFAULT: u32 = 150;

/// Classifies a normalized flight. Deterministic; the result is final for
/// the run.
pub fn classify(flight: NormalizedFlight) -> ClassifiedFlight {
    let terminal = flight
        .terminal_hint
        .as_deref()
        .and_then(Terminal::from_code)
        .or_else(|| terminal_for_airline(&flight.aerolinea))
        // Ambiguous traffic is booked on T1 by policy.
        .unwrap_or(Terminal::T1);

    let es_puente = terminal == Terminal::T1
        && flight.origen_iata.as_deref() == Some(PUENTE_ORIGIN)
        && PUENTE_OPERATORS.contains(&flight.aerolinea.as_str());

    let es_t2c = terminal == Terminal::T2 && flight.aerolinea.contains(T2C_CARRIER);

    let pax = estimate_pax(es_puente, es_t2c, &flight.avion);

    ClassifiedFlight {
        flight,
        terminal,
        es_puente,
        es_t2c,
        pax,
    }
}

fn terminal_for_airline(airline: &str) -> Option<Terminal> {
    CARRIER_TERMINALS
        .iter()
        .find(|(name, _)| *name == airline)
        .map(|(_, terminal)| *terminal)
}

/// First matching rule wins: shuttle, then low-cost subset, then wide-body,
/// then the generic estimate.
fn estimate_pax(es_puente: bool, es_t2c: bool, aircraft: &str) -> u32 {
    if es_puente {
        PAX_PUENTE
    } else if es_t2c {
        PAX_T2C
    } else if WIDE_BODY_CODES.contains(&aircraft) {
        PAX_WIDE_BODY
    } else {
        PAX_DEFAULT
    }
}
