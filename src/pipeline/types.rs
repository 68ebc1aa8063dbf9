//! Data types used by the dashboard pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A flight that passed the status filter and carries a resolved arrival
/// instant. Display time and hour bucket are both derived from that one
/// instant at construction.
#[derive(Debug, Clone)]
pub struct NormalizedFlight {
    pub arrival: DateTime<Utc>,
    /// Fixed-width `HH:MM`, rendered in UTC.
    pub hora: String,
    /// Hour bucket key, one of `"00"`..`"23"`.
    pub bucket: String,
    pub aerolinea: String,
    pub vuelo_id: String,
    pub origen_iata: Option<String>,
    pub origen_nombre: Option<String>,
    pub avion: String,
    pub estado_raw: String,
    /// Explicit terminal from the feed, if the provider sent one.
    pub terminal_hint: Option<String>,
}

/// One of the two physical arrival terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    T1,
    T2,
}

impl Terminal {
    /// Maps a provider terminal value onto a terminal. Gate suffixes such as
    /// `"2B"` collapse onto their terminal; anything else is unusable.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().chars().next() {
            Some('1') => Some(Terminal::T1),
            Some('2') => Some(Terminal::T2),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Terminal::T1 => "T1",
            Terminal::T2 => "T2",
        }
    }
}

/// A [`NormalizedFlight`] with its final classification. Nothing downstream
/// re-derives these fields.
#[derive(Debug, Clone)]
pub struct ClassifiedFlight {
    pub flight: NormalizedFlight,
    pub terminal: Terminal,
    pub es_puente: bool,
    pub es_t2c: bool,
    pub pax: u32,
}

/// Flight and passenger counts for one summary card.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub vuelos: u32,
    pub pax: u32,
}

/// One slot of the hourly passenger histogram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourSlot {
    pub name: String,
    pub pax: u32,
}

/// Per-flight display entry handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vuelo {
    pub id: String,
    pub aerolinea: String,
    pub origen: String,
    pub hora: String,
    pub terminal: String,
    pub es_puente: bool,
    pub es_t2c: bool,
    pub avion: String,
    pub pax: u32,
    pub estado: String,
    pub estado_color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meta {
    pub update_time: String,
    pub total_vuelos: u32,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ResumenCards {
    pub t1: Card,
    pub t2: Card,
    pub puente: Card,
    pub t2c: Card,
}

/// Auxiliary metrics sourced outside the pipeline and passed through as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extras {
    pub licencia: u32,
    pub licencia_tendencia: String,
    pub clima_prob: u32,
    pub clima_estado: String,
}

impl Default for Extras {
    fn default() -> Self {
        Extras {
            licencia: 152_000,
            licencia_tendencia: "+12%".to_string(),
            clima_prob: 75,
            clima_estado: "Lluvia".to_string(),
        }
    }
}

/// Complete dashboard document, written as JSON for the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub meta: Meta,
    pub resumen_cards: ResumenCards,
    pub grafica: Vec<HourSlot>,
    pub vuelos: Vec<Vuelo>,
    pub extras: Extras,
}
