//! Folds classified flights into counters, the hourly histogram, and the
//! display list.

use tracing::warn;

use crate::pipeline::types::{Card, ClassifiedFlight, HourSlot, Terminal, Vuelo};

/// Mutable accumulator for one run. Created fresh per invocation; nothing is
/// shared across runs.
#[derive(Debug, Default)]
pub struct AggregateState {
    pub t1: Card,
    pub t2: Card,
    pub puente: Card,
    pub t2c: Card,
    histogram: [u32; 24],
    vuelos: Vec<Vuelo>,
}

impl AggregateState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one classified flight into the running aggregates.
    pub fn push(&mut self, classified: &ClassifiedFlight) {
        let card = match classified.terminal {
            Terminal::T1 => &mut self.t1,
            Terminal::T2 => &mut self.t2,
        };
        card.vuelos += 1;
        card.pax += classified.pax;

        // Subset counters annotate the terminal counters, they do not
        // replace them.
        if classified.es_puente {
            self.puente.vuelos += 1;
            self.puente.pax += classified.pax;
        }
        if classified.es_t2c {
            self.t2c.vuelos += 1;
            self.t2c.pax += classified.pax;
        }

        match hour_index(&classified.flight.bucket) {
            Some(slot) => self.histogram[slot] += classified.pax,
            None => warn!(bucket = %classified.flight.bucket, "hour bucket out of range, ignoring"),
        }

        self.vuelos.push(display_entry(classified));
    }

    /// Seals the run: sorts the display list by arrival time.
    /// Lexicographic order is chronological order for fixed-width `HH:MM`.
    pub fn finish(mut self) -> Self {
        self.vuelos.sort_by(|a, b| a.hora.cmp(&b.hora));
        self
    }

    pub fn total_vuelos(&self) -> u32 {
        self.t1.vuelos + self.t2.vuelos
    }

    /// Renders the histogram as the 24 ordered `"00"`..`"23"` slots.
    pub fn hour_slots(&self) -> Vec<HourSlot> {
        self.histogram
            .iter()
            .enumerate()
            .map(|(hour, pax)| HourSlot {
                name: format!("{hour:02}"),
                pax: *pax,
            })
            .collect()
    }

    pub fn vuelos(&self) -> &[Vuelo] {
        &self.vuelos
    }
}

fn hour_index(bucket: &str) -> Option<usize> {
    bucket.parse::<usize>().ok().filter(|h| *h < 24)
}

fn display_entry(classified: &ClassifiedFlight) -> Vuelo {
    let f = &classified.flight;
    let (estado, estado_color) = estado_ui(&f.estado_raw);

    Vuelo {
        id: f.vuelo_id.clone(),
        aerolinea: f.aerolinea.clone(),
        origen: f
            .origen_nombre
            .clone()
            .or_else(|| f.origen_iata.clone())
            .unwrap_or_else(|| "N/D".to_string()),
        hora: f.hora.clone(),
        terminal: classified.terminal.label().to_string(),
        es_puente: classified.es_puente,
        es_t2c: classified.es_t2c,
        avion: f.avion.clone(),
        pax: classified.pax,
        estado: estado.to_string(),
        estado_color: estado_color.to_string(),
    }
}

/// Maps a raw flight status onto the UI status pair (label, emphasis).
fn estado_ui(raw: &str) -> (&'static str, &'static str) {
    match raw {
        "active" | "landed" => ("Aterrizando", "warning"),
        _ => ("En hora", "default"),
    }
}
