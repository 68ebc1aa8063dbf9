//! Loader for the auxiliary metrics block.
//!
//! The pipeline passes these values through untouched; they are maintained
//! by hand until they get their own data sources. Stored as a plain JSON
//! object on disk:
//!
//! ```json
//! {
//!   "licencia": 152000,
//!   "licencia_tendencia": "+12%",
//!   "clima_prob": 75,
//!   "clima_estado": "Lluvia"
//! }
//! ```

use anyhow::{Context, Result};

use crate::pipeline::types::Extras;

/// Loads the extras block from a JSON file at `path`.
pub fn load_extras(path: &str) -> Result<Extras> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read extras config {path}"))?;
    let extras = serde_json::from_str(&content)
        .with_context(|| format!("invalid extras config {path}"))?;
    Ok(extras)
}

/// Loads the extras block from `path` if given, otherwise the compiled-in
/// defaults.
pub fn extras_or_default(path: Option<&str>) -> Result<Extras> {
    match path {
        Some(path) => load_extras(path),
        None => Ok(Extras::default()),
    }
}
