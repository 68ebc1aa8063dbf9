//! Persistence for the dashboard document.

use anyhow::Result;
use std::path::Path;
use tracing::{debug, info};

use crate::pipeline::types::Dashboard;

/// Logs the dashboard as pretty-printed JSON.
pub fn print_json(dashboard: &Dashboard) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(dashboard)?);
    Ok(())
}

/// Writes the dashboard document as JSON to `path`, creating parent
/// directories as needed. The file is replaced whole on every run.
pub fn write_dashboard(path: &str, dashboard: &Dashboard) -> Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_vec(dashboard)?;
    debug!(path, bytes = json.len(), "writing dashboard document");
    std::fs::write(path, json)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::aggregate::AggregateState;
    use crate::pipeline::assemble::assemble;
    use crate::pipeline::types::Extras;
    use chrono::{TimeZone, Utc};
    use std::env;
    use std::fs;

    fn empty_dashboard() -> Dashboard {
        let state = AggregateState::new().finish();
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        assemble(&state, now, Extras::default())
    }

    #[test]
    fn test_print_json_does_not_panic() {
        print_json(&empty_dashboard()).unwrap();
    }

    #[test]
    fn test_write_dashboard_creates_parent_dirs() {
        let dir = format!("{}/bcn_arrivals_test_out", env::temp_dir().display());
        let _ = fs::remove_dir_all(&dir);
        let path = format!("{dir}/nested/data.json");

        write_dashboard(&path, &empty_dashboard()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["meta"]["total_vuelos"], 0);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_write_dashboard_replaces_previous_run() {
        let path = format!("{}/bcn_arrivals_test_replace.json", env::temp_dir().display());
        let _ = fs::remove_file(&path);

        write_dashboard(&path, &empty_dashboard()).unwrap();
        write_dashboard(&path, &empty_dashboard()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(serde_json::from_str::<serde_json::Value>(&content).is_ok());

        fs::remove_file(&path).unwrap();
    }
}
