//! Runtime settings

use anyhow::{Context, Result};
use orb_coord::CoordinatorConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Runtime settings: coordinator tunables plus the headless demo shape
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub coordinator: CoordinatorConfig,
    pub demo: DemoSettings,
}

/// Simulated-window demo parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    /// Number of simulated windows
    pub windows: usize,
    /// Window size in screen units
    pub window_width: f64,
    pub window_height: f64,
    /// Heartbeat period in milliseconds (much slower than the solver tick)
    pub heartbeat_ms: u64,
    /// Horizontal drift amplitude of each simulated window
    pub drift_amplitude: f64,
    /// How long the demo runs before disconnecting everyone
    pub run_secs: u64,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            windows: 3,
            window_width: 800.0,
            window_height: 600.0,
            heartbeat_ms: 100,
            drift_amplitude: 25.0,
            run_secs: 5,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults when no path
    /// is given. A missing or malformed file is an error, not a fallback.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading settings from {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing settings from {}", path.display()))
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_a_path() {
        let settings = Settings::load(None).unwrap();
        assert_eq!(settings.demo.windows, 3);
        assert_eq!(settings.coordinator.tick_period_ms, 3);
    }

    #[test]
    fn partial_json_overrides_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"demo": {"windows": 6}, "coordinator": {"gravity_k": 1e6}}"#)
                .unwrap();
        assert_eq!(settings.demo.windows, 6);
        assert_eq!(settings.coordinator.gravity_k, 1_000_000.0);
        assert_eq!(settings.demo.heartbeat_ms, 100);
    }
}
