//! Coordinator settings

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::solver::SolverParams;

/// Coordinator tunables. Everything here shapes the visuals or the plumbing;
/// nothing is correctness-critical.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CoordinatorConfig {
    /// Gravity solver tick period in milliseconds
    pub tick_period_ms: u64,
    /// Pseudo-gravitational constant K
    pub gravity_k: f64,
    /// Minimum effective center distance for the force floor
    pub min_distance: f64,
    /// Inbound command channel capacity
    pub command_buffer: usize,
    /// Rolling window for tick duration stats
    pub tick_stats_window: usize,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            tick_period_ms: 3,
            gravity_k: 500_000.0,
            min_distance: 100.0,
            command_buffer: 256,
            tick_stats_window: 256,
        }
    }
}

impl CoordinatorConfig {
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }

    pub fn solver_params(&self) -> SolverParams {
        SolverParams {
            gravity_k: self.gravity_k,
            min_distance: self.min_distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_tuning_constants() {
        let config = CoordinatorConfig::default();
        assert_eq!(config.tick_period(), Duration::from_millis(3));
        assert_eq!(config.gravity_k, 500_000.0);
        assert_eq!(config.min_distance, 100.0);
    }

    #[test]
    fn partial_settings_fill_in_defaults() {
        let config: CoordinatorConfig = serde_json::from_str(r#"{"tick_period_ms": 8}"#).unwrap();
        assert_eq!(config.tick_period_ms, 8);
        assert_eq!(config.gravity_k, 500_000.0);
    }
}
