//! Counters for the coordinator's silent-drop taxonomy
//!
//! The protocol never surfaces failures to clients; these counters are the
//! only record that a transfer was dropped or a degenerate pair was floored.

/// Well-known counter names used by the coordinator
pub const TRANSFERS_DELIVERED: &str = "transfers_delivered";
pub const TRANSFERS_DROPPED: &str = "transfers_dropped";
pub const DEGENERATE_PAIRS: &str = "degenerate_pairs";
pub const SENDS_SKIPPED: &str = "sends_skipped";

use std::collections::HashMap;

pub struct Counters {
    counters: HashMap<String, u64>,
}

impl Counters {
    pub fn new() -> Self {
        Self {
            counters: HashMap::new(),
        }
    }

    pub fn increment(&mut self, name: &str) {
        self.add(name, 1);
    }

    pub fn add(&mut self, name: &str, value: u64) {
        *self.counters.entry(name.to_string()).or_insert(0) += value;
    }

    pub fn get(&self, name: &str) -> u64 {
        self.counters.get(name).copied().unwrap_or(0)
    }

    pub fn reset_all(&mut self) {
        self.counters.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &u64)> {
        self.counters.iter()
    }
}

impl Default for Counters {
    fn default() -> Self {
        Self::new()
    }
}
