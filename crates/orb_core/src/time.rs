//! Solver tick timing
//!
//! The gravity solver runs on a fixed high-frequency tick; the period is a
//! visual-tuning parameter, not a correctness constant. Heartbeats from
//! clients run at a much lower, independent rate.

use std::time::Duration;

/// Default gravity solver tick period (~333 Hz)
pub const TICK_PERIOD: Duration = Duration::from_millis(3);

/// Default client heartbeat period (10 Hz)
pub const HEARTBEAT_PERIOD: Duration = Duration::from_millis(100);

/// Tick counter for the coordinator loop
pub struct TickClock {
    tick_count: u64,
    accumulated_time: Duration,
    period: Duration,
}

impl TickClock {
    pub fn new(period: Duration) -> Self {
        Self {
            tick_count: 0,
            accumulated_time: Duration::ZERO,
            period,
        }
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn advance_tick(&mut self) {
        self.tick_count += 1;
        self.accumulated_time += self.period;
    }

    pub fn total_time(&self) -> Duration {
        self.accumulated_time
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}
