//! Solver tick timing utilities

use super::ring_buffer::RingBuffer;
use std::time::{Duration, Instant};

pub struct TickTimer {
    tick_start: Instant,
    tick_times: RingBuffer<Duration>,
}

impl TickTimer {
    pub fn new(capacity: usize) -> Self {
        Self {
            tick_start: Instant::now(),
            tick_times: RingBuffer::new(capacity),
        }
    }

    pub fn begin(&mut self) {
        self.tick_start = Instant::now();
    }

    pub fn end(&mut self) {
        let elapsed = self.tick_start.elapsed();
        self.tick_times.push(elapsed);
    }

    /// Average ticks per second over the sample window
    pub fn ticks_per_second(&self) -> f64 {
        let avg = self.tick_times.average();
        if avg.as_secs_f64() > 0.0 {
            1.0 / avg.as_secs_f64()
        } else {
            0.0
        }
    }

    pub fn tick_time_us(&self) -> f64 {
        self.tick_times.average().as_secs_f64() * 1_000_000.0
    }

    pub fn tick_time_range_us(&self) -> (f64, f64) {
        let (min, max) = self.tick_times.min_max();
        (min.as_secs_f64() * 1_000_000.0, max.as_secs_f64() * 1_000_000.0)
    }
}
