//! Orb Metrics - observability for the silent-drop protocol
//!
//! The coordination protocol absorbs every failure silently (a lost particle
//! just vanishes), so counters and tick timing are the only visibility into
//! drops, degenerate geometry, and skipped sends. Instrumentation is
//! feature-gated and compiles out entirely without the `metrics` feature.
//!
//! # Usage
//!
//! ```ignore
//! use orb_metrics::{Counters, TickTimer, TRANSFERS_DROPPED};
//!
//! let mut counters = Counters::new();
//! counters.increment(TRANSFERS_DROPPED);
//!
//! let mut timer = TickTimer::new(256); // Track last 256 ticks
//! timer.begin();
//! // ... run solver tick ...
//! timer.end();
//! println!("tick: {:.1}us", timer.tick_time_us());
//! ```

#[cfg(feature = "metrics")]
mod counter;
#[cfg(feature = "metrics")]
mod ring_buffer;
#[cfg(feature = "metrics")]
mod tick_timer;

#[cfg(feature = "metrics")]
pub use counter::{
    Counters, DEGENERATE_PAIRS, SENDS_SKIPPED, TRANSFERS_DELIVERED, TRANSFERS_DROPPED,
};
#[cfg(feature = "metrics")]
pub use ring_buffer::RingBuffer;
#[cfg(feature = "metrics")]
pub use tick_timer::TickTimer;

// ============================================================================
// No-op stubs when metrics disabled
// ============================================================================

#[cfg(not(feature = "metrics"))]
pub const TRANSFERS_DELIVERED: &str = "transfers_delivered";
#[cfg(not(feature = "metrics"))]
pub const TRANSFERS_DROPPED: &str = "transfers_dropped";
#[cfg(not(feature = "metrics"))]
pub const DEGENERATE_PAIRS: &str = "degenerate_pairs";
#[cfg(not(feature = "metrics"))]
pub const SENDS_SKIPPED: &str = "sends_skipped";

#[cfg(not(feature = "metrics"))]
#[derive(Default)]
pub struct Counters;

#[cfg(not(feature = "metrics"))]
impl Counters {
    pub fn new() -> Self { Self }
    pub fn increment(&mut self, _name: &str) {}
    pub fn add(&mut self, _name: &str, _value: u64) {}
    pub fn get(&self, _name: &str) -> u64 { 0 }
    pub fn reset_all(&mut self) {}
    pub fn iter(&self) -> std::iter::Empty<(&String, &u64)> { std::iter::empty() }
}

#[cfg(not(feature = "metrics"))]
pub struct TickTimer;

#[cfg(not(feature = "metrics"))]
impl TickTimer {
    pub fn new(_capacity: usize) -> Self { Self }
    pub fn begin(&mut self) {}
    pub fn end(&mut self) {}
    pub fn ticks_per_second(&self) -> f64 { 0.0 }
    pub fn tick_time_us(&self) -> f64 { 0.0 }
    pub fn tick_time_range_us(&self) -> (f64, f64) { (0.0, 0.0) }
}

#[cfg(not(feature = "metrics"))]
pub struct RingBuffer<T>(std::marker::PhantomData<T>);

#[cfg(not(feature = "metrics"))]
impl<T> RingBuffer<T> {
    pub fn new(_capacity: usize) -> Self { Self(std::marker::PhantomData) }
    pub fn push(&mut self, _value: T) {}
    pub fn len(&self) -> usize { 0 }
    pub fn is_empty(&self) -> bool { true }
}
