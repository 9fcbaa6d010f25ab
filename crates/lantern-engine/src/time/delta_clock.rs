use std::time::{Duration, Instant};

/// Wall-clock delta tracker for update ticks.
///
/// `tick()` reports the real elapsed seconds since the previous tick, floored
/// at a tiny epsilon so consumers can divide by it. There is deliberately no
/// upper clamp: a stalled loop reports the true stall length and leaves any
/// smoothing policy to the consumer.
#[derive(Debug, Clone)]
pub struct DeltaClock {
    last: Instant,
    floor: Duration,
}

/// Smallest delta `tick()` will report.
///
/// Coarse monotonic clocks can return the same instant twice in a tight loop.
const DT_FLOOR: Duration = Duration::from_nanos(1);

impl DeltaClock {
    pub fn new() -> Self {
        Self::with_floor(DT_FLOOR)
    }

    /// Creates a clock with a custom delta floor.
    pub fn with_floor(floor: Duration) -> Self {
        Self {
            last: Instant::now(),
            floor,
        }
    }

    /// Resets the baseline without producing a tick.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock; returns seconds since the previous tick.
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last).max(self.floor);
        self.last = now;
        dt.as_secs_f64()
    }

    /// Seconds since the previous tick, without advancing the clock.
    pub fn since_tick(&self) -> f64 {
        self.last.elapsed().as_secs_f64()
    }
}

impl Default for DeltaClock {
    fn default() -> Self {
        Self::new()
    }
}
