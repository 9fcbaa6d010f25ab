/// Default update rate, in ticks per second.
pub const DEFAULT_UPS: u64 = 120;

/// Default maximum render rate, in frames per second.
pub const DEFAULT_MAX_FPS: u64 = 60;

/// Event loop cadence configuration.
///
/// Rates are maximums, not fixed timesteps: a loop that falls behind does not
/// burst-fire catch-up ticks, it just reports larger deltas. `None` leaves
/// the rate uncapped; `Some(0)` disables the tick kind entirely.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EventSettings {
    /// Maximum render rate. `None` renders as fast as the loop spins.
    pub max_fps: Option<u64>,

    /// Maximum update rate. `None` updates as fast as the loop spins.
    pub ups: Option<u64>,

    /// Present after each consumed render event.
    pub swap_buffers: bool,

    /// No timers at all: sleep until input, render once per input batch.
    pub lazy: bool,
}

impl EventSettings {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for EventSettings {
    fn default() -> Self {
        Self {
            max_fps: Some(DEFAULT_MAX_FPS),
            ups: Some(DEFAULT_UPS),
            swap_buffers: true,
            lazy: false,
        }
    }
}
