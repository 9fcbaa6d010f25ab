//! Time subsystem.
//!
//! Stable, testable tick timing without coupling to the event loop. Intended
//! usage: one `DeltaClock` per loop, `tick()` once per update to obtain the
//! elapsed seconds since the previous update.

mod delta_clock;

pub use delta_clock::DeltaClock;
