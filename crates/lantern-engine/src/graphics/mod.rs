//! Drawing layer: backend trait, per-frame contexts, scoped draw sessions.
//!
//! Responsibilities:
//! - define the backend surface ([`Graphics`]) a renderer must implement
//! - hand out immutable transform contexts scoped to one frame
//! - enforce the begin/end pairing around user draw code
//!
//! Rasterization itself lives behind the [`Graphics`] trait; this module
//! ships only a recording backend for tests and headless runs.

mod backend;
mod context;
mod draw;
mod recorder;
mod shapes;

pub use backend::Graphics;
pub use context::Context;
pub use draw::{draw, try_draw};
pub use recorder::{GraphicsCall, RecordingGraphics};
pub use shapes::{circle_arc, rectangle};

/// Straight RGBA, components nominally in `[0, 1]`.
///
/// Out-of-range components are passed through to the backend uninterpreted;
/// clamping, if any, is the backend's business.
pub type Color = [f32; 4];
