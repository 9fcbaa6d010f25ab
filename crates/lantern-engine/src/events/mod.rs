//! Event loop subsystem.
//!
//! Multiplexes native input with update/render cadence into one typed,
//! pollable stream:
//!
//! - [`Event`] is the closed set of things a consumer can receive.
//! - [`EventSettings`] configures cadence and presentation.
//! - [`Events`] turns any [`crate::window::Window`] into that stream via
//!   `next()`, which returns `None` exactly when the window is done.

mod event;
mod settings;
mod stream;

pub use event::{Event, RenderArgs, ResizeArgs, UpdateArgs};
pub use settings::{EventSettings, DEFAULT_MAX_FPS, DEFAULT_UPS};
pub use stream::Events;
