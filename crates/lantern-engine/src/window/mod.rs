//! Window abstraction.
//!
//! The `Window` trait is the event-source boundary the loop in
//! [`crate::events`] is built on: pending typed events, blocking and bounded
//! waits, and the surface-level state (size, title, close flag) one native
//! window owns. `WinitWindow` is the shipped implementation.

mod error;
mod settings;
mod winit;

pub use error::WindowError;
pub use settings::{Size, WindowSettings};
pub use self::winit::WinitWindow;

use std::time::Duration;

use crate::events::Event;

/// One native window, viewed as a source of typed events.
///
/// A window owns its surface exclusively; event loops borrow it per call.
/// None of this is thread-safe: one logical thread drives the window, and
/// the only concurrent mutation the model allows is a close arriving from
/// the platform.
pub trait Window {
    /// Returns the next pending event without blocking.
    fn poll_event(&mut self) -> Option<Event>;

    /// Blocks until any event arrives and returns it.
    ///
    /// On a window already marked closed this returns [`Event::Close`]
    /// instead of blocking forever.
    fn wait_event(&mut self) -> Event;

    /// Blocks for at most `timeout`; `None` means the timeout elapsed.
    fn wait_event_timeout(&mut self, timeout: Duration) -> Option<Event>;

    /// Presents the frame drawn since the last render event.
    fn swap_buffers(&mut self);

    /// Whether the window has been asked to close.
    ///
    /// The event loop treats this as the terminal condition; consumers may
    /// set it themselves via [`Window::set_should_close`].
    fn should_close(&self) -> bool;

    fn set_should_close(&mut self, value: bool);

    /// Current inner size in logical points.
    fn size(&self) -> Size;

    /// Current drawable size in physical pixels.
    fn draw_size(&self) -> [u32; 2];

    fn title(&self) -> String;

    /// Updates the title; the native layer applies it asynchronously before
    /// the next present.
    fn set_title(&mut self, title: &str);
}
