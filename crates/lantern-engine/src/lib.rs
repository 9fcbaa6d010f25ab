//! Lantern engine crate.
//!
//! A thin 2D layer over the platform: one window, a pollable event stream
//! with update/render cadence, and a scoped drawing surface behind the
//! [`graphics::Graphics`] trait.

pub mod window;
pub mod events;
pub mod input;
pub mod time;

pub mod logging;
pub mod coords;
pub mod graphics;
