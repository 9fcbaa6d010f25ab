//! Logger setup.
//!
//! Everything in the crate logs through the `log` facade; this module owns
//! the one place a binary turns that facade into real output. Libraries
//! embedding the engine can skip it and install their own logger instead.

mod init;

pub use init::{LoggingConfig, init_logging};
