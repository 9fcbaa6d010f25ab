//! Coordinate types shared between the event loop and the graphics boundary.
//!
//! Canonical CPU space:
//! - Logical points (DPI-aware) for window-relative coordinates
//! - Origin top-left
//! - +X right, +Y down
//!
//! `Viewport::abs_transform` maps that space onto the normalized device
//! coordinates a backend expects, so draw code can stay in pixel units.

mod transform;
mod viewport;

pub use transform::Transform;
pub use viewport::Viewport;
