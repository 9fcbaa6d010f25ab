use crate::coords::{Transform, Viewport};

/// One frame's permission to draw: a viewport plus the current transform.
///
/// Contexts are values. `trans`, `rotate` and `scale` return a new context
/// and leave the receiver alone, so a child can derive its own coordinate
/// frame without corrupting a sibling's. The fresh context from
/// `draw_begin` carries the viewport's pixel-to-NDC mapping, meaning draw
/// code that composes nothing works directly in window pixels.
#[derive(Debug, Copy, Clone)]
pub struct Context {
    pub viewport: Viewport,

    /// Base transform `reset` returns to. Starts as
    /// [`Viewport::abs_transform`].
    pub view: Transform,

    /// Current transform applied to draw coordinates.
    pub transform: Transform,
}

impl Context {
    #[inline]
    pub fn new(viewport: Viewport) -> Self {
        let view = viewport.abs_transform();
        Self {
            viewport,
            view,
            transform: view,
        }
    }

    /// Translates the local frame by `(dx, dy)`.
    ///
    /// Composition is rightmost-first: in `ctx.trans(10.0, 0.0).scale(2.0, 2.0)`
    /// a point is scaled before it is shifted.
    #[inline]
    #[must_use]
    pub fn trans(self, dx: f64, dy: f64) -> Self {
        Self {
            transform: self.transform * Transform::translate(dx, dy),
            ..self
        }
    }

    /// Rotates the local frame by `radians`.
    #[inline]
    #[must_use]
    pub fn rotate(self, radians: f64) -> Self {
        Self {
            transform: self.transform * Transform::rotate(radians),
            ..self
        }
    }

    /// Scales the local frame by `(sx, sy)`.
    #[inline]
    #[must_use]
    pub fn scale(self, sx: f64, sy: f64) -> Self {
        Self {
            transform: self.transform * Transform::scale(sx, sy),
            ..self
        }
    }

    /// Discards accumulated operations, returning to the view transform.
    #[inline]
    #[must_use]
    pub fn reset(self) -> Self {
        Self {
            transform: self.view,
            ..self
        }
    }

    /// Adopts the current transform as the new view, so a later `reset`
    /// comes back here instead of to pixel space.
    #[inline]
    #[must_use]
    pub fn store_view(self) -> Self {
        Self {
            view: self.transform,
            ..self
        }
    }

    /// Window size in logical points, the scale draw coordinates use.
    #[inline]
    pub fn view_size(&self) -> [f64; 2] {
        self.viewport.window_size
    }
}
