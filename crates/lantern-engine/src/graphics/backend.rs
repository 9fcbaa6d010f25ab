use crate::coords::{Transform, Viewport};

use super::{Color, Context};

/// Backend surface a 2D renderer implements.
///
/// A frame is bracketed by [`draw_begin`](Self::draw_begin) and
/// [`draw_end`](Self::draw_end): begin hands out the frame's identity
/// [`Context`], end releases whatever per-frame state the backend holds.
/// Every begin must be matched by exactly one end before the next begin;
/// the backend may do anything at all if the pairing is violated, which is
/// why callers go through [`draw`](super::draw) instead of pairing by hand.
///
/// Angles are radians, rectangles are `[x, y, w, h]` in the coordinate
/// space established by the transform argument.
pub trait Graphics {
    /// Starts a frame for `viewport`, returning its identity context.
    fn draw_begin(&mut self, viewport: Viewport) -> Context;

    /// Ends the current frame, releasing per-frame backend state.
    fn draw_end(&mut self);

    /// Fills the whole surface with `color`.
    fn clear_color(&mut self, color: Color);

    /// Fills the rectangle `rect` under `transform`.
    fn rectangle(&mut self, color: Color, rect: [f64; 4], transform: Transform);

    /// Strokes a circular arc from `start` to `end` radians, laid out in
    /// the bounding rectangle `rect`, with stroke radius `radius`.
    fn circle_arc(
        &mut self,
        color: Color,
        radius: f64,
        start: f64,
        end: f64,
        rect: [f64; 4],
        transform: Transform,
    );
}
