use crate::coords::Transform;

use super::{Color, Graphics};

/// Fills the rectangle `[x, y, w, h]` under `transform`.
pub fn rectangle<G>(color: Color, rect: [f64; 4], transform: Transform, backend: &mut G)
where
    G: Graphics + ?Sized,
{
    backend.rectangle(color, rect, transform);
}

/// Strokes a circular arc inside the bounding rectangle `[x, y, w, h]`.
///
/// `start` and `end` are radians; sweeping from `0` to `2π` draws the full
/// circle. A zero-length sweep (`start == end`) draws nothing and is not
/// an error, so callers can animate a sweep down to nothing without
/// special-casing the endpoint.
pub fn circle_arc<G>(
    color: Color,
    radius: f64,
    start: f64,
    end: f64,
    rect: [f64; 4],
    transform: Transform,
    backend: &mut G,
) where
    G: Graphics + ?Sized,
{
    if start == end {
        return;
    }
    backend.circle_arc(color, radius, start, end, rect, transform);
}

#[cfg(test)]
mod tests {
    use std::f64::consts::TAU;

    use super::*;
    use crate::graphics::{GraphicsCall, RecordingGraphics};

    const RED: Color = [1.0, 0.0, 0.0, 1.0];

    #[test]
    fn rectangle_reaches_the_backend_unchanged() {
        let mut backend = RecordingGraphics::new();

        rectangle(RED, [10.0, 20.0, 30.0, 40.0], Transform::IDENTITY, &mut backend);

        assert_eq!(
            backend.calls(),
            [GraphicsCall::Rectangle {
                color: RED,
                rect: [10.0, 20.0, 30.0, 40.0],
                transform: Transform::IDENTITY,
            }]
        );
    }

    #[test]
    fn full_sweep_draws_the_whole_circle() {
        let mut backend = RecordingGraphics::new();

        circle_arc(RED, 2.0, 0.0, TAU, [0.0, 0.0, 50.0, 50.0], Transform::IDENTITY, &mut backend);

        assert_eq!(backend.circle_arcs(), 1);
        assert_eq!(
            backend.calls(),
            [GraphicsCall::CircleArc {
                color: RED,
                radius: 2.0,
                start: 0.0,
                end: TAU,
                rect: [0.0, 0.0, 50.0, 50.0],
                transform: Transform::IDENTITY,
            }]
        );
    }

    #[test]
    fn degenerate_sweep_draws_nothing() {
        let mut backend = RecordingGraphics::new();

        circle_arc(RED, 2.0, 1.5, 1.5, [0.0, 0.0, 50.0, 50.0], Transform::IDENTITY, &mut backend);

        assert_eq!(backend.call_count(), 0);
    }
}
