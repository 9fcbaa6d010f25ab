use crate::coords::{Transform, Viewport};

use super::{Color, Context, Graphics};

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphicsCall {
    DrawBegin(Viewport),
    DrawEnd,
    ClearColor(Color),
    Rectangle {
        color: Color,
        rect: [f64; 4],
        transform: Transform,
    },
    CircleArc {
        color: Color,
        radius: f64,
        start: f64,
        end: f64,
        rect: [f64; 4],
        transform: Transform,
    },
}

/// Backend that records calls instead of rasterizing.
///
/// Stands in for a native renderer wherever no display is available:
/// tests assert on [`calls`](Self::calls) or the per-kind counters, and
/// headless runs use it as a sink. Call order is insertion order.
#[derive(Debug, Default)]
pub struct RecordingGraphics {
    calls: Vec<GraphicsCall>,
}

impl RecordingGraphics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded calls, oldest first.
    pub fn calls(&self) -> &[GraphicsCall] {
        &self.calls
    }

    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    /// Drops recorded calls, keeping capacity for the next frame.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    pub fn draw_begins(&self) -> usize {
        self.count(|call| matches!(call, GraphicsCall::DrawBegin(_)))
    }

    pub fn draw_ends(&self) -> usize {
        self.count(|call| matches!(call, GraphicsCall::DrawEnd))
    }

    pub fn clear_colors(&self) -> usize {
        self.count(|call| matches!(call, GraphicsCall::ClearColor(_)))
    }

    pub fn rectangles(&self) -> usize {
        self.count(|call| matches!(call, GraphicsCall::Rectangle { .. }))
    }

    pub fn circle_arcs(&self) -> usize {
        self.count(|call| matches!(call, GraphicsCall::CircleArc { .. }))
    }

    fn count(&self, pred: impl Fn(&GraphicsCall) -> bool) -> usize {
        self.calls.iter().filter(|call| pred(call)).count()
    }
}

impl Graphics for RecordingGraphics {
    fn draw_begin(&mut self, viewport: Viewport) -> Context {
        self.calls.push(GraphicsCall::DrawBegin(viewport));
        Context::new(viewport)
    }

    fn draw_end(&mut self) {
        self.calls.push(GraphicsCall::DrawEnd);
    }

    fn clear_color(&mut self, color: Color) {
        self.calls.push(GraphicsCall::ClearColor(color));
    }

    fn rectangle(&mut self, color: Color, rect: [f64; 4], transform: Transform) {
        self.calls.push(GraphicsCall::Rectangle {
            color,
            rect,
            transform,
        });
    }

    fn circle_arc(
        &mut self,
        color: Color,
        radius: f64,
        start: f64,
        end: f64,
        rect: [f64; 4],
        transform: Transform,
    ) {
        self.calls.push(GraphicsCall::CircleArc {
            color,
            radius,
            start,
            end,
            rect,
            transform,
        });
    }
}
