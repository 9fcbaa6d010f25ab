use crate::coords::Viewport;
use crate::input::Button;

/// Render tick payload.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderArgs {
    /// Seconds since the last update tick, for extrapolated drawing.
    pub ext_dt: f64,

    /// Window size in logical points.
    pub window_size: [f64; 2],

    /// Drawable surface size in physical pixels.
    pub draw_size: [u32; 2],
}

impl RenderArgs {
    /// Full-window viewport for this frame.
    pub fn viewport(&self) -> Viewport {
        Viewport::from_window(self.window_size, self.draw_size)
    }
}

/// Update tick payload.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct UpdateArgs {
    /// Wall-clock seconds since the previous update tick.
    pub dt: f64,
}

/// Window geometry change payload.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ResizeArgs {
    pub window_size: [f64; 2],
    pub draw_size: [u32; 2],
}

/// One event out of the loop; exactly one variant per instance.
///
/// Consumers either match exhaustively or go through the `*_args`
/// accessors, which yield `Some` for exactly one variant.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Event {
    Press(Button),
    Release(Button),
    Render(RenderArgs),
    Update(UpdateArgs),
    Resize(ResizeArgs),
    Close,
}

impl Event {
    pub fn press_args(&self) -> Option<Button> {
        match self {
            Event::Press(button) => Some(*button),
            _ => None,
        }
    }

    pub fn release_args(&self) -> Option<Button> {
        match self {
            Event::Release(button) => Some(*button),
            _ => None,
        }
    }

    pub fn render_args(&self) -> Option<RenderArgs> {
        match self {
            Event::Render(args) => Some(*args),
            _ => None,
        }
    }

    pub fn update_args(&self) -> Option<UpdateArgs> {
        match self {
            Event::Update(args) => Some(*args),
            _ => None,
        }
    }

    pub fn resize_args(&self) -> Option<ResizeArgs> {
        match self {
            Event::Resize(args) => Some(*args),
            _ => None,
        }
    }

    pub fn is_close(&self) -> bool {
        matches!(self, Event::Close)
    }

    /// Whether the event came from the platform (as opposed to cadence).
    pub fn is_input(&self) -> bool {
        matches!(
            self,
            Event::Press(_) | Event::Release(_) | Event::Resize(_) | Event::Close
        )
    }

    /// Whether the event is a cadence tick.
    pub fn is_loop(&self) -> bool {
        matches!(self, Event::Render(_) | Event::Update(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Key, MouseButton};

    fn samples() -> Vec<Event> {
        vec![
            Event::Press(Button::Keyboard(Key::A)),
            Event::Release(Button::Mouse(MouseButton::Left)),
            Event::Render(RenderArgs {
                ext_dt: 0.002,
                window_size: [640.0, 480.0],
                draw_size: [1280, 960],
            }),
            Event::Update(UpdateArgs { dt: 0.008 }),
            Event::Resize(ResizeArgs {
                window_size: [800.0, 600.0],
                draw_size: [800, 600],
            }),
            Event::Close,
        ]
    }

    #[test]
    fn exactly_one_accessor_is_non_null_per_event() {
        for event in samples() {
            let hits = [
                event.press_args().is_some(),
                event.release_args().is_some(),
                event.render_args().is_some(),
                event.update_args().is_some(),
                event.resize_args().is_some(),
                event.is_close(),
            ]
            .iter()
            .filter(|hit| **hit)
            .count();
            assert_eq!(hits, 1, "event {event:?} matched {hits} accessors");
        }
    }

    #[test]
    fn accessors_return_their_payload() {
        let button = Button::Keyboard(Key::Space);
        assert_eq!(Event::Press(button).press_args(), Some(button));
        assert_eq!(Event::Release(button).release_args(), Some(button));
        assert_eq!(
            Event::Update(UpdateArgs { dt: 0.25 }).update_args(),
            Some(UpdateArgs { dt: 0.25 })
        );
        assert_eq!(Event::Press(button).update_args(), None);
        assert_eq!(Event::Close.press_args(), None);
    }

    #[test]
    fn input_and_loop_partition_the_event_set() {
        for event in samples() {
            assert_ne!(
                event.is_input(),
                event.is_loop(),
                "event {event:?} must be exactly one of input/loop"
            );
        }
    }

    #[test]
    fn render_args_viewport_covers_the_surface() {
        let args = RenderArgs {
            ext_dt: 0.0,
            window_size: [320.0, 240.0],
            draw_size: [640, 480],
        };
        let viewport = args.viewport();
        assert_eq!(viewport.rect, [0, 0, 640, 480]);
        assert_eq!(viewport.draw_size, [640, 480]);
        assert_eq!(viewport.window_size, [320.0, 240.0]);
    }
}
