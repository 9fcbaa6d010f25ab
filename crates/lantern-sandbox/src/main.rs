use std::f64::consts::TAU;

use anyhow::Context as _;
use lantern_engine::events::{Event, EventSettings, Events};
use lantern_engine::graphics::{self, Color, Graphics, RecordingGraphics};
use lantern_engine::input::{Button, InputState, Key};
use lantern_engine::logging::{LoggingConfig, init_logging};
use lantern_engine::window::{Window, WindowSettings, WinitWindow};
use rand::Rng;

/// One color channel drifting through `[0, 1]`.
struct ChannelWave {
    value: f64,
    step: f64,
    /// Probability that a tick moves the value at all.
    jitter: f64,
}

impl ChannelWave {
    fn new() -> Self {
        Self {
            value: 0.01,
            step: 0.005,
            jitter: 0.6,
        }
    }

    /// Advances the wave one tick and returns the new value.
    ///
    /// Movement is probabilistic so the three channels drift out of phase.
    /// The step reverses direction at the `[0, 1]` bounds.
    fn tick(&mut self, rng: &mut impl Rng) -> f64 {
        if rng.random::<f64>() < self.jitter {
            if self.value <= 0.0 || self.value >= 1.0 {
                self.step = -self.step;
            }
            self.value += self.step;
        }
        self.value
    }
}

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let settings = WindowSettings {
        exit_on_esc: true,
        ..WindowSettings::new("lantern sandbox", [360, 360])
    };
    let mut window = WinitWindow::new(settings).context("opening the sandbox window")?;

    let mut events = Events::new(EventSettings::default());
    let mut backend = RecordingGraphics::new();
    let mut held = InputState::new();
    let mut rng = rand::rng();

    let mut red = ChannelWave::new();
    let mut green = ChannelWave::new();
    let mut blue = ChannelWave::new();
    let mut rgb = [red.value, green.value, blue.value];
    let mut frames: u64 = 0;

    while let Some(event) = events.next(&mut window) {
        match event {
            Event::Press(button) => {
                if held.press(button) {
                    log::info!("pressed {button:?}, held: {:?}", held.held());
                    if button == Button::Keyboard(Key::Space) {
                        red = ChannelWave::new();
                        green = ChannelWave::new();
                        blue = ChannelWave::new();
                        log::info!("waves reset");
                    }
                }
            }
            Event::Release(button) => {
                if held.release(button) {
                    log::info!("released {button:?}, held: {:?}", held.held());
                }
            }
            Event::Update(_) => {
                rgb = [
                    red.tick(&mut rng),
                    green.tick(&mut rng),
                    blue.tick(&mut rng),
                ];
                window.set_title(&format!("{:.2} {:.2} {:.2}", rgb[0], rgb[1], rgb[2]));
            }
            Event::Render(args) => {
                let wash: Color = [rgb[0] as f32, rgb[1] as f32, rgb[2] as f32, 1.0];
                let ink: Color = [1.0 - wash[0], 1.0 - wash[1], 1.0 - wash[2], 1.0];

                graphics::draw(&mut backend, args.viewport(), |ctx, g| {
                    g.clear_color(wash);
                    graphics::circle_arc(
                        ink,
                        15.0,
                        0.0,
                        TAU,
                        [50.0, 50.0, 80.0, 80.0],
                        ctx.transform,
                        g,
                    );
                    graphics::rectangle(ink, [0.0, 0.0, 30.0, 30.0], ctx.transform, g);
                });

                frames += 1;
                if frames % 600 == 0 {
                    log::debug!("{frames} frames, {} calls this frame", backend.call_count());
                }
                // The recording backend only accumulates; drain it per frame.
                backend.clear_calls();
            }
            Event::Resize(args) => {
                log::info!("resized to {:?}", args.window_size);
            }
            Event::Close => {
                log::info!("close requested");
            }
        }
    }

    log::info!("event stream ended after {frames} frames");
    Ok(())
}
