use std::collections::VecDeque;
use std::time::{Duration, Instant};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Fullscreen, Window as NativeWindow, WindowId};

use crate::events::{Event, ResizeArgs};
use crate::input::{Button, Key, MouseButton};

use super::{Size, Window, WindowError, WindowSettings};

/// Slice length for one startup pump while waiting for window creation.
const CREATE_SLICE: Duration = Duration::from_millis(10);
const CREATE_ATTEMPTS: u32 = 100;

/// A native window driven by pumping a `winit` event loop.
///
/// Instead of handing control to `winit`, the window pumps the platform loop
/// in bounded slices from inside [`Window::poll_event`] and the wait calls,
/// queueing translated events in between. That keeps the caller in charge of
/// the loop, which is what the cadence layer in [`crate::events`] needs.
///
/// Platform loops are process-global; construct at most one `WinitWindow`
/// per process, on the main thread.
pub struct WinitWindow {
    event_loop: EventLoop<()>,
    pump: PumpState,
    exited: bool,
    title: String,
}

impl WinitWindow {
    /// Opens the native window described by `settings`.
    ///
    /// Pumps the platform loop until the window exists; fails if the loop
    /// cannot start, creation is refused, or no window is delivered (as on a
    /// headless host).
    pub fn new(settings: WindowSettings) -> Result<Self, WindowError> {
        settings.validate()?;
        let event_loop = EventLoop::new()?;
        let title = settings.title.clone();

        let mut window = Self {
            event_loop,
            pump: PumpState::new(settings),
            exited: false,
            title,
        };
        window.wait_for_creation()?;

        log::info!(
            "opened window \"{}\" at {:?} logical points",
            window.title,
            window.size()
        );
        Ok(window)
    }

    fn wait_for_creation(&mut self) -> Result<(), WindowError> {
        for _ in 0..CREATE_ATTEMPTS {
            self.pump(Some(CREATE_SLICE));
            if let Some(err) = self.pump.creation_error.take() {
                return Err(err);
            }
            if self.pump.window.is_some() {
                return Ok(());
            }
            if self.exited {
                break;
            }
        }
        Err(WindowError::NotCreated)
    }

    /// Runs the platform loop for at most `timeout` (`None` blocks until
    /// events arrive), translating anything received into the queue.
    fn pump(&mut self, timeout: Option<Duration>) {
        if self.exited {
            self.pump.should_close = true;
            return;
        }

        let status = self.event_loop.pump_app_events(timeout, &mut self.pump);

        if let PumpStatus::Exit(code) = status {
            // The loop cannot be pumped again after exiting.
            log::debug!("native event loop exited with code {code}");
            self.exited = true;
            self.pump.should_close = true;
        }
    }
}

impl Window for WinitWindow {
    fn poll_event(&mut self) -> Option<Event> {
        if self.pump.queue.is_empty() {
            self.pump(Some(Duration::ZERO));
        }
        self.pump.queue.pop_front()
    }

    fn wait_event(&mut self) -> Event {
        loop {
            if let Some(event) = self.pump.queue.pop_front() {
                return event;
            }
            if self.pump.should_close {
                return Event::Close;
            }
            self.pump(None);
        }
    }

    fn wait_event_timeout(&mut self, timeout: Duration) -> Option<Event> {
        let deadline = Instant::now() + timeout;
        loop {
            if let Some(event) = self.pump.queue.pop_front() {
                return Some(event);
            }
            if self.pump.should_close {
                return None;
            }
            let now = Instant::now();
            if now >= deadline {
                return None;
            }
            self.pump(Some(deadline - now));
        }
    }

    fn swap_buffers(&mut self) {
        // Presentation itself belongs to whichever backend owns the surface;
        // the window forwards the pre-present notification so compositors
        // can schedule around it.
        if let Some(window) = &self.pump.window {
            window.pre_present_notify();
        }
    }

    fn should_close(&self) -> bool {
        self.pump.should_close
    }

    fn set_should_close(&mut self, value: bool) {
        self.pump.should_close = value;
    }

    fn size(&self) -> Size {
        match &self.pump.window {
            Some(window) => surface_sizes(window).0,
            None => self.pump.settings.size,
        }
    }

    fn draw_size(&self) -> [u32; 2] {
        match &self.pump.window {
            Some(window) => surface_sizes(window).1,
            None => {
                let size = self.pump.settings.size;
                [size.width as u32, size.height as u32]
            }
        }
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
        if let Some(window) = &self.pump.window {
            window.set_title(title);
        }
    }
}

/// `ApplicationHandler` half of the window: receives platform callbacks
/// during a pump and queues translated events.
struct PumpState {
    settings: WindowSettings,
    window: Option<NativeWindow>,
    queue: VecDeque<Event>,
    should_close: bool,
    creation_error: Option<WindowError>,
}

impl PumpState {
    fn new(settings: WindowSettings) -> Self {
        Self {
            settings,
            window: None,
            queue: VecDeque::new(),
            should_close: false,
            creation_error: None,
        }
    }

    fn queue_resize(&mut self) {
        if let Some(window) = &self.window {
            let (size, draw_size) = surface_sizes(window);
            self.queue.push_back(Event::Resize(ResizeArgs {
                window_size: [size.width, size.height],
                draw_size,
            }));
        }
    }
}

impl ApplicationHandler for PumpState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = NativeWindow::default_attributes()
            .with_title(self.settings.title.clone())
            .with_inner_size(LogicalSize::new(
                self.settings.size.width,
                self.settings.size.height,
            ))
            .with_fullscreen(self.settings.fullscreen.then(|| Fullscreen::Borderless(None)))
            .with_resizable(self.settings.resizable)
            .with_decorations(self.settings.decorated)
            .with_transparent(self.settings.transparent);

        match event_loop.create_window(attrs) {
            Ok(window) => self.window = Some(window),
            Err(err) => self.creation_error = Some(err.into()),
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.queue.push_back(Event::Close);
                if self.settings.automatic_close {
                    self.should_close = true;
                }
            }

            WindowEvent::Destroyed => {
                self.should_close = true;
            }

            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                self.queue_resize();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                // OS key repeat would show up as extra presses without a
                // matching release; only state transitions pass through.
                if event.repeat {
                    return;
                }

                let key = map_key(event.physical_key);
                match event.state {
                    ElementState::Pressed => {
                        if key == Key::Escape && self.settings.exit_on_esc {
                            self.should_close = true;
                        }
                        self.queue.push_back(Event::Press(Button::Keyboard(key)));
                    }
                    ElementState::Released => {
                        self.queue.push_back(Event::Release(Button::Keyboard(key)));
                    }
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let button = Button::Mouse(map_mouse_button(button));
                match state {
                    ElementState::Pressed => self.queue.push_back(Event::Press(button)),
                    ElementState::Released => self.queue.push_back(Event::Release(button)),
                }
            }

            _ => {}
        }
    }
}

fn surface_sizes(window: &NativeWindow) -> (Size, [u32; 2]) {
    let physical = window.inner_size();
    let logical = physical.to_logical::<f64>(window.scale_factor());
    (
        Size::new(logical.width, logical.height),
        [physical.width, physical.height],
    )
}

fn map_mouse_button(button: WinitMouseButton) -> MouseButton {
    match button {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}

fn map_key(pk: PhysicalKey) -> Key {
    match pk {
        PhysicalKey::Code(code) => match code {
            KeyCode::Escape => Key::Escape,
            KeyCode::Enter => Key::Enter,
            KeyCode::Tab => Key::Tab,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Space => Key::Space,

            KeyCode::Insert => Key::Insert,
            KeyCode::Delete => Key::Delete,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,

            KeyCode::ArrowUp => Key::ArrowUp,
            KeyCode::ArrowDown => Key::ArrowDown,
            KeyCode::ArrowLeft => Key::ArrowLeft,
            KeyCode::ArrowRight => Key::ArrowRight,

            KeyCode::ShiftLeft | KeyCode::ShiftRight => Key::Shift,
            KeyCode::ControlLeft | KeyCode::ControlRight => Key::Control,
            KeyCode::AltLeft | KeyCode::AltRight => Key::Alt,
            KeyCode::SuperLeft | KeyCode::SuperRight => Key::Meta,

            KeyCode::KeyA => Key::A,
            KeyCode::KeyB => Key::B,
            KeyCode::KeyC => Key::C,
            KeyCode::KeyD => Key::D,
            KeyCode::KeyE => Key::E,
            KeyCode::KeyF => Key::F,
            KeyCode::KeyG => Key::G,
            KeyCode::KeyH => Key::H,
            KeyCode::KeyI => Key::I,
            KeyCode::KeyJ => Key::J,
            KeyCode::KeyK => Key::K,
            KeyCode::KeyL => Key::L,
            KeyCode::KeyM => Key::M,
            KeyCode::KeyN => Key::N,
            KeyCode::KeyO => Key::O,
            KeyCode::KeyP => Key::P,
            KeyCode::KeyQ => Key::Q,
            KeyCode::KeyR => Key::R,
            KeyCode::KeyS => Key::S,
            KeyCode::KeyT => Key::T,
            KeyCode::KeyU => Key::U,
            KeyCode::KeyV => Key::V,
            KeyCode::KeyW => Key::W,
            KeyCode::KeyX => Key::X,
            KeyCode::KeyY => Key::Y,
            KeyCode::KeyZ => Key::Z,

            KeyCode::Digit0 => Key::Digit0,
            KeyCode::Digit1 => Key::Digit1,
            KeyCode::Digit2 => Key::Digit2,
            KeyCode::Digit3 => Key::Digit3,
            KeyCode::Digit4 => Key::Digit4,
            KeyCode::Digit5 => Key::Digit5,
            KeyCode::Digit6 => Key::Digit6,
            KeyCode::Digit7 => Key::Digit7,
            KeyCode::Digit8 => Key::Digit8,
            KeyCode::Digit9 => Key::Digit9,

            KeyCode::F1 => Key::F1,
            KeyCode::F2 => Key::F2,
            KeyCode::F3 => Key::F3,
            KeyCode::F4 => Key::F4,
            KeyCode::F5 => Key::F5,
            KeyCode::F6 => Key::F6,
            KeyCode::F7 => Key::F7,
            KeyCode::F8 => Key::F8,
            KeyCode::F9 => Key::F9,
            KeyCode::F10 => Key::F10,
            KeyCode::F11 => Key::F11,
            KeyCode::F12 => Key::F12,

            other => Key::Unknown(other as u32),
        },

        // NativeKeyCode has no stable u32; report "unknown" without one.
        PhysicalKey::Unidentified(_) => Key::Unknown(0),
    }
}
