use std::time::{Duration, Instant};

use crate::time::DeltaClock;
use crate::window::Window;

use super::{Event, EventSettings, RenderArgs, UpdateArgs};

/// Upper bound on consecutive input events returned while a tick is overdue.
///
/// Pending input always outranks a due tick, but a platform flooding the
/// queue must not be able to hold off updates and renders forever.
const MAX_INPUT_BURST: u32 = 128;

/// Retry pause while an uncapped render cadence meets a degenerate surface.
const ZERO_SIZE_BACKOFF: Duration = Duration::from_millis(10);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Tick {
    Update,
    Render,
}

impl Tick {
    fn other(self) -> Self {
        match self {
            Tick::Update => Tick::Render,
            Tick::Render => Tick::Update,
        }
    }
}

/// A tick rate reduced to what scheduling needs.
#[derive(Debug, Copy, Clone)]
enum Cadence {
    /// `Some(0)`: this tick kind never fires.
    Disabled,
    /// `None`: due on every call.
    Uncapped,
    Period(Duration),
}

impl Cadence {
    fn from_rate(rate: Option<u64>) -> Self {
        match rate {
            None => Cadence::Uncapped,
            Some(0) => Cadence::Disabled,
            Some(rate) => Cadence::Period(Duration::from_secs_f64(1.0 / rate as f64)),
        }
    }
}

/// Pull-based event loop: cadence over a [`Window`] event source.
///
/// `next()` interleaves pending native input with update and render ticks at
/// the configured rates, emitting at most one event per call. It returns
/// `None` once the window is done, and keeps returning `None` from then on.
///
/// The loop borrows the window per call and owns no platform resources, so a
/// scripted fake window is enough to exercise it.
#[derive(Debug)]
pub struct Events {
    settings: EventSettings,
    update_cadence: Cadence,
    render_cadence: Cadence,
    update_clock: DeltaClock,
    next_update: Option<Instant>,
    next_render: Option<Instant>,
    last_tick: Tick,
    swap_pending: bool,
    render_pending: bool,
    input_burst: u32,
    finished: bool,
}

impl Events {
    pub fn new(settings: EventSettings) -> Self {
        let update_cadence = Cadence::from_rate(settings.ups);
        let render_cadence = Cadence::from_rate(settings.max_fps);
        let now = Instant::now();

        Self {
            settings,
            update_cadence,
            render_cadence,
            update_clock: DeltaClock::new(),
            // First update waits a full period; the first frame paints
            // immediately.
            next_update: match update_cadence {
                Cadence::Period(period) => Some(now + period),
                _ => None,
            },
            next_render: match render_cadence {
                Cadence::Period(_) => Some(now),
                _ => None,
            },
            last_tick: Tick::Update,
            swap_pending: false,
            render_pending: true,
            input_burst: 0,
            finished: false,
        }
    }

    /// Produces the next event, blocking until one is due.
    ///
    /// Pending input is drained ahead of due ticks (bounded by
    /// `MAX_INPUT_BURST`), update and render are mutually exclusive per
    /// call, and a consumed render is presented at the start of the
    /// following call when `swap_buffers` is on.
    pub fn next<W>(&mut self, window: &mut W) -> Option<Event>
    where
        W: Window + ?Sized,
    {
        if self.finished {
            return None;
        }

        self.flush_swap(window);

        if self.settings.lazy {
            return self.next_lazy(window);
        }

        loop {
            let now = Instant::now();
            let due = self.due_tick(now);

            // Input first; the burst bound keeps a flood from starving an
            // overdue tick. Only draining that holds off a due tick counts,
            // so idle traffic leaves the allowance whole.
            if due.is_none() || self.input_burst < MAX_INPUT_BURST {
                if let Some(event) = window.poll_event() {
                    self.input_burst = match due {
                        Some(_) => self.input_burst.saturating_add(1),
                        None => 0,
                    };
                    return Some(event);
                }
            }

            // Only after the queue is drained does close end the stream, so
            // a queued `Close` event still reaches the consumer.
            if window.should_close() {
                self.finished = true;
                return None;
            }

            let Some(tick) = due else {
                match self.idle_event(window) {
                    IdleOutcome::Event(event) => return Some(event),
                    IdleOutcome::Recheck => continue,
                }
            };

            self.input_burst = 0;
            self.last_tick = tick;

            match tick {
                Tick::Update => {
                    let dt = self.update_clock.tick();
                    self.schedule_update();
                    return Some(Event::Update(UpdateArgs { dt }));
                }
                Tick::Render => {
                    let size = window.size();
                    self.schedule_render();

                    let args = RenderArgs {
                        ext_dt: self.update_clock.since_tick(),
                        window_size: [size.width, size.height],
                        draw_size: window.draw_size(),
                    };
                    // Minimized windows report a degenerate size; a frame
                    // whose viewport cannot be drawn into is dropped and
                    // retried later.
                    if !args.viewport().is_valid() {
                        if matches!(self.render_cadence, Cadence::Uncapped) {
                            if let Some(event) = window.wait_event_timeout(ZERO_SIZE_BACKOFF) {
                                self.input_burst = self.input_burst.saturating_add(1);
                                return Some(event);
                            }
                        }
                        continue;
                    }

                    self.swap_pending = true;
                    return Some(Event::Render(args));
                }
            }
        }
    }

    fn next_lazy<W>(&mut self, window: &mut W) -> Option<Event>
    where
        W: Window + ?Sized,
    {
        if let Some(event) = window.poll_event() {
            self.render_pending = true;
            return Some(event);
        }

        if window.should_close() {
            self.finished = true;
            return None;
        }

        if self.render_pending {
            let size = window.size();
            let args = RenderArgs {
                ext_dt: self.update_clock.since_tick(),
                window_size: [size.width, size.height],
                draw_size: window.draw_size(),
            };
            if args.viewport().is_valid() {
                self.render_pending = false;
                self.swap_pending = true;
                return Some(Event::Render(args));
            }
            // Keep the paint owed until the surface comes back; restoring
            // the window queues input that wakes the wait below.
        }

        let event = window.wait_event();
        self.render_pending = true;
        Some(event)
    }

    fn flush_swap<W>(&mut self, window: &mut W)
    where
        W: Window + ?Sized,
    {
        if !self.swap_pending {
            return;
        }
        self.swap_pending = false;
        if self.settings.swap_buffers && !window.should_close() {
            window.swap_buffers();
        }
    }

    fn due_tick(&self, now: Instant) -> Option<Tick> {
        let update = self.update_due(now);
        let render = self.render_due(now);

        match (update, render) {
            (false, false) => None,
            (true, false) => Some(Tick::Update),
            (false, true) => Some(Tick::Render),
            (true, true) => match (self.next_update, self.next_render) {
                // Both overdue: the earlier deadline wins, simultaneous
                // deadlines alternate so neither kind starves.
                (Some(update_at), Some(render_at)) if update_at < render_at => Some(Tick::Update),
                (Some(update_at), Some(render_at)) if render_at < update_at => Some(Tick::Render),
                _ => Some(self.last_tick.other()),
            },
        }
    }

    fn update_due(&self, now: Instant) -> bool {
        match self.update_cadence {
            Cadence::Disabled => false,
            Cadence::Uncapped => true,
            Cadence::Period(_) => self.next_update.is_some_and(|at| at <= now),
        }
    }

    fn render_due(&self, now: Instant) -> bool {
        match self.render_cadence {
            Cadence::Disabled => false,
            Cadence::Uncapped => true,
            Cadence::Period(_) => self.next_render.is_some_and(|at| at <= now),
        }
    }

    fn schedule_update(&mut self) {
        if let Cadence::Period(period) = self.update_cadence {
            self.next_update = Some(Instant::now() + period);
        }
    }

    fn schedule_render(&mut self) {
        if let Cadence::Period(period) = self.render_cadence {
            self.next_render = Some(Instant::now() + period);
        }
    }

    /// Earliest scheduled deadline, if any cadence is periodic.
    fn wait_deadline(&self) -> Option<Instant> {
        let update = match self.update_cadence {
            Cadence::Period(_) => self.next_update,
            _ => None,
        };
        let render = match self.render_cadence {
            Cadence::Period(_) => self.next_render,
            _ => None,
        };
        match (update, render) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            (None, None) => None,
        }
    }

    /// Nothing due: sleep until the earliest deadline, waking early for
    /// input.
    fn idle_event<W>(&mut self, window: &mut W) -> IdleOutcome
    where
        W: Window + ?Sized,
    {
        match self.wait_deadline() {
            Some(deadline) => {
                let timeout = deadline.saturating_duration_since(Instant::now());
                match window.wait_event_timeout(timeout) {
                    Some(event) => {
                        // Arrived while nothing was due, which breaks any
                        // overdue-drain chain.
                        self.input_burst = 0;
                        IdleOutcome::Event(event)
                    }
                    // Timeout or spurious wake; the loop re-checks what is
                    // due.
                    None => IdleOutcome::Recheck,
                }
            }
            None => {
                // No cadence at all: only input or close can produce
                // anything, so block for it.
                let event = window.wait_event();
                self.input_burst = 0;
                IdleOutcome::Event(event)
            }
        }
    }
}

enum IdleOutcome {
    Event(Event),
    Recheck,
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::thread;

    use super::*;
    use crate::input::{Button, InputState, Key};
    use crate::window::Size;

    /// Scripted window: hands out queued events, then reports timeouts once
    /// the script runs dry. A blocking wait on a dry script closes the
    /// window instead, so tests terminate.
    struct FakeWindow {
        script: VecDeque<Event>,
        should_close: bool,
        size: Size,
        draw_size: [u32; 2],
        swaps: u32,
        timed_waits: u32,
        title: String,
    }

    impl FakeWindow {
        fn new() -> Self {
            Self {
                script: VecDeque::new(),
                should_close: false,
                size: Size::new(100.0, 100.0),
                draw_size: [200, 200],
                swaps: 0,
                timed_waits: 0,
                title: String::new(),
            }
        }

        fn scripted(events: impl IntoIterator<Item = Event>) -> Self {
            let mut window = Self::new();
            window.script.extend(events);
            window
        }
    }

    impl Window for FakeWindow {
        fn poll_event(&mut self) -> Option<Event> {
            self.script.pop_front()
        }

        fn wait_event(&mut self) -> Event {
            match self.script.pop_front() {
                Some(event) => event,
                None => {
                    self.should_close = true;
                    Event::Close
                }
            }
        }

        fn wait_event_timeout(&mut self, timeout: Duration) -> Option<Event> {
            self.timed_waits += 1;
            if let Some(event) = self.script.pop_front() {
                return Some(event);
            }
            // Nap briefly so waiting consumes real time without stalling
            // the suite.
            thread::sleep(timeout.min(Duration::from_millis(2)));
            None
        }

        fn swap_buffers(&mut self) {
            self.swaps += 1;
        }

        fn should_close(&self) -> bool {
            self.should_close
        }

        fn set_should_close(&mut self, value: bool) {
            self.should_close = value;
        }

        fn size(&self) -> Size {
            self.size
        }

        fn draw_size(&self) -> [u32; 2] {
            self.draw_size
        }

        fn title(&self) -> String {
            self.title.clone()
        }

        fn set_title(&mut self, title: &str) {
            self.title = title.to_string();
        }
    }

    fn key(k: Key) -> Button {
        Button::Keyboard(k)
    }

    fn uncapped() -> EventSettings {
        EventSettings {
            max_fps: None,
            ups: None,
            ..EventSettings::default()
        }
    }

    fn only_updates(ups: u64) -> EventSettings {
        EventSettings {
            max_fps: Some(0),
            ups: Some(ups),
            ..EventSettings::default()
        }
    }

    fn only_renders() -> EventSettings {
        EventSettings {
            max_fps: None,
            ups: Some(0),
            ..EventSettings::default()
        }
    }

    // ── input ordering ────────────────────────────────────────────────────

    #[test]
    fn input_drains_in_order_before_ticks() {
        let mut window = FakeWindow::scripted([
            Event::Press(key(Key::A)),
            Event::Release(key(Key::A)),
            Event::Press(key(Key::B)),
        ]);
        let mut events = Events::new(uncapped());
        let mut held = InputState::new();

        let first = events.next(&mut window).unwrap();
        held.apply(&first);
        assert_eq!(first.press_args(), Some(key(Key::A)));
        assert!(held.is_held(key(Key::A)));
        assert_eq!(held.len(), 1);

        let second = events.next(&mut window).unwrap();
        held.apply(&second);
        assert_eq!(second.release_args(), Some(key(Key::A)));
        assert!(held.is_empty());

        let third = events.next(&mut window).unwrap();
        held.apply(&third);
        assert_eq!(third.press_args(), Some(key(Key::B)));
        assert!(held.is_held(key(Key::B)));
        assert!(!held.is_held(key(Key::A)));

        // Ticks follow once the queue is dry, even with both rates uncapped.
        let fourth = events.next(&mut window).unwrap();
        assert!(fourth.is_loop());
    }

    #[test]
    fn input_burst_is_bounded_by_a_due_tick() {
        let script = (0..200).map(|_| Event::Press(key(Key::A)));
        let mut window = FakeWindow::scripted(script);
        let mut events = Events::new(EventSettings {
            max_fps: Some(0),
            ups: None,
            ..EventSettings::default()
        });

        for i in 0..MAX_INPUT_BURST {
            let event = events.next(&mut window).unwrap();
            assert!(event.press_args().is_some(), "call {i} should be input");
        }

        // The overdue update preempts the flood exactly at the bound.
        let tick = events.next(&mut window).unwrap();
        assert!(tick.update_args().is_some());

        let resumed = events.next(&mut window).unwrap();
        assert!(resumed.press_args().is_some());
    }

    #[test]
    fn idle_input_does_not_count_toward_the_burst_bound() {
        let script = (0..MAX_INPUT_BURST).map(|_| Event::Press(key(Key::A)));
        let mut window = FakeWindow::scripted(script);
        let mut events = Events::new(only_updates(10));

        // Drained long before the first update is due.
        for _ in 0..MAX_INPUT_BURST {
            assert!(events.next(&mut window).unwrap().press_args().is_some());
        }

        thread::sleep(Duration::from_millis(120));
        window.script.push_back(Event::Press(key(Key::B)));

        // The pending press still wins the tie against the now-due update;
        // none of the earlier drain held off an overdue tick.
        let tied = events.next(&mut window).unwrap();
        assert_eq!(tied.press_args(), Some(key(Key::B)), "got {tied:?}");

        let tick = events.next(&mut window).unwrap();
        assert!(tick.update_args().is_some());
    }

    // ── cadence ───────────────────────────────────────────────────────────

    #[test]
    fn tick_kinds_alternate_when_both_uncapped() {
        let mut window = FakeWindow::new();
        let mut events = Events::new(uncapped());

        let mut kinds = Vec::new();
        for _ in 0..6 {
            let event = events.next(&mut window).unwrap();
            assert!(event.is_loop());
            if let Some(args) = event.update_args() {
                assert!(args.dt > 0.0);
                kinds.push("update");
            } else {
                kinds.push("render");
            }
        }
        assert_eq!(
            kinds,
            ["render", "update", "render", "update", "render", "update"]
        );
    }

    #[test]
    fn update_dt_tracks_wall_clock() {
        let mut window = FakeWindow::new();
        let mut events = Events::new(only_updates(100));

        let first = events.next(&mut window).unwrap().update_args().unwrap();
        assert!(first.dt >= 0.009, "dt = {}", first.dt);
        assert!(first.dt < 1.0, "dt = {}", first.dt);

        thread::sleep(Duration::from_millis(25));
        let second = events.next(&mut window).unwrap().update_args().unwrap();
        assert!(second.dt >= 0.024, "dt = {}", second.dt);
        assert!(second.dt < 1.0, "dt = {}", second.dt);
    }

    #[test]
    fn updates_wait_for_their_period() {
        let mut window = FakeWindow::new();
        let mut events = Events::new(only_updates(50));

        let start = Instant::now();
        let event = events.next(&mut window).unwrap();
        assert!(event.update_args().is_some());
        assert!(start.elapsed() >= Duration::from_millis(15));
        assert!(window.timed_waits > 0, "the loop should sleep, not spin");
    }

    #[test]
    fn zero_size_skips_renders_but_not_updates() {
        let mut window = FakeWindow::new();
        window.size = Size::new(0.0, 0.0);
        let mut events = Events::new(EventSettings {
            max_fps: Some(1000),
            ups: Some(500),
            ..EventSettings::default()
        });

        for _ in 0..10 {
            let event = events.next(&mut window).unwrap();
            assert!(
                event.update_args().is_some(),
                "minimized windows must not receive renders, got {event:?}"
            );
        }

        window.size = Size::new(100.0, 100.0);
        let rendered = (0..10).any(|_| {
            events
                .next(&mut window)
                .is_some_and(|event| event.render_args().is_some())
        });
        assert!(rendered, "renders resume once the surface is back");
    }

    // ── render args & presentation ────────────────────────────────────────

    #[test]
    fn render_args_carry_window_geometry() {
        let mut window = FakeWindow::new();
        let mut events = Events::new(only_renders());

        let args = events.next(&mut window).unwrap().render_args().unwrap();
        assert_eq!(args.window_size, [100.0, 100.0]);
        assert_eq!(args.draw_size, [200, 200]);
        assert_eq!(args.viewport().rect, [0, 0, 200, 200]);
        assert!(args.ext_dt >= 0.0);
    }

    #[test]
    fn renders_carry_only_valid_viewports() {
        let mut window = FakeWindow::new();
        window.size = Size::new(f64::NAN, 240.0);
        let mut events = Events::new(EventSettings {
            max_fps: Some(1000),
            ups: Some(500),
            ..EventSettings::default()
        });

        // A surface that cannot host a viewport gets no frames, only
        // updates.
        for _ in 0..10 {
            let event = events.next(&mut window).unwrap();
            assert!(event.update_args().is_some(), "got {event:?}");
        }

        window.size = Size::new(320.0, 240.0);
        let resumed = (0..10).find_map(|_| {
            let args = events.next(&mut window)?.render_args()?;
            Some(args.viewport())
        });
        let viewport = resumed.expect("renders resume once the surface is back");
        assert!(viewport.is_valid());
        assert_eq!(viewport.window_size, [320.0, 240.0]);
    }

    #[test]
    fn swap_follows_each_consumed_render() {
        let mut window = FakeWindow::new();
        let mut events = Events::new(only_renders());

        assert!(events.next(&mut window).unwrap().render_args().is_some());
        assert_eq!(window.swaps, 0, "present happens after the frame is drawn");

        assert!(events.next(&mut window).unwrap().render_args().is_some());
        assert_eq!(window.swaps, 1);

        events.next(&mut window).unwrap();
        assert_eq!(window.swaps, 2);
    }

    #[test]
    fn swap_disabled_never_presents() {
        let mut window = FakeWindow::new();
        let mut events = Events::new(EventSettings {
            swap_buffers: false,
            ..only_renders()
        });

        for _ in 0..3 {
            assert!(events.next(&mut window).unwrap().render_args().is_some());
        }
        assert_eq!(window.swaps, 0);
    }

    // ── end of stream ─────────────────────────────────────────────────────

    #[test]
    fn close_event_is_delivered_then_stream_ends() {
        let mut window = FakeWindow::scripted([Event::Close]);
        window.should_close = true;
        let mut events = Events::new(uncapped());

        assert!(events.next(&mut window).unwrap().is_close());
        assert_eq!(events.next(&mut window), None);
        assert_eq!(events.next(&mut window), None);
    }

    #[test]
    fn none_is_latched_even_if_window_reopens() {
        let mut window = FakeWindow::new();
        window.should_close = true;
        let mut events = Events::new(uncapped());

        assert_eq!(events.next(&mut window), None);

        window.set_should_close(false);
        assert_eq!(events.next(&mut window), None);
        assert_eq!(events.next(&mut window), None);
    }

    #[test]
    fn both_rates_disabled_blocks_for_input() {
        let mut window = FakeWindow::scripted([Event::Press(key(Key::A))]);
        let mut events = Events::new(EventSettings {
            max_fps: Some(0),
            ups: Some(0),
            ..EventSettings::default()
        });

        assert!(events.next(&mut window).unwrap().press_args().is_some());
        // The dry fake closes on a blocking wait.
        assert!(events.next(&mut window).unwrap().is_close());
        assert_eq!(events.next(&mut window), None);
    }

    // ── lazy mode ─────────────────────────────────────────────────────────

    #[test]
    fn lazy_renders_once_per_input_batch() {
        let mut window = FakeWindow::scripted([Event::Press(key(Key::A))]);
        let mut events = Events::new(EventSettings {
            lazy: true,
            ..EventSettings::default()
        });

        let mut seen = Vec::new();
        while let Some(event) = events.next(&mut window) {
            assert!(event.update_args().is_none(), "lazy mode never updates");
            seen.push(event);
        }

        let renders = seen.iter().filter(|e| e.render_args().is_some()).count();
        assert_eq!(renders, 1, "one paint per input batch, got {seen:?}");
        assert!(seen[0].press_args().is_some());
        assert!(seen.last().unwrap().is_close());
    }

    #[test]
    fn lazy_paints_initially_without_input() {
        let mut window = FakeWindow::new();
        let mut events = Events::new(EventSettings {
            lazy: true,
            ..EventSettings::default()
        });

        assert!(events.next(&mut window).unwrap().render_args().is_some());
        assert!(events.next(&mut window).unwrap().is_close());
        assert_eq!(events.next(&mut window), None);
    }
}
