use std::time::Instant;

use crate::canvas::Canvas;
use crate::core::{App, Command, ShellCtx};
use crate::error::ShellError;
use crate::input::{Dispatch, InputEvent, InputState};
use crate::time::{TickClock, TickSchedule};
use crate::window::host::WindowHost;

/// Display lifecycle.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DisplayState {
    /// Window exists but is hidden; no ticks.
    Created,
    /// Window visible, scheduler armed, callbacks flowing.
    Running,
    /// Scheduler cancelled and window released. Terminal.
    Stopped,
}

/// Platform-independent half of the display.
///
/// Sequences the tick/repaint cycle, dispatches input presses and applies the
/// commands callbacks buffer in their `ShellCtx`. Every window operation goes
/// through a [`WindowHost`].
pub(crate) struct Driver<A> {
    app: A,
    fps: u32,
    schedule: TickSchedule,
    clock: TickClock,
    input: InputState,
    state: DisplayState,
    commands: Vec<Command>,
}

impl<A: App> Driver<A> {
    pub(crate) fn new(app: A, fps: u32) -> Self {
        Self {
            app,
            fps,
            schedule: TickSchedule::from_fps(fps),
            clock: TickClock::new(Instant::now()),
            input: InputState::default(),
            state: DisplayState::Created,
            commands: Vec::new(),
        }
    }

    pub(crate) fn state(&self) -> DisplayState {
        self.state
    }

    pub(crate) fn fps(&self) -> u32 {
        self.fps
    }

    pub(crate) fn app(&self) -> &A {
        &self.app
    }

    pub(crate) fn app_mut(&mut self) -> &mut A {
        &mut self.app
    }

    pub(crate) fn into_app(self) -> A {
        self.app
    }

    pub(crate) fn input(&self) -> &InputState {
        &self.input
    }

    pub(crate) fn ticks(&self) -> u64 {
        self.clock.ticks()
    }

    /// Deadline the event loop should sleep until, `None` when no tick is pending.
    pub(crate) fn next_deadline(&self) -> Option<Instant> {
        self.schedule.next_deadline()
    }

    /// `Created -> Running`: show, arm the scheduler, then request focus.
    pub(crate) fn start(&mut self, host: &mut dyn WindowHost, now: Instant) -> Result<(), ShellError> {
        if self.state != DisplayState::Created {
            return Err(ShellError::AlreadyStarted);
        }

        host.show();
        self.schedule.arm(now);
        self.clock.reset(now);
        self.state = DisplayState::Running;
        host.request_focus();

        log::debug!(
            "display started: {} fps, tick every {:?}",
            self.fps,
            self.schedule.interval()
        );
        Ok(())
    }

    /// Runs the due firing, if any: `on_tick`, then one repaint request.
    ///
    /// Returns `true` when a tick ran.
    pub(crate) fn poll(&mut self, host: &mut dyn WindowHost, now: Instant) -> bool {
        if self.state != DisplayState::Running || !self.schedule.poll(now) {
            return false;
        }

        let time = self.clock.tick(now);
        log::trace!("tick {} (dt {:.4}s)", time.index, time.dt);
        {
            let mut ctx = ShellCtx::new(&self.input, self.fps, host.canvas_size(), &mut self.commands);
            self.app.on_tick(time, &mut ctx);
        }

        host.repaint();
        self.apply_commands(host);
        true
    }

    /// Paints one frame. Ignored unless running.
    pub(crate) fn draw(&mut self, canvas: &mut Canvas) {
        if self.state != DisplayState::Running {
            return;
        }
        self.app.on_draw(canvas);
    }

    /// Updates input state and dispatches presses to the app while running.
    pub(crate) fn input_event(&mut self, host: &mut dyn WindowHost, ev: InputEvent) {
        let dispatch = self.input.apply_event(ev);
        if self.state != DisplayState::Running {
            return;
        }
        let Some(dispatch) = dispatch else {
            return;
        };

        {
            let mut ctx = ShellCtx::new(&self.input, self.fps, host.canvas_size(), &mut self.commands);
            match dispatch {
                Dispatch::Key(key) => self.app.on_key(key, &mut ctx),
                Dispatch::MouseDown { x, y, button } => self.app.on_mouse_down(x, y, button, &mut ctx),
            }
        }

        self.apply_commands(host);
    }

    /// Cancels the scheduler and enters `Stopped`. Returns `false` if already stopped.
    pub(crate) fn stop(&mut self) -> bool {
        self.schedule.disarm();
        self.commands.clear();
        if self.state == DisplayState::Stopped {
            return false;
        }

        log::debug!("display stopped after {} tick(s)", self.clock.ticks());
        self.state = DisplayState::Stopped;
        true
    }

    fn apply_commands(&mut self, host: &mut dyn WindowHost) {
        let mut commands = std::mem::take(&mut self.commands);
        for cmd in commands.drain(..) {
            match cmd {
                Command::Repaint => host.repaint(),
                Command::VanishCursor => host.set_cursor_hidden(true),
                Command::RestoreCursor => host.set_cursor_hidden(false),
                Command::RequestFocus => host.request_focus(),
                Command::Stop => {
                    self.stop();
                    break;
                }
            }
        }
        // Hand the allocation back for the next callback.
        commands.clear();
        self.commands = commands;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use super::*;
    use crate::input::{ButtonState, Key, KeyPress, KeyState, MouseButton};
    use crate::time::TickTime;

    type Log = Rc<RefCell<Vec<String>>>;

    /// Host that records calls and merges repaint requests like the platform does.
    struct FakeHost {
        log: Log,
        redraw_pending: bool,
        cursor_hidden: bool,
    }

    impl FakeHost {
        fn new(log: &Log) -> Self {
            Self {
                log: log.clone(),
                redraw_pending: false,
                cursor_hidden: false,
            }
        }

        /// Services the pending redraw, if any, as the platform's paint cycle would.
        fn paint_cycle<A: App>(&mut self, driver: &mut Driver<A>, canvas: &mut Canvas) {
            if std::mem::take(&mut self.redraw_pending) {
                driver.draw(canvas);
            }
        }
    }

    impl WindowHost for FakeHost {
        fn show(&mut self) {
            self.log.borrow_mut().push("show".into());
        }

        fn repaint(&mut self) {
            self.log.borrow_mut().push("repaint".into());
            self.redraw_pending = true;
        }

        fn request_focus(&mut self) {
            self.log.borrow_mut().push("focus".into());
        }

        fn set_cursor_hidden(&mut self, hidden: bool) {
            self.log.borrow_mut().push(format!("cursor_hidden={hidden}"));
            self.cursor_hidden = hidden;
        }

        fn canvas_size(&self) -> (u32, u32) {
            (800, 600)
        }
    }

    /// App that records its callbacks and runs scripted reactions.
    #[derive(Default)]
    struct Recorder {
        log: Log,
        stop_after_ticks: Option<u64>,
        hide_cursor_on_key: bool,
        draws: u32,
        keys: Vec<KeyPress>,
        clicks: Vec<(i32, i32, MouseButton)>,
        tick_indices: Vec<u64>,
    }

    impl Recorder {
        fn new(log: &Log) -> Self {
            Self { log: log.clone(), ..Self::default() }
        }
    }

    impl App for Recorder {
        fn on_tick(&mut self, time: TickTime, ctx: &mut ShellCtx<'_>) {
            self.log.borrow_mut().push("tick".into());
            self.tick_indices.push(time.index);
            if self.stop_after_ticks == Some(time.index + 1) {
                ctx.stop();
            }
        }

        fn on_draw(&mut self, canvas: &mut Canvas) {
            self.log.borrow_mut().push("draw".into());
            self.draws += 1;
            canvas.clear(crate::canvas::Color::WHITE);
        }

        fn on_key(&mut self, key: KeyPress, ctx: &mut ShellCtx<'_>) {
            self.keys.push(key);
            if self.hide_cursor_on_key {
                ctx.vanish_cursor();
                ctx.restore_cursor();
                ctx.vanish_cursor();
            }
        }

        fn on_mouse_down(&mut self, x: i32, y: i32, button: MouseButton, _ctx: &mut ShellCtx<'_>) {
            self.clicks.push((x, y, button));
        }
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn started(fps: u32) -> (Log, FakeHost, Driver<Recorder>, Instant) {
        let log = Log::default();
        let mut host = FakeHost::new(&log);
        let mut driver = Driver::new(Recorder::new(&log), fps);
        let t0 = Instant::now();
        driver.start(&mut host, t0).unwrap();
        log.borrow_mut().clear();
        (log, host, driver, t0)
    }

    fn press(key: Key) -> InputEvent {
        InputEvent::Key { key, state: KeyState::Pressed, code: 7, repeat: false }
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    #[test]
    fn start_shows_then_focuses() {
        let log = Log::default();
        let mut host = FakeHost::new(&log);
        let mut driver = Driver::new(Recorder::new(&log), 60);

        assert_eq!(driver.state(), DisplayState::Created);
        assert_eq!(driver.next_deadline(), None);

        let t0 = Instant::now();
        driver.start(&mut host, t0).unwrap();

        assert_eq!(*log.borrow(), ["show", "focus"]);
        assert_eq!(driver.state(), DisplayState::Running);
        assert_eq!(driver.next_deadline(), Some(t0 + ms(16)));
    }

    #[test]
    fn second_start_is_rejected() {
        let (_log, mut host, mut driver, t0) = started(60);
        assert_eq!(driver.start(&mut host, t0), Err(ShellError::AlreadyStarted));
    }

    #[test]
    fn no_ticks_before_start() {
        let log = Log::default();
        let mut host = FakeHost::new(&log);
        let mut driver = Driver::new(Recorder::new(&log), 60);

        assert!(!driver.poll(&mut host, Instant::now() + ms(500)));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn start_after_stop_is_rejected() {
        let log = Log::default();
        let mut host = FakeHost::new(&log);
        let mut driver = Driver::new(Recorder::new(&log), 60);

        assert!(driver.stop());
        assert!(!driver.stop());
        assert!(driver.start(&mut host, Instant::now()).is_err());
        assert!(log.borrow().is_empty());
    }

    // ── tick cycle ────────────────────────────────────────────────────────

    #[test]
    fn each_firing_ticks_before_repaint() {
        let (log, mut host, mut driver, t0) = started(30);

        for n in 1..=5u64 {
            assert!(driver.poll(&mut host, t0 + ms(33 * n)));
        }

        let expected: Vec<String> = std::iter::repeat(["tick", "repaint"])
            .take(5)
            .flatten()
            .map(String::from)
            .collect();
        assert_eq!(*log.borrow(), expected);
        assert_eq!(driver.app().tick_indices, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn poll_before_deadline_does_nothing() {
        let (log, mut host, mut driver, t0) = started(30);

        assert!(!driver.poll(&mut host, t0 + ms(32)));
        assert!(log.borrow().is_empty());
        assert!(driver.poll(&mut host, t0 + ms(33)));
    }

    #[test]
    fn tick_can_stop_the_display() {
        let (log, mut host, mut driver, t0) = started(10);
        driver.app_mut().stop_after_ticks = Some(2);

        assert!(driver.poll(&mut host, t0 + ms(100)));
        assert!(driver.poll(&mut host, t0 + ms(200)));
        assert_eq!(driver.state(), DisplayState::Stopped);

        // The stopping firing still issued its repaint; nothing after that.
        assert!(!driver.poll(&mut host, t0 + ms(300)));
        assert_eq!(*log.borrow(), ["tick", "repaint", "tick", "repaint"]);
        assert_eq!(driver.next_deadline(), None);
    }

    // ── draw ──────────────────────────────────────────────────────────────

    #[test]
    fn repaint_requests_coalesce_into_one_draw() {
        let (_log, mut host, mut driver, t0) = started(100);
        let mut canvas = Canvas::new(4, 4);

        // Three firings land before the platform gets to paint.
        for n in 1..=3u64 {
            driver.poll(&mut host, t0 + ms(10 * n));
        }
        host.paint_cycle(&mut driver, &mut canvas);
        host.paint_cycle(&mut driver, &mut canvas);

        assert_eq!(driver.app().draws, 1);
        assert_eq!(canvas.pixel(0, 0), Some(crate::canvas::Color::WHITE));
    }

    #[test]
    fn every_serviced_request_draws_once() {
        let (_log, mut host, mut driver, t0) = started(100);
        let mut canvas = Canvas::new(1, 1);

        for n in 1..=4u64 {
            driver.poll(&mut host, t0 + ms(10 * n));
            host.paint_cycle(&mut driver, &mut canvas);
        }
        assert_eq!(driver.app().draws, 4);
    }

    #[test]
    fn draw_is_ignored_unless_running() {
        let log = Log::default();
        let mut driver = Driver::new(Recorder::new(&log), 60);
        let mut canvas = Canvas::new(1, 1);

        driver.draw(&mut canvas);
        driver.stop();
        driver.draw(&mut canvas);

        assert_eq!(driver.app().draws, 0);
    }

    // ── input ─────────────────────────────────────────────────────────────

    #[test]
    fn key_presses_reach_the_app_releases_do_not() {
        let (_log, mut host, mut driver, _t0) = started(60);

        driver.input_event(&mut host, press(Key::Space));
        driver.input_event(
            &mut host,
            InputEvent::Key { key: Key::Space, state: KeyState::Released, code: 7, repeat: false },
        );

        assert_eq!(driver.app().keys, [KeyPress { key: Key::Space, code: 7, repeat: false }]);
        assert!(!driver.input().key_down(Key::Space));
    }

    #[test]
    fn mouse_presses_carry_canvas_coordinates() {
        let (_log, mut host, mut driver, _t0) = started(60);

        driver.input_event(&mut host, InputEvent::PointerMoved { x: 12.9, y: 300.0 });
        driver.input_event(
            &mut host,
            InputEvent::PointerButton { button: MouseButton::Left, state: ButtonState::Pressed },
        );
        driver.input_event(
            &mut host,
            InputEvent::PointerButton { button: MouseButton::Left, state: ButtonState::Released },
        );

        assert_eq!(driver.app().clicks, [(12, 300, MouseButton::Left)]);
    }

    #[test]
    fn input_before_start_only_updates_state() {
        let log = Log::default();
        let mut host = FakeHost::new(&log);
        let mut driver = Driver::new(Recorder::new(&log), 60);

        driver.input_event(&mut host, press(Key::A));

        assert!(driver.app().keys.is_empty());
        assert!(driver.input().key_down(Key::A));
    }

    #[test]
    fn cursor_commands_apply_in_order() {
        let (log, mut host, mut driver, _t0) = started(60);
        driver.app_mut().hide_cursor_on_key = true;

        driver.input_event(&mut host, press(Key::H));

        assert_eq!(
            *log.borrow(),
            ["cursor_hidden=true", "cursor_hidden=false", "cursor_hidden=true"]
        );
        assert!(host.cursor_hidden);
    }

    #[test]
    fn into_app_returns_final_state() {
        let (_log, mut host, mut driver, t0) = started(60);
        driver.poll(&mut host, t0 + ms(16));

        assert_eq!(driver.ticks(), 1);
        assert_eq!(driver.into_app().tick_indices, [0]);
    }
}
