use std::time::{Duration, Instant};

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::WindowId;

use crate::core::App;
use crate::error::ShellError;
use crate::input::platform::winit::translate_window_event;
use crate::input::InputState;
use crate::window::host::WindowHost;
use crate::window::native::NativeWindow;
use crate::window::{WindowConfig, WindowGeometry};

use super::config::DisplayConfig;
use super::driver::{DisplayState, Driver};
use super::handle::{DisplayHandle, ShellEvent};

/// Upper bound on event loop pumps spent waiting for the platform to resume.
const CREATE_PUMPS: u32 = 10;

/// Result of driving the event loop once.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DisplayStatus {
    Running,
    Stopped,
}

/// A window driven by a fixed-rate tick loop and an [`App`].
///
/// Construction creates the window hidden. [`start`](Self::start) shows it, arms
/// the tick scheduler and requests focus; [`run`](Self::run) additionally drives
/// the event loop on the calling thread until the window is closed or stopped.
///
/// Only one display can exist per process (winit allows a single event loop),
/// and it must be created on the main thread on platforms that require it.
///
/// ```rust,ignore
/// let display = Display::windowed(800, 600, "Game", 60, MyGame::default())?;
/// display.run()?;
/// ```
pub struct Display<A: App + 'static> {
    // Declared first so the window is released before the event loop.
    shell: Shell<A>,
    event_loop: EventLoop<ShellEvent>,
}

impl<A: App + 'static> Display<A> {
    /// Validates `config`, then creates the event loop and the hidden window.
    ///
    /// A rejected configuration never allocates a native resource.
    pub fn new(config: DisplayConfig, app: A) -> Result<Self, ShellError> {
        config.validate()?;

        let mut event_loop = EventLoop::<ShellEvent>::with_user_event()
            .build()
            .map_err(|e| ShellError::window(format!("failed to create event loop: {e}")))?;

        let mut shell = Shell::new(config, app);

        // Windows can only be created from inside the loop; pump until it resumes.
        for _ in 0..CREATE_PUMPS {
            let status = event_loop.pump_app_events(Some(Duration::from_millis(10)), &mut shell);
            if let Some(err) = shell.creation_error.take() {
                return Err(err);
            }
            if shell.window.is_some() {
                break;
            }
            if let PumpStatus::Exit(code) = status {
                return Err(ShellError::window(format!("event loop exited during creation ({code})")));
            }
        }

        if shell.window.is_none() {
            return Err(ShellError::window("platform never resumed the event loop"));
        }

        Ok(Self { shell, event_loop })
    }

    /// Fixed-size, decorated, non-resizable window centered on the primary monitor.
    pub fn windowed(width: u32, height: u32, title: impl Into<String>, fps: u32, app: A) -> Result<Self, ShellError> {
        Self::new(DisplayConfig::windowed(title, width, height, fps), app)
    }

    /// Borderless window covering the primary monitor.
    pub fn fullscreen(title: impl Into<String>, fps: u32, app: A) -> Result<Self, ShellError> {
        Self::new(DisplayConfig::fullscreen(title, fps), app)
    }

    /// Configured tick rate.
    pub fn fps(&self) -> u32 {
        self.shell.driver.fps()
    }

    pub fn config(&self) -> &WindowConfig {
        &self.shell.config
    }

    pub fn state(&self) -> DisplayState {
        self.shell.driver.state()
    }

    /// Resolved window geometry, `None` once the window is released.
    pub fn geometry(&self) -> Option<WindowGeometry> {
        self.shell.window.as_ref().map(NativeWindow::geometry)
    }

    /// Canvas size in physical pixels, `None` once the window is released.
    pub fn canvas_size(&self) -> Option<(u32, u32)> {
        self.shell.window.as_ref().map(|w| w.canvas_size())
    }

    pub fn input(&self) -> &InputState {
        self.shell.driver.input()
    }

    /// Number of ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.shell.driver.ticks()
    }

    pub fn app(&self) -> &A {
        self.shell.driver.app()
    }

    pub fn app_mut(&mut self) -> &mut A {
        self.shell.driver.app_mut()
    }

    /// Stops the display if needed and returns the application.
    pub fn into_app(mut self) -> A {
        self.shell.release();
        let Display { shell, .. } = self;
        shell.driver.into_app()
    }

    /// Handle for requesting repaints or a stop from other threads.
    pub fn handle(&self) -> DisplayHandle {
        DisplayHandle::new(self.event_loop.create_proxy())
    }

    /// Shows the window, arms the tick scheduler and requests focus. Does not block.
    ///
    /// Ticks fire while the event loop is driven by [`pump`](Self::pump) or
    /// [`run`](Self::run). May succeed at most once.
    pub fn start(&mut self) -> Result<(), ShellError> {
        self.shell.start(Instant::now())
    }

    /// Drives the event loop: dispatches pending events, due ticks and redraws.
    ///
    /// `Some(Duration::ZERO)` never blocks; `None` sleeps until the next event or
    /// tick deadline.
    pub fn pump(&mut self, timeout: Option<Duration>) -> DisplayStatus {
        if self.shell.driver.state() == DisplayState::Stopped {
            return DisplayStatus::Stopped;
        }

        match self.event_loop.pump_app_events(timeout, &mut self.shell) {
            PumpStatus::Exit(code) => {
                if code != 0 {
                    log::warn!("event loop exited with code {code}");
                    self.shell.exit_code = Some(code);
                }
                self.shell.release();
                DisplayStatus::Stopped
            }
            PumpStatus::Continue if self.shell.driver.state() == DisplayState::Stopped => {
                DisplayStatus::Stopped
            }
            PumpStatus::Continue => DisplayStatus::Running,
        }
    }

    /// Starts the display and drives it on the calling thread until the window is
    /// closed or a stop is requested.
    pub fn run(mut self) -> Result<(), ShellError> {
        self.start()?;
        while self.pump(None) == DisplayStatus::Running {}
        log::debug!("display finished after {} tick(s)", self.shell.driver.ticks());

        match self.shell.exit_code {
            Some(code) => Err(ShellError::EventLoop(format!("event loop exited with code {code}"))),
            None => Ok(()),
        }
    }

    /// Cancels the scheduler and releases the window. Idempotent.
    pub fn stop(&mut self) {
        self.shell.release();
    }
}

/// `ApplicationHandler` owning the native window and the driver.
struct Shell<A: App> {
    config: WindowConfig,
    window: Option<NativeWindow>,
    creation_error: Option<ShellError>,
    exit_code: Option<i32>,
    driver: Driver<A>,
}

impl<A: App> Shell<A> {
    fn new(config: DisplayConfig, app: A) -> Self {
        Self {
            config: config.window,
            window: None,
            creation_error: None,
            exit_code: None,
            driver: Driver::new(app, config.fps),
        }
    }

    fn start(&mut self, now: Instant) -> Result<(), ShellError> {
        if self.driver.state() != DisplayState::Created {
            return Err(ShellError::AlreadyStarted);
        }
        let window = self
            .window
            .as_mut()
            .ok_or_else(|| ShellError::window("window was released before start"))?;
        self.driver.start(window, now)
    }

    /// Stops the driver and drops the native window.
    fn release(&mut self) {
        self.driver.stop();
        if self.window.take().is_some() {
            log::debug!("window released");
        }
    }

    fn release_if_stopped(&mut self, event_loop: &ActiveEventLoop) {
        if self.driver.state() == DisplayState::Stopped {
            self.release();
            event_loop.exit();
        }
    }
}

impl<A: App> ApplicationHandler<ShellEvent> for Shell<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.driver.state() == DisplayState::Stopped {
            return;
        }

        match NativeWindow::create(event_loop, &self.config) {
            Ok(window) => self.window = Some(window),
            Err(e) => {
                log::error!("failed to create window: {e}");
                self.creation_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, event: ShellEvent) {
        match event {
            ShellEvent::Repaint => {
                if let Some(window) = self.window.as_mut() {
                    window.repaint();
                }
            }
            ShellEvent::Stop => {
                self.driver.stop();
                self.release_if_stopped(event_loop);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let Some(window) = self.window.as_mut() else {
            return;
        };
        if window.id() != window_id {
            return;
        }

        if let Some(ev) = translate_window_event(&event) {
            self.driver.input_event(window, ev);
        }

        match event {
            WindowEvent::CloseRequested => {
                log::debug!("close requested");
                self.driver.stop();
            }

            WindowEvent::RedrawRequested => {
                let driver = &mut self.driver;
                if let Err(e) = window.present(|canvas| driver.draw(canvas)) {
                    log::warn!("frame skipped: {e}");
                }
            }

            _ => {}
        }

        self.release_if_stopped(event_loop);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(window) = self.window.as_mut() {
            self.driver.poll(window, Instant::now());
        }
        self.release_if_stopped(event_loop);

        match self.driver.next_deadline() {
            Some(deadline) => event_loop.set_control_flow(ControlFlow::WaitUntil(deadline)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }
}
