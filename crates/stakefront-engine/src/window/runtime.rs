use std::rc::Rc;
use std::time::Instant;

use anyhow::{Context, Result};

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::coords::Viewport;
use crate::core::{App as CoreApp, AppControl, Host};
use crate::input::{HostEvent, Key, ScrollDelta};
use crate::time::{FrameClock, SystemClock};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "stakefront".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
        }
    }
}

/// Runtime context passed to the application.
///
/// Commands are buffered and applied after the current callback returns.
#[derive(Debug, Default)]
pub struct RuntimeCtx {
    commands: Vec<Command>,
}

impl RuntimeCtx {
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.commands.push(Command::SetTitle(title.into()));
    }

    pub fn exit(&mut self) {
        self.commands.push(Command::Exit);
    }

    /// Most recent title requested during this callback, if any.
    pub fn pending_title(&self) -> Option<&str> {
        self.commands.iter().rev().find_map(|c| match c {
            Command::SetTitle(t) => Some(t.as_str()),
            Command::Exit => None,
        })
    }

    pub fn exit_requested(&self) -> bool {
        self.commands.iter().any(|c| matches!(c, Command::Exit))
    }
}

#[derive(Debug)]
enum Command {
    SetTitle(String),
    Exit,
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    pub fn run<A>(initial: RuntimeConfig, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(initial, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        Ok(())
    }
}

struct WindowEntry {
    window: Window,
    clock: FrameClock,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    initial: RuntimeConfig,
    app: A,
    host: Host,

    window: Option<WindowEntry>,
    exit_requested: bool,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(initial: RuntimeConfig, app: A) -> Self {
        let viewport = Viewport::new(
            initial.initial_size.width as f32,
            initial.initial_size.height as f32,
        );
        Self {
            initial,
            app,
            host: Host::new(Rc::new(SystemClock), viewport),
            window: None,
            exit_requested: false,
        }
    }

    fn request_exit(&mut self) {
        if !self.exit_requested {
            self.exit_requested = true;
            self.host.unmount(&mut self.app);
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.initial.title.clone())
            .with_inner_size(self.initial.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let viewport = logical_viewport(&window, window.inner_size());
        log::info!("window created at {}x{}", viewport.width, viewport.height);

        self.host.dispatch(&mut self.app, &HostEvent::Resized(viewport));
        self.window = Some(WindowEntry { window, clock: FrameClock::default() });
        self.host.mount(&mut self.app);
        Ok(())
    }

    fn apply_commands(&mut self, event_loop: &ActiveEventLoop, mut ctx: RuntimeCtx) {
        for cmd in ctx.commands.drain(..) {
            match cmd {
                Command::SetTitle(title) => {
                    if let Some(entry) = &self.window {
                        entry.window.set_title(&title);
                    }
                }
                Command::Exit => self.request_exit(),
            }
        }

        if self.exit_requested {
            event_loop.exit();
        }
    }

    fn dispatch(&mut self, event_loop: &ActiveEventLoop, event: HostEvent) {
        if self.host.dispatch(&mut self.app, &event) == AppControl::Exit {
            self.request_exit();
            event_loop.exit();
        }
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(entry) = &mut self.window {
            // Resuming after suspension: restart delta tracking, keep the page mounted.
            entry.clock.reset();
            entry.window.request_redraw();
            return;
        }

        if let Err(e) = self.create_window(event_loop) {
            log::error!("failed to create initial window: {e:#}");
            self.request_exit();
            event_loop.exit();
            return;
        }

        if let Some(entry) = &self.window {
            entry.window.request_redraw();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let Some(entry) = &self.window else {
            event_loop.set_control_flow(ControlFlow::Wait);
            return;
        };

        // Frame callbacks animate continuously; otherwise sleep until the next timer.
        if self.host.wants_frames() {
            event_loop.set_control_flow(ControlFlow::Wait);
            entry.window.request_redraw();
            return;
        }

        match self.host.next_timer_due().map(|due| entry.clock.instant_at(due)) {
            Some(deadline) if deadline > Instant::now() => {
                event_loop.set_control_flow(ControlFlow::WaitUntil(deadline));
            }
            Some(_) => {
                event_loop.set_control_flow(ControlFlow::Wait);
                entry.window.request_redraw();
            }
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        match &event {
            WindowEvent::CloseRequested => {
                log::info!("window closed");
                self.request_exit();
                self.window = None;
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                let viewport = match &self.window {
                    Some(entry) => logical_viewport(&entry.window, *size),
                    None => return,
                };
                self.dispatch(event_loop, HostEvent::Resized(viewport));
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let viewport = match &self.window {
                    Some(entry) => logical_viewport(&entry.window, entry.window.inner_size()),
                    None => return,
                };
                self.dispatch(event_loop, HostEvent::Resized(viewport));
            }

            WindowEvent::RedrawRequested => {
                let Some(entry) = &mut self.window else {
                    return;
                };
                let time = entry.clock.tick();

                let mut runtime_ctx = RuntimeCtx::default();
                if self.host.frame(&mut self.app, time, &mut runtime_ctx) == AppControl::Exit {
                    runtime_ctx.exit();
                }

                if let Some(entry) = &self.window {
                    entry.window.pre_present_notify();
                }
                self.apply_commands(event_loop, runtime_ctx);
            }

            other => {
                let translated = match &self.window {
                    Some(entry) => translate_input_event(&entry.window, other),
                    None => None,
                };
                if let Some(ev) = translated {
                    self.dispatch(event_loop, ev);
                    if let Some(entry) = &self.window {
                        entry.window.request_redraw();
                    }
                }
            }
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.request_exit();
    }
}

fn translate_input_event(window: &Window, event: &WindowEvent) -> Option<HostEvent> {
    match event {
        WindowEvent::Focused(f) => Some(HostEvent::Focused(*f)),

        WindowEvent::MouseWheel { delta, .. } => {
            let delta = match delta {
                MouseScrollDelta::LineDelta(_, y) => ScrollDelta::Line { y: *y },
                MouseScrollDelta::PixelDelta(p) => {
                    let (_, y) = to_logical_f32(window, *p);
                    ScrollDelta::Pixel { y }
                }
            };
            Some(HostEvent::Scrolled(delta))
        }

        WindowEvent::KeyboardInput { event, .. } => {
            if event.state != ElementState::Pressed || event.repeat {
                return None;
            }
            Some(HostEvent::KeyPressed(map_key(event.physical_key)))
        }

        _ => None,
    }
}

fn logical_viewport(window: &Window, size: PhysicalSize<u32>) -> Viewport {
    let logical: LogicalSize<f64> = size.to_logical(window.scale_factor());
    Viewport::new(logical.width as f32, logical.height as f32)
}

fn to_logical_f32(window: &Window, pos: PhysicalPosition<f64>) -> (f32, f32) {
    let scale = window.scale_factor();
    let logical = pos.to_logical::<f64>(scale);
    (logical.x as f32, logical.y as f32)
}

fn map_key(pk: PhysicalKey) -> Key {
    match pk {
        PhysicalKey::Code(code) => match code {
            KeyCode::Escape => Key::Escape,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::ArrowUp => Key::ArrowUp,
            KeyCode::ArrowDown => Key::ArrowDown,

            KeyCode::Digit0 | KeyCode::Numpad0 => Key::Digit(0),
            KeyCode::Digit1 | KeyCode::Numpad1 => Key::Digit(1),
            KeyCode::Digit2 | KeyCode::Numpad2 => Key::Digit(2),
            KeyCode::Digit3 | KeyCode::Numpad3 => Key::Digit(3),
            KeyCode::Digit4 | KeyCode::Numpad4 => Key::Digit(4),
            KeyCode::Digit5 | KeyCode::Numpad5 => Key::Digit(5),
            KeyCode::Digit6 | KeyCode::Numpad6 => Key::Digit(6),
            KeyCode::Digit7 | KeyCode::Numpad7 => Key::Digit(7),
            KeyCode::Digit8 | KeyCode::Numpad8 => Key::Digit(8),
            KeyCode::Digit9 | KeyCode::Numpad9 => Key::Digit(9),

            other => Key::Unknown(other as u32),
        },

        // NativeKeyCode is not a u32 in winit 0.30; preserve "unknown" without a stable numeric.
        PhysicalKey::Unidentified(_) => Key::Unknown(0),
    }
}
