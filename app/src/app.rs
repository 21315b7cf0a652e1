//! Main application struct and event loop.

use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use crate::args::{AppArgs, WindowMode};
use crate::context::AppContext;
use crate::error::AppError;
use crate::handler::AppHandler;

/// Main application struct that manages the window and frame loop.
///
/// The `App` struct is generic over:
/// - `H`: The handler type that implements [`AppHandler`]
/// - `A`: The arguments type that implements [`AppArgs`]
///
/// # Example
///
/// ```ignore
/// use lumen_app::{App, AppArgs, AppHandler, DefaultAppArgs};
///
/// struct MyApp;
///
/// impl AppHandler for MyApp {}
///
/// fn main() -> Result<(), lumen_app::AppError> {
///     App::run(MyApp, DefaultAppArgs::parse())
/// }
/// ```
pub struct App<H, A>
where
    H: AppHandler,
    A: AppArgs,
{
    handler: H,
    args: A,
    window: Option<Window>,
    context: Option<AppContext>,
    start_time: Instant,
    last_frame_time: Instant,
    running: bool,
    shut_down: bool,
    error: Option<AppError>,
}

impl<H, A> App<H, A>
where
    H: AppHandler + 'static,
    A: AppArgs + 'static,
{
    /// Create a new application.
    pub fn new(handler: H, args: A) -> Self {
        Self {
            handler,
            args,
            window: None,
            context: None,
            start_time: Instant::now(),
            last_frame_time: Instant::now(),
            running: true,
            shut_down: false,
            error: None,
        }
    }

    /// Run the application with the given handler and arguments.
    ///
    /// Installs the logger (see [`init_logging`](crate::init_logging)),
    /// creates the event loop and runs until the window closes, the handler
    /// asks to exit or the frame limit is reached.
    pub fn run(handler: H, args: A) -> Result<(), AppError> {
        crate::init_logging();
        lumen_core::init();
        crate::init();

        let event_loop = EventLoop::new()?;
        let mut app = Self::new(handler, args);
        event_loop.run_app(&mut app)?;

        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        let mut window_attributes = Window::default_attributes()
            .with_title(self.args.window_title())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.args.window_width(),
                self.args.window_height(),
            ));

        if self.args.window_mode() == WindowMode::Borderless {
            window_attributes =
                window_attributes.with_fullscreen(Some(winit::window::Fullscreen::Borderless(None)));
        }

        let window = event_loop.create_window(window_attributes)?;
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        log::info!(
            "Window created ({}x{} physical, scale_factor={})",
            size.width,
            size.height,
            scale_factor
        );

        let mut ctx = AppContext::new(size.width, size.height, scale_factor);
        self.handler.on_init(&mut ctx);
        if let Some(title) = ctx.take_title() {
            window.set_title(&title);
        }

        self.context = Some(ctx);
        self.window = Some(window);
        Ok(())
    }

    /// Run one frame: timing, handler update, title, frame limit.
    fn update_frame(&mut self) {
        let now = Instant::now();
        let delta_time = now.duration_since(self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;

        let Some(ctx) = &mut self.context else {
            return;
        };
        ctx.set_timing(delta_time, now.duration_since(self.start_time).as_secs_f32());

        if !self.handler.on_update(ctx) {
            log::info!("Handler requested exit");
            self.running = false;
        }

        if let (Some(title), Some(window)) = (ctx.take_title(), &self.window) {
            window.set_title(&title);
        }

        ctx.frame_number += 1;
        if let Some(max_frames) = self.args.max_frames()
            && ctx.frame_number >= max_frames
        {
            log::info!("Reached max frames limit ({}), exiting", max_frames);
            self.running = false;
        }
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if !self.shut_down {
            self.shut_down = true;
            if let Some(ctx) = &mut self.context {
                self.handler.on_shutdown(ctx);
            }
        }
        event_loop.exit();
    }
}

impl<H, A> ApplicationHandler for App<H, A>
where
    H: AppHandler + 'static,
    A: AppArgs + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.create_window(event_loop) {
            log::error!("{e}");
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let Some(ctx) = &mut self.context {
            self.handler.on_window_event(ctx, &event);
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested");
                self.running = false;
                self.shutdown(event_loop);
            }

            WindowEvent::Resized(size) => {
                if let Some(ctx) = &mut self.context
                    && ctx.resize(size.width, size.height)
                {
                    self.handler.on_resize(ctx);
                }
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if let Some(ctx) = &mut self.context {
                    ctx.scale_factor = scale_factor;
                    log::info!("Scale factor changed to {}", scale_factor);
                }
            }

            WindowEvent::RedrawRequested => {
                if self.running {
                    self.update_frame();
                }

                if !self.running {
                    self.shutdown(event_loop);
                } else if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
