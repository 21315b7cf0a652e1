//! # Lumen App
//!
//! Application framework for windowed Lumen applications.
//!
//! This crate owns the winit event loop and window. Applications plug in
//! through a handler and receive per-frame timing plus the raw window events,
//! which [`InputTracker`] turns into the camera's explicit inputs.
//!
//! ## Overview
//!
//! - [`AppHandler`] - Trait for application lifecycle hooks
//! - [`AppArgs`] - Trait for parsing command line arguments
//! - [`App`] - Event loop driver that manages the window
//! - [`InputTracker`] - Window events → [`CameraInput`](lumen_core::camera::CameraInput) and camera events
//!
//! ## Example
//!
//! ```ignore
//! use lumen_app::{App, AppArgs, AppContext, AppHandler, DefaultAppArgs};
//!
//! struct MyApp;
//!
//! impl AppHandler for MyApp {
//!     fn on_update(&mut self, ctx: &mut AppContext) -> bool {
//!         ctx.set_title(format!("frame {}", ctx.frame_number()));
//!         true
//!     }
//! }
//!
//! fn main() -> Result<(), lumen_app::AppError> {
//!     App::run(MyApp, DefaultAppArgs::parse())
//! }
//! ```

mod app;
mod args;
mod context;
mod error;
mod handler;
pub mod input;

pub use app::App;
pub use args::{AppArgs, DefaultAppArgs, WindowMode};
pub use context::AppContext;
pub use error::AppError;
pub use handler::AppHandler;
pub use input::InputTracker;

/// App library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Install the `env_logger` backend with default filter `info` (overridable
/// with `RUST_LOG`). Later calls are no-ops.
pub fn init_logging() {
    if env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init()
        .is_err()
    {
        log::debug!("Logger already installed");
    }
}

/// Initialize the app subsystem.
pub fn init() {
    log::info!("Lumen App v{} initialized", VERSION);
}
