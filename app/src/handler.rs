//! Application handler trait.

use winit::event::WindowEvent;

use crate::context::AppContext;

/// Trait for handling application lifecycle events.
///
/// Implement this trait to create custom application logic. Every hook has
/// a default so handlers only override what they use.
///
/// # Lifecycle
///
/// 1. `on_init` - Called once after the window is created
/// 2. `on_window_event` - Called for every window event, before the loop reacts to it
/// 3. `on_resize` - Called when the window size changes
/// 4. `on_update` - Called every frame
/// 5. `on_shutdown` - Called once when the application is closing
///
/// # Example
///
/// ```ignore
/// use lumen_app::{AppContext, AppHandler};
///
/// struct MyApp {
///     frame_count: u64,
/// }
///
/// impl AppHandler for MyApp {
///     fn on_init(&mut self, ctx: &mut AppContext) {
///         log::info!("Window is {}x{}", ctx.width(), ctx.height());
///     }
///
///     fn on_update(&mut self, _ctx: &mut AppContext) -> bool {
///         self.frame_count += 1;
///         self.frame_count < 100
///     }
/// }
/// ```
pub trait AppHandler {
    /// Called once when the application initializes.
    fn on_init(&mut self, _ctx: &mut AppContext) {}

    /// Called when the window is resized.
    ///
    /// The new size is available in `ctx.width()` and `ctx.height()`.
    fn on_resize(&mut self, _ctx: &mut AppContext) {}

    /// Called every frame.
    ///
    /// Returns `true` to continue running, `false` to exit.
    fn on_update(&mut self, _ctx: &mut AppContext) -> bool {
        true
    }

    /// Called for every window event (input, focus, resize, ...).
    fn on_window_event(&mut self, _ctx: &mut AppContext, _event: &WindowEvent) {}

    /// Called when the application is closing.
    fn on_shutdown(&mut self, _ctx: &mut AppContext) {}
}
