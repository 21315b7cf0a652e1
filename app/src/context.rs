//! Application context.

/// Application context passed to every [`AppHandler`](crate::AppHandler) hook.
///
/// Provides window dimensions and frame timing, and lets the handler request
/// a new window title.
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Current window width in physical pixels.
    pub(crate) width: u32,
    /// Current window height in physical pixels.
    pub(crate) height: u32,
    /// Current scale factor (DPI scaling).
    pub(crate) scale_factor: f64,
    /// Number of completed frames.
    pub(crate) frame_number: u64,
    /// Delta time since last frame in seconds.
    pub(crate) delta_time: f32,
    /// Time since application start in seconds.
    pub(crate) elapsed_time: f32,
    /// Title requested by the handler, applied by the event loop.
    pub(crate) pending_title: Option<String>,
}

impl AppContext {
    pub(crate) fn new(width: u32, height: u32, scale_factor: f64) -> Self {
        Self {
            width,
            height,
            scale_factor,
            frame_number: 0,
            delta_time: 0.0,
            elapsed_time: 0.0,
            pending_title: None,
        }
    }

    /// Get the current window width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the current window height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the window aspect ratio.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    /// Get the current scale factor (DPI scaling).
    ///
    /// This is the ratio between physical pixels and logical pixels.
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Get the current frame number.
    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    /// Get the delta time since last frame in seconds.
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the elapsed time since application start in seconds.
    pub fn elapsed_time(&self) -> f32 {
        self.elapsed_time
    }

    /// Request a new window title. The latest request of a frame wins.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.pending_title = Some(title.into());
    }

    pub(crate) fn take_title(&mut self) -> Option<String> {
        self.pending_title.take()
    }

    /// Record a size change. Returns `false` if nothing changed or the size is degenerate.
    pub(crate) fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 || (self.width == width && self.height == height) {
            return false;
        }
        self.width = width;
        self.height = height;
        true
    }

    pub(crate) fn set_timing(&mut self, delta_time: f32, elapsed_time: f32) {
        self.delta_time = delta_time;
        self.elapsed_time = elapsed_time;
    }
}
