//! Command line arguments trait and default implementation.
//!
//! Uses clap for CLI parsing with help text (`--help`) and clear error messages.

use std::path::{Path, PathBuf};

/// Window mode enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowMode {
    /// Windowed mode with decorations.
    #[default]
    Windowed,
    /// Borderless fullscreen.
    Borderless,
}

/// Trait for parsing command line arguments.
///
/// Implement this trait to customize how your application handles
/// command line arguments. The trait provides defaults for all methods,
/// making it easy to override only the options you need.
///
/// # Example
///
/// ```ignore
/// use lumen_app::{AppArgs, WindowMode};
///
/// struct MyArgs {
///     fullscreen: bool,
/// }
///
/// impl AppArgs for MyArgs {
///     fn parse() -> Self {
///         Self {
///             fullscreen: std::env::args().any(|a| a == "--fullscreen"),
///         }
///     }
///
///     fn window_mode(&self) -> WindowMode {
///         if self.fullscreen {
///             WindowMode::Borderless
///         } else {
///             WindowMode::Windowed
///         }
///     }
/// }
/// ```
pub trait AppArgs: Sized {
    /// Parse command line arguments.
    fn parse() -> Self;

    /// Window mode (windowed or borderless fullscreen).
    fn window_mode(&self) -> WindowMode {
        WindowMode::Windowed
    }

    /// Initial window width in logical pixels.
    fn window_width(&self) -> u32 {
        1280
    }

    /// Initial window height in logical pixels.
    fn window_height(&self) -> u32 {
        720
    }

    /// Initial window title.
    fn window_title(&self) -> &str {
        "Lumen"
    }

    /// Exit after this many frames, if set.
    fn max_frames(&self) -> Option<u64> {
        None
    }

    /// Viewer configuration file, if one was given.
    fn config_path(&self) -> Option<&Path> {
        None
    }
}

/// Default command line arguments, parsed with clap.
///
/// # Usage
///
/// ```text
/// # Show help
/// ./orbit_viewer --help
///
/// # Borderless fullscreen with a scene file
/// ./orbit_viewer --fullscreen --config scene.toml
///
/// # Run for 100 frames then exit (useful for testing)
/// ./orbit_viewer --max-frames 100
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultAppArgs {
    window_mode: WindowMode,
    width: u32,
    height: u32,
    title: String,
    max_frames: Option<u64>,
    config: Option<PathBuf>,
}

impl Default for DefaultAppArgs {
    fn default() -> Self {
        Self {
            window_mode: WindowMode::Windowed,
            width: 1280,
            height: 720,
            title: "Lumen".to_string(),
            max_frames: None,
            config: None,
        }
    }
}

impl DefaultAppArgs {
    /// Create new default args with a custom title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the window size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the maximum number of frames.
    pub fn with_max_frames(mut self, max_frames: u64) -> Self {
        self.max_frames = Some(max_frames);
        self
    }

    /// Set the configuration file.
    pub fn with_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.config = Some(path.into());
        self
    }

    /// Parse from an explicit argument list (first item is the program name).
    ///
    /// `default_title` is used when `--title` is absent.
    pub fn try_parse_from<I, T>(args: I, default_title: &str) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        use clap::Parser;
        let clap_args = cli::ClapArgs::try_parse_from(args)?;
        Ok(clap_args.into_args(default_title))
    }

    /// Parse the process arguments, using `default_title` when `--title` is absent.
    pub fn parse_with_title(default_title: &str) -> Self {
        use clap::Parser;
        cli::ClapArgs::parse().into_args(default_title)
    }
}

mod cli {
    use super::*;
    use clap::Parser;

    /// Lumen viewer arguments.
    #[derive(Parser, Debug)]
    #[command(
        name = "Lumen",
        about = "Orbit-camera PBR viewer",
        long_about = "Physically based sphere grid viewer with an orbit camera.\n\n\
            CONTROLS:\n\
            \n\
            • Shift + left drag: pan\n\
            • Middle drag: orbit\n\
            • Scroll: zoom\n\
            • T / I: toggle textures / image-based lighting\n\
            • = / -: exposure\n\
            • R: reset camera, Esc: quit",
        version
    )]
    pub(super) struct ClapArgs {
        /// Run in borderless fullscreen mode.
        #[arg(long)]
        pub fullscreen: bool,

        /// Initial window width in pixels.
        #[arg(long, default_value = "1280")]
        pub width: u32,

        /// Initial window height in pixels.
        #[arg(long, default_value = "720")]
        pub height: u32,

        /// Exit after rendering N frames (useful for testing).
        #[arg(long)]
        pub max_frames: Option<u64>,

        /// Viewer configuration file (TOML).
        #[arg(long)]
        pub config: Option<PathBuf>,

        /// Window title.
        #[arg(long)]
        pub title: Option<String>,
    }

    impl ClapArgs {
        pub(super) fn into_args(self, default_title: &str) -> DefaultAppArgs {
            DefaultAppArgs {
                window_mode: if self.fullscreen {
                    WindowMode::Borderless
                } else {
                    WindowMode::Windowed
                },
                width: self.width,
                height: self.height,
                title: self.title.unwrap_or_else(|| default_title.to_string()),
                max_frames: self.max_frames,
                config: self.config,
            }
        }
    }
}

impl AppArgs for DefaultAppArgs {
    fn parse() -> Self {
        Self::parse_with_title("Lumen")
    }

    fn window_mode(&self) -> WindowMode {
        self.window_mode
    }

    fn window_width(&self) -> u32 {
        self.width
    }

    fn window_height(&self) -> u32 {
        self.height
    }

    fn window_title(&self) -> &str {
        &self.title
    }

    fn max_frames(&self) -> Option<u64> {
        self.max_frames
    }

    fn config_path(&self) -> Option<&Path> {
        self.config.as_deref()
    }
}
