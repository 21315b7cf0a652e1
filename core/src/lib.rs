//! # Lumen Core
//!
//! Windowing- and GPU-agnostic building blocks of the Lumen PBR viewer:
//! the orbit camera, platform input types, mesh generators, the sphere grid
//! scene, the IBL precompute description and the viewer configuration.

pub mod camera;
pub mod config;
pub mod ibl;
pub mod input;
pub mod math;
pub mod mesh;
pub mod scene;

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the core version. Call once after the logger is installed.
pub fn init() {
    log::info!("Lumen Core v{} initialized", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
