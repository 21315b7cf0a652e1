//! # Lumen Demos
//!
//! Demo applications built on Lumen.
//!
//! ## Available Demos
//!
//! - `orbit_viewer` - PBR sphere grid with image-based lighting and an orbit camera

pub mod scene_layout;
pub mod uniforms;
pub mod viewer;

/// Demos library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
