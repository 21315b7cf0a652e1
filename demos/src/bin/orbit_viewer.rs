//! # Orbit Viewer
//!
//! Grid of PBR spheres with varying metallic/roughness, lit by four point
//! lights and an HDR environment, viewed through an orbit camera.
//!
//! ```text
//! cargo run --bin orbit_viewer -- --config demos/config/orbit_viewer.toml
//! ```

use std::process::ExitCode;

use lumen_app::{App, AppArgs, DefaultAppArgs};
use lumen_core::config::ViewerConfig;
use lumen_demos::viewer::OrbitViewer;

fn main() -> ExitCode {
    let args = DefaultAppArgs::parse_with_title("Lumen Orbit Viewer");
    lumen_app::init_logging();
    let config = ViewerConfig::load_or_default(args.config_path());
    let viewer = OrbitViewer::new(config, args.window_title());

    match App::run(viewer, args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
