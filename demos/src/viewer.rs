//! Orbit viewer application state.

use lumen_app::{AppContext, AppHandler, InputTracker};
use lumen_core::camera::{CameraEvent, OrbitCamera};
use lumen_core::config::ViewerConfig;
use lumen_core::input::KeyCode;
use lumen_core::scene::RenderSettings;
use winit::event::WindowEvent;

use crate::scene_layout::SceneLayout;
use crate::uniforms::FrameUniforms;

/// Exposure change per key press.
const EXPOSURE_STEP: f32 = 0.1;

/// Frames between camera pose debug logs.
const POSE_LOG_INTERVAL: u64 = 120;

/// PBR sphere grid viewer driven by an orbit camera.
pub struct OrbitViewer {
    config: ViewerConfig,
    camera: OrbitCamera,
    input: InputTracker,
    scene: Option<SceneLayout>,
    render: RenderSettings,
    uniforms: FrameUniforms,
    title_base: String,
    title: String,
    exit_requested: bool,
}

impl OrbitViewer {
    /// Create the viewer. The projection is rebuilt once the window size is known.
    pub fn new(config: ViewerConfig, title: impl Into<String>) -> Self {
        let camera = OrbitCamera::with_placement(config.projection.matrix(0, 0), config.camera);
        let render = config.render;
        Self {
            uniforms: FrameUniforms::capture(&camera, &render),
            config,
            camera,
            input: InputTracker::new(),
            scene: None,
            render,
            title_base: title.into(),
            title: String::new(),
            exit_requested: false,
        }
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn input_mut(&mut self) -> &mut InputTracker {
        &mut self.input
    }

    pub fn render_settings(&self) -> &RenderSettings {
        &self.render
    }

    pub fn scene(&self) -> Option<&SceneLayout> {
        self.scene.as_ref()
    }

    /// Uniforms published by the last frame.
    pub fn uniforms(&self) -> &FrameUniforms {
        &self.uniforms
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Build the scene data. Falls back to the default scene if the config is rejected.
    pub fn build_scene(&mut self) {
        let scene = match SceneLayout::build(&self.config) {
            Ok(scene) => scene,
            Err(e) => {
                log::warn!("{e}, using the default scene");
                self.config = ViewerConfig::default();
                match SceneLayout::build(&self.config) {
                    Ok(scene) => scene,
                    Err(e) => {
                        log::error!("Default scene rejected: {e}");
                        return;
                    }
                }
            }
        };
        log::info!("Scene: {}", scene.summary(&self.config.ibl));
        self.scene = Some(scene);
    }

    /// Rebuild the projection for a new viewport.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.camera
            .set_projection(self.config.projection.matrix(width, height));
        self.camera.set_viewport_size(width, height);
    }

    /// Apply queued input, advance the camera by `delta_time`, and publish uniforms.
    ///
    /// Window resizes arrive here as queued [`CameraEvent::Resize`]s and
    /// rebuild the projection before the camera sees them.
    ///
    /// Returns `false` once exit was requested.
    pub fn frame(&mut self, delta_time: f32) -> bool {
        for key in self.input.drain_key_presses() {
            self.handle_key(key);
        }
        for event in self.input.drain_events() {
            log::trace!("Camera event {event:?}");
            if let CameraEvent::Resize { width, height } = event {
                self.camera
                    .set_projection(self.config.projection.matrix(width, height));
            }
            self.camera.handle_event(&event);
        }

        self.camera.update(delta_time, &self.input.camera_input());
        self.uniforms = FrameUniforms::capture(&self.camera, &self.render);

        !self.exit_requested
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::T => {
                self.render.toggle_textured();
                log::info!("Textured materials: {}", self.render.textured);
            }
            KeyCode::I => {
                self.render.toggle_ibl();
                log::info!("Image-based lighting: {}", self.render.ibl);
            }
            KeyCode::Equal | KeyCode::NumpadAdd => {
                self.render.adjust_exposure(EXPOSURE_STEP);
                log::info!("Exposure: {:.1}", self.render.exposure);
            }
            KeyCode::Minus | KeyCode::NumpadSubtract => {
                self.render.adjust_exposure(-EXPOSURE_STEP);
                log::info!("Exposure: {:.1}", self.render.exposure);
            }
            KeyCode::R => {
                self.camera.place(self.config.camera);
                log::info!("Camera reset");
            }
            KeyCode::Escape => self.exit_requested = true,
            _ => {}
        }
    }

    /// Window title with the current camera pose.
    pub fn pose_title(&self) -> String {
        let c = &self.camera;
        let f = c.focal_point();
        format!(
            "{} | focal ({:.2}, {:.2}, {:.2})  distance {:.2}  pitch {:.1}°  yaw {:.1}°",
            self.title_base,
            f.x,
            f.y,
            f.z,
            c.distance(),
            c.pitch().to_degrees(),
            c.yaw().to_degrees()
        )
    }
}

impl AppHandler for OrbitViewer {
    fn on_init(&mut self, ctx: &mut AppContext) {
        self.set_viewport(ctx.width(), ctx.height());
        self.build_scene();
        log::info!(
            "Orbit viewer ready: left shift+left drag pans, middle drag orbits, scroll zooms"
        );
    }

    fn on_window_event(&mut self, _ctx: &mut AppContext, event: &WindowEvent) {
        self.input.handle_window_event(event);
    }

    fn on_update(&mut self, ctx: &mut AppContext) -> bool {
        let running = self.frame(ctx.delta_time());

        let title = self.pose_title();
        if title != self.title {
            ctx.set_title(title.clone());
            self.title = title;
        }
        if ctx.frame_number() % POSE_LOG_INTERVAL == 0 {
            log::debug!("{:?}", self.camera.placement());
        }

        running
    }

    fn on_shutdown(&mut self, ctx: &mut AppContext) {
        log::info!(
            "Orbit viewer shutting down after {} frames ({:.1}s)",
            ctx.frame_number(),
            ctx.elapsed_time()
        );
    }
}
