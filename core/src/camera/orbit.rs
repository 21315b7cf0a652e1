//! Orbit camera driven by pointer deltas and scroll events.
//!
//! The camera is parameterised by a focal point, a distance from it, and
//! pitch/yaw angles (no roll). Everything else (orientation, basis vectors,
//! eye position, view and view-projection matrices) is derived from those by
//! [`OrbitCamera::rederive`], which every mutating method calls before
//! returning.

use crate::math::{self, Mat4, Quat, Vec2, Vec3};

use super::input::{CameraEvent, CameraInput};
use super::placement::CameraPlacement;

/// Distance floor. Zooming past it pushes the focal point forward instead.
pub const MIN_DISTANCE: f32 = 1.0;

/// Upper bound of the per-scroll-unit zoom step.
pub const MAX_ZOOM_SPEED: f32 = 100.0;

/// Viewport dimension (in thousands of pixels) above which pan speed stops changing.
const PAN_SPEED_CLAMP: f32 = 2.4;

/// Orbit camera with derived view/projection state.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    projection: Mat4,
    focal_point: Vec3,
    distance: f32,
    pitch: f32,
    yaw: f32,

    orientation: Quat,
    position: Vec3,
    up: Vec3,
    right: Vec3,
    forward: Vec3,
    view: Mat4,
    view_projection: Mat4,

    last_pointer: Vec2,
    viewport_width: u32,
    viewport_height: u32,
}

impl OrbitCamera {
    /// Create a camera at the default placement with the given projection.
    pub fn new(projection: Mat4) -> Self {
        Self::with_placement(projection, CameraPlacement::default())
    }

    /// Create a camera at `placement`.
    pub fn with_placement(projection: Mat4, placement: CameraPlacement) -> Self {
        let mut camera = Self {
            projection,
            focal_point: Vec3::zeros(),
            distance: MIN_DISTANCE,
            pitch: 0.0,
            yaw: 0.0,
            orientation: Quat::identity(),
            position: Vec3::zeros(),
            up: Vec3::y(),
            right: Vec3::x(),
            forward: -Vec3::z(),
            view: Mat4::identity(),
            view_projection: projection,
            last_pointer: Vec2::zeros(),
            viewport_width: 0,
            viewport_height: 0,
        };
        camera.place(placement);
        camera
    }

    /// Advance one frame.
    ///
    /// The pointer delta since the previous call is multiplied by
    /// `delta_time` before it is applied, so pan and rotation rates depend on
    /// the frame rate.
    pub fn update(&mut self, delta_time: f32, input: &CameraInput) {
        let delta = input.pointer - self.last_pointer;
        self.last_pointer = input.pointer;

        let delta = delta * delta_time;
        if delta.iter().all(|v| v.is_finite()) {
            if input.pans() {
                self.pan(delta);
            }
            if input.rotates() {
                self.rotate(delta);
            }
        } else {
            log::trace!(
                "Ignoring non-finite camera delta (dt = {}, pointer = {:?})",
                delta_time,
                input.pointer
            );
        }

        self.rederive();
    }

    /// Dispatch a discrete event.
    pub fn handle_event(&mut self, event: &CameraEvent) {
        match *event {
            CameraEvent::Scroll { y_offset, .. } => self.zoom(y_offset),
            CameraEvent::Resize { width, height } => self.set_viewport_size(width, height),
        }
    }

    /// Move the focal point in the view plane, scaled by the orbit distance.
    pub fn pan(&mut self, delta: Vec2) {
        let (x_speed, y_speed) = self.pan_speed();
        self.focal_point += -self.right * delta.x * x_speed * self.distance;
        self.focal_point += self.up * delta.y * y_speed * self.distance;
        self.rederive();
    }

    /// Change pitch and yaw.
    ///
    /// Once the camera is upside down (`up.y < 0`) the yaw direction flips so
    /// horizontal motion keeps turning the view the way the pointer moves.
    pub fn rotate(&mut self, delta: Vec2) {
        let speed = self.rotation_speed();
        let yaw_sign = self.yaw_sign();
        self.pitch -= delta.y * speed;
        self.yaw -= yaw_sign * delta.x * speed;
        self.rederive();
    }

    /// Move towards (positive `delta`) or away from the focal point.
    pub fn zoom(&mut self, delta: f32) {
        self.distance -= delta * self.zoom_speed();
        self.enforce_distance_floor();
        self.rederive();
    }

    /// Per-axis pan factors for the current viewport.
    pub fn pan_speed(&self) -> (f32, f32) {
        (
            pan_factor(self.viewport_width),
            pan_factor(self.viewport_height),
        )
    }

    /// Radians per scaled pointer unit.
    pub fn rotation_speed(&self) -> f32 {
        1.0
    }

    /// Distance change per scroll unit. Grows with distance, capped at [`MAX_ZOOM_SPEED`].
    pub fn zoom_speed(&self) -> f32 {
        (self.distance * 0.2).clamp(0.0, MAX_ZOOM_SPEED)
    }

    /// `-1.0` when the camera has rotated past a pole, `1.0` otherwise.
    pub fn yaw_sign(&self) -> f32 {
        if self.up.y < 0.0 { -1.0 } else { 1.0 }
    }

    /// Recompute every derived field from pitch, yaw, focal point, distance and projection.
    ///
    /// Order matters: the position needs the forward vector, which needs the
    /// orientation.
    pub fn rederive(&mut self) {
        self.orientation = math::quat_from_pitch_yaw(self.pitch, self.yaw);

        self.up = math::quat_rotate_vec3(&self.orientation, Vec3::y());
        self.right = math::quat_rotate_vec3(&self.orientation, Vec3::x());
        self.forward = math::quat_rotate_vec3(&self.orientation, -Vec3::z());

        self.position = self.focal_point - self.forward * self.distance;

        self.view = math::rigid_inverse(&self.orientation, self.position);
        self.view_projection = self.projection * self.view;
    }

    fn enforce_distance_floor(&mut self) {
        if self.distance < MIN_DISTANCE {
            self.focal_point += self.forward;
            self.distance = MIN_DISTANCE;
        }
    }

    // ---- placement ----

    /// Apply a scripted placement in one step.
    ///
    /// A distance below the floor is handled as if a zoom had crossed it.
    pub fn place(&mut self, placement: CameraPlacement) {
        self.focal_point = placement.focal_point;
        self.pitch = placement.pitch;
        self.yaw = placement.yaw;
        self.distance = placement.distance;
        // Forward must match the new angles before the floor nudges along it.
        self.rederive();
        self.enforce_distance_floor();
        self.rederive();
    }

    /// Current placement.
    pub fn placement(&self) -> CameraPlacement {
        CameraPlacement {
            focal_point: self.focal_point,
            distance: self.distance,
            pitch: self.pitch,
            yaw: self.yaw,
        }
    }

    // ---- setters ----

    pub fn set_projection(&mut self, projection: Mat4) {
        self.projection = projection;
        self.rederive();
    }

    pub fn set_viewport_size(&mut self, width: u32, height: u32) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    pub fn set_focal_point(&mut self, focal_point: Vec3) {
        self.focal_point = focal_point;
        self.rederive();
    }

    /// Set the orbit distance. Values below [`MIN_DISTANCE`] clamp and nudge the focal point.
    pub fn set_distance(&mut self, distance: f32) {
        self.distance = distance;
        self.enforce_distance_floor();
        self.rederive();
    }

    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch;
        self.rederive();
    }

    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
        self.rederive();
    }

    // ---- accessors ----

    pub fn view_matrix(&self) -> &Mat4 {
        &self.view
    }

    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection
    }

    pub fn view_projection_matrix(&self) -> &Mat4 {
        &self.view_projection
    }

    /// Projection times the view's rotation only, for drawing the environment cube.
    pub fn skybox_view_projection(&self) -> Mat4 {
        self.projection * math::strip_translation(&self.view)
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn orientation(&self) -> &Quat {
        &self.orientation
    }

    pub fn focal_point(&self) -> Vec3 {
        self.focal_point
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn up_direction(&self) -> Vec3 {
        self.up
    }

    pub fn right_direction(&self) -> Vec3 {
        self.right
    }

    pub fn forward_direction(&self) -> Vec3 {
        self.forward
    }

    pub fn viewport_size(&self) -> (u32, u32) {
        (self.viewport_width, self.viewport_height)
    }

    pub fn last_pointer_position(&self) -> Vec2 {
        self.last_pointer
    }
}

/// `0.0732x² - 0.3556x + 0.6042` with `x = min(dimension / 1000, 2.4)`.
///
/// Keeps screen-space pan speed roughly constant across viewport sizes and
/// flat above the clamp.
fn pan_factor(dimension: u32) -> f32 {
    let x = (dimension as f32 / 1000.0).min(PAN_SPEED_CLAMP);
    0.0732 * x * x - 0.3556 * x + 0.6042
}
