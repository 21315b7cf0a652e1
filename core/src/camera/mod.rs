//! Orbit camera and the values that drive it.
//!
//! - [`OrbitCamera`] - Focal point / distance / pitch / yaw camera with derived matrices
//! - [`CameraInput`] - Per-frame pointer and button snapshot
//! - [`CameraEvent`] - Scroll and resize events
//! - [`CameraPlacement`] - Scripted pose, also the `[camera]` config section
//! - [`Projection`] - Projection recipe rebuilt on resize

mod input;
mod orbit;
mod placement;
mod projection;

pub use input::{CameraEvent, CameraInput};
pub use orbit::{MAX_ZOOM_SPEED, MIN_DISTANCE, OrbitCamera};
pub use placement::CameraPlacement;
pub use projection::Projection;
