//! Scene layout consumed by the PBR renderer.
//!
//! - [`SphereGrid`] / [`SphereInstance`] - Grid of spheres with a metallic/roughness ramp
//! - [`PointLight`] / [`LightRig`] - Up to [`MAX_LIGHTS`] point lights
//! - [`RenderSettings`] - Material and tone-mapping switches

mod grid;
mod lights;
mod settings;

pub use grid::{MAX_GRID_DIMENSION, SphereGrid, SphereInstance};
pub use lights::{LightRig, MAX_LIGHTS, PointLight};
pub use settings::{EXPOSURE_RANGE, RenderSettings};
