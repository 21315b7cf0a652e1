//! Point light rig.

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::math::{self, Mat4, Vec3};

/// Size of the shader's light array.
pub const MAX_LIGHTS: usize = 4;

/// Uniform scale of the sphere mesh drawn at each light position.
const MARKER_SCALE: f32 = 0.5;

/// Point light with an HDR color (intensity is folded into the color).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Vec3,
}

impl PointLight {
    pub fn new(position: Vec3, color: Vec3) -> Self {
        Self { position, color }
    }

    /// Grey light of the given intensity.
    pub fn grey(position: Vec3, intensity: f32) -> Self {
        Self::new(position, Vec3::repeat(intensity))
    }

    /// Model matrix of the marker sphere.
    pub fn marker_transform(&self) -> Mat4 {
        math::mat4_from_translation_scale(self.position, MARKER_SCALE)
    }
}

/// The lights of the scene, at most [`MAX_LIGHTS`].
#[derive(Debug, Clone, PartialEq)]
pub struct LightRig {
    lights: Vec<PointLight>,
}

impl LightRig {
    pub fn new(lights: Vec<PointLight>) -> Result<Self, ConfigError> {
        if lights.len() > MAX_LIGHTS {
            return Err(ConfigError::Invalid(format!(
                "{} lights configured, at most {} are supported",
                lights.len(),
                MAX_LIGHTS
            )));
        }
        Ok(Self { lights })
    }

    /// One strong key light and three weaker fills.
    pub fn default_lights() -> Vec<PointLight> {
        vec![
            PointLight::grey(Vec3::new(-10.0, 10.0, 10.0), 1000.0),
            PointLight::grey(Vec3::new(10.0, 10.0, 10.0), 300.0),
            PointLight::grey(Vec3::new(-10.0, -10.0, 10.0), 300.0),
            PointLight::grey(Vec3::new(10.0, -10.0, 10.0), 300.0),
        ]
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    pub fn len(&self) -> usize {
        self.lights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    /// Fixed-size `(positions, colors)` arrays for the shader; unused slots are zero.
    pub fn uniform_arrays(&self) -> ([[f32; 4]; MAX_LIGHTS], [[f32; 4]; MAX_LIGHTS]) {
        let mut positions = [[0.0; 4]; MAX_LIGHTS];
        let mut colors = [[0.0; 4]; MAX_LIGHTS];
        for (i, light) in self.lights.iter().enumerate() {
            let p = light.position;
            let c = light.color;
            positions[i] = [p.x, p.y, p.z, 1.0];
            colors[i] = [c.x, c.y, c.z, 0.0];
        }
        (positions, colors)
    }
}

impl Default for LightRig {
    fn default() -> Self {
        Self {
            lights: Self::default_lights(),
        }
    }
}
