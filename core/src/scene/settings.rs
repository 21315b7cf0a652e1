//! Material and tone-mapping switches.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::math::{Vec2, Vec3};

/// Allowed exposure values.
pub const EXPOSURE_RANGE: RangeInclusive<f32> = 0.0..=2.0;

/// Toggles and constants fed to the PBR shader.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Sample material textures instead of the grid's metallic/roughness ramp.
    pub textured: bool,
    /// Use image-based ambient lighting.
    pub ibl: bool,
    pub exposure: f32,
    /// Untextured base color.
    pub albedo: Vec3,
    /// Untextured ambient occlusion.
    pub ao: f32,
    /// UV scale applied to material textures.
    pub tiling_factor: Vec2,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            textured: true,
            ibl: true,
            exposure: 0.5,
            albedo: Vec3::new(0.5, 0.0, 0.0),
            ao: 1.0,
            tiling_factor: Vec2::new(9.0, 5.0),
        }
    }
}

impl RenderSettings {
    pub fn toggle_textured(&mut self) {
        self.textured = !self.textured;
    }

    pub fn toggle_ibl(&mut self) {
        self.ibl = !self.ibl;
    }

    /// Add `delta` to the exposure, clamped to [`EXPOSURE_RANGE`].
    pub fn adjust_exposure(&mut self, delta: f32) {
        self.exposure = (self.exposure + delta).clamp(*EXPOSURE_RANGE.start(), *EXPOSURE_RANGE.end());
    }
}
