//! Everything the renderer uploads once: meshes, instances and lights.

use lumen_core::config::{ConfigError, ViewerConfig};
use lumen_core::ibl::{self, IblSettings, PrefilterMip};
use lumen_core::math::Mat4;
use lumen_core::mesh::MeshData;
use lumen_core::mesh::generators::{generate_cube, generate_fullscreen_quad, generate_sphere_strip};
use lumen_core::scene::{LightRig, RenderSettings, SphereInstance};

use crate::uniforms::{LightUniforms, SphereUniforms};

/// Scene data built from a [`ViewerConfig`].
#[derive(Debug)]
pub struct SceneLayout {
    pub sphere: MeshData,
    /// Unit cube for cubemap capture and the skybox.
    pub cube: MeshData,
    /// Full-screen quad for the BRDF lookup table pass.
    pub quad: MeshData,
    pub instances: Vec<SphereInstance>,
    pub lights: LightRig,
    /// Model matrices of the light marker spheres.
    pub light_markers: Vec<Mat4>,
    pub capture_views: [Mat4; 6],
    pub capture_projection: Mat4,
    pub prefilter_mips: Vec<PrefilterMip>,
}

impl SceneLayout {
    pub fn build(config: &ViewerConfig) -> Result<Self, ConfigError> {
        let lights = config.light_rig()?;
        let light_markers = lights.lights().iter().map(|l| l.marker_transform()).collect();

        Ok(Self {
            sphere: generate_sphere_strip(config.sphere_segments, config.sphere_segments),
            cube: generate_cube(),
            quad: generate_fullscreen_quad(),
            instances: config.grid.instances(),
            lights,
            light_markers,
            capture_views: ibl::capture_views(),
            capture_projection: ibl::capture_projection(),
            prefilter_mips: config.ibl.prefilter_mip_chain(),
        })
    }

    /// Instance buffer contents for the current material settings.
    pub fn sphere_uniforms(&self, settings: &RenderSettings) -> Vec<SphereUniforms> {
        self.instances
            .iter()
            .map(|instance| SphereUniforms::new(instance, settings))
            .collect()
    }

    pub fn light_uniforms(&self) -> LightUniforms {
        LightUniforms::new(&self.lights)
    }

    /// One-line description for the startup log.
    pub fn summary(&self, ibl: &IblSettings) -> String {
        format!(
            "{} spheres ({} vertices, {} triangles each), {} lights, \
             environment {}px, irradiance {}px, prefilter {}px x {} mips, BRDF LUT {}px",
            self.instances.len(),
            self.sphere.vertex_count(),
            self.sphere.triangle_count(),
            self.lights.len(),
            ibl.environment_size,
            ibl.irradiance_size,
            ibl.prefilter_size,
            self.prefilter_mips.len(),
            ibl.brdf_lut_size
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = ViewerConfig::default();
        let layout = SceneLayout::build(&config).unwrap();
        assert_eq!(layout.instances.len(), 49);
        assert_eq!(layout.light_markers.len(), 4);
        assert_eq!(layout.sphere.vertex_count(), 65 * 65);
        assert_eq!(layout.cube.vertex_count(), 36);
        assert_eq!(layout.prefilter_mips.len(), 5);
        assert_eq!(layout.sphere_uniforms(&config.render).len(), 49);
        assert_eq!(layout.light_uniforms().count[0], 4);
    }

    #[test]
    fn test_summary_mentions_counts() {
        let config = ViewerConfig::default();
        let summary = SceneLayout::build(&config).unwrap().summary(&config.ibl);
        assert!(summary.starts_with("49 spheres"));
        assert!(summary.contains("4 lights"));
    }

    #[test]
    fn test_too_many_lights_fail_build() {
        let mut config = ViewerConfig::default();
        config.lights.extend(config.lights.clone());
        assert!(SceneLayout::build(&config).is_err());
    }
}
