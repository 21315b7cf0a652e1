//! GPU uniform buffer structures for the PBR viewer.
//!
//! Layouts follow std140: every member is 16-byte aligned and `mat3` is
//! stored as three `vec4` columns.

use lumen_core::camera::OrbitCamera;
use lumen_core::math::{self, Mat3};
use lumen_core::scene::{LightRig, MAX_LIGHTS, RenderSettings, SphereInstance};

/// Per-frame camera and tone-mapping data.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    pub view_proj: [[f32; 4]; 4],
    /// View-projection with the view translation removed, for the skybox.
    pub skybox_view_proj: [[f32; 4]; 4],
    pub camera_pos: [f32; 4],
    /// x = exposure, y = textured (0/1), z = ibl (0/1), w unused.
    pub exposure_flags: [f32; 4],
}

impl FrameUniforms {
    pub fn capture(camera: &OrbitCamera, settings: &RenderSettings) -> Self {
        let p = camera.position();
        Self {
            view_proj: math::mat4_to_cols_array_2d(camera.view_projection_matrix()),
            skybox_view_proj: math::mat4_to_cols_array_2d(&camera.skybox_view_projection()),
            camera_pos: [p.x, p.y, p.z, 1.0],
            exposure_flags: [
                settings.exposure,
                flag(settings.textured),
                flag(settings.ibl),
                0.0,
            ],
        }
    }
}

fn flag(value: bool) -> f32 {
    if value { 1.0 } else { 0.0 }
}

/// Per-sphere instance data for instanced rendering.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereUniforms {
    pub model: [[f32; 4]; 4],
    pub normal_matrix: [[f32; 4]; 3],
    /// xyz = untextured albedo, w = ambient occlusion.
    pub albedo_ao: [f32; 4],
    /// x = metallic, y = roughness, zw = texture tiling.
    pub metallic_roughness_tiling: [f32; 4],
}

impl SphereUniforms {
    pub fn new(instance: &SphereInstance, settings: &RenderSettings) -> Self {
        let a = settings.albedo;
        let t = settings.tiling_factor;
        Self {
            model: math::mat4_to_cols_array_2d(&instance.model),
            normal_matrix: padded_mat3(&instance.normal_matrix),
            albedo_ao: [a.x, a.y, a.z, settings.ao],
            metallic_roughness_tiling: [instance.metallic, instance.roughness, t.x, t.y],
        }
    }
}

fn padded_mat3(m: &Mat3) -> [[f32; 4]; 3] {
    let c = math::mat3_to_cols_array_2d(m);
    [
        [c[0][0], c[0][1], c[0][2], 0.0],
        [c[1][0], c[1][1], c[1][2], 0.0],
        [c[2][0], c[2][1], c[2][2], 0.0],
    ]
}

/// Point light array matching the shader's fixed-size light block.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniforms {
    pub positions: [[f32; 4]; MAX_LIGHTS],
    pub colors: [[f32; 4]; MAX_LIGHTS],
    /// x = number of active lights.
    pub count: [u32; 4],
}

impl LightUniforms {
    pub fn new(rig: &LightRig) -> Self {
        let (positions, colors) = rig.uniform_arrays();
        Self {
            positions,
            colors,
            count: [rig.len() as u32, 0, 0, 0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::camera::Projection;
    use lumen_core::scene::SphereGrid;

    #[test]
    fn test_std140_sizes() {
        assert_eq!(std::mem::size_of::<FrameUniforms>(), 160);
        assert_eq!(std::mem::size_of::<SphereUniforms>(), 144);
        assert_eq!(std::mem::size_of::<LightUniforms>(), 144);
    }

    #[test]
    fn test_frame_uniforms_follow_camera() {
        let camera = OrbitCamera::new(Projection::default().matrix(1280, 720));
        let settings = RenderSettings::default();
        let u = FrameUniforms::capture(&camera, &settings);

        let p = camera.position();
        assert_eq!(u.camera_pos, [p.x, p.y, p.z, 1.0]);
        assert_eq!(
            u.view_proj,
            math::mat4_to_cols_array_2d(camera.view_projection_matrix())
        );
        assert_eq!(u.exposure_flags, [0.5, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_sphere_uniforms_carry_ramp() {
        let settings = RenderSettings::default();
        let instance = SphereGrid::default().instances()[8];
        let u = SphereUniforms::new(&instance, &settings);
        assert_eq!(u.metallic_roughness_tiling[0], instance.metallic);
        assert_eq!(u.metallic_roughness_tiling[1], instance.roughness);
        assert_eq!(&u.metallic_roughness_tiling[2..], &[9.0, 5.0]);
        assert_eq!(u.normal_matrix[0], [1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_light_uniforms_count() {
        let u = LightUniforms::new(&LightRig::default());
        assert_eq!(u.count[0], 4);
        assert_eq!(u.colors[0][0], 1000.0);
    }
}
