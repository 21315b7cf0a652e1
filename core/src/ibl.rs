//! Image-based lighting precompute description.
//!
//! The renderer converts the equirectangular HDR environment into a cubemap,
//! convolves it into an irradiance map, prefilters a specular mip chain and
//! integrates the BRDF lookup table. This module holds everything about that
//! pipeline that is not GPU work: target sizes, the six capture views, the
//! capture projection and the per-mip roughness.

use serde::{Deserialize, Serialize};

use crate::math::{self, Mat4, Vec3};

/// Vertical field of view of a cube-face capture.
pub const CAPTURE_FOV_Y: f32 = std::f32::consts::FRAC_PI_2;
pub const CAPTURE_NEAR: f32 = 0.1;
pub const CAPTURE_FAR: f32 = 10.0;

/// Cubemap face in the order of the GL face enumerants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CubeFace {
    PositiveX,
    NegativeX,
    PositiveY,
    NegativeY,
    PositiveZ,
    NegativeZ,
}

impl CubeFace {
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PositiveX,
        CubeFace::NegativeX,
        CubeFace::PositiveY,
        CubeFace::NegativeY,
        CubeFace::PositiveZ,
        CubeFace::NegativeZ,
    ];

    /// Layer index of the face in a cube texture.
    pub fn index(self) -> u32 {
        self as u32
    }

    /// Direction the capture camera looks along.
    pub fn direction(self) -> Vec3 {
        match self {
            CubeFace::PositiveX => Vec3::x(),
            CubeFace::NegativeX => -Vec3::x(),
            CubeFace::PositiveY => Vec3::y(),
            CubeFace::NegativeY => -Vec3::y(),
            CubeFace::PositiveZ => Vec3::z(),
            CubeFace::NegativeZ => -Vec3::z(),
        }
    }

    /// Capture camera up vector. Cubemap faces are stored upside down, so
    /// the side faces use `-Y` and the poles use `±Z`.
    pub fn up(self) -> Vec3 {
        match self {
            CubeFace::PositiveY => Vec3::z(),
            CubeFace::NegativeY => -Vec3::z(),
            _ => -Vec3::y(),
        }
    }

    /// View matrix looking from the origin through this face.
    pub fn view(self) -> Mat4 {
        math::look_at_rh(&Vec3::zeros(), &self.direction(), &self.up())
    }

    /// World direction through the centre of texel (`x`, `y`) of a `size` x `size` face.
    pub fn texel_direction(self, x: u32, y: u32, size: u32) -> Vec3 {
        let u = (x as f32 + 0.5) / size as f32 * 2.0 - 1.0;
        let v = (y as f32 + 0.5) / size as f32 * 2.0 - 1.0;

        let dir = match self {
            CubeFace::PositiveX => Vec3::new(1.0, -v, -u),
            CubeFace::NegativeX => Vec3::new(-1.0, -v, u),
            CubeFace::PositiveY => Vec3::new(u, 1.0, v),
            CubeFace::NegativeY => Vec3::new(u, -1.0, -v),
            CubeFace::PositiveZ => Vec3::new(u, -v, 1.0),
            CubeFace::NegativeZ => Vec3::new(-u, -v, -1.0),
        };

        dir.normalize()
    }
}

/// View matrices for the six faces, in [`CubeFace::ALL`] order.
pub fn capture_views() -> [Mat4; 6] {
    CubeFace::ALL.map(CubeFace::view)
}

/// 90 degree square projection used for every face capture.
pub fn capture_projection() -> Mat4 {
    math::perspective_gl(CAPTURE_FOV_Y, 1.0, CAPTURE_NEAR, CAPTURE_FAR)
}

/// Target resolutions of the precomputed maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IblSettings {
    /// Face size of the environment cubemap.
    pub environment_size: u32,
    /// Face size of the diffuse irradiance cubemap.
    pub irradiance_size: u32,
    /// Face size of mip 0 of the prefiltered specular cubemap.
    pub prefilter_size: u32,
    pub prefilter_mips: u32,
    pub brdf_lut_size: u32,
}

impl Default for IblSettings {
    fn default() -> Self {
        Self {
            environment_size: 512,
            irradiance_size: 32,
            prefilter_size: 256,
            prefilter_mips: 5,
            brdf_lut_size: 512,
        }
    }
}

/// One level of the prefiltered specular chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrefilterMip {
    pub level: u32,
    pub size: u32,
    pub roughness: f32,
}

impl IblSettings {
    /// Mip levels from sharp (roughness 0) to fully rough (roughness 1).
    pub fn prefilter_mip_chain(&self) -> Vec<PrefilterMip> {
        let last = self.prefilter_mips.saturating_sub(1);
        (0..self.prefilter_mips)
            .map(|level| PrefilterMip {
                level,
                size: self.prefilter_size.checked_shr(level).unwrap_or(0).max(1),
                roughness: if last == 0 {
                    0.0
                } else {
                    level as f32 / last as f32
                },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_capture_views_look_along_faces() {
        for (face, view) in CubeFace::ALL.iter().zip(capture_views()) {
            let d = view.transform_vector(&face.direction());
            assert!((d - Vec3::new(0.0, 0.0, -1.0)).norm() < 1e-5, "{face:?}");
            let up = view.transform_vector(&face.up());
            assert!((up - Vec3::y()).norm() < 1e-5, "{face:?}");
        }
    }

    #[test]
    fn test_capture_views_are_at_origin() {
        for view in capture_views() {
            let origin = view.transform_point(&Vec3::zeros().into());
            assert!(origin.coords.norm() < 1e-6);
        }
    }

    #[test]
    fn test_capture_projection_is_square_90() {
        let p = capture_projection();
        assert!((p[(0, 0)] - 1.0).abs() < 1e-5);
        assert!((p[(1, 1)] - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_texel_direction_centre_matches_face() {
        for face in CubeFace::ALL {
            let d = face.texel_direction(1, 1, 3);
            assert!((d - face.direction()).norm() < 1e-5, "{face:?}");
        }
    }

    #[rstest]
    #[case(0, 256, 0.0)]
    #[case(1, 128, 0.25)]
    #[case(2, 64, 0.5)]
    #[case(3, 32, 0.75)]
    #[case(4, 16, 1.0)]
    fn test_default_mip_chain(#[case] level: u32, #[case] size: u32, #[case] roughness: f32) {
        let chain = IblSettings::default().prefilter_mip_chain();
        assert_eq!(chain.len(), 5);
        let mip = chain[level as usize];
        assert_eq!(mip.level, level);
        assert_eq!(mip.size, size);
        assert!((mip.roughness - roughness).abs() < 1e-6);
    }

    #[test]
    fn test_mip_chain_edge_cases() {
        let single = IblSettings {
            prefilter_mips: 1,
            ..Default::default()
        };
        assert_eq!(single.prefilter_mip_chain()[0].roughness, 0.0);

        let deep = IblSettings {
            prefilter_size: 4,
            prefilter_mips: 6,
            ..Default::default()
        };
        let sizes: Vec<u32> = deep.prefilter_mip_chain().iter().map(|m| m.size).collect();
        assert_eq!(sizes, vec![4, 2, 1, 1, 1, 1]);
    }
}
