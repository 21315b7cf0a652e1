//! Projection descriptions that can be rebuilt for any viewport size.

use serde::{Deserialize, Serialize};

use crate::math::{self, Mat4};

/// How the viewer builds its projection matrix.
///
/// The camera itself only stores a matrix; this is the recipe the viewer
/// re-evaluates on every resize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Projection {
    /// Perspective with a vertical field of view.
    Perspective {
        fov_y_degrees: f32,
        near: f32,
        far: f32,
    },
    /// Orthographic with a fixed view height; width follows the aspect ratio.
    Orthographic { height: f32, near: f32, far: f32 },
}

impl Projection {
    /// Clip planes `(near, far)`.
    pub fn clip_planes(&self) -> (f32, f32) {
        match *self {
            Self::Perspective { near, far, .. } | Self::Orthographic { near, far, .. } => {
                (near, far)
            }
        }
    }

    /// OpenGL-convention matrix for a `width` x `height` viewport.
    pub fn matrix(&self, width: u32, height: u32) -> Mat4 {
        let (w, h) = (width as f32, height as f32);
        match *self {
            Self::Perspective {
                fov_y_degrees,
                near,
                far,
            } => math::perspective_fov_gl(fov_y_degrees.to_radians(), w, h, near, far),
            Self::Orthographic {
                height: view_height,
                near,
                far,
            } => {
                let aspect = if w > 0.0 && h > 0.0 { w / h } else { 1.0 };
                let half_h = view_height / 2.0;
                let half_w = half_h * aspect;
                math::orthographic_gl(-half_w, half_w, -half_h, half_h, near, far)
            }
        }
    }
}

impl Default for Projection {
    /// 45 degree perspective with a deep far plane for the skybox.
    fn default() -> Self {
        Self::Perspective {
            fov_y_degrees: 45.0,
            near: 0.1,
            far: 50000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_perspective_matches_helper() {
        let m = Projection::default().matrix(1280, 720);
        let expected = math::perspective_fov_gl(45f32.to_radians(), 1280.0, 720.0, 0.1, 50000.0);
        assert!((m - expected).norm() < 1e-6);
    }

    #[test]
    fn orthographic_width_follows_aspect() {
        let m = Projection::Orthographic {
            height: 10.0,
            near: 0.1,
            far: 100.0,
        }
        .matrix(200, 100);
        // half width = 10, half height = 5
        assert!((m[(0, 0)] - 0.1).abs() < 1e-6);
        assert!((m[(1, 1)] - 0.2).abs() < 1e-6);
    }

    #[test]
    fn parses_tagged_toml() {
        let p: Projection =
            toml::from_str("kind = \"perspective\"\nfov_y_degrees = 60.0\nnear = 0.5\nfar = 10.0")
                .unwrap();
        assert_eq!(p.clip_planes(), (0.5, 10.0));
    }
}
