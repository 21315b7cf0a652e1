//! Non-interactive camera placement.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use crate::math::Vec3;

/// Orbit parameters that fully determine a camera pose.
///
/// Used for scripted shots and for the `[camera]` section of the viewer
/// config. Angles are in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraPlacement {
    pub focal_point: Vec3,
    pub distance: f32,
    pub pitch: f32,
    pub yaw: f32,
}

impl CameraPlacement {
    /// Placement looking at the origin from `distance`, with level angles.
    pub fn level(distance: f32) -> Self {
        Self {
            focal_point: Vec3::zeros(),
            distance,
            pitch: 0.0,
            yaw: 0.0,
        }
    }
}

impl Default for CameraPlacement {
    /// Above, behind and to the right of the origin, looking at it.
    fn default() -> Self {
        Self {
            focal_point: Vec3::zeros(),
            distance: 9.0,
            pitch: -PI / 4.0,
            yaw: -3.0 * PI / 4.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_orbit_start() {
        let p = CameraPlacement::default();
        assert_eq!(p.distance, 9.0);
        assert_eq!(p.focal_point, Vec3::zeros());
        assert!((p.pitch + PI / 4.0).abs() < f32::EPSILON);
        assert!((p.yaw + 3.0 * PI / 4.0).abs() < f32::EPSILON);
    }

    #[test]
    fn parses_partial_toml() {
        let p: CameraPlacement = toml::from_str("distance = 12.0\nyaw = 0.5").unwrap();
        assert_eq!(p.distance, 12.0);
        assert_eq!(p.yaw, 0.5);
        assert!((p.pitch + PI / 4.0).abs() < f32::EPSILON);
    }

    #[test]
    fn parses_focal_point_array() {
        let p: CameraPlacement = toml::from_str("focal_point = [1.0, 2.0, 3.0]").unwrap();
        assert_eq!(p.focal_point, Vec3::new(1.0, 2.0, 3.0));
    }
}
