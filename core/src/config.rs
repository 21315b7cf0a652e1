//! Viewer configuration loaded from TOML.
//!
//! Every section is optional. A missing section falls back to the built-in
//! scene: 7x7 grid, four lights, and the camera nine units out on +Z looking
//! straight at the grid. Fields left out of a `[camera]` section take the
//! orbit camera's own defaults, see [`CameraPlacement`].
//!
//! ```toml
//! sphere_segments = 64
//!
//! [camera]
//! distance = 12.0
//! pitch = -0.5
//!
//! [projection]
//! kind = "perspective"
//! fov_y_degrees = 45.0
//! near = 0.1
//! far = 50000.0
//!
//! [[lights]]
//! position = [-10.0, 10.0, 10.0]
//! color = [1000.0, 1000.0, 1000.0]
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::camera::{CameraPlacement, MIN_DISTANCE, Projection};
use crate::ibl::IblSettings;
use crate::mesh::generators::MAX_SPHERE_SEGMENTS;
use crate::scene::{
    EXPOSURE_RANGE, LightRig, MAX_GRID_DIMENSION, MAX_LIGHTS, PointLight, RenderSettings, SphereGrid,
};

/// Starting orbit distance of the viewer.
const VIEWER_DISTANCE: f32 = 9.0;

/// Fewest sphere segments that still produce a closed solid.
const MIN_SPHERE_SEGMENTS: u32 = 3;

/// Errors from loading or validating a [`ViewerConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Full viewer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Longitudinal and latitudinal segment count of the sphere mesh.
    pub sphere_segments: u32,
    pub camera: CameraPlacement,
    pub projection: Projection,
    pub grid: SphereGrid,
    pub lights: Vec<PointLight>,
    pub render: RenderSettings,
    pub ibl: IblSettings,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            sphere_segments: 64,
            camera: CameraPlacement::level(VIEWER_DISTANCE),
            projection: Projection::default(),
            grid: SphereGrid::default(),
            lights: LightRig::default_lights(),
            render: RenderSettings::default(),
            ibl: IblSettings::default(),
        }
    }
}

impl ViewerConfig {
    /// Read, parse and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parse and validate config text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content, Path::new("<inline>"))
    }

    /// Load `path` if given, otherwise the defaults.
    ///
    /// Errors are logged and replaced by the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load(path) {
            Ok(config) => {
                log::info!(
                    "Loaded viewer config {} ({} lights, {}x{} grid)",
                    path.display(),
                    config.lights.len(),
                    config.grid.rows,
                    config.grid.columns
                );
                config
            }
            Err(e) => {
                log::warn!("{e}, using defaults");
                Self::default()
            }
        }
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        if self.lights.len() > MAX_LIGHTS {
            return invalid(format!(
                "{} lights configured, at most {MAX_LIGHTS} are supported",
                self.lights.len()
            ));
        }
        let grid_dimensions = 1..=MAX_GRID_DIMENSION;
        if !grid_dimensions.contains(&self.grid.rows) || !grid_dimensions.contains(&self.grid.columns) {
            return invalid(format!(
                "grid must have 1 to {MAX_GRID_DIMENSION} rows and columns, got {}x{}",
                self.grid.rows, self.grid.columns
            ));
        }
        if !(self.grid.spacing.is_finite() && self.grid.spacing > 0.0) {
            return invalid(format!("grid spacing must be positive, got {}", self.grid.spacing));
        }
        if !EXPOSURE_RANGE.contains(&self.render.exposure) {
            return invalid(format!(
                "exposure {} outside {:?}",
                self.render.exposure, EXPOSURE_RANGE
            ));
        }
        let (near, far) = self.projection.clip_planes();
        if !(near > 0.0 && near < far) {
            return invalid(format!("clip planes must satisfy 0 < near < far, got {near}..{far}"));
        }
        if self.camera.distance.is_nan() || self.camera.distance < MIN_DISTANCE {
            return invalid(format!(
                "camera distance must be at least {MIN_DISTANCE}, got {}",
                self.camera.distance
            ));
        }
        if !(MIN_SPHERE_SEGMENTS..=MAX_SPHERE_SEGMENTS).contains(&self.sphere_segments) {
            return invalid(format!(
                "sphere_segments must be in {MIN_SPHERE_SEGMENTS}..={MAX_SPHERE_SEGMENTS}, got {}",
                self.sphere_segments
            ));
        }
        let ibl = &self.ibl;
        if ibl.prefilter_mips == 0
            || [
                ibl.environment_size,
                ibl.irradiance_size,
                ibl.prefilter_size,
                ibl.brdf_lut_size,
            ]
            .contains(&0)
        {
            return invalid("IBL sizes and mip count must be non-zero".to_string());
        }
        Ok(())
    }

    /// Light rig built from [`Self::lights`].
    pub fn light_rig(&self) -> Result<LightRig, ConfigError> {
        LightRig::new(self.lights.clone())
    }

    /// Serialize back to TOML.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = ViewerConfig::from_toml_str("").unwrap();
        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn test_sections_override_defaults() {
        let config = ViewerConfig::from_toml_str(
            r#"
            sphere_segments = 32

            [grid]
            rows = 3

            [render]
            exposure = 1.5

            [[lights]]
            position = [0.0, 5.0, 0.0]
            color = [10.0, 10.0, 10.0]
            "#,
        )
        .unwrap();
        assert_eq!(config.sphere_segments, 32);
        assert_eq!(config.grid.rows, 3);
        assert_eq!(config.grid.columns, 7);
        assert_eq!(config.render.exposure, 1.5);
        assert_eq!(config.lights.len(), 1);
        assert_eq!(config.light_rig().unwrap().len(), 1);
    }

    #[test]
    fn test_too_many_lights() {
        let mut config = ViewerConfig::default();
        config.lights.push(config.lights[0]);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_invalid_values() {
        let cases = [
            "[grid]\nrows = 0",
            "[grid]\nrows = 70000\ncolumns = 70000",
            "[grid]\ncolumns = 257",
            "[grid]\nspacing = 0.0",
            "[render]\nexposure = 2.5",
            "[camera]\ndistance = 0.5",
            "[projection]\nkind = \"perspective\"\nfov_y_degrees = 45.0\nnear = 10.0\nfar = 1.0",
            "sphere_segments = 2",
            "sphere_segments = 70000",
            "sphere_segments = 1025",
            "[ibl]\nprefilter_mips = 0",
        ];
        for case in cases {
            let result = ViewerConfig::from_toml_str(case);
            assert!(matches!(result, Err(ConfigError::Invalid(_))), "{case}");
        }
    }

    #[test]
    fn test_accepts_largest_grid_and_sphere() {
        let config = ViewerConfig::from_toml_str(
            "sphere_segments = 1024\n[grid]\nrows = 256\ncolumns = 256",
        )
        .unwrap();
        assert_eq!(config.grid.len(), 65_536);
        assert_eq!(config.sphere_segments, MAX_SPHERE_SEGMENTS);
    }

    #[test]
    fn test_parse_error_names_source() {
        let err = ViewerConfig::from_toml_str("[grid\nrows = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("<inline>"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ViewerConfig::load(Path::new("/nonexistent/lumen.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert_eq!(
            ViewerConfig::load_or_default(Some(Path::new("/nonexistent/lumen.toml"))),
            ViewerConfig::default()
        );
    }

    #[test]
    fn test_toml_round_trip_of_defaults() {
        let text = ViewerConfig::default().to_toml_string().unwrap();
        assert_eq!(ViewerConfig::from_toml_str(&text).unwrap(), ViewerConfig::default());
    }
}
