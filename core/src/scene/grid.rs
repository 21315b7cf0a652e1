//! Sphere grid layout.

use serde::{Deserialize, Serialize};

use crate::math::{self, Mat3, Mat4, Vec3};

/// Lowest roughness the untextured ramp produces. Zero roughness makes the
/// specular lobe degenerate.
const MIN_RAMP_ROUGHNESS: f32 = 0.05;

/// Largest accepted row or column count.
pub const MAX_GRID_DIMENSION: u32 = 256;

/// A `rows` x `columns` grid of spheres in the XY plane, centred on the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereGrid {
    pub rows: u32,
    pub columns: u32,
    pub spacing: f32,
}

impl Default for SphereGrid {
    fn default() -> Self {
        Self {
            rows: 7,
            columns: 7,
            spacing: 2.5,
        }
    }
}

/// One sphere of the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereInstance {
    pub row: u32,
    pub column: u32,
    pub model: Mat4,
    pub normal_matrix: Mat3,
    /// Untextured metallic value (`row / rows`).
    pub metallic: f32,
    /// Untextured roughness value (`column / columns`, at least 0.05).
    pub roughness: f32,
}

impl SphereGrid {
    pub fn len(&self) -> usize {
        self.rows as usize * self.columns as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Translation of the sphere at (`row`, `column`).
    ///
    /// The centering offset uses integer division, so even grid sizes sit
    /// half a cell off centre.
    pub fn position(&self, row: u32, column: u32) -> Vec3 {
        let x = column as i64 - (self.columns / 2) as i64;
        let y = row as i64 - (self.rows / 2) as i64;
        Vec3::new(x as f32 * self.spacing, y as f32 * self.spacing, 0.0)
    }

    /// Material ramp for (`row`, `column`): `(metallic, roughness)`.
    pub fn material(&self, row: u32, column: u32) -> (f32, f32) {
        let metallic = row as f32 / self.rows as f32;
        let roughness = (column as f32 / self.columns as f32).clamp(MIN_RAMP_ROUGHNESS, 1.0);
        (metallic, roughness)
    }

    /// All instances, row-major.
    pub fn instances(&self) -> Vec<SphereInstance> {
        let mut instances = Vec::with_capacity(self.len());
        for row in 0..self.rows {
            for column in 0..self.columns {
                let model = math::mat4_from_translation(self.position(row, column));
                let (metallic, roughness) = self.material(row, column);
                instances.push(SphereInstance {
                    row,
                    column,
                    normal_matrix: math::normal_matrix(&model),
                    model,
                    metallic,
                    roughness,
                });
            }
        }
        instances
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_is_centred() {
        let grid = SphereGrid::default();
        let instances = grid.instances();
        assert_eq!(instances.len(), 49);
        assert_eq!(grid.position(3, 3), Vec3::zeros());
        assert_eq!(grid.position(0, 0), Vec3::new(-7.5, -7.5, 0.0));
        assert_eq!(grid.position(6, 6), Vec3::new(7.5, 7.5, 0.0));
    }

    #[test]
    fn test_even_grid_offset_uses_integer_division() {
        let grid = SphereGrid {
            rows: 2,
            columns: 4,
            spacing: 1.0,
        };
        assert_eq!(grid.position(0, 0), Vec3::new(-2.0, -1.0, 0.0));
        assert_eq!(grid.position(1, 3), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_material_ramp() {
        let grid = SphereGrid::default();
        let (metallic, roughness) = grid.material(0, 0);
        assert_eq!(metallic, 0.0);
        assert_eq!(roughness, MIN_RAMP_ROUGHNESS);

        let (metallic, roughness) = grid.material(6, 6);
        assert!((metallic - 6.0 / 7.0).abs() < 1e-6);
        assert!((roughness - 6.0 / 7.0).abs() < 1e-6);
    }

    #[test]
    fn test_instance_matrices() {
        let instances = SphereGrid::default().instances();
        let last = instances.last().unwrap();
        assert_eq!((last.row, last.column), (6, 6));
        assert_eq!(last.model[(0, 3)], 7.5);
        assert!((last.normal_matrix - Mat3::identity()).norm() < 1e-6);
    }

    #[test]
    fn test_len_of_oversized_grid_does_not_overflow() {
        let grid = SphereGrid {
            rows: 70_000,
            columns: 70_000,
            spacing: 1.0,
        };
        assert_eq!(grid.len(), 4_900_000_000);
        assert!(!grid.is_empty());
    }
}
