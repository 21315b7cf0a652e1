//! Mesh generators for the shapes the PBR viewer draws.
//!
//! All generators produce [`MeshData`] with the interleaved [`MeshVertex`]
//! layout so one pipeline vertex layout covers every draw.

use std::f32::consts::PI;

use super::data::{MeshData, MeshVertex, PrimitiveTopology};

/// Largest sphere segment count per axis. Keeps the vertex grid around a
/// million vertices, well inside `u32` indices.
pub const MAX_SPHERE_SEGMENTS: u32 = 1024;

/// Generate a unit UV sphere as a single indexed triangle strip.
///
/// Vertices form a `(x_segments + 1) * (y_segments + 1)` grid running from
/// the north pole (`v = 0`) to the south pole (`v = 1`). Rows are stitched in
/// serpentine order (even rows left to right, odd rows right to left) so the
/// whole sphere is one strip of `2 * (x_segments + 1) * y_segments` indices.
///
/// Segment counts are clamped to `1..=MAX_SPHERE_SEGMENTS`.
pub fn generate_sphere_strip(x_segments: u32, y_segments: u32) -> MeshData {
    let x_segments = x_segments.clamp(1, MAX_SPHERE_SEGMENTS);
    let y_segments = y_segments.clamp(1, MAX_SPHERE_SEGMENTS);
    let row_len = x_segments + 1;

    let mut vertices = Vec::with_capacity(row_len as usize * (y_segments as usize + 1));
    for y in 0..=y_segments {
        let v = y as f32 / y_segments as f32;
        let (sin_theta, cos_theta) = (PI * v).sin_cos();

        for x in 0..=x_segments {
            let u = x as f32 / x_segments as f32;
            let (sin_phi, cos_phi) = (2.0 * PI * u).sin_cos();

            let position = [cos_phi * sin_theta, cos_theta, sin_phi * sin_theta];
            vertices.push(MeshVertex {
                position,
                normal: position,
                tangent: [-sin_phi, 0.0, cos_phi],
                uv: [u, v],
            });
        }
    }

    let mut indices = Vec::with_capacity(2 * row_len as usize * y_segments as usize);
    for y in 0..y_segments {
        let top = y * row_len;
        let bottom = (y + 1) * row_len;
        if y % 2 == 0 {
            for x in 0..=x_segments {
                indices.push(top + x);
                indices.push(bottom + x);
            }
        } else {
            for x in (0..=x_segments).rev() {
                indices.push(bottom + x);
                indices.push(top + x);
            }
        }
    }

    MeshData::new(vertices, PrimitiveTopology::TriangleStrip)
        .with_indices(indices)
        .with_label("sphere")
}

/// Face basis of the capture cube: (normal, u axis, v axis) with `u x v = normal`.
const CUBE_FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
    ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
    ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
    ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
    ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
];

/// Generate the `[-1, 1]^3` cube used for cubemap capture and the skybox.
///
/// 36 non-indexed vertices, counter-clockwise when seen from outside, with
/// flat face normals.
pub fn generate_cube() -> MeshData {
    // Corner order of the two triangles on each face, in (s, t) face coordinates.
    const CORNERS: [(f32, f32); 6] = [
        (-1.0, -1.0),
        (1.0, -1.0),
        (1.0, 1.0),
        (1.0, 1.0),
        (-1.0, 1.0),
        (-1.0, -1.0),
    ];

    let mut vertices = Vec::with_capacity(36);
    for (normal, u_axis, v_axis) in CUBE_FACES {
        for (s, t) in CORNERS {
            let position = std::array::from_fn(|i| normal[i] + s * u_axis[i] + t * v_axis[i]);
            vertices.push(MeshVertex {
                position,
                normal,
                tangent: u_axis,
                uv: [(s + 1.0) * 0.5, (t + 1.0) * 0.5],
            });
        }
    }

    MeshData::new(vertices, PrimitiveTopology::TriangleList).with_label("cube")
}

/// Generate a full-screen quad in NDC as a 4-vertex triangle strip.
///
/// UV (0, 0) is the bottom-left corner.
pub fn generate_fullscreen_quad() -> MeshData {
    let corner = |x: f32, y: f32| MeshVertex {
        position: [x, y, 0.0],
        normal: [0.0, 0.0, 1.0],
        tangent: [1.0, 0.0, 0.0],
        uv: [(x + 1.0) * 0.5, (y + 1.0) * 0.5],
    };
    let vertices = vec![
        corner(-1.0, 1.0),
        corner(-1.0, -1.0),
        corner(1.0, 1.0),
        corner(1.0, -1.0),
    ];

    MeshData::new(vertices, PrimitiveTopology::TriangleStrip).with_label("fullscreen_quad")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;

    fn v3(a: [f32; 3]) -> Vec3 {
        Vec3::from(a)
    }

    #[test]
    fn test_sphere_counts() {
        let mesh = generate_sphere_strip(64, 64);
        assert_eq!(mesh.vertex_count(), 65 * 65);
        assert_eq!(mesh.index_count(), 2 * 65 * 64);
        assert_eq!(mesh.topology(), PrimitiveTopology::TriangleStrip);
    }

    #[test]
    fn test_sphere_unit_radius_and_tangents() {
        let mesh = generate_sphere_strip(8, 4);
        for v in mesh.vertices() {
            assert!((v3(v.position).norm() - 1.0).abs() < 1e-5);
            assert_eq!(v.position, v.normal);
            assert!((v3(v.tangent).norm() - 1.0).abs() < 1e-5);
            assert!(v3(v.tangent).dot(&v3(v.normal)).abs() < 1e-5);
        }
        // Pole at v = 0.
        assert!((mesh.vertices()[0].position[1] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_sphere_serpentine_order() {
        let mesh = generate_sphere_strip(2, 2);
        // Row 0 forward, row 1 reversed; row length 3.
        assert_eq!(mesh.indices(), &[0, 3, 1, 4, 2, 5, 8, 5, 7, 4, 6, 3]);
        assert!(mesh.indices().iter().all(|&i| i < mesh.vertex_count()));
    }

    #[test]
    fn test_sphere_clamps_zero_segments() {
        let mesh = generate_sphere_strip(0, 0);
        assert_eq!(mesh.vertex_count(), 4);
        assert!(mesh.vertices().iter().all(|v| v.position.iter().all(|c| c.is_finite())));
    }

    #[test]
    fn test_sphere_clamps_oversized_segments() {
        let mesh = generate_sphere_strip(70_000, 1);
        let row_len = MAX_SPHERE_SEGMENTS + 1;
        assert_eq!(mesh.vertex_count(), row_len * 2);
        assert_eq!(mesh.index_count(), 2 * row_len);
    }

    #[test]
    fn test_cube_faces_point_outward() {
        let mesh = generate_cube();
        assert_eq!(mesh.vertex_count(), 36);
        assert!(!mesh.is_indexed());
        for tri in mesh.vertices().chunks(3) {
            let (a, b, c) = (v3(tri[0].position), v3(tri[1].position), v3(tri[2].position));
            let face_normal = (b - a).cross(&(c - a)).normalize();
            assert!((face_normal - v3(tri[0].normal)).norm() < 1e-5);
            for v in tri {
                assert!(v.position.iter().all(|c| c.abs() == 1.0));
            }
        }
    }

    #[test]
    fn test_fullscreen_quad() {
        let mesh = generate_fullscreen_quad();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.vertices()[1].uv, [0.0, 0.0]);
        assert_eq!(mesh.vertices()[2].uv, [1.0, 1.0]);
    }
}
