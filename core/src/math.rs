//! Math type aliases and helper functions.
//!
//! All rendering math is `f32`. Matrices are column-major and right-handed;
//! the `_gl` projections map depth to `[-1, 1]`, the `_rh` ones to `[0, 1]`.

pub use nalgebra;

/// 2D vector (f32).
pub type Vec2 = nalgebra::Vector2<f32>;

/// 3D vector (f32).
pub type Vec3 = nalgebra::Vector3<f32>;

/// 4D vector (f32).
pub type Vec4 = nalgebra::Vector4<f32>;

/// 3x3 matrix (f32).
pub type Mat3 = nalgebra::Matrix3<f32>;

/// 4x4 matrix (f32).
pub type Mat4 = nalgebra::Matrix4<f32>;

/// Unit quaternion (f32).
pub type Quat = nalgebra::UnitQuaternion<f32>;

/// Orientation with no roll: pitch about X applied first, then yaw about Y.
///
/// Equivalent to building a quaternion from the Euler angles
/// `(pitch, yaw, 0)` in XYZ order.
pub fn quat_from_pitch_yaw(pitch: f32, yaw: f32) -> Quat {
    let yaw_q = Quat::from_axis_angle(&nalgebra::Vector3::y_axis(), yaw);
    let pitch_q = Quat::from_axis_angle(&nalgebra::Vector3::x_axis(), pitch);
    yaw_q * pitch_q
}

/// Rotate a vector by a quaternion.
pub fn quat_rotate_vec3(q: &Quat, v: Vec3) -> Vec3 {
    q * v
}

/// Build a translation-only 4x4 matrix.
pub fn mat4_from_translation(t: Vec3) -> Mat4 {
    Mat4::new_translation(&t)
}

/// Build a translation followed by a uniform scale (`translate(t) * scale(s)`).
pub fn mat4_from_translation_scale(t: Vec3, scale: f32) -> Mat4 {
    Mat4::new_translation(&t) * Mat4::new_scaling(scale)
}

/// Build `translate(t) * rotate(q)`.
pub fn mat4_from_rotation_translation(rotation: &Quat, translation: Vec3) -> Mat4 {
    Mat4::new_translation(&translation) * rotation.to_homogeneous()
}

/// Inverse of `translate(t) * rotate(q)`.
///
/// Computed as an isometry inverse, so it is exact up to rounding and never
/// fails.
pub fn rigid_inverse(rotation: &Quat, translation: Vec3) -> Mat4 {
    nalgebra::Isometry3::from_parts(nalgebra::Translation3::from(translation), *rotation)
        .inverse()
        .to_homogeneous()
}

/// Build a right-handed perspective projection with depth range [-1, 1] (OpenGL convention).
pub fn perspective_gl(yfov: f32, aspect: f32, znear: f32, zfar: f32) -> Mat4 {
    let f = 1.0 / (yfov / 2.0).tan();
    let nf = 1.0 / (znear - zfar);
    #[rustfmt::skip]
    let result = Mat4::new(
        f / aspect, 0.0,  0.0,                   0.0,
        0.0,        f,    0.0,                   0.0,
        0.0,        0.0,  (zfar + znear) * nf,   2.0 * zfar * znear * nf,
        0.0,        0.0,  -1.0,                  0.0,
    );
    result
}

/// Perspective projection from a vertical field of view and viewport size.
///
/// A zero-height viewport (minimised window) falls back to an aspect of 1.
pub fn perspective_fov_gl(yfov: f32, width: f32, height: f32, znear: f32, zfar: f32) -> Mat4 {
    let aspect = if height > 0.0 && width > 0.0 {
        width / height
    } else {
        1.0
    };
    perspective_gl(yfov, aspect, znear, zfar)
}

/// Build a right-handed perspective projection with depth range [0, 1] (wgpu/Vulkan convention).
pub fn perspective_rh(yfov: f32, aspect: f32, znear: f32, zfar: f32) -> Mat4 {
    let f = 1.0 / (yfov / 2.0).tan();
    let nf = 1.0 / (znear - zfar);
    #[rustfmt::skip]
    let result = Mat4::new(
        f / aspect, 0.0,  0.0,              0.0,
        0.0,        f,    0.0,              0.0,
        0.0,        0.0,  zfar * nf,        znear * zfar * nf,
        0.0,        0.0,  -1.0,             0.0,
    );
    result
}

/// Build a right-handed orthographic projection with depth range [-1, 1] (OpenGL convention).
pub fn orthographic_gl(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let rml = right - left;
    let tmb = top - bottom;
    let fmn = far - near;
    #[rustfmt::skip]
    let result = Mat4::new(
        2.0 / rml, 0.0,       0.0,         -(right + left) / rml,
        0.0,       2.0 / tmb, 0.0,         -(top + bottom) / tmb,
        0.0,       0.0,       -2.0 / fmn,  -(far + near) / fmn,
        0.0,       0.0,       0.0,          1.0,
    );
    result
}

/// Build a right-handed orthographic projection with depth range [0, 1] (wgpu/Vulkan convention).
pub fn orthographic_rh(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let rml = right - left;
    let tmb = top - bottom;
    let fmn = far - near;
    #[rustfmt::skip]
    let result = Mat4::new(
        2.0 / rml, 0.0,       0.0,         -(right + left) / rml,
        0.0,       2.0 / tmb, 0.0,         -(top + bottom) / tmb,
        0.0,       0.0,       -1.0 / fmn,  -near / fmn,
        0.0,       0.0,       0.0,          1.0,
    );
    result
}

/// Right-handed look-at view matrix.
pub fn look_at_rh(eye: &Vec3, target: &Vec3, up: &Vec3) -> Mat4 {
    let eye_point = nalgebra::Point3::from(*eye);
    let target_point = nalgebra::Point3::from(*target);
    nalgebra::Isometry3::look_at_rh(&eye_point, &target_point, up).to_homogeneous()
}

/// Normal matrix for a model matrix: `transpose(inverse(mat3(model)))`.
///
/// Singular models (zero scale) yield the identity.
pub fn normal_matrix(model: &Mat4) -> Mat3 {
    let upper: Mat3 = model.fixed_view::<3, 3>(0, 0).into_owned();
    upper
        .try_inverse()
        .map(|inv| inv.transpose())
        .unwrap_or_else(Mat3::identity)
}

/// Drop the translation of a view matrix (`mat4(mat3(view))`).
///
/// Used for skybox rendering where the environment must follow the camera.
pub fn strip_translation(m: &Mat4) -> Mat4 {
    let upper: Mat3 = m.fixed_view::<3, 3>(0, 0).into_owned();
    upper.to_homogeneous()
}

/// Convert a 4x4 matrix to a column-major `[[f32; 4]; 4]` array.
pub fn mat4_to_cols_array_2d(m: &Mat4) -> [[f32; 4]; 4] {
    let s = m.as_slice();
    [
        [s[0], s[1], s[2], s[3]],
        [s[4], s[5], s[6], s[7]],
        [s[8], s[9], s[10], s[11]],
        [s[12], s[13], s[14], s[15]],
    ]
}

/// Convert a 3x3 matrix to a column-major `[[f32; 3]; 3]` array.
pub fn mat3_to_cols_array_2d(m: &Mat3) -> [[f32; 3]; 3] {
    let s = m.as_slice();
    [[s[0], s[1], s[2]], [s[3], s[4], s[5]], [s[6], s[7], s[8]]]
}
