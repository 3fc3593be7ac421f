//! Small, deterministic vector and matrix types for 3D transforms.
//!
//! Everything here is plain value semantics: no SIMD, no interior
//! mutability, no caching. The conventions are pinned once and used
//! everywhere in the crate:
//!
//! - Right-handed coordinates, +Y up.
//! - [`Mat4`] is stored **column-major** (`m[col][row]`) and multiplies
//!   column vectors on the right (`p' = M * p`), so composition reads
//!   right-to-left.
//! - Depth maps into the OpenGL `[-1, 1]` clip range.
//!
//! Normalizing a zero-length vector returns the zero vector rather than
//! NaN; callers that care must guard upstream.

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 2D vector, used for UV coordinates and pointer positions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(v: [f32; 2]) -> Self {
        Self::new(v[0], v[1])
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(v: Vec2) -> Self {
        v.to_array()
    }
}

/// A 3D vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// All three components set to `v`.
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns a unit-length copy, or [`Vec3::ZERO`] if the vector has
    /// zero length.
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len > 0.0 { self / len } else { Self::ZERO }
    }

    pub fn min(self, rhs: Self) -> Self {
        Self::new(self.x.min(rhs.x), self.y.min(rhs.y), self.z.min(rhs.z))
    }

    pub fn max(self, rhs: Self) -> Self {
        Self::new(self.x.max(rhs.x), self.y.max(rhs.y), self.z.max(rhs.z))
    }

    /// Extends to a [`Vec4`] with the given w component.
    pub const fn extend(self, w: f32) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, w)
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}

impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(v: [f32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

/// A 4D vector, used for homogeneous coordinates in matrix products.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    /// Drops the w component.
    pub const fn truncate(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

/// A 4×4 matrix, stored column-major (`m[col][row]`).
///
/// Multiplies column vectors on the right, so `(a * b).transform_point(p)`
/// applies `b` first, then `a`. [`Mat4::to_cols_array`] yields the flat
/// column-major `[f32; 16]` layout shader uniforms expect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    pub m: [[f32; 4]; 4],
}

impl Mat4 {
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    pub const fn from_cols(m: [[f32; 4]; 4]) -> Self {
        Self { m }
    }

    /// Flat column-major array, ready for uniform upload.
    pub fn to_cols_array(self) -> [f32; 16] {
        let mut out = [0.0; 16];
        for (c, col) in self.m.iter().enumerate() {
            out[c * 4..c * 4 + 4].copy_from_slice(col);
        }
        out
    }

    /// Translation by `t`.
    pub fn translation(t: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m.m[3][0] = t.x;
        m.m[3][1] = t.y;
        m.m[3][2] = t.z;
        m
    }

    /// Non-uniform scale along the coordinate axes.
    pub fn scaling(s: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m.m[0][0] = s.x;
        m.m[1][1] = s.y;
        m.m[2][2] = s.z;
        m
    }

    /// Rotation around the X axis (pitch), angle in radians.
    pub fn rotation_x(rad: f32) -> Self {
        let (s, c) = rad.sin_cos();
        let mut m = Self::IDENTITY;
        m.m[1][1] = c;
        m.m[1][2] = s;
        m.m[2][1] = -s;
        m.m[2][2] = c;
        m
    }

    /// Rotation around the Y axis (yaw), angle in radians.
    pub fn rotation_y(rad: f32) -> Self {
        let (s, c) = rad.sin_cos();
        let mut m = Self::IDENTITY;
        m.m[0][0] = c;
        m.m[0][2] = -s;
        m.m[2][0] = s;
        m.m[2][2] = c;
        m
    }

    /// Rotation around the Z axis (roll), angle in radians.
    pub fn rotation_z(rad: f32) -> Self {
        let (s, c) = rad.sin_cos();
        let mut m = Self::IDENTITY;
        m.m[0][0] = c;
        m.m[0][1] = s;
        m.m[1][0] = -s;
        m.m[1][1] = c;
        m
    }

    /// Right-handed look-at view matrix.
    ///
    /// Maps world space into a camera space where the camera sits at the
    /// origin looking down −Z. Degenerate when `eye == target` or the
    /// forward direction is parallel to `up`; callers must avoid both.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let f = (target - eye).normalize();
        let s = f.cross(up).normalize();
        let u = s.cross(f);

        Self::from_cols([
            [s.x, u.x, -f.x, 0.0],
            [s.y, u.y, -f.y, 0.0],
            [s.z, u.z, -f.z, 0.0],
            [-s.dot(eye), -u.dot(eye), f.dot(eye), 1.0],
        ])
    }

    /// Right-handed perspective projection with `[-1, 1]` clip depth.
    ///
    /// `fov_y` is the full vertical field of view in radians. Clip-space w
    /// equals the negated view-space z, the standard perspective-divide
    /// contract.
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fov_y * 0.5).tan();
        Self::from_cols([
            [f / aspect, 0.0, 0.0, 0.0],
            [0.0, f, 0.0, 0.0],
            [0.0, 0.0, (far + near) / (near - far), -1.0],
            [0.0, 0.0, (2.0 * far * near) / (near - far), 0.0],
        ])
    }

    /// Right-handed orthographic projection with `[-1, 1]` clip depth.
    ///
    /// `height` is the full vertical extent of the frustum; the width is
    /// `height * aspect`.
    pub fn orthographic(height: f32, aspect: f32, near: f32, far: f32) -> Self {
        let half_h = height * 0.5;
        let half_w = half_h * aspect;
        Self::from_cols([
            [1.0 / half_w, 0.0, 0.0, 0.0],
            [0.0, 1.0 / half_h, 0.0, 0.0],
            [0.0, 0.0, -2.0 / (far - near), 0.0],
            [0.0, 0.0, -(far + near) / (far - near), 1.0],
        ])
    }

    /// Transforms a point as a position (w = 1), without the perspective
    /// divide. Exact for affine matrices.
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        (*self * p.extend(1.0)).truncate()
    }

    /// Transforms a direction (w = 0), ignoring translation.
    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        (*self * v.extend(0.0)).truncate()
    }

    /// Transforms a point and applies the perspective divide.
    pub fn project_point(&self, p: Vec3) -> Vec3 {
        let h = *self * p.extend(1.0);
        h.truncate() / h.w
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Mat4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut out = [[0.0; 4]; 4];
        for (c, col) in out.iter_mut().enumerate() {
            for (r, cell) in col.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.m[k][r] * rhs.m[c][k]).sum();
            }
        }
        Self::from_cols(out)
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, v: Vec4) -> Vec4 {
        let a = v.to_array();
        let mut out = [0.0; 4];
        for (r, cell) in out.iter_mut().enumerate() {
            *cell = (0..4).map(|c| self.m[c][r] * a[c]).sum();
        }
        Vec4::new(out[0], out[1], out[2], out[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_vec3_eq(a: Vec3, b: Vec3) {
        assert!(
            (a - b).length() < EPS,
            "expected {b:?}, got {a:?} (diff {})",
            (a - b).length()
        );
    }

    fn assert_mat_eq(ours: Mat4, reference: glam::Mat4) {
        let a = ours.to_cols_array();
        let b = reference.to_cols_array();
        for i in 0..16 {
            assert!(
                (a[i] - b[i]).abs() < EPS,
                "element {i}: ours {} vs glam {}",
                a[i],
                b[i]
            );
        }
    }

    #[test]
    fn cross_follows_right_hand_rule() {
        assert_vec3_eq(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_vec3_eq(Vec3::Y.cross(Vec3::Z), Vec3::X);
        assert_vec3_eq(Vec3::Z.cross(Vec3::X), Vec3::Y);
    }

    #[test]
    fn normalize_zero_returns_zero() {
        assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
    }

    #[test]
    fn normalize_preserves_direction() {
        let v = Vec3::new(3.0, 0.0, 4.0).normalize();
        assert!((v.length() - 1.0).abs() < EPS);
        assert_vec3_eq(v, Vec3::new(0.6, 0.0, 0.8));
    }

    #[test]
    fn identity_is_multiplicative_identity() {
        let m = Mat4::translation(Vec3::new(1.0, 2.0, 3.0)) * Mat4::rotation_y(0.7);
        assert_eq!(m * Mat4::IDENTITY, m);
        assert_eq!(Mat4::IDENTITY * m, m);
    }

    #[test]
    fn translation_moves_points_not_vectors() {
        let m = Mat4::translation(Vec3::new(1.0, 2.0, 3.0));
        assert_vec3_eq(m.transform_point(Vec3::ZERO), Vec3::new(1.0, 2.0, 3.0));
        assert_vec3_eq(m.transform_vector(Vec3::X), Vec3::X);
    }

    #[test]
    fn rotation_z_turns_x_toward_y() {
        let m = Mat4::rotation_z(std::f32::consts::FRAC_PI_2);
        assert_vec3_eq(m.transform_point(Vec3::X), Vec3::Y);
    }

    #[test]
    fn rotation_matrices_match_glam() {
        let rad = 0.83;
        assert_mat_eq(Mat4::rotation_x(rad), glam::Mat4::from_rotation_x(rad));
        assert_mat_eq(Mat4::rotation_y(rad), glam::Mat4::from_rotation_y(rad));
        assert_mat_eq(Mat4::rotation_z(rad), glam::Mat4::from_rotation_z(rad));
    }

    #[test]
    fn composition_matches_glam() {
        let ours = Mat4::translation(Vec3::new(1.0, -2.0, 0.5))
            * Mat4::rotation_y(1.1)
            * Mat4::scaling(Vec3::new(2.0, 2.0, 2.0));
        let reference = glam::Mat4::from_translation(glam::Vec3::new(1.0, -2.0, 0.5))
            * glam::Mat4::from_rotation_y(1.1)
            * glam::Mat4::from_scale(glam::Vec3::splat(2.0));
        assert_mat_eq(ours, reference);
    }

    #[test]
    fn look_at_matches_glam() {
        let ours = Mat4::look_at(
            Vec3::new(2.0, 3.0, 5.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::Y,
        );
        let reference = glam::Mat4::look_at_rh(
            glam::Vec3::new(2.0, 3.0, 5.0),
            glam::Vec3::new(0.0, 1.0, 0.0),
            glam::Vec3::Y,
        );
        assert_mat_eq(ours, reference);
    }

    #[test]
    fn perspective_matches_glam_gl() {
        let fov = 60.0_f32.to_radians();
        assert_mat_eq(
            Mat4::perspective(fov, 16.0 / 9.0, 0.1, 100.0),
            glam::Mat4::perspective_rh_gl(fov, 16.0 / 9.0, 0.1, 100.0),
        );
    }

    #[test]
    fn orthographic_matches_glam_gl() {
        let height = 6.0;
        let aspect = 16.0 / 9.0;
        let half_h = height * 0.5;
        let half_w = half_h * aspect;
        assert_mat_eq(
            Mat4::orthographic(height, aspect, 0.1, 100.0),
            glam::Mat4::orthographic_rh_gl(-half_w, half_w, -half_h, half_h, 0.1, 100.0),
        );
    }

    #[test]
    fn project_point_divides_by_w() {
        let proj = Mat4::perspective(1.0, 1.0, 0.1, 100.0);
        let p = Vec3::new(0.5, 0.5, -10.0);
        let clip = proj * p.extend(1.0);
        let ndc = proj.project_point(p);
        assert_vec3_eq(ndc, clip.truncate() / clip.w);
        // Perspective-divide contract: w_clip == -z_view.
        assert!((clip.w - 10.0).abs() < EPS);
    }
}
