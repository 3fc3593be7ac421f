//! Object placement: position, Euler rotation, and scale.

use crate::math::{Mat4, Vec3};

/// A 3D transformation placing an object in world space.
///
/// Rotation is stored as Euler angles in degrees, applied around X, then
/// Y, then Z. [`Transform::model_matrix`] composes the full object-to-world
/// matrix in the standard TRS order:
///
/// ```text
/// model = Translate · RotZ · RotY · RotX · Scale
/// ```
///
/// so the mesh is scaled around its local origin first, then rotated,
/// then moved into place. The matrix is recomputed on every call — fields
/// can be mutated freely between frames (UI sliders, animation) without
/// any cache to invalidate.
///
/// # Example
///
/// ```
/// use tessera::{Transform, Vec3};
///
/// let transform = Transform::new()
///     .position(Vec3::new(0.0, 2.0, -5.0))
///     .rotation(Vec3::new(0.0, 45.0, 0.0))
///     .uniform_scale(2.0);
///
/// let model = transform.model_matrix();
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// World-space position (translation).
    pub position: Vec3,
    /// Euler angles in degrees, applied X then Y then Z.
    pub rotation: Vec3,
    /// Scale factors for each axis.
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Creates an identity transform (origin, no rotation, unit scale).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transform positioned at the given location.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Sets the position (translation) component.
    pub fn position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Sets the rotation as Euler angles in degrees (X, Y, Z application
    /// order).
    pub fn rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Sets non-uniform scale factors for each axis.
    pub fn scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Sets uniform scale on all axes.
    pub fn uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::splat(scale);
        self
    }

    /// Computes the object-to-world matrix from the current field values.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::translation(self.position)
            * Mat4::rotation_z(self.rotation.z.to_radians())
            * Mat4::rotation_y(self.rotation.y.to_radians())
            * Mat4::rotation_x(self.rotation.x.to_radians())
            * Mat4::scaling(self.scale)
    }
}
