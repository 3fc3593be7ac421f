//! The camera: view and projection matrix computation.

use crate::math::{Mat4, Vec3};

/// A look-at camera producing view and projection matrices.
///
/// The camera is described by a position and a *target point* (not a
/// direction), with the world up-vector fixed at +Y. Matrices are
/// recomputed from the current field values on every call, so fields can
/// be edited freely between frames.
///
/// Invariants the caller must uphold: `near < far`, `near > 0`, `fov` in
/// (0, 180) degrees when perspective, and `position != target` (a
/// coincident target makes the view matrix degenerate).
///
/// # Example
///
/// ```
/// use tessera::{Camera, Vec3};
///
/// let camera = Camera::new(16.0 / 9.0)
///     .at(Vec3::new(0.0, 2.0, 8.0))
///     .looking_at(Vec3::ZERO);
///
/// let view = camera.view_matrix();
/// let projection = camera.projection_matrix();
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    /// Camera body position in world space.
    pub position: Vec3,
    /// World-space point the camera looks at.
    pub target: Vec3,
    /// Vertical field of view in degrees (perspective only).
    pub fov: f32,
    /// Screen width / screen height.
    pub aspect_ratio: f32,
    /// Near plane distance, must be positive.
    pub near_plane: f32,
    /// Far plane distance, must exceed the near plane.
    pub far_plane: f32,
    /// Orthographic instead of perspective projection.
    pub orthographic: bool,
    /// Full height of the orthographic frustum.
    pub ortho_size: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            fov: 60.0,
            aspect_ratio: 1.0,
            near_plane: 0.1,
            far_plane: 100.0,
            orthographic: false,
            ortho_size: 6.0,
        }
    }
}

impl Camera {
    /// Creates a camera with the given aspect ratio and default framing:
    /// at (0, 0, 5), looking at the origin, 60° vertical fov.
    pub fn new(aspect_ratio: f32) -> Self {
        Self {
            aspect_ratio,
            ..Default::default()
        }
    }

    /// Sets the camera position.
    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Sets the look-at target point.
    pub fn looking_at(mut self, target: Vec3) -> Self {
        self.target = target;
        self
    }

    /// Sets the vertical field of view in degrees.
    pub fn with_fov(mut self, fov_degrees: f32) -> Self {
        self.fov = fov_degrees;
        self
    }

    /// Sets near and far clipping planes.
    pub fn clip_planes(mut self, near: f32, far: f32) -> Self {
        self.near_plane = near;
        self.far_plane = far;
        self
    }

    /// Switches to an orthographic projection with the given full frustum
    /// height.
    pub fn orthographic(mut self, height: f32) -> Self {
        self.orthographic = true;
        self.ortho_size = height;
        self
    }

    /// The world-to-view matrix: a look-at transform from `position`
    /// toward `target` with up = +Y. The camera looks down −Z in view
    /// space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.target, Vec3::Y)
    }

    /// The view-to-clip matrix.
    ///
    /// Orthographic when the flag is set (frustum height = `ortho_size`,
    /// width = height × aspect), perspective from the vertical fov
    /// otherwise. Both map depth into the `[-1, 1]` clip range, more
    /// distant points toward +1.
    pub fn projection_matrix(&self) -> Mat4 {
        if self.orthographic {
            Mat4::orthographic(
                self.ortho_size,
                self.aspect_ratio,
                self.near_plane,
                self.far_plane,
            )
        } else {
            Mat4::perspective(
                self.fov.to_radians(),
                self.aspect_ratio,
                self.near_plane,
                self.far_plane,
            )
        }
    }
}
