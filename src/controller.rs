//! A first-person freelook camera controller.
//!
//! [`CameraController`] integrates pointer deltas into yaw/pitch angles
//! and movement keys into camera displacement, then points the camera's
//! target one unit ahead along the resulting forward vector. It consumes
//! an [`InputState`] snapshot so the crate stays independent of any
//! particular window or input library — the host render loop fills one in
//! each frame from whatever backend it uses.
//!
//! Look-around only runs while `look_engaged` is held (typically the
//! secondary mouse button). On the first engaged frame the stored pointer
//! position resynchronizes to the current one before any delta is
//! computed, so engaging the look never causes a jump; disengaging
//! re-arms that resynchronization for the next session.
//!
//! # Example
//!
//! ```
//! use tessera::{Camera, CameraController, InputState, Vec2};
//!
//! let mut camera = Camera::new(16.0 / 9.0);
//! let mut controller = CameraController::new();
//!
//! // Each frame: snapshot input, then update.
//! let input = InputState {
//!     pointer: Vec2::new(512.0, 300.0),
//!     look_engaged: true,
//!     move_forward: true,
//!     ..Default::default()
//! };
//! controller.update(&mut camera, &input, 1.0 / 60.0);
//! ```

use crate::camera::Camera;
use crate::math::{Vec2, Vec3};

/// A per-frame snapshot of the input the controller consumes.
///
/// The host render loop fills this from its window/input backend; the
/// controller never talks to a backend directly.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputState {
    /// Current pointer position in window coordinates.
    pub pointer: Vec2,
    /// Whether look-around is engaged (e.g. secondary mouse button held).
    pub look_engaged: bool,
    /// Movement key states.
    pub move_forward: bool,
    pub move_backward: bool,
    pub move_left: bool,
    pub move_right: bool,
    pub move_up: bool,
    pub move_down: bool,
}

/// Integrates pointer and key input into camera position and orientation.
///
/// Yaw and pitch are stored in degrees; pitch is clamped to ±89° to stay
/// clear of the gimbal flip at the poles. Yaw 0 looks along +X, and
/// upward pointer motion pitches the view up (the vertical delta is
/// inverted). Movement displaces the camera along the view-relative
/// forward/right/up axes at `move_speed` units per second, scaled by the
/// elapsed frame time so movement rate is independent of frame rate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraController {
    /// Pointer position from the previous update.
    prev_pointer: Vec2,
    /// Horizontal look angle in degrees. 0 = looking along +X.
    pub yaw: f32,
    /// Vertical look angle in degrees, clamped to [-89, 89].
    pub pitch: f32,
    /// Degrees of rotation per pixel of pointer movement.
    pub sensitivity: f32,
    /// Movement speed in units per second.
    pub move_speed: f32,
    /// Armed until the first tracked pointer sample of a look session.
    first_sample: bool,
}

impl Default for CameraController {
    fn default() -> Self {
        Self {
            prev_pointer: Vec2::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            sensitivity: 0.1,
            move_speed: 5.0,
            first_sample: true,
        }
    }
}

impl CameraController {
    /// Creates a controller with default sensitivity and speed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the look sensitivity (degrees per pixel).
    pub fn sensitivity(mut self, sensitivity: f32) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    /// Sets the movement speed (units per second).
    pub fn speed(mut self, speed: f32) -> Self {
        self.move_speed = speed;
        self
    }

    /// Sets the initial yaw in degrees.
    pub fn yaw(mut self, yaw: f32) -> Self {
        self.yaw = yaw;
        self
    }

    /// Sets the initial pitch in degrees, clamped to [-89, 89].
    pub fn pitch(mut self, pitch: f32) -> Self {
        self.pitch = pitch.clamp(-89.0, 89.0);
        self
    }

    /// The unit forward vector for the current yaw and pitch.
    pub fn forward(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
    }

    /// Advances the controller by one frame and writes the result into
    /// the camera.
    ///
    /// `dt` is the elapsed time since the previous frame in seconds.
    /// After position updates, `camera.target` is set to
    /// `camera.position + forward`, so a view matrix computed later in
    /// the same frame reflects this update.
    pub fn update(&mut self, camera: &mut Camera, input: &InputState, dt: f32) {
        if input.look_engaged {
            // Resynchronize on the first sample of a session so engaging
            // the look never produces a spurious delta.
            if self.first_sample {
                self.first_sample = false;
                self.prev_pointer = input.pointer;
            }

            let delta = input.pointer - self.prev_pointer;
            self.yaw += delta.x * self.sensitivity;
            self.pitch -= delta.y * self.sensitivity;
            self.pitch = self.pitch.clamp(-89.0, 89.0);

            self.prev_pointer = input.pointer;
        } else {
            self.first_sample = true;
        }

        let forward = self.forward();
        let right = forward.cross(Vec3::Y).normalize();
        let up = right.cross(forward).normalize();

        let mut direction = Vec3::ZERO;
        if input.move_forward {
            direction += forward;
        }
        if input.move_backward {
            direction -= forward;
        }
        if input.move_right {
            direction += right;
        }
        if input.move_left {
            direction -= right;
        }
        if input.move_up {
            direction += up;
        }
        if input.move_down {
            direction -= up;
        }

        if direction.length_squared() > 0.0 {
            camera.position += direction.normalize() * self.move_speed * dt;
        }

        camera.target = camera.position + forward;
    }
}
