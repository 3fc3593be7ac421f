//! # Tessera
//!
//! **Procedural mesh primitives and camera math that get out of your way.**
//!
//! Tessera generates CPU-side triangle meshes for the classic primitives
//! (sphere, cylinder, plane, torus, cube) and provides the transform and
//! camera math to place, orient, and project them — nothing more. There
//! is no GPU, window, or input dependency: the crate hands your renderer
//! tightly packed vertex/index buffers and column-major 4×4 matrices, and
//! consumes a plain input snapshot for its freelook controller.
//!
//! ## Quick Start
//!
//! ```
//! use tessera::*;
//!
//! // Generate geometry.
//! let sphere = primitives::sphere(1.0, 32);
//! assert_eq!(sphere.indices.len() % 3, 0);
//!
//! // Place it in the world.
//! let transform = Transform::new()
//!     .position(Vec3::new(0.0, 1.0, 0.0))
//!     .uniform_scale(2.0);
//!
//! // Frame it with a camera.
//! let camera = Camera::new(16.0 / 9.0)
//!     .at(Vec3::new(0.0, 2.0, 8.0))
//!     .looking_at(Vec3::new(0.0, 1.0, 0.0));
//!
//! // Upload these to your renderer as uniforms and buffers.
//! let model = transform.model_matrix().to_cols_array();
//! let view = camera.view_matrix().to_cols_array();
//! let projection = camera.projection_matrix().to_cols_array();
//! let vertex_buffer = sphere.vertex_bytes();
//! let index_buffer = sphere.index_bytes();
//! ```
//!
//! ## Conventions
//!
//! Pinned once, used everywhere: right-handed coordinates with +Y up,
//! counter-clockwise front faces, column-major matrices multiplying
//! column vectors, OpenGL `[-1, 1]` clip depth. The model matrix composes
//! as Translate · RotZ · RotY · RotX · Scale.
//!
//! ## Philosophy
//!
//! - **Pure functions over hidden state** — generators and matrix
//!   producers recompute from their inputs every call; nothing caches.
//! - **Degenerate in, degenerate out** — bad inputs (zero-length
//!   normalize, zero segment counts) yield well-formed zero values, never
//!   panics. Validation belongs to the caller.
//! - **Bring your own renderer** — buffers and matrices are plain data;
//!   any graphics API can consume them.

mod camera;
mod controller;
pub mod math;
mod mesh;
pub mod primitives;
mod transform;

pub use camera::Camera;
pub use controller::{CameraController, InputState};
pub use math::{Mat4, Vec2, Vec3, Vec4};
pub use mesh::{MeshData, Vertex};
pub use primitives::Primitive;
pub use transform::Transform;
