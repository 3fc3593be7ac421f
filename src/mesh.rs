//! Mesh data containers shared by every generator.
//!
//! - [`Vertex`] — the packed vertex format (position, normal, uv)
//! - [`MeshData`] — CPU-side geometry: a vertex list plus a triangle
//!   index list, with post-processing helpers (recentering, rescaling,
//!   smooth-normal recomputation)
//!
//! # Vertex Layout
//!
//! [`Vertex`] is `#[repr(C)]` and occupies 32 bytes:
//!
//! | Attribute | Format    | Offset |
//! |-----------|-----------|--------|
//! | position  | 3 × f32   | 0      |
//! | normal    | 3 × f32   | 12     |
//! | uv        | 2 × f32   | 24     |
//!
//! [`MeshData::vertex_bytes`] and [`MeshData::index_bytes`] expose the
//! tightly packed byte views a renderer needs for buffer upload.

use crate::math::Vec3;

/// A mesh vertex with position, normal, and texture coordinates.
///
/// Uses `#[repr(C)]` for a predictable memory layout and derives
/// [`bytemuck::Pod`] so vertex slices can be cast directly to bytes for
/// GPU upload.
///
/// # Example
///
/// ```
/// use tessera::Vertex;
///
/// let vertex = Vertex::new(
///     [0.0, 1.0, 0.0],  // position
///     [0.0, 1.0, 0.0],  // normal (pointing up)
///     [0.5, 0.5],       // uv (center of texture)
/// );
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// The 3D position of this vertex in model space.
    pub position: [f32; 3],
    /// The surface normal (unit length for correct lighting).
    pub normal: [f32; 3],
    /// Texture coordinates, typically in the range [0, 1].
    pub uv: [f32; 2],
}

impl Vertex {
    /// Size of one vertex in bytes (the buffer stride).
    pub const STRIDE: usize = std::mem::size_of::<Self>();

    /// Creates a new vertex from raw component arrays.
    pub const fn new(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }
}

/// CPU-side triangulated geometry: an ordered vertex list and a triangle
/// index list.
///
/// Vertex order is significant — it defines the indices the triangle list
/// refers to. Triangles are wound counter-clockwise when viewed from
/// outside, under right-handed coordinates with +Y up.
///
/// Invariants upheld by every generator in this crate:
/// - every index is less than `vertices.len()`
/// - `indices.len()` is a multiple of 3
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    /// Vertex list; insertion order defines the indices.
    pub vertices: Vec<Vertex>,
    /// Triangle list indices, three per triangle.
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Creates mesh data from existing vertex and index lists.
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// Number of triangles in the index list.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// The vertex list as tightly packed bytes, ready for buffer upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// The index list as tightly packed bytes, ready for buffer upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Computes the axis-aligned bounding box as `(min, max)` corners.
    ///
    /// An empty mesh yields an inverted box (min = +∞, max = −∞).
    pub fn bounds(&self) -> (Vec3, Vec3) {
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);

        for v in &self.vertices {
            let p = Vec3::from(v.position);
            min = min.min(p);
            max = max.max(p);
        }

        (min, max)
    }

    /// Returns the center point of the bounding box.
    pub fn center(&self) -> Vec3 {
        let (min, max) = self.bounds();
        (min + max) * 0.5
    }

    /// Returns the size of the bounding box.
    pub fn size(&self) -> Vec3 {
        let (min, max) = self.bounds();
        max - min
    }

    /// Translates all vertices by the given offset.
    pub fn translate(&mut self, offset: Vec3) {
        for v in &mut self.vertices {
            v.position[0] += offset.x;
            v.position[1] += offset.y;
            v.position[2] += offset.z;
        }
    }

    /// Scales all vertices uniformly around the origin.
    pub fn scale(&mut self, factor: f32) {
        for v in &mut self.vertices {
            v.position[0] *= factor;
            v.position[1] *= factor;
            v.position[2] *= factor;
        }
    }

    /// Centers the geometry at the origin.
    pub fn recenter(&mut self) {
        let center = self.center();
        self.translate(-center);
    }

    /// Scales the geometry to fit within a unit cube (-0.5 to 0.5),
    /// preserving aspect ratio.
    pub fn fit_unit_cube(&mut self) {
        let size = self.size();
        let max_dim = size.x.max(size.y).max(size.z);
        if max_dim > 0.0 {
            self.scale(1.0 / max_dim);
        }
    }

    /// Recalculates smooth vertex normals from face geometry.
    ///
    /// Averages the area-weighted face normals of every triangle sharing
    /// each vertex. Vertices referenced by no triangle end up with a zero
    /// normal.
    pub fn recalculate_normals(&mut self) {
        for v in &mut self.vertices {
            v.normal = [0.0, 0.0, 0.0];
        }

        for tri in self.indices.chunks_exact(3) {
            let i0 = tri[0] as usize;
            let i1 = tri[1] as usize;
            let i2 = tri[2] as usize;

            let p0 = Vec3::from(self.vertices[i0].position);
            let p1 = Vec3::from(self.vertices[i1].position);
            let p2 = Vec3::from(self.vertices[i2].position);

            // Weighted by face area, which is |cross product|.
            let face_normal = (p1 - p0).cross(p2 - p0);

            for &i in &[i0, i1, i2] {
                self.vertices[i].normal[0] += face_normal.x;
                self.vertices[i].normal[1] += face_normal.y;
                self.vertices[i].normal[2] += face_normal.z;
            }
        }

        for v in &mut self.vertices {
            v.normal = Vec3::from(v.normal).normalize().into();
        }
    }
}
