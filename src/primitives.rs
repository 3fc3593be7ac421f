//! Procedural mesh generators for the built-in primitive shapes.
//!
//! Each generator is a pure function from shape parameters to a
//! [`MeshData`]: sample a parametric grid, emit one vertex per sample
//! with an analytic normal and UVs linear in the grid indices, then
//! stitch two counter-clockwise triangles per grid quad. The closed
//! [`Primitive`] enum dispatches to the same functions when a uniform
//! interface is more convenient.
//!
//! Generators do not validate their parameters beyond guarding division
//! by zero: a segment count of zero yields an empty mesh, and very small
//! counts yield degenerate but well-formed geometry. Callers are expected
//! to pass sane tessellation levels (≥ 3 for round shapes).
//!
//! # Example
//!
//! ```
//! use tessera::primitives;
//!
//! let sphere = primitives::sphere(1.0, 16);
//! assert_eq!(sphere.vertices.len(), 17 * 17);
//! assert_eq!(sphere.triangle_count(), 16 * 16 * 2);
//! ```

use std::f32::consts::{PI, TAU};

use crate::mesh::{MeshData, Vertex};
use crate::math::{Vec2, Vec3};

/// A closed set of generatable primitive shapes.
///
/// Useful when the shape choice is data-driven (scene files, UI
/// dropdowns); otherwise call the free functions directly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    Sphere {
        radius: f32,
        segments: u32,
    },
    Cylinder {
        height: f32,
        radius: f32,
        segments: u32,
    },
    Plane {
        size: f32,
        subdivisions: u32,
    },
    Torus {
        tube_segments: u32,
        ring_segments: u32,
        ring_radius: f32,
        tube_radius: f32,
    },
    Cube {
        size: f32,
    },
}

impl Primitive {
    /// Generates the mesh for this primitive.
    pub fn generate(&self) -> MeshData {
        match *self {
            Primitive::Sphere { radius, segments } => sphere(radius, segments),
            Primitive::Cylinder {
                height,
                radius,
                segments,
            } => cylinder(height, radius, segments),
            Primitive::Plane { size, subdivisions } => plane(size, subdivisions),
            Primitive::Torus {
                tube_segments,
                ring_segments,
                ring_radius,
                tube_radius,
            } => torus(tube_segments, ring_segments, ring_radius, tube_radius),
            Primitive::Cube { size } => cube(size),
        }
    }
}

/// Appends the two triangles of one grid quad.
///
/// `start` is the top-left vertex of the quad and `columns` the number of
/// vertices per grid row. Winding is counter-clockwise for grids whose
/// rows advance away from the viewer of the front face.
fn push_quad(indices: &mut Vec<u32>, start: u32, columns: u32) {
    indices.push(start);
    indices.push(start + columns);
    indices.push(start + 1);

    indices.push(start + 1);
    indices.push(start + columns);
    indices.push(start + columns + 1);
}

/// Generates a UV sphere of the given radius, centered at the origin.
///
/// `segments` controls both the azimuthal and polar subdivision, so the
/// grid has `(segments + 1)²` vertices. The poles are emitted as
/// degenerate rings (every pole-row vertex sits at the pole) rather than
/// single vertices, which keeps the UV mapping unambiguous. Normals point
/// radially outward.
pub fn sphere(radius: f32, segments: u32) -> MeshData {
    if segments == 0 {
        return MeshData::default();
    }

    let mut mesh = MeshData::default();
    let phi_step = PI / segments as f32;
    let theta_step = TAU / segments as f32;

    for row in 0..=segments {
        let phi = row as f32 * phi_step;
        for col in 0..=segments {
            let theta = col as f32 * theta_step;
            let pos = Vec3::new(
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
                radius * phi.sin() * theta.cos(),
            );
            mesh.vertices.push(Vertex::new(
                pos.into(),
                pos.normalize().into(),
                [col as f32 / segments as f32, row as f32 / segments as f32],
            ));
        }
    }

    let columns = segments + 1;
    for row in 0..segments {
        for col in 0..segments {
            push_quad(&mut mesh.indices, row * columns + col, columns);
        }
    }

    mesh
}

/// Generates a cylinder centered at the origin, its axis along Y.
///
/// The vertex list holds four groups: the top cap (center + ring with +Y
/// normals), the bottom cap (center + ring with −Y normals), and two side
/// rings duplicating the cap rings with radial normals. Caps need
/// face-aligned normals while the side needs radial ones, so the rings
/// cannot be shared.
pub fn cylinder(height: f32, radius: f32, segments: u32) -> MeshData {
    if segments == 0 {
        return MeshData::default();
    }

    let mut mesh = MeshData::default();
    let top_y = height * 0.5;
    let bottom_y = -top_y;
    let theta_step = TAU / segments as f32;

    let cap_uv = |theta: f32| Vec2::new((theta.sin() + 1.0) * 0.5, (theta.cos() + 1.0) * 0.5);
    let ring_pos = |theta: f32, y: f32| Vec3::new(theta.cos() * radius, y, theta.sin() * radius);

    // Top cap: center then ring.
    mesh.vertices
        .push(Vertex::new([0.0, top_y, 0.0], Vec3::Y.into(), [0.5, 0.5]));
    for i in 0..=segments {
        let theta = i as f32 * theta_step;
        mesh.vertices.push(Vertex::new(
            ring_pos(theta, top_y).into(),
            Vec3::Y.into(),
            cap_uv(theta).into(),
        ));
    }

    // Bottom cap: center then ring.
    mesh.vertices.push(Vertex::new(
        [0.0, bottom_y, 0.0],
        (-Vec3::Y).into(),
        [0.5, 0.5],
    ));
    for i in 0..=segments {
        let theta = i as f32 * theta_step;
        mesh.vertices.push(Vertex::new(
            ring_pos(theta, bottom_y).into(),
            (-Vec3::Y).into(),
            cap_uv(theta).into(),
        ));
    }

    // Side rings: top then bottom, with radial normals.
    for (y, v) in [(top_y, 1.0), (bottom_y, 0.0)] {
        for i in 0..=segments {
            let theta = i as f32 * theta_step;
            mesh.vertices.push(Vertex::new(
                ring_pos(theta, y).into(),
                Vec3::new(theta.cos(), 0.0, theta.sin()).into(),
                [i as f32 / segments as f32, v],
            ));
        }
    }

    // Top cap fan, wound to face +Y.
    let top_center = 0;
    let top_ring = 1;
    for i in 0..segments {
        mesh.indices.push(top_ring + i);
        mesh.indices.push(top_center);
        mesh.indices.push(top_ring + i + 1);
    }

    // Bottom cap fan, wound to face -Y.
    let bottom_center = segments + 2;
    let bottom_ring = bottom_center + 1;
    for i in 0..segments {
        mesh.indices.push(bottom_center);
        mesh.indices.push(bottom_ring + i);
        mesh.indices.push(bottom_ring + i + 1);
    }

    // Side wall quads between the two side rings.
    let side_start = 2 * (segments + 2);
    let columns = segments + 1;
    for i in 0..segments {
        let start = side_start + i;
        mesh.indices.push(start);
        mesh.indices.push(start + 1);
        mesh.indices.push(start + columns);

        mesh.indices.push(start + columns);
        mesh.indices.push(start + 1);
        mesh.indices.push(start + columns + 1);
    }

    mesh
}

/// Generates a subdivided square plane in the XZ plane at Y = 0.
///
/// The grid spans `[0, size]` on both X and Z with `(subdivisions + 1)²`
/// vertices, all normals +Y, and UVs running linearly across the grid.
pub fn plane(size: f32, subdivisions: u32) -> MeshData {
    if subdivisions == 0 {
        return MeshData::default();
    }

    let mut mesh = MeshData::default();
    let step = 1.0 / subdivisions as f32;

    for row in 0..=subdivisions {
        for col in 0..=subdivisions {
            let u = col as f32 * step;
            let v = row as f32 * step;
            mesh.vertices.push(Vertex::new(
                [size * u, 0.0, size * v],
                Vec3::Y.into(),
                [u, v],
            ));
        }
    }

    let columns = subdivisions + 1;
    for row in 0..subdivisions {
        for col in 0..subdivisions {
            push_quad(&mut mesh.indices, row * columns + col, columns);
        }
    }

    mesh
}

/// Generates a torus centered at the origin, its ring lying in the XY
/// plane.
///
/// `ring_radius` is the distance from the torus center to the middle of
/// the tube, `tube_radius` the radius of the tube itself. Rows of the
/// parametric grid walk the angle around the tube (`tube_segments`
/// steps), columns the angle around the ring (`ring_segments` steps).
///
/// Normals are the normalized vertex positions — exact only in the limit
/// of a thin tube, but the established convention for this generator.
pub fn torus(tube_segments: u32, ring_segments: u32, ring_radius: f32, tube_radius: f32) -> MeshData {
    if tube_segments == 0 || ring_segments == 0 {
        return MeshData::default();
    }

    let mut mesh = MeshData::default();
    let phi_step = TAU / tube_segments as f32;
    let theta_step = TAU / ring_segments as f32;

    for row in 0..=tube_segments {
        let phi = row as f32 * phi_step;
        for col in 0..=ring_segments {
            let theta = col as f32 * theta_step;
            let pos = Vec3::new(
                theta.cos() * (ring_radius + phi.cos() * tube_radius),
                theta.sin() * (ring_radius + phi.cos() * tube_radius),
                phi.sin() * tube_radius,
            );
            mesh.vertices.push(Vertex::new(
                pos.into(),
                pos.normalize().into(),
                [
                    col as f32 / ring_segments as f32,
                    row as f32 / tube_segments as f32,
                ],
            ));
        }
    }

    // Rows advance around the tube, which runs opposite to the sphere's
    // pole-to-pole rows; the quad diagonal flips to keep faces outward.
    let columns = ring_segments + 1;
    for row in 0..tube_segments {
        for col in 0..ring_segments {
            let start = row * columns + col;
            mesh.indices.push(start);
            mesh.indices.push(start + 1);
            mesh.indices.push(start + columns);

            mesh.indices.push(start + columns);
            mesh.indices.push(start + 1);
            mesh.indices.push(start + columns + 1);
        }
    }

    mesh
}

/// Generates an axis-aligned cube of the given edge length, centered at
/// the origin.
///
/// Each face gets its own four vertices so normals stay flat and every
/// face maps the full `[0, 1]` UV range: 24 vertices, 12 triangles.
pub fn cube(size: f32) -> MeshData {
    let h = size * 0.5;

    #[rustfmt::skip]
    let vertices = vec![
        // Front face (Z+)
        Vertex::new([-h, -h,  h], [ 0.0,  0.0,  1.0], [0.0, 0.0]),
        Vertex::new([ h, -h,  h], [ 0.0,  0.0,  1.0], [1.0, 0.0]),
        Vertex::new([ h,  h,  h], [ 0.0,  0.0,  1.0], [1.0, 1.0]),
        Vertex::new([-h,  h,  h], [ 0.0,  0.0,  1.0], [0.0, 1.0]),
        // Back face (Z-)
        Vertex::new([ h, -h, -h], [ 0.0,  0.0, -1.0], [0.0, 0.0]),
        Vertex::new([-h, -h, -h], [ 0.0,  0.0, -1.0], [1.0, 0.0]),
        Vertex::new([-h,  h, -h], [ 0.0,  0.0, -1.0], [1.0, 1.0]),
        Vertex::new([ h,  h, -h], [ 0.0,  0.0, -1.0], [0.0, 1.0]),
        // Top face (Y+)
        Vertex::new([-h,  h,  h], [ 0.0,  1.0,  0.0], [0.0, 0.0]),
        Vertex::new([ h,  h,  h], [ 0.0,  1.0,  0.0], [1.0, 0.0]),
        Vertex::new([ h,  h, -h], [ 0.0,  1.0,  0.0], [1.0, 1.0]),
        Vertex::new([-h,  h, -h], [ 0.0,  1.0,  0.0], [0.0, 1.0]),
        // Bottom face (Y-)
        Vertex::new([-h, -h, -h], [ 0.0, -1.0,  0.0], [0.0, 0.0]),
        Vertex::new([ h, -h, -h], [ 0.0, -1.0,  0.0], [1.0, 0.0]),
        Vertex::new([ h, -h,  h], [ 0.0, -1.0,  0.0], [1.0, 1.0]),
        Vertex::new([-h, -h,  h], [ 0.0, -1.0,  0.0], [0.0, 1.0]),
        // Right face (X+)
        Vertex::new([ h, -h,  h], [ 1.0,  0.0,  0.0], [0.0, 0.0]),
        Vertex::new([ h, -h, -h], [ 1.0,  0.0,  0.0], [1.0, 0.0]),
        Vertex::new([ h,  h, -h], [ 1.0,  0.0,  0.0], [1.0, 1.0]),
        Vertex::new([ h,  h,  h], [ 1.0,  0.0,  0.0], [0.0, 1.0]),
        // Left face (X-)
        Vertex::new([-h, -h, -h], [-1.0,  0.0,  0.0], [0.0, 0.0]),
        Vertex::new([-h, -h,  h], [-1.0,  0.0,  0.0], [1.0, 0.0]),
        Vertex::new([-h,  h,  h], [-1.0,  0.0,  0.0], [1.0, 1.0]),
        Vertex::new([-h,  h, -h], [-1.0,  0.0,  0.0], [0.0, 1.0]),
    ];

    #[rustfmt::skip]
    let indices = vec![
        0,  1,  2,  2,  3,  0,  // front
        4,  5,  6,  6,  7,  4,  // back
        8,  9,  10, 10, 11, 8,  // top
        12, 13, 14, 14, 15, 12, // bottom
        16, 17, 18, 18, 19, 16, // right
        20, 21, 22, 22, 23, 20, // left
    ];

    MeshData::new(vertices, indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    /// Every index in bounds, index count a multiple of 3.
    fn assert_well_formed(mesh: &MeshData) {
        assert_eq!(mesh.indices.len() % 3, 0, "index count not a triangle list");
        for &i in &mesh.indices {
            assert!(
                (i as usize) < mesh.vertices.len(),
                "index {i} out of bounds ({} vertices)",
                mesh.vertices.len()
            );
        }
    }

    /// Every non-degenerate triangle's geometric normal points away from
    /// the origin (outward for origin-centered convex shapes).
    fn assert_outward_winding(mesh: &MeshData) {
        for tri in mesh.indices.chunks_exact(3) {
            let p0 = Vec3::from(mesh.vertices[tri[0] as usize].position);
            let p1 = Vec3::from(mesh.vertices[tri[1] as usize].position);
            let p2 = Vec3::from(mesh.vertices[tri[2] as usize].position);

            let face = (p1 - p0).cross(p2 - p0);
            if face.length() < EPS {
                continue; // degenerate (pole rings)
            }
            let centroid = (p0 + p1 + p2) / 3.0;
            assert!(
                face.dot(centroid) > 0.0,
                "inward-facing triangle {tri:?} at {centroid:?}"
            );
        }
    }

    #[test]
    fn sphere_vertices_lie_on_the_sphere() {
        let radius = 2.5;
        let mesh = sphere(radius, 12);
        assert_well_formed(&mesh);
        assert_eq!(mesh.vertices.len(), 13 * 13);
        assert_eq!(mesh.triangle_count(), 12 * 12 * 2);

        for v in &mesh.vertices {
            let p = Vec3::from(v.position);
            assert!((p.length() - radius).abs() < EPS, "|{p:?}| != {radius}");
            let n = Vec3::from(v.normal);
            assert!((n - p.normalize()).length() < EPS);
        }
    }

    #[test]
    fn sphere_winds_outward() {
        assert_outward_winding(&sphere(1.0, 8));
    }

    #[test]
    fn cylinder_rings_sit_at_cap_heights() {
        let height = 3.0;
        let radius = 0.75;
        let segments = 16;
        let mesh = cylinder(height, radius, segments);
        assert_well_formed(&mesh);
        assert_outward_winding(&mesh);

        for v in &mesh.vertices {
            let p = Vec3::from(v.position);
            assert!(
                (p.y - height * 0.5).abs() < EPS || (p.y + height * 0.5).abs() < EPS,
                "vertex off the cap planes: {p:?}"
            );
            // Ring vertices keep the cylinder radius; centers sit on the axis.
            let from_axis = Vec2::new(p.x, p.z);
            let d = (from_axis.x * from_axis.x + from_axis.y * from_axis.y).sqrt();
            assert!(
                d < EPS || (d - radius).abs() < EPS,
                "vertex off the ring radius: {p:?}"
            );
        }
    }

    #[test]
    fn cylinder_side_normals_are_radial() {
        let segments = 8;
        let mesh = cylinder(2.0, 1.0, segments);
        let side_start = 2 * (segments as usize + 2);
        for v in &mesh.vertices[side_start..] {
            let n = Vec3::from(v.normal);
            assert!(n.y.abs() < EPS, "side normal has vertical component: {n:?}");
            assert!((n.length() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn plane_grid_spans_the_full_extent() {
        let size = 10.0;
        let subdivisions = 5;
        let mesh = plane(size, subdivisions);
        assert_well_formed(&mesh);
        assert_eq!(mesh.vertices.len(), 6 * 6);

        let (min, max) = mesh.bounds();
        assert!((min - Vec3::ZERO).length() < EPS);
        assert!((max - Vec3::new(size, 0.0, size)).length() < EPS);

        for v in &mesh.vertices {
            assert_eq!(v.position[1], 0.0);
            assert_eq!(Vec3::from(v.normal), Vec3::Y);
        }
    }

    #[test]
    fn plane_faces_up() {
        let mesh = plane(4.0, 3);
        for tri in mesh.indices.chunks_exact(3) {
            let p0 = Vec3::from(mesh.vertices[tri[0] as usize].position);
            let p1 = Vec3::from(mesh.vertices[tri[1] as usize].position);
            let p2 = Vec3::from(mesh.vertices[tri[2] as usize].position);
            assert!((p1 - p0).cross(p2 - p0).y > 0.0, "downward triangle {tri:?}");
        }
    }

    #[test]
    fn torus_vertices_lie_on_the_tube_surface() {
        let ring_radius = 2.0;
        let tube_radius = 0.5;
        let mesh = torus(10, 14, ring_radius, tube_radius);
        assert_well_formed(&mesh);
        assert_eq!(mesh.vertices.len(), 11 * 15);

        for v in &mesh.vertices {
            let p = Vec3::from(v.position);
            // Distance from the ring circle must equal the tube radius.
            let ring_dist = (p.x * p.x + p.y * p.y).sqrt() - ring_radius;
            let tube_dist = (ring_dist * ring_dist + p.z * p.z).sqrt();
            assert!(
                (tube_dist - tube_radius).abs() < EPS,
                "vertex off the tube: {p:?}"
            );
        }
    }

    #[test]
    fn torus_winds_outward_from_the_tube() {
        let ring_radius = 2.0;
        let mesh = torus(8, 12, ring_radius, 0.5);

        for tri in mesh.indices.chunks_exact(3) {
            let p0 = Vec3::from(mesh.vertices[tri[0] as usize].position);
            let p1 = Vec3::from(mesh.vertices[tri[1] as usize].position);
            let p2 = Vec3::from(mesh.vertices[tri[2] as usize].position);

            let face = (p1 - p0).cross(p2 - p0);
            let centroid = (p0 + p1 + p2) / 3.0;

            // A torus is not convex, so measure against the true surface
            // direction: away from the nearest point on the ring circle.
            let ring_angle = centroid.y.atan2(centroid.x);
            let ring_point = Vec3::new(
                ring_radius * ring_angle.cos(),
                ring_radius * ring_angle.sin(),
                0.0,
            );
            assert!(
                face.dot(centroid - ring_point) > 0.0,
                "inward-facing triangle {tri:?} at {centroid:?}"
            );
        }
    }

    #[test]
    fn cube_spans_its_edge_length() {
        let mesh = cube(2.0);
        assert_well_formed(&mesh);
        assert_outward_winding(&mesh);
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.triangle_count(), 12);

        let (min, max) = mesh.bounds();
        assert!((min - Vec3::splat(-1.0)).length() < EPS);
        assert!((max - Vec3::splat(1.0)).length() < EPS);
    }

    #[test]
    fn zero_segments_yield_empty_meshes() {
        assert_eq!(sphere(1.0, 0), MeshData::default());
        assert_eq!(cylinder(1.0, 1.0, 0), MeshData::default());
        assert_eq!(plane(1.0, 0), MeshData::default());
        assert_eq!(torus(0, 8, 1.0, 0.25), MeshData::default());
        assert_eq!(torus(8, 0, 1.0, 0.25), MeshData::default());
    }

    #[test]
    fn tiny_segment_counts_do_not_crash() {
        for segments in 1..3 {
            assert_well_formed(&sphere(1.0, segments));
            assert_well_formed(&cylinder(1.0, 1.0, segments));
            assert_well_formed(&plane(1.0, segments));
            assert_well_formed(&torus(segments, segments, 1.0, 0.25));
        }
    }

    #[test]
    fn primitive_enum_dispatches_to_the_generators() {
        assert_eq!(
            Primitive::Sphere {
                radius: 1.0,
                segments: 6
            }
            .generate(),
            sphere(1.0, 6)
        );
        assert_eq!(
            Primitive::Torus {
                tube_segments: 6,
                ring_segments: 8,
                ring_radius: 2.0,
                tube_radius: 0.5
            }
            .generate(),
            torus(6, 8, 2.0, 0.5)
        );
        assert_eq!(Primitive::Cube { size: 1.0 }.generate(), cube(1.0));
    }
}
