/// Flat triangle soup produced by the decoder
use crate::bounds::{Box3, Sphere};
use crate::error::MeshError;

/// Floats per triangle in each of the two arrays (3 vertices x 3 components)
pub const FLOATS_PER_TRIANGLE: usize = 9;

/// Unindexed triangles stored as parallel position/normal arrays.
///
/// Every triangle owns three vertices; its face normal is repeated for each
/// of them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    points: Vec<f32>,
    normals: Vec<f32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(triangle_count: usize) -> Self {
        Self {
            points: Vec::with_capacity(triangle_count * FLOATS_PER_TRIANGLE),
            normals: Vec::with_capacity(triangle_count * FLOATS_PER_TRIANGLE),
        }
    }

    /// Append one flat-shaded triangle
    pub fn push_triangle(&mut self, normal: [f32; 3], vertices: [[f32; 3]; 3]) {
        for vertex in vertices {
            self.points.extend_from_slice(&vertex);
            self.normals.extend_from_slice(&normal);
        }
    }

    /// Single triangle in the z = 0 plane facing +z, shown before any file is loaded
    pub fn placeholder() -> Self {
        let mut mesh = Self::with_capacity(1);
        mesh.push_triangle(
            [0.0, 0.0, 1.0],
            [[0.0, 1.0, 0.0], [-1.0, -1.0, 0.0], [1.0, -1.0, 0.0]],
        );
        mesh
    }

    pub fn points(&self) -> &[f32] {
        &self.points
    }

    pub fn normals(&self) -> &[f32] {
        &self.normals
    }

    pub fn vertex_count(&self) -> usize {
        self.points.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.points.len() / FLOATS_PER_TRIANGLE
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn bounding_box(&self) -> Box3 {
        Box3::boundary_of(&self.points)
    }

    /// Sphere used to frame the camera.
    ///
    /// Fails on a mesh without triangles, and on one whose sphere is not
    /// finite or has zero radius (NaN or infinite coordinates, or every
    /// vertex at the same point).
    pub fn bounding_sphere(&self) -> Result<Sphere, MeshError> {
        if self.is_empty() {
            return Err(MeshError::EmptyMesh);
        }
        let sphere = self.bounding_box().bounding_sphere();
        if !(sphere.center.is_finite() && sphere.radius.is_finite() && sphere.radius > 0.0) {
            return Err(MeshError::DegenerateMesh);
        }
        Ok(sphere)
    }

    /// Iterate triangles as `(normal, [v0, v1, v2])`
    pub fn triangles(&self) -> impl Iterator<Item = ([f32; 3], [[f32; 3]; 3])> + '_ {
        self.points
            .chunks_exact(FLOATS_PER_TRIANGLE)
            .zip(self.normals.chunks_exact(FLOATS_PER_TRIANGLE))
            .map(|(p, n)| {
                (
                    [n[0], n[1], n[2]],
                    [[p[0], p[1], p[2]], [p[3], p[4], p[5]], [p[6], p[7], p[8]]],
                )
            })
    }
}
