/// Seam between decoded meshes and whatever renders them
use std::convert::Infallible;

use crate::bounds::Sphere;
use crate::geometry::Mesh;

/// Render-ready geometry
pub trait Drawable {
    /// Sphere the camera frames when this drawable is installed
    fn bounding_sphere(&self) -> Sphere;
}

/// Builds drawables from decoded meshes (GPU buffers, rasterizer input, ...)
pub trait DrawableSource {
    type Drawable: Drawable;
    type Error: std::error::Error + 'static;

    /// `mesh` is never empty.
    fn create_drawable(&mut self, mesh: Mesh) -> Result<Self::Drawable, Self::Error>;
}

/// Mesh kept on the CPU together with its bounding sphere
#[derive(Debug, Clone, PartialEq)]
pub struct MeshDrawable {
    mesh: Mesh,
    boundary: Sphere,
}

impl MeshDrawable {
    pub fn new(mesh: Mesh) -> Self {
        let boundary = mesh.bounding_box().bounding_sphere();
        Self { mesh, boundary }
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }
}

impl Drawable for MeshDrawable {
    fn bounding_sphere(&self) -> Sphere {
        self.boundary
    }
}

/// Source for front ends that read vertex data straight from the mesh
#[derive(Debug, Clone, Copy, Default)]
pub struct CpuSource;

impl DrawableSource for CpuSource {
    type Drawable = MeshDrawable;
    type Error = Infallible;

    fn create_drawable(&mut self, mesh: Mesh) -> Result<MeshDrawable, Infallible> {
        Ok(MeshDrawable::new(mesh))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vector3;

    #[test]
    fn test_cpu_source_keeps_mesh() {
        let drawable = CpuSource.create_drawable(Mesh::placeholder()).unwrap();
        assert_eq!(drawable.mesh(), &Mesh::placeholder());
        assert_eq!(drawable.bounding_sphere().center, Vector3::ZERO);
        assert_eq!(drawable.bounding_sphere().radius, 2.0f64.sqrt());
    }
}
