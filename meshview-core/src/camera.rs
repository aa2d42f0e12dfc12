/// Orthographic orbit camera
use log::debug;
use nalgebra::Matrix4;

use crate::bounds::Sphere;
use crate::projection;
use crate::transform::RigidTransform;

/// Size of the drawing surface in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }

    /// A viewport with a zero, negative or NaN side has no projection
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// Camera configuration for 3D rendering.
///
/// `focus` is the camera frame in world space; the camera looks down its
/// negative z axis. `scale` is the half extent of the shorter viewport side,
/// in world units.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub focus: RigidTransform,
    pub scale: f64,
    model_view: Matrix4<f64>,
    projection: Matrix4<f64>,
}

impl Camera {
    pub fn new(focus: RigidTransform, scale: f64) -> Self {
        Self {
            focus,
            scale,
            model_view: Matrix4::identity(),
            projection: Matrix4::identity(),
        }
    }

    /// Center the focus on `world` and zoom so its radius fills the shorter side
    pub fn fit(&mut self, world: &Sphere) {
        self.focus.translation = world.center;
        self.scale = world.radius;
        debug!("camera fit: center {:?}, scale {}", world.center, self.scale);
    }

    /// Recompute both matrices for the current focus, scale and viewport
    pub fn update(&mut self, world: &Sphere, viewport: Viewport) {
        let inverse_focus = self.focus.inverse();
        self.model_view = inverse_focus.to_matrix();

        let view_sphere = Sphere::new(inverse_focus.transform(world.center), world.radius);
        self.projection =
            projection::projection_matrix(&view_sphere, self.scale, viewport.width, viewport.height);
    }

    /// World to view transform from the last `update`
    pub fn model_view_matrix(&self) -> &Matrix4<f64> {
        &self.model_view
    }

    /// View to clip transform from the last `update`
    pub fn projection_matrix(&self) -> &Matrix4<f64> {
        &self.projection
    }

    /// Combined world to clip transform
    pub fn view_projection(&self) -> Matrix4<f64> {
        self.projection * self.model_view
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(RigidTransform::IDENTITY, 1.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotation::Rotation;
    use crate::vector::Vector3;
    use approx::assert_relative_eq;
    use nalgebra::Vector4;

    #[test]
    fn test_fit_then_update_at_origin() {
        let sphere = Sphere::new(Vector3::ZERO, 2.0);
        let mut camera = Camera::default();
        camera.fit(&sphere);
        camera.update(&sphere, Viewport::new(100.0, 100.0));

        assert_eq!(camera.scale, 2.0);
        assert_eq!(*camera.model_view_matrix(), RigidTransform::IDENTITY.inverse().to_matrix());
        assert_eq!(*camera.model_view_matrix(), Matrix4::identity());

        let p = camera.projection_matrix();
        assert_eq!(p[(0, 0)], 0.5);
        assert_eq!(p[(1, 1)], 0.5);
    }

    #[test]
    fn test_fit_keeps_rotation() {
        let rotation = Rotation::of_axis(Vector3::EY, 0.7);
        let mut camera = Camera::new(RigidTransform::new(rotation, Vector3::ZERO), 1.0);
        camera.fit(&Sphere::new(Vector3::new(1.0, 2.0, 3.0), 4.0));
        assert_eq!(camera.focus.rotation, rotation);
        assert_eq!(camera.focus.translation, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(camera.scale, 4.0);
    }

    #[test]
    fn test_fitted_sphere_fills_shorter_side() {
        let sphere = Sphere::new(Vector3::new(10.0, -5.0, 3.0), 4.0);
        let mut camera = Camera::new(
            RigidTransform::new(Rotation::of_axis(Vector3::new(1.0, 1.0, 0.0), 1.1), Vector3::ZERO),
            1.0,
        );
        camera.fit(&sphere);
        camera.update(&sphere, Viewport::new(300.0, 150.0));

        let vp = camera.view_projection();
        let c = sphere.center;
        let center = vp * Vector4::new(c.x, c.y, c.z, 1.0);
        assert_relative_eq!(center.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(center.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(center.z, 0.0, epsilon = 1e-12);

        // One radius along the camera's up axis reaches the top edge
        let up = camera.focus.rotation.v() * sphere.radius + c;
        let top = vp * Vector4::new(up.x, up.y, up.z, 1.0);
        assert_relative_eq!(top.y, 1.0, epsilon = 1e-12);

        // Half the width is twice the height, so the same distance sideways
        // only reaches halfway
        let right = camera.focus.rotation.u() * sphere.radius + c;
        let side = vp * Vector4::new(right.x, right.y, right.z, 1.0);
        assert_relative_eq!(side.x, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_depth_is_not_flipped() {
        let sphere = Sphere::new(Vector3::ZERO, 1.0);
        let mut camera = Camera::default();
        camera.fit(&sphere);
        camera.update(&sphere, Viewport::new(10.0, 10.0));

        let vp = camera.view_projection();
        let near = vp * Vector4::new(0.0, 0.0, 1.0, 1.0);
        let far = vp * Vector4::new(0.0, 0.0, -1.0, 1.0);
        assert_eq!(near.z, 1.0);
        assert_eq!(far.z, -1.0);
    }

    #[test]
    fn test_viewport_degenerate() {
        assert!(Viewport::new(0.0, 10.0).is_degenerate());
        assert!(Viewport::new(f64::NAN, 10.0).is_degenerate());
        assert!(Viewport::new(10.0, -1.0).is_degenerate());
        assert!(!Viewport::default().is_degenerate());
        assert!(!Viewport::new(1.0, 1.0).is_degenerate());
        assert_eq!(Viewport::new(640.0, 480.0).min_side(), 480.0);
    }
}
