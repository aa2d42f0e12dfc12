/// Orthographic projection utilities
use nalgebra::Matrix4;

use crate::bounds::{Box3, Interval, Sphere};

/// Map a view-space box linearly onto the `[-1, 1]` cube.
///
/// The depth axis keeps its direction: points nearer the viewer (larger z)
/// end up with larger depth, so the render side clears depth to 0 and keeps
/// greater values.
pub fn orthographic(volume: &Box3) -> Matrix4<f64> {
    let c = volume.center();
    let w = volume.x.upper - c.x;
    let h = volume.y.upper - c.y;
    let d = volume.z.upper - c.z;
    Matrix4::new(
        1.0 / w, 0.0, 0.0, -c.x / w,
        0.0, 1.0 / h, 0.0, -c.y / h,
        0.0, 0.0, 1.0 / d, -c.z / d,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Horizontal and vertical half extents; the shorter viewport side spans `±scale`
pub fn half_extents(scale: f64, width: f64, height: f64) -> (f64, f64) {
    if width > height {
        (scale * width / height, scale)
    } else {
        (scale, scale * height / width)
    }
}

/// View volume for a sphere given in view coordinates.
///
/// The volume is centered on the view axis laterally and spans the sphere's
/// depth.
pub fn view_volume(view_sphere: &Sphere, scale: f64, width: f64, height: f64) -> Box3 {
    let (w, h) = half_extents(scale, width, height);
    let z = view_sphere.center.z;
    Box3::new(
        Interval::new(-w, w),
        Interval::new(-h, h),
        Interval::new(z - view_sphere.radius, z + view_sphere.radius),
    )
}

pub fn projection_matrix(view_sphere: &Sphere, scale: f64, width: f64, height: f64) -> Matrix4<f64> {
    orthographic(&view_volume(view_sphere, scale, width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vector3;
    use nalgebra::Vector4;

    #[test]
    fn test_square_viewport() {
        let sphere = Sphere::new(Vector3::ZERO, 2.0);
        let m = projection_matrix(&sphere, 2.0, 100.0, 100.0);
        assert_eq!(m[(0, 0)], 0.5);
        assert_eq!(m[(1, 1)], 0.5);
        assert_eq!(m[(2, 2)], 0.5);
        assert_eq!(m[(2, 3)], 0.0);
    }

    #[test]
    fn test_shorter_side_spans_scale() {
        assert_eq!(half_extents(3.0, 200.0, 100.0), (6.0, 3.0));
        assert_eq!(half_extents(3.0, 100.0, 200.0), (3.0, 6.0));
        assert_eq!(half_extents(3.0, 100.0, 100.0), (3.0, 3.0));
    }

    #[test]
    fn test_volume_corners_map_to_unit_cube() {
        let volume = Box3::new(
            Interval::new(-4.0, 4.0),
            Interval::new(-2.0, 2.0),
            Interval::new(-7.0, -3.0),
        );
        let m = orthographic(&volume);
        let near = m * Vector4::new(4.0, 2.0, -3.0, 1.0);
        let far = m * Vector4::new(-4.0, -2.0, -7.0, 1.0);
        assert_eq!(near, Vector4::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(far, Vector4::new(-1.0, -1.0, -1.0, 1.0));
    }
}
