/// Quaternions and the unit-quaternion rotation built on them
use nalgebra::Matrix4;
use std::ops::Mul;

use crate::vector::Vector3;

/// Quaternion `w + xi + yj + zk`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Quaternion {
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// Pure quaternion `(0, p)` used to push a point through a rotation
    pub fn pure(p: Vector3) -> Self {
        Self::new(0.0, p.x, p.y, p.z)
    }

    pub fn conjugate(self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    pub fn vector(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }
}

/// Hamilton product. Not commutative.
impl Mul for Quaternion {
    type Output = Self;
    fn mul(self, q: Self) -> Self {
        Self::new(
            self.w * q.w - self.x * q.x - self.y * q.y - self.z * q.z,
            self.w * q.x + self.x * q.w + self.y * q.z - self.z * q.y,
            self.w * q.y - self.x * q.z + self.y * q.w + self.z * q.x,
            self.w * q.z + self.x * q.y - self.y * q.x + self.z * q.w,
        )
    }
}

/// A 3D rotation stored as a unit quaternion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    q: Quaternion,
}

impl Rotation {
    pub const IDENTITY: Self = Self {
        q: Quaternion::new(1.0, 0.0, 0.0, 0.0),
    };

    /// Wrap a quaternion that is already normalized
    pub fn from_unit_quaternion(q: Quaternion) -> Self {
        Self { q }
    }

    /// Rotation of `radians` around `axis` (right-hand rule).
    ///
    /// The axis does not need to be normalized. A zero-length axis yields the
    /// identity instead of NaN components.
    pub fn of_axis(axis: Vector3, radians: f64) -> Self {
        let s = (0.5 * radians).sin() / axis.length();
        if !s.is_finite() {
            return Self::IDENTITY;
        }
        let c = (0.5 * radians).cos();
        Self {
            q: Quaternion::new(c, s * axis.x, s * axis.y, s * axis.z),
        }
    }

    pub fn quaternion(&self) -> Quaternion {
        self.q
    }

    /// Rotate a point via `q (0, p) q*`
    pub fn transform(&self, p: Vector3) -> Vector3 {
        (self.q * Quaternion::pure(p) * self.q.conjugate()).vector()
    }

    pub fn inverse(&self) -> Self {
        Self {
            q: self.q.conjugate(),
        }
    }

    /// Image of the x axis
    pub fn u(&self) -> Vector3 {
        self.transform(Vector3::EX)
    }

    /// Image of the y axis
    pub fn v(&self) -> Vector3 {
        self.transform(Vector3::EY)
    }

    /// Image of the z axis
    pub fn n(&self) -> Vector3 {
        self.transform(Vector3::EZ)
    }

    /// Homogeneous rotation matrix acting on column vectors.
    pub fn to_matrix(&self) -> Matrix4<f64> {
        let q = self.q;

        let ww = q.w * q.w;
        let xx = q.x * q.x;
        let yy = q.y * q.y;
        let zz = q.z * q.z;

        let wx = q.w * q.x;
        let wy = q.w * q.y;
        let wz = q.w * q.z;

        let xy = q.x * q.y;
        let yz = q.y * q.z;
        let zx = q.z * q.x;

        // Arguments are in row order
        Matrix4::new(
            ww + xx - yy - zz, 2.0 * (xy - wz), 2.0 * (zx + wy), 0.0,
            2.0 * (xy + wz), ww - xx + yy - zz, 2.0 * (yz - wx), 0.0,
            2.0 * (zx - wy), 2.0 * (yz + wx), ww - xx - yy + zz, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// `a * b` applies `b` first, then `a`.
impl Mul for Rotation {
    type Output = Self;
    fn mul(self, r: Self) -> Self {
        Self { q: self.q * r.q }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn assert_vec_eq(a: Vector3, b: Vector3) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-12);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-12);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-12);
    }

    fn sample_points() -> Vec<Vector3> {
        vec![
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.3, -2.0, 5.5),
            Vector3::new(-7.25, 1.5, 0.125),
            Vector3::ZERO,
        ]
    }

    fn sample_rotations() -> Vec<Rotation> {
        vec![
            Rotation::IDENTITY,
            Rotation::of_axis(Vector3::EZ, FRAC_PI_2),
            Rotation::of_axis(Vector3::new(0.3, 1.0, 0.0), 1.234),
            Rotation::of_axis(Vector3::new(-4.0, 2.0, 7.0), -2.5),
            Rotation::of_axis(Vector3::new(1.0, 1.0, 1.0), 3.0 * PI),
            unit(Quaternion::new(0.5, -1.0, 2.0, 0.25)),
            unit(Quaternion::new(-3.0, 0.1, 0.0, 4.0)),
            unit(Quaternion::new(0.0, 0.0, 1.0, 1.0)),
        ]
    }

    fn unit(q: Quaternion) -> Rotation {
        let norm = (q.w * q.w + q.x * q.x + q.y * q.y + q.z * q.z).sqrt();
        Rotation::from_unit_quaternion(Quaternion::new(q.w / norm, q.x / norm, q.y / norm, q.z / norm))
    }

    #[test]
    fn test_of_axis_is_unit_quaternion() {
        for r in sample_rotations() {
            let q = r.quaternion();
            assert_relative_eq!(q.w * q.w + q.x * q.x + q.y * q.y + q.z * q.z, 1.0, epsilon = 1e-12);
            assert_eq!(Rotation::from_unit_quaternion(q), r);
        }
    }

    #[test]
    fn test_quarter_turn_about_z() {
        let r = Rotation::of_axis(Vector3::EZ, FRAC_PI_2);
        assert_vec_eq(r.transform(Vector3::EX), Vector3::EY);
        assert_vec_eq(r.transform(Vector3::EY), -Vector3::EX);
        assert_vec_eq(r.n(), Vector3::EZ);
    }

    #[test]
    fn test_hamilton_product_is_not_commutative() {
        let i = Quaternion::new(0.0, 1.0, 0.0, 0.0);
        let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);
        assert_eq!(i * j, Quaternion::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(j * i, Quaternion::new(0.0, 0.0, 0.0, -1.0));
    }

    #[test]
    fn test_inverse_undoes_transform() {
        for r in sample_rotations() {
            for p in sample_points() {
                assert_vec_eq(r.inverse().transform(r.transform(p)), p);
            }
        }
    }

    #[test]
    fn test_transform_preserves_length() {
        for r in sample_rotations() {
            for p in sample_points() {
                assert_relative_eq!(r.transform(p).length(), p.length(), epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_zero_axis_is_identity() {
        for angle in [0.0, 0.5, -3.0, 100.0] {
            let r = Rotation::of_axis(Vector3::ZERO, angle);
            assert_eq!(r, Rotation::IDENTITY);
            for p in sample_points() {
                assert_eq!(r.transform(p), p);
            }
        }
    }

    #[test]
    fn test_composition_order() {
        let a = Rotation::of_axis(Vector3::EZ, FRAC_PI_2);
        let b = Rotation::of_axis(Vector3::EX, FRAC_PI_2);
        let p = Vector3::new(0.2, -1.0, 3.0);
        assert_vec_eq((a * b).transform(p), a.transform(b.transform(p)));
    }

    #[test]
    fn test_matrix_matches_transform() {
        for r in sample_rotations() {
            let m = r.to_matrix();
            for p in sample_points() {
                let h = m * nalgebra::Vector4::new(p.x, p.y, p.z, 1.0);
                assert_vec_eq(Vector3::new(h.x, h.y, h.z), r.transform(p));
                assert_relative_eq!(h.w, 1.0);
            }
        }
    }

    #[test]
    fn test_matrix_is_orthonormal() {
        for r in sample_rotations() {
            let m = r.to_matrix().fixed_view::<3, 3>(0, 0).into_owned();
            let should_be_identity = m * m.transpose();
            assert_relative_eq!(should_be_identity, nalgebra::Matrix3::identity(), epsilon = 1e-12);
            assert_relative_eq!(m.determinant(), 1.0, epsilon = 1e-12);
        }
    }
}
