/// Rigid transforms (rotation followed by translation)
use nalgebra::Matrix4;

use crate::rotation::Rotation;
use crate::vector::Vector3;

/// Pose of a frame relative to world: `p_world = rotation * p_frame + translation`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RigidTransform {
    pub rotation: Rotation,
    pub translation: Vector3,
}

impl RigidTransform {
    pub const IDENTITY: Self = Self {
        rotation: Rotation::IDENTITY,
        translation: Vector3::ZERO,
    };

    pub fn new(rotation: Rotation, translation: Vector3) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    pub fn transform(&self, p: Vector3) -> Vector3 {
        self.rotation.transform(p) + self.translation
    }

    /// Transform mapping world coordinates back into this frame
    pub fn inverse(&self) -> Self {
        let rotation = self.rotation.inverse();
        let translation = -rotation.transform(self.translation);
        Self {
            rotation,
            translation,
        }
    }

    /// Homogeneous matrix with the translation in the fourth column
    pub fn to_matrix(&self) -> Matrix4<f64> {
        let mut m = self.rotation.to_matrix();
        m[(0, 3)] = self.translation.x;
        m[(1, 3)] = self.translation.y;
        m[(2, 3)] = self.translation.z;
        m
    }
}
