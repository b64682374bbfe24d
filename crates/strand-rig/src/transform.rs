//! Rigid 2D transforms.

use glam::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rigid 2D transform: rotation followed by translation.
///
/// No scale or shear, so applying one to a mesh preserves its shape.
/// Rotation is in radians, counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rigid2D {
    pub translation: Vec2,
    pub rotation: f32,
}

impl Rigid2D {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        translation: Vec2::ZERO,
        rotation: 0.0,
    };

    /// Creates a transform from a translation and a rotation angle.
    pub fn new(translation: Vec2, rotation: f32) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Creates a pure translation.
    pub fn from_translation(translation: Vec2) -> Self {
        Self {
            translation,
            rotation: 0.0,
        }
    }

    /// Applies the transform to a point: rotate, then translate.
    pub fn transform_point(&self, point: Vec2) -> Vec2 {
        self.translation + Vec2::from_angle(self.rotation).rotate(point)
    }

    /// Applies only the rotation part to a vector.
    pub fn transform_vector(&self, vector: Vec2) -> Vec2 {
        Vec2::from_angle(self.rotation).rotate(vector)
    }
}

impl Default for Rigid2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_identity_leaves_points_unchanged() {
        let p = Vec2::new(3.0, -2.0);
        assert_eq!(Rigid2D::IDENTITY.transform_point(p), p);
    }

    #[test]
    fn test_rotate_then_translate() {
        // Quarter turn CCW takes +X to +Y, then shift by (1, 0)
        let t = Rigid2D::new(Vec2::X, FRAC_PI_2);
        let p = t.transform_point(Vec2::X);

        assert!((p.x - 1.0).abs() < 1e-6);
        assert!((p.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_vector_ignores_translation() {
        let t = Rigid2D::new(Vec2::new(100.0, 100.0), FRAC_PI_2);
        let v = t.transform_vector(Vec2::X);

        assert!(v.x.abs() < 1e-6);
        assert!((v.y - 1.0).abs() < 1e-6);
    }
}
