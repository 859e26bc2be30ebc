//! Math utilities and types
//!
//! Provides the 2D math types used for HUD layout and drawing.

use std::ops::{Mul, MulAssign};

pub use nalgebra::{Matrix3, Vector2, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 4D vector type (used for RGBA colors)
pub type Vec4 = Vector4<f32>;

/// 3x3 matrix type (2D homogeneous coordinates)
pub type Mat3 = Matrix3<f32>;

/// 2D point type
pub type Point2 = nalgebra::Point2<f32>;

/// Affine 2D transform stored as a homogeneous 3x3 matrix.
///
/// Combining `a * b` yields a transform that applies `b` first, then `a`,
/// so a parent transform multiplied by a child's local transform maps child
/// coordinates into the parent's space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    matrix: Mat3,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    /// The identity transform
    pub fn identity() -> Self {
        Self { matrix: Mat3::identity() }
    }

    /// Wrap an existing homogeneous matrix
    pub fn from_matrix(matrix: Mat3) -> Self {
        Self { matrix }
    }

    /// Translation by `offset`
    pub fn translation(offset: Vec2) -> Self {
        Self { matrix: Mat3::new_translation(&offset) }
    }

    /// Non-uniform scaling around the origin
    pub fn scaling(factors: Vec2) -> Self {
        Self { matrix: Mat3::new_nonuniform_scaling(&factors) }
    }

    /// Rotation around the origin, clockwise on a y-down screen
    pub fn rotation(degrees: f32) -> Self {
        Self { matrix: Mat3::new_rotation(degrees.to_radians()) }
    }

    /// Underlying matrix
    pub fn matrix(&self) -> &Mat3 {
        &self.matrix
    }

    /// Combine with `other`, applying `other` first
    #[must_use]
    pub fn combine(&self, other: &Self) -> Self {
        Self { matrix: self.matrix * other.matrix }
    }

    /// Map a point through this transform
    pub fn transform_point(&self, point: Point2) -> Point2 {
        self.matrix.transform_point(&point)
    }

    /// Screen position of the local origin
    pub fn origin(&self) -> Vec2 {
        self.transform_point(Point2::origin()).coords
    }

    /// Inverse transform, if the matrix is invertible
    pub fn inverse(&self) -> Option<Self> {
        self.matrix.try_inverse().map(Self::from_matrix)
    }
}

impl Mul for Transform2D {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.combine(&rhs)
    }
}

impl MulAssign for Transform2D {
    fn mul_assign(&mut self, rhs: Self) {
        self.matrix *= rhs.matrix;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_translation_moves_origin() {
        let t = Transform2D::translation(Vec2::new(100.0, 250.0));
        assert_relative_eq!(t.origin(), Vec2::new(100.0, 250.0), epsilon = EPSILON);
    }

    #[test]
    fn test_combine_applies_right_hand_side_first() {
        let parent = Transform2D::translation(Vec2::new(10.0, 0.0));
        let child = Transform2D::scaling(Vec2::new(2.0, 2.0));

        let p = (parent * child).transform_point(Point2::new(1.0, 1.0));
        assert_relative_eq!(p, Point2::new(12.0, 2.0), epsilon = EPSILON);
    }

    #[test]
    fn test_composition_is_associative() {
        let a = Transform2D::translation(Vec2::new(30.0, -5.0));
        let b = Transform2D::rotation(90.0);
        let c = Transform2D::scaling(Vec2::new(1.5, 0.5));

        let left = (a * b) * c;
        let right = a * (b * c);
        assert_relative_eq!(*left.matrix(), *right.matrix(), epsilon = EPSILON);
    }

    #[test]
    fn test_rotation_quarter_turn() {
        let p = Transform2D::rotation(90.0).transform_point(Point2::new(1.0, 0.0));
        assert_relative_eq!(p, Point2::new(0.0, 1.0), epsilon = EPSILON);
    }

    #[test]
    fn test_inverse_roundtrip() {
        let t = Transform2D::translation(Vec2::new(5.0, 7.0)) * Transform2D::scaling(Vec2::new(2.0, 4.0));
        let inv = t.inverse().expect("invertible");

        assert_relative_eq!(*(t * inv).matrix(), Mat3::identity(), epsilon = EPSILON);
        assert!(Transform2D::scaling(Vec2::new(0.0, 1.0)).inverse().is_none());
    }

    #[test]
    fn test_mul_assign_matches_mul() {
        let mut t = Transform2D::translation(Vec2::new(1.0, 2.0));
        let local = Transform2D::rotation(45.0);
        let expected = t * local;
        t *= local;
        assert_eq!(t, expected);
    }
}
