//! 3D affine transformation utilities
//!
//! [`Transform3D`] wraps a homogeneous 4×4 matrix: top-left 3×3 holds
//! rotation/scale, the rightmost column holds translation, and the bottom
//! row is `[0, 0, 0, 1]` for every factory in this module (the wrapper does
//! not enforce it for hand-built matrices). Element-wise negation, addition,
//! subtraction, and scalar multiplication are available on the exposed
//! nalgebra matrix itself.

use crate::error::{Error, Result};
use crate::point::{Point3d, Vector3d};
use nalgebra::{Matrix4, Rotation3, RowVector4, Unit, Vector3};
use serde::{Deserialize, Serialize};

/// A 3D affine transformation that can be applied to points and vectors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform3D {
    pub matrix: Matrix4<f64>,
}

impl Transform3D {
    /// Create an identity transformation
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Create a transformation from four row vectors
    pub fn from_rows(rows: [[f64; 4]; 4]) -> Self {
        Self {
            matrix: Matrix4::from_rows(&[
                RowVector4::from_row_slice(&rows[0]),
                RowVector4::from_row_slice(&rows[1]),
                RowVector4::from_row_slice(&rows[2]),
                RowVector4::from_row_slice(&rows[3]),
            ]),
        }
    }

    /// Create a transformation from 16 scalars in row-major order
    ///
    /// Fails with [`Error::InvalidArity`] unless exactly 16 elements are
    /// given.
    pub fn from_row_major(elements: &[f64]) -> Result<Self> {
        if elements.len() != 16 {
            return Err(Error::InvalidArity {
                context: "Transform3D::from_row_major",
                expected: "16 elements",
                got: elements.len(),
            });
        }
        let mut matrix = Matrix4::zeros();
        for row in 0..4 {
            for col in 0..4 {
                matrix[(row, col)] = elements[row * 4 + col];
            }
        }
        Ok(Self { matrix })
    }

    /// Create a translation transformation
    pub fn translation(translation: Vector3d) -> Self {
        Self {
            matrix: Matrix4::new_translation(&translation),
        }
    }

    /// Create a non-uniform scaling transformation
    pub fn scaling(sx: f64, sy: f64, sz: f64) -> Self {
        Self::scaling_by(Vector3d::new(sx, sy, sz))
    }

    /// Create a non-uniform scaling transformation from a vector
    pub fn scaling_by(scale: Vector3d) -> Self {
        Self {
            matrix: Matrix4::new_nonuniform_scaling(&scale),
        }
    }

    /// Create a uniform scaling transformation
    pub fn uniform_scaling(scale: f64) -> Self {
        Self {
            matrix: Matrix4::new_scaling(scale),
        }
    }

    /// Create a right-handed rotation about the x axis, angle in radians
    pub fn rotation_x(angle: f64) -> Self {
        Self {
            matrix: Rotation3::from_axis_angle(&Vector3::x_axis(), angle).to_homogeneous(),
        }
    }

    /// Create a right-handed rotation about the y axis, angle in radians
    pub fn rotation_y(angle: f64) -> Self {
        Self {
            matrix: Rotation3::from_axis_angle(&Vector3::y_axis(), angle).to_homogeneous(),
        }
    }

    /// Create a right-handed rotation about the z axis, angle in radians
    pub fn rotation_z(angle: f64) -> Self {
        Self {
            matrix: Rotation3::from_axis_angle(&Vector3::z_axis(), angle).to_homogeneous(),
        }
    }

    /// Create a rotation about an arbitrary axis, angle in radians
    ///
    /// The axis does not have to be a unit vector; it is normalized first.
    /// Fails with [`Error::DegenerateInput`] when the axis has zero length.
    pub fn rotation_axis_angle(axis: Vector3d, angle: f64) -> Result<Self> {
        let axis = Unit::try_new(axis, 0.0)
            .ok_or(Error::DegenerateInput("rotation axis has zero length"))?;
        Ok(Self {
            matrix: Rotation3::from_axis_angle(&axis, angle).to_homogeneous(),
        })
    }

    /// Apply the transformation to a point
    pub fn transform_point(&self, point: &Point3d) -> Point3d {
        let homogeneous = self.matrix * point.to_homogeneous();
        Point3d::from_homogeneous(homogeneous).unwrap_or(*point)
    }

    /// Apply the transformation to a vector (translation is ignored)
    pub fn transform_vector(&self, vector: &Vector3d) -> Vector3d {
        self.matrix.fixed_view::<3, 3>(0, 0) * vector
    }

    /// Compose this transformation with another
    ///
    /// `a.compose(b)` (equivalently `a * b`) applies `b` first and `a`
    /// second. Composition is not commutative.
    pub fn compose(self, other: Self) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Get the inverse transformation
    pub fn inverse(self) -> Option<Self> {
        self.matrix
            .try_inverse()
            .map(|inv_matrix| Self { matrix: inv_matrix })
    }

    /// Check if this is approximately the identity transformation
    pub fn is_identity(&self, epsilon: f64) -> bool {
        (self.matrix - Matrix4::identity()).norm() < epsilon
    }
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for Transform3D {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.compose(rhs)
    }
}

impl From<Matrix4<f64>> for Transform3D {
    fn from(matrix: Matrix4<f64>) -> Self {
        Self { matrix }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, PI};

    #[test]
    fn zero_angle_rotations_are_identity() {
        assert_eq!(Transform3D::rotation_x(0.0), Transform3D::identity());
        assert_eq!(Transform3D::rotation_y(0.0), Transform3D::identity());
        assert_eq!(Transform3D::rotation_z(0.0), Transform3D::identity());
    }

    #[test]
    fn opposite_rotations_cancel() {
        let roundtrip = Transform3D::rotation_z(FRAC_PI_3) * Transform3D::rotation_z(-FRAC_PI_3);
        assert!(roundtrip.is_identity(1e-12));
    }

    #[test]
    fn axis_angle_rotation_is_orthogonal() {
        let t = Transform3D::rotation_axis_angle(Vector3d::new(1.0, 2.0, -0.5), 1.234).unwrap();
        let rotation = t.matrix.fixed_view::<3, 3>(0, 0).into_owned();
        assert_relative_eq!(
            rotation.transpose() * rotation,
            nalgebra::Matrix3::identity(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn axis_angle_normalizes_non_unit_axis() {
        let long = Transform3D::rotation_axis_angle(Vector3d::new(0.0, 0.0, 10.0), 0.7).unwrap();
        let unit = Transform3D::rotation_z(0.7);
        assert_relative_eq!(long.matrix, unit.matrix, epsilon = 1e-12);
    }

    #[test]
    fn axis_angle_rejects_zero_axis() {
        let err = Transform3D::rotation_axis_angle(Vector3d::zeros(), 1.0).unwrap_err();
        assert!(matches!(err, Error::DegenerateInput(_)));
    }

    #[test]
    fn composition_is_associative_but_not_commutative() {
        let a = Transform3D::rotation_x(FRAC_PI_2);
        let b = Transform3D::translation(Vector3d::new(1.0, 0.0, 0.0));
        let c = Transform3D::uniform_scaling(2.0);
        assert_relative_eq!(((a * b) * c).matrix, (a * (b * c)).matrix, epsilon = 1e-12);
        assert_ne!((a * b).matrix, (b * a).matrix);
    }

    #[test]
    fn compose_applies_right_operand_first() {
        let rotate = Transform3D::rotation_z(PI);
        let translate = Transform3D::translation(Vector3d::new(1.0, 0.0, 0.0));
        // Translate first, then rotate: (1,0,0) -> (2,0,0) -> (-2,0,0).
        let p = (rotate * translate).transform_point(&Point3d::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p, Point3d::new(-2.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn scaling_and_translation_apply_to_points() {
        let t = Transform3D::translation(Vector3d::new(1.0, 2.0, 3.0));
        assert_eq!(
            t.transform_point(&Point3d::new(0.0, 0.0, 0.0)),
            Point3d::new(1.0, 2.0, 3.0)
        );
        let s = Transform3D::scaling(2.0, 3.0, 4.0);
        assert_eq!(
            s.transform_point(&Point3d::new(1.0, 1.0, 1.0)),
            Point3d::new(2.0, 3.0, 4.0)
        );
        // Vectors ignore translation.
        assert_eq!(
            t.transform_vector(&Vector3d::new(1.0, 1.0, 1.0)),
            Vector3d::new(1.0, 1.0, 1.0)
        );
    }

    #[test]
    fn element_wise_algebra_on_the_exposed_matrix() {
        let a = Transform3D::uniform_scaling(2.0).matrix;
        let b = Transform3D::translation(Vector3d::new(1.0, 0.0, 0.0)).matrix;
        assert_eq!(a + b, b + a);
        assert_eq!(a - a, Matrix4::zeros());
        assert_eq!(-a, a * -1.0);
        assert_eq!(a * 3.0, a + a + a);
    }

    #[test]
    fn from_row_major_checks_arity() {
        let err = Transform3D::from_row_major(&[1.0; 12]).unwrap_err();
        assert!(matches!(err, Error::InvalidArity { got: 12, .. }));

        let identity = Transform3D::from_row_major(&[
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
        .unwrap();
        assert_eq!(identity, Transform3D::identity());
    }

    #[test]
    fn from_rows_matches_row_major() {
        let rows = Transform3D::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);
        let flat = Transform3D::from_row_major(
            &(1..=16).map(|x| x as f64).collect::<Vec<_>>(),
        )
        .unwrap();
        assert_eq!(rows, flat);
    }
}
