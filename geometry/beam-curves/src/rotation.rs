//! Orientation frames (triads) represented as rotations.
//!
//! A [`Rotation`] maps the global basis onto the local material basis of a
//! beam cross-section. The first local basis vector is the beam tangent, the
//! second and third span the cross-section.

use std::ops::Mul;

use nalgebra::{Matrix3, Rotation3, Unit, UnitQuaternion, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::tolerance::{EPS_BASIS, EPS_QUATERNION, EPS_ROTATION_MATRIX};
use crate::{CurveError, Result};

/// A proper rotation describing a local right-handed orthonormal frame.
///
/// Composition follows the usual operator convention: `a * b` is the
/// rotation that applies `b` first and then `a`.
///
/// # Example
///
/// ```
/// use beam_curves::Rotation;
/// use nalgebra::Vector3;
///
/// let frame = Rotation::from_basis(&Vector3::y(), &Vector3::z()).unwrap();
/// let tangent = frame.tangent();
/// assert!((tangent - Vector3::y()).norm() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rotation {
    quaternion: UnitQuaternion<f64>,
}

impl Default for Rotation {
    fn default() -> Self {
        Self::identity()
    }
}

impl Rotation {
    /// The identity rotation (local frame equals the global frame).
    #[must_use]
    pub fn identity() -> Self {
        Self {
            quaternion: UnitQuaternion::identity(),
        }
    }

    /// Wrap an existing unit quaternion.
    #[must_use]
    pub fn from_quaternion(quaternion: UnitQuaternion<f64>) -> Self {
        Self { quaternion }
    }

    /// Rotation by `angle` radians about `axis` (right-hand rule).
    ///
    /// The axis does not need to be normalized. A zero axis yields the
    /// identity.
    #[must_use]
    pub fn from_axis_angle(axis: &Vector3<f64>, angle: f64) -> Self {
        Unit::try_new(*axis, f64::EPSILON).map_or_else(Self::identity, |axis| Self {
            quaternion: UnitQuaternion::from_axis_angle(&axis, angle),
        })
    }

    /// Build a frame from a tangent and a second, non-parallel direction.
    ///
    /// The first basis vector is `t1` normalized, the third basis vector is
    /// `normalize(t1 × t2)` and the second one completes the right-handed
    /// set, i.e. it is the part of `t2` orthogonal to `t1`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::DegenerateBasis`] if either vector has zero
    /// length or the two vectors are parallel.
    pub fn from_basis(t1: &Vector3<f64>, t2: &Vector3<f64>) -> Result<Self> {
        let t1_norm = t1.norm();
        let t2_norm = t2.norm();
        if !(t1_norm > 0.0 && t2_norm > 0.0) || !t1_norm.is_finite() || !t2_norm.is_finite() {
            return Err(CurveError::degenerate_basis(format!(
                "basis vectors must be finite and non-zero, got {t1:?} and {t2:?}"
            )));
        }

        let e1 = t1 / t1_norm;
        let cross = e1.cross(&(t2 / t2_norm));
        let sine = cross.norm();
        if sine < EPS_BASIS {
            return Err(CurveError::degenerate_basis(format!(
                "basis vectors {t1:?} and {t2:?} are parallel"
            )));
        }

        let e3 = cross / sine;
        let e2 = e3.cross(&e1);
        let matrix = Matrix3::from_columns(&[e1, e2, e3]);
        Ok(Self {
            quaternion: UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(
                matrix,
            )),
        })
    }

    /// Build a frame from a rotation matrix whose columns are the basis
    /// vectors.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidRotation`] if the matrix is not
    /// orthonormal or has a determinant other than +1.
    pub fn from_rotation_matrix(matrix: &Matrix3<f64>) -> Result<Self> {
        if matrix.iter().any(|value| !value.is_finite()) {
            return Err(CurveError::invalid_rotation(
                "matrix contains non-finite entries",
            ));
        }

        let deviation = (matrix.transpose() * matrix - Matrix3::identity()).amax();
        if deviation > EPS_ROTATION_MATRIX {
            return Err(CurveError::invalid_rotation(format!(
                "columns are not orthonormal (deviation {deviation:e})"
            )));
        }

        let determinant = matrix.determinant();
        if (determinant - 1.0).abs() > EPS_ROTATION_MATRIX {
            return Err(CurveError::invalid_rotation(format!(
                "determinant is {determinant}, expected 1"
            )));
        }

        Ok(Self {
            quaternion: UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(
                *matrix,
            )),
        })
    }

    /// The underlying unit quaternion.
    #[must_use]
    pub fn quaternion(&self) -> &UnitQuaternion<f64> {
        &self.quaternion
    }

    /// Compose two rotations: the result applies `other` first, then `self`.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            quaternion: self.quaternion * other.quaternion,
        }
    }

    /// Rotate a vector.
    #[must_use]
    pub fn apply(&self, vector: &Vector3<f64>) -> Vector3<f64> {
        self.quaternion * vector
    }

    /// The inverse rotation.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            quaternion: self.quaternion.inverse(),
        }
    }

    /// The rotation matrix; its columns are the local basis vectors.
    #[must_use]
    pub fn rotation_matrix(&self) -> Matrix3<f64> {
        self.quaternion.to_rotation_matrix().into_inner()
    }

    /// The three local basis vectors.
    #[must_use]
    pub fn basis(&self) -> [Vector3<f64>; 3] {
        [
            self.apply(&Vector3::x()),
            self.apply(&Vector3::y()),
            self.apply(&Vector3::z()),
        ]
    }

    /// The first local basis vector (beam tangent).
    #[must_use]
    pub fn tangent(&self) -> Vector3<f64> {
        self.apply(&Vector3::x())
    }

    /// The rotation vector (axis scaled by angle).
    #[must_use]
    pub fn rotation_vector(&self) -> Vector3<f64> {
        self.quaternion.scaled_axis()
    }

    /// Compare two rotations within a tolerance on the quaternion
    /// coefficients. `q` and `-q` describe the same rotation.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        let a = self.quaternion.quaternion().coords;
        let b = other.quaternion.quaternion().coords;
        (a - b).norm() < tolerance || (a + b).norm() < tolerance
    }

    /// Same as [`Self::approx_eq`] with the default quaternion tolerance.
    #[must_use]
    pub fn is_close(&self, other: &Self) -> bool {
        self.approx_eq(other, EPS_QUATERNION)
    }
}

impl Mul for Rotation {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

impl Mul<Vector3<f64>> for Rotation {
    type Output = Vector3<f64>;

    fn mul(self, rhs: Vector3<f64>) -> Vector3<f64> {
        self.apply(&rhs)
    }
}

impl From<UnitQuaternion<f64>> for Rotation {
    fn from(quaternion: UnitQuaternion<f64>) -> Self {
        Self::from_quaternion(quaternion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_identity() {
        let r = Rotation::identity();
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_relative_eq!(r.apply(&v), v, epsilon = 1e-15);
        assert_eq!(Rotation::default(), r);
    }

    #[test]
    fn test_from_basis_axes() {
        let r = Rotation::from_basis(&Vector3::new(2.0, 0.0, 0.0), &Vector3::new(1.0, 3.0, 0.0))
            .unwrap();
        let [e1, e2, e3] = r.basis();
        assert_relative_eq!(e1, Vector3::x(), epsilon = 1e-12);
        assert_relative_eq!(e2, Vector3::y(), epsilon = 1e-12);
        assert_relative_eq!(e3, Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn test_from_basis_third_axis_is_cross_product() {
        let t1 = Vector3::new(1.0, 1.0, 0.0);
        let t2 = Vector3::new(0.0, 1.0, 1.0);
        let r = Rotation::from_basis(&t1, &t2).unwrap();
        let [e1, _, e3] = r.basis();
        assert_relative_eq!(e1, t1.normalize(), epsilon = 1e-12);
        assert_relative_eq!(e3, t1.cross(&t2).normalize(), epsilon = 1e-12);
    }

    #[test]
    fn test_from_basis_parallel_fails() {
        let err = Rotation::from_basis(&Vector3::x(), &Vector3::new(-3.0, 0.0, 0.0)).unwrap_err();
        assert!(err.is_degenerate_basis());

        let err = Rotation::from_basis(&Vector3::zeros(), &Vector3::y()).unwrap_err();
        assert!(err.is_degenerate_basis());
    }

    #[test]
    fn test_from_rotation_matrix() {
        let m = Matrix3::from_columns(&[Vector3::y(), -Vector3::x(), Vector3::z()]);
        let r = Rotation::from_rotation_matrix(&m).unwrap();
        assert_relative_eq!(r.rotation_matrix(), m, epsilon = 1e-12);
        assert!(r.is_close(&Rotation::from_axis_angle(&Vector3::z(), FRAC_PI_2)));
    }

    #[test]
    fn test_from_rotation_matrix_rejects_invalid() {
        let scaled = Matrix3::identity() * 2.0;
        assert!(Rotation::from_rotation_matrix(&scaled)
            .unwrap_err()
            .is_invalid_rotation());

        let reflection = Matrix3::from_columns(&[Vector3::x(), Vector3::y(), -Vector3::z()]);
        assert!(Rotation::from_rotation_matrix(&reflection)
            .unwrap_err()
            .is_invalid_rotation());

        let nan = Matrix3::from_element(f64::NAN);
        assert!(Rotation::from_rotation_matrix(&nan).is_err());
    }

    #[test]
    fn test_compose_applies_right_first() {
        let a = Rotation::from_axis_angle(&Vector3::z(), FRAC_PI_2);
        let b = Rotation::from_axis_angle(&Vector3::x(), FRAC_PI_2);
        let v = Vector3::y();
        // b: y -> z, a: z -> z
        assert_relative_eq!((a * b).apply(&v), Vector3::z(), epsilon = 1e-12);
        // a: y -> -x, b: -x -> -x
        assert_relative_eq!((b * a).apply(&v), -Vector3::x(), epsilon = 1e-12);
        assert_relative_eq!(a * (b * v), (a * b) * v, epsilon = 1e-12);
    }

    #[test]
    fn test_inverse() {
        let r = Rotation::from_axis_angle(&Vector3::new(1.0, 2.0, 3.0), 0.7);
        assert!((r * r.inverse()).is_close(&Rotation::identity()));
    }

    #[test]
    fn test_approx_eq_sign_ambiguity() {
        let r = Rotation::from_axis_angle(&Vector3::z(), 0.3);
        let full_turn = Rotation::from_axis_angle(&Vector3::z(), std::f64::consts::TAU);
        // A full turn flips the quaternion sign but is the same rotation
        assert!((full_turn * r).is_close(&r));
    }

    #[test]
    fn test_rotation_vector() {
        let r = Rotation::from_axis_angle(&Vector3::y(), 0.5);
        assert_relative_eq!(r.rotation_vector(), Vector3::new(0.0, 0.5, 0.0), epsilon = 1e-12);
    }

    fn arb_vector() -> impl Strategy<Value = Vector3<f64>> {
        prop::array::uniform3(-10.0..10.0f64).prop_map(|[x, y, z]| Vector3::new(x, y, z))
    }

    fn arb_rotation() -> impl Strategy<Value = Rotation> {
        (arb_vector(), -3.0..3.0f64).prop_map(|(axis, angle)| Rotation::from_axis_angle(&axis, angle))
    }

    proptest! {
        #[test]
        fn prop_compose_is_associative(a in arb_rotation(), b in arb_rotation(), c in arb_rotation()) {
            prop_assert!(((a * b) * c).approx_eq(&(a * (b * c)), 1e-12));
        }

        #[test]
        fn prop_from_basis_is_orthonormal(t1 in arb_vector(), t2 in arb_vector()) {
            prop_assume!(t1.norm() > 1e-3 && t2.norm() > 1e-3);
            prop_assume!(t1.normalize().cross(&t2.normalize()).norm() > 1e-3);
            let r = Rotation::from_basis(&t1, &t2).unwrap();
            let m = r.rotation_matrix();
            prop_assert!((m.transpose() * m - Matrix3::identity()).amax() < 1e-12);
            prop_assert!((m.determinant() - 1.0).abs() < 1e-12);
            prop_assert!((r.tangent() - t1.normalize()).norm() < 1e-12);
        }

        #[test]
        fn prop_rotation_matrix_roundtrip(r in arb_rotation()) {
            let back = Rotation::from_rotation_matrix(&r.rotation_matrix()).unwrap();
            prop_assert!(back.approx_eq(&r, 1e-12));
        }
    }
}
