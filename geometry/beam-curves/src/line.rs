//! Straight lines.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::generator::{CurveFunction, CurveGenerator, CurvePoint};
use crate::tolerance::{EPS_POS, EPS_QUATERNION};
use crate::{CurveError, Result, Rotation};

/// Input parameters of a straight line between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineParams {
    /// First point of the line.
    pub start: Point3<f64>,
    /// Last point of the line.
    pub end: Point3<f64>,
}

impl LineParams {
    /// Create line parameters from two points.
    #[must_use]
    pub fn new(start: Point3<f64>, end: Point3<f64>) -> Self {
        Self { start, end }
    }

    /// A line of `length` that continues along the tangent of an existing
    /// triad at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidGeometry`] if the length is not positive.
    pub fn at_node(position: Point3<f64>, rotation: &Rotation, length: f64) -> Result<Self> {
        if !(length > 0.0) || !length.is_finite() {
            return Err(CurveError::invalid_geometry(format!(
                "line length has to be positive, got {length}"
            )));
        }
        Ok(Self::new(position, position + rotation.tangent() * length))
    }

    /// Build the curve generator.
    ///
    /// The parameter interval is `[0, 1]` and the triad is constant.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidGeometry`] if both points coincide.
    pub fn generator(&self) -> Result<CurveGenerator> {
        let direction = self.end - self.start;
        let length = direction.norm();
        if !(length > EPS_POS) || !length.is_finite() {
            return Err(CurveError::invalid_geometry(format!(
                "start and end point of a line coincide ({:?})",
                self.start
            )));
        }

        let rotation = line_rotation(&direction)?;
        Ok(CurveGenerator::new(
            CurveFunction::Line(LineFunction {
                start: self.start,
                direction,
                rotation,
            }),
            (0.0, 1.0),
            length,
        ))
    }
}

/// The constant triad of a straight line with the given direction.
///
/// The secondary axis is the global Z axis if its projection onto the
/// tangent is smaller than the projection of the global Y axis by more than
/// [`EPS_QUATERNION`], otherwise the global Y axis.
///
/// # Errors
///
/// Returns [`CurveError::DegenerateBasis`] for a zero direction.
pub fn line_rotation(direction: &Vector3<f64>) -> Result<Rotation> {
    let norm = direction.norm();
    if !(norm > 0.0) {
        return Err(CurveError::degenerate_basis("line direction has zero length"));
    }
    let t1 = direction / norm;

    let t2 = if t1.z.abs() < t1.y.abs() - EPS_QUATERNION {
        Vector3::z()
    } else {
        Vector3::y()
    };
    Rotation::from_basis(&t1, &t2)
}

/// Linear interpolation between two points with a constant triad.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineFunction {
    start: Point3<f64>,
    direction: Vector3<f64>,
    rotation: Rotation,
}

impl LineFunction {
    /// Position and triad at `parameter ∈ [0, 1]`.
    #[must_use]
    pub fn evaluate(&self, parameter: f64) -> CurvePoint {
        CurvePoint {
            position: self.start + self.direction * parameter,
            rotation: self.rotation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_line_endpoints_and_length() {
        let line = LineParams::new(Point3::new(1.0, 2.0, 3.0), Point3::new(4.0, 6.0, 3.0));
        let generator = line.generator().unwrap();
        assert_relative_eq!(generator.length(), 5.0, epsilon = 1e-12);
        assert_relative_eq!(generator.start().position, line.start, epsilon = 1e-12);
        assert_relative_eq!(generator.end().position, line.end, epsilon = 1e-12);
    }

    #[test]
    fn test_line_triad_is_constant() {
        let generator = LineParams::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0))
            .generator()
            .unwrap();
        let a = generator.evaluate(0.0).rotation;
        let b = generator.evaluate(0.7).rotation;
        assert_eq!(a, b);
        assert_relative_eq!(a.tangent(), Vector3::new(1.0, 1.0, 1.0).normalize(), epsilon = 1e-12);
    }

    #[test]
    fn test_secondary_axis_tie_break() {
        // Tangent along x: both projections are zero, Y wins the tie
        let r = line_rotation(&Vector3::x()).unwrap();
        assert_relative_eq!(r.basis()[1], Vector3::y(), epsilon = 1e-12);

        // Tangent mostly along y: Z is the better secondary axis
        let r = line_rotation(&Vector3::new(0.1, 1.0, 0.0)).unwrap();
        assert_relative_eq!(r.basis()[2].dot(&Vector3::z()).abs(), 0.0, epsilon = 1e-12);
        assert!(r.basis()[1].z > 0.99);

        // Tangent along z: Y is chosen
        let r = line_rotation(&Vector3::z()).unwrap();
        assert_relative_eq!(r.basis()[1], Vector3::y(), epsilon = 1e-12);
    }

    #[test]
    fn test_tie_break_is_stable_under_round_off() {
        // Equal projections up to round-off keep the Y branch
        let t = Vector3::new(1.0, 1.0, 1.0 - 1e-14);
        let r = line_rotation(&t).unwrap();
        let expected = Rotation::from_basis(&t, &Vector3::y()).unwrap();
        assert!(r.is_close(&expected));
    }

    #[test]
    fn test_coincident_points_fail() {
        let p = Point3::new(1.0, 1.0, 1.0);
        let err = LineParams::new(p, p).generator().unwrap_err();
        assert!(err.is_invalid_geometry());
    }

    #[test]
    fn test_line_at_node() {
        let rotation = Rotation::from_basis(&Vector3::y(), &Vector3::z()).unwrap();
        let line = LineParams::at_node(Point3::new(1.0, 0.0, 0.0), &rotation, 2.0).unwrap();
        assert_relative_eq!(line.end, Point3::new(1.0, 2.0, 0.0), epsilon = 1e-12);

        assert!(LineParams::at_node(Point3::origin(), &rotation, -1.0)
            .unwrap_err()
            .is_invalid_geometry());
    }
}
