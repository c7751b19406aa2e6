//! Curve generators: a position and triad function over a parameter interval.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::arc::ArcFunction;
use crate::helix::HelixFunction;
use crate::line::LineFunction;
use crate::Rotation;

/// Position and triad of a curve at one parameter value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurvePoint {
    /// Position on the curve.
    pub position: Point3<f64>,
    /// Material triad at that position.
    pub rotation: Rotation,
}

/// The closed set of curve functions a generator can evaluate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CurveFunction {
    /// Straight line with a constant triad.
    Line(LineFunction),
    /// Circular arc, parameterized by the rotation angle.
    Arc(ArcFunction),
    /// Helix, parameterized by the normalized arc length.
    Helix(HelixFunction),
}

impl CurveFunction {
    /// Evaluate the position and triad at a curve parameter.
    #[must_use]
    pub fn evaluate(&self, parameter: f64) -> CurvePoint {
        match self {
            Self::Line(line) => line.evaluate(parameter),
            Self::Arc(arc) => arc.evaluate(parameter),
            Self::Helix(helix) => helix.evaluate(parameter),
        }
    }
}

/// A validated curve: its function, parameter interval and arc length.
///
/// The parameter is not necessarily the arc length. The arc length of the
/// whole interval is stored separately and is used to derive element counts
/// from a target element length.
///
/// # Example
///
/// ```
/// use beam_curves::LineParams;
/// use nalgebra::Point3;
///
/// let generator = LineParams::new(Point3::origin(), Point3::new(4.0, 0.0, 0.0))
///     .generator()
///     .unwrap();
///
/// assert_eq!(generator.interval(), (0.0, 1.0));
/// assert!((generator.length() - 4.0).abs() < 1e-12);
/// let mid = generator.evaluate(0.5);
/// assert!((mid.position.x - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurveGenerator {
    function: CurveFunction,
    interval: (f64, f64),
    length: f64,
}

impl CurveGenerator {
    /// Create a generator from a function, its interval and the arc length
    /// of that interval.
    #[must_use]
    pub fn new(function: CurveFunction, interval: (f64, f64), length: f64) -> Self {
        Self {
            function,
            interval,
            length,
        }
    }

    /// The curve function.
    #[must_use]
    pub fn function(&self) -> &CurveFunction {
        &self.function
    }

    /// The parameter interval `(a, b)`.
    #[must_use]
    pub fn interval(&self) -> (f64, f64) {
        self.interval
    }

    /// The arc length of the parameter interval.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Evaluate the curve at a parameter value.
    #[must_use]
    pub fn evaluate(&self, parameter: f64) -> CurvePoint {
        self.function.evaluate(parameter)
    }

    /// Evaluate the curve at a normalized position `s ∈ [0, 1]` of the
    /// interval.
    #[must_use]
    pub fn evaluate_normalized(&self, s: f64) -> CurvePoint {
        let (a, b) = self.interval;
        self.evaluate(a + s * (b - a))
    }

    /// Position and triad at the start of the interval.
    #[must_use]
    pub fn start(&self) -> CurvePoint {
        self.evaluate(self.interval.0)
    }

    /// Position and triad at the end of the interval.
    #[must_use]
    pub fn end(&self) -> CurvePoint {
        self.evaluate(self.interval.1)
    }
}
