//! Helical curves.
//!
//! A helix is described by its axis, a start point (which fixes the radius)
//! and exactly two of helix angle, height and number of turns. Internally
//! the helix is a straight line in an unrolled plane wrapped around a
//! cylinder:
//!
//! - the unrolled plane is `x = radius`,
//! - `y` is the arc length along the circumference,
//! - `z` is the rise along the cylinder axis.
//!
//! Wrapping maps `(r, y, z)` to `(r cos φ, r sin φ, z)` with `φ = y / r` and
//! rotates each triad by `φ` about the cylinder axis. A final rigid
//! placement aligns the cylinder axis with the helix axis and the unrolled x
//! axis with the start radius vector.

use std::f64::consts::{FRAC_PI_2, TAU};

use nalgebra::{Point3, Unit, Vector3};
use tracing::warn;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::generator::{CurveFunction, CurveGenerator, CurvePoint};
use crate::line::{LineParams, line_rotation};
use crate::tolerance::{EPS_HELIX, EPS_POS};
use crate::{CurveError, Result, Rotation};

/// Input parameters of a helix.
///
/// Exactly two of `helix_angle`, `height` and `turns` have to be set.
///
/// # Example
///
/// ```
/// use beam_curves::{HelixParams, HelixShape};
/// use nalgebra::{Point3, Vector3};
///
/// let helix = HelixParams::new(Vector3::z(), Point3::origin(), Point3::new(1.0, 0.0, 0.0))
///     .with_height(2.0)
///     .with_turns(3.0);
///
/// let HelixShape::Helical(geometry) = helix.resolve().unwrap() else {
///     panic!("regular helix expected");
/// };
/// assert!((geometry.radius() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HelixParams {
    /// Direction of the helix axis.
    pub axis: Vector3<f64>,
    /// A point on the helix axis; does not need to lie in the start plane.
    pub axis_point: Point3<f64>,
    /// First point of the helix. Its distance to the axis is the radius.
    pub start_point: Point3<f64>,
    /// Helix (pitch) angle in radians.
    pub helix_angle: Option<f64>,
    /// Total rise along the axis.
    pub height: Option<f64>,
    /// Number of turns.
    pub turns: Option<f64>,
    /// Log a warning when the helix degenerates to a straight line.
    pub warn_straight_line: bool,
}

impl HelixParams {
    /// Create helix parameters without any of angle, height and turns set.
    #[must_use]
    pub fn new(axis: Vector3<f64>, axis_point: Point3<f64>, start_point: Point3<f64>) -> Self {
        Self {
            axis,
            axis_point,
            start_point,
            helix_angle: None,
            height: None,
            turns: None,
            warn_straight_line: true,
        }
    }

    /// Set the helix angle.
    #[must_use]
    pub fn with_helix_angle(mut self, helix_angle: f64) -> Self {
        self.helix_angle = Some(helix_angle);
        self
    }

    /// Set the height.
    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Set the number of turns.
    #[must_use]
    pub fn with_turns(mut self, turns: f64) -> Self {
        self.turns = Some(turns);
        self
    }

    /// Do not warn when the helix falls back to a straight line.
    #[must_use]
    pub fn without_line_warning(mut self) -> Self {
        self.warn_straight_line = false;
        self
    }

    /// Validate the parameters and decide between a regular helix and the
    /// straight-line fallback.
    ///
    /// A zero radius, a helix angle of 90° or zero turns degenerate to a
    /// straight line along the axis. This fallback needs the height; when it
    /// is available a warning is logged (unless disabled) and the line is
    /// returned.
    ///
    /// # Errors
    ///
    /// - [`CurveError::InvalidArgument`] if not exactly two of angle, height
    ///   and turns are given.
    /// - [`CurveError::InvalidGeometry`] for a helix angle of 0°, a zero
    ///   height, a zero axis, or a degenerate helix without a height.
    pub fn resolve(&self) -> Result<HelixShape> {
        let given = [self.helix_angle, self.height, self.turns]
            .iter()
            .filter(|value| value.is_some())
            .count();
        if given != 2 {
            return Err(CurveError::invalid_argument(format!(
                "exactly two of helix angle, height and turns must be provided, got {given}"
            )));
        }

        if let Some(angle) = self.helix_angle {
            if angle.sin().abs() <= EPS_HELIX {
                return Err(CurveError::invalid_geometry(
                    "helix angle is 0 degrees, change the angle for a feasible helix geometry",
                ));
            }
        }
        if let Some(height) = self.height {
            if height.abs() <= EPS_HELIX {
                return Err(CurveError::invalid_geometry(
                    "height of helix is 0, change the height for a feasible helix geometry",
                ));
            }
        }

        let axis = Unit::try_new(self.axis, EPS_POS)
            .ok_or_else(|| CurveError::invalid_geometry("helix axis has zero length"))?;
        let origin = self.axis_point
            + axis.into_inner() * (self.start_point - self.axis_point).dot(&axis);
        let radius = (self.start_point - origin).norm();

        let straight = radius <= EPS_HELIX
            || self
                .helix_angle
                .is_some_and(|angle| angle.cos().abs() <= EPS_HELIX)
            || self.turns.is_some_and(|turns| turns.abs() <= EPS_HELIX);

        if straight {
            let Some(height) = self.height else {
                return Err(CurveError::invalid_geometry(
                    "radius of helix is 0, helix angle is 90 degrees or turns is 0, \
                     but the height of the fallback line cannot be determined from \
                     helix angle and turns",
                ));
            };

            if self.warn_straight_line {
                warn!(
                    radius,
                    height, "helix degenerates to a straight line along its axis"
                );
            }

            let direction_sign = self.helix_angle.map_or(1.0, |angle| angle.sin().signum());
            let end = self.start_point + axis.into_inner() * (height * direction_sign);
            return Ok(HelixShape::StraightLine(LineParams::new(
                self.start_point,
                end,
            )));
        }

        let unrolled_end = match (self.helix_angle, self.height, self.turns) {
            (Some(angle), Some(height), None) => {
                let sign = angle.sin().signum();
                Point3::new(radius, sign * height / angle.tan(), sign * height)
            }
            (Some(angle), None, Some(turns)) => {
                let sign = angle.cos().signum();
                Point3::new(
                    radius,
                    sign * TAU * radius * turns,
                    sign * TAU * radius * turns.abs() * angle.tan(),
                )
            }
            (None, Some(height), Some(turns)) => {
                Point3::new(radius, TAU * radius * turns, height)
            }
            _ => {
                return Err(CurveError::invalid_argument(
                    "exactly two of helix angle, height and turns must be provided",
                ));
            }
        };

        Ok(HelixShape::Helical(HelixGeometry {
            axis: axis.into_inner(),
            origin,
            start_point: self.start_point,
            radius,
            unrolled_end,
        }))
    }

    /// Build a closed-form generator for the helix.
    ///
    /// The parameter interval is `[0, 1]` (normalized arc length). For a
    /// degenerate helix the straight-line generator is returned.
    ///
    /// # Errors
    ///
    /// See [`Self::resolve`].
    pub fn generator(&self) -> Result<CurveGenerator> {
        match self.resolve()? {
            HelixShape::Helical(geometry) => geometry.generator(),
            HelixShape::StraightLine(line) => line.generator(),
        }
    }
}

/// Outcome of resolving [`HelixParams`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HelixShape {
    /// A regular helix.
    Helical(HelixGeometry),
    /// The helix degenerated to a straight line along its axis.
    StraightLine(LineParams),
}

/// Resolved geometry of a regular helix.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HelixGeometry {
    axis: Vector3<f64>,
    origin: Point3<f64>,
    start_point: Point3<f64>,
    radius: f64,
    unrolled_end: Point3<f64>,
}

impl HelixGeometry {
    /// Normalized helix axis.
    #[must_use]
    pub fn axis(&self) -> Vector3<f64> {
        self.axis
    }

    /// Projection of the start point onto the axis.
    #[must_use]
    pub fn origin(&self) -> Point3<f64> {
        self.origin
    }

    /// First point of the helix.
    #[must_use]
    pub fn start_point(&self) -> Point3<f64> {
        self.start_point
    }

    /// Radius of the helix.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Start of the equivalent line in the unrolled plane, `(r, 0, 0)`.
    #[must_use]
    pub fn unrolled_start(&self) -> Point3<f64> {
        Point3::new(self.radius, 0.0, 0.0)
    }

    /// End of the equivalent line in the unrolled plane.
    #[must_use]
    pub fn unrolled_end(&self) -> Point3<f64> {
        self.unrolled_end
    }

    /// The equivalent straight line in the unrolled plane.
    #[must_use]
    pub fn unrolled_line(&self) -> LineParams {
        LineParams::new(self.unrolled_start(), self.unrolled_end)
    }

    /// Arc length of the helix.
    #[must_use]
    pub fn arc_length(&self) -> f64 {
        (self.unrolled_end - self.unrolled_start()).norm()
    }

    /// Rise along the axis.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.unrolled_end.z
    }

    /// Signed number of turns.
    #[must_use]
    pub fn turns(&self) -> f64 {
        self.unrolled_end.y / (TAU * self.radius)
    }

    /// Rigid rotation from the wrapped coordinate system (cylinder axis
    /// along z, first node on the x axis) to the helix placement.
    ///
    /// # Errors
    ///
    /// Propagates [`CurveError::DegenerateBasis`], which cannot occur for a
    /// resolved helix since the radius vector is orthogonal to the axis.
    pub fn placement(&self) -> Result<Rotation> {
        let radius_vector = self.start_point - self.origin;
        Ok(Rotation::from_basis(&radius_vector, &self.axis)?
            * Rotation::from_axis_angle(&Vector3::x(), -FRAC_PI_2))
    }

    /// Build the closed-form generator with parameter interval `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Propagates errors from building the unrolled line triad and the
    /// placement rotation.
    pub fn generator(&self) -> Result<CurveGenerator> {
        let unrolled_direction = self.unrolled_end - self.unrolled_start();
        let function = HelixFunction {
            placement: self.placement()?,
            origin: self.origin,
            radius: self.radius,
            unrolled_direction,
            line_rotation: line_rotation(&unrolled_direction)?,
        };
        Ok(CurveGenerator::new(
            CurveFunction::Helix(function),
            (0.0, 1.0),
            self.arc_length(),
        ))
    }
}

/// Closed-form helix: the unrolled line, wrapped and placed in one step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HelixFunction {
    placement: Rotation,
    origin: Point3<f64>,
    radius: f64,
    unrolled_direction: Vector3<f64>,
    line_rotation: Rotation,
}

impl HelixFunction {
    /// Position and triad at normalized arc length `parameter ∈ [0, 1]`.
    #[must_use]
    pub fn evaluate(&self, parameter: f64) -> CurvePoint {
        let unrolled = self.unrolled_direction * parameter;
        let phi = unrolled.y / self.radius;
        let wrapped = Vector3::new(self.radius * phi.cos(), self.radius * phi.sin(), unrolled.z);
        let wrap_rotation = Rotation::from_axis_angle(&Vector3::z(), phi);

        CurvePoint {
            position: self.origin + self.placement.apply(&wrapped),
            rotation: self.placement * wrap_rotation * self.line_rotation,
        }
    }
}
