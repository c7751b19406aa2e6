//! Circular arc segments.
//!
//! All arc variants reduce to [`ArcAxisParams`]: a rotation axis, a point on
//! that axis, a start point and a positive central angle. The curve
//! parameter of the resulting generator is the rotation angle, so the
//! interval is `[0, angle]` and the arc length is `angle * radius`.

use nalgebra::{Matrix3, Point3, Unit, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::generator::{CurveFunction, CurveGenerator, CurvePoint};
use crate::tolerance::EPS_POS;
use crate::{CurveError, Result, Rotation};

/// Arc defined by a rotation axis, a point on the axis and a start point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArcAxisParams {
    /// Rotation axis of the arc (any length).
    pub axis: Vector3<f64>,
    /// A point on the rotation axis; not necessarily the arc center.
    pub axis_point: Point3<f64>,
    /// First point of the arc.
    pub start_point: Point3<f64>,
    /// Central angle in radians; must be positive.
    pub angle: f64,
}

impl ArcAxisParams {
    /// Create arc parameters.
    #[must_use]
    pub fn new(
        axis: Vector3<f64>,
        axis_point: Point3<f64>,
        start_point: Point3<f64>,
        angle: f64,
    ) -> Self {
        Self {
            axis,
            axis_point,
            start_point,
            angle,
        }
    }

    /// Build the curve generator.
    ///
    /// The triad at the start of the arc has the arc tangent as first basis
    /// vector, the direction towards the center as second and the rotation
    /// axis as third basis vector. If `start_rotation` is given, it is used
    /// verbatim instead, so an arc can continue an existing curve without a
    /// jump in the triad.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidGeometry`] if the angle is not positive,
    /// the axis has zero length or the start point lies on the axis.
    pub fn generator(&self, start_rotation: Option<Rotation>) -> Result<CurveGenerator> {
        if !(self.angle > 0.0) || !self.angle.is_finite() {
            return Err(CurveError::invalid_geometry(format!(
                "the angle of an arc segment has to be a positive number, got {}",
                self.angle
            )));
        }

        let axis = Unit::try_new(self.axis, EPS_POS)
            .ok_or_else(|| CurveError::invalid_geometry("rotation axis of an arc has zero length"))?;

        let diff = self.start_point - self.axis_point;
        let radius_vector = diff - axis.into_inner() * diff.dot(&axis);
        let radius = radius_vector.norm();
        if !(radius > EPS_POS) {
            return Err(CurveError::invalid_geometry(
                "start point of an arc lies on its rotation axis",
            ));
        }
        let center = self.start_point - radius_vector;

        let start_rotation = match start_rotation {
            Some(rotation) => rotation,
            None => {
                let tangent = axis.cross(&radius_vector).normalize();
                Rotation::from_rotation_matrix(&Matrix3::from_columns(&[
                    tangent,
                    -radius_vector / radius,
                    axis.into_inner(),
                ]))?
            }
        };

        Ok(CurveGenerator::new(
            CurveFunction::Arc(ArcFunction {
                center,
                radius_vector,
                axis: axis.into_inner(),
                start_rotation,
            }),
            (0.0, self.angle),
            self.angle * radius,
        ))
    }

    /// Center and radius of the arc (projection of the start point onto the
    /// axis).
    #[must_use]
    pub fn center_and_radius(&self) -> Option<(Point3<f64>, f64)> {
        let axis = Unit::try_new(self.axis, EPS_POS)?;
        let diff = self.start_point - self.axis_point;
        let radius_vector = diff - axis.into_inner() * diff.dot(&axis);
        Some((self.start_point - radius_vector, radius_vector.norm()))
    }
}

/// Arc defined by its center and the triad at its start.
///
/// The third basis vector of `axis_rotation` is the rotation axis, the arc
/// starts in direction of the first basis vector and the start point lies at
/// `center - radius * e2`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArcRotationParams {
    /// Center of the arc.
    pub center: Point3<f64>,
    /// Orientation of the arc plane and start direction.
    pub axis_rotation: Rotation,
    /// Radius of the arc.
    pub radius: f64,
    /// Central angle in radians; must be positive.
    pub angle: f64,
}

impl ArcRotationParams {
    /// Create arc parameters.
    #[must_use]
    pub fn new(center: Point3<f64>, axis_rotation: Rotation, radius: f64, angle: f64) -> Self {
        Self {
            center,
            axis_rotation,
            radius,
            angle,
        }
    }

    /// The equivalent axis-based description.
    #[must_use]
    pub fn to_axis_params(&self) -> ArcAxisParams {
        let axis = self.axis_rotation.apply(&Vector3::z());
        let start_point = self.center + self.axis_rotation.apply(&-Vector3::y()) * self.radius;
        ArcAxisParams::new(axis, self.center, start_point, self.angle)
    }

    /// Build the curve generator.
    ///
    /// # Errors
    ///
    /// See [`ArcAxisParams::generator`].
    pub fn generator(&self, start_rotation: Option<Rotation>) -> Result<CurveGenerator> {
        self.to_axis_params().generator(start_rotation)
    }
}

/// Arc in the x-y plane between two polar angles.
///
/// The arc runs counter-clockwise if `phi_end > phi_start` and clockwise
/// otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanarArcParams {
    /// Center of the arc; its z coordinate must be zero.
    pub center: Point3<f64>,
    /// Radius of the arc.
    pub radius: f64,
    /// Polar angle of the start point w.r.t. the x axis.
    pub phi_start: f64,
    /// Polar angle of the end point w.r.t. the x axis.
    pub phi_end: f64,
}

impl PlanarArcParams {
    /// Create planar arc parameters.
    #[must_use]
    pub fn new(center: Point3<f64>, radius: f64, phi_start: f64, phi_end: f64) -> Self {
        Self {
            center,
            radius,
            phi_start,
            phi_end,
        }
    }

    /// The equivalent axis-based description.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidGeometry`] if the center is not in the
    /// x-y plane.
    pub fn to_axis_params(&self) -> Result<ArcAxisParams> {
        if self.center.z.abs() > EPS_POS {
            return Err(CurveError::invalid_geometry(format!(
                "the z-value of a planar arc center has to be 0, got {}",
                self.center.z
            )));
        }

        let angle = self.phi_end - self.phi_start;
        let start_point = self.center
            + Rotation::from_axis_angle(&Vector3::z(), self.phi_start).apply(&Vector3::x())
                * self.radius;
        let axis = if angle > 0.0 {
            Vector3::z()
        } else {
            -Vector3::z()
        };
        Ok(ArcAxisParams::new(axis, self.center, start_point, angle.abs()))
    }

    /// Build the curve generator.
    ///
    /// # Errors
    ///
    /// See [`Self::to_axis_params`] and [`ArcAxisParams::generator`].
    pub fn generator(&self, start_rotation: Option<Rotation>) -> Result<CurveGenerator> {
        self.to_axis_params()?.generator(start_rotation)
    }
}

/// Arc that continues tangentially from an existing triad.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArcAtNodeParams {
    /// Position of the node the arc starts at.
    pub position: Point3<f64>,
    /// Triad of the node the arc starts at.
    pub rotation: Rotation,
    /// Rotation axis of the arc; must be perpendicular to the node tangent.
    pub arc_axis_normal: Vector3<f64>,
    /// Radius of the arc.
    pub radius: f64,
    /// Central angle. A negative angle bends the arc the other way, as if
    /// the normal had the opposite sign.
    pub angle: f64,
}

impl ArcAtNodeParams {
    /// Create parameters for an arc starting at a node.
    #[must_use]
    pub fn new(
        position: Point3<f64>,
        rotation: Rotation,
        arc_axis_normal: Vector3<f64>,
        radius: f64,
        angle: f64,
    ) -> Self {
        Self {
            position,
            rotation,
            arc_axis_normal,
            radius,
            angle,
        }
    }

    /// The equivalent axis-based description.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidGeometry`] if the normal is not
    /// perpendicular to the node tangent or has zero length.
    pub fn to_axis_params(&self) -> Result<ArcAxisParams> {
        let normal = if self.angle < 0.0 {
            -self.arc_axis_normal
        } else {
            self.arc_axis_normal
        };

        let tangent = self.rotation.tangent();
        if tangent.dot(&normal).abs() > EPS_POS {
            return Err(CurveError::invalid_geometry(
                "the arc normal has to be perpendicular to the tangent in the start node",
            ));
        }

        let center_direction = tangent
            .cross(&normal)
            .try_normalize(EPS_POS)
            .ok_or_else(|| CurveError::invalid_geometry("arc normal has zero length"))?;
        let center = self.position - center_direction * self.radius;

        Ok(ArcAxisParams::new(
            normal,
            center,
            self.position,
            self.angle.abs(),
        ))
    }

    /// Build the curve generator. The node triad is the start triad.
    ///
    /// # Errors
    ///
    /// See [`Self::to_axis_params`] and [`ArcAxisParams::generator`].
    pub fn generator(&self) -> Result<CurveGenerator> {
        self.to_axis_params()?.generator(Some(self.rotation))
    }
}

/// Rotation of a radius vector and a start triad about a fixed axis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArcFunction {
    center: Point3<f64>,
    radius_vector: Vector3<f64>,
    axis: Vector3<f64>,
    start_rotation: Rotation,
}

impl ArcFunction {
    /// Position and triad after rotating by `phi` radians.
    #[must_use]
    pub fn evaluate(&self, phi: f64) -> CurvePoint {
        let arc_rotation = Rotation::from_axis_angle(&self.axis, phi);
        CurvePoint {
            position: self.center + arc_rotation.apply(&self.radius_vector),
            rotation: arc_rotation * self.start_rotation,
        }
    }

    /// Center of the arc.
    #[must_use]
    pub fn center(&self) -> Point3<f64> {
        self.center
    }

    /// Radius of the arc.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius_vector.norm()
    }
}
