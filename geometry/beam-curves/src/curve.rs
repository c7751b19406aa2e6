//! A closed set of curve descriptions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::arc::{ArcAtNodeParams, ArcAxisParams, ArcRotationParams, PlanarArcParams};
use crate::generator::CurveGenerator;
use crate::helix::HelixParams;
use crate::line::LineParams;
use crate::{Result, Rotation};

/// Any curve family this crate can turn into a [`CurveGenerator`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CurveSpec {
    /// Straight line between two points.
    Line(LineParams),
    /// Arc around an axis through a point.
    ArcViaAxis(ArcAxisParams),
    /// Arc given by center, axis rotation and radius.
    ArcViaRotation(ArcRotationParams),
    /// Arc in the global XY plane.
    PlanarArc(PlanarArcParams),
    /// Arc continuing an existing triad.
    ArcAtNode(ArcAtNodeParams),
    /// Helix around an axis.
    Helix(HelixParams),
}

impl CurveSpec {
    /// Short name of the curve family.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Line(_) => "line",
            Self::ArcViaAxis(_) => "arc via axis",
            Self::ArcViaRotation(_) => "arc via rotation",
            Self::PlanarArc(_) => "planar arc",
            Self::ArcAtNode(_) => "arc at node",
            Self::Helix(_) => "helix",
        }
    }

    /// Build the generator of the curve.
    ///
    /// `start_rotation` replaces the start triad of arcs verbatim; the mesh
    /// functions pass the triad of a reused start node here. Lines and
    /// helices have a fixed triad and ignore it, as does an arc at a node,
    /// which already carries its start triad.
    ///
    /// # Errors
    ///
    /// Propagates the errors of the individual curve families.
    pub fn generator(&self, start_rotation: Option<Rotation>) -> Result<CurveGenerator> {
        match self {
            Self::Line(line) => line.generator(),
            Self::ArcViaAxis(arc) => arc.generator(start_rotation),
            Self::ArcViaRotation(arc) => arc.generator(start_rotation),
            Self::PlanarArc(arc) => arc.generator(start_rotation),
            Self::ArcAtNode(arc) => arc.generator(),
            Self::Helix(helix) => helix.generator(),
        }
    }
}

impl From<LineParams> for CurveSpec {
    fn from(params: LineParams) -> Self {
        Self::Line(params)
    }
}

impl From<ArcAxisParams> for CurveSpec {
    fn from(params: ArcAxisParams) -> Self {
        Self::ArcViaAxis(params)
    }
}

impl From<ArcRotationParams> for CurveSpec {
    fn from(params: ArcRotationParams) -> Self {
        Self::ArcViaRotation(params)
    }
}

impl From<PlanarArcParams> for CurveSpec {
    fn from(params: PlanarArcParams) -> Self {
        Self::PlanarArc(params)
    }
}

impl From<ArcAtNodeParams> for CurveSpec {
    fn from(params: ArcAtNodeParams) -> Self {
        Self::ArcAtNode(params)
    }
}

impl From<HelixParams> for CurveSpec {
    fn from(params: HelixParams) -> Self {
        Self::Helix(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{Point3, Vector3};
    use std::f64::consts::PI;

    #[test]
    fn test_dispatch_matches_direct_generators() {
        let line = LineParams::new(Point3::origin(), Point3::new(0.0, 3.0, 4.0));
        let spec = CurveSpec::from(line);
        assert_eq!(spec.kind(), "line");
        assert_eq!(spec.generator(None).unwrap(), line.generator().unwrap());

        let arc = PlanarArcParams::new(Point3::origin(), 2.0, 0.0, PI);
        let spec = CurveSpec::from(arc);
        assert_relative_eq!(spec.generator(None).unwrap().length(), 2.0 * PI, epsilon = 1e-12);
    }

    #[test]
    fn test_start_rotation_only_affects_arcs() {
        let rotation = Rotation::from_axis_angle(&Vector3::x(), 0.3);
        let line = CurveSpec::from(LineParams::new(Point3::origin(), Point3::new(1.0, 0.0, 0.0)));
        assert_eq!(
            line.generator(Some(rotation)).unwrap(),
            line.generator(None).unwrap()
        );

        let arc = CurveSpec::from(ArcAxisParams::new(
            Vector3::z(),
            Point3::origin(),
            Point3::new(1.0, 0.0, 0.0),
            1.0,
        ));
        let start = arc.generator(Some(rotation)).unwrap().start();
        assert!(start.rotation.is_close(&rotation));
    }

    #[test]
    fn test_errors_propagate() {
        let helix = CurveSpec::from(HelixParams::new(
            Vector3::z(),
            Point3::origin(),
            Point3::new(1.0, 0.0, 0.0),
        ));
        assert!(helix.generator(None).unwrap_err().is_invalid_argument());
    }
}
