//! Circular arc beams.

use beam_curves::{ArcAtNodeParams, ArcAxisParams, ArcRotationParams, PlanarArcParams, Rotation};
use beam_mesh_types::{BeamType, GeometryName, MaterialId, Mesh, NodeId};
use nalgebra::Vector3;

use crate::line::with_start_node;
use crate::{BeamMeshOptions, BeamMeshResult, create_beam_mesh_function};

/// Create an arc around an axis through a point, starting at a given point.
///
/// The triad at the start of the arc has the tangent as first, the
/// direction towards the center as second and the axis as third basis
/// vector. It is carried along by the rotation about the axis. When the
/// options name a start node, that node's triad is used as the start triad
/// instead.
///
/// # Errors
///
/// Returns [`BeamMeshError::InvalidGeometry`](crate::BeamMeshError) for a
/// non-positive angle or a start point on the axis,
/// [`BeamMeshError::InvalidArgument`](crate::BeamMeshError) for an unknown
/// start node, and the errors of [`create_beam_mesh_function`].
///
/// # Example
///
/// ```
/// use beam_curves::ArcAxisParams;
/// use beam_mesh_from_curves::{BeamMeshOptions, create_beam_mesh_arc_segment_via_axis};
/// use beam_mesh_types::{BeamMaterial, BeamTheory, BeamType, Mesh, Point3, Vector3};
///
/// let mut mesh = Mesh::new();
/// let material = mesh.add_material(BeamMaterial::new(BeamTheory::Reissner, 0.1));
/// let arc = ArcAxisParams::new(
///     Vector3::z(),
///     Point3::origin(),
///     Point3::new(1.0, 0.0, 0.0),
///     std::f64::consts::PI,
/// );
///
/// create_beam_mesh_arc_segment_via_axis(
///     &mut mesh,
///     BeamType::ReissnerLine2,
///     material,
///     &arc,
///     &BeamMeshOptions::n_el(6),
/// )
/// .unwrap();
///
/// let last = mesh.nodes().last().unwrap().position;
/// assert!((last - Point3::new(-1.0, 0.0, 0.0)).norm() < 1e-12);
/// ```
pub fn create_beam_mesh_arc_segment_via_axis(
    mesh: &mut Mesh,
    beam_type: BeamType,
    material: MaterialId,
    arc: &ArcAxisParams,
    options: &BeamMeshOptions,
) -> BeamMeshResult<GeometryName> {
    let generator = arc.generator(start_node_rotation(mesh, options)?)?;
    create_beam_mesh_function(mesh, beam_type, material, &generator, options)
}

/// Triad of the start node named in the options, if any.
pub(crate) fn start_node_rotation(
    mesh: &Mesh,
    options: &BeamMeshOptions,
) -> BeamMeshResult<Option<Rotation>> {
    options
        .start_node
        .map(|id| mesh.try_node(id).map(|node| node.rotation))
        .transpose()
        .map_err(Into::into)
}

/// Create an arc from its center, a rotation and a radius.
///
/// The third basis vector of the rotation is the arc axis; the arc starts at
/// `center - radius * e2`.
///
/// # Errors
///
/// Same as [`create_beam_mesh_arc_segment_via_axis`].
pub fn create_beam_mesh_arc_segment_via_rotation(
    mesh: &mut Mesh,
    beam_type: BeamType,
    material: MaterialId,
    arc: &ArcRotationParams,
    options: &BeamMeshOptions,
) -> BeamMeshResult<GeometryName> {
    create_beam_mesh_arc_segment_via_axis(mesh, beam_type, material, &arc.to_axis_params(), options)
}

/// Create an arc in the x-y plane between two polar angles.
///
/// # Errors
///
/// Returns [`BeamMeshError::InvalidGeometry`](crate::BeamMeshError) if the
/// center is not in the x-y plane or both angles are equal, and the errors
/// of [`create_beam_mesh_function`].
pub fn create_beam_mesh_arc_segment_2d(
    mesh: &mut Mesh,
    beam_type: BeamType,
    material: MaterialId,
    arc: &PlanarArcParams,
    options: &BeamMeshOptions,
) -> BeamMeshResult<GeometryName> {
    create_beam_mesh_arc_segment_via_axis(mesh, beam_type, material, &arc.to_axis_params()?, options)
}

/// Create an arc that continues an existing node without a kink.
///
/// The arc axis is `arc_axis_normal`, which has to be perpendicular to the
/// node tangent. A negative angle bends the arc to the other side. The
/// node's triad is the start triad of the arc.
///
/// # Errors
///
/// Returns [`BeamMeshError::InvalidArgument`](crate::BeamMeshError) for an
/// unknown node or a conflicting start node in the options,
/// [`BeamMeshError::InvalidGeometry`](crate::BeamMeshError) if the normal is
/// not perpendicular to the tangent, and the errors of
/// [`create_beam_mesh_function`].
#[allow(clippy::too_many_arguments)]
pub fn create_beam_mesh_arc_at_node(
    mesh: &mut Mesh,
    beam_type: BeamType,
    material: MaterialId,
    start_node: NodeId,
    arc_axis_normal: Vector3<f64>,
    radius: f64,
    angle: f64,
    options: &BeamMeshOptions,
) -> BeamMeshResult<GeometryName> {
    let options = with_start_node(options, start_node)?;
    let node = mesh.try_node(start_node)?;
    let arc = ArcAtNodeParams::new(node.position, node.rotation, arc_axis_normal, radius, angle);
    create_beam_mesh_function(mesh, beam_type, material, &arc.generator()?, &options)
}
