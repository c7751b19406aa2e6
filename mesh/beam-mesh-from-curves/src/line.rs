//! Straight beams.

use beam_curves::LineParams;
use beam_mesh_types::{BeamType, GeometryName, MaterialId, Mesh, NodeId};
use nalgebra::Point3;

use crate::{BeamMeshError, BeamMeshOptions, BeamMeshResult, create_beam_mesh_function};

/// Create a straight beam from `start` to `end`.
///
/// The triad is constant along the line; see
/// [`line_rotation`](beam_curves::line_rotation) for how its secondary axis
/// is chosen.
///
/// # Errors
///
/// Returns [`BeamMeshError::InvalidGeometry`] if both points coincide, and
/// the errors of [`create_beam_mesh_function`].
///
/// # Example
///
/// ```
/// use beam_mesh_from_curves::{BeamMeshOptions, create_beam_mesh_line};
/// use beam_mesh_types::{BeamMaterial, BeamTheory, BeamType, Mesh, Point3};
///
/// let mut mesh = Mesh::new();
/// let material = mesh.add_material(BeamMaterial::new(BeamTheory::Reissner, 0.1));
///
/// let sets = create_beam_mesh_line(
///     &mut mesh,
///     BeamType::ReissnerLine2,
///     material,
///     Point3::origin(),
///     Point3::new(10.0, 0.0, 0.0),
///     &BeamMeshOptions::l_el(3.0),
/// )
/// .unwrap();
///
/// assert_eq!(mesh.element_count(), 3);
/// assert_eq!(sets.first_node("end").map(|id| id.index()), Some(3));
/// ```
pub fn create_beam_mesh_line(
    mesh: &mut Mesh,
    beam_type: BeamType,
    material: MaterialId,
    start: Point3<f64>,
    end: Point3<f64>,
    options: &BeamMeshOptions,
) -> BeamMeshResult<GeometryName> {
    let generator = LineParams::new(start, end).generator()?;
    create_beam_mesh_function(mesh, beam_type, material, &generator, options)
}

/// Create a straight beam of `length` that continues an existing node along
/// its tangent.
///
/// # Errors
///
/// Returns [`BeamMeshError::InvalidArgument`] if the options name a
/// different start node, [`BeamMeshError::InvalidGeometry`] for a
/// non-positive length, and the errors of [`create_beam_mesh_function`].
pub fn create_beam_mesh_line_at_node(
    mesh: &mut Mesh,
    beam_type: BeamType,
    material: MaterialId,
    start_node: NodeId,
    length: f64,
    options: &BeamMeshOptions,
) -> BeamMeshResult<GeometryName> {
    let options = with_start_node(options, start_node)?;
    let node = mesh.try_node(start_node)?;
    let line = LineParams::at_node(node.position, &node.rotation, length)?;
    create_beam_mesh_function(mesh, beam_type, material, &line.generator()?, &options)
}

/// Copy of the options that starts at `node`.
pub(crate) fn with_start_node(
    options: &BeamMeshOptions,
    node: NodeId,
) -> BeamMeshResult<BeamMeshOptions> {
    match options.start_node {
        Some(other) if other != node => Err(BeamMeshError::invalid_argument(format!(
            "start node {node} conflicts with start node {other} in the options"
        ))),
        _ => Ok(options.clone().with_start_node(node)),
    }
}
