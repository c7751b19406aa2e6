//! Helical beams.
//!
//! A helix is meshed as a straight line in the unrolled cylinder plane,
//! wrapped around the cylinder and moved into place. The straight line
//! keeps the element layout of the line, so node positions along the helix
//! are spaced equally in arc length.

use beam_curves::{HelixParams, HelixShape};
use beam_mesh_types::{BeamType, GeometryName, MaterialId, Mesh};
use tracing::debug;

use crate::{BeamMeshError, BeamMeshOptions, BeamMeshResult, create_beam_mesh_function};

/// Create a helix around an axis.
///
/// Exactly two of helix angle, height and turns have to be set in `helix`.
/// A helix that degenerates to a straight line along its axis (zero
/// radius, helix angle of 90° or zero turns) is meshed as that line when
/// its height is known.
///
/// The curve is built in a separate mesh and merged into `mesh` afterwards,
/// so connecting to existing nodes is not supported.
///
/// # Errors
///
/// - [`BeamMeshError::InvalidArgument`] if a start or end node is given, or
///   not exactly two of angle, height and turns are set.
/// - [`BeamMeshError::InvalidGeometry`] for a zero helix angle, zero height,
///   or a degenerate helix without height.
/// - The errors of [`create_beam_mesh_function`].
///
/// # Example
///
/// ```
/// use beam_curves::HelixParams;
/// use beam_mesh_from_curves::{BeamMeshOptions, create_beam_mesh_helix};
/// use beam_mesh_types::{BeamMaterial, BeamTheory, BeamType, Mesh, Point3, Vector3};
///
/// let mut mesh = Mesh::new();
/// let material = mesh.add_material(BeamMaterial::new(BeamTheory::Reissner, 0.1));
/// let helix = HelixParams::new(Vector3::z(), Point3::origin(), Point3::new(1.0, 0.0, 0.0))
///     .with_height(2.0)
///     .with_turns(1.0);
///
/// let sets = create_beam_mesh_helix(
///     &mut mesh,
///     BeamType::ReissnerLine2,
///     material,
///     &helix,
///     &BeamMeshOptions::n_el(8),
/// )
/// .unwrap();
///
/// let end = mesh.node(sets.first_node("end").unwrap()).unwrap().position;
/// assert!((end - Point3::new(1.0, 0.0, 2.0)).norm() < 1e-10);
/// ```
pub fn create_beam_mesh_helix(
    mesh: &mut Mesh,
    beam_type: BeamType,
    material: MaterialId,
    helix: &HelixParams,
    options: &BeamMeshOptions,
) -> BeamMeshResult<GeometryName> {
    if options.start_node.is_some() || options.end_node.is_some() {
        return Err(BeamMeshError::invalid_argument(
            "a helix can not be connected to existing start or end nodes",
        ));
    }

    let geometry = match helix.resolve()? {
        HelixShape::Helical(geometry) => geometry,
        HelixShape::StraightLine(line) => {
            return create_beam_mesh_function(
                mesh,
                beam_type,
                material,
                &line.generator()?,
                options,
            );
        }
    };

    mesh.check_material(beam_type, material)?;
    let mut unrolled = Mesh::new();
    let unrolled_material = match mesh.material(material) {
        Some(registered) => unrolled.add_material(*registered),
        None => {
            return Err(BeamMeshError::invalid_argument(format!(
                "material {material} is not part of the mesh"
            )));
        }
    };

    let line_options = BeamMeshOptions {
        add_sets: false,
        ..options.clone()
    };
    let sets = create_beam_mesh_function(
        &mut unrolled,
        beam_type,
        unrolled_material,
        &geometry.unrolled_line().generator()?,
        &line_options,
    )?;

    unrolled.wrap_around_cylinder(None)?;
    unrolled.rotate(&geometry.placement()?, None);
    unrolled.translate(geometry.origin().coords);

    debug!(
        "Wrapped helix with radius {} and {} turns",
        geometry.radius(),
        geometry.turns()
    );

    let offset = mesh.add_mesh(unrolled);
    let sets = offset.geometry_name(&sets);
    if options.add_sets {
        mesh.add_geometry_name(sets.clone());
    }
    Ok(sets)
}
